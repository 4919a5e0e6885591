//! Directory layout for folio's config, preferences and logs.

use std::path::PathBuf;

use super::env_var::EnvVars;

const APP_DIR: &str = "folio";

/// Directory searched for `config.yaml` / `config.yml`.
/// Returns $FOLIO_CONFIG_DIR, else ~/.config/folio (or $XDG_CONFIG_HOME/folio).
pub fn config_dir(env: &EnvVars) -> Option<PathBuf> {
    if let Some(dir) = &env.config_dir {
        return Some(PathBuf::from(dir));
    }
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join(APP_DIR))
}

/// Base cache directory.
/// Returns $FOLIO_CACHE_DIR, else ~/.cache/folio (or $XDG_CACHE_HOME/folio).
pub fn cache_dir(env: &EnvVars) -> Option<PathBuf> {
    if let Some(dir) = &env.cache_dir {
        return Some(PathBuf::from(dir));
    }
    xdg_dir("XDG_CACHE_HOME", ".cache").map(|d| d.join(APP_DIR))
}

/// Persisted preferences (the theme key lives here).
/// Returns <cache_dir>/preferences.json
pub fn preferences_file(env: &EnvVars) -> Option<PathBuf> {
    cache_dir(env).map(|d| d.join("preferences.json"))
}

/// Directory for log files written when file logging is enabled.
/// Returns <cache_dir>/logs
pub fn log_dir(env: &EnvVars) -> Option<PathBuf> {
    cache_dir(env).map(|d| d.join("logs"))
}

/// Resolves an XDG base directory, falling back to `$HOME/<fallback>`.
/// Empty values are treated as unset per XDG Base Directory Specification.
fn xdg_dir(var: &str, fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = std::env::var(var).ok().filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(fallback))
}
