//! Centralized reader for the environment variables folio understands.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const CACHE_DIR: &str = "FOLIO_CACHE_DIR";
const CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";
const LOG: &str = "FOLIO_LOG";
const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Snapshot of folio-related environment variables at load time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// Overrides the cache directory (preferences, logs).
    pub cache_dir: Option<String>,

    /// Overrides the directory searched for `config.yaml`.
    pub config_dir: Option<String>,

    /// `tracing` filter directive, e.g. "folio=debug".
    pub log: Option<String>,

    /// Token sent as a bearer credential to raise the GitHub rate limit.
    pub github_token: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all variables from the current process.
    pub fn load() -> Self {
        Self {
            cache_dir: non_empty_var(CACHE_DIR),
            config_dir: non_empty_var(CONFIG_DIR),
            log: non_empty_var(LOG),
            github_token: non_empty_var(GITHUB_TOKEN),
        }
    }

    /// Returns the env var name holding the log filter (used in error hints).
    pub fn log_name() -> &'static str {
        LOG
    }
}
