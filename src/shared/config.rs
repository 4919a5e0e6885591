use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

use super::dirs;
use super::env_var::EnvVars;

/// Top-level configuration for folio.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub listing endpoint settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Project showcase settings.
    #[serde(default)]
    pub projects: ProjectsConfig,

    /// Card reveal settings.
    #[serde(default)]
    pub reveal: RevealConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub listing endpoint configuration.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// User whose repositories are showcased. Can be overridden on the command line.
    #[serde(default)]
    pub user: Option<String>,

    /// REST API base URL (default: "https://api.github.com").
    #[serde(default = "default_api_base")]
    #[schemars(default = "default_api_base")]
    pub api_base: String,

    /// Items requested per page (default: 100).
    #[serde(default = "default_per_page")]
    #[schemars(default = "default_per_page")]
    pub per_page: u32,

    /// Listing sort order (default: "updated").
    #[serde(default = "default_sort")]
    #[schemars(default = "default_sort")]
    pub sort: String,

    /// Maximum number of pages fetched before the load is aborted (default: 10).
    #[serde(default = "default_max_pages")]
    #[schemars(default = "default_max_pages")]
    pub max_pages: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            user: None,
            api_base: default_api_base(),
            per_page: default_per_page(),
            sort: default_sort(),
            max_pages: default_max_pages(),
        }
    }
}

/// Project showcase configuration.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Number of real repositories shown at most (default: 3).
    #[serde(default = "default_display_count")]
    #[schemars(default = "default_display_count")]
    pub display_count: usize,

    /// Cards shown at least, padded with placeholders (default: 3).
    #[serde(default = "default_min_cards")]
    #[schemars(default = "default_min_cards")]
    pub min_cards: usize,

    /// Host serving repository preview images (default: "https://opengraph.githubassets.com/1").
    #[serde(default = "default_preview_host")]
    #[schemars(default = "default_preview_host")]
    pub preview_host: String,

    /// Cards used to pad the showcase when too few repositories exist.
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<PlaceholderConfig>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            display_count: default_display_count(),
            min_cards: default_min_cards(),
            preview_host: default_preview_host(),
            placeholders: default_placeholders(),
        }
    }
}

/// A statically authored card.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderConfig {
    pub title: String,
    pub description: String,
    /// Meta label (default: "Project").
    #[serde(default)]
    pub meta: Option<String>,
    /// Badge text (default: "Soon").
    #[serde(default)]
    pub badge: Option<String>,
    /// Link target (default: the user's repository list on GitHub).
    #[serde(default)]
    pub link: Option<String>,
    /// Link label (default: "Learn More").
    #[serde(default)]
    pub link_label: Option<String>,
}

/// Card reveal configuration.
#[derive(Debug, Clone, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    /// Delay between consecutive card reveals in milliseconds (default: 60).
    #[serde(default = "default_stagger_ms")]
    #[schemars(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Output format ("plaintext" or "json").
    #[serde(default)]
    pub format: LogFormat,

    /// Also write logs to <cache_dir>/logs/folio.log (default: false).
    #[serde(default)]
    pub file: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plaintext,
    /// One JSON object per event.
    Json,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_sort() -> String {
    "updated".to_string()
}

fn default_max_pages() -> u32 {
    10
}

fn default_display_count() -> usize {
    3
}

fn default_min_cards() -> usize {
    3
}

fn default_preview_host() -> String {
    "https://opengraph.githubassets.com/1".to_string()
}

fn default_stagger_ms() -> u64 {
    60
}

fn default_placeholders() -> Vec<PlaceholderConfig> {
    vec![
        PlaceholderConfig {
            title: "Behavior Analytics Toolkit".to_string(),
            description: "Dashboard for ethics logs, practice modules, and compliance resources."
                .to_string(),
            meta: Some("Research · Data Viz".to_string()),
            badge: Some("Planning".to_string()),
            link: None,
            link_label: Some("View Profile".to_string()),
        },
        PlaceholderConfig {
            title: "Inclusive Classroom Engine".to_string(),
            description:
                "Adaptive supports for educators to track goals and differentiated instruction."
                    .to_string(),
            meta: Some("Accessibility · Web".to_string()),
            badge: Some("Designing".to_string()),
            link: None,
            link_label: Some("View Profile".to_string()),
        },
    ]
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// A value parsed but is outside its allowed range
    #[error("Invalid config file {path}: `{field}` {message}")]
    InvalidValue {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

/// Largest page size the listing endpoint accepts.
const MAX_PER_PAGE: u32 = 100;

impl Config {
    /// Check numeric limits serde cannot express.
    fn validate(&self) -> Result<(), (&'static str, String)> {
        if !(1..=MAX_PER_PAGE).contains(&self.github.per_page) {
            return Err((
                "github.per_page",
                format!("must be between 1 and {MAX_PER_PAGE}, got {}", self.github.per_page),
            ));
        }
        if self.github.max_pages == 0 {
            return Err(("github.max_pages", "must be at least 1".to_string()));
        }
        if self.projects.display_count == 0 {
            return Err(("projects.display_count", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Load configuration from the folio config directory.
/// Returns Config::default() if no config file exists.
pub fn load_config(env: &EnvVars) -> anyhow::Result<Config> {
    let Some(dir) = dirs::config_dir(env) else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => return parse_config(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    let config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config
        .validate()
        .map_err(|(field, message)| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            field,
            message,
        })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}
