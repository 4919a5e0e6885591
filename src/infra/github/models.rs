use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of the `/users/{user}/repos` listing.
///
/// Only the fields the showcase reads are declared; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
    /// Null for repositories that never received a push.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    pub owner: Owner,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub login: String,
}
