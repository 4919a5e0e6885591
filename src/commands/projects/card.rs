//! Rendering-ready projection of repositories and placeholders.

use std::time::Duration;

use chrono::Datelike;
use lazy_regex::regex_replace_all;
use serde::Serialize;

use crate::infra::github::Repository;
use crate::shared::config::PlaceholderConfig;

const FALLBACK_META: &str = "Multiple";
const FALLBACK_DESCRIPTION: &str = "Recently updated project on GitHub.";
const REPO_LINK_LABEL: &str = "Open Repo";
const UNKNOWN_YEAR: &str = "N/A";
const PLACEHOLDER_META: &str = "Project";
const PLACEHOLDER_BADGE: &str = "Soon";
const PLACEHOLDER_LINK_LABEL: &str = "Learn More";

/// Filter tag for cards without a primary language.
pub const OTHER_TAG: &str = "other";

/// Filter tag matching every card.
pub const ALL_TAG: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCard {
    pub title: String,
    pub meta: String,
    pub description: String,
    pub badge: String,
    pub link: String,
    pub link_label: String,
    /// Lazily loaded preview image; real repositories only.
    pub preview_image: Option<String>,
    /// Lowercased primary language, or "other".
    pub filter_tag: String,
    pub placeholder: bool,
    /// Delay before this card is revealed, relative to the first card.
    pub reveal_delay_ms: u64,
}

impl DisplayCard {
    pub fn from_repository(repo: &Repository, preview_host: &str) -> Self {
        let description = repo
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION);

        Self {
            title: format_repo_name(&repo.name),
            meta: repo
                .language
                .clone()
                .unwrap_or_else(|| FALLBACK_META.to_string()),
            description: description.to_string(),
            badge: repo
                .pushed_at
                .map(|t| t.year().to_string())
                .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
            link: repo.html_url.clone(),
            link_label: REPO_LINK_LABEL.to_string(),
            preview_image: Some(format!(
                "{}/{}/{}",
                preview_host.trim_end_matches('/'),
                repo.owner.login,
                repo.name
            )),
            filter_tag: repo
                .language
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_else(|| OTHER_TAG.to_string()),
            placeholder: false,
            reveal_delay_ms: 0,
        }
    }

    /// `profile_url` is the link used when the placeholder does not set one.
    pub fn from_placeholder(placeholder: &PlaceholderConfig, profile_url: &str) -> Self {
        Self {
            title: placeholder.title.clone(),
            meta: non_empty_or(&placeholder.meta, PLACEHOLDER_META),
            description: if placeholder.description.trim().is_empty() {
                FALLBACK_DESCRIPTION.to_string()
            } else {
                placeholder.description.clone()
            },
            badge: non_empty_or(&placeholder.badge, PLACEHOLDER_BADGE),
            link: non_empty_or(&placeholder.link, profile_url),
            link_label: non_empty_or(&placeholder.link_label, PLACEHOLDER_LINK_LABEL),
            preview_image: None,
            filter_tag: OTHER_TAG.to_string(),
            placeholder: true,
            reveal_delay_ms: 0,
        }
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Whether the card passes the language filter `tag` (case-insensitive).
    /// "all" matches every card.
    pub fn matches_language(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        tag == ALL_TAG || self.filter_tag == tag
    }
}

fn non_empty_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Turn a repository slug into a title: runs of `-`/`_` become a space,
/// whitespace collapses, and every word starts uppercase.
pub fn format_repo_name(name: &str) -> String {
    let spaced = regex_replace_all!(r"[-_]+", name, |_| " ");
    let collapsed = regex_replace_all!(r"\s+", &spaced, |_| " ");
    regex_replace_all!(r"\b\w", collapsed.trim(), |c: &str| c.to_uppercase()).into_owned()
}
