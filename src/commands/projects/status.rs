use std::fmt;

use super::card::ALL_TAG;

/// Outcome of a load, as reported to the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No real repositories; only placeholders are shown.
    PlaceholdersOnly,
    /// Some real repositories, padded with placeholders.
    Partial { real: usize },
    /// Enough real repositories; `shown` of them are displayed.
    Complete { shown: usize },
    /// The listing could not be fetched.
    Failed { profile_url: String },
}

impl LoadStatus {
    /// Pick the status from the `available` real repositories and the
    /// `shown` subset, given the minimum card count.
    pub fn for_showcase(available: usize, shown: usize, min_cards: usize) -> Self {
        match available {
            0 => Self::PlaceholdersOnly,
            n if n < min_cards => Self::Partial { real: shown },
            _ => Self::Complete { shown },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceholdersOnly => write!(
                f,
                "Showcasing planned projects. Add public repositories to replace them."
            ),
            Self::Partial { real } => write!(
                f,
                "Loaded {real} project{} from GitHub. Showing planned work for the rest.",
                if *real == 1 { "" } else { "s" }
            ),
            Self::Complete { shown } => write!(f, "Loaded top {shown} projects from GitHub."),
            Self::Failed { profile_url } => write!(
                f,
                "Unable to load GitHub projects right now. View them on GitHub: {profile_url}"
            ),
        }
    }
}

/// Suffix for the status line when a language filter hides cards; `None`
/// for the "all" tag.
pub fn filter_note(tag: &str, shown: usize) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    if tag == ALL_TAG {
        return None;
    }
    Some(format!(
        "Filtered by {tag}: {shown} card{} shown.",
        if shown == 1 { "" } else { "s" }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(0, 0, LoadStatus::PlaceholdersOnly)]
    #[case::one(1, 1, LoadStatus::Partial { real: 1 })]
    #[case::two(2, 2, LoadStatus::Partial { real: 2 })]
    #[case::three(3, 3, LoadStatus::Complete { shown: 3 })]
    #[case::six(6, 6, LoadStatus::Complete { shown: 6 })]
    #[case::five_available_one_shown(5, 1, LoadStatus::Complete { shown: 1 })]
    #[case::two_available_one_shown(2, 1, LoadStatus::Partial { real: 1 })]
    fn test_for_showcase(
        #[case] available: usize,
        #[case] shown: usize,
        #[case] expected: LoadStatus,
    ) {
        assert_eq!(LoadStatus::for_showcase(available, shown, 3), expected);
    }

    #[rstest]
    #[case::placeholders(
        LoadStatus::PlaceholdersOnly,
        "Showcasing planned projects. Add public repositories to replace them."
    )]
    #[case::singular(
        LoadStatus::Partial { real: 1 },
        "Loaded 1 project from GitHub. Showing planned work for the rest."
    )]
    #[case::plural(
        LoadStatus::Partial { real: 2 },
        "Loaded 2 projects from GitHub. Showing planned work for the rest."
    )]
    #[case::complete(LoadStatus::Complete { shown: 3 }, "Loaded top 3 projects from GitHub.")]
    #[case::failed(
        LoadStatus::Failed { profile_url: "https://github.com/octocat?tab=repositories".to_string() },
        "Unable to load GitHub projects right now. View them on GitHub: https://github.com/octocat?tab=repositories"
    )]
    fn test_display(#[case] status: LoadStatus, #[case] expected: &str) {
        assert_eq!(status.to_string(), expected);
    }

    #[rstest]
    #[case::all("all", 3, None)]
    #[case::all_uppercase("ALL", 3, None)]
    #[case::single("Rust", 1, Some("Filtered by rust: 1 card shown."))]
    #[case::none_left("go", 0, Some("Filtered by go: 0 cards shown."))]
    fn test_filter_note(#[case] tag: &str, #[case] shown: usize, #[case] expected: Option<&str>) {
        assert_eq!(filter_note(tag, shown).as_deref(), expected);
    }
}
