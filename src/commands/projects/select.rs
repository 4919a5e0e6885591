//! Filtering, ordering and padding of the showcase.

use std::time::Duration;

use super::card::DisplayCard;
use crate::infra::github::Repository;
use crate::shared::config::PlaceholderConfig;

/// Settings that shape the card list.
#[derive(Debug, Clone)]
pub struct ShowcaseOptions {
    /// Real repositories shown at most.
    pub display_count: usize,
    /// Cards shown at least, when placeholders allow.
    pub min_cards: usize,
    pub preview_host: String,
    /// Link for placeholders that do not set one.
    pub profile_url: String,
    pub stagger: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    pub cards: Vec<DisplayCard>,
    /// Number of cards built from real repositories.
    pub real_count: usize,
    /// Real repositories that were eligible, shown or not.
    pub available: usize,
}

/// Drop forks and order by last push, newest first.
///
/// The sort is stable, so equal timestamps keep listing order. Repositories
/// that were never pushed sort last.
pub fn featured(repos: Vec<Repository>) -> Vec<Repository> {
    let mut featured: Vec<Repository> = repos.into_iter().filter(|r| !r.fork).collect();
    featured.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    featured
}

/// Take the first `display_count` repositories. Only when fewer than
/// `min_cards` real repositories exist at all, pad with placeholders up to
/// `min_cards` while placeholders remain.
pub fn build_showcase(
    featured: &[Repository],
    placeholders: &[PlaceholderConfig],
    options: &ShowcaseOptions,
) -> Showcase {
    let mut cards: Vec<DisplayCard> = featured
        .iter()
        .take(options.display_count)
        .map(|repo| DisplayCard::from_repository(repo, &options.preview_host))
        .collect();
    let real_count = cards.len();
    let available = featured.len();

    let missing = if available < options.min_cards {
        options.min_cards.saturating_sub(real_count)
    } else {
        0
    };
    cards.extend(
        placeholders
            .iter()
            .take(missing)
            .map(|p| DisplayCard::from_placeholder(p, &options.profile_url)),
    );

    let cards = cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let delay = options
                .stagger
                .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            card.with_reveal_delay(delay)
        })
        .collect();

    Showcase {
        cards,
        real_count,
        available,
    }
}

/// Keep the cards whose filter tag matches `tag`; "all" keeps everything.
pub fn filter_by_language(cards: Vec<DisplayCard>, tag: &str) -> Vec<DisplayCard> {
    cards
        .into_iter()
        .filter(|card| card.matches_language(tag))
        .collect()
}
