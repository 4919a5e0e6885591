use serde::Serialize;

use super::CardGrid;
use crate::commands::projects::card::DisplayCard;
use crate::commands::theme::catalog::Theme;

#[derive(Debug, Serialize)]
struct GridDocument<'a> {
    theme: &'a str,
    status: Option<&'a str>,
    cards: Vec<&'a DisplayCard>,
}

/// Serialize the theme key, status and cards as pretty-printed JSON.
pub fn render(grid: &CardGrid, theme: &Theme) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GridDocument {
        theme: theme.key,
        status: grid.status(),
        cards: grid.cards().collect(),
    })
}
