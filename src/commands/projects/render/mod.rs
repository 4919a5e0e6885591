//! The project container and its output surfaces.
//!
//! `ProjectGrid` is the container the loader writes into: it can show
//! loading skeletons, be cleared, receive cards and carry a status line.
//! `CardGrid` is the in-memory implementation; the `text`, `json` and `html`
//! modules turn a filled grid into output.

pub mod html;
pub mod json;
pub mod text;

use clap::ValueEnum;

use super::card::DisplayCard;
use crate::shared::reveal::ElementId;

/// Output surface for `folio projects`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed cards for the terminal, revealed one by one.
    #[default]
    Text,
    /// Status and cards as a JSON document.
    Json,
    /// Card markup for embedding in the portfolio page.
    Html,
}

/// Container the loader clears and repopulates.
pub trait ProjectGrid: Send {
    /// Replace the contents with `count` loading skeletons.
    fn show_skeleton(&mut self, count: usize);

    /// Remove every skeleton and card.
    fn clear(&mut self);

    /// Add a card at the end; returns the element id used for reveal.
    fn append(&mut self, card: DisplayCard) -> ElementId;

    fn set_status(&mut self, text: &str);
}

#[derive(Debug, Default)]
pub struct CardGrid {
    skeletons: usize,
    cards: Vec<(ElementId, DisplayCard)>,
    status: Option<String>,
    next_id: ElementId,
}

impl CardGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skeletons(&self) -> usize {
        self.skeletons
    }

    pub fn cards(&self) -> impl Iterator<Item = &DisplayCard> {
        self.cards.iter().map(|(_, card)| card)
    }

    pub fn elements(&self) -> &[(ElementId, DisplayCard)] {
        &self.cards
    }

    pub fn card(&self, id: ElementId) -> Option<&DisplayCard> {
        self.cards
            .iter()
            .find(|(element, _)| *element == id)
            .map(|(_, card)| card)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl ProjectGrid for CardGrid {
    fn show_skeleton(&mut self, count: usize) {
        self.cards.clear();
        self.skeletons = count;
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.skeletons = 0;
    }

    fn append(&mut self, card: DisplayCard) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.cards.push((id, card));
        id
    }

    fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DisplayCard;
    use crate::shared::config::PlaceholderConfig;

    /// A placeholder card with the given title and tag-less defaults.
    pub fn sample_card(title: &str) -> DisplayCard {
        DisplayCard::from_placeholder(
            &PlaceholderConfig {
                title: title.to_string(),
                description: format!("About {title}."),
                meta: Some("Web".to_string()),
                badge: Some("2024".to_string()),
                link: Some("https://example.com/?a=1&b=2".to_string()),
                link_label: Some("Open".to_string()),
            },
            "https://github.com/octocat",
        )
    }
}
