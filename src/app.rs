//! Application context handed to initialization and load functions.

use crate::commands::projects::render::{CardGrid, ProjectGrid};
use crate::shared::preferences::PreferenceStore;
use crate::shared::reveal::RevealWatcher;

/// Everything the loader and the theme commands act on.
///
/// `reveal` is optional: surfaces that show every card at once do not
/// register cards for reveal.
pub struct AppContext<G: ProjectGrid = CardGrid> {
    pub preferences: Box<dyn PreferenceStore>,
    pub grid: G,
    pub reveal: Option<RevealWatcher>,
}

impl<G: ProjectGrid> AppContext<G> {
    pub fn new(preferences: Box<dyn PreferenceStore>, grid: G) -> Self {
        Self {
            preferences,
            grid,
            reveal: None,
        }
    }

    pub fn with_reveal(mut self, watcher: RevealWatcher) -> Self {
        self.reveal = Some(watcher);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::preferences::MemoryPreferenceStore;

    #[test]
    fn reveal_is_off_until_attached() {
        let ctx = AppContext::new(Box::new(MemoryPreferenceStore::default()), CardGrid::new());
        assert!(ctx.reveal.is_none());

        let ctx = ctx.with_reveal(RevealWatcher::new());
        assert!(ctx.reveal.is_some());
    }
}
