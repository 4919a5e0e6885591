pub mod catalog;

use clap::Subcommand;
use thiserror::Error;

use crate::app::AppContext;
use crate::shared::preferences::PreferenceError;
use crate::shared::table::pad_or_truncate;
use catalog::{THEMES, Theme, apply_theme, init_theme};

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read or save the theme preference: {0}")]
    Preferences(#[from] PreferenceError),
}

/// Portfolio theme preference.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ThemeCommands {
    /// Print the active theme
    Get,

    /// Save a theme (legacy names like "dark" are accepted)
    Set {
        /// Theme key or legacy name
        name: String,
    },

    /// List available themes
    List,
}

const NAME_WIDTH: usize = 14;
const KEY_WIDTH: usize = 14;

fn format_row(theme: &Theme, active: bool) -> String {
    format!(
        "{} {} {} {}",
        if active { "*" } else { " " },
        pad_or_truncate(theme.key, KEY_WIDTH),
        pad_or_truncate(theme.name, NAME_WIDTH),
        theme.description
    )
}

impl ThemeCommands {
    pub fn run(&self, ctx: &AppContext) -> Result<(), ThemeError> {
        for line in self.output(ctx)? {
            println!("{line}");
        }
        Ok(())
    }

    fn output(&self, ctx: &AppContext) -> Result<Vec<String>, ThemeError> {
        let store = ctx.preferences.as_ref();
        let lines = match self {
            Self::Get => vec![init_theme(store)?.key.to_string()],
            Self::Set { name } => {
                let theme = apply_theme(store, name)?;
                vec![format!("Theme changed to {}", theme.name)]
            }
            Self::List => {
                let active = init_theme(store)?;
                THEMES
                    .iter()
                    .map(|theme| format_row(theme, theme.key == active.key))
                    .collect()
            }
        };
        Ok(lines)
    }
}
