use std::io::Write;

use clap::Subcommand;

use crate::shared::config::generate_schema;
use crate::shared::dirs;
use crate::shared::env_var::EnvVars;

/// Configuration file helpers.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the JSON Schema of config.yaml (for editor completion)
    Schema,

    /// Print where folio reads config.yaml and keeps preferences
    Paths,
}

impl ConfigCommands {
    pub fn run(&self, env: &EnvVars) -> anyhow::Result<()> {
        self.write_to(env, &mut std::io::stdout())
    }

    fn write_to(&self, env: &EnvVars, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Self::Schema => {
                writeln!(out, "{}", serde_json::to_string_pretty(&generate_schema())?)?;
            }
            Self::Paths => {
                let show = |p: Option<std::path::PathBuf>| {
                    p.map_or_else(|| "(unavailable)".to_string(), |p| p.display().to_string())
                };
                writeln!(out, "config:      {}", show(dirs::config_dir(env)))?;
                writeln!(out, "preferences: {}", show(dirs::preferences_file(env)))?;
                writeln!(out, "logs:        {}", show(dirs::log_dir(env)))?;
            }
        }
        Ok(())
    }
}
