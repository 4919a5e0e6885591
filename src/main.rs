mod app;
mod cli;
mod commands;
mod infra;
mod shared;

use clap::Parser;
use cli::{Cli, Commands};

use app::AppContext;
use commands::projects::render::CardGrid;
use shared::config::load_config;
use shared::env_var::EnvVars;
use shared::preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

fn preference_store(env: &EnvVars) -> Box<dyn PreferenceStore> {
    match shared::dirs::preferences_file(env) {
        Some(path) => Box::new(FilePreferenceStore::new(path)),
        None => {
            tracing::warn!("no cache directory available; preferences will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = Cli::parse();

    let env = EnvVars::load();
    let config = load_config(&env)?;
    let _log_guard = shared::logging::init(&config.logging, &env)?;

    let mut ctx = AppContext::new(preference_store(&env), CardGrid::new());

    match command {
        Commands::Projects(args) => args.run(&mut ctx, &config, &env).await?,
        Commands::Theme(theme_cmd) => theme_cmd.run(&ctx)?,
        Commands::Config(config_cmd) => config_cmd.run(&env)?,
        Commands::Completions { shell } => cli::print_completions(shell)?,
    }

    Ok(())
}
