//! `folio projects`: fetch a user's repositories and render the showcase.

pub mod card;
mod error;
pub mod loader;
pub mod render;
pub mod select;
pub mod status;

pub use error::{ProjectsError, Result};

use std::io::Write;
use std::time::Duration;

use clap::Args;

use crate::app::AppContext;
use crate::commands::theme::ThemeError;
use crate::commands::theme::catalog::init_theme;
use crate::infra::github::GitHubClient;
use crate::shared::config::Config;
use crate::shared::env_var::EnvVars;
use crate::shared::reveal::RevealWatcher;
use loader::{LoadRequest, RepositoryLoader};
use render::OutputFormat;
use select::ShowcaseOptions;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ProjectsArgs {
    /// GitHub user whose repositories are shown (defaults to `github.user`)
    pub user: Option<String>,

    /// Number of real repositories to show (defaults to `projects.display_count`)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u16).range(1..=100))]
    pub count: Option<u16>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Only show cards whose primary language matches (use "other" for none)
    #[arg(long, short)]
    pub language: Option<String>,
}

/// Profile page linked from placeholders and the failure status.
pub fn profile_url(user: &str) -> String {
    format!("https://github.com/{user}?tab=repositories")
}

impl ProjectsArgs {
    pub async fn run(
        &self,
        ctx: &mut AppContext,
        config: &Config,
        env: &EnvVars,
    ) -> anyhow::Result<()> {
        let user = self
            .user
            .clone()
            .or_else(|| config.github.user.clone())
            .ok_or(ProjectsError::MissingUser)?;

        let client = GitHubClient::new(&config.github.api_base, env.github_token.as_deref())
            .map_err(ProjectsError::from)?;
        let request = self.build_request(config, &client, &user)?;

        let theme = init_theme(ctx.preferences.as_ref()).map_err(ThemeError::from)?;
        if self.format == OutputFormat::Text && ctx.reveal.is_none() {
            ctx.reveal = Some(RevealWatcher::new());
        }

        let report = RepositoryLoader::new().load(ctx, &client, &request).await?;

        let mut stdout = std::io::stdout();
        match self.format {
            OutputFormat::Text => {
                if let Some(watcher) = &ctx.reveal {
                    render::text::reveal_cards(&ctx.grid, watcher, report.subscriptions, &mut stdout)
                        .await?;
                }
            }
            OutputFormat::Json => writeln!(stdout, "{}", render::json::render(&ctx.grid, theme)?)?,
            OutputFormat::Html => writeln!(stdout, "{}", render::html::render(&ctx.grid, theme)?)?,
        }

        if report.status.is_failure() {
            return Err(ProjectsError::LoadFailed { user }.into());
        }
        Ok(())
    }

    fn build_request(
        &self,
        config: &Config,
        client: &GitHubClient,
        user: &str,
    ) -> Result<LoadRequest> {
        let display_count = self
            .count
            .map(usize::from)
            .unwrap_or(config.projects.display_count);

        Ok(LoadRequest {
            first_url: client.user_repos_url(user, config.github.per_page, &config.github.sort)?,
            max_pages: config.github.max_pages,
            showcase: ShowcaseOptions {
                display_count,
                min_cards: config.projects.min_cards,
                preview_host: config.projects.preview_host.clone(),
                profile_url: profile_url(user),
                stagger: Duration::from_millis(config.reveal.stagger_ms),
            },
            placeholders: config.projects.placeholders.clone(),
            language: self.language.clone(),
        })
    }
}
