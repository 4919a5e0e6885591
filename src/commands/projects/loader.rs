//! One-shot load of the project showcase into an `AppContext`.
//!
//! The loader walks `Idle -> Loading -> Success | Failed -> Rendered`.
//! Fetch failures never escape `load`: they are logged, the grid is left
//! empty and the failure status is shown instead.

use super::card::{ALL_TAG, DisplayCard};
use super::error::{ProjectsError, Result};
use super::render::ProjectGrid;
use super::select::{ShowcaseOptions, build_showcase, featured, filter_by_language};
use super::status::{LoadStatus, filter_note};
use crate::app::AppContext;
use crate::infra::github::{RepoSource, fetch_all_pages};
use crate::shared::config::PlaceholderConfig;
use crate::shared::reveal::Subscription;

/// Skeleton cards shown while the listing is fetched.
pub const SKELETON_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState {
    Idle,
    Loading,
    Success(Vec<DisplayCard>),
    Failed(String),
    Rendered,
}

impl LoaderState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading",
            Self::Success(_) => "Success",
            Self::Failed(_) => "Failed",
            Self::Rendered => "Rendered",
        }
    }

    fn can_become(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Loading)
                | (Self::Loading, Self::Success(_) | Self::Failed(_))
                | (Self::Success(_) | Self::Failed(_), Self::Rendered)
        )
    }
}

/// Everything one load needs besides the context and the source.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub first_url: String,
    pub max_pages: u32,
    pub showcase: ShowcaseOptions,
    pub placeholders: Vec<PlaceholderConfig>,
    /// Language filter tag; `None` shows every card.
    pub language: Option<String>,
}

/// Result of a finished load.
#[derive(Debug)]
pub struct LoadReport {
    pub status: LoadStatus,
    /// One subscription per appended card, in grid order. Empty when the
    /// context has no reveal watcher.
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug)]
pub struct RepositoryLoader {
    state: LoaderState,
}

impl Default for RepositoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryLoader {
    pub fn new() -> Self {
        Self {
            state: LoaderState::Idle,
        }
    }

    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    fn advance(&mut self, next: LoaderState) -> Result<()> {
        if !self.state.can_become(&next) {
            return Err(ProjectsError::InvalidTransition {
                from: self.state.name(),
                to: next.name(),
            });
        }
        tracing::debug!(from = self.state.name(), to = next.name(), "loader state");
        self.state = next;
        Ok(())
    }

    /// Fetch, select and render the showcase into `ctx.grid`.
    ///
    /// A loader runs once; calling `load` again is an `InvalidTransition`.
    pub async fn load<G: ProjectGrid>(
        &mut self,
        ctx: &mut AppContext<G>,
        source: &dyn RepoSource,
        request: &LoadRequest,
    ) -> Result<LoadReport> {
        self.advance(LoaderState::Loading)?;
        ctx.grid.show_skeleton(SKELETON_COUNT);

        let (cards, status) =
            match fetch_all_pages(source, &request.first_url, request.max_pages).await {
                Ok(repos) => {
                    let showcase = build_showcase(
                        &featured(repos),
                        &request.placeholders,
                        &request.showcase,
                    );
                    let status = LoadStatus::for_showcase(
                        showcase.available,
                        showcase.real_count,
                        request.showcase.min_cards,
                    );
                    self.advance(LoaderState::Success(showcase.cards.clone()))?;
                    (showcase.cards, status)
                }
                Err(e) => {
                    tracing::error!(error = %e, url = %request.first_url, "failed to load repositories");
                    self.advance(LoaderState::Failed(e.to_string()))?;
                    let status = LoadStatus::Failed {
                        profile_url: request.showcase.profile_url.clone(),
                    };
                    (Vec::new(), status)
                }
            };

        ctx.grid.clear();
        if let Some(watcher) = &ctx.reveal {
            watcher.unobserve_all();
        }
        let tag = request.language.as_deref().unwrap_or(ALL_TAG);
        let mut subscriptions = Vec::new();
        let mut appended = 0;
        for card in filter_by_language(cards, tag) {
            let id = ctx.grid.append(card);
            appended += 1;
            if let Some(watcher) = &ctx.reveal {
                subscriptions.push(watcher.observe(id));
            }
        }
        match filter_note(tag, appended) {
            Some(note) if !status.is_failure() => {
                ctx.grid.set_status(&format!("{status} {note}"));
            }
            _ => ctx.grid.set_status(&status.to_string()),
        }

        self.advance(LoaderState::Rendered)?;
        Ok(LoadReport {
            status,
            subscriptions,
        })
    }
}
