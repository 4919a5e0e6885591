use thiserror::Error;

use crate::infra::github::GitHubError;

#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error(
        "No GitHub user given. Pass one as an argument or set `github.user` in the config file"
    )]
    MissingUser,

    #[error("Invalid loader transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Failed to load GitHub projects for {user}")]
    LoadFailed { user: String },

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, ProjectsError>;
