//! GitHub REST client for the repository listing endpoint.
//!
//! Provides `GitHubClient` (reqwest) behind the `RepoSource` trait,
//! `Link` header parsing, and the pagination loop.

mod client;
mod error;
mod link;
#[cfg(test)]
pub mod mock;
mod models;
mod pagination;

pub use client::{GitHubClient, Page, RepoSource};
pub use error::{GitHubError, Result};
pub use link::parse_next_link;
pub use models::{Owner, Repository};
pub use pagination::fetch_all_pages;
