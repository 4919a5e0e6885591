//! GitHub REST client implementation using reqwest.

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};

use super::error::{GitHubError, Result};
use super::link::parse_next_link;
use super::models::Repository;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// One page of a listing plus the URL of the page after it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// Source of repository listing pages.
#[async_trait::async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch a single page. Non-success statuses are errors.
    async fn fetch_page(&self, url: &str) -> Result<Page<Repository>>;
}

/// Production implementation talking to the GitHub REST API.
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: Url,
    /// Sent only to URLs sharing `api_base`'s origin.
    authorization: Option<HeaderValue>,
}

impl GitHubClient {
    /// Create a client for `api_base` (e.g. "https://api.github.com").
    /// `token`, when present, is sent as a bearer credential to the API
    /// host only; next-page links pointing elsewhere are fetched without it.
    pub fn new(api_base: &str, token: Option<&str>) -> Result<Self> {
        let api_base =
            Url::parse(api_base).map_err(|e| GitHubError::InvalidUrl(format!("{api_base}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("folio/", env!("CARGO_PKG_VERSION"))),
        );
        let authorization = token
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| GitHubError::InvalidToken(e.to_string()))?;
                value.set_sensitive(true);
                Ok::<_, GitHubError>(value)
            })
            .transpose()?;

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GitHubError::Client)?;

        Ok(Self {
            http,
            api_base,
            authorization,
        })
    }

    fn credential_for(&self, url: &str) -> Option<&HeaderValue> {
        let authorization = self.authorization.as_ref()?;
        match Url::parse(url) {
            Ok(target) if target.origin() == self.api_base.origin() => Some(authorization),
            _ => {
                tracing::debug!(url, "withholding token from foreign origin");
                None
            }
        }
    }

    /// URL of the first page of a user's repository listing.
    pub fn user_repos_url(&self, user: &str, per_page: u32, sort: &str) -> Result<String> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| GitHubError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["users", user, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("sort", sort);
        Ok(url.into())
    }
}

#[async_trait::async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_page(&self, url: &str) -> Result<Page<Repository>> {
        tracing::debug!(url, "fetching repository page");

        let mut request = self.http.get(url);
        if let Some(value) = self.credential_for(url) {
            request = request.header(AUTHORIZATION, value.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|source| GitHubError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let next = parse_next_link(response.headers().get(LINK).and_then(|v| v.to_str().ok()));
        let items: Vec<Repository> =
            response
                .json()
                .await
                .map_err(|source| GitHubError::Decode {
                    url: url.to_string(),
                    source,
                })?;

        tracing::debug!(url, count = items.len(), has_next = next.is_some(), "page fetched");
        Ok(Page { items, next })
    }
}
