//! wiremock-based GitHub mock server for testing.
//!
//! The first page of a listing is served at `/users/{user}/repos`; later
//! pages live at `/user/1/repos?page=N`, mirroring how GitHub's `Link`
//! header switches to id-based URLs.
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! mock.first_page("octocat", vec![mock_repository(...)], Some(&mock.page_url(2))).await;
//! mock.page(2, vec![mock_repository(...)], None).await;
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

/// Listing entry with language and description set.
pub fn mock_repository_with(
    owner: &str,
    name: &str,
    fork: bool,
    pushed_at: &str,
    language: Option<&str>,
    description: Option<&str>,
) -> serde_json::Value {
    json!({
        "id": 1,
        "node_id": "R_test",
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "private": false,
        "owner": {
            "login": owner,
            "id": 1,
            "type": "User"
        },
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "description": description,
        "fork": fork,
        "url": format!("https://api.github.com/repos/{}/{}", owner, name),
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": pushed_at,
        "pushed_at": pushed_at,
        "language": language,
        "default_branch": "main"
    })
}

/// Listing entry with a Rust language and a generic description.
pub fn mock_repository(owner: &str, name: &str, fork: bool, pushed_at: &str) -> serde_json::Value {
    mock_repository_with(
        owner,
        name,
        fork,
        pushed_at,
        Some("Rust"),
        Some("Test repository"),
    )
}

fn link_header(next: &str) -> String {
    format!(r#"<{next}>; rel="next""#)
}

fn page_response(items: Vec<serde_json::Value>, next: Option<&str>) -> ResponseTemplate {
    let template = ResponseTemplate::new(200).set_body_json(items);
    match next {
        Some(next) => template.insert_header("link", link_header(next).as_str()),
        None => template,
    }
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client pointed at this server, without a token.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(&self.uri(), None).expect("mock URI should be a valid base URL")
    }

    /// Absolute URL of page `n` (n >= 2).
    pub fn page_url(&self, n: u32) -> String {
        format!("{}/user/1/repos?page={}", self.uri(), n)
    }

    /// Serve the first page of `user`'s listing.
    pub async fn first_page(&self, user: &str, items: Vec<serde_json::Value>, next: Option<&str>) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{user}/repos")))
            .respond_with(page_response(items, next))
            .mount(&self.server)
            .await;
    }

    /// Serve page `n` at [`Self::page_url`].
    pub async fn page(&self, n: u32, items: Vec<serde_json::Value>, next: Option<&str>) {
        Mock::given(method("GET"))
            .and(path("/user/1/repos"))
            .and(query_param("page", n.to_string()))
            .respond_with(page_response(items, next))
            .mount(&self.server)
            .await;
    }

    /// Serve page `n` linking to itself, so pagination never ends.
    pub async fn self_linking_page(&self, n: u32) {
        let url = self.page_url(n);
        self.page(n, vec![], Some(&url)).await;
    }

    /// Fail the first page with `status`.
    pub async fn first_page_error(&self, user: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{user}/repos")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "Server Error",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&self.server)
            .await;
    }

    /// Fail page `n` with `status`.
    pub async fn page_error(&self, n: u32, status: u16) {
        Mock::given(method("GET"))
            .and(path("/user/1/repos"))
            .and(query_param("page", n.to_string()))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve an arbitrary body as the first page.
    pub async fn first_page_raw(&self, user: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{user}/repos")))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Serve an empty first page only when GitHub headers and `token` are sent.
    pub async fn first_page_requiring_token(&self, user: &str, token: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{user}/repos")))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .and(header("accept", "application/vnd.github+json"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&self.server)
            .await;
    }

    /// Paths and queries of every request received, in arrival order.
    pub async fn requested_urls(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| match r.url.query() {
                Some(q) => format!("{}?{}", r.url.path(), q),
                None => r.url.path().to_string(),
            })
            .collect()
    }

    /// `Authorization` header of every request received, in arrival order.
    pub async fn received_authorization(&self) -> Vec<Option<String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| {
                r.headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .collect()
    }
}
