//! Sequential pagination over `Link`-advertised next pages.

use super::client::RepoSource;
use super::error::{GitHubError, Result};
use super::models::Repository;

/// Fetch `first_url` and every page it links to, in order.
///
/// Items are concatenated in server order. Any failed page aborts the whole
/// fetch. At most `max_pages` requests are made; if the last one still
/// advertises a next page the fetch fails with `PageLimitExceeded`.
pub async fn fetch_all_pages(
    source: &dyn RepoSource,
    first_url: &str,
    max_pages: u32,
) -> Result<Vec<Repository>> {
    let mut collected = Vec::new();
    let mut next = Some(first_url.to_string());
    let mut fetched = 0u32;

    while let Some(url) = next {
        if fetched >= max_pages {
            tracing::warn!(max_pages, next = %url, "page limit reached");
            return Err(GitHubError::PageLimitExceeded { max_pages });
        }

        let page = source.fetch_page(&url).await?;
        fetched += 1;
        collected.extend(page.items);
        next = page.next;
    }

    tracing::info!(pages = fetched, repositories = collected.len(), "listing fetched");
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::github::mock::{GitHubMockServer, mock_repository};

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn single_page_without_link_issues_exactly_one_request() {
        let mock = GitHubMockServer::start().await;
        mock.first_page(
            "octocat",
            vec![
                mock_repository("octocat", "a", false, "2024-01-01T00:00:00Z"),
                mock_repository("octocat", "b", false, "2023-01-01T00:00:00Z"),
            ],
            None,
        )
        .await;
        let client = mock.client();
        let url = client.user_repos_url("octocat", 100, "updated").unwrap();

        let repos = fetch_all_pages(&client, &url, 10).await.unwrap();

        assert_eq!(names(&repos), vec!["a", "b"]);
        assert_eq!(mock.requested_urls().await.len(), 1);
    }

    #[tokio::test]
    async fn follows_next_links_in_order_and_preserves_server_order() {
        let mock = GitHubMockServer::start().await;
        let page2 = mock.page_url(2);
        let page3 = mock.page_url(3);
        mock.first_page(
            "octocat",
            vec![mock_repository("octocat", "p1-a", false, "2020-01-01T00:00:00Z")],
            Some(&page2),
        )
        .await;
        mock.page(
            2,
            vec![
                mock_repository("octocat", "p2-a", true, "2024-01-01T00:00:00Z"),
                mock_repository("octocat", "p2-b", false, "2021-01-01T00:00:00Z"),
            ],
            Some(&page3),
        )
        .await;
        mock.page(
            3,
            vec![mock_repository("octocat", "p3-a", false, "2022-01-01T00:00:00Z")],
            None,
        )
        .await;
        let client = mock.client();
        let url = client.user_repos_url("octocat", 100, "updated").unwrap();

        let repos = fetch_all_pages(&client, &url, 10).await.unwrap();

        assert_eq!(names(&repos), vec!["p1-a", "p2-a", "p2-b", "p3-a"]);
        assert_eq!(
            mock.requested_urls().await,
            vec![
                "/users/octocat/repos?per_page=100&sort=updated".to_string(),
                "/user/1/repos?page=2".to_string(),
                "/user/1/repos?page=3".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn failure_on_later_page_discards_earlier_results() {
        let mock = GitHubMockServer::start().await;
        let page2 = mock.page_url(2);
        mock.first_page(
            "octocat",
            vec![mock_repository("octocat", "a", false, "2020-01-01T00:00:00Z")],
            Some(&page2),
        )
        .await;
        mock.page_error(2, 403).await;
        let client = mock.client();
        let url = client.user_repos_url("octocat", 100, "updated").unwrap();

        let err = fetch_all_pages(&client, &url, 10).await.unwrap_err();

        assert!(matches!(err, GitHubError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn stops_at_page_limit() {
        let mock = GitHubMockServer::start().await;
        let page2 = mock.page_url(2);
        mock.first_page("octocat", vec![], Some(&page2)).await;
        mock.self_linking_page(2).await;
        let client = mock.client();
        let url = client.user_repos_url("octocat", 100, "updated").unwrap();

        let err = fetch_all_pages(&client, &url, 3).await.unwrap_err();

        assert!(matches!(err, GitHubError::PageLimitExceeded { max_pages: 3 }));
        assert_eq!(mock.requested_urls().await.len(), 3);
    }
}
