use crate::error::{FolioError, Result};
use crate::github::types::{AccountStats, ListReposParams, RepoRecord};
use octocrab::Octocrab;

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<&str>, api_base: &str) -> Result<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(api_base)
            .map_err(|e| FolioError::GitHub(format!("invalid api base {api_base}: {e}")))?;
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        let octo = builder.build()?;

        Ok(Self { octo })
    }

    /// Single page of the account's repositories, most recently updated first.
    pub async fn fetch_repos(&self, account: &str) -> Result<Vec<RepoRecord>> {
        let route = repos_route(account);
        tracing::debug!(%route, "fetching repositories");
        let repos: Vec<RepoRecord> = self
            .octo
            .get(route, Some(&ListReposParams::default()))
            .await?;
        tracing::debug!(account, count = repos.len(), "repositories received");
        Ok(repos)
    }

    pub async fn fetch_stats(&self, account: &str) -> Result<AccountStats> {
        let route = user_route(account);
        tracing::debug!(%route, "fetching account stats");
        let stats = self.octo.get(route, None::<&()>).await?;
        Ok(stats)
    }
}

fn repos_route(account: &str) -> String {
    format!("/users/{account}/repos")
}

fn user_route(account: &str) -> String {
    format!("/users/{account}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_canned;

    #[test]
    fn routes_are_account_scoped() {
        assert_eq!(repos_route("Ogmane007"), "/users/Ogmane007/repos");
        assert_eq!(user_route("Ogmane007"), "/users/Ogmane007");
    }

    #[tokio::test]
    async fn builds_with_and_without_token() {
        assert!(GitHubClient::new(None, "https://api.github.com").is_ok());
        assert!(GitHubClient::new(Some("ghp_x"), "https://api.github.com").is_ok());
    }

    #[tokio::test]
    async fn rejects_unparseable_api_base() {
        let err = GitHubClient::new(None, "not a uri").err();
        assert!(matches!(err, Some(FolioError::GitHub(_))));
    }

    #[tokio::test]
    async fn repos_request_carries_sort_and_page_size() {
        let body = r#"[{"name":"folio","stargazers_count":3,"fork":false,"html_url":"https://github.com/someone/folio","topics":null}]"#;
        let (base, mut requests) = serve_canned("200 OK", body).await;
        let client = GitHubClient::new(None, &base).unwrap();

        let repos = client.fetch_repos("someone").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stars, 3);

        let line = requests.recv().await.unwrap();
        assert!(line.starts_with("GET /users/someone/repos?"), "{line}");
        assert!(line.contains("sort=updated"), "{line}");
        assert!(line.contains("per_page=100"), "{line}");
    }

    #[tokio::test]
    async fn stats_request_hits_user_route() {
        let body = r#"{"login":"someone","public_repos":12,"followers":4,"following":1}"#;
        let (base, mut requests) = serve_canned("200 OK", body).await;
        let client = GitHubClient::new(None, &base).unwrap();

        let stats = client.fetch_stats("someone").await.unwrap();
        assert_eq!(stats.public_repos, 12);
        assert_eq!(stats.followers, 4);

        let line = requests.recv().await.unwrap();
        assert!(line.starts_with("GET /users/someone "), "{line}");
    }

    #[tokio::test]
    async fn not_found_is_a_github_error() {
        let (base, _requests) = serve_canned("404 Not Found", r#"{"message":"Not Found"}"#).await;
        let client = GitHubClient::new(None, &base).unwrap();
        let err = client.fetch_repos("nobody-here").await.err();
        assert!(matches!(err, Some(FolioError::GitHub(_))));
    }
}
