use anyhow::anyhow;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::{ProjectHandle, RepositoryDescriptor, RepositoryLister, StdResult};

/// The production endpoint of the source repositories listing service.
pub const CLOUD_SOURCE_ENDPOINT: &str = "https://source.developers.google.com";

/// Lister error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListerError {
    /// The service answered with a non-success status
    #[error("Failed to fetch repositories: HTTP {0}")]
    Status(u16),
    /// The request could not be sent or its body not read
    #[error("Transport error: {0}")]
    Transport(String),
    /// The response body is not a repository listing
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ListerError {
    fn from(error: reqwest::Error) -> Self {
        match error.is_decode() {
            true => ListerError::Parse(error.to_string()),
            false => ListerError::Transport(error.to_string()),
        }
    }
}

#[derive(Deserialize, Debug)]
struct ListReposResponse {
    #[serde(default)]
    repos: Option<Vec<RepoEntry>>,
}

#[derive(Deserialize, Debug)]
struct RepoEntry {
    name: Option<String>,
    url: Option<String>,
}

impl From<RepoEntry> for RepositoryDescriptor {
    fn from(entry: RepoEntry) -> Self {
        RepositoryDescriptor::new(entry.name.as_deref(), entry.url.as_deref())
    }
}

/// Lists repositories with an authenticated HTTP request to the listing service.
pub struct HttpRepositoryLister {
    client: Client,
    endpoint: String,
}

impl HttpRepositoryLister {
    /// Creates a new `HttpRepositoryLister` instance targeting the given base endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("source-mirror/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn repositories_url(&self, project: &ProjectHandle) -> String {
        format!("{}/projects/{}/repos", self.endpoint, project.project_id())
    }

    async fn fetch_repositories(
        &self,
        project: &ProjectHandle,
    ) -> Result<Vec<RepositoryDescriptor>, ListerError> {
        let url = self.repositories_url(project);
        debug!("Fetching repositories from {url}");
        let response = self
            .client
            .get(&url)
            .bearer_auth(project.credential().expose())
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            let error = ListerError::Status(response.status().as_u16());
            error!("{error}");
            return Err(error);
        }
        let body = response.json::<ListReposResponse>().await?;

        Ok(body
            .repos
            .unwrap_or_default()
            .into_iter()
            .map(RepositoryDescriptor::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl RepositoryLister for HttpRepositoryLister {
    async fn list(&self, project: &ProjectHandle) -> StdResult<Vec<RepositoryDescriptor>> {
        self.fetch_repositories(project).await.map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn mock_json_value() -> serde_json::Value {
        json!({
            "repos": [
                {
                    "name": "projects/proj1/repos/b-repository",
                    "url": "https://source.developers.google.com/p/proj1/r/b-repository"
                },
                {
                    "name": "projects/proj1/repos/a-repository"
                },
                {
                    "url": "https://source.developers.google.com/p/proj1/r/c-repository"
                }
            ]
        })
    }

    #[tokio::test]
    async fn list_sends_bearer_token_and_preserves_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/projects/proj1/repos")
                .header("Authorization", "Bearer tok");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_json_value());
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let repositories = lister.list(&ProjectHandle::dummy()).await.unwrap();

        mock.assert();
        assert_eq!(
            vec![
                RepositoryDescriptor::new(
                    Some("projects/proj1/repos/b-repository"),
                    Some("https://source.developers.google.com/p/proj1/r/b-repository"),
                ),
                RepositoryDescriptor::new(Some("projects/proj1/repos/a-repository"), None),
                RepositoryDescriptor::new(
                    None,
                    Some("https://source.developers.google.com/p/proj1/r/c-repository"),
                ),
            ],
            repositories
        );
    }

    #[tokio::test]
    async fn list_tolerates_trailing_slash_in_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(200).json_body(json!({ "repos": [] }));
        });
        let lister = HttpRepositoryLister::try_new(&server.url("/")).unwrap();

        let repositories = lister.list(&ProjectHandle::dummy()).await.unwrap();

        mock.assert();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn list_returns_empty_when_collection_is_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(200).json_body(json!({}));
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let repositories = lister.list(&ProjectHandle::dummy()).await.unwrap();

        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn list_treats_empty_url_as_missing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(200)
                .json_body(json!({ "repos": [{ "name": "a", "url": "" }] }));
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let repositories = lister.list(&ProjectHandle::dummy()).await.unwrap();

        assert_eq!(vec![RepositoryDescriptor::new(Some("a"), None)], repositories);
        assert_eq!(None, repositories[0].clone_url());
    }

    #[tokio::test]
    async fn list_fails_with_status_on_non_ok_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(403).body("forbidden");
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let error = lister
            .list(&ProjectHandle::dummy())
            .await
            .expect_err("Listing should fail on HTTP 403");

        assert_eq!(
            Some(&ListerError::Status(403)),
            error.downcast_ref::<ListerError>()
        );
    }

    #[tokio::test]
    async fn list_fails_on_non_ok_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(204);
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let error = lister.list(&ProjectHandle::dummy()).await.unwrap_err();

        assert_eq!(
            Some(&ListerError::Status(204)),
            error.downcast_ref::<ListerError>()
        );
    }

    #[tokio::test]
    async fn list_fails_on_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/projects/proj1/repos");
            then.status(200).body("not json");
        });
        let lister = HttpRepositoryLister::try_new(&server.base_url()).unwrap();

        let error = lister.list(&ProjectHandle::dummy()).await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ListerError>(),
            Some(ListerError::Parse(_))
        ));
    }
}
