//! GitHub REST client - implementation of the GitHubClient port.
//!
//! Fetches the user profile, repository listing, and public event stream.
//! The profile endpoint maps 404 and 403 to typed errors; degraded listing
//! fetches (any non-success status) yield empty sequences so that analysis
//! proceeds on partial data.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GitHubClientConfig::new()
//!     .with_token(token)
//!     .with_base_url("https://api.github.com");
//!
//! let client = GitHubRestClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tracing::warn;

use crate::domain::foundation::Username;
use crate::domain::profile::{RawEventRecord, RawRepositoryRecord, RawUserRecord};
use crate::ports::{ActivityBundle, GitHubClient, GitHubError};

/// Repositories requested per listing call, newest updates first.
const REPO_PAGE_SIZE: u32 = 100;

/// Public events requested, most recent first.
const EVENT_PAGE_SIZE: u32 = 30;

/// Configuration for the GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Personal access token; unauthenticated requests work with lower limits.
    token: Option<Secret<String>>,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header the platform requires.
    pub user_agent: String,
}

impl GitHubClientConfig {
    /// Creates an unauthenticated configuration with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: "https://api.github.com".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("hackmatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret().as_str())
    }
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub REST implementation of the fetch port.
pub struct GitHubRestClient {
    config: GitHubClientConfig,
    client: Client,
}

impl GitHubRestClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: GitHubClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn user_url(&self, username: &Username) -> String {
        format!("{}/users/{}", self.config.base_url, username)
    }

    fn repos_url(&self, username: &Username) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.config.base_url, username, REPO_PAGE_SIZE
        )
    }

    fn events_url(&self, username: &Username) -> String {
        format!(
            "{}/users/{}/events/public?per_page={}",
            self.config.base_url, username, EVENT_PAGE_SIZE
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, GitHubError> {
        let mut request = self.client.get(url);
        if let Some(token) = self.config.token() {
            request = request.header("Authorization", format!("token {token}"));
        }
        request
            .send()
            .await
            .map_err(|e| GitHubError::network(e.to_string()))
    }

    /// Fetches the account profile; this is the only call allowed to fail
    /// the bundle.
    async fn fetch_user(&self, username: &Username) -> Result<RawUserRecord, GitHubError> {
        let response = self.get(&self.user_url(username)).await?;
        let status = response.status().as_u16();

        if let Some(err) = map_profile_status(status, username.as_str()) {
            return Err(err);
        }

        response
            .json()
            .await
            .map_err(|e| GitHubError::parse(e.to_string()))
    }

    /// Fetches the repository listing; any non-success status degrades to
    /// an empty sequence.
    async fn fetch_repositories(&self, username: &Username) -> Vec<RawRepositoryRecord> {
        self.fetch_listing(&self.repos_url(username), "repositories")
            .await
    }

    /// Fetches the public event stream; degrades like the repo listing.
    async fn fetch_events(&self, username: &Username) -> Vec<RawEventRecord> {
        self.fetch_listing(&self.events_url(username), "events").await
    }

    async fn fetch_listing<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        kind: &str,
    ) -> Vec<T> {
        let response = match self.get(url).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, kind, "listing fetch failed, continuing with empty list");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                kind, "listing fetch degraded, continuing with empty list"
            );
            return Vec::new();
        }
        match response.json().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, kind, "listing parse failed, continuing with empty list");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl GitHubClient for GitHubRestClient {
    async fn fetch_activity(&self, username: &Username) -> Result<ActivityBundle, GitHubError> {
        let user = self.fetch_user(username).await?;
        let repositories = self.fetch_repositories(username).await;
        let events = self.fetch_events(username).await;

        Ok(ActivityBundle {
            user,
            repositories,
            events,
        })
    }
}

/// Maps the profile endpoint status to an error, `None` on success.
fn map_profile_status(status: u16, username: &str) -> Option<GitHubError> {
    match status {
        200..=299 => None,
        404 => Some(GitHubError::user_not_found(username)),
        403 => Some(GitHubError::RateLimited),
        other => Some(GitHubError::UnexpectedStatus { status: other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GitHubClientConfig::new()
            .with_token("ghp_test")
            .with_base_url("https://ghe.example.com/api/v3")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.token(), Some("ghp_test"));
    }

    #[test]
    fn config_defaults_to_unauthenticated() {
        let config = GitHubClientConfig::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert!(config.token().is_none());
    }

    #[test]
    fn urls_embed_username_and_paging() {
        let client = GitHubRestClient::new(GitHubClientConfig::new());
        let username = Username::new("octocat").unwrap();

        assert_eq!(
            client.user_url(&username),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.repos_url(&username),
            "https://api.github.com/users/octocat/repos?per_page=100&sort=updated"
        );
        assert_eq!(
            client.events_url(&username),
            "https://api.github.com/users/octocat/events/public?per_page=30"
        );
    }

    #[test]
    fn profile_status_mapping() {
        assert!(map_profile_status(200, "u").is_none());

        assert!(matches!(
            map_profile_status(404, "ghost"),
            Some(GitHubError::UserNotFound { .. })
        ));
        assert!(matches!(
            map_profile_status(403, "u"),
            Some(GitHubError::RateLimited)
        ));
        assert!(matches!(
            map_profile_status(502, "u"),
            Some(GitHubError::UnexpectedStatus { status: 502 })
        ));
    }
}
