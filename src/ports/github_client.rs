//! GitHub client port - interface for fetching a user's public activity.
//!
//! Implementations retrieve the three raw sequences the scoring engine
//! consumes. A degraded fetch of the repository or event listing yields an
//! empty list rather than an error; only the user profile itself is allowed
//! to fail the bundle.

use async_trait::async_trait;

use crate::domain::foundation::Username;
use crate::domain::profile::{RawEventRecord, RawRepositoryRecord, RawUserRecord};

/// One user's raw activity, fully materialized before analysis.
#[derive(Debug, Clone)]
pub struct ActivityBundle {
    pub user: RawUserRecord,
    /// Repository listing, most recently updated first, up to 100.
    pub repositories: Vec<RawRepositoryRecord>,
    /// Public events, most recent first, up to 30.
    pub events: Vec<RawEventRecord>,
}

/// Port for the code-hosting platform's public API.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetches the raw activity bundle for a user.
    async fn fetch_activity(&self, username: &Username) -> Result<ActivityBundle, GitHubError>;
}

/// GitHub fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The username does not exist on the platform.
    #[error("user '{username}' not found")]
    UserNotFound { username: String },

    /// The API rejected the request due to rate limiting.
    #[error("rate limit exceeded")]
    RateLimited,

    /// The API returned an unexpected status.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the API response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GitHubError {
    /// Creates a user-not-found error.
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// User-facing message suitable for the analysis response envelope.
    pub fn user_message(&self) -> String {
        match self {
            Self::UserNotFound { username } => format!(
                "GitHub user '{username}' not found. Please check the username and try again."
            ),
            Self::RateLimited => {
                "GitHub API rate limit exceeded. Please try again in a few minutes.".to_string()
            }
            Self::UnexpectedStatus { status } => {
                format!("GitHub API error: Unable to fetch profile (Status: {status})")
            }
            Self::Network(_) | Self::Parse(_) => {
                "Unable to reach GitHub. Please try again later.".to_string()
            }
        }
    }
}
