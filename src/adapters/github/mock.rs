//! Mock GitHub client for testing.
//!
//! Configurable to return a fixed activity bundle or inject fetch errors,
//! with call tracking for verification.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::Username;
use crate::domain::profile::RawUserRecord;
use crate::ports::{ActivityBundle, GitHubClient, GitHubError};

/// Scripted fetch outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Bundle(Box<ActivityBundle>),
    UserNotFound,
    RateLimited,
    Network(String),
}

/// Mock GitHub client returning a scripted outcome on every call.
#[derive(Clone)]
pub struct MockGitHubClient {
    outcome: MockOutcome,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubClient {
    /// Returns the given bundle for every fetch.
    pub fn with_bundle(bundle: ActivityBundle) -> Self {
        Self {
            outcome: MockOutcome::Bundle(Box::new(bundle)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a minimal bundle for the given login with no repositories
    /// or events.
    pub fn with_empty_user(login: impl Into<String>) -> Self {
        let login = login.into();
        Self::with_bundle(ActivityBundle {
            user: RawUserRecord {
                login,
                name: None,
                bio: None,
                company: None,
                location: None,
                created_at: None,
                public_repos: 0,
                followers: 0,
                following: 0,
            },
            repositories: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Fails every fetch with user-not-found.
    pub fn with_user_not_found() -> Self {
        Self {
            outcome: MockOutcome::UserNotFound,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every fetch with rate limiting.
    pub fn with_rate_limit() -> Self {
        Self {
            outcome: MockOutcome::RateLimited,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every fetch with a network error.
    pub fn with_network_error(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Network(message.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Usernames fetched so far.
    pub fn fetched_usernames(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn fetch_activity(&self, username: &Username) -> Result<ActivityBundle, GitHubError> {
        self.calls.lock().unwrap().push(username.to_string());

        match &self.outcome {
            MockOutcome::Bundle(bundle) => Ok((**bundle).clone()),
            MockOutcome::UserNotFound => Err(GitHubError::user_not_found(username.as_str())),
            MockOutcome::RateLimited => Err(GitHubError::RateLimited),
            MockOutcome::Network(message) => Err(GitHubError::network(message.clone())),
        }
    }
}
