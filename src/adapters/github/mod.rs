//! GitHub fetch adapters.

mod mock;
mod rest_client;

pub use mock::MockGitHubClient;
pub use rest_client::{GitHubClientConfig, GitHubRestClient};
