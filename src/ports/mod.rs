//! Ports - async trait seams between the application and its collaborators.

mod ai_provider;
mod github_client;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};
pub use github_client::{ActivityBundle, GitHubClient, GitHubError};
