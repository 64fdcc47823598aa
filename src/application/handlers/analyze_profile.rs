//! AnalyzeProfile - orchestrates one analysis request end to end.
//!
//! Validates the username, fetches the raw activity bundle, runs the
//! scoring engine, builds the recommendation prompt, and calls the AI
//! provider. Scoring itself never fails; every failure comes from
//! validation or a collaborator.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::config::AgentCatalog;
use crate::domain::foundation::{Username, ValidationError};
use crate::domain::profile::{ProfileAggregator, ScoredProfile};
use crate::domain::recommendation::RecommendationPrompt;
use crate::ports::{AIError, AIProvider, CompletionRequest, GitHubClient, GitHubError};

/// Command to analyze one GitHub profile.
#[derive(Debug, Clone)]
pub struct AnalyzeProfileCommand {
    pub username: String,
    pub agent: String,
}

/// Successful analysis result.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub agent: String,
    pub recommendations: String,
    pub profile: ScoredProfile,
}

/// Failures of the analysis flow.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] ValidationError),

    #[error("agent '{agent}' not found")]
    UnknownAgent { agent: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] GitHubError),

    #[error("completion failed: {0}")]
    Completion(#[from] AIError),
}

impl AnalysisError {
    /// User-facing message for the analysis response envelope.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUsername(ValidationError::EmptyField { .. }) => {
                "Username cannot be empty. Please enter a valid GitHub username.".to_string()
            }
            Self::InvalidUsername(ValidationError::TooLong { .. }) => {
                "Username is too long. GitHub usernames must be 39 characters or less.".to_string()
            }
            Self::InvalidUsername(ValidationError::InvalidFormat { .. }) => {
                "Invalid username format. GitHub usernames can only contain letters, numbers, hyphens, and underscores."
                    .to_string()
            }
            Self::UnknownAgent { agent } => {
                format!("Agent {agent} not found in configuration")
            }
            Self::Fetch(e) => e.user_message(),
            Self::Completion(e) => e.user_message(),
        }
    }
}

/// Handler for profile analysis requests.
pub struct AnalyzeProfileHandler {
    github: Arc<dyn GitHubClient>,
    ai: Arc<dyn AIProvider>,
    catalog: Arc<AgentCatalog>,
}

impl AnalyzeProfileHandler {
    pub fn new(
        github: Arc<dyn GitHubClient>,
        ai: Arc<dyn AIProvider>,
        catalog: Arc<AgentCatalog>,
    ) -> Self {
        Self {
            github,
            ai,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeProfileCommand,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let username = Username::new(cmd.username)?;
        let agent = self
            .catalog
            .get(&cmd.agent)
            .ok_or_else(|| AnalysisError::UnknownAgent {
                agent: cmd.agent.clone(),
            })?;

        info!(username = %username, agent = %cmd.agent, "Starting profile analysis");

        let bundle = self.github.fetch_activity(&username).await.map_err(|e| {
            error!(username = %username, error = %e, "GitHub fetch failed");
            e
        })?;

        let profile = ProfileAggregator::analyze(
            &bundle.user,
            &bundle.repositories,
            &bundle.events,
            Utc::now(),
        );

        info!(
            username = %username,
            repositories = profile.repository_count,
            expertise = %profile.expertise_level,
            "Profile scored"
        );

        let prompt = RecommendationPrompt::build(&agent.instructions, &profile);
        let request = CompletionRequest::new(prompt)
            .with_temperature(agent.parameters.temperature)
            .with_max_tokens(agent.parameters.max_tokens);

        let completion = self.ai.complete(request).await.map_err(|e| {
            error!(username = %username, error = %e, "Recommendation generation failed");
            e
        })?;

        Ok(AnalysisOutcome {
            agent: cmd.agent,
            recommendations: completion.content,
            profile,
        })
    }
}
