//! Request/response DTOs for the analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_AGENT;
use crate::domain::profile::ScoredProfile;

/// POST /analyze request body.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub username: String,
    #[serde(default = "default_agent")]
    pub agent: String,
}

fn default_agent() -> String {
    DEFAULT_AGENT.to_string()
}

/// Analysis response envelope.
///
/// Always returned with HTTP 200; failures carry `success: false` and a
/// user-facing `error` message. Downstream consumers rely on every key
/// being present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub agent: String,
    pub recommendations: Option<String>,
    pub profile: Option<ScoredProfile>,
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// Builds a success envelope.
    pub fn success(agent: impl Into<String>, recommendations: String, profile: ScoredProfile) -> Self {
        Self {
            success: true,
            agent: agent.into(),
            recommendations: Some(recommendations),
            profile: Some(profile),
            error: None,
        }
    }

    /// Builds a failure envelope with a user-facing message.
    pub fn failure(agent: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            agent: agent.into(),
            recommendations: None,
            profile: None,
            error: Some(error.into()),
        }
    }
}

/// GET /health response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    /// Healthy status with the crate version.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// GET /agents response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsResponse {
    pub agents: Vec<String>,
}

/// GET / response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

impl RootResponse {
    pub fn new() -> Self {
        Self {
            message: "Hackmatch - GitHub Profile Hackathon Recommender API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for RootResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn analysis_request_defaults_agent() {
        let request: AnalysisRequest =
            serde_json::from_value(json!({"username": "octocat"})).unwrap();
        assert_eq!(request.agent, DEFAULT_AGENT);

        let request: AnalysisRequest =
            serde_json::from_value(json!({"username": "octocat", "agent": "mentor"})).unwrap();
        assert_eq!(request.agent, "mentor");
    }

    #[test]
    fn failure_envelope_serializes_all_keys() {
        let response = AnalysisResponse::failure("hackathon_recommender", "boom");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json["recommendations"].is_null());
        assert!(json["profile"].is_null());
    }

    #[test]
    fn health_reports_crate_version() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
