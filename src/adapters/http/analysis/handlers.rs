//! HTTP handlers for the analysis endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::handlers::{AnalyzeProfileCommand, AnalyzeProfileHandler};
use crate::config::AgentCatalog;

use super::dto::{
    AgentsResponse, AnalysisRequest, AnalysisResponse, HealthResponse, RootResponse,
};

/// Shared handler state.
#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: Arc<AnalyzeProfileHandler>,
    catalog: Arc<AgentCatalog>,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeProfileHandler>, catalog: Arc<AgentCatalog>) -> Self {
        Self {
            analyze_handler,
            catalog,
        }
    }
}

/// POST /analyze - analyze a profile and generate recommendations.
///
/// Always answers 200; failures are carried in the envelope so the caller
/// sees a stable shape.
pub async fn analyze_profile(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<AnalysisRequest>,
) -> Json<AnalysisResponse> {
    let agent = req.agent.clone();
    let cmd = AnalyzeProfileCommand {
        username: req.username,
        agent: req.agent,
    };

    match handlers.analyze_handler.handle(cmd).await {
        Ok(outcome) => Json(AnalysisResponse::success(
            outcome.agent,
            outcome.recommendations,
            outcome.profile,
        )),
        Err(e) => Json(AnalysisResponse::failure(agent, e.user_message())),
    }
}

/// GET /health - health check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /agents - list available agents.
pub async fn list_agents(State(handlers): State<AnalysisHandlers>) -> Json<AgentsResponse> {
    Json(AgentsResponse {
        agents: handlers.catalog.names(),
    })
}

/// GET / - service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::new())
}
