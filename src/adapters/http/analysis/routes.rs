//! HTTP routes for the analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_profile, health_check, list_agents, root, AnalysisHandlers};

/// Creates the analysis router with all endpoints.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/agents", get(list_agents))
        .route("/analyze", post(analyze_profile))
        .with_state(handlers)
}
