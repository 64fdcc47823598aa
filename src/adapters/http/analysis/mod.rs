//! Analysis HTTP endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
