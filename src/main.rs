//! Service entry point: configuration, adapter wiring, and the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use secrecy::ExposeSecret;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hackmatch::adapters::ai::{GeminiConfig, GeminiProvider};
use hackmatch::adapters::github::{GitHubClientConfig, GitHubRestClient};
use hackmatch::adapters::http::analysis::{analysis_routes, AnalysisHandlers};
use hackmatch::application::handlers::AnalyzeProfileHandler;
use hackmatch::config::{AgentCatalog, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let mut github_config = GitHubClientConfig::new()
        .with_base_url(&config.github.base_url)
        .with_timeout(Duration::from_secs(config.github.timeout_secs));
    match &config.github.token {
        Some(token) => {
            github_config = github_config.with_token(token.expose_secret());
            info!("GitHub token configured");
        }
        None => info!("No GitHub token found - API rate limits will be lower"),
    }
    let github = Arc::new(GitHubRestClient::new(github_config));

    let mut gemini_config = GeminiConfig::new()
        .with_model(&config.ai.model)
        .with_base_url(&config.ai.base_url)
        .with_timeout(Duration::from_secs(config.ai.timeout_secs))
        .with_max_retries(config.ai.max_retries);
    match &config.ai.gemini_api_key {
        Some(key) => gemini_config = gemini_config.with_api_key(key.expose_secret()),
        None => info!("No Gemini API key found - recommendation requests will fail"),
    }
    let ai = Arc::new(GeminiProvider::new(gemini_config));

    let catalog = Arc::new(AgentCatalog::load(&config.agents_path));
    let analyze_handler = Arc::new(AnalyzeProfileHandler::new(github, ai, catalog.clone()));

    let app = analysis_routes(AnalysisHandlers::new(analyze_handler, catalog)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config)),
    );

    let addr = config.server.socket_addr();
    info!(%addr, "Starting hackmatch server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive CORS unless explicit origins are configured.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
