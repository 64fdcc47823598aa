//! Integration tests for the analysis HTTP endpoints.
//!
//! Exercises the full flow over mock adapters: request DTOs in, the scoring
//! engine in the middle, response envelopes out.

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use hackmatch::adapters::ai::MockAIProvider;
use hackmatch::adapters::github::MockGitHubClient;
use hackmatch::adapters::http::analysis::{analysis_routes, AnalysisHandlers};
use hackmatch::application::handlers::AnalyzeProfileHandler;
use hackmatch::config::AgentCatalog;
use hackmatch::domain::profile::{
    EventKind, RawEventRecord, RawRepositoryRecord, RawUserRecord,
};
use hackmatch::ports::ActivityBundle;

// =============================================================================
// Test infrastructure
// =============================================================================

fn app(github: MockGitHubClient, ai: MockAIProvider) -> axum::Router {
    let catalog = Arc::new(AgentCatalog::built_in());
    let handler = Arc::new(AnalyzeProfileHandler::new(
        Arc::new(github),
        Arc::new(ai),
        catalog.clone(),
    ));
    analysis_routes(AnalysisHandlers::new(handler, catalog))
}

fn rich_bundle() -> ActivityBundle {
    let recent = (chrono::Utc::now() - chrono::Duration::days(5)).to_rfc3339();

    let repo = |name: &str, lang: &str, stars: u32| RawRepositoryRecord {
        name: name.to_string(),
        description: Some("web dashboard".to_string()),
        language: Some(lang.to_string()),
        stargazers_count: stars,
        forks_count: 1,
        size: 200,
        topics: vec!["frontend".to_string()],
        updated_at: Some(recent.clone()),
        fork: false,
    };

    ActivityBundle {
        user: RawUserRecord {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: Some("Builds things".to_string()),
            company: None,
            location: None,
            created_at: Some("2019-01-01T00:00:00Z".to_string()),
            public_repos: 3,
            followers: 12,
            following: 4,
        },
        repositories: vec![
            repo("react-dashboard", "TypeScript", 25),
            repo("api-server", "Rust", 10),
            repo("scripts", "Python", 2),
        ],
        events: vec![
            RawEventRecord {
                kind: EventKind::Push,
                created_at: Some(recent.clone()),
            },
            RawEventRecord {
                kind: EventKind::PullRequest,
                created_at: Some(recent),
            },
        ],
    }
}

async fn post_analyze(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn analyze_returns_scored_profile_and_recommendations() {
    let ai = MockAIProvider::new().with_response("1. Build a dashboard");
    let app = app(MockGitHubClient::with_bundle(rich_bundle()), ai);

    let (status, body) = post_analyze(app, json!({"username": "octocat"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["agent"], "hackathon_recommender");
    assert_eq!(body["recommendations"], "1. Build a dashboard");

    let profile = &body["profile"];
    assert_eq!(profile["username"], "octocat");
    assert_eq!(profile["repository_count"], 3);
    assert_eq!(profile["repo_analysis"]["total_stars"], 37);
    assert_eq!(profile["repo_analysis"]["recent_activity"], true);
    // 2 recent events of which 1 pull request: collaborative.
    assert_eq!(
        profile["activity_analysis"]["collaboration_level"],
        "collaborative"
    );
    assert_eq!(profile["recent_activity_score"], 6);
    // Every contract key must be present even when derived lists are short.
    for key in [
        "languages",
        "preferred_domains",
        "collaboration_style",
        "expertise_level",
        "technology_diversity",
        "project_complexity_preference",
    ] {
        assert!(profile.get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn analyze_unknown_user_fails_in_envelope() {
    let app = app(MockGitHubClient::with_user_not_found(), MockAIProvider::new());

    let (status, body) = post_analyze(app, json!({"username": "ghost"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("'ghost' not found"));
    assert!(body["profile"].is_null());
    assert!(body["recommendations"].is_null());
}

#[tokio::test]
async fn analyze_invalid_username_fails_in_envelope() {
    let app = app(
        MockGitHubClient::with_empty_user("octocat"),
        MockAIProvider::new(),
    );

    let (status, body) = post_analyze(app, json!({"username": "  "})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("cannot be empty"));
}

#[tokio::test]
async fn analyze_unknown_agent_fails_in_envelope() {
    let app = app(
        MockGitHubClient::with_empty_user("octocat"),
        MockAIProvider::new(),
    );

    let (_, body) = post_analyze(
        app,
        json!({"username": "octocat", "agent": "nonexistent"}),
    )
    .await;

    assert_eq!(body["success"], false);
    assert_eq!(body["agent"], "nonexistent");
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn analyze_sparse_user_still_succeeds() {
    // A user with no repositories or events gets the documented defaults.
    let ai = MockAIProvider::new().with_response("starter ideas");
    let app = app(MockGitHubClient::with_empty_user("newbie"), ai);

    let (_, body) = post_analyze(app, json!({"username": "newbie"})).await;

    assert_eq!(body["success"], true);
    let profile = &body["profile"];
    assert_eq!(profile["activity_analysis"]["activity_type"], "moderate");
    assert_eq!(profile["repo_analysis"]["avg_complexity"], "intermediate");
    assert_eq!(profile["collaboration_style"], "independent");
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = app(
        MockGitHubClient::with_empty_user("octocat"),
        MockAIProvider::new(),
    );
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn agents_lists_catalog() {
    let app = app(
        MockGitHubClient::with_empty_user("octocat"),
        MockAIProvider::new(),
    );
    let (status, body) = get(app, "/agents").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agents"][0], "hackathon_recommender");
}

#[tokio::test]
async fn root_returns_banner() {
    let app = app(
        MockGitHubClient::with_empty_user("octocat"),
        MockAIProvider::new(),
    );
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Hackmatch"));
}
