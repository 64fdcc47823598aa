//! Raw platform records as returned by the code-hosting API.
//!
//! Every field the platform may omit or null carries an explicit default so
//! that sparse payloads deserialize cleanly. The analyzers never fail on a
//! missing field; they score whatever is present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account metadata from the `/users/{username}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUserRecord {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// ISO-8601 account creation timestamp; may be absent on degraded fetches.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// Per-repository metadata from the repository listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRepositoryRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

impl RawRepositoryRecord {
    /// Lowercased name and description joined for keyword matching.
    pub fn searchable_text(&self) -> String {
        let desc = self.description.as_deref().unwrap_or("");
        format!("{} {}", self.name.to_lowercase(), desc.to_lowercase())
    }
}

/// Per-event metadata from the public events endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEventRecord {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Event vocabulary. The platform emits many more kinds; anything outside the
/// scored vocabulary lands in `Other` and only counts toward recency totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Push,
    PullRequest,
    Issues,
    Fork,
    Other,
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PushEvent" => Self::Push,
            "PullRequestEvent" => Self::PullRequest,
            "IssuesEvent" => Self::Issues,
            "ForkEvent" => Self::Fork,
            _ => Self::Other,
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Push => "PushEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::Fork => "ForkEvent",
            EventKind::Other => "OtherEvent",
        }
        .to_string()
    }
}

impl EventKind {
    /// True for direct pushes.
    pub fn is_push(&self) -> bool {
        matches!(self, EventKind::Push)
    }

    /// True for pull-request and issue events.
    pub fn is_issue_or_pr(&self) -> bool {
        matches!(self, EventKind::PullRequest | EventKind::Issues)
    }

    /// True for events that indicate working with other people's code.
    pub fn is_collaborative(&self) -> bool {
        matches!(
            self,
            EventKind::PullRequest | EventKind::Issues | EventKind::Fork
        )
    }
}

/// Parses a platform timestamp, returning `None` for anything malformed.
///
/// Records with unparseable timestamps are excluded from time-windowed
/// aggregation rather than failing the analysis.
pub fn parse_platform_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
