//! Activity pattern analysis - recency-weighted activity score and
//! collaboration-intensity signal over the public event stream.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::records::{parse_platform_timestamp, RawEventRecord, RawRepositoryRecord};

/// Trailing window for event recency.
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

/// Points per recent event, saturating at 100.
const POINTS_PER_EVENT: u32 = 3;

/// Bucketed activity tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTier {
    Low,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl std::fmt::Display for ActivityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

/// How much of the recent activity flows through reviewable channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationLevel {
    #[default]
    Individual,
    Mixed,
    Collaborative,
}

/// Derived activity signals, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    /// Integer score in `[0, 100]`.
    pub recent_activity_score: u32,
    #[serde(rename = "activity_type")]
    pub tier: ActivityTier,
    pub collaboration_level: CollaborationLevel,
}

impl Default for ActivityAnalysis {
    fn default() -> Self {
        Self {
            recent_activity_score: 0,
            tier: ActivityTier::Moderate,
            collaboration_level: CollaborationLevel::Individual,
        }
    }
}

/// Analyzer over a bounded event sequence.
pub struct ActivityPatternAnalyzer;

impl ActivityPatternAnalyzer {
    /// Computes activity signals from the event stream.
    ///
    /// An empty event sequence is an explicit degenerate case and returns
    /// the default record. The repository sequence is part of the contract
    /// for future extension and does not currently affect scoring.
    pub fn analyze(
        events: &[RawEventRecord],
        _repos: &[RawRepositoryRecord],
        now: DateTime<Utc>,
    ) -> ActivityAnalysis {
        if events.is_empty() {
            return ActivityAnalysis::default();
        }

        let cutoff = now - Duration::days(ACTIVITY_WINDOW_DAYS);
        let mut recent_events = 0u32;
        let mut push_events = 0u32;
        let mut pr_events = 0u32;

        for event in events {
            let created = match event.created_at.as_deref().and_then(parse_platform_timestamp) {
                Some(ts) => ts,
                None => continue,
            };
            if created <= cutoff {
                continue;
            }

            recent_events += 1;
            if event.kind.is_push() {
                push_events += 1;
            } else if event.kind.is_issue_or_pr() {
                pr_events += 1;
            }
        }

        ActivityAnalysis {
            recent_activity_score: (recent_events * POINTS_PER_EVENT).min(100),
            tier: Self::tier_for(recent_events),
            collaboration_level: Self::collaboration_for(push_events, pr_events),
        }
    }

    fn tier_for(recent_events: u32) -> ActivityTier {
        if recent_events > 20 {
            ActivityTier::VeryActive
        } else if recent_events > 10 {
            ActivityTier::Active
        } else if recent_events > 3 {
            ActivityTier::Moderate
        } else {
            ActivityTier::Low
        }
    }

    fn collaboration_for(push_events: u32, pr_events: u32) -> CollaborationLevel {
        if f64::from(pr_events) > f64::from(push_events) * 0.3 {
            CollaborationLevel::Collaborative
        } else if pr_events > 0 {
            CollaborationLevel::Mixed
        } else {
            CollaborationLevel::Individual
        }
    }
}
