//! Repository signal extraction - popularity totals, complexity tier,
//! framework/project-type detection, and the recent-activity flag.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::records::{parse_platform_timestamp, RawRepositoryRecord};

/// Trailing window for the recent-activity flag.
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 180;

/// Maximum ranked topics carried in the analysis.
pub const POPULAR_TOPIC_CAP: usize = 5;

/// Framework labels keyed by the substrings that reveal them.
const FRAMEWORK_RULES: &[(&str, &[&str])] = &[
    ("Frontend Framework", &["react", "vue", "angular"]),
    ("Backend Framework", &["django", "flask", "fastapi", "express"]),
];

/// Project-type labels keyed by the substrings that reveal them.
const PROJECT_TYPE_RULES: &[(&str, &[&str])] = &[
    ("AI/ML", &["ml", "ai", "neural", "tensorflow", "pytorch"]),
    ("API Development", &["api", "rest", "graphql"]),
    ("Mobile Development", &["mobile", "android", "ios", "flutter"]),
];

/// Bucketed project complexity derived from popularity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Aggregated repository signals, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryAnalysis {
    pub total_stars: u64,
    pub total_forks: u64,
    #[serde(rename = "avg_complexity")]
    pub complexity: ComplexityTier,
    pub popular_topics: Vec<String>,
    pub frameworks_used: Vec<String>,
    pub project_types: Vec<String>,
    pub recent_activity: bool,
}

impl Default for RepositoryAnalysis {
    fn default() -> Self {
        Self {
            total_stars: 0,
            total_forks: 0,
            complexity: ComplexityTier::Intermediate,
            popular_topics: Vec::new(),
            frameworks_used: Vec::new(),
            project_types: Vec::new(),
            recent_activity: false,
        }
    }
}

/// Extractor over a bounded repository listing.
pub struct RepositorySignalExtractor;

impl RepositorySignalExtractor {
    /// Scans the repository records and aggregates their signals.
    ///
    /// `now` anchors the recent-activity window; records with unparseable
    /// `updated_at` timestamps are skipped, never fatal.
    pub fn analyze(repos: &[RawRepositoryRecord], now: DateTime<Utc>) -> RepositoryAnalysis {
        let mut analysis = RepositoryAnalysis::default();
        let mut all_topics: Vec<String> = Vec::new();
        let recency_cutoff = now - Duration::days(RECENT_ACTIVITY_WINDOW_DAYS);

        for repo in repos {
            analysis.total_stars += u64::from(repo.stargazers_count);
            analysis.total_forks += u64::from(repo.forks_count);
            all_topics.extend(repo.topics.iter().cloned());

            let text = repo.searchable_text();
            for (label, keywords) in FRAMEWORK_RULES {
                if keywords.iter().any(|kw| text.contains(kw)) {
                    push_unique(&mut analysis.frameworks_used, label);
                }
            }
            for (label, keywords) in PROJECT_TYPE_RULES {
                if keywords.iter().any(|kw| text.contains(kw)) {
                    push_unique(&mut analysis.project_types, label);
                }
            }

            if let Some(raw) = repo.updated_at.as_deref() {
                if let Some(updated) = parse_platform_timestamp(raw) {
                    if updated > recency_cutoff {
                        analysis.recent_activity = true;
                    }
                }
            }
        }

        analysis.complexity = Self::complexity_tier(
            analysis.total_stars,
            analysis.total_forks,
            repos.len(),
        );
        analysis.popular_topics = rank_by_frequency(&all_topics, POPULAR_TOPIC_CAP);

        analysis
    }

    /// Maps popularity totals to a complexity tier.
    ///
    /// Strict comparisons: an average of exactly 50 stars stays intermediate.
    fn complexity_tier(total_stars: u64, total_forks: u64, repo_count: usize) -> ComplexityTier {
        let avg_stars = total_stars as f64 / repo_count.max(1) as f64;
        if avg_stars > 50.0 || total_forks > 20 {
            ComplexityTier::Advanced
        } else if avg_stars < 5.0 && total_forks < 3 {
            ComplexityTier::Beginner
        } else {
            ComplexityTier::Intermediate
        }
    }
}

/// Appends `label` unless already present, preserving first-seen order.
fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|l| l == label) {
        labels.push(label.to_string());
    }
}

/// Ranks items by descending frequency, capped at `limit`.
///
/// Stable counting: on equal counts the first-encountered item wins.
pub(crate) fn rank_by_frequency(items: &[String], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item.as_str()) {
            Some(entry) => entry.1 += 1,
            None => counts.push((item.as_str(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(item, _)| item.to_string())
        .collect()
}
