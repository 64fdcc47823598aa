//! Expertise scoring - a weighted composite of account age, repository
//! count, followers, activity, and repository complexity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::ActivityAnalysis;
use super::records::{parse_platform_timestamp, RawRepositoryRecord, RawUserRecord};

/// Repositories whose stars feed the complexity factor.
pub const COMPLEXITY_REPO_CAP: usize = 10;

/// Account-age factor used when the creation timestamp cannot be parsed.
const ACCOUNT_AGE_FALLBACK: f64 = 10.0;

/// Discrete expertise tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseTier {
    Newcomer,
    Beginner,
    Intermediate,
    Expert,
}

impl std::fmt::Display for ExpertiseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newcomer => write!(f, "newcomer"),
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

/// Scorer combining five independently capped factors.
///
/// | factor      | formula                          | cap |
/// |-------------|----------------------------------|-----|
/// | account age | years on the platform * 10       | 30  |
/// | repo count  | public repositories * 2          | 25  |
/// | followers   | followers * 0.5                  | 20  |
/// | activity    | recent activity score * 0.15     | 15  |
/// | complexity  | stars of first 10 repos * 0.2    | 10  |
pub struct ExpertiseScorer;

impl ExpertiseScorer {
    /// Computes the composite score and maps it to a tier.
    pub fn score(
        user: &RawUserRecord,
        repos: &[RawRepositoryRecord],
        activity: &ActivityAnalysis,
        now: DateTime<Utc>,
    ) -> ExpertiseTier {
        let account_age = Self::account_age_factor(user.created_at.as_deref(), now);
        let repo_count = (f64::from(user.public_repos) * 2.0).min(25.0);
        let followers = (f64::from(user.followers) * 0.5).min(20.0);
        let activity_points = f64::from(activity.recent_activity_score) * 0.15;

        let complexity_stars: u64 = repos
            .iter()
            .take(COMPLEXITY_REPO_CAP)
            .map(|r| u64::from(r.stargazers_count))
            .sum();
        let complexity = ((complexity_stars as f64 * 0.2) as u64).min(10) as f64;

        let total = account_age + repo_count + followers + activity_points + complexity;

        if total > 70.0 {
            ExpertiseTier::Expert
        } else if total > 40.0 {
            ExpertiseTier::Intermediate
        } else if total > 15.0 {
            ExpertiseTier::Beginner
        } else {
            ExpertiseTier::Newcomer
        }
    }

    /// Whole points per year on the platform, capped at 30.
    ///
    /// Falls back to a fixed value when the timestamp is absent or
    /// unparseable rather than failing the analysis.
    fn account_age_factor(created_at: Option<&str>, now: DateTime<Utc>) -> f64 {
        match created_at.and_then(parse_platform_timestamp) {
            Some(created) => {
                let years = (now - created).num_days() as f64 / 365.0;
                ((years * 10.0) as i64).min(30).max(0) as f64
            }
            None => ACCOUNT_AGE_FALLBACK,
        }
    }
}
