//! Profile aggregation - orchestrates the analyzers over one raw input
//! bundle and assembles the scored profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::activity::{ActivityAnalysis, ActivityPatternAnalyzer};
use super::collaboration::{CollaborationStyle, CollaborationStyleClassifier};
use super::domains::DomainClassifier;
use super::expertise::{ExpertiseScorer, ExpertiseTier};
use super::records::{RawEventRecord, RawRepositoryRecord, RawUserRecord};
use super::repo_signals::{ComplexityTier, RepositoryAnalysis, RepositorySignalExtractor};

/// Repositories fed to deep analysis (signals, complexity, topics).
pub const DEEP_ANALYSIS_REPO_CAP: usize = 20;

/// Cap of each intermediate language ranking.
const LANGUAGE_RANK_CAP: usize = 8;

/// Cap of the merged language list.
pub const LANGUAGE_CAP: usize = 10;

/// Recently updated repository names surfaced on the profile.
const RECENT_REPO_CAP: usize = 5;

/// The engine's output: raw account fields plus every derived signal.
///
/// Serialized as a flat mapping; the recommendation collaborator is
/// guaranteed every key regardless of how sparse the raw input was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<String>,
    pub repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Deduplicated ranked languages, capped at ten.
    pub languages: Vec<String>,
    pub repository_count: usize,
    pub recent_repos: Vec<String>,
    pub repo_analysis: RepositoryAnalysis,
    pub activity_analysis: ActivityAnalysis,
    pub expertise_level: ExpertiseTier,
    pub preferred_domains: Vec<String>,
    pub collaboration_style: CollaborationStyle,
    pub recent_activity_score: u32,
    pub technology_diversity: usize,
    /// Mirrors the repository-analysis complexity tier.
    pub project_complexity_preference: ComplexityTier,
}

/// The engine's sole public entry point.
pub struct ProfileAggregator;

impl ProfileAggregator {
    /// Runs every analyzer over one raw bundle and assembles the profile.
    ///
    /// Total for any well-typed input: sub-analyzers degrade gracefully on
    /// sparse or partially malformed data instead of failing. `now` anchors
    /// all recency windows so repeated invocations with the same inputs are
    /// byte-identical.
    pub fn analyze(
        user: &RawUserRecord,
        repos: &[RawRepositoryRecord],
        events: &[RawEventRecord],
        now: DateTime<Utc>,
    ) -> ScoredProfile {
        let deep = &repos[..repos.len().min(DEEP_ANALYSIS_REPO_CAP)];
        let repo_analysis = RepositorySignalExtractor::analyze(deep, now);
        let activity_analysis = ActivityPatternAnalyzer::analyze(events, repos, now);
        let languages = merge_top_languages(repos);
        let expertise_level = ExpertiseScorer::score(user, repos, &activity_analysis, now);
        let preferred_domains = DomainClassifier::classify(repos);
        let collaboration_style = CollaborationStyleClassifier::classify(repos, events);

        let recent_repos = repos
            .iter()
            .take(RECENT_REPO_CAP)
            .map(|r| r.name.clone())
            .collect();

        ScoredProfile {
            username: user.login.clone(),
            name: user.name.clone(),
            bio: user.bio.clone(),
            company: user.company.clone(),
            location: user.location.clone(),
            created_at: user.created_at.clone(),
            repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            technology_diversity: languages.len(),
            languages,
            repository_count: repos.len(),
            recent_repos,
            recent_activity_score: activity_analysis.recent_activity_score,
            project_complexity_preference: repo_analysis.complexity,
            repo_analysis,
            activity_analysis,
            expertise_level,
            preferred_domains,
            collaboration_style,
        }
    }
}

/// Merges two independently computed language rankings.
///
/// One ranking weights each language by `(stars + 1) * (size + 1)`, the
/// other counts repositories. Both are capped at eight, then concatenated
/// weighted-first and deduplicated preserving first-seen order, capped at
/// ten. Kept as two lists rather than a blended score: order of discovery
/// across both rankings decides ties.
fn merge_top_languages(repos: &[RawRepositoryRecord]) -> Vec<String> {
    let mut by_count: Vec<(&str, u64)> = Vec::new();
    let mut by_weight: Vec<(&str, u64)> = Vec::new();

    for repo in repos {
        let lang = match repo.language.as_deref() {
            Some(l) => l,
            None => continue,
        };
        let weight = (u64::from(repo.stargazers_count) + 1) * (repo.size + 1);

        match by_count.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 += 1,
            None => by_count.push((lang, 1)),
        }
        match by_weight.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 += weight,
            None => by_weight.push((lang, weight)),
        }
    }

    // Stable sorts keep first-seen order on equal scores.
    by_count.sort_by(|a, b| b.1.cmp(&a.1));
    by_weight.sort_by(|a, b| b.1.cmp(&a.1));

    let mut merged: Vec<String> = Vec::new();
    for (lang, _) in by_weight
        .iter()
        .take(LANGUAGE_RANK_CAP)
        .chain(by_count.iter().take(LANGUAGE_RANK_CAP))
    {
        if merged.len() >= LANGUAGE_CAP {
            break;
        }
        if !merged.iter().any(|l| l == lang) {
            merged.push((*lang).to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::activity::ActivityTier;
    use crate::domain::profile::records::EventKind;

    fn now() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    fn user() -> RawUserRecord {
        RawUserRecord {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
            company: None,
            location: None,
            created_at: Some("2020-06-01T00:00:00Z".to_string()),
            public_repos: 8,
            followers: 4,
            following: 2,
        }
    }

    fn lang_repo(name: &str, language: &str, stars: u32, size: u64) -> RawRepositoryRecord {
        RawRepositoryRecord {
            name: name.to_string(),
            description: None,
            language: Some(language.to_string()),
            stargazers_count: stars,
            forks_count: 0,
            size,
            topics: Vec::new(),
            updated_at: None,
            fork: false,
        }
    }

    #[test]
    fn empty_input_is_total_with_documented_defaults() {
        let profile = ProfileAggregator::analyze(&user(), &[], &[], now());

        assert_eq!(profile.activity_analysis.tier, ActivityTier::Moderate);
        assert_eq!(
            profile.repo_analysis.complexity,
            ComplexityTier::Intermediate
        );
        assert_eq!(
            profile.collaboration_style,
            CollaborationStyle::Independent
        );
        assert_eq!(
            profile.project_complexity_preference,
            ComplexityTier::Intermediate
        );
        assert!(profile.languages.is_empty());
        assert_eq!(profile.technology_diversity, 0);
        assert_eq!(profile.repository_count, 0);
        assert_eq!(profile.recent_activity_score, 0);
    }

    #[test]
    fn repeated_invocations_are_byte_identical() {
        let repos = vec![
            lang_repo("a", "Rust", 12, 100),
            lang_repo("b", "Python", 3, 50),
        ];
        let events = vec![RawEventRecord {
            kind: EventKind::Push,
            created_at: Some("2025-05-25T00:00:00Z".to_string()),
        }];

        let first = ProfileAggregator::analyze(&user(), &repos, &events, now());
        let second = ProfileAggregator::analyze(&user(), &repos, &events, now());

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn complexity_preference_mirrors_repo_analysis() {
        let repos = vec![lang_repo("hot", "Rust", 600, 10)];
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(profile.repo_analysis.complexity, ComplexityTier::Advanced);
        assert_eq!(
            profile.project_complexity_preference,
            ComplexityTier::Advanced
        );
    }

    #[test]
    fn weighted_language_ranking_leads_the_merge() {
        // Rust appears once with a heavy weight; Python is more common but
        // light. The weighted list puts Rust first in the merged order.
        let repos = vec![
            lang_repo("p1", "Python", 0, 1),
            lang_repo("p2", "Python", 0, 1),
            lang_repo("p3", "Python", 0, 1),
            lang_repo("star", "Rust", 500, 900),
        ];
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(profile.languages, vec!["Rust", "Python"]);
    }

    #[test]
    fn language_merge_dedups_preserving_first_seen() {
        let repos = vec![
            lang_repo("a", "Go", 10, 10),
            lang_repo("b", "Go", 10, 10),
            lang_repo("c", "Rust", 1, 1),
        ];
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        // Both rankings produce [Go, Rust]; the union has no duplicates.
        assert_eq!(profile.languages, vec!["Go", "Rust"]);
        assert_eq!(profile.technology_diversity, 2);
    }

    #[test]
    fn language_list_capped_at_ten() {
        let repos: Vec<_> = (0..14)
            .map(|i| lang_repo(&format!("r{i}"), &format!("Lang{i}"), i, 1))
            .collect();
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(profile.languages.len(), LANGUAGE_CAP);
    }

    #[test]
    fn repositories_without_language_are_ignored_in_merge() {
        let mut no_lang = lang_repo("x", "Rust", 0, 0);
        no_lang.language = None;
        let repos = vec![no_lang, lang_repo("y", "Python", 0, 0)];
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(profile.languages, vec!["Python"]);
    }

    #[test]
    fn recent_repos_lists_first_five_names() {
        let repos: Vec<_> = (0..7)
            .map(|i| lang_repo(&format!("repo-{i}"), "Rust", 0, 0))
            .collect();
        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(
            profile.recent_repos,
            vec!["repo-0", "repo-1", "repo-2", "repo-3", "repo-4"]
        );
        assert_eq!(profile.repository_count, 7);
    }

    #[test]
    fn deep_analysis_only_sees_first_twenty_repositories() {
        // Stars on the 21st repository do not reach the totals.
        let mut repos: Vec<_> = (0..20)
            .map(|i| lang_repo(&format!("r{i}"), "Rust", 0, 0))
            .collect();
        repos.push(lang_repo("late", "Rust", 999, 0));

        let profile = ProfileAggregator::analyze(&user(), &repos, &[], now());
        assert_eq!(profile.repo_analysis.total_stars, 0);
    }

    #[test]
    fn serialized_profile_exposes_contract_keys() {
        let profile = ProfileAggregator::analyze(&user(), &[], &[], now());
        let json = serde_json::to_value(&profile).unwrap();

        for key in [
            "username",
            "languages",
            "repo_analysis",
            "activity_analysis",
            "expertise_level",
            "preferred_domains",
            "collaboration_style",
            "recent_activity_score",
            "technology_diversity",
            "project_complexity_preference",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["activity_analysis"]["activity_type"], "moderate");
        assert_eq!(json["repo_analysis"]["avg_complexity"], "intermediate");
    }
}
