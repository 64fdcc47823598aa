//! Project-domain inference from repository metadata.
//!
//! A flat rule table, not a taxonomy: each `(label, keywords)` pair is
//! evaluated independently per repository, and a repository may contribute
//! to several domains.

use super::records::RawRepositoryRecord;
use super::repo_signals::rank_by_frequency;

/// How many repositories (by recency) are considered.
pub const DOMAIN_REPO_CAP: usize = 15;

/// Maximum ranked domains returned.
pub const PREFERRED_DOMAIN_CAP: usize = 5;

/// Domain labels keyed by substrings matched against name + description.
const DOMAIN_RULES: &[(&str, &[&str])] = &[
    (
        "Web Development",
        &["web", "website", "frontend", "backend", "fullstack"],
    ),
    (
        "Data Science & AI",
        &["data", "ml", "ai", "machine", "neural", "analysis"],
    ),
    (
        "Mobile Development",
        &["mobile", "android", "ios", "app", "flutter", "react-native"],
    ),
    (
        "DevOps & Infrastructure",
        &["docker", "kubernetes", "ci", "cd", "deploy", "infrastructure"],
    ),
    ("Game Development", &["game", "unity", "pygame", "gaming"]),
    (
        "Blockchain & Web3",
        &["blockchain", "crypto", "web3", "smart", "contract"],
    ),
];

/// Supplementary exact-match rules for topic tags.
const TOPIC_RULES: &[(&str, &[&str])] = &[
    (
        "Data Science & AI",
        &["machine-learning", "artificial-intelligence", "deep-learning"],
    ),
    ("Web Development", &["web-development", "frontend", "backend"]),
    ("Mobile Development", &["mobile", "android", "ios"]),
];

/// Classifier producing a ranked list of inferred project domains.
pub struct DomainClassifier;

impl DomainClassifier {
    /// Tallies domain matches over the most recent repositories and returns
    /// the top labels by frequency, ties broken by first-seen order.
    pub fn classify(repos: &[RawRepositoryRecord]) -> Vec<String> {
        let considered = &repos[..repos.len().min(DOMAIN_REPO_CAP)];
        let mut hits: Vec<String> = Vec::new();

        for repo in considered {
            let text = repo.searchable_text();
            for (label, keywords) in DOMAIN_RULES {
                if keywords.iter().any(|kw| text.contains(kw)) {
                    hits.push(label.to_string());
                }
            }

            for topic in &repo.topics {
                let topic = topic.to_lowercase();
                for (label, tags) in TOPIC_RULES {
                    if tags.contains(&topic.as_str()) {
                        hits.push(label.to_string());
                    }
                }
            }
        }

        rank_by_frequency(&hits, PREFERRED_DOMAIN_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, topics: &[&str]) -> RawRepositoryRecord {
        RawRepositoryRecord {
            name: name.to_string(),
            description: description.map(String::from),
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            size: 0,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            updated_at: None,
            fork: false,
        }
    }

    #[test]
    fn empty_input_yields_no_domains() {
        assert!(DomainClassifier::classify(&[]).is_empty());
    }

    #[test]
    fn classifies_by_name_keywords() {
        let repos = vec![repo("my-website", None, &[])];
        assert_eq!(DomainClassifier::classify(&repos), vec!["Web Development"]);
    }

    #[test]
    fn one_repository_can_hit_multiple_domains() {
        let repos = vec![repo(
            "game-analytics",
            Some("data pipeline for gaming"),
            &[],
        )];
        let domains = DomainClassifier::classify(&repos);
        assert!(domains.contains(&"Data Science & AI".to_string()));
        assert!(domains.contains(&"Game Development".to_string()));
    }

    #[test]
    fn ranking_orders_by_frequency() {
        let repos = vec![
            repo("webshop", None, &[]),
            repo("website-builder", None, &[]),
            repo("dockerfiles", None, &[]),
        ];
        let domains = DomainClassifier::classify(&repos);
        assert_eq!(domains[0], "Web Development");
        assert_eq!(domains[1], "DevOps & Infrastructure");
    }

    #[test]
    fn topic_tags_contribute_exact_matches() {
        let repos = vec![repo("utils", None, &["machine-learning", "android"])];
        let domains = DomainClassifier::classify(&repos);
        assert!(domains.contains(&"Data Science & AI".to_string()));
        assert!(domains.contains(&"Mobile Development".to_string()));
    }

    #[test]
    fn topic_matching_is_not_substring_based() {
        // "androids" is not the "android" tag.
        let repos = vec![repo("utils", None, &["androids"])];
        assert!(DomainClassifier::classify(&repos).is_empty());
    }

    #[test]
    fn only_first_fifteen_repositories_are_considered() {
        let mut repos: Vec<_> = (0..DOMAIN_REPO_CAP)
            .map(|i| repo(&format!("tool-{i}"), None, &[]))
            .collect();
        repos.push(repo("my-website", None, &[]));

        assert!(DomainClassifier::classify(&repos).is_empty());
    }

    #[test]
    fn result_capped_at_five_distinct_domains() {
        let repos = vec![repo(
            "everything",
            Some("web data mobile docker game blockchain"),
            &[],
        )];
        assert_eq!(
            DomainClassifier::classify(&repos).len(),
            PREFERRED_DOMAIN_CAP
        );
    }

    #[test]
    fn tie_break_preserves_first_seen_order() {
        let repos = vec![repo("web-game", None, &[])];
        // Both matched once; Web Development's rule is evaluated first.
        assert_eq!(
            DomainClassifier::classify(&repos),
            vec!["Web Development", "Game Development"]
        );
    }
}
