//! Recommendation prompt assembly.
//!
//! Builds the text prompt the AI provider receives for a scored profile.
//! Pure string construction: the same profile and instructions always
//! produce the same prompt.

use crate::domain::profile::ScoredProfile;

/// Languages surfaced in the technical-profile section.
const PROMPT_LANGUAGE_CAP: usize = 8;

/// Items shown in the focused task constraints.
const TASK_HIGHLIGHT_CAP: usize = 3;

/// Builder for the recommendation prompt.
pub struct RecommendationPrompt;

impl RecommendationPrompt {
    /// Renders the full prompt from agent instructions and a scored profile.
    pub fn build(instructions: &str, profile: &ScoredProfile) -> String {
        let languages = join_capped(&profile.languages, PROMPT_LANGUAGE_CAP);
        let strongest = join_capped(&profile.languages, TASK_HIGHLIGHT_CAP);
        let recent_repos = join_capped(&profile.recent_repos, 5);
        let topics = join_capped(&profile.repo_analysis.popular_topics, 5);
        let frameworks = profile.repo_analysis.frameworks_used.join(", ");
        let top_frameworks =
            join_capped(&profile.repo_analysis.frameworks_used, TASK_HIGHLIGHT_CAP);
        let project_types = profile.repo_analysis.project_types.join(", ");

        let domains = if profile.preferred_domains.is_empty() {
            "General Development".to_string()
        } else {
            profile.preferred_domains.join(", ")
        };
        let focus_domains = if profile.preferred_domains.is_empty() {
            "versatile projects".to_string()
        } else {
            join_capped(&profile.preferred_domains, TASK_HIGHLIGHT_CAP)
        };

        format!(
            r#"{instructions}

COMPREHENSIVE GITHUB PROFILE ANALYSIS:

👤 BASIC INFO:
Username: {username}
Bio: {bio}
Company: {company}
Public Repositories: {repos}
Followers: {followers}

💻 TECHNICAL PROFILE:
Primary Languages: {languages}
Expertise Level: {expertise}
Technology Diversity: {diversity} different languages
Recent Repositories: {recent_repos}

🏆 REPOSITORY ANALYSIS:
Total Stars Earned: {total_stars}
Total Forks: {total_forks}
Project Complexity Preference: {complexity}
Popular Topics: {topics}
Frameworks Used: {frameworks}
Project Types: {project_types}

📊 ACTIVITY PATTERNS:
Recent Activity Score: {activity_score}/100
Activity Type: {activity_type}
Collaboration Style: {collaboration}
Recent Activity: {recent_activity}

🎯 PREFERRED DOMAINS:
{domains}

TASK:
Based on this comprehensive GitHub profile analysis, generate 5 highly personalized and creative hackathon project recommendations that:

1. Match the user's expertise level ({expertise})
2. Leverage their strongest languages: {strongest}
3. Align with their preferred domains: {focus_domains}
4. Consider their collaboration style: {collaboration}
5. Match their project complexity preference: {complexity}
6. Build upon their existing experience with: {top_frameworks}

Make each recommendation unique and exciting, considering their {activity_score}/100 activity score and {total_stars} total stars earned.

CRITICAL FORMATTING REQUIREMENTS - FOLLOW EXACTLY:

📊 **Profile Analysis Summary**
[Brief analysis of the user's skills and experience]

🚀 **Top 5 Hackathon Project Recommendations**

1. 🎯 **[Project Title]**
DESC: [Clear 2-3 sentence description of what the project does]
TECH: [Comma-separated list of specific technologies]
IMPL: [Step-by-step implementation approach]
DIFF: [Beginner/Intermediate/Advanced]
IMPACT: [Problem it solves and value]
TIME: [Hours estimate like "24-36 hours"]

2. 🎯 **[Project Title]**
DESC: [Description]
TECH: [Technologies]
IMPL: [Implementation]
DIFF: [Difficulty]
IMPACT: [Impact]
TIME: [Time estimate]

[Continue for projects 3-5 with EXACT same format]

💡 **Hackathon Strategy Tips**
[Brief tips]

ABSOLUTELY CRITICAL: Use the exact DESC:, TECH:, IMPL:, DIFF:, IMPACT:, TIME: format for EVERY project. No exceptions.
"#,
            instructions = instructions,
            username = profile.username,
            bio = profile.bio.as_deref().unwrap_or(""),
            company = profile.company.as_deref().unwrap_or(""),
            repos = profile.repos,
            followers = profile.followers,
            languages = languages,
            expertise = profile.expertise_level,
            diversity = profile.technology_diversity,
            recent_repos = recent_repos,
            total_stars = profile.repo_analysis.total_stars,
            total_forks = profile.repo_analysis.total_forks,
            complexity = profile.project_complexity_preference,
            topics = topics,
            frameworks = frameworks,
            project_types = project_types,
            activity_score = profile.recent_activity_score,
            activity_type = profile.activity_analysis.tier,
            collaboration = profile.collaboration_style,
            recent_activity = if profile.repo_analysis.recent_activity {
                "Yes"
            } else {
                "No"
            },
            domains = domains,
            strongest = strongest,
            focus_domains = focus_domains,
            top_frameworks = top_frameworks,
        )
    }
}

fn join_capped(items: &[String], cap: usize) -> String {
    items
        .iter()
        .take(cap)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
