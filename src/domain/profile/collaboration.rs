//! Collaboration style classification from fork ratio and event counts.

use serde::{Deserialize, Serialize};

use super::records::{RawEventRecord, RawRepositoryRecord};

/// Collaboration events beyond this count mark the style collaborative.
const COLLAB_EVENT_THRESHOLD: usize = 5;

/// Tri-state working-style label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationStyle {
    #[default]
    Independent,
    Mixed,
    Collaborative,
}

impl std::fmt::Display for CollaborationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Independent => write!(f, "independent"),
            Self::Mixed => write!(f, "mixed"),
            Self::Collaborative => write!(f, "collaborative"),
        }
    }
}

/// Classifier combining repository fork flags with collaboration events.
pub struct CollaborationStyleClassifier;

impl CollaborationStyleClassifier {
    /// Classifies working style from the repository and event sequences.
    ///
    /// Fork, pull-request, and issue events count over the full event
    /// sequence, not just the recent window.
    pub fn classify(
        repos: &[RawRepositoryRecord],
        events: &[RawEventRecord],
    ) -> CollaborationStyle {
        let forked = repos.iter().filter(|r| r.fork).count();
        let original = repos.len() - forked;
        let collab_events = events
            .iter()
            .filter(|e| e.kind.is_collaborative())
            .count();

        if forked as f64 > original as f64 * 0.5 || collab_events > COLLAB_EVENT_THRESHOLD {
            CollaborationStyle::Collaborative
        } else if forked > 0 || collab_events > 0 {
            CollaborationStyle::Mixed
        } else {
            CollaborationStyle::Independent
        }
    }
}
