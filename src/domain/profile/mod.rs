//! Profile scoring engine.
//!
//! Pure, deterministic transformations from raw platform records to a
//! scored developer profile. Every analyzer takes the reference instant as
//! a parameter; nothing here touches the ambient clock, performs I/O, or
//! keeps state across invocations.

mod activity;
mod aggregator;
mod collaboration;
mod domains;
mod expertise;
mod records;
mod repo_signals;

pub use activity::{
    ActivityAnalysis, ActivityPatternAnalyzer, ActivityTier, CollaborationLevel,
    ACTIVITY_WINDOW_DAYS,
};
pub use aggregator::{ProfileAggregator, ScoredProfile, DEEP_ANALYSIS_REPO_CAP, LANGUAGE_CAP};
pub use collaboration::{CollaborationStyle, CollaborationStyleClassifier};
pub use domains::{DomainClassifier, DOMAIN_REPO_CAP, PREFERRED_DOMAIN_CAP};
pub use expertise::{ExpertiseScorer, ExpertiseTier, COMPLEXITY_REPO_CAP};
pub use records::{
    parse_platform_timestamp, EventKind, RawEventRecord, RawRepositoryRecord, RawUserRecord,
};
pub use repo_signals::{
    ComplexityTier, RepositoryAnalysis, RepositorySignalExtractor, POPULAR_TOPIC_CAP,
    RECENT_ACTIVITY_WINDOW_DAYS,
};
