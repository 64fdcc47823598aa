//! Application command handlers.

mod analyze_profile;

pub use analyze_profile::{
    AnalysisError, AnalysisOutcome, AnalyzeProfileCommand, AnalyzeProfileHandler,
};
