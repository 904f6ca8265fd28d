//! Analysis engine for determining the bump level implied by commits

pub mod bump_level;

pub use bump_level::{bump_level, BumpLevelAnalyzer, CommitCounts};
