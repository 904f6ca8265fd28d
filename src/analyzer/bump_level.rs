use std::collections::HashMap;
use std::io::BufRead;

use crate::conventional::CommitMatcher;
use crate::domain::{BumpLevel, CommitType, RowLayout};
use crate::error::Result;
use crate::input::{for_each_row, InputPolicy};

/// Number of matched commits per commit type
pub type CommitCounts = HashMap<CommitType, usize>;

/// Analyzes commit rows to determine the minimum bump level
pub struct BumpLevelAnalyzer {
    matcher: CommitMatcher,
    layout: RowLayout,
}

impl BumpLevelAnalyzer {
    /// Create a new bump level analyzer
    pub fn new(matcher: CommitMatcher, layout: RowLayout) -> Self {
        BumpLevelAnalyzer { matcher, layout }
    }

    /// Tally commit types over every row of `reader`
    pub fn count<R: BufRead>(&self, reader: R, policy: InputPolicy) -> Result<CommitCounts> {
        let mut counts = CommitCounts::new();
        for_each_row(reader, &self.layout, policy, |record| {
            for (commit_type, _) in self.matcher.classify(record.subject) {
                *counts.entry(commit_type).or_insert(0) += 1;
            }
        })?;
        Ok(counts)
    }

    /// Read every row and return the implied bump level, if any
    pub fn analyze<R: BufRead>(
        &self,
        reader: R,
        policy: InputPolicy,
    ) -> Result<Option<BumpLevel>> {
        let counts = self.count(reader, policy)?;
        Ok(bump_level(&counts))
    }
}

/// Highest-priority bucket with at least one commit.
///
/// Buckets are evaluated major, minor, patch; evaluation stops at the first
/// non-empty one. Types outside every bucket (`test`) never contribute.
pub fn bump_level(counts: &CommitCounts) -> Option<BumpLevel> {
    BumpLevel::PRIORITY.into_iter().find(|level| {
        let total: usize = counts
            .iter()
            .filter(|(commit_type, _)| commit_type.bump_level() == Some(*level))
            .map(|(_, count)| *count)
            .sum();
        total > 0
    })
}
