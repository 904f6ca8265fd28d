use regex::Regex;

use crate::domain::CommitType;
use crate::error::Result;

/// Ordered table of commit-type patterns, one per type in section order.
///
/// Each pattern is anchored at the start of the subject and accepts an
/// optional parenthesised scope and breaking-change marker:
/// `type(scope)!: description`.
pub struct CommitMatcher {
    patterns: Vec<(CommitType, Regex)>,
}

impl CommitMatcher {
    pub fn new() -> Result<Self> {
        let patterns = CommitType::ALL
            .iter()
            .map(|commit_type| -> Result<(CommitType, Regex)> {
                let pattern = format!(
                    r"^{}(\([^)]*\))?!?: (.*)$",
                    regex::escape(commit_type.as_str())
                );
                Ok((*commit_type, Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CommitMatcher { patterns })
    }

    /// Every type whose pattern matches `subject`, with the matched
    /// description, in table order.
    pub fn classify<'s>(&self, subject: &'s str) -> Vec<(CommitType, &'s str)> {
        self.patterns
            .iter()
            .filter_map(|(commit_type, re)| {
                re.captures(subject)
                    .and_then(|captures| captures.get(2))
                    .map(|description| (*commit_type, description.as_str()))
            })
            .collect()
    }
}
