use std::fmt;
use std::str::FromStr;

use crate::domain::BumpLevel;
use crate::error::{RelkitError, Result};

/// Conventional commit type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitType {
    Build,
    Ci,
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Revert,
    Chore,
}

impl CommitType {
    /// All types in changelog section order
    pub const ALL: [CommitType; 11] = [
        CommitType::Build,
        CommitType::Ci,
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Revert,
        CommitType::Chore,
    ];

    /// The tag as it appears at the start of a subject line
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Revert => "revert",
            CommitType::Chore => "chore",
        }
    }

    /// Default changelog heading
    pub fn title(&self) -> &'static str {
        match self {
            CommitType::Build => "Build Systems",
            CommitType::Ci => "Continuous Integration",
            CommitType::Feat => "Features",
            CommitType::Fix => "Bug Fixes",
            CommitType::Docs => "Documentation",
            CommitType::Style => "Styles",
            CommitType::Refactor => "Code Refactoring",
            CommitType::Perf => "Performance Improvements",
            CommitType::Test => "Tests",
            CommitType::Revert => "Reverts",
            CommitType::Chore => "Chores",
        }
    }

    /// Bump bucket this type counts toward. `test` commits count toward none.
    pub fn bump_level(&self) -> Option<BumpLevel> {
        match self {
            CommitType::Perf => Some(BumpLevel::Major),
            CommitType::Feat | CommitType::Revert => Some(BumpLevel::Minor),
            CommitType::Build
            | CommitType::Ci
            | CommitType::Fix
            | CommitType::Docs
            | CommitType::Style
            | CommitType::Refactor
            | CommitType::Chore => Some(BumpLevel::Patch),
            CommitType::Test => None,
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = RelkitError;

    fn from_str(s: &str) -> Result<Self> {
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RelkitError::config(format!("Unknown commit type: '{}'", s)))
    }
}

/// Field layout of an input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub delimiter: String,
    pub id_field: usize,
    pub subject_field: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        RowLayout {
            delimiter: "\t".to_string(),
            id_field: 0,
            subject_field: 2,
        }
    }
}

/// One commit log row: its id and subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord<'a> {
    pub id: &'a str,
    pub subject: &'a str,
}

impl<'a> CommitRecord<'a> {
    /// Split a row according to `layout`. `line` is the 1-based input line
    /// number, used for error reporting.
    pub fn parse(row: &'a str, line: usize, layout: &RowLayout) -> Result<Self> {
        let fields: Vec<&str> = row.split(layout.delimiter.as_str()).collect();
        let expected = layout.id_field.max(layout.subject_field) + 1;
        if fields.len() < expected {
            return Err(RelkitError::MalformedRow {
                line,
                expected,
                found: fields.len(),
            });
        }

        Ok(CommitRecord {
            id: fields[layout.id_field],
            subject: fields[layout.subject_field],
        })
    }
}
