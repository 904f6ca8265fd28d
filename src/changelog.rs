//! Changelog grouping and markdown rendering.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::config::ChangelogConfig;
use crate::conventional::CommitMatcher;
use crate::domain::{CommitType, RowLayout};
use crate::error::Result;
use crate::input::{for_each_row, InputPolicy};

/// A single changelog line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub id: String,
    pub description: String,
}

/// Entries grouped by commit type, each group in input order.
pub type ChangelogGroups = BTreeMap<CommitType, Vec<ChangelogEntry>>;

/// Read every row and group matching subjects by commit type.
pub fn collect<R: BufRead>(
    reader: R,
    matcher: &CommitMatcher,
    layout: &RowLayout,
    policy: InputPolicy,
) -> Result<ChangelogGroups> {
    let mut groups = ChangelogGroups::new();

    for_each_row(reader, layout, policy, |record| {
        for (commit_type, description) in matcher.classify(record.subject) {
            groups.entry(commit_type).or_default().push(ChangelogEntry {
                id: record.id.to_string(),
                description: description.to_string(),
            });
        }
    })?;

    Ok(groups)
}

/// Write one markdown section per non-empty group, in section order.
pub fn render<W: Write>(
    groups: &ChangelogGroups,
    config: &ChangelogConfig,
    out: &mut W,
) -> Result<()> {
    for commit_type in CommitType::ALL {
        let Some(entries) = groups.get(&commit_type).filter(|e| !e.is_empty()) else {
            continue;
        };

        writeln!(out, "### {}", config.title_for(commit_type))?;
        writeln!(out)?;
        for entry in entries {
            writeln!(out, "* {} ({})", entry.description, entry.id)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
