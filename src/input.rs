//! Line-oriented stdin reading shared by all three commands.

use std::io::BufRead;

use crate::domain::{CommitRecord, RowLayout};
use crate::error::{RelkitError, Result};

/// What to do with a row or line that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Skip it and keep going.
    #[default]
    Skip,
    /// Abort the run with the rejection as the error.
    Fail,
}

impl InputPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            InputPolicy::Fail
        } else {
            InputPolicy::Skip
        }
    }

    /// Apply the policy to a rejected input line. Errors that are not input
    /// rejections always propagate.
    pub fn admit(&self, err: RelkitError) -> Result<()> {
        if !err.is_input_rejection() {
            return Err(err);
        }
        match self {
            InputPolicy::Fail => Err(err),
            InputPolicy::Skip => {
                if matches!(err, RelkitError::UnparseableVersion { .. }) {
                    tracing::debug!("Skipping: {}", err);
                } else {
                    tracing::warn!("Skipping: {}", err);
                }
                Ok(())
            }
        }
    }
}

/// Feed every commit row of `reader` to `on_row` until end of stream.
///
/// Blank lines are ignored. Short rows go through `policy`.
pub fn for_each_row<R, F>(
    reader: R,
    layout: &RowLayout,
    policy: InputPolicy,
    mut on_row: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(CommitRecord<'_>),
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match CommitRecord::parse(&line, index + 1, layout) {
            Ok(record) => on_row(record),
            Err(err) => policy.admit(err)?,
        }
    }
    Ok(())
}
