use std::io::{BufRead, Write};

use regex::Regex;
use semver::Version;

use crate::domain::{bump, BumpLevel};
use crate::error::{RelkitError, Result};
use crate::input::InputPolicy;

/// Finds a `major.minor.patch` triple, optionally prefixed with `v`,
/// anywhere in a line of text.
pub struct VersionExtractor {
    pattern: Regex,
}

impl VersionExtractor {
    pub fn new() -> Result<Self> {
        Ok(VersionExtractor {
            pattern: Regex::new(r"v?(\d+)\.(\d+)\.(\d+)")?,
        })
    }

    /// Extracts the first version found in `text`.
    ///
    /// Anything after the patch number (pre-release, build metadata) is
    /// ignored. Components that overflow `u64` make the match unusable.
    ///
    /// # Example
    /// ```ignore
    /// let extractor = VersionExtractor::new()?;
    /// assert_eq!(extractor.extract("release v1.2.3-beta"), Some(Version::new(1, 2, 3)));
    /// assert_eq!(extractor.extract("1.2"), None);
    /// ```
    pub fn extract(&self, text: &str) -> Option<Version> {
        let captures = self.pattern.captures(text)?;
        let component = |i: usize| captures.get(i)?.as_str().parse::<u64>().ok();
        Some(Version::new(component(1)?, component(2)?, component(3)?))
    }
}

/// Bumps the version found on each line of `reader` and writes it to `out`
/// immediately. Blank lines are ignored; other lines without a version, and
/// versions whose bumped field would overflow, go through `policy`.
///
/// Returns the number of versions written.
pub fn bump_lines<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    extractor: &VersionExtractor,
    level: BumpLevel,
    policy: InputPolicy,
) -> Result<usize> {
    let mut written = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(version) = extractor.extract(&line) else {
            policy.admit(RelkitError::UnparseableVersion { line: index + 1 })?;
            continue;
        };
        let Some(next) = bump(&version, level) else {
            policy.admit(RelkitError::VersionOverflow {
                line: index + 1,
                version: version.to_string(),
            })?;
            continue;
        };

        tracing::debug!(from = %version, to = %next, "Bumped {}", level);
        writeln!(out, "{}", next)?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}
