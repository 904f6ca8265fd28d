use std::fmt;

use semver::Version;

/// Which version field to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, clap::ValueEnum)]
pub enum BumpLevel {
    #[default]
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Bucket evaluation order, highest priority first
    pub const PRIORITY: [BumpLevel; 3] = [BumpLevel::Major, BumpLevel::Minor, BumpLevel::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bump version according to semver rules. Pre-release and build metadata
/// are dropped.
///
/// Returns `None` when the incremented field would overflow `u64`.
pub fn bump(version: &Version, level: BumpLevel) -> Option<Version> {
    let next = match level {
        BumpLevel::Major => Version::new(version.major.checked_add(1)?, 0, 0),
        BumpLevel::Minor => Version::new(version.major, version.minor.checked_add(1)?, 0),
        BumpLevel::Patch => Version::new(
            version.major,
            version.minor,
            version.patch.checked_add(1)?,
        ),
    };
    Some(next)
}
