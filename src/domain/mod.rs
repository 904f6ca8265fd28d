//! Domain types - commit records, commit types and version bump rules

pub mod commit;
pub mod version;

pub use commit::{CommitRecord, CommitType, RowLayout};
pub use version::{bump, BumpLevel};
