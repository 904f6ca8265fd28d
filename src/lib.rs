pub mod analyzer;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod input;
pub mod ui;
pub mod version;

pub use error::{RelkitError, Result};
