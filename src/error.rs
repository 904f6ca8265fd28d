use thiserror::Error;

/// Unified error type for relkit operations
#[derive(Error, Debug)]
pub enum RelkitError {
    #[error("Malformed row {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No version found on line {line}")]
    UnparseableVersion { line: usize },

    #[error("Version on line {line} cannot be bumped: {version} is at the numeric limit")]
    VersionOverflow { line: usize, version: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid commit pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relkit
pub type Result<T> = std::result::Result<T, RelkitError>;

impl RelkitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelkitError::Config(msg.into())
    }

    /// Whether this error describes a single rejected input line rather than
    /// a failure of the run itself.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            RelkitError::MalformedRow { .. }
                | RelkitError::UnparseableVersion { .. }
                | RelkitError::VersionOverflow { .. }
        )
    }
}
