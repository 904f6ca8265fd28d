use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CommitType, RowLayout};
use crate::error::{RelkitError, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "relkit.toml";

/// Represents the complete configuration for relkit.
///
/// Every section is optional; an empty file behaves exactly like no file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_id_field() -> usize {
    0
}

fn default_subject_field() -> usize {
    2
}

/// Layout of the commit log rows read from stdin.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default = "default_id_field")]
    pub id_field: usize,

    #[serde(default = "default_subject_field")]
    pub subject_field: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            delimiter: default_delimiter(),
            id_field: default_id_field(),
            subject_field: default_subject_field(),
        }
    }
}

impl InputConfig {
    pub fn layout(&self) -> RowLayout {
        RowLayout {
            delimiter: self.delimiter.clone(),
            id_field: self.id_field,
            subject_field: self.subject_field,
        }
    }
}

/// Changelog rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ChangelogConfig {
    /// Heading overrides keyed by commit type tag (e.g. `feat = "New Features"`).
    #[serde(default)]
    pub titles: HashMap<String, String>,
}

impl ChangelogConfig {
    /// Section heading for `commit_type`, falling back to the built-in title.
    pub fn title_for(&self, commit_type: CommitType) -> &str {
        self.titles
            .get(commit_type.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| commit_type.title())
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Abort on the first rejected row or line instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Reject settings that would make every row unreadable or that name
    /// unknown commit types.
    pub fn validate(&self) -> Result<()> {
        if self.input.delimiter.is_empty() {
            return Err(RelkitError::config("input.delimiter must not be empty"));
        }
        if self.input.id_field == self.input.subject_field {
            return Err(RelkitError::config(
                "input.id_field and input.subject_field must differ",
            ));
        }
        for key in self.changelog.titles.keys() {
            key.parse::<CommitType>().map_err(|_| {
                RelkitError::config(format!("changelog.titles: unknown commit type '{}'", key))
            })?;
        }
        Ok(())
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("relkit").join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relkit.toml` in current directory
/// 3. `relkit/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Some(PathBuf::from(LOCAL_CONFIG_FILE))
    } else {
        user_config_path().filter(|path| path.exists())
    };

    let Some(path) = path else {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "Loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
