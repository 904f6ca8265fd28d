//! Command orchestration
//!
//! Keeps argument parsing in main.rs apart from the work each command does.
//! Every command reads from any `BufRead` and writes to any `Write`, so the
//! whole pipeline can be driven from tests without spawning a process.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::analyzer::BumpLevelAnalyzer;
use crate::changelog;
use crate::config::{self, Config};
use crate::conventional::CommitMatcher;
use crate::domain::BumpLevel;
use crate::error::Result;
use crate::input::InputPolicy;
use crate::version::{self, VersionExtractor};

/// The operation to run over stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Group commit rows into a markdown changelog
    Changelog,
    /// Bump the version found on each line
    Bump(BumpLevel),
    /// Print the bump level implied by commit rows
    Level,
}

/// Arguments for a run
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Abort on the first unusable row or line
    pub strict: bool,

    pub command: Command,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Number of changelog sections written
    Changelog { sections: usize },
    /// Number of versions written
    Bump { written: usize },
    /// The level printed, if any
    Level(Option<BumpLevel>),
}

/// Load configuration and run `args.command` over `reader`.
pub fn run<R: BufRead, W: Write>(args: &RunArgs, reader: R, out: &mut W) -> Result<RunOutcome> {
    let config = config::load_config(args.config_path.as_deref())?;
    run_with_config(args, &config, reader, out)
}

/// Run `args.command` with an already loaded configuration.
///
/// Strict mode is on when either the flag or `behavior.strict` asks for it.
pub fn run_with_config<R: BufRead, W: Write>(
    args: &RunArgs,
    config: &Config,
    reader: R,
    out: &mut W,
) -> Result<RunOutcome> {
    let policy = InputPolicy::from_strict(args.strict || config.behavior.strict);
    let layout = config.input.layout();
    tracing::debug!(command = ?args.command, ?policy, "Running");

    match args.command {
        Command::Changelog => {
            let matcher = CommitMatcher::new()?;
            let groups = changelog::collect(reader, &matcher, &layout, policy)?;
            changelog::render(&groups, &config.changelog, out)?;
            out.flush()?;
            Ok(RunOutcome::Changelog {
                sections: groups.values().filter(|e| !e.is_empty()).count(),
            })
        }
        Command::Bump(level) => {
            let extractor = VersionExtractor::new()?;
            let written = version::bump_lines(reader, out, &extractor, level, policy)?;
            Ok(RunOutcome::Bump { written })
        }
        Command::Level => {
            let analyzer = BumpLevelAnalyzer::new(CommitMatcher::new()?, layout);
            let level = analyzer.analyze(reader, policy)?;
            if let Some(level) = level {
                writeln!(out, "{}", level)?;
                out.flush()?;
            }
            Ok(RunOutcome::Level(level))
        }
    }
}
