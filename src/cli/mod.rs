//! CLI-facing orchestration, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run, run_with_config, Command, RunArgs, RunOutcome};
