use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relkit::cli::{self, Command, RunArgs};
use relkit::domain::BumpLevel;
use relkit::ui;

#[derive(clap::Parser)]
#[command(
    name = "relkit",
    version,
    about = "Changelog, version bump and bump-level helpers for conventional commits"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Fail on the first malformed row or line without a version"
    )]
    strict: bool,

    #[arg(long, global = true, help = "Enable debug logging on stderr")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group tab-separated commit rows from stdin into a markdown changelog
    Changelog,

    /// Bump the semantic version found on each stdin line
    Bump {
        #[arg(value_enum, default_value_t = BumpLevel::Patch)]
        level: BumpLevel,
    },

    /// Print the bump level (major, minor or patch) implied by commit rows on stdin
    Level,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Changelog => Command::Changelog,
            Commands::Bump { level } => Command::Bump(level),
            Commands::Level => Command::Level,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug);

    let run_args = RunArgs {
        config_path: args.config,
        strict: args.strict,
        command: args.command.into(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::run(&run_args, stdin.lock(), &mut stdout.lock()) {
        ui::display_error(&e.to_string());
        if e.is_input_rejection() {
            ui::display_hint("Disable strict mode to skip unusable input instead");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("relkit=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
