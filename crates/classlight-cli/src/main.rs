//! Classlight CLI - qualified-name highlight rules for Java references.

use anyhow::Result;
use clap::Parser;
use classlight_cli::{commands, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "classlight")]
#[command(about = "Decide how Java references are highlighted from qualified-name rules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path
    ///
    /// Defaults to <config dir>/classlight/config.toml when it exists,
    /// otherwise the built-in rules are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Resolve candidate references read as a JSON array
    ///
    /// Examples:
    ///   classlight resolve refs.json
    ///   cat refs.json | classlight resolve --output json
    Resolve {
        /// JSON file with candidate references ("-" or omitted for stdin)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long = "output", value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the active rules and enabled sections
    Rules,

    /// Show the first rule matching a qualified name, ignoring sections
    Match {
        /// Fully-qualified name, e.g. java.util.List
        qualified_name: String,
    },

    /// Print the default configuration as TOML
    Defaults,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Defaults => commands::handle_defaults(),
        Command::Resolve { input, format } => {
            let manager = commands::load_config(cli.config.as_deref())?;
            commands::handle_resolve(&manager, input.as_deref(), format)
        }
        Command::Rules => {
            let manager = commands::load_config(cli.config.as_deref())?;
            commands::handle_rules(&manager)
        }
        Command::Match { qualified_name } => {
            let manager = commands::load_config(cli.config.as_deref())?;
            commands::handle_match(&manager, &qualified_name)
        }
    }
}
