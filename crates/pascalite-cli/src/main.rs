use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

/// Pascalite interpreter for a small Pascal subset.
///
/// Scans, parses and runs programs built from PROGRAM, VAR declarations and
/// BEGIN ... END blocks of assignments.
///
/// EXAMPLES:
///     pascalite run demo.pas             Run a program and print its variables
///     pascalite run demo.pas --json      Print variables as a JSON object
///     pascalite eval "(2 + 3) * 4"       Evaluate a single expression
///     pascalite ast demo.pas             Dump the syntax tree as JSON
///     pascalite tokens demo.pas          List the scanned tokens
///     pascalite check demo.pas           Parse and list declared variables
///
/// ENVIRONMENT VARIABLES:
///     PASCALITE_LOG                   Log filter (e.g. 'debug', 'pascalite_runtime=trace')
///     PASCALITE_JSON                  Set to '1', 'true' or 'yes' for JSON output by default
///     PASCALITE_FALSY_IS_UNDEFINED    Override interpreter.falsy_is_undefined
///     PASCALITE_MAX_NESTING_DEPTH     Override interpreter.max_nesting_depth
#[derive(Parser)]
#[command(name = "pascalite")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Use this config file instead of searching for pascalite.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Pascalite program
    ///
    /// Executes the program and prints every variable as `name = value`,
    /// sorted by name.
    ///
    /// EXAMPLES:
    ///     pascalite run demo.pas            Run a program
    ///     pascalite run demo.pas --json     Output variables and diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the source file
        file: PathBuf,
        /// Output results and diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a standalone expression
    ///
    /// EXAMPLES:
    ///     pascalite eval "10 div 4"
    ///     pascalite eval "'con' + 'cat'"
    #[command(visible_alias = "e")]
    Eval {
        /// Expression source text
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Dump the syntax tree as JSON
    Ast {
        /// Path to the source file
        file: PathBuf,
    },

    /// List the tokens of a source file
    ///
    /// Prints one token per line as `line:column kind value`.
    Tokens {
        /// Path to the source file
        file: PathBuf,
    },

    /// Parse and bind a program without running it
    ///
    /// Prints the declared variables and their types.
    #[command(visible_alias = "c")]
    Check {
        /// Path to the source file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    let options = config::runtime_options(&config);

    match cli.command {
        Commands::Run { file, json } => {
            // --json can only switch JSON on; PASCALITE_JSON and
            // [output] json are read by the config loader
            let use_json = json || config.json();
            commands::run::run(&file, options, use_json)?;
        }
        Commands::Eval { expr } => {
            commands::eval::run(&expr, options)?;
        }
        Commands::Ast { file } => {
            commands::ast::run(&file, options)?;
        }
        Commands::Tokens { file } => {
            commands::tokens::run(&file)?;
        }
        Commands::Check { file } => {
            commands::check::run(&file, options)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
///
/// `PASCALITE_LOG` wins when set; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PASCALITE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
