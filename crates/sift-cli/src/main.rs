//! Sift command-line tool
//!
//! `sift lint` checks JavaScript/TypeScript files and optionally applies
//! fixes; `sift rules` lists the available rules.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SIFT_LOG";

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Rule-based linter for JavaScript and TypeScript", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint source files
    Lint {
        /// Files or directories to lint
        #[arg(default_value = ".")]
        paths: Vec<String>,
        /// Apply fixes and write the files back
        #[arg(long)]
        fix: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// Config file (default: nearest sift.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },

    /// List available rules
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
        color: ColorWhen,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Lint {
            paths,
            fix,
            format,
            config,
            color,
        } => {
            let options = commands::lint::LintOptions {
                fix,
                format,
                config,
                color,
            };
            let failed = commands::lint::execute(&paths, &options)?;
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Rules { format, color } => {
            commands::rules::execute(format, color)?;
        }
    }

    Ok(())
}
