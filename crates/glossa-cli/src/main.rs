//! glossa CLI entry point.
//!
//! Provides command-line tools for working with message catalogs:
//! - `glossa check` - Report missing keys, redundant keys, and template errors
//! - `glossa coverage` - Summarize translation coverage per language
//! - `glossa eval` - Render a template string

mod commands;
mod output;

use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CheckArgs, CoverageArgs, EvalArgs, run_check, run_coverage, run_eval};
use glossa::BundleConfig;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GLOSSA_LOG";

/// glossa message catalog tools.
#[derive(Debug, Parser)]
#[command(name = "glossa")]
#[command(about = "glossa message catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bundle configuration file (TOML)
    #[arg(long, global = true, env = "GLOSSA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check message files for missing keys, redundant keys, and template errors
    Check(CheckArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Render a template string
    Eval(EvalArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `GLOSSA_LOG` overrides the default level.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> miette::Result<BundleConfig> {
    match path {
        Some(path) => BundleConfig::from_toml_file(path).into_diagnostic(),
        None => Ok(BundleConfig::default()),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let config = load_config(cli.config.as_ref())?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args, &config),
        Commands::Coverage(args) => run_coverage(args, &config),
        Commands::Eval(args) => run_eval(args, &config),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
