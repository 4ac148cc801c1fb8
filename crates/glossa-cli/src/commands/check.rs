//! Implementation of the `glossa check` command.

use std::path::PathBuf;

use glossa::bundle::{CoverageReport, check_dir};
use glossa::{BundleConfig, Engine};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Directory of message files (.yaml, .yml, .json)
    pub dir: PathBuf,

    /// Language other languages are compared against
    #[arg(long)]
    pub source: Option<String>,

    /// Exit with a non-zero code if any issue is found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: &BundleConfig) -> miette::Result<i32> {
    debug!(dir = %args.dir.display(), source = ?args.source, "checking message files");
    let engine = Engine::builder().max_depth(config.max_depth).build();
    let report = check_dir(&args.dir, args.source.as_deref(), &engine).into_diagnostic()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        print_report(&report);
    }

    if args.strict && report.has_issues() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_report(report: &CoverageReport) {
    println!("Languages: {}", report.languages.join(", "));
    println!("Total keys: {}", report.all_keys.len());
    if let Some(source) = &report.source_language {
        println!("Source language: {source}");
    }

    for language in &report.languages {
        println!(
            "\n--- [{}] ---",
            language.if_supports_color(Stream::Stdout, |text| text.bold())
        );
        print_keys("Missing keys", report.missing.get(language));
        print_keys("Redundant keys", report.redundant.get(language));

        match report.syntax_errors.get(language) {
            Some(errors) => {
                println!("Syntax errors:");
                for (key, issues) in errors {
                    for issue in issues {
                        println!(
                            "  - {key}: {}",
                            issue.if_supports_color(Stream::Stdout, |text| text.red())
                        );
                    }
                }
            }
            None => println!("Syntax errors: None"),
        }
    }
}

fn print_keys(title: &str, keys: Option<&Vec<String>>) {
    match keys {
        Some(keys) if !keys.is_empty() => {
            println!("{title}:");
            for key in keys {
                println!(
                    "  - {}",
                    key.if_supports_color(Stream::Stdout, |text| text.yellow())
                );
            }
        }
        _ => println!("{title}: None"),
    }
}
