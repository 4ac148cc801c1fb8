//! Coverage command implementation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use glossa::bundle::check_dir;
use glossa::{BundleConfig, Engine};
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory of message files (.yaml, .yml, .json)
    pub dir: PathBuf,

    /// Source language (e.g., en). Defaults to the configured default language.
    #[arg(long)]
    pub source: Option<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs, config: &BundleConfig) -> Result<i32> {
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    let engine = Engine::builder().max_depth(config.max_depth).build();
    let report = check_dir(&args.dir, Some(&source), &engine).into_diagnostic()?;

    if report.source_language.is_none() {
        return Err(miette!(
            "source language '{}' has no messages in {}",
            source,
            args.dir.display()
        ));
    }

    let total = report.reference_keys;
    let coverage_data: Vec<LanguageCoverage> = report
        .languages
        .iter()
        .filter(|language| **language != source)
        .map(|language| LanguageCoverage {
            language: language.clone(),
            translated: report.translated_count(language),
            missing: report.missing.get(language).cloned().unwrap_or_default(),
            redundant: report.redundant.get(language).map_or(0, Vec::len),
            invalid: report.syntax_errors.get(language).map_or(0, BTreeMap::len),
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
