//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "es", "fr").
    pub language: String,
    /// Number of reference keys translated.
    pub translated: usize,
    /// Keys missing from this language.
    pub missing: Vec<String>,
    /// Keys the source language does not have.
    pub redundant: usize,
    /// Messages with template errors.
    pub invalid: usize,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing", "Redundant", "Invalid"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, total),
            lang.missing.len().to_string(),
            lang.redundant.to_string(),
            lang.invalid.to_string(),
        ]);
    }

    table
}
