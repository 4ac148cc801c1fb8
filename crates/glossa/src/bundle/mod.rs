//! Message bundles: loading translations, choosing a language, and checking
//! coverage across languages.

mod config;
mod coverage;
mod error;
mod loader;
mod localizer;
mod store;

pub use config::{BundleConfig, DEFAULT_LANGUAGE};
pub use coverage::{CoverageReport, check_dir, check_messages};
pub use error::{LoadError, TranslateError};
pub use loader::{MessageFile, MessageFormat, load_dir, load_file, parse_str};
pub use localizer::Localizer;
pub use store::Bundle;
