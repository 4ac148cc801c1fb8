//! Implementation of the `glossa eval` command.

use glossa::{BundleConfig, Engine, Map, Value};
use miette::{IntoDiagnostic, Report};
use serde::Serialize;
use tracing::debug;

use crate::output::LintDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to evaluate
    #[arg(long, required = true)]
    pub template: String,

    /// Parameters in name=value format (repeatable). Dotted names build
    /// nested values, e.g. `-p user.name=Tom`.
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Print lint diagnostics for the template before rendering
    #[arg(long)]
    pub lint: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    if key.is_empty() {
        return Err(format!("invalid parameter format '{s}': empty name"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Interpret a parameter string as an integer, float, bool, or string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(raw)
    }
}

/// Insert `value` at a dotted `path`, creating nested maps along the way.
fn insert_param(args: &mut Map, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = args;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Map(Map::new()));
        if !matches!(entry, Value::Map(_)) {
            *entry = Value::Map(Map::new());
        }
        let Value::Map(next) = entry else {
            return;
        };
        current = next;
    }
}

fn build_args(params: Vec<(String, String)>) -> Map {
    let mut args = Map::new();
    for (name, raw) in params {
        insert_param(&mut args, &name, parse_value(raw));
    }
    args
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, config: &BundleConfig) -> miette::Result<i32> {
    let engine = Engine::builder().max_depth(config.max_depth).build();

    if args.lint {
        for issue in engine.lint(&args.template) {
            let diagnostic = LintDiagnostic::new("template", &args.template, issue);
            eprintln!("{:?}", Report::new(diagnostic));
        }
    }

    let params = build_args(args.params);
    debug!(params = params.len(), "rendering template");
    match engine.render(&args.template, &params) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_typed() {
        assert_eq!(parse_value("3".into()), Value::Number(3));
        assert_eq!(parse_value("2.5".into()), Value::Float(2.5));
        assert_eq!(parse_value("true".into()), Value::Bool(true));
        assert_eq!(parse_value("Tom".into()), Value::from("Tom"));
    }

    #[test]
    fn dotted_names_build_nested_maps() {
        let args = build_args(vec![
            ("user.name".into(), "Tom".into()),
            ("user.age".into(), "30".into()),
            ("count".into(), "1".into()),
        ]);
        let user = args["user"].as_map().unwrap();
        assert_eq!(user["name"], Value::from("Tom"));
        assert_eq!(user["age"], Value::Number(30));
        assert_eq!(args["count"], Value::Number(1));
    }

    #[test]
    fn later_nested_name_replaces_scalar() {
        let args = build_args(vec![
            ("user".into(), "x".into()),
            ("user.name".into(), "Tom".into()),
        ]);
        assert_eq!(args["user"].lookup("name"), Some(&Value::from("Tom")));
    }

    #[test]
    fn key_val_requires_equals() {
        assert_eq!(
            parse_key_val("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_key_val("abc").is_err());
        assert!(parse_key_val("=x").is_err());
    }
}
