//! Built-in formatters.
//!
//! | Name       | Input                         | Argument                 |
//! |------------|-------------------------------|--------------------------|
//! | `upper`    | any (stringified)             | ignored                  |
//! | `lower`    | any (stringified)             | ignored                  |
//! | `title`    | any (stringified)             | ignored                  |
//! | `number`   | number, float, numeric string | decimals, 0 to 65535     |
//! | `currency` | number, float, numeric string | symbol (default `$`)     |
//! | `date`     | timestamp, RFC 3339 string    | strftime layout          |

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use unicode_segmentation::UnicodeSegmentation;

use crate::interpreter::{FormatError, FormatterRegistry};
use crate::types::Value;

/// Layout used by `date` when no argument is given.
pub const DEFAULT_DATE_LAYOUT: &str = "%Y-%m-%d";

/// Symbol used by `currency` when no argument is given.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Largest decimal count `number` accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Symbols stripped from currency strings before parsing.
const KNOWN_CURRENCY_SYMBOLS: &[&str] = &["$", "¥", "€", "£"];

/// Register every built-in formatter.
pub(crate) fn register_builtins(registry: &FormatterRegistry) {
    registry.register("upper", |value, _| {
        Ok(Value::String(value.to_string().to_uppercase()))
    });
    registry.register("lower", |value, _| {
        Ok(Value::String(value.to_string().to_lowercase()))
    });
    registry.register("title", |value, _| {
        Ok(Value::String(title_case(&value.to_string())))
    });
    registry.register("number", format_number);
    registry.register("currency", format_currency);
    registry.register("date", format_date);
}

/// Uppercase the first character of each word, leaving the rest unchanged.
pub fn title_case(text: &str) -> String {
    text.split_word_bounds().map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `number`: fixed decimals with `,` thousands separators.
pub fn format_number(value: &Value, arg: &str) -> Result<Value, FormatError> {
    let n = numeric_input(value, &[])?;
    let decimals = parse_decimals(arg)?;
    Ok(Value::String(group_thousands(&format!("{n:.decimals$}"))))
}

/// `currency`: two decimals with separators, prefixed by a symbol.
pub fn format_currency(value: &Value, arg: &str) -> Result<Value, FormatError> {
    let symbol = if arg.is_empty() {
        DEFAULT_CURRENCY_SYMBOL
    } else {
        arg
    };
    let n = numeric_input(value, &[symbol])?;
    Ok(Value::String(format!(
        "{symbol}{}",
        group_thousands(&format!("{n:.2}"))
    )))
}

/// `date`: format a timestamp with a strftime layout.
pub fn format_date(value: &Value, arg: &str) -> Result<Value, FormatError> {
    let layout = if arg.is_empty() {
        DEFAULT_DATE_LAYOUT
    } else {
        arg
    };

    let timestamp: DateTime<FixedOffset> = match value {
        Value::Timestamp(t) => *t,
        Value::String(s) => DateTime::parse_from_rfc3339(s).map_err(|_| FormatError::Type {
            expected: "timestamp or RFC 3339 string",
            found: "unparseable string",
        })?,
        other => {
            return Err(FormatError::Type {
                expected: "timestamp or RFC 3339 string",
                found: other.type_name(),
            });
        }
    };

    let invalid_layout = || FormatError::InvalidArgument {
        arg: layout.to_string(),
        reason: "not a valid strftime layout".to_string(),
    };
    let items: Vec<Item<'_>> = StrftimeItems::new(layout).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid_layout());
    }

    let mut out = String::new();
    write!(out, "{}", timestamp.format_with_items(items.iter()))
        .map_err(|_| invalid_layout())?;
    Ok(Value::String(out))
}

/// Coerce a numeric value or numeric-looking string to `f64`.
///
/// Strings are trimmed, a leading known currency symbol and then any of
/// `extra_symbols` is stripped, and `,` separators are removed.
fn numeric_input(value: &Value, extra_symbols: &[&str]) -> Result<f64, FormatError> {
    match value {
        Value::Number(n) => Ok(*n as f64),
        Value::Float(f) => Ok(*f),
        Value::String(s) => {
            let mut text = s.trim();
            if !extra_symbols.is_empty() {
                for symbol in KNOWN_CURRENCY_SYMBOLS.iter().chain(extra_symbols) {
                    text = text.strip_prefix(symbol).unwrap_or(text);
                }
            }
            text.replace(',', "")
                .parse::<f64>()
                .map_err(|_| FormatError::Parse {
                    input: s.clone(),
                    expected: "a number",
                })
        }
        other => Err(FormatError::Type {
            expected: "number or numeric string",
            found: other.type_name(),
        }),
    }
}

/// Parse the `number` precision argument (default 0).
pub(crate) fn parse_decimals(arg: &str) -> Result<usize, FormatError> {
    if arg.is_empty() {
        return Ok(0);
    }
    match arg.parse::<usize>() {
        Ok(decimals) if decimals <= MAX_PRECISION => Ok(decimals),
        _ => Err(FormatError::InvalidArgument {
            arg: arg.to_string(),
            reason: format!("precision must be an integer from 0 to {MAX_PRECISION}"),
        }),
    }
}

/// Insert `,` every three digits of the integer part, keeping a leading `-`.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = integer.chars().count();
    let mut out = String::with_capacity(formatted.len() + digits);
    out.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        if i != 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
