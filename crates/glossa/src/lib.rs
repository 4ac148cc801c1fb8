pub mod bundle;
pub mod global;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use bundle::{Bundle, BundleConfig, Localizer};
pub use interpreter::{
    Engine, EvalError, FormatError, FormatterRegistry, LintIssue, TemplateCache,
    compute_suggestions,
};
pub use parser::{Template, parse_template};
pub use types::{Map, Record, Value, ValueError, to_value};

/// Creates a [`Map`] of render arguments from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, timestamps, records, or nested maps directly.
///
/// # Example
///
/// ```
/// use glossa::{args, Value};
///
/// let a = args! { "count" => 3, "user" => args! { "name" => "Alice" } };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(3));
/// assert_eq!(a["user"].lookup("name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        $crate::Map::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Map::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
