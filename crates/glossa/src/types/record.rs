use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;

use super::Value;

/// A struct-like value with named fields.
///
/// Records model application structs passed into templates. Unlike
/// [`Map`](super::Map) keys, field names are matched case-insensitively, so a
/// template path `user.name` finds a field declared as `Name`.
///
/// # Example
///
/// ```
/// use glossa::{Record, Value};
///
/// let user = Record::builder()
///     .name("User")
///     .fields(vec![("Name".to_string(), Value::from("Tom"))])
///     .build();
///
/// assert_eq!(user.field("name"), Some(&Value::from("Tom")));
/// assert_eq!(user.field("NAME"), Some(&Value::from("Tom")));
/// assert_eq!(user.field("age"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct Record {
    /// Type name of the record, used only for display.
    #[builder(into, default)]
    pub name: String,

    /// Fields in declaration order.
    #[builder(default)]
    pub fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Record::builder().name(name).build()
    }

    /// Appends a field, returning the updated record.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Looks up a field by name, ignoring case.
    ///
    /// When several fields fold to the same name the first declared one wins.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| eq_ignore_case(field, name))
            .map(|(_, value)| value)
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Unicode-aware case-insensitive comparison.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.name.is_empty() {
            write!(f, "{} ", self.name)?;
        }
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_folds_non_ascii_case() {
        let record = Record::new("Straße").with_field("Größe", 180);
        assert_eq!(record.field("GRÖSSE"), None);
        assert_eq!(record.field("größe"), Some(&Value::Number(180)));
        assert_eq!(record.field("GRÖßE"), Some(&Value::Number(180)));
    }

    #[test]
    fn first_matching_field_wins() {
        let record = Record::new("Dup").with_field("id", 1).with_field("ID", 2);
        assert_eq!(record.field("Id"), Some(&Value::Number(1)));
    }

    #[test]
    fn display_lists_fields_in_order() {
        let record = Record::new("User").with_field("Name", "Tom").with_field("Age", 30);
        assert_eq!(record.to_string(), "User {Name: Tom, Age: 30}");
        assert_eq!(Record::default().to_string(), "{}");
    }
}
