//! For rendering a record as aligned `key value` rows.
//!
//! Keys are the JSON names of the record fields, in declaration order.
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Printed in place of an absent value or unknown field.
pub const NIL: &str = "<nil>";

#[derive(Debug, Error)]
pub enum PrintableError {
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Expected a record with named fields, got {0}")]
    NotARecord(String),
}

/// Column layout for [`Printable::columnize`].
#[derive(Clone, Debug, PartialEq)]
pub struct PrintableFormat {
    /// Minimum width of the key column, including padding.
    pub min_width: usize,
    /// Added to the longest key when that exceeds the minimum width.
    pub padding: usize,
    pub pad_char: char,
}

impl PrintableFormat {
    pub fn new(min_width: usize, padding: usize, pad_char: char) -> Self {
        PrintableFormat {
            min_width,
            padding,
            pad_char,
        }
    }
}

impl Default for PrintableFormat {
    fn default() -> Self {
        PrintableFormat::new(20, 0, ' ')
    }
}

/// Ordered (key, value) rows with values already rendered as text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Printable {
    rows: Vec<(String, String)>,
}

impl Printable {
    /// Flattens the top level of a serializable record.
    ///
    /// Nested values are kept as compact JSON, null becomes [`NIL`].
    pub fn from_struct<T: Serialize>(record: &T) -> Result<Self, PrintableError> {
        let value = serde_json::to_value(record)?;
        let Value::Object(map) = value else {
            return Err(PrintableError::NotARecord(value.to_string()));
        };
        let rows = map
            .into_iter()
            .map(|(key, value)| (key, render(&value)))
            .collect();
        Ok(Printable { rows })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(k, _)| k.as_str())
    }

    /// Looks up a value by key, ignoring case.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.as_str())
    }

    /// As for [`Printable::get`] with [`NIL`] for unknown fields.
    pub fn get_or_nil(&self, field: &str) -> &str {
        self.get(field).unwrap_or(NIL)
    }

    /// Aligns values in a second column. No trailing newline.
    pub fn columnize(&self, format: &PrintableFormat) -> String {
        let longest = self.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        let width = format.min_width.max(longest + format.padding);
        self.rows
            .iter()
            .map(|(key, value)| match format.pad_char {
                ' ' => format!("{key:<width$}{value}"),
                pad => {
                    let fill = width.saturating_sub(key.chars().count());
                    let padding: String = std::iter::repeat(pad).take(fill).collect();
                    format!("{key}{padding}{value}")
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => NIL.to_string(),
        Value::String(s) => s.to_owned(),
        other => other.to_string(),
    }
}
