use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a [`DataSource`](crate::data::source::DataSource) column.
///
/// Columns loaded from tables are loosely typed: numbers may arrive as text and
/// invalid numbers as `null`, `NaN` or the string `"NaN"`. [`Value::as_number`]
/// is the one place that decides whether a cell is a usable coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Missing,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the cell, `None` when it cannot be plotted.
    ///
    /// Text is parsed (surrounding whitespace ignored). NaN, in any form, is
    /// never returned. Booleans are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            Value::Number(v) => *v,
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
            Value::Bool(_) | Value::Missing => return None,
        };
        (!v.is_nan()).then_some(v)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text the search box matches against. Missing cells are empty.
    pub fn search_text(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s.as_str()),
            Value::Missing => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// Broad type of a column, used to decide which widgets it feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Every present cell is a number (axis choices).
    Numeric,
    /// Every present cell is a boolean (subset choices).
    Boolean,
    /// Anything else (search columns).
    Text,
}

impl ColumnKind {
    /// Classify a column from its values. Missing cells are ignored; a column
    /// of only missing cells counts as numeric.
    pub fn of(values: &[Value]) -> Self {
        let mut kind: Option<ColumnKind> = None;
        for v in values {
            let k = match v {
                Value::Missing => continue,
                Value::Number(_) => ColumnKind::Numeric,
                Value::Bool(_) => ColumnKind::Boolean,
                Value::Text(_) => return ColumnKind::Text,
            };
            match kind {
                None => kind = Some(k),
                Some(prev) if prev != k => return ColumnKind::Text,
                Some(_) => {}
            }
        }
        kind.unwrap_or(ColumnKind::Numeric)
    }
}
