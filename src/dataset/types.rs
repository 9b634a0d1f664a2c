//! Core data types for the in-memory dataset
//!
//! - `Value`: a single cell (integer, float or text)
//! - `ColumnKind`: numeric or categorical, fixed by the schema
//! - `Column`: a named, typed vector of values in row order

use serde::Serialize;
use std::fmt;

/// A single cell of the table
///
/// Serializes untagged so chart payloads carry plain JSON numbers and strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Whether this value can live in a column of the given kind
    pub fn fits(&self, kind: ColumnKind) -> bool {
        match (self, kind) {
            (Value::Int(_), ColumnKind::Numeric) => true,
            (Value::Float(f), ColumnKind::Numeric) => f.is_finite(),
            (Value::Text(_), ColumnKind::Categorical) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// Column classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        }
    }
}

/// A named column and its values in row order
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Value>,
}

impl Column {
    /// Create a column from raw parts (checked later by `Dataset::new`)
    pub fn new(name: impl Into<String>, kind: ColumnKind, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Numeric column of integers
    pub fn integer(name: impl Into<String>, values: &[i64]) -> Self {
        Self::new(
            name,
            ColumnKind::Numeric,
            values.iter().copied().map(Value::from).collect(),
        )
    }

    /// Numeric column of floats
    pub fn float(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(
            name,
            ColumnKind::Numeric,
            values.iter().copied().map(Value::from).collect(),
        )
    }

    /// Categorical column of labels
    pub fn text(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            name,
            ColumnKind::Categorical,
            values.iter().copied().map(Value::from).collect(),
        )
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Distinct values in order of first appearance, with how many rows carry each
    pub fn distinct_counts(&self) -> Vec<(Value, usize)> {
        let mut groups: Vec<(Value, usize)> = Vec::new();
        for value in &self.values {
            match groups.iter_mut().find(|(v, _)| v == value) {
                Some((_, count)) => *count += 1,
                None => groups.push((value.clone(), 1)),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(178).to_string(), "178");
        assert_eq!(Value::Float(6.8).to_string(), "6.8");
        assert_eq!(Value::Float(-0.65).to_string(), "-0.65");
        assert_eq!(Value::Text("China".into()).to_string(), "China");
    }

    #[test]
    fn test_value_serializes_untagged() {
        let values = vec![Value::Int(2020), Value::Float(6.8), Value::from("India")];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[2020,6.8,"India"]"#);
    }

    #[test]
    fn test_value_fits_kind() {
        assert!(Value::Int(1).fits(ColumnKind::Numeric));
        assert!(Value::Float(1.5).fits(ColumnKind::Numeric));
        assert!(!Value::Float(f64::NAN).fits(ColumnKind::Numeric));
        assert!(!Value::from("x").fits(ColumnKind::Numeric));
        assert!(Value::from("x").fits(ColumnKind::Categorical));
        assert!(!Value::Int(1).fits(ColumnKind::Categorical));
    }

    #[test]
    fn test_distinct_counts_preserve_first_appearance() {
        let col = Column::text("Country", &["China", "China", "Italy", "China", "India"]);
        let groups = col.distinct_counts();
        assert_eq!(
            groups,
            vec![
                (Value::from("China"), 3),
                (Value::from("Italy"), 1),
                (Value::from("India"), 1),
            ]
        );
    }

    #[test]
    fn test_distinct_counts_numeric_all_unique() {
        let col = Column::integer("Year", &[2020, 2003, 2000]);
        let groups = col.distinct_counts();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|(_, n)| *n == 1));
    }
}
