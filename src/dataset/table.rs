//! Immutable column-major table
//!
//! A `Dataset` is assembled once, validated, and then only ever read.
//! It is shared between widgets and sessions behind an `Arc`.

use std::collections::HashSet;

use super::error::{DatasetError, DatasetResult};
use super::types::Column;

/// A fixed, validated table of named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset, checking the table shape
    ///
    /// Every column must have a unique non-empty name, the same number of
    /// rows as the first column, and values matching its kind.
    pub fn new(columns: Vec<Column>) -> DatasetResult<Self> {
        let rows = columns.first().ok_or(DatasetError::NoColumns)?.len();

        let mut seen = HashSet::new();
        for (position, column) in columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(DatasetError::EmptyColumnName(position));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
            if column.len() != rows {
                return Err(DatasetError::RaggedColumn {
                    column: column.name.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
            if let Some(row) = column.values.iter().position(|v| !v.fits(column.kind)) {
                return Err(DatasetError::KindMismatch {
                    column: column.name.clone(),
                    row,
                    expected: column.kind.as_str(),
                });
            }
        }

        tracing::debug!(columns = columns.len(), rows, "Dataset assembled");

        Ok(Self { columns, rows })
    }

    /// Look up a column by exact name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns in schema order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in schema order (the dropdown options)
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Name of the column at a schema position
    pub fn column_name_at(&self, position: usize) -> Option<&str> {
        self.columns.get(position).map(|c| c.name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Positional row indices, 0-based
    pub fn row_indices(&self) -> impl Iterator<Item = usize> {
        0..self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::types::{ColumnKind, Value};

    #[test]
    fn test_valid_table() {
        let ds = Dataset::new(vec![
            Column::integer("a", &[1, 2]),
            Column::text("b", &["x", "y"]),
        ])
        .unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert_eq!(ds.column_name_at(1), Some("b"));
        assert_eq!(ds.row_indices().collect::<Vec<_>>(), vec![0, 1]);
        assert!(ds.column("missing").is_none());
    }

    #[test]
    fn test_no_columns() {
        assert_eq!(Dataset::new(vec![]), Err(DatasetError::NoColumns));
    }

    #[test]
    fn test_ragged_column() {
        let err = Dataset::new(vec![
            Column::integer("a", &[1, 2]),
            Column::integer("b", &[1]),
        ])
        .unwrap_err();

        assert!(matches!(err, DatasetError::RaggedColumn { actual: 1, .. }));
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let err = Dataset::new(vec![Column::integer("a", &[1]), Column::integer("a", &[2])])
            .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateColumn("a".into()));

        let err = Dataset::new(vec![Column::integer("a", &[1]), Column::integer(" ", &[2])])
            .unwrap_err();
        assert_eq!(err, DatasetError::EmptyColumnName(1));
    }

    #[test]
    fn test_kind_mismatch() {
        let column = Column::new(
            "a",
            ColumnKind::Numeric,
            vec![Value::Int(1), Value::from("two")],
        );
        let err = Dataset::new(vec![column]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::KindMismatch {
                column: "a".into(),
                row: 1,
                expected: "numeric",
            }
        );
    }
}
