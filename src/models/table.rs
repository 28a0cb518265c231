use serde::{Deserialize, Serialize};

use super::value::{ColumnType, Value};
use crate::error::NbaError;

/// One record of a [`Table`].
pub type Row = Vec<Value>;

/// An in-memory table: ordered column names and rows of cells.
///
/// Every row is exactly as wide as the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self, NbaError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != columns.len())
        {
            return Err(NbaError::PreconditionViolation(format!(
                "row {index} has {} cells but the table has {} columns",
                row.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Convenience constructor used by tests and small fixtures.
    ///
    /// # Examples
    ///
    /// ```
    /// use nba_stats_analyzer::models::{Table, Value};
    ///
    /// let table = Table::from_rows(
    ///     &["Player", "Tm", "PTS"],
    ///     vec![vec!["Stephen Curry".into(), "GSW".into(), Value::Int(2375)]],
    /// ).unwrap();
    /// assert_eq!(table.num_rows(), 1);
    /// assert_eq!(table.num_columns(), 3);
    /// ```
    pub fn from_rows(columns: &[&str], rows: Vec<Row>) -> Result<Self, NbaError> {
        Self::new(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column that the caller cannot work without.
    pub fn require_column(&self, name: &str) -> Result<usize, NbaError> {
        self.column_index(name)
            .ok_or_else(|| NbaError::MissingColumn(name.to_string()))
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Iterate the cells of a named column; `None` when the column is absent.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        self.column_index(name).map(|i| self.column_values(i))
    }

    pub fn column_type(&self, index: usize) -> ColumnType {
        ColumnType::infer(self.column_values(index))
    }

    /// Inferred type for every column, in column order.
    pub fn column_types(&self) -> Vec<(&str, ColumnType)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.column_type(i)))
            .collect()
    }

    /// The first `n` rows as a new table.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Keep the rows matching `predicate`, preserving order.
    pub fn filter_rows(&self, mut predicate: impl FnMut(&Row) -> bool) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }

    /// Replace every cell of a column with `f(cell)`.
    pub(crate) fn map_column(&mut self, index: usize, f: impl Fn(&Value) -> Value) {
        for row in &mut self.rows {
            row[index] = f(&row[index]);
        }
    }

    /// Number of distinct non-missing values in a column, compared by display text.
    pub fn distinct_count(&self, index: usize) -> usize {
        let mut seen = std::collections::HashSet::new();
        for value in self.column_values(index).filter(|v| !v.is_missing()) {
            seen.insert(value.to_string());
        }
        seen.len()
    }
}
