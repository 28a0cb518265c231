use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::models::Table;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize the non-missing values of a column.
    pub fn from_values(name: impl Into<String>, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let count = values.len();
        let min = values.first().copied().unwrap_or(f64::NAN);
        let max = values.last().copied().unwrap_or(f64::NAN);

        ColumnSummary {
            name: name.into(),
            count,
            mean: values.iter().mean(),
            std: values.iter().std_dev(),
            min,
            q25: percentile(&values, 0.25),
            median: percentile(&values, 0.50),
            q75: percentile(&values, 0.75),
            max,
        }
    }
}

/// Percentile of sorted data, interpolating linearly between the closest ranks.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}

/// Descriptive statistics for every numeric column, in column order.
///
/// Text columns are skipped entirely.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .column_types()
        .into_iter()
        .enumerate()
        .filter(|(_, (_, ty))| ty.is_numeric())
        .map(|(index, (name, _))| {
            let values: Vec<f64> = table.column_values(index).filter_map(|v| v.as_f64()).collect();
            ColumnSummary::from_values(name, values)
        })
        .collect()
}
