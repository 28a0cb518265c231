mod analyzer;
mod cleaning;
mod describe;
mod report;
mod team_performance;
mod top_scorers;

use std::cmp::Ordering;

pub use analyzer::Analyzer;
pub use cleaning::{clean, CleanedTable, CleaningSummary, NUMERIC_COLUMNS, REQUIRED_COLUMNS};
pub use describe::{describe, ColumnSummary};
pub use report::{DatasetOverview, SummaryReport};
pub use team_performance::{team_performance, TeamInsights, TeamStats};
pub use top_scorers::{top_scorers, ScoringInsights, TopScorer, DEFAULT_TOP_N};

/// Descending order for floats with NaN placed last.
pub(crate) fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Arithmetic mean skipping NaN; NaN when nothing is left.
pub(crate) fn mean_ignoring_nan(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_nan_last() {
        let mut values = vec![1.0, f64::NAN, 3.0, f64::INFINITY, 2.0];
        values.sort_by(|a, b| descending_nan_last(*a, *b));
        assert_eq!(values[0], f64::INFINITY);
        assert_eq!(&values[1..4], &[3.0, 2.0, 1.0]);
        assert!(values[4].is_nan());
    }

    #[test]
    fn test_mean_ignoring_nan() {
        assert_eq!(mean_ignoring_nan(vec![1.0, f64::NAN, 3.0]), 2.0);
        assert!(mean_ignoring_nan(Vec::new()).is_nan());
        assert!(mean_ignoring_nan(vec![f64::NAN]).is_nan());
    }
}
