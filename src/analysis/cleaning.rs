use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::NbaError;
use crate::models::{Table, Value};

/// Columns a row must have to take part in any analysis.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Player", "Tm", "PTS", "G"];

/// Columns coerced to numbers when present.
pub const NUMERIC_COLUMNS: [&str; 7] = ["PTS", "G", "MP", "TRB", "AST", "STL", "BLK"];

/// Row counts before and after cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub original_rows: usize,
    pub remaining_rows: usize,
}

impl CleaningSummary {
    pub fn rows_removed(&self) -> usize {
        self.original_rows - self.remaining_rows
    }
}

/// The canonical cleaned table plus what cleaning did to it.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub table: Table,
    pub summary: CleaningSummary,
}

/// Clean a raw table.
///
/// 1. Drop rows missing any of [`REQUIRED_COLUMNS`].
/// 2. Coerce each of [`NUMERIC_COLUMNS`] present to numbers; unparsable cells
///    become missing.
/// 3. Drop rows whose `PTS` or `G` is missing after coercion.
///
/// Columns and row order are preserved, and cleaning a cleaned table changes
/// nothing.
pub fn clean(raw: &Table) -> Result<CleanedTable, NbaError> {
    let required = REQUIRED_COLUMNS
        .iter()
        .map(|name| raw.require_column(name))
        .collect::<Result<Vec<usize>, NbaError>>()?;

    let mut table = raw.filter_rows(|row| required.iter().all(|&i| !row[i].is_missing()));
    debug!(
        dropped = raw.num_rows() - table.num_rows(),
        "rows missing critical fields removed"
    );

    for name in NUMERIC_COLUMNS {
        if let Some(index) = table.column_index(name) {
            table.map_column(index, Value::to_numeric);
        }
    }

    let pts = table.require_column("PTS")?;
    let games = table.require_column("G")?;
    let table = table.filter_rows(|row| !row[pts].is_missing() && !row[games].is_missing());

    let summary = CleaningSummary {
        original_rows: raw.num_rows(),
        remaining_rows: table.num_rows(),
    };
    info!(
        removed = summary.rows_removed(),
        remaining = summary.remaining_rows,
        "cleaning complete"
    );

    Ok(CleanedTable { table, summary })
}
