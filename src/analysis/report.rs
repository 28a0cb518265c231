use serde::{Deserialize, Serialize};

use super::{TeamStats, TopScorer};
use crate::error::NbaError;
use crate::models::Table;

/// Cardinalities of the cleaned dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub total_records: usize,
    pub unique_players: usize,
    pub teams_represented: usize,
    pub first_year: Option<i64>,
    pub last_year: Option<i64>,
}

impl DatasetOverview {
    pub fn from_table(table: &Table) -> Self {
        let distinct = |name: &str| {
            table
                .column_index(name)
                .map(|i| table.distinct_count(i))
                .unwrap_or(0)
        };
        let years: Vec<i64> = table
            .column("Year")
            .map(|values| values.filter_map(|v| v.as_i64()).collect())
            .unwrap_or_default();

        DatasetOverview {
            total_records: table.num_rows(),
            unique_players: distinct("Player"),
            teams_represented: distinct("Tm"),
            first_year: years.iter().min().copied(),
            last_year: years.iter().max().copied(),
        }
    }
}

/// The closing digest of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub overview: DatasetOverview,
    pub top_scorer: TopScorer,
    pub best_team: TeamStats,
}

impl SummaryReport {
    /// Combine the cleaned table with the first row of each ranking.
    ///
    /// Both rankings must be non-empty.
    pub fn build(
        cleaned: &Table,
        scorers: &[TopScorer],
        teams: &[TeamStats],
    ) -> Result<Self, NbaError> {
        let top_scorer = scorers.first().cloned().ok_or_else(|| {
            NbaError::PreconditionViolation(
                "summary report needs at least one top scorer".to_string(),
            )
        })?;
        let best_team = teams.first().cloned().ok_or_else(|| {
            NbaError::PreconditionViolation("summary report needs at least one team".to_string())
        })?;

        Ok(SummaryReport {
            overview: DatasetOverview::from_table(cleaned),
            top_scorer,
            best_team,
        })
    }
}
