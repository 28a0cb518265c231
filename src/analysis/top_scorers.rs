use serde::{Deserialize, Serialize};
use tracing::debug;

use super::descending_nan_last;
use crate::error::NbaError;
use crate::models::Table;

/// Number of player-seasons ranked when no count is given.
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked player-season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopScorer {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub year: Option<i64>,
    pub points: f64,
    pub games: Option<f64>,
    pub minutes: Option<f64>,
}

/// Points spread across a ranked list of scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringInsights {
    pub highest: f64,
    pub average: f64,
    pub lowest: f64,
    pub count: usize,
}

impl ScoringInsights {
    /// Highest, mean and lowest points of the given rows; `None` when empty.
    pub fn from_scorers(scorers: &[TopScorer]) -> Option<Self> {
        if scorers.is_empty() {
            return None;
        }
        let points = scorers.iter().map(|s| s.points).filter(|p| !p.is_nan());
        let (sum, count, highest, lowest) = points.fold(
            (0.0, 0usize, f64::NEG_INFINITY, f64::INFINITY),
            |(sum, count, hi, lo), p| (sum + p, count + 1, hi.max(p), lo.min(p)),
        );
        if count == 0 {
            return None;
        }
        Some(ScoringInsights {
            highest,
            average: sum / count as f64,
            lowest,
            count: scorers.len(),
        })
    }
}

/// Rank the `n` highest-scoring player-seasons.
///
/// Rows are ordered by `PTS` descending with a stable sort, so ties keep their
/// source order. `Year`, `G` and `MP` are carried along when the table has them.
///
/// # Examples
///
/// ```
/// use nba_stats_analyzer::analysis::top_scorers;
/// use nba_stats_analyzer::models::{Table, Value};
///
/// let table = Table::from_rows(
///     &["Player", "Tm", "PTS"],
///     vec![
///         vec!["A".into(), "BOS".into(), Value::Int(50)],
///         vec!["B".into(), "LAL".into(), Value::Int(90)],
///     ],
/// ).unwrap();
/// let top = top_scorers(&table, 1).unwrap();
/// assert_eq!(top[0].player, "B");
/// assert_eq!(top[0].rank, 1);
/// ```
pub fn top_scorers(table: &Table, n: usize) -> Result<Vec<TopScorer>, NbaError> {
    if n == 0 {
        return Err(NbaError::PreconditionViolation(
            "number of top scorers must be positive".to_string(),
        ));
    }

    let player = table.require_column("Player")?;
    let team = table.require_column("Tm")?;
    let pts = table.require_column("PTS")?;
    let year = table.column_index("Year");
    let games = table.column_index("G");
    let minutes = table.column_index("MP");

    let mut scorers: Vec<TopScorer> = table
        .rows()
        .iter()
        .map(|row| TopScorer {
            rank: 0,
            player: row[player].to_string(),
            team: row[team].to_string(),
            year: year.and_then(|i| row[i].as_i64()),
            points: row[pts].as_f64().unwrap_or(f64::NAN),
            games: games.and_then(|i| row[i].as_f64()),
            minutes: minutes.and_then(|i| row[i].as_f64()),
        })
        .collect();

    scorers.sort_by(|a, b| descending_nan_last(a.points, b.points));
    scorers.truncate(n);
    for (i, scorer) in scorers.iter_mut().enumerate() {
        scorer.rank = i + 1;
    }

    debug!(requested = n, returned = scorers.len(), "top scorers ranked");
    Ok(scorers)
}
