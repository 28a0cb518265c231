use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{descending_nan_last, mean_ignoring_nan};
use crate::error::NbaError;
use crate::models::Table;

/// Scoring aggregates for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub rank: usize,
    pub team: String,
    /// Mean of per-row `PTS / G` across the team's player-seasons.
    pub avg_ppg_per_player: f64,
    pub total_players: usize,
    pub total_points: f64,
    pub avg_games_played: f64,
}

/// Headline numbers from a team ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInsights {
    pub top_team: String,
    pub top_rate: f64,
    pub bottom_team: String,
    pub bottom_rate: f64,
    pub mean_rate: f64,
    pub team_count: usize,
}

impl TeamInsights {
    /// Summarize a ranked team list; `None` when it is empty.
    pub fn from_stats(stats: &[TeamStats]) -> Option<Self> {
        let top = stats.first()?;
        let bottom = stats.last()?;
        Some(TeamInsights {
            top_team: top.team.clone(),
            top_rate: top.avg_ppg_per_player,
            bottom_team: bottom.team.clone(),
            bottom_rate: bottom.avg_ppg_per_player,
            mean_rate: mean_ignoring_nan(stats.iter().map(|t| t.avg_ppg_per_player)),
            team_count: stats.len(),
        })
    }
}

#[derive(Default)]
struct TeamAccumulator {
    ppg: Vec<f64>,
    players: usize,
    points: f64,
    games: Vec<f64>,
}

/// Rank teams by the average points-per-game of their player-seasons.
///
/// `PPG` is derived per row inside this function; the input table is only
/// borrowed and never gains a column. Rows with `G = 0` produce an infinite
/// (or, for zero points, NaN) rate which flows into the team mean unchanged;
/// NaN rates are ignored by the mean.
pub fn team_performance(table: &Table) -> Result<Vec<TeamStats>, NbaError> {
    let team = table.require_column("Tm")?;
    let pts = table.require_column("PTS")?;
    let games = table.require_column("G")?;
    let player = table.column_index("Player");

    let mut groups: BTreeMap<String, TeamAccumulator> = BTreeMap::new();
    for row in table.rows() {
        if row[team].is_missing() {
            continue;
        }
        let acc = groups.entry(row[team].to_string()).or_default();

        let points = row[pts].as_f64();
        let played = row[games].as_f64();
        if let (Some(p), Some(g)) = (points, played) {
            acc.ppg.push(p / g);
        }
        if player.map_or(true, |i| !row[i].is_missing()) {
            acc.players += 1;
        }
        if let Some(p) = points {
            acc.points += p;
        }
        if let Some(g) = played {
            acc.games.push(g);
        }
    }

    let mut stats: Vec<TeamStats> = groups
        .into_iter()
        .map(|(name, acc)| TeamStats {
            rank: 0,
            team: name,
            avg_ppg_per_player: mean_ignoring_nan(acc.ppg),
            total_players: acc.players,
            total_points: acc.points,
            avg_games_played: mean_ignoring_nan(acc.games),
        })
        .collect();

    stats.sort_by(|a, b| descending_nan_last(a.avg_ppg_per_player, b.avg_ppg_per_player));
    for (i, team) in stats.iter_mut().enumerate() {
        team.rank = i + 1;
    }

    debug!(teams = stats.len(), "team performance ranked");
    Ok(stats)
}
