use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::{
    clean, Analyzer, CleaningSummary, SummaryReport, TeamStats, TopScorer, DEFAULT_TOP_N,
};
use crate::error::NbaError;
use crate::io;
use crate::visualization::{
    present_chart, print_chart_displayed, print_chart_header, print_chart_saved,
    print_cleaning_summary, print_preview, print_summary_report, print_team_performance,
    print_top_scorers, render_team_chart, ChartOptions,
};

/// Default location of the player statistics file.
pub const DEFAULT_INPUT_PATH: &str = "data/NBA_Player_Stats.csv";

/// Everything a run can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub chart: ChartOptions,
    pub top_n: usize,
    /// Open the chart in the platform viewer after writing it.
    pub show_chart: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            chart: ChartOptions::default(),
            top_n: DEFAULT_TOP_N,
            show_chart: true,
        }
    }
}

/// Values produced by a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResults {
    pub cleaning: CleaningSummary,
    pub top_scorers: Vec<TopScorer>,
    pub team_stats: Vec<TeamStats>,
    pub report: SummaryReport,
    pub chart_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// The dataset could not be loaded; nothing after loading ran.
    NoData,
    Completed(PipelineResults),
}

/// Run every stage in order, printing each one as it finishes.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome, NbaError> {
    let Some(raw) = io::load(&config.input) else {
        info!("no data loaded; halting");
        return Ok(PipelineOutcome::NoData);
    };

    print_preview(&raw);

    let cleaned = clean(&raw)?;
    print_cleaning_summary(&cleaned.summary);

    let analyzer = Analyzer::new(&cleaned.table);

    let scorers = analyzer.top_scorers(config.top_n)?;
    print_top_scorers(&scorers, config.top_n);

    let team_stats = analyzer.team_performance()?;
    print_team_performance(&team_stats);

    print_chart_header();
    let chart_path = render_team_chart(&team_stats, &config.chart)?;
    print_chart_saved(&chart_path);
    if config.show_chart {
        match present_chart(&chart_path) {
            Ok(true) => print_chart_displayed(),
            Ok(false) => info!("chart not displayed; no display available"),
            Err(e) => warn!(error = %e, "could not display chart"),
        }
    }

    let report = analyzer.summary_report(&scorers, &team_stats)?;
    print_summary_report(&report);

    info!(
        records = report.overview.total_records,
        teams = team_stats.len(),
        "analysis complete"
    );
    Ok(PipelineOutcome::Completed(PipelineResults {
        cleaning: cleaned.summary,
        top_scorers: scorers,
        team_stats,
        report,
        chart_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("players.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    fn config_for(dir: &tempfile::TempDir, input: PathBuf) -> PipelineConfig {
        PipelineConfig {
            input,
            chart: ChartOptions {
                path: dir.path().join("chart.png"),
                width: 600,
                height: 400,
                ..ChartOptions::default()
            },
            top_n: 2,
            show_chart: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.input, PathBuf::from("data/NBA_Player_Stats.csv"));
        assert_eq!(config.chart.path, PathBuf::from("team_performance.png"));
        assert_eq!(config.top_n, 10);
        assert!(config.show_chart);
    }

    #[test]
    fn test_missing_input_halts_without_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir, dir.path().join("absent.csv"));

        let outcome = run(&config).unwrap();
        assert_eq!(outcome, PipelineOutcome::NoData);
        assert!(!config.chart.path.exists());
    }

    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            &dir,
            "Player,Tm,Year,PTS,G\n\
             A,X,2001,10,1\n\
             B,X,2002,20,1\n\
             C,X,2003,30,1\n\
             D,Y,2004,5,1\n\
             ,Y,2004,7,1\n",
        );
        let config = config_for(&dir, input);

        let PipelineOutcome::Completed(results) = run(&config).unwrap() else {
            panic!("expected a completed run");
        };
        assert_eq!(results.cleaning.rows_removed(), 1);
        assert_eq!(results.top_scorers.len(), 2);
        assert_eq!(results.top_scorers[0].player, "C");
        assert_eq!(results.team_stats[0].team, "X");
        assert_eq!(results.report.best_team.team, "X");
        assert_eq!(results.report.overview.total_records, 4);
        assert_eq!(results.chart_path, config.chart.path);
        assert!(results.chart_path.exists());
    }

    #[test]
    fn test_missing_required_column_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(&dir, "Player,PTS,G\nA,10,1\n");
        let config = config_for(&dir, input);

        let err = run(&config).unwrap_err();
        assert!(matches!(err, NbaError::MissingColumn(ref c) if c == "Tm"));
        assert!(!config.chart.path.exists());
    }
}
