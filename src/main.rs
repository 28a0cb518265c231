use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use nba_stats_analyzer::{
    pipeline::{self, PipelineConfig, PipelineOutcome, DEFAULT_INPUT_PATH},
    visualization::{ChartOptions, DEFAULT_CHART_PATH},
};

#[derive(Parser)]
#[command(
    name = "nba-analyzer",
    about = "NBA Player Statistics Analyzer - top scorers, team offense and a team chart",
    version,
    author
)]
struct Cli {
    /// Path to the player statistics CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Where to write the team performance chart (PNG)
    #[arg(short, long, default_value = DEFAULT_CHART_PATH)]
    chart: PathBuf,

    /// Write the chart without opening it
    #[arg(long)]
    no_show: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn into_config(self) -> PipelineConfig {
        PipelineConfig {
            input: self.input,
            chart: ChartOptions {
                path: self.chart,
                ..ChartOptions::default()
            },
            show_chart: !self.no_show,
            ..PipelineConfig::default()
        }
    }
}

fn setup_logging(level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nba_stats_analyzer={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level());

    match pipeline::run(&cli.into_config())? {
        PipelineOutcome::NoData => tracing::debug!("run ended without data"),
        PipelineOutcome::Completed(results) => {
            tracing::debug!(chart = %results.chart_path.display(), "run completed")
        }
    }

    Ok(())
}
