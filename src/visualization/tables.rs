use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use super::console::{format_banner, format_section, success_line};
use crate::analysis::{
    describe, CleaningSummary, ScoringInsights, SummaryReport, TeamInsights, TeamStats, TopScorer,
};
use crate::models::Table as DataTable;

const PREVIEW_ROWS: usize = 5;

fn styled_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn insight(message: String) -> String {
    format!("  \u{2022} {message}\n")
}

/// Format the dataset preview: head, column names, inferred types and descriptive statistics.
pub fn format_preview(data: &DataTable) -> String {
    let mut output = format_section("DATASET PREVIEW");

    output.push_str(&format!("\n{}\n", "First 5 rows:".bold()));
    let head = data.head(PREVIEW_ROWS);
    let mut rows_table = styled_table(head.columns().iter().map(String::as_str).collect());
    for row in head.rows() {
        rows_table.add_row(row.iter().map(|v| Cell::new(v.to_string())));
    }
    output.push_str(&format!("{rows_table}\n"));

    output.push_str(&format!("\n{}\n", "Column names:".bold()));
    output.push_str(&format!("[{}]\n", data.columns().join(", ")));

    output.push_str(&format!("\n{}\n", "Data types:".bold()));
    let mut types_table = styled_table(vec!["Column", "Type"]);
    for (name, ty) in data.column_types() {
        types_table.add_row(vec![Cell::new(name), Cell::new(ty.to_string())]);
    }
    output.push_str(&format!("{types_table}\n"));

    output.push_str(&format!("\n{}\n", "Basic statistics:".bold()));
    let summaries = describe(data);
    if summaries.is_empty() {
        output.push_str("  No numeric columns.\n");
    } else {
        let mut stats_table = styled_table(vec![
            "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
        ]);
        for s in &summaries {
            stats_table.add_row(vec![
                Cell::new(&s.name),
                Cell::new(s.count),
                Cell::new(format_stat(s.mean)),
                Cell::new(format_stat(s.std)),
                Cell::new(format_stat(s.min)),
                Cell::new(format_stat(s.q25)),
                Cell::new(format_stat(s.median)),
                Cell::new(format_stat(s.q75)),
                Cell::new(format_stat(s.max)),
            ]);
        }
        output.push_str(&format!("{stats_table}\n"));
    }

    output
}

/// Print the dataset preview.
pub fn print_preview(data: &DataTable) {
    print!("{}", format_preview(data));
}

/// Format what cleaning removed.
pub fn format_cleaning_summary(summary: &CleaningSummary) -> String {
    let mut output = format_section("DATA CLEANING");
    output.push_str("\nRemoving rows with missing critical data...\n");
    output.push_str(&success_line(&format!("Rows removed: {}", summary.rows_removed())));
    output.push_str(&success_line(&format!("Remaining rows: {}", summary.remaining_rows)));
    output
}

pub fn print_cleaning_summary(summary: &CleaningSummary) {
    print!("{}", format_cleaning_summary(summary));
}

/// Format the top scorer ranking and its insights.
pub fn format_top_scorers(scorers: &[TopScorer], requested: usize) -> String {
    let mut output = format_banner("QUESTION 1: TOP SCORING PLAYERS (BY TOTAL POINTS)");
    output.push_str(&format!(
        "\n{}\n",
        format!("Top {requested} Players by Total Points Scored:").bold()
    ));

    let mut table = styled_table(vec!["Rank", "Player", "Tm", "Year", "PTS", "G", "MP"]);
    for s in scorers {
        table.add_row(vec![
            Cell::new(s.rank),
            Cell::new(&s.player),
            Cell::new(&s.team),
            Cell::new(s.year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())),
            Cell::new(format!("{:.1}", s.points)),
            Cell::new(format_optional(s.games)),
            Cell::new(format_optional(s.minutes)),
        ]);
    }
    output.push_str(&format!("{table}\n"));

    if let Some(insights) = ScoringInsights::from_scorers(scorers) {
        output.push_str(&format!("\n{}\n", "Insights:".bold()));
        output.push_str(&insight(format!(
            "Highest scoring season: {:.1} points",
            insights.highest
        )));
        output.push_str(&insight(format!(
            "Average among top {requested}: {:.1} points",
            insights.average
        )));
        output.push_str(&insight(format!(
            "Lowest in top {requested}: {:.1} points",
            insights.lowest
        )));
    }

    output
}

pub fn print_top_scorers(scorers: &[TopScorer], requested: usize) {
    print!("{}", format_top_scorers(scorers, requested));
}

/// Format the team ranking and its insights.
pub fn format_team_performance(stats: &[TeamStats]) -> String {
    let mut output = format_banner("QUESTION 2: TEAM OFFENSIVE PERFORMANCE");
    output.push_str(&format!(
        "\n{}\n",
        "Team Performance Rankings (by Average Points Per Game Per Player):".bold()
    ));

    let mut table = styled_table(vec![
        "Rank",
        "Team",
        "Avg_PPG_Per_Player",
        "Total_Players",
        "Total_Points",
        "Avg_Games_Played",
    ]);
    for t in stats {
        table.add_row(vec![
            Cell::new(t.rank),
            Cell::new(&t.team),
            Cell::new(format!("{:.2}", t.avg_ppg_per_player)),
            Cell::new(t.total_players),
            Cell::new(format!("{:.0}", t.total_points)),
            Cell::new(format!("{:.1}", t.avg_games_played)),
        ]);
    }
    output.push_str(&format!("{table}\n"));

    if let Some(insights) = TeamInsights::from_stats(stats) {
        output.push_str(&format!("\n{}\n", "Insights:".bold()));
        output.push_str(&insight(format!(
            "Highest scoring team: {} ({:.2} PPG)",
            insights.top_team, insights.top_rate
        )));
        output.push_str(&insight(format!(
            "Lowest scoring team: {} ({:.2} PPG)",
            insights.bottom_team, insights.bottom_rate
        )));
        output.push_str(&insight(format!(
            "Average across all teams: {:.2} PPG",
            insights.mean_rate
        )));
        output.push_str(&insight(format!(
            "Total teams analyzed: {}",
            insights.team_count
        )));
    }

    output
}

pub fn print_team_performance(stats: &[TeamStats]) {
    print!("{}", format_team_performance(stats));
}

/// Format the closing summary report.
pub fn format_summary_report(report: &SummaryReport) -> String {
    let overview = &report.overview;
    let year = |y: Option<i64>| y.map(|y| y.to_string()).unwrap_or_else(|| "unknown".to_string());

    let mut output = format_banner("ANALYSIS SUMMARY REPORT");

    output.push_str(&format!("\n{}\n", "Dataset Overview:".bold()));
    output.push_str(&insight(format!(
        "Total player records analyzed: {}",
        overview.total_records
    )));
    output.push_str(&insight(format!("Unique players: {}", overview.unique_players)));
    output.push_str(&insight(format!(
        "Teams represented: {}",
        overview.teams_represented
    )));
    output.push_str(&insight(format!(
        "Years covered: {} to {}",
        year(overview.first_year),
        year(overview.last_year)
    )));

    let scorer = &report.top_scorer;
    output.push_str(&format!("\n{}\n", "Top Scorer:".bold()));
    output.push_str(&insight(format!("Player: {}", scorer.player)));
    output.push_str(&insight(format!("Team: {}", scorer.team)));
    output.push_str(&insight(format!("Points: {:.1}", scorer.points)));
    output.push_str(&insight(format!("Year: {}", year(scorer.year))));

    let team = &report.best_team;
    output.push_str(&format!("\n{}\n", "Best Offensive Team:".bold()));
    output.push_str(&insight(format!("Team: {}", team.team)));
    output.push_str(&insight(format!(
        "Avg PPG per player: {:.2}",
        team.avg_ppg_per_player
    )));
    output.push_str(&insight(format!("Total players: {}", team.total_players)));

    output.push_str(&format_banner("Analysis complete!"));
    output
}

pub fn print_summary_report(report: &SummaryReport) {
    print!("{}", format_summary_report(report));
}
