use std::path::Path;

use colored::Colorize;

use crate::error::NbaError;
use crate::models::Table;

const RULE_WIDTH: usize = 60;

/// A title framed by `=` rules, used for the top-level stages.
pub fn format_banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\n{}\n{rule}\n", title.bold().cyan())
}

/// A title framed by `-` rules, used for the preparatory stages.
pub fn format_section(title: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!("\n{rule}\n{}\n{rule}\n", title.bold().green())
}

pub(crate) fn success_line(message: &str) -> String {
    format!("{} {message}\n", "\u{2713}".green())
}

pub(crate) fn failure_line(message: &str) -> String {
    format!("{} {message}\n", "\u{2717}".red())
}

pub fn format_load_header() -> String {
    let mut output = format_banner("NBA PLAYER STATISTICS ANALYSIS");
    output.push_str("\nLoading dataset...\n");
    output
}

pub fn print_load_header() {
    print!("{}", format_load_header());
}

pub fn format_load_success(table: &Table) -> String {
    let mut output = String::new();
    output.push_str(&success_line("Dataset loaded successfully!"));
    output.push_str(&success_line(&format!("Total records: {}", table.num_rows())));
    output.push_str(&success_line(&format!("Total columns: {}", table.num_columns())));
    output
}

pub fn print_load_success(table: &Table) {
    print!("{}", format_load_success(table));
}

pub fn format_load_failure(path: &Path, error: &NbaError) -> String {
    match error {
        NbaError::MissingInputFile(_) => {
            failure_line(&format!("Error: File '{}' not found!", path.display()))
        }
        other => failure_line(&format!("Error loading data: {other}")),
    }
}

pub fn print_load_failure(path: &Path, error: &NbaError) {
    print!("{}", format_load_failure(path, error));
}

pub fn format_chart_header() -> String {
    let mut output = format_banner("STRETCH CHALLENGE: DATA VISUALIZATION");
    output.push_str("\nGenerating bar chart...\n");
    output
}

pub fn print_chart_header() {
    print!("{}", format_chart_header());
}

pub fn format_chart_saved(path: &Path) -> String {
    success_line(&format!("Chart saved as '{}'", path.display()))
}

pub fn print_chart_saved(path: &Path) {
    print!("{}", format_chart_saved(path));
}

pub fn print_chart_displayed() {
    print!("{}", success_line("Chart displayed successfully!"));
}
