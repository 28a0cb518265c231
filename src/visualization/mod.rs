mod charts;
mod console;
mod tables;

pub use charts::{
    present_chart, render_team_chart, ChartOptions, CHART_TEAM_LIMIT, DEFAULT_CHART_PATH,
};
pub use console::{
    format_banner, format_chart_header, format_chart_saved, format_load_failure,
    format_load_header, format_load_success, format_section, print_chart_displayed,
    print_chart_header, print_chart_saved, print_load_failure, print_load_header,
    print_load_success,
};
pub use tables::{
    format_cleaning_summary, format_preview, format_summary_report, format_team_performance,
    format_top_scorers, print_cleaning_summary, print_preview, print_summary_report,
    print_team_performance, print_top_scorers,
};
