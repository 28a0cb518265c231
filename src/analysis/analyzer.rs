use crate::analysis::{
    describe, team_performance, top_scorers, ColumnSummary, SummaryReport, TeamStats, TopScorer,
};
use crate::error::NbaError;
use crate::models::Table;

/// Unified analysis API over one cleaned table.
///
/// Every operation borrows the table immutably, so derived values computed by
/// one analysis are never visible to another.
pub struct Analyzer<'a> {
    table: &'a Table,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer for the given cleaned table.
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Descriptive statistics for the numeric columns.
    pub fn describe(&self) -> Vec<ColumnSummary> {
        describe(self.table)
    }

    /// The `n` highest-scoring player-seasons.
    pub fn top_scorers(&self, n: usize) -> Result<Vec<TopScorer>, NbaError> {
        top_scorers(self.table, n)
    }

    /// Teams ranked by average points per game per player.
    pub fn team_performance(&self) -> Result<Vec<TeamStats>, NbaError> {
        team_performance(self.table)
    }

    /// The closing digest built from the two rankings.
    pub fn summary_report(
        &self,
        scorers: &[TopScorer],
        teams: &[TeamStats],
    ) -> Result<SummaryReport, NbaError> {
        SummaryReport::build(self.table, scorers, teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Value;

    fn sample_table() -> Table {
        Table::from_rows(
            &["Player", "Tm", "Year", "PTS", "G"],
            vec![
                vec!["A".into(), "X".into(), Value::Int(2001), Value::Int(10), Value::Int(1)],
                vec!["B".into(), "X".into(), Value::Int(2002), Value::Int(20), Value::Int(1)],
                vec!["C".into(), "X".into(), Value::Int(2003), Value::Int(30), Value::Int(1)],
                vec!["D".into(), "Y".into(), Value::Int(2004), Value::Int(5), Value::Int(1)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_top_scorers_matches_standalone() {
        let table = sample_table();
        let analyzer = Analyzer::new(&table);
        assert_eq!(analyzer.top_scorers(3).unwrap(), top_scorers(&table, 3).unwrap());
    }

    #[test]
    fn test_team_performance_matches_standalone() {
        let table = sample_table();
        let analyzer = Analyzer::new(&table);
        assert_eq!(analyzer.team_performance().unwrap(), team_performance(&table).unwrap());
    }

    #[test]
    fn test_describe_matches_standalone() {
        let table = sample_table();
        let analyzer = Analyzer::new(&table);
        assert_eq!(analyzer.describe().len(), describe(&table).len());
    }

    #[test]
    fn test_analyses_do_not_alter_table() {
        let table = sample_table();
        let before = table.clone();
        let analyzer = Analyzer::new(&table);
        let scorers = analyzer.top_scorers(2).unwrap();
        let teams = analyzer.team_performance().unwrap();
        let report = analyzer.summary_report(&scorers, &teams).unwrap();
        assert_eq!(report.overview.total_records, 4);
        assert_eq!(analyzer.table(), &before);
    }
}
