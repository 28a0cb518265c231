#![no_main]

use libfuzzer_sys::fuzz_target;
use nba_stats_analyzer::{analysis::clean, io::read_table_from_bytes, Analyzer};

fuzz_target!(|data: &[u8]| {
    let Ok(table) = read_table_from_bytes(data) else {
        return;
    };
    let Ok(cleaned) = clean(&table) else {
        return;
    };
    let again = clean(&cleaned.table).map(|c| c.table);
    assert_eq!(again.ok().as_ref(), Some(&cleaned.table));

    let analyzer = Analyzer::new(&cleaned.table);
    let _ = analyzer.describe();
    if let Ok(scorers) = analyzer.top_scorers(10) {
        assert!(scorers.len() <= cleaned.table.num_rows());
    }
    let _ = analyzer.team_performance();
});
