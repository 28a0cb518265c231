mod csv_io;

use std::path::Path;

use tracing::{error, info, warn};

use crate::error::NbaError;
use crate::models::Table;
use crate::visualization::{print_load_failure, print_load_header, print_load_success};

pub use csv_io::{read_table, read_table_from_bytes};

/// Trait for reading a player statistics table from a file.
pub trait TableReader {
    fn read(&self, path: &Path) -> Result<Table, NbaError>;
}

/// Comma-separated text with a header row.
pub struct CsvFormat;

impl TableReader for CsvFormat {
    fn read(&self, path: &Path) -> Result<Table, NbaError> {
        read_table(path)
    }
}

/// Load the dataset, printing progress, and return `None` when it cannot be read.
///
/// This is the "no data" sentinel the pipeline halts on: both a missing file and
/// an unparsable one are reported here and never surface as errors.
pub fn load(path: impl AsRef<Path>) -> Option<Table> {
    load_with(&CsvFormat, path.as_ref())
}

/// [`load`] with an explicit reader.
pub fn load_with(reader: &dyn TableReader, path: &Path) -> Option<Table> {
    print_load_header();
    match reader.read(path) {
        Ok(table) => {
            info!(
                path = %path.display(),
                rows = table.num_rows(),
                columns = table.num_columns(),
                "dataset loaded"
            );
            print_load_success(&table);
            Some(table)
        }
        Err(e) => {
            if e.is_input_failure() {
                warn!(path = %path.display(), error = %e, "dataset could not be loaded");
            } else {
                error!(path = %path.display(), error = %e, "unexpected failure reading dataset");
            }
            print_load_failure(path, &e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingReader;

    impl TableReader for FailingReader {
        fn read(&self, _path: &Path) -> Result<Table, NbaError> {
            Err(NbaError::UnparsableInput("corrupt".to_string()))
        }
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path().join("nope.csv")).is_none());
    }

    #[test]
    fn test_load_unparsable_returns_none() {
        assert!(load_with(&FailingReader, Path::new("whatever.csv")).is_none());
    }

    #[test]
    fn test_csv_format_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        std::fs::write(&path, "Player,Tm,PTS,G\nA,BOS,10,2\n").unwrap();

        let reader: &dyn TableReader = &CsvFormat;
        let table = reader.read(&path).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert!(load(&path).is_some());
    }
}
