use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::error::NbaError;
use crate::models::{is_na_token, parse_number, Row, Table, Value};

/// How the cells of one column are materialised, decided from all of its tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn header_names(headers: &csv::StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect()
}

fn infer_kind(tokens: impl Iterator<Item = impl AsRef<str>>) -> ColumnKind {
    let mut kind = ColumnKind::Int;
    for token in tokens {
        let token = token.as_ref();
        if is_na_token(token) {
            continue;
        }
        match parse_number(token) {
            Some(Value::Int(_)) => {}
            Some(_) => kind = ColumnKind::Float,
            None => return ColumnKind::Text,
        }
    }
    kind
}

fn materialize(token: &str, kind: ColumnKind) -> Value {
    match kind {
        ColumnKind::Text if is_na_token(token) => Value::Missing,
        ColumnKind::Text => Value::Text(token.to_string()),
        ColumnKind::Int | ColumnKind::Float => Value::from_token(token),
    }
}

fn parse_records<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Table, NbaError> {
    let columns = header_names(rdr.headers()?);
    if columns.is_empty() {
        return Err(NbaError::UnparsableInput(
            "no columns to parse from file".to_string(),
        ));
    }
    let width = columns.len();

    let mut raw: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(NbaError::UnparsableInput(format!(
                "expected {width} fields in line {line}, saw {}",
                record.len()
            )));
        }
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(width, String::new());
        raw.push(cells);
    }

    let kinds: Vec<ColumnKind> = (0..width)
        .map(|i| infer_kind(raw.iter().map(|cells| cells[i].as_str())))
        .collect();

    let rows: Vec<Row> = raw
        .iter()
        .map(|cells| {
            cells
                .iter()
                .zip(&kinds)
                .map(|(token, kind)| materialize(token, *kind))
                .collect()
        })
        .collect();

    debug!(rows = rows.len(), columns = width, "parsed delimited records");
    Table::new(columns, rows)
}

fn unparsable(e: NbaError, source: &str) -> NbaError {
    match e {
        NbaError::Csv(_) | NbaError::Io(_) => {
            NbaError::UnparsableInput(format!("{source}: {e}"))
        }
        other => other,
    }
}

/// Read a comma-separated table with a header row from a file.
///
/// A path that does not exist yields [`NbaError::MissingInputFile`]; every
/// other failure yields [`NbaError::UnparsableInput`].
pub fn read_table(path: impl AsRef<Path>) -> Result<Table, NbaError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => NbaError::MissingInputFile(path.to_path_buf()),
        _ => NbaError::UnparsableInput(format!("{source}: {e}")),
    })?;

    let mut rdr = reader_builder().from_reader(file);
    parse_records(&mut rdr).map_err(|e| unparsable(e, &source))
}

/// Read a comma-separated table with a header row from bytes.
pub fn read_table_from_bytes(data: &[u8]) -> Result<Table, NbaError> {
    let mut rdr = reader_builder().from_reader(data);
    parse_records(&mut rdr).map_err(|e| unparsable(e, "<memory>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnType;

    const SAMPLE: &str = "\
Player,Tm,Year,PTS,G,MP
James Harden,HOU,2019,2818,78,2867
Giannis Antetokounmpo,MIL,2019,2036,72,2358
Paul George,OKC,2019,,77,2841
";

    #[test]
    fn test_read_from_bytes_shapes_table() {
        let table = read_table_from_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_columns(), 6);
        assert_eq!(table.columns()[0], "Player");
    }

    #[test]
    fn test_column_types_inferred() {
        let table = read_table_from_bytes(SAMPLE.as_bytes()).unwrap();
        let types = table.column_types();
        assert_eq!(types[0].1, ColumnType::Text);
        assert_eq!(types[2].1, ColumnType::Integer);
        // PTS has a gap, so it widens to float
        assert_eq!(types[3].1, ColumnType::Float);
        assert_eq!(table.rows()[2][3], Value::Missing);
    }

    #[test]
    fn test_numeric_cells_classified_like_tokens() {
        let data = "Player,PTS,MP\nA,12,30.5\nB,NA,n/a\nC,+NAN,7\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        let tokens = [["12", "30.5"], ["NA", "n/a"], ["+NAN", "7"]];
        for (row, expected) in table.rows().iter().zip(tokens) {
            assert_eq!(row[1], Value::from_token(expected[0]));
            assert_eq!(row[2], Value::from_token(expected[1]));
        }
        assert_eq!(table.rows()[2][1], Value::Missing);
    }

    #[test]
    fn test_text_column_keeps_numeric_looking_tokens() {
        let data = "Player,Tm\n007,BOS\nBond,NYK\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(table.rows()[0][0], Value::Text("007".to_string()));
    }

    #[test]
    fn test_na_tokens_become_missing() {
        let data = "Player,PTS\nA,NA\nB,n/a\nC,12\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        assert!(table.rows()[0][1].is_missing());
        assert!(table.rows()[1][1].is_missing());
        assert_eq!(table.rows()[2][1], Value::Int(12));
    }

    #[test]
    fn test_mixed_numeric_text_column_is_text() {
        let data = "Player,PTS\nA,12\nB,twelve\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(table.column_type(1), ColumnType::Text);
        assert_eq!(table.rows()[0][1], Value::Text("12".to_string()));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let data = "Player,Tm,PTS\nA,BOS\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(table.rows()[0][2], Value::Missing);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let data = "Player,Tm\nA,BOS,99\n";
        let err = read_table_from_bytes(data.as_bytes()).unwrap_err();
        assert!(matches!(err, NbaError::UnparsableInput(_)));
    }

    #[test]
    fn test_blank_header_is_named() {
        let data = ",Player\n0,A\n";
        let table = read_table_from_bytes(data.as_bytes()).unwrap();
        assert_eq!(table.columns()[0], "Unnamed: 0");
    }

    #[test]
    fn test_empty_input_is_unparsable() {
        let err = read_table_from_bytes(b"").unwrap_err();
        assert!(matches!(err, NbaError::UnparsableInput(_)));
    }

    #[test]
    fn test_invalid_utf8_is_unparsable() {
        let data: &[u8] = b"Player,Tm\n\xff\xfe,BOS\n";
        let err = read_table_from_bytes(data).unwrap_err();
        assert!(matches!(err, NbaError::UnparsableInput(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, NbaError::MissingInputFile(p) if p == path));
    }

    #[test]
    fn test_read_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.num_rows(), 3);
    }
}
