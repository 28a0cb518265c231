use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while loading and analyzing player statistics.
#[derive(Error, Debug)]
pub enum NbaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Unparsable input: {0}")]
    UnparsableInput(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

impl NbaError {
    /// True for the loader failures that halt the pipeline without failing the process.
    pub fn is_input_failure(&self) -> bool {
        matches!(
            self,
            NbaError::MissingInputFile(_) | NbaError::UnparsableInput(_)
        )
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for NbaError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        NbaError::Chart(e.to_string())
    }
}
