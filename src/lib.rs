pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod visualization;

pub use analysis::Analyzer;
pub use error::NbaError;
pub use io::{CsvFormat, TableReader};
pub use models::{ColumnType, Table, Value};
pub use pipeline::{PipelineConfig, PipelineOutcome, PipelineResults};
