use core_types::CoreError;
use thiserror::Error;

/// Input-format failures. Any of these aborts the whole load; nothing is
/// returned for the rows that did parse.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("Header row {0} is beyond the end of the sheet")]
    MissingHeaderRow(usize),

    #[error("Column '{header}' for field {field} not found; headers present: {found:?}")]
    MissingColumn {
        field: &'static str,
        header: String,
        found: Vec<String>,
    },

    #[error("Row {row}: cannot parse timestamp '{value}'")]
    UnparsableTimestamp { row: usize, value: String },

    #[error("Row {row}: glucose value '{value}' is not a number")]
    InvalidGlucose { row: usize, value: String },

    #[error("Row {row}: {source}")]
    Reading {
        row: usize,
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
