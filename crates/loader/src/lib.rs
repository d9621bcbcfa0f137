//! # Loader
//!
//! Reads a continuous glucose monitor export workbook and normalizes it into a
//! `ReadingSet`. The workbook is opened once; sheet, header row, column mapping
//! and timestamp formats all come from the declared `InputSchema`.
//!
//! Any input-format defect (missing sheet, missing column, unparsable
//! timestamp) is fatal: no partial reading set is ever returned.

pub mod error;
pub mod normalize;
pub mod workbook;

pub use error::LoaderError;
pub use normalize::{normalize, Cell, GLUCOSE_FIELD, TIMESTAMP_FIELD};

use configuration::InputSchema;
use core_types::ReadingSet;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// Loads the readings from a workbook on disk.
pub fn load_readings(path: &Path, schema: &InputSchema) -> Result<ReadingSet, LoaderError> {
    info!(path = %path.display(), "Loading glucose export");
    let mut workbook = calamine::open_workbook_auto(path)?;
    let rows = workbook::read_sheet(&mut workbook, schema)?;
    normalize(&rows, schema)
}

/// Loads the readings from an uploaded workbook held in memory.
pub fn load_readings_from_bytes(bytes: Vec<u8>, schema: &InputSchema) -> Result<ReadingSet, LoaderError> {
    info!(size = bytes.len(), "Loading uploaded glucose export");
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let rows = workbook::read_sheet(&mut workbook, schema)?;
    normalize(&rows, schema)
}
