use crate::error::LoaderError;
use chrono::{DateTime, NaiveDateTime};
use configuration::InputSchema;
use core_types::{Reading, ReadingSet};
use std::fmt;
use tracing::{debug, info, warn};

/// Canonical name of the timestamp field.
pub const TIMESTAMP_FIELD: &str = "Timestamp";
/// Canonical name of the glucose field.
pub const GLUCOSE_FIELD: &str = "Glucose";

/// A spreadsheet cell, reduced to the shapes the normalizer cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::DateTime(dt) => write!(f, "{dt}"),
        }
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    timestamp: usize,
    glucose: usize,
}

/// Turns the raw rows of one sheet into a validated `ReadingSet`.
///
/// `rows` is indexed from the top of the sheet, so `schema.header_row`
/// addresses it directly. Rows without a glucose value are other record
/// types in the device export and are skipped; every other defect aborts
/// the load.
pub fn normalize(rows: &[Vec<Cell>], schema: &InputSchema) -> Result<ReadingSet, LoaderError> {
    let header = rows
        .get(schema.header_row)
        .ok_or(LoaderError::MissingHeaderRow(schema.header_row))?;
    let columns = resolve_columns(header, schema)?;

    let mut readings = Vec::with_capacity(rows.len().saturating_sub(schema.header_row + 1));
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate().skip(schema.header_row + 1) {
        // Spreadsheet row numbers are 1-based.
        let row_number = index + 1;
        let timestamp_cell = row.get(columns.timestamp).unwrap_or(&Cell::Empty);
        let glucose_cell = row.get(columns.glucose).unwrap_or(&Cell::Empty);

        let unparsable = || LoaderError::UnparsableTimestamp {
            row: row_number,
            value: timestamp_cell.to_string(),
        };
        // A timestamp that is present must parse, even on rows skipped below.
        let timestamp = if timestamp_cell.is_blank() {
            None
        } else {
            Some(parse_timestamp(timestamp_cell, &schema.timestamp_formats).ok_or_else(unparsable)?)
        };

        if glucose_cell.is_blank() {
            if timestamp.is_some() {
                debug!(row = row_number, "No historic glucose value, skipping row");
            }
            skipped += 1;
            continue;
        }

        let timestamp = timestamp.ok_or_else(unparsable)?;
        let glucose = parse_glucose(glucose_cell).ok_or_else(|| LoaderError::InvalidGlucose {
            row: row_number,
            value: glucose_cell.to_string(),
        })?;

        let reading = Reading::new(timestamp, glucose).map_err(|source| LoaderError::Reading {
            row: row_number,
            source,
        })?;
        readings.push(reading);
    }

    let readings = ReadingSet::new(readings)?;
    if !readings.is_chronological() {
        warn!("Timestamps are not in chronological order; results do not depend on order");
    }
    info!(readings = readings.len(), skipped, "Normalized reading set");

    Ok(readings)
}

fn resolve_columns(header: &[Cell], schema: &InputSchema) -> Result<Columns, LoaderError> {
    let found: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();
    let locate = |field: &'static str, wanted: &str| {
        let wanted = wanted.trim();
        found
            .iter()
            .position(|h| h == wanted)
            .ok_or_else(|| LoaderError::MissingColumn {
                field,
                header: wanted.to_string(),
                found: found.iter().filter(|h| !h.is_empty()).cloned().collect(),
            })
    };

    Ok(Columns {
        timestamp: locate(TIMESTAMP_FIELD, &schema.columns.timestamp)?,
        glucose: locate(GLUCOSE_FIELD, &schema.columns.glucose)?,
    })
}

fn parse_timestamp(cell: &Cell, formats: &[String]) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            if let Ok(dt) = text.parse::<NaiveDateTime>() {
                return Some(dt);
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Some(dt.naive_local());
            }
            formats
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        }
        Cell::Empty | Cell::Number(_) => None,
    }
}

fn parse_glucose(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(text) => text.trim().replace(',', ".").parse::<f64>().ok(),
        Cell::Empty | Cell::DateTime(_) => None,
    }
}
