use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default header of the device timestamp column in the monitor's export.
pub const DEFAULT_TIMESTAMP_HEADER: &str = "Χρονική σήμανση συσκευής";
/// Default header of the historic glucose column (mg/dL) in the monitor's export.
pub const DEFAULT_GLUCOSE_HEADER: &str = "Ιστορική γλυκόζη mg/dL";

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputSchema,
    pub logging: Logging,
}

/// Describes where the readings live inside an uploaded workbook and how the
/// source columns map onto the canonical `Timestamp` / `Glucose` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSchema {
    /// Name of the sheet holding the readings. `None` selects the first sheet.
    pub sheet: Option<String>,
    /// Zero-based row index of the header row.
    pub header_row: usize,
    pub columns: ColumnMapping,
    /// chrono `strftime` patterns tried, in order, on textual timestamps.
    pub timestamp_formats: Vec<String>,
}

/// Source header text for each canonical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub timestamp: String,
    pub glucose: String,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive when `RUST_LOG` is not set (e.g. "info", "agp=debug").
    pub level: String,
    /// When set, logs are also written to `<directory>/agp.log`.
    pub directory: Option<PathBuf>,
}

/// How a command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---
// These mirror the monitor's own export, so an empty or missing config file
// still reads a stock export.

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            sheet: None,
            header_row: 0,
            columns: ColumnMapping::default(),
            timestamp_formats: [
                "%Y-%m-%d %H:%M:%S",
                "%Y-%m-%d %H:%M",
                "%d-%m-%Y %H:%M",
                "%d/%m/%Y %H:%M",
                "%m/%d/%Y %H:%M",
                "%Y-%m-%dT%H:%M:%S",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            timestamp: DEFAULT_TIMESTAMP_HEADER.to_string(),
            glucose: DEFAULT_GLUCOSE_HEADER.to_string(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
