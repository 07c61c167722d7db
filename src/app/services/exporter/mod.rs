//! Export surface for rendered views
//!
//! A rendered view carries both the human line rendering and a structured
//! row form, so every export format serializes faithfully instead of
//! scraping display text. The exporter produces a byte payload plus a
//! suggested filename; writing it anywhere is the caller's business.
//!
//! ## Architecture
//!
//! - [`render`] - View construction from engine/session results
//! - the export entry point below

pub mod render;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::constants::{EXPORT_TIMESTAMP_FORMAT, export_filename};
use crate::{Error, Result};

// Re-export main types for easy access
pub use render::RenderedView;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text, one rendered line per row
    Text,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of row objects
    Json,
}

impl ExportFormat {
    /// File extension for the suggested filename
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// An export-ready byte payload with its suggested filename
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Serialize a rendered view into the requested format
pub fn export(
    view: &RenderedView,
    format: ExportFormat,
    stamped: DateTime<Utc>,
) -> Result<ExportPayload> {
    let bytes = match format {
        ExportFormat::Text => {
            let mut text = view.lines.join("\n");
            text.push('\n');
            text.into_bytes()
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(&view.columns)?;
            for row in &view.rows {
                writer.write_record(row)?;
            }
            writer
                .into_inner()
                .map_err(|e| Error::io_error(format!("CSV buffer flush failed: {}", e)))?
        }
        ExportFormat::Json => {
            let objects: Vec<Value> = view
                .rows
                .iter()
                .map(|row| {
                    let mut object = Map::new();
                    for (column, cell) in view.columns.iter().zip(row.iter()) {
                        object.insert(column.clone(), Value::String(cell.clone()));
                    }
                    Value::Object(object)
                })
                .collect();
            let mut bytes = serde_json::to_vec_pretty(&objects)?;
            bytes.push(b'\n');
            bytes
        }
    };

    let filename = export_filename(
        &view.name,
        &stamped.format(EXPORT_TIMESTAMP_FORMAT).to_string(),
        format.extension(),
    );

    Ok(ExportPayload { bytes, filename })
}
