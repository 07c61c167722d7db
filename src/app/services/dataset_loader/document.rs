//! JSON snapshot document parsing
//!
//! A snapshot document carries the whole dataset in one structured payload:
//! top-level keys `states`, `subdivisions`, `crossings`, `sidings`, `yards`.
//! Entity arrays may hold canonical records or raw provider shapes; every
//! object is flattened to a raw record and pushed through the normalizer,
//! which is idempotent on canonical input. The `yards` key is tolerated in
//! both of its historical shapes: a list of yard name strings, or a list of
//! track segment records.

use serde_json::Value;
use tracing::debug;

use crate::app::models::{Crossing, RawRecord, Siding, TrackSegment};
use crate::app::services::field_normalizer::{NormalizeStats, Normalizer};
use crate::app::services::snapshot_assembler::NameHints;
use crate::{Error, Result};

/// Collections extracted from one snapshot document
#[derive(Debug, Clone, Default)]
pub struct DocumentCollections {
    pub hints: NameHints,
    pub crossings: Vec<Crossing>,
    pub sidings: Vec<Siding>,
    pub track_segments: Vec<TrackSegment>,
    pub stats: NormalizeStats,
}

/// Parse a snapshot document against the given normalizer
pub fn parse_snapshot_document(
    text: &str,
    normalizer: &Normalizer,
) -> Result<DocumentCollections> {
    let value: Value = serde_json::from_str(text)?;
    let root = value.as_object().ok_or_else(|| {
        Error::document_parsing("Snapshot document root must be a JSON object", None)
    })?;

    let mut collections = DocumentCollections {
        hints: NameHints {
            states: string_list(root.get("states")),
            subdivisions: string_list(root.get("subdivisions")),
            yards: Vec::new(),
        },
        ..Default::default()
    };

    let crossing_records = object_records(root.get("crossings"));
    let (crossings, crossing_stats) = normalizer.normalize_crossings(&crossing_records);
    collections.crossings = crossings;
    collections.stats.merge(&crossing_stats);

    let siding_records = object_records(root.get("sidings"));
    let (sidings, siding_stats) = normalizer.normalize_sidings(&siding_records);
    collections.sidings = sidings;
    collections.stats.merge(&siding_stats);

    // "yards" may be name strings or track records; dedicated track keys
    // from other document revisions are accepted alongside it
    let mut track_records = Vec::new();
    if let Some(yards) = root.get("yards") {
        collections.hints.yards = string_list(Some(yards));
        track_records.extend(object_records(Some(yards)));
    }
    for key in ["tracklengths", "track_segments"] {
        track_records.extend(object_records(root.get(key)));
    }

    // Re-index so row numbers stay unique across the merged arrays
    for (row, record) in track_records.iter_mut().enumerate() {
        record.row = row;
    }

    let (tracks, track_stats) = normalizer.normalize_tracks(&track_records);
    collections.track_segments = tracks;
    collections.stats.merge(&track_stats);

    debug!(
        "Snapshot document: {} crossings, {} sidings, {} tracks ({})",
        collections.crossings.len(),
        collections.sidings.len(),
        collections.track_segments.len(),
        collections.stats.summary()
    );

    Ok(collections)
}

/// Collect the string elements of an optional JSON array
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|array| {
            array
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten the object elements of an optional JSON array into raw records
fn object_records(value: Option<&Value>) -> Vec<RawRecord> {
    let Some(array) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    array
        .iter()
        .filter_map(Value::as_object)
        .enumerate()
        .map(|(row, object)| {
            let mut record = RawRecord::new(row);
            for (key, field) in object {
                if let Some(text) = scalar_to_string(field) {
                    record.insert(key.clone(), text);
                }
            }
            record
        })
        .collect()
}

/// Render a scalar JSON value as the string a CSV cell would have held
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        // Nested structures have no tabular equivalent
        Value::Array(_) | Value::Object(_) => None,
    }
}
