//! Data models for RailCore processing
//!
//! This module contains the raw and canonical record structures for grade
//! crossings, sidings, and yard track segments, keyed on milepost positions
//! along a single linear-reference axis.

use crate::constants::FEET_PER_MILE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Raw Record Structure
// =============================================================================

/// One decoded row of tabular input: trimmed column headers mapped to the
/// string values found in that row, plus the original row position.
///
/// Raw records carry no interpretation; the field normalizer resolves them
/// against an alias table to produce canonical entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// Zero-based data-row index within the decoded payload (header excluded)
    pub row: usize,

    values: HashMap<String, String>,
}

impl RawRecord {
    /// Create an empty record for the given row position
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: HashMap::new(),
        }
    }

    /// Build a record from header/value pairs
    pub fn from_pairs<I, K, V>(row: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new(row);
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// Set a field value, replacing any previous value under the same header
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a field by exact header name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check whether a header is present in this record
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of fields in this record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// =============================================================================
// Record Kinds and Canonical Entities
// =============================================================================

/// The three record kinds a raw record can normalize into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A point entity located by a single milepost
    Crossing,
    /// An interval entity defined by a start/end milepost pair
    Siding,
    /// A yard track with an explicit or derivable length
    TrackSegment,
}

impl RecordKind {
    /// Human-readable kind name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Crossing => "crossing",
            RecordKind::Siding => "siding",
            RecordKind::TrackSegment => "track segment",
        }
    }
}

/// A grade crossing located at a single milepost
///
/// The milepost is the sole ordering and distance key; all other fields are
/// descriptive. Records without a parseable milepost are never constructed,
/// so a `Crossing` in a snapshot always has a finite position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    /// Linear-reference position in miles
    pub milepost: f64,

    /// Common location name (e.g., "KANSAS AVE")
    pub common_name: String,

    /// Crossing road name
    pub road_name: String,

    /// Warning device type (e.g., "GATES", "FLASHERS", "CROSSBUCKS")
    pub protection: String,

    /// Inventory identifier (DOT number)
    pub identifier: String,

    /// Two-letter state code, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Owning subdivision name, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision: Option<String>,
}

impl Crossing {
    /// Validate crossing data for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.milepost.is_finite() {
            return Err(Error::data_validation(format!(
                "Crossing '{}' has non-finite milepost",
                self.common_name
            )));
        }

        if self.common_name.trim().is_empty() {
            return Err(Error::data_validation(
                "Crossing name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// A siding defined by a start/end milepost interval
///
/// Endpoints need not be ordered low-to-high; the derived length is always
/// the absolute difference. A siding with one unusable endpoint survives
/// normalization but carries no derived length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Siding {
    /// Siding name (e.g., "HOLLIDAY SIDING")
    pub name: String,

    /// Interval start milepost, when parseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_milepost: Option<f64>,

    /// Interval end milepost, when parseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_milepost: Option<f64>,

    /// Two-letter state code, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Owning subdivision name, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision: Option<String>,
}

impl Siding {
    /// Derived siding length in feet: absolute milepost difference
    ///
    /// Returns `None` unless both endpoints were usable.
    pub fn length_feet(&self) -> Option<f64> {
        match (self.start_milepost, self.end_milepost) {
            (Some(start), Some(end)) => Some((end - start).abs() * FEET_PER_MILE),
            _ => None,
        }
    }

    /// The interval as an ordered (low, high) milepost pair
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.start_milepost, self.end_milepost) {
            (Some(start), Some(end)) => Some((start.min(end), start.max(end))),
            _ => None,
        }
    }

    /// Validate siding data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Siding name cannot be empty".to_string(),
            ));
        }

        for endpoint in [self.start_milepost, self.end_milepost].into_iter().flatten() {
            if !endpoint.is_finite() {
                return Err(Error::data_validation(format!(
                    "Siding '{}' has non-finite endpoint milepost",
                    self.name
                )));
            }
        }

        Ok(())
    }
}

/// A yard track with a known or derivable length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    /// Owning yard name (e.g., "KANSAS CITY YARD")
    pub yard: String,

    /// Track label within the yard (e.g., "101")
    pub track_label: String,

    /// Track length in feet, from an explicit length field or a milepost pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_feet: Option<f64>,

    /// Two-letter state code, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl TrackSegment {
    /// Validate track segment data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.yard.trim().is_empty() {
            return Err(Error::data_validation(
                "Track segment yard cannot be empty".to_string(),
            ));
        }

        if let Some(length) = self.length_feet {
            if !length.is_finite() || length < 0.0 {
                return Err(Error::data_validation(format!(
                    "Track '{}' has invalid length {}",
                    self.track_label, length
                )));
            }
        }

        Ok(())
    }
}

/// A normalized entity of any record kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocatedEntity {
    Crossing(Crossing),
    Siding(Siding),
    TrackSegment(TrackSegment),
}

impl LocatedEntity {
    /// The record kind of this entity
    pub fn kind(&self) -> RecordKind {
        match self {
            LocatedEntity::Crossing(_) => RecordKind::Crossing,
            LocatedEntity::Siding(_) => RecordKind::Siding,
            LocatedEntity::TrackSegment(_) => RecordKind::TrackSegment,
        }
    }
}
