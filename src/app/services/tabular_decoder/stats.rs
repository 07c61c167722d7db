//! Decode statistics and result structures

use crate::app::models::RawRecord;

/// Result of decoding one tabular payload
#[derive(Debug, Clone)]
pub struct DecodeResult {
    /// Trimmed header names in column order
    pub headers: Vec<String>,

    /// Decoded records in file order
    pub records: Vec<RawRecord>,

    /// Statistics gathered during the decode pass
    pub stats: DecodeStats,
}

/// Statistics for one decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Non-blank data rows seen (header excluded)
    pub rows_seen: usize,

    /// Records produced (always equals rows_seen; kept separate so callers
    /// can merge stats across payloads without re-deriving)
    pub records_decoded: usize,

    /// Rows with fewer fields than headers (padded with empty strings)
    pub short_rows: usize,

    /// Rows with more fields than headers (excess dropped)
    pub long_rows: usize,
}

impl DecodeStats {
    /// Merge another decode pass into this one
    pub fn merge(&mut self, other: &DecodeStats) {
        self.rows_seen += other.rows_seen;
        self.records_decoded += other.records_decoded;
        self.short_rows += other.short_rows;
        self.long_rows += other.long_rows;
    }

    /// Whether any row needed padding or truncation
    pub fn has_ragged_rows(&self) -> bool {
        self.short_rows > 0 || self.long_rows > 0
    }
}
