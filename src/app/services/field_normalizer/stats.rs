//! Normalization statistics
//!
//! Malformed records are dropped, never raised; these counters keep the
//! drops visible for diagnostics and load reporting.

/// Statistics for one normalization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Raw records examined
    pub records_seen: usize,

    /// Records that produced a canonical entity
    pub records_accepted: usize,

    /// Records rejected outright (crossings without a usable milepost)
    pub records_dropped: usize,

    /// Accepted interval records whose derived length was unavailable
    pub lengths_missing: usize,
}

impl NormalizeStats {
    /// Merge another pass into this one
    pub fn merge(&mut self, other: &NormalizeStats) {
        self.records_seen += other.records_seen;
        self.records_accepted += other.records_accepted;
        self.records_dropped += other.records_dropped;
        self.lengths_missing += other.lengths_missing;
    }

    /// One-line summary for logs and reports
    pub fn summary(&self) -> String {
        format!(
            "{} records seen, {} accepted, {} dropped, {} without derived length",
            self.records_seen, self.records_accepted, self.records_dropped, self.lengths_missing
        )
    }
}
