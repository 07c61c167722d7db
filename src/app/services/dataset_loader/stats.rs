//! Load statistics

use std::time::Duration;

use crate::app::services::field_normalizer::NormalizeStats;
use crate::app::services::tabular_decoder::DecodeStats;

/// Statistics accumulated across every payload of one load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Payloads successfully read or fetched
    pub payloads_read: usize,

    /// Decode counters summed across payloads
    pub decode: DecodeStats,

    /// Normalization counters summed across payloads
    pub normalize: NormalizeStats,

    /// Per-payload failures (unreadable file, timeout, bad document)
    pub errors: Vec<String>,

    /// Wall-clock duration of the whole load
    pub load_duration: Duration,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payload failure without aborting the load
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// One-line summary for logs and reports
    pub fn summary(&self) -> String {
        format!(
            "{} payloads, {} rows decoded, {} records accepted, {} dropped, {} errors in {:.2}s",
            self.payloads_read,
            self.decode.records_decoded,
            self.normalize.records_accepted,
            self.normalize.records_dropped,
            self.errors.len(),
            self.load_duration.as_secs_f64()
        )
    }
}
