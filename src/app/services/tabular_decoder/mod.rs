//! Tabular decoder for delimited dataset payloads
//!
//! This module parses comma-delimited text with a header row into an ordered
//! sequence of raw records. The decoder is deliberately lossy-but-total:
//! quoting problems are absorbed line by line instead of failing a load.
//!
//! ## Architecture
//!
//! - [`decoder`] - Line splitting, quote-aware field scanning, header zipping
//! - [`stats`] - Decode statistics and result structure

pub mod decoder;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::{decode, split_fields};
pub use stats::{DecodeResult, DecodeStats};
