//! Field normalizer for heterogeneous record shapes
//!
//! Different data providers name the same logical columns differently
//! (`MP` vs `MILEPOST` vs `milepost`). This module maps raw records onto the
//! canonical schema through an ordered, data-driven alias table, tolerating
//! missing and malformed values instead of failing a batch.
//!
//! ## Architecture
//!
//! - [`aliases`] - The alias table: logical field name to ordered header lists
//! - [`field_parsers`] - Milepost scrubbing and placeholder text resolution
//! - [`normalizer`] - Per-kind normalization of raw records
//! - [`stats`] - Drop counts retained for diagnostics

pub mod aliases;
pub mod field_parsers;
pub mod normalizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aliases::AliasTable;
pub use normalizer::Normalizer;
pub use stats::NormalizeStats;
