//! Snapshot assembly and filtered views
//!
//! A snapshot is the aggregate root for one load cycle: the normalized
//! entity collections plus the distinct state/subdivision/yard name lists
//! in stable first-seen order. Snapshots are built wholesale and never
//! patched; every filter request derives a non-owning projection.
//!
//! ## Architecture
//!
//! - [`assembler`] - Snapshot construction and name-set derivation
//! - [`filter`] - Conjunctive filter predicate and reference views
//! - [`fixture`] - The built-in fallback dataset and its observable origin tag

pub mod assembler;
pub mod filter;
pub mod fixture;

#[cfg(test)]
pub mod tests;

use crate::app::models::{Crossing, Siding, TrackSegment};

// Re-export main types for easy access
pub use assembler::{NameHints, assemble, assemble_with_fallback, assemble_with_hints};
pub use filter::{SnapshotFilter, SnapshotView, filter_by};
pub use fixture::builtin_snapshot;

/// Where a snapshot's data came from
///
/// The fixture substitution is deliberately loud: downstream code and
/// reports can always tell demo data from a real load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// Assembled from externally loaded records
    Live,
    /// Substituted from the built-in fixture because no real data arrived
    Fixture,
}

/// The full in-memory dataset for one load cycle
///
/// Immutable after construction; the gap engine and filter layer borrow
/// read-only references and return newly allocated result sequences.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Grade crossings in input order
    pub crossings: Vec<Crossing>,

    /// Sidings in input order
    pub sidings: Vec<Siding>,

    /// Yard track segments in input order
    pub track_segments: Vec<TrackSegment>,

    /// Distinct non-empty states, first-seen order
    pub states: Vec<String>,

    /// Distinct non-empty subdivisions, first-seen order
    pub subdivisions: Vec<String>,

    /// Distinct non-empty yards, first-seen order
    pub yards: Vec<String>,

    /// Whether this snapshot holds live or fixture data
    pub origin: DataOrigin,
}

impl Snapshot {
    /// An empty live snapshot (the state before any load completes)
    pub fn empty() -> Self {
        Self {
            crossings: Vec::new(),
            sidings: Vec::new(),
            track_segments: Vec::new(),
            states: Vec::new(),
            subdivisions: Vec::new(),
            yards: Vec::new(),
            origin: DataOrigin::Live,
        }
    }

    /// Whether every entity collection is empty
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty() && self.sidings.is_empty() && self.track_segments.is_empty()
    }

    /// Total entity count across all collections
    pub fn entity_count(&self) -> usize {
        self.crossings.len() + self.sidings.len() + self.track_segments.len()
    }
}
