//! Conjunctive snapshot filtering
//!
//! Filtering never copies entities: a view is a fresh set of vectors
//! borrowing from the snapshot it was derived from.

use super::Snapshot;
use crate::app::models::{Crossing, Siding, TrackSegment};

/// Filter criteria applied conjunctively across the snapshot
///
/// An empty filter passes everything. An entity without a state (or
/// subdivision) fails the corresponding non-empty criterion; there is no
/// wildcard match for missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotFilter {
    /// Selected states; empty means all states
    pub states: Vec<String>,

    /// Selected subdivision; `None` means all subdivisions
    pub subdivision: Option<String>,

    /// Selected yard (track segments only); `None` means all yards
    pub yard: Option<String>,
}

impl SnapshotFilter {
    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.subdivision.is_none() && self.yard.is_none()
    }

    /// Whether a crossing passes the state and subdivision criteria
    pub fn matches_crossing(&self, crossing: &Crossing) -> bool {
        self.state_matches(crossing.state.as_deref())
            && self.subdivision_matches(crossing.subdivision.as_deref())
    }

    /// Whether a siding passes the state and subdivision criteria
    pub fn matches_siding(&self, siding: &Siding) -> bool {
        self.state_matches(siding.state.as_deref())
            && self.subdivision_matches(siding.subdivision.as_deref())
    }

    /// Whether a track segment passes the state and yard criteria
    pub fn matches_track(&self, track: &TrackSegment) -> bool {
        self.state_matches(track.state.as_deref())
            && match &self.yard {
                Some(yard) => track.yard == *yard,
                None => true,
            }
    }

    fn state_matches(&self, state: Option<&str>) -> bool {
        if self.states.is_empty() {
            return true;
        }
        match state {
            Some(state) => self.states.iter().any(|selected| selected == state),
            None => false,
        }
    }

    fn subdivision_matches(&self, subdivision: Option<&str>) -> bool {
        match &self.subdivision {
            Some(selected) => subdivision == Some(selected.as_str()),
            None => true,
        }
    }
}

/// A non-owning projection of a snapshot under a filter
#[derive(Debug, Clone)]
pub struct SnapshotView<'a> {
    pub crossings: Vec<&'a Crossing>,
    pub sidings: Vec<&'a Siding>,
    pub track_segments: Vec<&'a TrackSegment>,
}

impl SnapshotView<'_> {
    /// Whether the view matched nothing at all
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty() && self.sidings.is_empty() && self.track_segments.is_empty()
    }
}

/// Derive a filtered view of a snapshot
pub fn filter_by<'a>(snapshot: &'a Snapshot, filter: &SnapshotFilter) -> SnapshotView<'a> {
    SnapshotView {
        crossings: snapshot
            .crossings
            .iter()
            .filter(|c| filter.matches_crossing(c))
            .collect(),
        sidings: snapshot
            .sidings
            .iter()
            .filter(|s| filter.matches_siding(s))
            .collect(),
        track_segments: snapshot
            .track_segments
            .iter()
            .filter(|t| filter.matches_track(t))
            .collect(),
    }
}
