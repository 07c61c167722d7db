//! Application session state
//!
//! The session is an explicit value object holding the current snapshot and
//! filter; every query is a pure function of that state plus its
//! parameters, returning fresh result sequences. Loads are tagged with a
//! monotonic id so a stale fetch that finishes after a newer load began can
//! never overwrite the newer data.

use tracing::{debug, warn};

use crate::app::models::{Crossing, Siding, TrackSegment};
use crate::app::services::gap_engine::{BreakdownItem, GapMode, GapResult, compute_gaps, siding_breakdown};
use crate::app::services::snapshot_assembler::{
    DataOrigin, Snapshot, SnapshotFilter, SnapshotView, filter_by,
};

/// Monotonic identifier for one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadId(u64);

/// Session state: the current snapshot, the active filter, and load tracking
#[derive(Debug)]
pub struct Session {
    snapshot: Snapshot,
    filter: SnapshotFilter,
    issued_loads: u64,
    installed_load: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with an empty snapshot and no filter
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            filter: SnapshotFilter::default(),
            issued_loads: 0,
            installed_load: 0,
        }
    }

    /// Issue the id for a new load request
    pub fn begin_load(&mut self) -> LoadId {
        self.issued_loads += 1;
        LoadId(self.issued_loads)
    }

    /// Install a completed load's snapshot.
    ///
    /// Only the latest issued load may install; anything older is stale and
    /// discarded. Returns whether the snapshot was accepted.
    pub fn install(&mut self, id: LoadId, snapshot: Snapshot) -> bool {
        if id.0 != self.issued_loads {
            warn!(
                "Discarding stale load result {} (latest issued is {})",
                id.0, self.issued_loads
            );
            return false;
        }

        debug!("Installing snapshot for load {}", id.0);
        self.snapshot = snapshot;
        self.installed_load = id.0;
        true
    }

    /// The current snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Whether the current snapshot is fixture data
    pub fn is_fixture_data(&self) -> bool {
        self.snapshot.origin == DataOrigin::Fixture
    }

    /// Replace the active filter
    pub fn set_filter(&mut self, filter: SnapshotFilter) {
        self.filter = filter;
    }

    /// The active filter
    pub fn filter(&self) -> &SnapshotFilter {
        &self.filter
    }

    /// The filtered view of the current snapshot
    pub fn view(&self) -> SnapshotView<'_> {
        filter_by(&self.snapshot, &self.filter)
    }

    /// Gap sequence over the filtered crossings.
    ///
    /// Gaps spanning subdivisions are not physically meaningful; callers
    /// should set a subdivision filter first.
    pub fn crossing_gaps(
        &self,
        spacing_feet: f64,
        buffer_feet: f64,
        mode: GapMode,
    ) -> Vec<GapResult<'_>> {
        let view = self.view();
        compute_gaps(view.crossings.into_iter(), spacing_feet, buffer_feet, mode)
    }

    /// The filtered sidings
    pub fn sidings(&self) -> Vec<&Siding> {
        self.view().sidings
    }

    /// Breakdown chain for the named siding within the filtered view.
    ///
    /// Returns the siding alongside its chain; `None` when no filtered
    /// siding carries that name.
    pub fn siding_breakdown(&self, name: &str) -> Option<(&Siding, Vec<BreakdownItem<'_>>)> {
        let view = self.view();
        let siding = view.sidings.iter().find(|s| s.name == name).copied()?;
        let items = siding_breakdown(siding, view.crossings);
        Some((siding, items))
    }

    /// The filtered track segments; an explicit yard narrows further
    pub fn track_segments(&self, yard: Option<&str>) -> Vec<&TrackSegment> {
        let view = self.view();
        match yard {
            Some(yard) => view
                .track_segments
                .into_iter()
                .filter(|t| t.yard == yard)
                .collect(),
            None => view.track_segments,
        }
    }

    /// The filtered crossings
    pub fn crossings(&self) -> Vec<&Crossing> {
        self.view().crossings
    }
}
