//! Tests for conjunctive snapshot filtering

use super::{crossing_in, siding_in, track_in};
use crate::app::services::snapshot_assembler::{SnapshotFilter, assemble, filter_by};

fn build_test_snapshot() -> crate::app::services::snapshot_assembler::Snapshot {
    assemble(
        vec![
            crossing_in(1.0, "IA", "Kansas City Sub"),
            crossing_in(2.0, "MO", "Kansas City Sub"),
            crossing_in(3.0, "IA", "River Sub"),
        ],
        vec![
            siding_in("HOLLIDAY", "IA", "Kansas City Sub"),
            siding_in("RIVERSIDE", "MO", "River Sub"),
        ],
        vec![
            track_in("101", "IA", "KANSAS CITY YARD"),
            track_in("201", "MO", "ST LOUIS YARD"),
        ],
    )
}

#[test]
fn test_empty_filter_passes_all() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter::default();
    assert!(filter.is_empty());

    let view = filter_by(&snapshot, &filter);
    assert_eq!(view.crossings.len(), 3);
    assert_eq!(view.sidings.len(), 2);
    assert_eq!(view.track_segments.len(), 2);
    assert!(!view.is_empty());
}

#[test]
fn test_state_filter_is_membership() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter {
        states: vec!["IA".to_string()],
        ..Default::default()
    };

    let view = filter_by(&snapshot, &filter);
    assert_eq!(view.crossings.len(), 2);
    assert_eq!(view.sidings.len(), 1);
    assert_eq!(view.track_segments.len(), 1);

    // Multiple selected states widen the view
    let both = SnapshotFilter {
        states: vec!["IA".to_string(), "MO".to_string()],
        ..Default::default()
    };
    assert_eq!(filter_by(&snapshot, &both).crossings.len(), 3);
}

#[test]
fn test_subdivision_filter_is_equality() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter {
        subdivision: Some("River Sub".to_string()),
        ..Default::default()
    };

    let view = filter_by(&snapshot, &filter);
    assert_eq!(view.crossings.len(), 1);
    assert_eq!(view.crossings[0].milepost, 3.0);
    assert_eq!(view.sidings.len(), 1);
    assert_eq!(view.sidings[0].name, "RIVERSIDE");
    // Track segments carry no subdivision; the criterion does not apply
    assert_eq!(view.track_segments.len(), 2);
}

#[test]
fn test_yard_filter_applies_to_tracks_only() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter {
        yard: Some("KANSAS CITY YARD".to_string()),
        ..Default::default()
    };

    let view = filter_by(&snapshot, &filter);
    assert_eq!(view.track_segments.len(), 1);
    assert_eq!(view.track_segments[0].track_label, "101");
    // Crossings and sidings ignore the yard criterion
    assert_eq!(view.crossings.len(), 3);
    assert_eq!(view.sidings.len(), 2);
}

#[test]
fn test_filters_are_conjunctive() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter {
        states: vec!["IA".to_string()],
        subdivision: Some("Kansas City Sub".to_string()),
        yard: None,
    };

    let view = filter_by(&snapshot, &filter);
    assert_eq!(view.crossings.len(), 1);
    assert_eq!(view.crossings[0].milepost, 1.0);
}

#[test]
fn test_entity_without_state_fails_state_filter() {
    let mut anonymous = crossing_in(9.0, "IA", "Kansas City Sub");
    anonymous.state = None;
    let snapshot = assemble(vec![anonymous], Vec::new(), Vec::new());

    let filter = SnapshotFilter {
        states: vec!["IA".to_string()],
        ..Default::default()
    };
    assert!(filter_by(&snapshot, &filter).crossings.is_empty());

    // But the empty filter still includes it
    assert_eq!(
        filter_by(&snapshot, &SnapshotFilter::default()).crossings.len(),
        1
    );
}

#[test]
fn test_no_match_yields_empty_view_not_error() {
    let snapshot = build_test_snapshot();
    let filter = SnapshotFilter {
        subdivision: Some("Nonexistent Sub".to_string()),
        ..Default::default()
    };

    let view = filter_by(&snapshot, &filter);
    assert!(view.crossings.is_empty());
    assert!(view.sidings.is_empty());
}

#[test]
fn test_view_borrows_rather_than_copies() {
    let snapshot = build_test_snapshot();
    let view = filter_by(&snapshot, &SnapshotFilter::default());

    // The view's references point into the snapshot's own storage
    assert!(std::ptr::eq(view.crossings[0], &snapshot.crossings[0]));
}
