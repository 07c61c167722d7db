//! Built-in fixture dataset
//!
//! A minimal Kansas City Sub dataset so every downstream component always
//! has a renderable snapshot, even when no source is reachable. Fixture
//! snapshots are tagged with their origin; the substitution is never
//! silent.

use super::{DataOrigin, Snapshot};
use crate::app::models::{Crossing, Siding, TrackSegment};

/// Build the fixture snapshot
pub fn builtin_snapshot() -> Snapshot {
    let subdivision = "Kansas City Sub";
    let state = "IA";

    let crossings = vec![
        fixture_crossing(8.5, "KANSAS AVE", "Kansas Ave", "GATES", "079123A"),
        fixture_crossing(10.1, "TURLEY RD", "Turley Rd", "FLASHERS", "079456B"),
        fixture_crossing(12.7, "155TH ST", "155th St", "GATES", "079789C"),
        fixture_crossing(15.3, "OAK RIDGE RD", "Oak Ridge Rd", "CROSSBUCKS", "079999D"),
    ];

    let sidings = vec![Siding {
        name: "HOLLIDAY SIDING".to_string(),
        start_milepost: Some(10.0),
        end_milepost: Some(12.7),
        state: Some(state.to_string()),
        subdivision: Some(subdivision.to_string()),
    }];

    let track_segments = vec![
        fixture_track("101", 4200.0),
        fixture_track("102", 6050.0),
        fixture_track("103", 8900.0),
    ];

    Snapshot {
        crossings,
        sidings,
        track_segments,
        states: vec![state.to_string()],
        subdivisions: vec![subdivision.to_string()],
        yards: vec!["KANSAS CITY YARD".to_string()],
        origin: DataOrigin::Fixture,
    }
}

fn fixture_crossing(
    milepost: f64,
    common_name: &str,
    road_name: &str,
    protection: &str,
    identifier: &str,
) -> Crossing {
    Crossing {
        milepost,
        common_name: common_name.to_string(),
        road_name: road_name.to_string(),
        protection: protection.to_string(),
        identifier: identifier.to_string(),
        state: Some("IA".to_string()),
        subdivision: Some("Kansas City Sub".to_string()),
    }
}

fn fixture_track(label: &str, length_feet: f64) -> TrackSegment {
    TrackSegment {
        yard: "KANSAS CITY YARD".to_string(),
        track_label: label.to_string(),
        length_feet: Some(length_feet),
        state: Some("IA".to_string()),
    }
}
