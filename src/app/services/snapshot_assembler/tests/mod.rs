//! Test utilities for snapshot assembler testing

mod filter_tests;

use crate::app::models::{Crossing, Siding, TrackSegment};

/// Build a crossing with the location fields that matter for assembly
pub fn crossing_in(milepost: f64, state: &str, subdivision: &str) -> Crossing {
    Crossing {
        milepost,
        common_name: format!("CROSSING {}", milepost),
        road_name: String::new(),
        protection: "GATES".to_string(),
        identifier: "079000X".to_string(),
        state: Some(state.to_string()),
        subdivision: Some(subdivision.to_string()),
    }
}

/// Build a siding with the location fields that matter for assembly
pub fn siding_in(name: &str, state: &str, subdivision: &str) -> Siding {
    Siding {
        name: name.to_string(),
        start_milepost: Some(1.0),
        end_milepost: Some(2.0),
        state: Some(state.to_string()),
        subdivision: Some(subdivision.to_string()),
    }
}

/// Build a yard track with the location fields that matter for assembly
pub fn track_in(label: &str, state: &str, yard: &str) -> TrackSegment {
    TrackSegment {
        yard: yard.to_string(),
        track_label: label.to_string(),
        length_feet: Some(4000.0),
        state: Some(state.to_string()),
    }
}
