//! Test utilities for gap engine testing


use crate::app::models::{Crossing, Siding};

/// Build a crossing at the given milepost with a distinguishing name
pub fn crossing_at(milepost: f64, name: &str) -> Crossing {
    Crossing {
        milepost,
        common_name: name.to_string(),
        road_name: name.to_string(),
        protection: "GATES".to_string(),
        identifier: "079000X".to_string(),
        state: Some("IA".to_string()),
        subdivision: Some("Kansas City Sub".to_string()),
    }
}

/// The three-crossing KC Sub sequence used by the spacing scenarios
pub fn kc_sub_crossings() -> Vec<Crossing> {
    vec![
        crossing_at(8.5, "KANSAS AVE"),
        crossing_at(10.1, "TURLEY RD"),
        crossing_at(12.7, "155TH ST"),
    ]
}

/// Build a siding over the given interval
pub fn siding_between(start: f64, end: f64) -> Siding {
    Siding {
        name: "HOLLIDAY SIDING".to_string(),
        start_milepost: Some(start),
        end_milepost: Some(end),
        state: Some("IA".to_string()),
        subdivision: Some("Kansas City Sub".to_string()),
    }
}
