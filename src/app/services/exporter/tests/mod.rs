//! Test utilities for exporter testing


use crate::app::models::Crossing;

/// Build a crossing for rendering tests
pub fn crossing_at(milepost: f64, name: &str) -> Crossing {
    Crossing {
        milepost,
        common_name: name.to_string(),
        road_name: format!("{} Rd", name),
        protection: "GATES".to_string(),
        identifier: "079123A".to_string(),
        state: Some("IA".to_string()),
        subdivision: Some("Kansas City Sub".to_string()),
    }
}
