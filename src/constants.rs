//! Application constants for RailCore processor
//!
//! This module contains the fixed conversion factors, default values, file
//! layout names, and placeholder strings used throughout the application.

// =============================================================================
// Linear Reference Conversion
// =============================================================================

/// Feet per mile; milepost deltas are converted with this exact factor
pub const FEET_PER_MILE: f64 = 5280.0;

// =============================================================================
// Gap Engine Defaults
// =============================================================================

/// Default minimum usable gap (feet) for threshold view mode
pub const DEFAULT_SPACING_FEET: f64 = 8000.0;

/// Default clearance (feet) subtracted at each crossing endpoint
pub const DEFAULT_BUFFER_FEET: f64 = 0.0;

// =============================================================================
// Loader Defaults and Source Layout
// =============================================================================

/// Default deadline for a single payload read or fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default dataset directory when no --input is given
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Subdirectory of a dataset root holding per-state crossing CSV files
pub const CROSSINGS_DIR_NAME: &str = "crossings";

/// Sidings CSV filename within a dataset root
pub const SIDINGS_FILE_NAME: &str = "sidings.csv";

/// Yard track lengths CSV filename within a dataset root
pub const TRACK_LENGTHS_FILE_NAME: &str = "track_lengths.csv";

// =============================================================================
// Normalization Placeholders
// =============================================================================

/// Placeholder for a crossing with no usable name field
pub const UNKNOWN_CROSSING_NAME: &str = "UNKNOWN";

/// Placeholder for a siding with no usable name field
pub const UNKNOWN_SIDING_NAME: &str = "UNKNOWN SIDING";

/// Placeholder for a yard track with no usable label field
pub const UNKNOWN_TRACK_LABEL: &str = "UNKNOWN TRACK";

/// Placeholder for a crossing with no inventory identifier
pub const MISSING_IDENTIFIER: &str = "---------";

// =============================================================================
// Configuration and Export
// =============================================================================

/// Configuration directory name under the platform config root
pub const CONFIG_DIR_NAME: &str = "railcore";

/// Configuration filename within the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for suggested export filenames
pub const EXPORT_FILENAME_PREFIX: &str = "railcore";

/// Timestamp format embedded in suggested export filenames
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert a milepost delta (miles) to feet
pub fn miles_to_feet(miles: f64) -> f64 {
    miles * FEET_PER_MILE
}

/// Build the suggested filename for an exported view
pub fn export_filename(view_name: &str, timestamp: &str, extension: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        EXPORT_FILENAME_PREFIX, view_name, timestamp, extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles_to_feet_exact() {
        assert_eq!(miles_to_feet(1.0), 5280.0);
        assert_eq!(miles_to_feet(0.0), 0.0);
        // 1.6 miles is the canonical KC Sub spacing scenario
        assert!((miles_to_feet(1.6) - 8448.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_filename_shape() {
        assert_eq!(
            export_filename("crossings", "20260101-120000", "csv"),
            "railcore_crossings_20260101-120000.csv"
        );
    }
}
