//! Header alias table for logical field resolution
//!
//! The table is data, not code: each logical field maps to an ordered list
//! of acceptable literal header strings, matched case-sensitively against
//! decoded headers. The first alias present in a record wins. The built-in
//! defaults cover the provider spellings observed in the field; a TOML file
//! can replace the table wholesale.

use crate::Result;
use crate::app::models::RawRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered header aliases for every logical field
///
/// The first entry of each list is the canonical spelling, which keeps
/// normalization idempotent: a record serialized with canonical headers
/// resolves to itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasTable {
    /// Point-position field for crossings
    pub milepost: Vec<String>,

    /// Crossing common location name
    pub common_name: Vec<String>,

    /// Crossing road name
    pub road_name: Vec<String>,

    /// Warning device / protection type
    pub protection: Vec<String>,

    /// Inventory (DOT) identifier
    pub identifier: Vec<String>,

    /// State code
    pub state: Vec<String>,

    /// Subdivision name
    pub subdivision: Vec<String>,

    /// Siding name
    pub siding_name: Vec<String>,

    /// Interval start milepost
    pub start_milepost: Vec<String>,

    /// Interval end milepost
    pub end_milepost: Vec<String>,

    /// Yard name
    pub yard: Vec<String>,

    /// Yard track label
    pub track_label: Vec<String>,

    /// Explicit track length (feet)
    pub length: Vec<String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        fn list(entries: &[&str]) -> Vec<String> {
            entries.iter().map(|s| s.to_string()).collect()
        }

        Self {
            milepost: list(&["MP", "MILEPOST", "MILE_POST", "MP_MILES", "milepost"]),
            common_name: list(&["COMMON_NAME", "NAME", "Crossing", "CrossingName", "common_name"]),
            road_name: list(&["ROAD", "Road", "STREET", "HIGHWAY", "road_name"]),
            protection: list(&["PROTECTION", "Device", "WARNING_DEVICE", "DEVICE", "protection"]),
            identifier: list(&["DOT", "DOTID", "DOT_Number", "CROSSING_ID", "identifier"]),
            state: list(&["STATE", "State", "state", "ST"]),
            subdivision: list(&["SUBDIVISION", "Subdivision", "SUB", "sub", "subdivision"]),
            siding_name: list(&["NAME", "Siding", "SIDING", "SIDING_NAME", "name"]),
            start_milepost: list(&["MP_START", "StartMP", "START_MP", "BEGIN_MP", "start_milepost"]),
            end_milepost: list(&["MP_END", "EndMP", "END_MP", "FINISH_MP", "end_milepost"]),
            yard: list(&["YARD", "Yard", "YARD_NAME", "yard"]),
            track_label: list(&["TRACK", "Track", "TRACK_NO", "Name", "track_label"]),
            length: list(&["LENGTH", "Length", "LENGTH_FT", "FEET", "length_feet"]),
        }
    }
}

impl AliasTable {
    /// Load an alias table from a TOML file, replacing the defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::io(
                format!("Failed to read alias table {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse an alias table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: AliasTable = toml::from_str(content)?;
        Ok(table)
    }

    /// Resolve a logical field: the value of the first alias present in the
    /// record, even when that value is empty. `None` means no alias matched.
    pub fn resolve<'a>(&self, record: &'a RawRecord, aliases: &[String]) -> Option<&'a str> {
        aliases.iter().find_map(|alias| record.get(alias))
    }
}
