//! Test utilities for field normalizer testing

mod alias_tests;

use crate::app::models::RawRecord;

/// A crossing row in the canonical header spelling
pub fn canonical_crossing_record() -> RawRecord {
    RawRecord::from_pairs(
        0,
        [
            ("MP", "8.5"),
            ("COMMON_NAME", "KANSAS AVE"),
            ("ROAD", "Kansas Ave"),
            ("PROTECTION", "GATES"),
            ("DOT", "079123A"),
            ("STATE", "IA"),
            ("SUBDIVISION", "Kansas City Sub"),
        ],
    )
}

/// The same crossing in an alternate provider spelling
pub fn alternate_crossing_record() -> RawRecord {
    RawRecord::from_pairs(
        0,
        [
            ("milepost", "8.5"),
            ("Crossing", "KANSAS AVE"),
            ("Road", "Kansas Ave"),
            ("Device", "GATES"),
            ("DOT_Number", "079123A"),
            ("state", "IA"),
            ("sub", "Kansas City Sub"),
        ],
    )
}
