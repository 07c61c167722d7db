//! Test utilities for dataset loader testing

mod document_tests;

use std::path::Path;

/// Write a dataset directory with the standard layout into `root`
pub fn write_test_dataset(root: &Path) {
    let crossings_dir = root.join("crossings");
    std::fs::create_dir_all(&crossings_dir).unwrap();

    std::fs::write(
        crossings_dir.join("IA.csv"),
        "STATE,SUBDIVISION,MP,COMMON_NAME,ROAD,PROTECTION,DOT\n\
         IA,Kansas City Sub,8.5,KANSAS AVE,Kansas Ave,GATES,079123A\n\
         IA,Kansas City Sub,10.1,TURLEY RD,Turley Rd,FLASHERS,079456B\n",
    )
    .unwrap();

    std::fs::write(
        crossings_dir.join("MO.csv"),
        "STATE,SUBDIVISION,MP,COMMON_NAME,ROAD,PROTECTION,DOT\n\
         MO,River Sub,3.2,ELM ST,Elm St,GATES,081000A\n\
         MO,River Sub,bad-milepost,BROKEN ROW,Elm St,GATES,081000B\n",
    )
    .unwrap();

    std::fs::write(
        root.join("sidings.csv"),
        "STATE,SUBDIVISION,NAME,MP_START,MP_END\n\
         IA,Kansas City Sub,HOLLIDAY SIDING,10.0,12.7\n",
    )
    .unwrap();

    std::fs::write(
        root.join("track_lengths.csv"),
        "STATE,YARD,TRACK,LENGTH\n\
         IA,KANSAS CITY YARD,101,4200\n\
         IA,KANSAS CITY YARD,102,6050\n",
    )
    .unwrap();
}

/// A snapshot document holding canonical and raw-shaped records
pub fn test_snapshot_document() -> &'static str {
    r#"{
        "states": ["IA"],
        "subdivisions": ["Kansas City Sub"],
        "crossings": [
            {
                "milepost": 8.5,
                "common_name": "KANSAS AVE",
                "road_name": "Kansas Ave",
                "protection": "GATES",
                "identifier": "079123A",
                "state": "IA",
                "subdivision": "Kansas City Sub"
            },
            {
                "MP": "10.1",
                "COMMON_NAME": "TURLEY RD",
                "ROAD": "Turley Rd",
                "PROTECTION": "FLASHERS",
                "DOT": "079456B",
                "STATE": "IA",
                "SUBDIVISION": "Kansas City Sub"
            }
        ],
        "sidings": [
            {
                "NAME": "HOLLIDAY SIDING",
                "MP_START": "10.0",
                "MP_END": "12.7",
                "STATE": "IA",
                "SUBDIVISION": "Kansas City Sub"
            }
        ],
        "yards": [
            {
                "YARD": "KANSAS CITY YARD",
                "TRACK": "101",
                "LENGTH": "4200",
                "STATE": "IA"
            }
        ]
    }"#
}
