//! Test utilities for tabular decoder testing

mod decoder_tests;
mod stats_tests;

/// A small crossing payload in the FRA-style column layout
pub fn create_crossing_csv() -> String {
    "STATE,SUBDIVISION,MP,COMMON_NAME,ROAD,PROTECTION,DOT\n\
     IA,Kansas City Sub,8.5,KANSAS AVE,Kansas Ave,GATES,079123A\n\
     IA,Kansas City Sub,10.1,TURLEY RD,Turley Rd,FLASHERS,079456B\n\
     IA,Kansas City Sub,12.7,155TH ST,155th St,GATES,079789C\n"
        .to_string()
}
