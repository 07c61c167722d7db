//! Stable milepost ordering and adjacent-pair gap computation

use std::str::FromStr;

use crate::app::models::Crossing;
use crate::constants::FEET_PER_MILE;
use crate::{Error, Result};

/// Which adjacent pairs a gap computation keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapMode {
    /// Keep only pairs whose usable distance meets the spacing threshold
    Threshold,
    /// Keep every adjacent pair
    All,
}

impl FromStr for GapMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "threshold" => Ok(GapMode::Threshold),
            "all" => Ok(GapMode::All),
            other => Err(Error::data_validation(format!(
                "Unknown gap mode '{}': expected 'threshold' or 'all'",
                other
            ))),
        }
    }
}

/// One adjacent crossing pair with its raw and usable distances
///
/// Distances stay floating-point; rounding to whole feet is a rendering
/// concern so composed computations never accumulate rounding error.
#[derive(Debug, Clone, PartialEq)]
pub struct GapResult<'a> {
    /// Lower-milepost crossing of the pair
    pub from: &'a Crossing,

    /// Higher-milepost crossing of the pair
    pub to: &'a Crossing,

    /// Centerline distance in feet (milepost delta times 5280)
    pub raw_feet: f64,

    /// Raw distance minus the buffer at both endpoints, floored at zero
    pub usable_feet: f64,
}

/// Order crossings ascending by milepost.
///
/// The sort is stable: crossings with equal mileposts keep their original
/// relative order. Caller data is never mutated; the ordering lives in a
/// new vector of references.
pub fn sort_by_milepost<'a, I>(crossings: I) -> Vec<&'a Crossing>
where
    I: IntoIterator<Item = &'a Crossing>,
{
    let mut ordered: Vec<&Crossing> = crossings.into_iter().collect();
    ordered.sort_by(|a, b| a.milepost.total_cmp(&b.milepost));
    ordered
}

/// Compute the adjacent-pair gap sequence for a set of crossings.
///
/// Crossings need not arrive sorted. For each adjacent pair in ascending
/// milepost order the raw distance converts at exactly 5280 feet per mile,
/// and the usable distance subtracts `buffer_feet` once per endpoint,
/// floored at zero. In [`GapMode::Threshold`] a pair survives iff
/// `usable_feet >= spacing_feet` (inclusive); failed pairs are absent from
/// the output entirely. Fewer than two crossings yields an empty sequence.
pub fn compute_gaps<'a, I>(
    crossings: I,
    spacing_feet: f64,
    buffer_feet: f64,
    mode: GapMode,
) -> Vec<GapResult<'a>>
where
    I: IntoIterator<Item = &'a Crossing>,
{
    let ordered = sort_by_milepost(crossings);
    if ordered.len() < 2 {
        return Vec::new();
    }

    let mut gaps = Vec::with_capacity(ordered.len() - 1);
    for pair in ordered.windows(2) {
        let raw_feet = (pair[1].milepost - pair[0].milepost) * FEET_PER_MILE;
        let usable_feet = (raw_feet - 2.0 * buffer_feet).max(0.0);

        if mode == GapMode::Threshold && usable_feet < spacing_feet {
            continue;
        }

        gaps.push(GapResult {
            from: pair[0],
            to: pair[1],
            raw_feet,
            usable_feet,
        });
    }

    gaps
}
