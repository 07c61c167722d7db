//! Siding interval breakdown
//!
//! A siding spans a milepost interval that may contain crossings. The
//! breakdown chains the interval bounds and every interior crossing into an
//! alternating distance/crossing sequence using the same gap arithmetic as
//! the adjacent-pair engine.

use super::engine::sort_by_milepost;
use crate::app::models::{Crossing, Siding};
use crate::constants::FEET_PER_MILE;

/// One element of a siding breakdown chain
#[derive(Debug, Clone, PartialEq)]
pub enum BreakdownItem<'a> {
    /// Distance between two chain points (interval bound or crossing)
    Distance {
        from_milepost: f64,
        to_milepost: f64,
        feet: f64,
    },
    /// An interior crossing within the siding interval
    Crossing(&'a Crossing),
}

/// Build the breakdown chain for a siding against the full crossing set.
///
/// Interior crossings are those whose milepost falls inside the closed
/// interval (bounds inclusive), taken in stable ascending order. The chain
/// runs from the low bound through every interior crossing to the high
/// bound, with a distance item between consecutive points; a reversed
/// interval selects by numeric range and still chains low-to-high. Zero
/// interior crossings yield a single distance spanning the whole interval.
/// Zero-length segments where a crossing sits exactly on a bound are
/// suppressed. A siding missing either endpoint has no chain to build and
/// yields an empty sequence.
pub fn siding_breakdown<'a, I>(siding: &Siding, crossings: I) -> Vec<BreakdownItem<'a>>
where
    I: IntoIterator<Item = &'a Crossing>,
{
    let Some((low, high)) = siding.bounds() else {
        return Vec::new();
    };

    let interior = sort_by_milepost(
        crossings
            .into_iter()
            .filter(|c| c.milepost >= low && c.milepost <= high),
    );

    let mut items = Vec::with_capacity(interior.len() * 2 + 1);

    if interior.is_empty() {
        items.push(distance_item(low, high));
        return items;
    }

    let mut cursor = low;
    for crossing in interior {
        if crossing.milepost > cursor {
            items.push(distance_item(cursor, crossing.milepost));
        }
        items.push(BreakdownItem::Crossing(crossing));
        cursor = crossing.milepost;
    }

    if high > cursor {
        items.push(distance_item(cursor, high));
    }

    items
}

fn distance_item<'a>(from_milepost: f64, to_milepost: f64) -> BreakdownItem<'a> {
    BreakdownItem::Distance {
        from_milepost,
        to_milepost,
        feet: (to_milepost - from_milepost) * FEET_PER_MILE,
    }
}
