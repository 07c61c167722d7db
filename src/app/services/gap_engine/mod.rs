//! Geospatial ordering and gap computation
//!
//! Given crossings located on a single linear-reference axis, this module
//! produces the ascending milepost ordering and the consecutive-pair gap
//! sequence under a spacing/buffer policy, plus the siding interval
//! breakdown chain.
//!
//! Gaps are only physically meaningful within one subdivision; callers
//! filter before invoking, the engine does not validate the axis.
//!
//! ## Architecture
//!
//! - [`engine`] - Stable ordering and adjacent-pair gap computation
//! - [`interval`] - Siding breakdown: interior crossings chained between
//!   the interval bounds

pub mod engine;
pub mod interval;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use engine::{GapMode, GapResult, compute_gaps, sort_by_milepost};
pub use interval::{BreakdownItem, siding_breakdown};
