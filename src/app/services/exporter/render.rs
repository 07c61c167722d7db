//! View rendering
//!
//! Builds the line and row forms of each view. Feet values round to whole
//! numbers here and only here; the engine keeps full precision.

use crate::app::models::{Crossing, Siding, TrackSegment};
use crate::app::services::gap_engine::{BreakdownItem, GapResult};
use crate::app::services::snapshot_assembler::{DataOrigin, Snapshot};

/// A view rendered for display and export
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// View name, used in suggested export filenames
    pub name: String,

    /// Human-readable lines in display order
    pub lines: Vec<String>,

    /// Column names for the structured row form
    pub columns: Vec<String>,

    /// Structured rows, one per result record
    pub rows: Vec<Vec<String>>,
}

impl RenderedView {
    /// Whether the view holds no result rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Round feet to a whole number and group thousands with commas
pub fn format_feet(feet: f64) -> String {
    let rounded = feet.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// One crossing formatted the way the field report prints it
pub fn crossing_line(crossing: &Crossing) -> String {
    format!(
        "MP {} — {} — {} — {} — DOT#{}",
        crossing.milepost,
        crossing.common_name,
        crossing.road_name,
        crossing.protection,
        crossing.identifier
    )
}

/// Render the crossing gap view: three-line blocks per surviving pair
pub fn gap_view(gaps: &[GapResult]) -> RenderedView {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    for (index, gap) in gaps.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(crossing_line(gap.from));
        lines.push(format!(
            "  ↓ {} ft (usable {} ft)",
            format_feet(gap.raw_feet),
            format_feet(gap.usable_feet)
        ));
        lines.push(crossing_line(gap.to));

        rows.push(vec![
            gap.from.milepost.to_string(),
            gap.from.common_name.clone(),
            gap.to.milepost.to_string(),
            gap.to.common_name.clone(),
            format!("{}", gap.raw_feet.round() as i64),
            format!("{}", gap.usable_feet.round() as i64),
        ]);
    }

    RenderedView {
        name: "crossings".to_string(),
        lines,
        columns: columns(&[
            "from_mp",
            "from_name",
            "to_mp",
            "to_name",
            "raw_feet",
            "usable_feet",
        ]),
        rows,
    }
}

/// Render the sidings list view
pub fn siding_view(sidings: &[&Siding]) -> RenderedView {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    for siding in sidings {
        lines.push(siding.name.clone());
        match (siding.start_milepost, siding.end_milepost, siding.length_feet()) {
            (Some(start), Some(end), Some(length)) => {
                lines.push(format!(
                    "  MP {} – MP {} (Total {} ft)",
                    start,
                    end,
                    format_feet(length)
                ));
            }
            _ => lines.push("  (interval incomplete, length unavailable)".to_string()),
        }

        rows.push(vec![
            siding.name.clone(),
            siding.start_milepost.map(|v| v.to_string()).unwrap_or_default(),
            siding.end_milepost.map(|v| v.to_string()).unwrap_or_default(),
            siding
                .length_feet()
                .map(|v| format!("{}", v.round() as i64))
                .unwrap_or_default(),
        ]);
    }

    RenderedView {
        name: "sidings".to_string(),
        lines,
        columns: columns(&["name", "start_mp", "end_mp", "length_feet"]),
        rows,
    }
}

/// Render one siding's interval breakdown chain
pub fn breakdown_view(siding: &Siding, items: &[BreakdownItem]) -> RenderedView {
    let mut lines = vec![siding.name.clone()];
    let mut rows = Vec::new();

    for item in items {
        match item {
            BreakdownItem::Distance {
                from_milepost,
                to_milepost,
                feet,
            } => {
                lines.push(format!("  ↓ {} ft", format_feet(*feet)));
                rows.push(vec![
                    "distance".to_string(),
                    from_milepost.to_string(),
                    to_milepost.to_string(),
                    format!("{}", feet.round() as i64),
                    String::new(),
                ]);
            }
            BreakdownItem::Crossing(crossing) => {
                lines.push(format!("  {}", crossing_line(crossing)));
                rows.push(vec![
                    "crossing".to_string(),
                    crossing.milepost.to_string(),
                    crossing.milepost.to_string(),
                    String::new(),
                    crossing.common_name.clone(),
                ]);
            }
        }
    }

    RenderedView {
        name: "siding_breakdown".to_string(),
        lines,
        columns: columns(&["item", "from_mp", "to_mp", "feet", "name"]),
        rows,
    }
}

/// Render the yard track lengths view
pub fn track_view(tracks: &[&TrackSegment]) -> RenderedView {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    for track in tracks {
        let length = track
            .length_feet
            .map(format_feet)
            .unwrap_or_else(|| "0".to_string());
        lines.push(format!("{}  {} ft", track.track_label, length));

        rows.push(vec![
            track.yard.clone(),
            track.track_label.clone(),
            track
                .length_feet
                .map(|v| format!("{}", v.round() as i64))
                .unwrap_or_default(),
        ]);
    }

    RenderedView {
        name: "tracklengths".to_string(),
        lines,
        columns: columns(&["yard", "track", "length_feet"]),
        rows,
    }
}

/// Render the dataset inventory view
pub fn summary_view(snapshot: &Snapshot) -> RenderedView {
    let mut lines = Vec::new();

    if snapshot.origin == DataOrigin::Fixture {
        lines.push("NOTE: built-in fixture data (no source data was loaded)".to_string());
    }
    lines.push(format!("Crossings:     {}", snapshot.crossings.len()));
    lines.push(format!("Sidings:       {}", snapshot.sidings.len()));
    lines.push(format!("Yard tracks:   {}", snapshot.track_segments.len()));
    lines.push(format!("States:        {}", snapshot.states.join(", ")));
    lines.push(format!("Subdivisions:  {}", snapshot.subdivisions.join(", ")));
    lines.push(format!("Yards:         {}", snapshot.yards.join(", ")));

    let origin = match snapshot.origin {
        DataOrigin::Live => "live",
        DataOrigin::Fixture => "fixture",
    };
    let rows = vec![vec![
        origin.to_string(),
        snapshot.crossings.len().to_string(),
        snapshot.sidings.len().to_string(),
        snapshot.track_segments.len().to_string(),
        snapshot.states.join("|"),
        snapshot.subdivisions.join("|"),
        snapshot.yards.join("|"),
    ]];

    RenderedView {
        name: "summary".to_string(),
        lines,
        columns: columns(&[
            "origin",
            "crossings",
            "sidings",
            "tracks",
            "states",
            "subdivisions",
            "yards",
        ]),
        rows,
    }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
