//! Gaps command implementation

use std::time::Instant;
use tracing::{info, warn};

use super::shared::{CommandStats, emit_view, load_session, print_heading, setup_logging};
use crate::Result;
use crate::app::services::exporter::render::gap_view;
use crate::cli::args::GapsArgs;

/// Compute and emit the crossing gap view
pub async fn run_gaps(args: GapsArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    args.validate()?;

    let (mut session, config, load_stats) = load_session(&args.source).await?;
    session.set_filter(args.filter());

    let spacing_feet = args.spacing_feet.unwrap_or(config.spacing_feet);
    let buffer_feet = args.buffer_feet.unwrap_or(config.buffer_feet);

    if args.subdivision.is_none() {
        warn!(
            "No subdivision filter set; gaps across subdivisions are not physically meaningful"
        );
    }

    let gaps = session.crossing_gaps(spacing_feet, buffer_feet, args.mode.into());
    info!(
        "Computed {} gap pairs (spacing {} ft, buffer {} ft)",
        gaps.len(),
        spacing_feet,
        buffer_feet
    );

    let view = gap_view(&gaps);

    print_heading(&args.source, "Crossing Gaps");
    let output = emit_view(
        &view,
        &args.source,
        "No gap pairs match the current filter and spacing.",
    )?;

    Ok(CommandStats {
        records_loaded: load_stats.normalize.records_accepted,
        records_dropped: load_stats.normalize.records_dropped,
        rows_rendered: view.rows.len(),
        processing_time: start_time.elapsed(),
        output,
    })
}
