//! Tracks command implementation

use std::time::Instant;
use tracing::info;

use super::shared::{CommandStats, emit_view, load_session, print_heading, setup_logging};
use crate::Result;
use crate::app::services::exporter::render::track_view;
use crate::cli::args::TracksArgs;

/// List yard track lengths
pub async fn run_tracks(args: TracksArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    args.validate()?;

    let (mut session, _config, load_stats) = load_session(&args.source).await?;
    session.set_filter(args.filter());

    let tracks = session.track_segments(None);
    info!("Listing {} yard tracks", tracks.len());

    let view = track_view(&tracks);

    print_heading(&args.source, "Yard Track Lengths");
    let output = emit_view(
        &view,
        &args.source,
        "No yard tracks match the current filter.",
    )?;

    Ok(CommandStats {
        records_loaded: load_stats.normalize.records_accepted,
        records_dropped: load_stats.normalize.records_dropped,
        rows_rendered: view.rows.len(),
        processing_time: start_time.elapsed(),
        output,
    })
}
