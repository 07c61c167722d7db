//! Sidings command implementation

use std::time::Instant;
use tracing::info;

use super::shared::{CommandStats, emit_view, load_session, print_heading, setup_logging};
use crate::app::services::exporter::render::{breakdown_view, siding_view};
use crate::cli::args::SidingsArgs;
use crate::{Error, Result};

/// List sidings or emit one siding's interval breakdown
pub async fn run_sidings(args: SidingsArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    args.validate()?;

    let (mut session, _config, load_stats) = load_session(&args.source).await?;
    session.set_filter(args.filter());

    let view = match &args.siding {
        Some(name) => {
            let (siding, items) = session.siding_breakdown(name).ok_or_else(|| {
                Error::data_validation(format!(
                    "No siding named '{}' in the current filter",
                    name
                ))
            })?;
            info!("Breakdown for '{}': {} chain items", siding.name, items.len());
            breakdown_view(siding, &items)
        }
        None => {
            let sidings = session.sidings();
            info!("Listing {} sidings", sidings.len());
            siding_view(&sidings)
        }
    };

    print_heading(&args.source, "Sidings");
    let output = emit_view(
        &view,
        &args.source,
        "No sidings match the current filter.",
    )?;

    Ok(CommandStats {
        records_loaded: load_stats.normalize.records_accepted,
        records_dropped: load_stats.normalize.records_dropped,
        rows_rendered: view.rows.len(),
        processing_time: start_time.elapsed(),
        output,
    })
}
