//! Summary command implementation

use std::time::Instant;
use tracing::info;

use super::shared::{CommandStats, emit_view, load_session, print_heading, setup_logging};
use crate::Result;
use crate::app::services::exporter::render::summary_view;
use crate::cli::args::SummaryArgs;

/// Show the dataset inventory
pub async fn run_summary(args: SummaryArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    args.validate()?;

    let (session, _config, load_stats) = load_session(&args.source).await?;

    info!("Dataset loaded: {}", load_stats.summary());

    let view = summary_view(session.snapshot());

    print_heading(&args.source, "Dataset Summary");
    let output = emit_view(&view, &args.source, "Dataset is empty.")?;

    Ok(CommandStats {
        records_loaded: load_stats.normalize.records_accepted,
        records_dropped: load_stats.normalize.records_dropped,
        rows_rendered: view.rows.len(),
        processing_time: start_time.elapsed(),
        output,
    })
}
