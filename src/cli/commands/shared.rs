//! Shared components for CLI commands
//!
//! Session loading, logging setup, and view emission used across the
//! subcommand implementations.

use colored::Colorize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::services::dataset_loader::{DataSource, DatasetLoader, LoadStats};
use crate::app::services::exporter::{RenderedView, export};
use crate::app::session::Session;
use crate::cli::args::SourceArgs;
use crate::config::RailcoreConfig;
use crate::constants::DEFAULT_DATA_DIR;
use crate::{Error, Result};

/// Command statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Records accepted into the snapshot
    pub records_loaded: usize,
    /// Records dropped during normalization
    pub records_dropped: usize,
    /// Result rows rendered by the view
    pub rows_rendered: usize,
    /// Total command duration
    pub processing_time: Duration,
    /// Exported file name and size, when output went to a file
    pub output: Option<(String, u64)>,
}

/// Set up structured logging to stderr
///
/// Stdout stays clean for piped exports; all diagnostics go to stderr.
pub fn setup_logging(source: &SourceArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = source.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("railcore={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve configuration and load a session from the requested source
pub async fn load_session(
    source: &SourceArgs,
) -> Result<(Session, RailcoreConfig, LoadStats)> {
    let config = RailcoreConfig::load(source.config_file.as_deref())?;

    let timeout = source
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.fetch_timeout());

    let input = source
        .input
        .clone()
        .or_else(|| config.input.clone())
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let data_source = DataSource::parse(&input);

    info!("Resolved dataset source: {}", data_source.describe());

    let mut loader = DatasetLoader::new(config.aliases.clone()).with_fetch_timeout(timeout);
    if source.show_progress() {
        loader = loader.with_progress();
    }

    let mut session = Session::new();
    let load_id = session.begin_load();
    let outcome = loader.load(&data_source).await;
    session.install(load_id, outcome.snapshot);

    if session.is_fixture_data() && !source.quiet {
        eprintln!(
            "{}",
            "Warning: no source data could be loaded; showing built-in fixture data"
                .yellow()
        );
    }

    Ok((session, config, outcome.stats))
}

/// Emit a rendered view in the requested output format.
///
/// Human output goes to stdout directly, with an explicit no-results line
/// when the view is empty. Export formats write their payload to the
/// output file when one was given, otherwise to stdout.
pub fn emit_view(
    view: &RenderedView,
    source: &SourceArgs,
    empty_message: &str,
) -> Result<Option<(String, u64)>> {
    match source.output_format.export_format() {
        None => {
            if view.is_empty() {
                println!("{}", empty_message.dimmed());
            } else {
                for line in &view.lines {
                    println!("{}", line);
                }
            }
            Ok(None)
        }
        Some(format) => {
            let payload = export(view, format, chrono::Utc::now())?;
            match &source.output_file {
                Some(path) => {
                    std::fs::write(path, &payload.bytes).map_err(|e| {
                        Error::io(format!("Failed to write {}", path.display()), e)
                    })?;
                    info!(
                        "Wrote {} bytes to {} (suggested name: {})",
                        payload.bytes.len(),
                        path.display(),
                        payload.filename
                    );
                    Ok(Some((
                        path.display().to_string(),
                        payload.bytes.len() as u64,
                    )))
                }
                None => {
                    std::io::stdout()
                        .write_all(&payload.bytes)
                        .map_err(|e| Error::io("Failed to write export to stdout", e))?;
                    Ok(None)
                }
            }
        }
    }
}

/// Print a bold section heading for human output
pub fn print_heading(source: &SourceArgs, heading: &str) {
    if source.output_format.export_format().is_none() && !source.quiet {
        println!("{}", heading.bold());
        println!("{}", "=".repeat(heading.len()).bold());
    }
}
