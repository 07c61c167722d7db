//! Load orchestration and bounded source reads

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::document::parse_snapshot_document;
use super::stats::LoadStats;
use super::{DataSource, is_document_name};
use crate::app::models::{Crossing, Siding, TrackSegment};
use crate::app::services::field_normalizer::{AliasTable, Normalizer};
use crate::app::services::snapshot_assembler::{NameHints, Snapshot, assemble_with_fallback};
use crate::app::services::tabular_decoder::decode;
use crate::constants::{
    CROSSINGS_DIR_NAME, DEFAULT_FETCH_TIMEOUT_SECS, SIDINGS_FILE_NAME, TRACK_LENGTHS_FILE_NAME,
};
use crate::{Error, Result};

/// Result of one load: the assembled snapshot plus its statistics
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub stats: LoadStats,
}

/// Loads datasets from directories, files, or URLs
///
/// Loading is total by design: individual payload failures are recorded in
/// the statistics and the load continues; a load where nothing arrives
/// falls back to the fixture snapshot.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    normalizer: Normalizer,
    fetch_timeout: Duration,
    show_progress: bool,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

impl DatasetLoader {
    /// Create a loader resolving fields against the given alias table
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            normalizer: Normalizer::new(aliases),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            show_progress: false,
        }
    }

    /// Set the per-payload read/fetch deadline
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Enable progress reporting for multi-file directory loads
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// The normalizer this loader pushes raw records through
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Load a dataset from the given source.
    ///
    /// Never fails: payload problems are recorded in the outcome statistics
    /// and an entirely empty load substitutes the fixture snapshot.
    pub async fn load(&self, source: &DataSource) -> LoadOutcome {
        let start_time = Instant::now();
        let mut stats = LoadStats::new();
        let mut hints = NameHints::default();
        let mut crossings: Vec<Crossing> = Vec::new();
        let mut sidings: Vec<Siding> = Vec::new();
        let mut tracks: Vec<TrackSegment> = Vec::new();

        info!("Loading dataset from {}", source.describe());

        match source {
            DataSource::Directory(root) => {
                self.load_directory(root, &mut crossings, &mut sidings, &mut tracks, &mut stats)
                    .await;
            }
            DataSource::File(path) => {
                match self.read_file(path).await {
                    Ok(text) => self.ingest_payload(
                        &path.display().to_string(),
                        &text,
                        &mut hints,
                        &mut crossings,
                        &mut sidings,
                        &mut tracks,
                        &mut stats,
                    ),
                    Err(error) => {
                        warn!("Source unavailable: {}", error);
                        stats.record_error(error.to_string());
                    }
                }
            }
            DataSource::Url(url) => {
                match self.fetch_url(url).await {
                    Ok(text) => self.ingest_payload(
                        url,
                        &text,
                        &mut hints,
                        &mut crossings,
                        &mut sidings,
                        &mut tracks,
                        &mut stats,
                    ),
                    Err(error) => {
                        warn!("Source unavailable: {}", error);
                        stats.record_error(error.to_string());
                    }
                }
            }
        }

        let snapshot = assemble_with_fallback(&hints, crossings, sidings, tracks);
        stats.load_duration = start_time.elapsed();

        info!("Load complete: {}", stats.summary());

        LoadOutcome { snapshot, stats }
    }

    /// Load the directory layout: crossings/*.csv plus the two single files
    async fn load_directory(
        &self,
        root: &Path,
        crossings: &mut Vec<Crossing>,
        sidings: &mut Vec<Siding>,
        tracks: &mut Vec<TrackSegment>,
        stats: &mut LoadStats,
    ) {
        let crossing_files = discover_crossing_files(&root.join(CROSSINGS_DIR_NAME));
        debug!("Discovered {} crossing files", crossing_files.len());

        let progress_bar = if self.show_progress && crossing_files.len() > 1 {
            let pb = ProgressBar::new(crossing_files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Loading crossing files...");
            Some(pb)
        } else {
            None
        };

        for (index, file) in crossing_files.iter().enumerate() {
            if let Some(pb) = &progress_bar {
                pb.set_position(index as u64);
                pb.set_message(
                    file.file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string(),
                );
            }

            match self.read_file(file).await {
                Ok(text) => {
                    let result = decode(&text);
                    stats.decode.merge(&result.stats);
                    let (mut parsed, normalize_stats) =
                        self.normalizer.normalize_crossings(&result.records);
                    stats.normalize.merge(&normalize_stats);
                    crossings.append(&mut parsed);
                    stats.payloads_read += 1;
                    debug!(
                        "Loaded {} crossings from {}",
                        normalize_stats.records_accepted,
                        file.display()
                    );
                }
                Err(error) => {
                    warn!("Skipping crossing file: {}", error);
                    stats.record_error(error.to_string());
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        let sidings_file = root.join(SIDINGS_FILE_NAME);
        if sidings_file.exists() {
            match self.read_file(&sidings_file).await {
                Ok(text) => {
                    let result = decode(&text);
                    stats.decode.merge(&result.stats);
                    let (mut parsed, normalize_stats) =
                        self.normalizer.normalize_sidings(&result.records);
                    stats.normalize.merge(&normalize_stats);
                    sidings.append(&mut parsed);
                    stats.payloads_read += 1;
                }
                Err(error) => {
                    warn!("Skipping sidings file: {}", error);
                    stats.record_error(error.to_string());
                }
            }
        } else {
            debug!("No sidings file at {}", sidings_file.display());
        }

        let tracks_file = root.join(TRACK_LENGTHS_FILE_NAME);
        if tracks_file.exists() {
            match self.read_file(&tracks_file).await {
                Ok(text) => {
                    let result = decode(&text);
                    stats.decode.merge(&result.stats);
                    let (mut parsed, normalize_stats) =
                        self.normalizer.normalize_tracks(&result.records);
                    stats.normalize.merge(&normalize_stats);
                    tracks.append(&mut parsed);
                    stats.payloads_read += 1;
                }
                Err(error) => {
                    warn!("Skipping track lengths file: {}", error);
                    stats.record_error(error.to_string());
                }
            }
        } else {
            debug!("No track lengths file at {}", tracks_file.display());
        }
    }

    /// Ingest a single-payload source: JSON document or crossings CSV
    #[allow(clippy::too_many_arguments)]
    fn ingest_payload(
        &self,
        source_name: &str,
        text: &str,
        hints: &mut NameHints,
        crossings: &mut Vec<Crossing>,
        sidings: &mut Vec<Siding>,
        tracks: &mut Vec<TrackSegment>,
        stats: &mut LoadStats,
    ) {
        if is_document_name(source_name) {
            match parse_snapshot_document(text, &self.normalizer) {
                Ok(mut collections) => {
                    *hints = collections.hints;
                    crossings.append(&mut collections.crossings);
                    sidings.append(&mut collections.sidings);
                    tracks.append(&mut collections.track_segments);
                    stats.normalize.merge(&collections.stats);
                    stats.payloads_read += 1;
                }
                Err(error) => {
                    warn!("Unusable snapshot document: {}", error);
                    stats.record_error(error.to_string());
                }
            }
        } else {
            let result = decode(text);
            stats.decode.merge(&result.stats);
            let (mut parsed, normalize_stats) =
                self.normalizer.normalize_crossings(&result.records);
            stats.normalize.merge(&normalize_stats);
            crossings.append(&mut parsed);
            stats.payloads_read += 1;
        }
    }

    /// Read a local file with the configured deadline
    async fn read_file(&self, path: &Path) -> Result<String> {
        let seconds = self.fetch_timeout.as_secs();
        match tokio::time::timeout(self.fetch_timeout, tokio::fs::read_to_string(path)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(error)) => Err(Error::io(
                format!("Failed to read {}", path.display()),
                error,
            )),
            Err(_) => Err(Error::timeout(path.display().to_string(), seconds)),
        }
    }

    /// Fetch a remote payload with the configured deadline
    async fn fetch_url(&self, url: &str) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(self.fetch_timeout)
            .build()
            .map_err(|e| Error::http(url, "Failed to build HTTP client", Some(e)))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http(url, "Request failed", Some(e)))?;

        if !response.status().is_success() {
            return Err(Error::http(
                url,
                format!("Non-success status {}", response.status()),
                None,
            ));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http(url, "Failed to read response body", Some(e)))
    }
}

/// Discover crossing CSV files directly under the given directory, sorted
/// by filename for deterministic load order
fn discover_crossing_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();

    files.sort();
    files
}
