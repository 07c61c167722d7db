//! Dataset loading from the system boundary
//!
//! The loader is the only suspension point in the application: it reads CSV
//! payloads from a directory tree or fetches a single JSON snapshot
//! document, every read bounded by a timeout. Failures degrade to the
//! built-in fixture with a warning; nothing here is fatal.
//!
//! ## Architecture
//!
//! - [`loader`] - Source resolution, bounded reads, orchestration
//! - [`document`] - JSON snapshot document parsing
//! - [`stats`] - Load statistics accumulated across payloads

pub mod document;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

use std::path::PathBuf;

// Re-export main types for easy access
pub use document::{DocumentCollections, parse_snapshot_document};
pub use loader::{DatasetLoader, LoadOutcome};
pub use stats::LoadStats;

/// A resolvable dataset source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A dataset directory with crossings/, sidings.csv, track_lengths.csv
    Directory(PathBuf),
    /// A single local file: JSON snapshot document or crossings CSV
    File(PathBuf),
    /// A remote URL: JSON snapshot document or crossings CSV
    Url(String),
}

impl DataSource {
    /// Resolve a CLI input string into a source variant
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            return DataSource::Url(input.to_string());
        }

        let path = PathBuf::from(input);
        if path.is_dir() {
            DataSource::Directory(path)
        } else {
            DataSource::File(path)
        }
    }

    /// Human-readable description for logs and timeout messages
    pub fn describe(&self) -> String {
        match self {
            DataSource::Directory(path) => path.display().to_string(),
            DataSource::File(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }
}

/// Whether a source name looks like a JSON snapshot document
pub(crate) fn is_document_name(name: &str) -> bool {
    name.rsplit('.')
        .next()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
