//! RailCore Processor Library
//!
//! A Rust library for loading railroad grade crossing, siding, and yard track
//! datasets from heterogeneous CSV and JSON sources and deriving milepost-based
//! spacing computations from them.
//!
//! This library provides tools for:
//! - Decoding quoted, comma-delimited payloads into ordered raw records
//! - Mapping inconsistent provider column names onto a canonical schema
//!   through a data-driven alias table
//! - Computing consecutive-crossing gap sequences under spacing/buffer
//!   thresholds, plus siding interval breakdowns
//! - Assembling immutable, filterable dataset snapshots with an observable
//!   fixture fallback
//! - Exporting rendered views as text, CSV, or JSON payloads

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod session;
    pub mod services {
        pub mod dataset_loader;
        pub mod exporter;
        pub mod field_normalizer;
        pub mod gap_engine;
        pub mod snapshot_assembler;
        pub mod tabular_decoder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Crossing, RawRecord, RecordKind, Siding, TrackSegment};
pub use config::RailcoreConfig;

/// Result type alias for the RailCore processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for RailCore processing operations
///
/// Only boundary operations (file/network I/O, export serialization,
/// configuration parsing) surface errors; per-record problems are dropped
/// and counted rather than raised.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP fetch failed
    #[error("HTTP fetch failed for '{url}': {message}")]
    Http {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A source read or fetch exceeded its deadline
    #[error("Source '{source_desc}' timed out after {seconds}s")]
    Timeout { source_desc: String, seconds: u64 },

    /// Snapshot document parsing error
    #[error("Snapshot document error: {message}")]
    DocumentParsing {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// CSV serialization error during export
    #[error("CSV export error: {message}")]
    CsvExport {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create an HTTP fetch error with context
    pub fn http(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Http {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a timeout error
    pub fn timeout(source_desc: impl Into<String>, seconds: u64) -> Self {
        Self::Timeout {
            source_desc: source_desc.into(),
            seconds,
        }
    }

    /// Create a snapshot document error
    pub fn document_parsing(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::DocumentParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV export error
    pub fn csv_export(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvExport {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::DocumentParsing {
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            message: "CSV serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("TOML parsing failed: {}", error),
        }
    }
}
