//! Command-line argument definitions for RailCore processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API: one subcommand per view plus the shared source/output options.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::app::services::exporter::ExportFormat;
use crate::app::services::gap_engine::GapMode;
use crate::app::services::snapshot_assembler::SnapshotFilter;

/// CLI arguments for the RailCore dataset processor
///
/// Loads grade crossing, siding, and yard track datasets from CSV or JSON
/// sources and derives milepost-based spacing views from them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "railcore",
    version,
    about = "Derive crossing spacing, siding breakdowns, and yard track lengths from railroad datasets",
    long_about = "A field-data tool that loads grade crossing, siding, and yard track records \
                  from heterogeneous CSV files or JSON snapshot documents, filters them by \
                  state/subdivision/yard, and derives milepost gap computations. Views export \
                  as plain text, CSV, or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the RailCore processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Compute crossing-to-crossing gap sequences
    Gaps(GapsArgs),
    /// List sidings, or break one siding down against its interior crossings
    Sidings(SidingsArgs),
    /// List yard track lengths
    Tracks(TracksArgs),
    /// Show the dataset inventory
    Summary(SummaryArgs),
}

/// Source and output options shared by every subcommand
#[derive(Debug, Clone, Default, Parser)]
pub struct SourceArgs {
    /// Dataset source: a directory (crossings/, sidings.csv,
    /// track_lengths.csv), a single CSV or JSON file, or an http(s) URL
    #[arg(short = 'i', long = "input", value_name = "PATH_OR_URL")]
    pub input: Option<String>,

    /// Path to configuration file (TOML format)
    ///
    /// If not specified, looks for railcore/config.toml in the platform
    /// config directory.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Per-payload fetch/read deadline in seconds
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        value_name = "FORMAT"
    )]
    pub output_format: OutputFormat,

    /// Write exported output to this file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl SourceArgs {
    /// Validate shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err(Error::configuration(
                    "Timeout must be greater than 0 seconds".to_string(),
                ));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the gaps command
#[derive(Debug, Clone, Parser)]
pub struct GapsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Minimum usable gap in feet for threshold mode
    ///
    /// Defaults to the configured spacing when omitted.
    #[arg(short = 's', long = "spacing", value_name = "FEET", allow_hyphen_values = true)]
    pub spacing_feet: Option<f64>,

    /// Clearance in feet subtracted at each crossing endpoint
    #[arg(short = 'b', long = "buffer", value_name = "FEET")]
    pub buffer_feet: Option<f64>,

    /// View mode: threshold keeps only pairs meeting the spacing, all keeps
    /// every adjacent pair
    #[arg(short = 'm', long = "mode", value_enum, default_value = "threshold")]
    pub mode: GapViewMode,

    /// Filter by state (repeatable or comma-separated)
    #[arg(long = "state", value_name = "STATE", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Filter by subdivision (gaps across subdivisions are not meaningful)
    #[arg(long = "subdivision", value_name = "NAME")]
    pub subdivision: Option<String>,
}

impl GapsArgs {
    /// Validate the gaps command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;

        for (name, value) in [("spacing", self.spacing_feet), ("buffer", self.buffer_feet)] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::configuration(format!(
                        "{} must be a non-negative number, got {}",
                        name, value
                    )));
                }
            }
        }

        Ok(())
    }

    /// The snapshot filter these arguments describe
    pub fn filter(&self) -> SnapshotFilter {
        SnapshotFilter {
            states: self.states.clone(),
            subdivision: self.subdivision.clone(),
            yard: None,
        }
    }
}

/// Arguments for the sidings command
#[derive(Debug, Clone, Parser)]
pub struct SidingsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Filter by state (repeatable or comma-separated)
    #[arg(long = "state", value_name = "STATE", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Filter by subdivision
    #[arg(long = "subdivision", value_name = "NAME")]
    pub subdivision: Option<String>,

    /// Break down this siding against its interior crossings instead of
    /// listing all sidings
    #[arg(long = "siding", value_name = "NAME")]
    pub siding: Option<String>,
}

impl SidingsArgs {
    /// Validate the sidings command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }

    /// The snapshot filter these arguments describe
    pub fn filter(&self) -> SnapshotFilter {
        SnapshotFilter {
            states: self.states.clone(),
            subdivision: self.subdivision.clone(),
            yard: None,
        }
    }
}

/// Arguments for the tracks command
#[derive(Debug, Clone, Parser)]
pub struct TracksArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Filter by state (repeatable or comma-separated)
    #[arg(long = "state", value_name = "STATE", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Filter by yard
    #[arg(long = "yard", value_name = "NAME")]
    pub yard: Option<String>,
}

impl TracksArgs {
    /// Validate the tracks command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }

    /// The snapshot filter these arguments describe
    pub fn filter(&self) -> SnapshotFilter {
        SnapshotFilter {
            states: self.states.clone(),
            subdivision: None,
            yard: self.yard.clone(),
        }
    }
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// Plain text export
    Text,
    /// CSV export
    Csv,
    /// JSON export
    Json,
}

impl OutputFormat {
    /// The export format this output format maps to, if it is an export
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Human => None,
            OutputFormat::Text => Some(ExportFormat::Text),
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Json => Some(ExportFormat::Json),
        }
    }
}

/// Gap view mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GapViewMode {
    /// Keep only pairs whose usable distance meets the spacing threshold
    Threshold,
    /// Keep every adjacent pair
    All,
}

impl From<GapViewMode> for GapMode {
    fn from(mode: GapViewMode) -> Self {
        match mode {
            GapViewMode::Threshold => GapMode::Threshold,
            GapViewMode::All => GapMode::All,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}
