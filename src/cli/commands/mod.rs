//! Command implementations for RailCore processor CLI
//!
//! This module contains the command execution logic for the CLI interface.
//! Each command is implemented in its own module:
//! - `gaps`: crossing gap sequences under the spacing/buffer policy
//! - `sidings`: siding listing and interval breakdowns
//! - `tracks`: yard track length listing
//! - `summary`: dataset inventory

pub mod gaps;
pub mod shared;
pub mod sidings;
pub mod summary;
pub mod tracks;

// Re-export the main types for convenience
pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for RailCore processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<CommandStats> {
    match args.get_command() {
        Commands::Gaps(gaps_args) => gaps::run_gaps(gaps_args).await,
        Commands::Sidings(sidings_args) => sidings::run_sidings(sidings_args).await,
        Commands::Tracks(tracks_args) => tracks::run_tracks(tracks_args).await,
        Commands::Summary(summary_args) => summary::run_summary(summary_args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_stats_default() {
        let stats = CommandStats::default();
        assert_eq!(stats.records_loaded, 0);
        assert_eq!(stats.rows_rendered, 0);
        assert!(stats.output.is_none());
    }
}
