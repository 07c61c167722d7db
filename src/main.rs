use clap::Parser;
use railcore::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(railcore::Error::interrupted(
                    "Processing interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - output has already been emitted by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("RailCore Processor - Railroad Field Dataset Tool");
    println!("================================================");
    println!();
    println!("Load grade crossing, siding, and yard track datasets from CSV or JSON");
    println!("sources and derive milepost gap computations from them.");
    println!();
    println!("USAGE:");
    println!("    railcore <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    gaps        Compute crossing-to-crossing gap sequences");
    println!("    sidings     List sidings or break one down against its crossings");
    println!("    tracks      List yard track lengths");
    println!("    summary     Show the dataset inventory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Gaps over a dataset directory, threshold mode:");
    println!("    railcore gaps --input ./data --subdivision \"Kansas City Sub\" \\");
    println!("                  --spacing 8000 --buffer 250");
    println!();
    println!("    # All adjacent pairs from a remote snapshot document:");
    println!("    railcore gaps --input https://example.com/snapshot.json --mode all");
    println!();
    println!("    # Break down one siding and export as CSV:");
    println!("    railcore sidings --siding \"HOLLIDAY SIDING\" --format csv -o breakdown.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    railcore <COMMAND> --help");
}
