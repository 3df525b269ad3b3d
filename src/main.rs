use clap::Parser;
use grip_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime
        .block_on(commands::run(args))
        .map_err(anyhow::Error::from);

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Alternate format prints the whole source chain
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
