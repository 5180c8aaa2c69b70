use anyhow::{Context, Result};
use clap::Parser;
use political_donors::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match run(args) {
        Ok(()) => {
            // Summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<()> {
    let input = args.input_path.clone();

    commands::run(args)
        .with_context(|| format!("Failed to process '{}'", input.display()))?;

    Ok(())
}
