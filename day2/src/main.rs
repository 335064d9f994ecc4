use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use parse_rows::{Delimiter, RowReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Count the reports whose levels change safely")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solution to part 01: number of safe reports
    First(Input),
}

#[derive(Debug, Args)]
struct Input {
    /// File with one report per line
    infile: PathBuf,
    /// The delimiter separating the levels within INFILE
    #[arg(long, default_value = ",")]
    delimiter: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match &cli.command {
        Command::First(input) => {
            let rows = RowReader::open(&input.infile, Delimiter::from(input.delimiter.as_str()))
                .with_context(|| format!("Failed to open given file({}).", input.infile.display()))?;
            let safe_count = day2::count_safe(rows).with_context(|| {
                format!(
                    "Failed to read reports from given file({}).",
                    input.infile.display()
                )
            })?;
            println!("{safe_count}");
        }
    }
    Ok(())
}
