use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use day1::{similarity_score, total_distance};
use parse_rows::{Delimiter, FieldNames, RecordReader, RowReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Compare the columns of a delimited integer file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solution to part 01: total distance between the sorted columns
    First(Input),
    /// Solution to part 02: similarity score between neighbouring columns
    Second(Input),
}

#[derive(Debug, Args)]
struct Input {
    /// File with one record per line
    infile: PathBuf,
    /// The delimiter separating the columns within INFILE
    #[arg(long, default_value = ",")]
    delimiter: String,
    /// The name of the fields. Pass multiple fields with multiple options.
    #[arg(long, required = true)]
    field_names: Vec<String>,
}

impl Input {
    fn records(&self) -> Result<RecordReader<BufReader<File>>> {
        let field_names =
            FieldNames::new(self.field_names.iter().cloned()).context("Invalid --field-names")?;
        let rows = RowReader::open(&self.infile, Delimiter::from(self.delimiter.as_str()))
            .with_context(|| format!("Failed to open given file({}).", self.infile.display()))?;
        Ok(rows.with_field_names(field_names))
    }

    fn failure(&self) -> String {
        format!(
            "Failed to read records from given input file({}).",
            self.infile.display()
        )
    }
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
            let records = input.records()?;
            let field_names = records.field_names().clone();
            let distance =
                total_distance(&field_names, records).with_context(|| input.failure())?;
            println!("{distance}");
        }
        Command::Second(input) => {
            let records = input.records()?;
            let field_names = records.field_names().clone();
            let score =
                similarity_score(&field_names, records).with_context(|| input.failure())?;
            println!("{score}");
        }
    }
    Ok(())
}
