//! tweetflat: flatten line-delimited tweet JSON into a CSV table
//!
//! Usage:
//!   # Write CSV to stdout
//!   tweetflat tweets.json
//!
//!   # Persist to a file
//!   tweetflat tweets.json --output processed_tweet_data.csv

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tweetflat::{flatten_json, write_csv, write_table};

#[derive(Parser, Debug)]
#[command(name = "tweetflat")]
#[command(about = "Flatten line-delimited tweet JSON into a CSV table", long_about = None)]
struct Args {
    /// Input file of newline-delimited JSON, one tweet per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output CSV file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let table = flatten_json(BufReader::new(file))?;

    match args.output {
        Some(path) => {
            write_csv(&table, &path)?;
            println!(
                "File successfully saved: {} ({} rows)",
                path.display(),
                table.len()
            );
        }
        None => write_table(&table, std::io::stdout())?,
    }

    Ok(())
}
