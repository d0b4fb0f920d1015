use crate::extract::types::{TweetTable, COLUMNS};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write the table as CSV: the 18-name header row, then one data row per
/// table row, no index column.
pub fn write_table<W: Write>(table: &TweetTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(COLUMNS)
        .context("Failed to write CSV header")?;

    for row in &table.rows {
        csv_writer
            .serialize(row)
            .context("Failed to write CSV row")?;
    }

    csv_writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Persist the table to a CSV file at `path`.
pub fn write_csv<P: AsRef<Path>>(table: &TweetTable, path: P) -> Result<()> {
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
    write_table(table, file)
}
