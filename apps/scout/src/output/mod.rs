//! Record serialization: CSV by default, JSON on request. Both writers
//! emit records in batch order and write empty fields as empty strings.

use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::errors::AppError;
use crate::models::record::CandidateRecord;

/// Output serialization format, selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

pub fn write_records(
    path: &Path,
    format: OutputFormat,
    records: &[CandidateRecord],
) -> Result<(), AppError> {
    match format {
        OutputFormat::Csv => write_csv(path, records)?,
        OutputFormat::Json => write_json(path, records)?,
    }
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// One header row (column names come from the record's serde renames), then
/// one row per record.
fn write_csv(path: &Path, records: &[CandidateRecord]) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new().from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, records: &[CandidateRecord]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    // BufWriter's drop discards flush errors; flush explicitly so a failed
    // write comes back as an error instead of a silent empty file
    writer.flush()?;
    Ok(())
}
