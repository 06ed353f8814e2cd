//! Serialization of applicant records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use erecruit_core::{ApplicantRecord, COLUMNS};

use crate::error::Result;

/// Default output file, written to the current directory.
pub const DEFAULT_OUTPUT: &str = "applicant_data.csv";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One header row, then one row per applicant.
    #[default]
    Csv,
    /// A JSON array of applicant objects.
    Json,
}

/// Write `records` as CSV: a header row, then one row per record with blank
/// cells for missing values.
pub fn write_csv<W: Write>(records: &[ApplicantRecord], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;
    for record in records {
        csv.write_record(record.to_row())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `records` as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[ApplicantRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `records` to the file at `path` in the given format, replacing any
/// existing file.
pub fn write_records(records: &[ApplicantRecord], path: &Path, format: OutputFormat) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => write_csv(records, writer),
        OutputFormat::Json => write_json(records, writer),
    }
}
