use std::fmt::Write as _;
use std::path::Path;

use erecruit::{ApplicantRecord, COLUMNS, ProcessedDocument, RawTable, TableSet, process_document};

use crate::cli::{ExtractionArgs, InspectFormat};

pub fn run(file: &Path, format: InspectFormat, extraction: &ExtractionArgs) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let doc = process_document(file, &extraction.extractor(), &extraction.batch_options())
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;

    match format {
        InspectFormat::Text => print!("{}", render_text(&doc)),
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&to_json(&doc)).map_err(|e| {
                eprintln!("Error: failed to serialize JSON: {e}");
                1
            })?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render_text(doc: &ProcessedDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File: {}", doc.path.display());
    let _ = writeln!(out, "Tables: {}", doc.tables.len());
    for (id, table) in doc.tables.iter() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "--- {} ({} columns, {} rows) ---",
            TableSet::label(id),
            table.column_count(),
            table.row_count()
        );
        write_table(&mut out, table);
    }
    let _ = writeln!(out);
    write_record(&mut out, &doc.record);
    out
}

fn write_table(out: &mut String, table: &RawTable) {
    let _ = writeln!(out, "{}", table.columns().join("\t"));
    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.display_text().unwrap_or_default())
            .collect();
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
}

fn write_record(out: &mut String, record: &ApplicantRecord) {
    for (column, value) in COLUMNS.iter().zip(record.to_row()) {
        let _ = writeln!(out, "{column}: {value}");
    }
}

fn to_json(doc: &ProcessedDocument) -> serde_json::Value {
    let tables: Vec<serde_json::Value> = doc
        .tables
        .iter()
        .map(|(id, table)| {
            serde_json::json!({
                "id": TableSet::label(id),
                "columns": table.columns(),
                "rows": table.rows(),
            })
        })
        .collect();

    serde_json::json!({
        "file": doc.path.display().to_string(),
        "tables": tables,
        "record": doc.record,
    })
}
