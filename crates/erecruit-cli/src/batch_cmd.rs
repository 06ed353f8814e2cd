use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use erecruit::{BatchReport, run_batch, write_records};

use crate::cli::{ExtractionArgs, RecordFormat};

pub fn run(
    folder: Option<&Path>,
    output: &Path,
    format: RecordFormat,
    extraction: &ExtractionArgs,
) -> Result<(), i32> {
    let folder = match folder {
        Some(folder) => folder.to_path_buf(),
        None => prompt_folder(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let report = run_batch(&folder, &extraction.extractor(), &extraction.batch_options())
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;

    tracing::debug!(
        output = %output.display(),
        ?format,
        records = report.records.len(),
        "writing output"
    );
    write_records(&report.records, output, format.into()).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;

    println!("{}", summary_line(&report, output));
    Ok(())
}

/// Ask for the input folder on `prompt` and read one line from `input`.
fn prompt_folder(input: &mut impl BufRead, prompt: &mut impl Write) -> Result<PathBuf, i32> {
    let _ = write!(prompt, "Enter the path to the folder containing PDFs: ");
    let _ = prompt.flush();

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| {
        eprintln!("Error: failed to read folder path: {e}");
        1
    })?;

    let folder = line.trim();
    if folder.is_empty() {
        eprintln!("Error: no folder given");
        return Err(1);
    }
    Ok(PathBuf::from(folder))
}

fn summary_line(report: &BatchReport, output: &Path) -> String {
    let mut line = format!(
        "Wrote {} applicant(s) to {}",
        report.records.len(),
        output.display()
    );
    if !report.failures.is_empty() {
        line.push_str(&format!(
            " ({} of {} file(s) failed)",
            report.failures.len(),
            report.attempted()
        ));
    }
    line
}
