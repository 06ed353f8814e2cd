//! Folder-level batch processing.
//!
//! Every `.pdf` file in a folder is turned into one [`ApplicantRecord`]. A
//! file that fails is logged and recorded as a [`FileFailure`]; it never
//! stops the batch. Only failing to list the folder aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use erecruit_core::{
    AcademicColumns, AcademicSummary, ApplicantRecord, MergeStrategy, TableSet, aggregate,
    merge_tables, parse_applicant,
};
use tracing::{debug, error, info, warn};

use crate::error::{Error, ExtractError, Result};
use crate::extract::{ExtractedDocument, Extractor};

/// File name suffix of processed documents (case-sensitive).
pub const PDF_SUFFIX: &str = ".pdf";

/// Options controlling how each document is interpreted.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Which logical table a page-split fragment is merged into.
    pub merge_strategy: MergeStrategy,
    /// Column labels of the academic-record table.
    pub columns: AcademicColumns,
}

/// A document that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ExtractError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One record per successfully processed file, in processing order.
    pub records: Vec<ApplicantRecord>,
    /// Files that failed, in processing order.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Number of files attempted.
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Everything extracted and derived from one document, before it is
/// flattened into an [`ApplicantRecord`].
#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub path: PathBuf,
    pub tables: TableSet,
    pub text: String,
    pub record: ApplicantRecord,
}

/// List the documents of `folder`, sorted by file name.
///
/// Only regular files whose name ends in `.pdf` are returned; the suffix
/// match is case-sensitive.
pub fn discover_pdfs(folder: &Path) -> Result<Vec<PathBuf>> {
    let read_folder = |source| Error::ReadFolder {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_folder)? {
        let entry = entry.map_err(read_folder)?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(PDF_SUFFIX) {
            continue;
        }
        if !path.is_file() {
            warn!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Extract, merge, parse and aggregate one document.
pub fn process_document<E: Extractor + ?Sized>(
    path: &Path,
    extractor: &E,
    options: &BatchOptions,
) -> std::result::Result<ProcessedDocument, ExtractError> {
    let ExtractedDocument {
        tables: raw_tables,
        text,
    } = extractor.extract_document(path)?;
    let tables = merge_tables(raw_tables, options.merge_strategy);
    debug!(file = %path.display(), logical_tables = tables.len(), "merged tables");

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let info = parse_applicant(&text, &file_name);

    let summary = match tables.first() {
        Some(academic) => aggregate(academic, &options.columns),
        None => {
            debug!(file = %path.display(), "no tables; academic fields left empty");
            AcademicSummary::default()
        }
    };

    Ok(ProcessedDocument {
        path: path.to_path_buf(),
        tables,
        text,
        record: ApplicantRecord::new(info, summary),
    })
}

/// Turn one document into an [`ApplicantRecord`].
pub fn process_file<E: Extractor + ?Sized>(
    path: &Path,
    extractor: &E,
    options: &BatchOptions,
) -> std::result::Result<ApplicantRecord, ExtractError> {
    process_document(path, extractor, options).map(|doc| doc.record)
}

/// Process every document of `folder` in file-name order.
pub fn run_batch<E: Extractor + ?Sized>(
    folder: &Path,
    extractor: &E,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let files = discover_pdfs(folder)?;
    info!(folder = %folder.display(), files = files.len(), "starting batch");

    let mut report = BatchReport::default();
    for path in files {
        info!("Starting reading of file {}", path.display());
        match process_file(&path, extractor, options) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                error!("Error processing {}: {err}", path.display());
                report.failures.push(FileFailure { path, error: err });
            }
        }
    }

    info!(
        processed = report.records.len(),
        failed = report.failures.len(),
        "batch complete"
    );
    Ok(report)
}
