//! erecruit: applicant records from erecruitment submission PDFs.
//!
//! This is the public API facade of the workspace. It re-exports the
//! algorithms of `erecruit-core` and adds the parts that touch the outside
//! world:
//!
//! - [`extract`]: the [`Extractor`] seam and its pdfplumber implementation
//! - [`batch`]: folder iteration with a per-file error boundary
//! - [`output`]: CSV and JSON writers
//!
//! ```no_run
//! use std::path::Path;
//! use erecruit::{BatchOptions, OutputFormat, PdfExtractor, run_batch, write_records};
//!
//! let report = run_batch(Path::new("submissions"), &PdfExtractor::default(), &BatchOptions::default())?;
//! write_records(&report.records, Path::new("applicant_data.csv"), OutputFormat::Csv)?;
//! # Ok::<(), erecruit::Error>(())
//! ```

pub use erecruit_core;

pub mod batch;
pub mod error;
pub mod extract;
pub mod output;

pub use batch::{
    BatchOptions, BatchReport, FileFailure, PDF_SUFFIX, ProcessedDocument, discover_pdfs,
    process_document, process_file, run_batch,
};
pub use erecruit_core::{
    AcademicColumns, AcademicSummary, ApplicantInfo, ApplicantRecord, COLUMNS, Cell, Gpa, Level,
    MergeStrategy, RawTable, TableSet,
};
pub use error::{Error, ExtractError, Result};
pub use extract::{ExtractSettings, ExtractedDocument, Extractor, PdfExtractor, TableStrategy};
pub use output::{DEFAULT_OUTPUT, OutputFormat, write_csv, write_json, write_records};
