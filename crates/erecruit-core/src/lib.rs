//! erecruit-core: backend-independent data types and algorithms.
//!
//! This crate turns already-extracted PDF content into applicant records:
//!
//! - [`table`]: typed tables built from extracted grids, and the [`TableSet`]
//!   of logical tables
//! - [`merge`]: stitching page-split table fragments back together
//! - [`gpa`]: normalizing textual scores onto the 4.0 scale
//! - [`applicant`]: name and publication counts from document text
//! - [`aggregate`]: graduate/postgraduate GPA and affiliation summary
//! - [`record`]: the consolidated output row
//!
//! It does no I/O; PDF reading lives in the `erecruit` crate.

pub mod aggregate;
pub mod applicant;
pub mod cell;
pub mod gpa;
pub mod merge;
pub mod record;
pub mod table;

pub use aggregate::{AcademicColumns, AcademicSummary, Level, aggregate};
pub use applicant::{ApplicantInfo, parse_applicant};
pub use cell::Cell;
pub use gpa::{GPA_SCALE, Gpa, GpaOutOfRange, normalize_cell, normalize_column, parse_score};
pub use merge::{MergeStrategy, merge_tables};
pub use record::{AFFILIATION_SEPARATOR, ApplicantRecord, COLUMNS};
pub use table::{RawTable, TableSet};
