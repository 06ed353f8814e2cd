//! Document extraction backends.
//!
//! [`Extractor`] is the seam between the batch runner and whatever reads the
//! PDF. [`PdfExtractor`] implements it with pdfplumber: tables come from
//! ruled-border (lattice) detection on every page, text from each page in
//! page order.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use erecruit_core::RawTable;
use pdfplumber::{Pdf, Strategy, TableSettings, TextOptions};

use crate::error::ExtractError;

/// Reads raw tables and text out of one document.
pub trait Extractor {
    /// All tables of the document, in page order then detection order.
    fn extract_tables(&self, path: &Path) -> Result<Vec<RawTable>, ExtractError>;

    /// The text of all pages, concatenated in page order with no separator.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;

    /// Tables and text of one document.
    ///
    /// The default calls [`extract_tables`](Self::extract_tables) then
    /// [`extract_text`](Self::extract_text). Backends that can serve both
    /// from one parse override it.
    fn extract_document(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
        Ok(ExtractedDocument {
            tables: self.extract_tables(path)?,
            text: self.extract_text(path)?,
        })
    }
}

/// Raw content of one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedDocument {
    /// Tables in page order then detection order.
    pub tables: Vec<RawTable>,
    /// Concatenated page text.
    pub text: String,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStrategy {
    /// Tables bounded by drawn lines and rectangles.
    #[default]
    Lattice,
    /// Tables inferred from text alignment.
    Stream,
}

/// Settings for [`PdfExtractor`].
#[derive(Debug, Clone, Default)]
pub struct ExtractSettings {
    /// How tables are detected on each page.
    pub strategy: TableStrategy,
}

/// pdfplumber-backed [`Extractor`].
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    settings: ExtractSettings,
}

impl PdfExtractor {
    pub fn new(settings: ExtractSettings) -> Self {
        Self { settings }
    }

    fn table_settings(&self) -> TableSettings {
        let strategy = match self.settings.strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::Stream => Strategy::Stream,
        };
        TableSettings {
            strategy,
            ..TableSettings::default()
        }
    }

    fn tables_of(&self, pdf: &Pdf, path: &Path) -> Result<Vec<RawTable>, ExtractError> {
        let settings = self.table_settings();
        let mut tables = Vec::new();
        for idx in 0..pdf.page_count() {
            let page = pdf.page(idx).map_err(|e| page_error(path, idx, e))?;
            tables.extend(
                page.extract_tables(&settings)
                    .iter()
                    .map(|grid| RawTable::from_grid(grid)),
            );
        }
        tracing::debug!(file = %path.display(), tables = tables.len(), "extracted tables");
        Ok(tables)
    }
}

impl Extractor for PdfExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<RawTable>, ExtractError> {
        guard(path, || self.tables_of(&open_pdf(path)?, path))
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        guard(path, || text_of(&open_pdf(path)?, path))
    }

    fn extract_document(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
        guard(path, || {
            let pdf = open_pdf(path)?;
            Ok(ExtractedDocument {
                tables: self.tables_of(&pdf, path)?,
                text: text_of(&pdf, path)?,
            })
        })
    }
}

fn text_of(pdf: &Pdf, path: &Path) -> Result<String, ExtractError> {
    let options = TextOptions::default();
    let mut text = String::new();
    for idx in 0..pdf.page_count() {
        let page = pdf.page(idx).map_err(|e| page_error(path, idx, e))?;
        text.push_str(&page.extract_text(&options));
    }
    Ok(text)
}

fn open_pdf(path: &Path) -> Result<Pdf, ExtractError> {
    Pdf::open_file(path, None).map_err(|e| ExtractError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn page_error(path: &Path, idx: usize, err: impl std::fmt::Display) -> ExtractError {
    ExtractError::Page {
        path: path.to_path_buf(),
        page: idx + 1,
        message: err.to_string(),
    }
}

/// Run `f`, turning a backend panic into [`ExtractError::Panicked`].
fn guard<T>(
    path: &Path,
    f: impl FnOnce() -> Result<T, ExtractError>,
) -> Result<T, ExtractError> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        Err(ExtractError::Panicked {
            path: path.to_path_buf(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_lattice() {
        let extractor = PdfExtractor::default();
        assert_eq!(extractor.table_settings().strategy, Strategy::Lattice);
    }

    #[test]
    fn stream_strategy_maps_through() {
        let extractor = PdfExtractor::new(ExtractSettings {
            strategy: TableStrategy::Stream,
        });
        assert_eq!(extractor.table_settings().strategy, Strategy::Stream);
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = PdfExtractor::default()
            .extract_text(Path::new("/nonexistent/erecruitment-submission-1.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        assert!(PdfExtractor::default().extract_tables(&path).is_err());
    }

    #[test]
    fn document_of_missing_file_is_open_error() {
        let err = PdfExtractor::default()
            .extract_document(Path::new("/nonexistent/erecruitment-submission-1.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
    }

    struct Canned;

    impl Extractor for Canned {
        fn extract_tables(&self, _path: &Path) -> Result<Vec<RawTable>, ExtractError> {
            Ok(vec![RawTable::new(vec!["Level".into()], Vec::new())])
        }

        fn extract_text(&self, _path: &Path) -> Result<String, ExtractError> {
            Ok("Name : Jane Doe".to_string())
        }
    }

    #[test]
    fn default_document_combines_tables_and_text() {
        let doc = Canned.extract_document(Path::new("a.pdf")).unwrap();
        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.text, "Name : Jane Doe");
    }

    #[test]
    fn guard_converts_panics() {
        let err = guard::<()>(Path::new("x.pdf"), || panic!("boom")).unwrap_err();
        assert!(matches!(err, ExtractError::Panicked { .. }));
    }
}
