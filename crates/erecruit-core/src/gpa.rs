//! GPA normalization onto a 4.0 scale.
//!
//! Result cells on the submission form are free text: `3.50 out of 4.00`,
//! `3.5/4`, `70/100`, or a score wrapped over several lines such as
//! `7\nout of\n10`. [`normalize_cell`] recognizes those encodings and converts
//! them onto the 4.0 scale. Cells that are already numeric pass through.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::cell::Cell;
use crate::table::RawTable;

/// The scale every GPA is expressed on.
pub const GPA_SCALE: f64 = 4.0;

/// `<score> (out of | /) <scale>`, tolerant of whitespace and line breaks
/// around the separator.
static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\.?\d*)\s*(?:out\s+of|/)\s*(\d+\.?\d*)").expect("valid score pattern")
});

/// A grade point average on the 4.0 scale, always within `[0, 4]`.
///
/// Deserialization goes through [`Gpa::new`], so out-of-range values are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Gpa(f64);

/// A number that is not a GPA on the 4.0 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaOutOfRange(pub f64);

impl fmt::Display for GpaOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a GPA in [0, {GPA_SCALE}]", self.0)
    }
}

impl std::error::Error for GpaOutOfRange {}

impl Gpa {
    /// Wrap `value` if it is a finite number within `[0, 4]`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=GPA_SCALE).contains(&value)).then_some(Self(value))
    }

    /// Convert `score` out of `scale` onto the 4.0 scale.
    ///
    /// A scale of exactly 4 keeps the score unchanged. A non-positive scale
    /// or a result outside `[0, 4]` yields `None`.
    pub fn from_score(score: f64, scale: f64) -> Option<Self> {
        if scale == GPA_SCALE {
            return Self::new(score);
        }
        if scale <= 0.0 {
            return None;
        }
        Self::new(score / scale * GPA_SCALE)
    }

    /// Arithmetic mean of the given values; `None` for an empty input.
    pub fn mean<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Gpa>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), g| (sum + g.0, n + 1));
        if count == 0 {
            return None;
        }
        Self::new(sum / count as f64)
    }

    /// The underlying value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Gpa {
    type Error = GpaOutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GpaOutOfRange(value))
    }
}

impl From<Gpa> for f64 {
    fn from(gpa: Gpa) -> f64 {
        gpa.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a textual score such as `3.5 out of 4` or `70/100` onto the 4.0
/// scale. Returns `None` when no score pattern is present.
pub fn parse_score(text: &str) -> Option<Gpa> {
    let caps = SCORE_PATTERN.captures(text)?;
    let score: f64 = caps[1].parse().ok()?;
    let scale: f64 = caps[2].parse().ok()?;
    Gpa::from_score(score, scale)
}

/// Normalize one Result cell.
///
/// Numeric cells are authoritative and pass through (subject to the `[0, 4]`
/// range); text cells go through [`parse_score`]; empty cells are missing.
pub fn normalize_cell(cell: &Cell) -> Option<Gpa> {
    match cell {
        Cell::Empty => None,
        Cell::Number(value) => Gpa::new(*value),
        Cell::Text(text) => parse_score(text),
    }
}

/// Normalize every value of the column labelled `column`.
///
/// Returns `None` if the table has no such column. When every value in the
/// column is already numeric the text parser is skipped entirely.
pub fn normalize_column(table: &RawTable, column: &str) -> Option<Vec<Option<Gpa>>> {
    let cells = table.column(column)?;

    if cells.iter().all(|c| matches!(c, Cell::Number(_))) {
        return Some(cells.iter().map(|c| c.as_number().and_then(Gpa::new)).collect());
    }

    Some(
        cells
            .into_iter()
            .map(|cell| {
                let gpa = normalize_cell(cell);
                #[cfg(feature = "tracing")]
                if gpa.is_none() && !cell.is_empty() {
                    tracing::debug!(value = %cell, "unrecognized result value");
                }
                gpa
            })
            .collect(),
    )
}
