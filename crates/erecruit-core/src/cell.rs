//! Typed table cells.
//!
//! Extracted tables arrive as optional strings. [`Cell::infer`] gives each
//! cell a type so that downstream code can tell an already-numeric GPA apart
//! from a textual encoding that still needs normalization.

use std::fmt;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Cell {
    /// No content.
    #[default]
    Empty,
    /// A value that parsed as a finite decimal number.
    Number(f64),
    /// Any other text, kept verbatim (line breaks included).
    Text(String),
}

impl Cell {
    /// Infer the type of an extracted cell.
    ///
    /// `None` and whitespace-only text become [`Cell::Empty`]. Text whose
    /// trimmed form parses as a finite `f64` becomes [`Cell::Number`].
    /// Everything else is kept as [`Cell::Text`] without modification.
    pub fn infer(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return Cell::Empty;
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match parse_decimal(trimmed) {
            Some(value) => Cell::Number(value),
            None => Cell::Text(text.to_string()),
        }
    }

    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the numeric value of a [`Cell::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the raw text of a [`Cell::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the cell content as whitespace-normalized text, or `None`
    /// when the cell carries nothing printable.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Number(value) => Some(value.to_string()),
            Cell::Text(text) => {
                let collapsed = collapse_whitespace(text);
                (!collapsed.is_empty()).then_some(collapsed)
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

/// Parse a plain decimal literal such as `3`, `3.75` or `-0.5`.
///
/// Rust's `f64::from_str` also accepts `inf`, `NaN` and exponents, none of
/// which appear as real cell values, so the accepted grammar is narrowed to
/// optional sign, digits, and an optional fractional part.
fn parse_decimal(text: &str) -> Option<f64> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Collapse every run of whitespace (spaces, tabs, `\n`, `\r`) into a single
/// space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
