//! Graduate/postgraduate summary of the academic-record table.

use std::collections::BTreeMap;
use std::fmt;

use crate::gpa::{Gpa, normalize_column};
use crate::table::RawTable;

/// Academic stage of a row in the academic-record table.
///
/// Variant order is the lexicographic order of the labels, which is the
/// order groups are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Graduation,
    Postgraduation,
}

impl Level {
    /// Match a Level cell exactly (after trimming surrounding whitespace).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Graduation" => Some(Level::Graduation),
            "Postgraduation" => Some(Level::Postgraduation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Graduation => "Graduation",
            Level::Postgraduation => "Postgraduation",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column labels of the academic-record table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcademicColumns {
    /// Label of the Level column (default: `Level`).
    pub level: String,
    /// Candidate labels of the institution column, first present wins
    /// (default: `Name of Institution`, `Institution Name`).
    pub institution: Vec<String>,
    /// Label of the Result column (default: `Result`).
    pub result: String,
}

impl Default for AcademicColumns {
    fn default() -> Self {
        Self {
            level: "Level".to_string(),
            institution: vec![
                "Name of Institution".to_string(),
                "Institution Name".to_string(),
            ],
            result: "Result".to_string(),
        }
    }
}

impl AcademicColumns {
    fn institution_in<'a>(&'a self, table: &RawTable) -> Option<&'a str> {
        self.institution
            .iter()
            .map(String::as_str)
            .find(|label| table.column_index(label).is_some())
    }
}

/// Aggregated academic fields of one applicant.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcademicSummary {
    /// Mean normalized GPA over Graduation rows.
    pub graduation_gpa: Option<Gpa>,
    /// Mean normalized GPA over Postgraduation rows.
    pub postgraduation_gpa: Option<Gpa>,
    /// Institution names per level group, in level order; names within a
    /// group are joined with `", "`.
    pub affiliations: Vec<String>,
}

#[derive(Default)]
struct LevelGroup {
    gpas: Vec<Gpa>,
    institutions: Vec<String>,
}

/// Summarize the academic-record table.
///
/// Rows whose Level is not `Graduation` or `Postgraduation` are dropped.
/// For each level present, GPAs are averaged over the rows whose Result
/// normalized successfully, and institution names are joined in row order.
pub fn aggregate(table: &RawTable, columns: &AcademicColumns) -> AcademicSummary {
    let Some(level_idx) = table.column_index(&columns.level) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(column = %columns.level, "academic table has no level column");
        return AcademicSummary::default();
    };
    let institution_idx = columns
        .institution_in(table)
        .and_then(|label| table.column_index(label));
    let results = normalize_column(table, &columns.result).unwrap_or_default();

    let mut groups: BTreeMap<Level, LevelGroup> = BTreeMap::new();

    for (row_idx, row) in table.rows().iter().enumerate() {
        let Some(level) = row[level_idx]
            .display_text()
            .and_then(|label| Level::from_label(&label))
        else {
            continue;
        };
        let group = groups.entry(level).or_default();

        if let Some(gpa) = results.get(row_idx).copied().flatten() {
            group.gpas.push(gpa);
        }
        if let Some(name) = institution_idx.and_then(|idx| row[idx].display_text()) {
            group.institutions.push(name);
        }
    }

    let mean_of = |level: Level| {
        groups
            .get(&level)
            .and_then(|g| Gpa::mean(g.gpas.iter().copied()))
    };

    AcademicSummary {
        graduation_gpa: mean_of(Level::Graduation),
        postgraduation_gpa: mean_of(Level::Postgraduation),
        affiliations: groups
            .values()
            .map(|g| g.institutions.join(", "))
            .collect(),
    }
}
