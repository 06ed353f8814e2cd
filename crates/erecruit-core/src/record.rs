//! The consolidated per-applicant output row.

use crate::aggregate::AcademicSummary;
use crate::applicant::ApplicantInfo;
use crate::gpa::Gpa;

/// Output column headers, in order.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Publications_National",
    "Publications_International",
    "Submission #",
    "Graduation GPA",
    "Postgraduation GPA",
    "Affiliations",
];

/// Separator placed between affiliation groups in a flat text cell.
pub const AFFILIATION_SEPARATOR: &str = "; ";

/// One applicant, combining text-derived and table-derived fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicantRecord {
    #[cfg_attr(feature = "serde", serde(rename = "Name"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Publications_National"))]
    pub publications_national: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Publications_International"))]
    pub publications_international: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Submission #"))]
    pub submission: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "Graduation GPA"))]
    pub graduation_gpa: Option<Gpa>,
    #[cfg_attr(feature = "serde", serde(rename = "Postgraduation GPA"))]
    pub postgraduation_gpa: Option<Gpa>,
    #[cfg_attr(feature = "serde", serde(rename = "Affiliations"))]
    pub affiliations: Vec<String>,
}

impl ApplicantRecord {
    /// Combine the two halves of a record field by field.
    pub fn new(info: ApplicantInfo, summary: AcademicSummary) -> Self {
        let ApplicantInfo {
            name,
            publications_national,
            publications_international,
            submission,
        } = info;
        let AcademicSummary {
            graduation_gpa,
            postgraduation_gpa,
            affiliations,
        } = summary;

        Self {
            name,
            publications_national,
            publications_international,
            submission,
            graduation_gpa,
            postgraduation_gpa,
            affiliations,
        }
    }

    /// The record as text cells aligned with [`COLUMNS`]; missing values are
    /// empty strings.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.name.clone().unwrap_or_default(),
            self.publications_national.to_string(),
            self.publications_international.to_string(),
            self.submission.clone().unwrap_or_default(),
            gpa_cell(self.graduation_gpa),
            gpa_cell(self.postgraduation_gpa),
            self.affiliations.join(AFFILIATION_SEPARATOR),
        ]
    }
}

fn gpa_cell(gpa: Option<Gpa>) -> String {
    gpa.map(|g| g.to_string()).unwrap_or_default()
}
