//! Applicant metadata from the free text of a submission.

use std::sync::LazyLock;

use regex::Regex;

/// `Name :` followed by the rest of the same line.
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name[ \t]*:[ \t]*(.*)").expect("valid name pattern"));

static PUBLICATIONS_NATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"No\. of Publication National\s*:\s*(\d+)").expect("valid publication pattern")
});

static PUBLICATIONS_INTERNATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"No\. of Publication International\s*:\s*(\d+)")
        .expect("valid publication pattern")
});

static SUBMISSION_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"erecruitment-submission-(\d+)\.pdf").expect("valid submission pattern")
});

/// Scalar fields read from the document text and file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicantInfo {
    /// Applicant name, from the first `Name :` label.
    pub name: Option<String>,
    /// National publication count; 0 when not stated.
    pub publications_national: u32,
    /// International publication count; 0 when not stated.
    pub publications_international: u32,
    /// Submission number taken from an `erecruitment-submission-<n>.pdf` file name.
    pub submission: Option<String>,
}

/// Parse applicant fields from the concatenated page text of one document.
///
/// Every field is extracted independently; a missing label never prevents
/// the others from being read.
pub fn parse_applicant(text: &str, file_name: &str) -> ApplicantInfo {
    ApplicantInfo {
        name: extract_name(text),
        publications_national: publication_count(&PUBLICATIONS_NATIONAL, text),
        publications_international: publication_count(&PUBLICATIONS_INTERNATIONAL, text),
        submission: submission_number(file_name),
    }
}

/// Remainder of the line after the first `Name :` label, trimmed.
pub fn extract_name(text: &str) -> Option<String> {
    let caps = NAME.captures(text)?;
    let name = caps[1].trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn publication_count(pattern: &Regex, text: &str) -> u32 {
    pattern
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Submission number embedded in a file name such as
/// `erecruitment-submission-482.pdf`.
pub fn submission_number(file_name: &str) -> Option<String> {
    SUBMISSION_FILE
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}
