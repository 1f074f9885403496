//! Subject domain models for the academic data engine.
//!
//! This module defines the subject category scheme, the normalized subject
//! record produced by PDF extraction, and the storage reconciliation key
//! used by the persistence collaborator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Course code grammar: 2-5 letters, optional lab suffix, 2-4 digits,
/// optional trailing alphanumerics (e.g. BCS301, BCSL305, BMATS201).
static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,5}L?\d{2,4}[A-Z0-9]{0,4}$").unwrap());

/// Subject category under the 2024 scheme. Each category carries its own
/// CIE formula and maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectCategory {
    /// Professional core theory (3+ credits).
    #[serde(rename = "pcc")]
    Theory,
    /// Integrated theory + lab (4 credits).
    #[serde(rename = "ipcc")]
    TheoryLab,
    /// Pure lab (1 credit).
    #[serde(rename = "pccl")]
    PureLab,
    /// Elective science course (theory-style CIE).
    #[serde(rename = "esc")]
    ElectiveScience,
    /// Ability enhancement course (theory-style CIE).
    #[serde(rename = "aec")]
    AbilityEnhancement,
    /// Mandatory course (0 credits, CIE /100 only, no end exam).
    #[serde(rename = "mc")]
    Mandatory,
    /// Universal human values course (theory-style CIE).
    #[serde(rename = "uhv")]
    HumanValues,
    /// Unclassified fallback (theory-style CIE).
    #[serde(rename = "other")]
    Other,
}

impl SubjectCategory {
    pub const ALL: [SubjectCategory; 8] = [
        SubjectCategory::Theory,
        SubjectCategory::TheoryLab,
        SubjectCategory::PureLab,
        SubjectCategory::ElectiveScience,
        SubjectCategory::AbilityEnhancement,
        SubjectCategory::Mandatory,
        SubjectCategory::HumanValues,
        SubjectCategory::Other,
    ];

    /// Scheme label as stored and exchanged with collaborators.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Theory => "pcc",
            Self::TheoryLab => "ipcc",
            Self::PureLab => "pccl",
            Self::ElectiveScience => "esc",
            Self::AbilityEnhancement => "aec",
            Self::Mandatory => "mc",
            Self::HumanValues => "uhv",
            Self::Other => "other",
        }
    }

    /// Parses a scheme label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Maximum attainable CIE score for this category.
    pub fn cie_max(&self) -> f64 {
        match self {
            Self::Mandatory => 100.0,
            _ => 50.0,
        }
    }

    /// Maximum reduced SEE score. Mandatory courses have no end exam.
    pub fn see_max(&self) -> f64 {
        match self {
            Self::Mandatory => 0.0,
            _ => 50.0,
        }
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Mandatory)
    }
}

impl Default for SubjectCategory {
    fn default() -> Self {
        Self::Theory
    }
}

/// Normalized subject record emitted by PDF extraction.
///
/// Created fresh per extraction run and never mutated in place; the storage
/// collaborator reconciles a new set against stored rows via [`SubjectKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SubjectRecord {
    #[validate(custom = "validate_course_code")]
    pub code: String,
    #[validate(length(min = 4, max = 120, message = "Subject title must be 4-120 characters"))]
    pub title: String,
    pub category: SubjectCategory,
    #[validate(range(min = 0.0, message = "Credit weight must be non-negative"))]
    pub credit_weight: f64,
    /// Weekly contact hours as printed (e.g. "3-0-2"), when a column exists.
    pub contact_hours: Option<String>,
    pub is_mandatory: bool,
}

/// Reconciliation key for the storage collaborator: subjects are unique per
/// `(semester_id, code)` and re-extraction upserts against this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectKey {
    pub semester_id: Uuid,
    pub code: String,
}

fn validate_course_code(code: &str) -> Result<(), ValidationError> {
    if !SubjectRecord::is_valid_code(code) {
        return Err(ValidationError::new("invalid_course_code"));
    }
    Ok(())
}

impl SubjectRecord {
    /// Builds a record from raw extracted cells, applying code and title
    /// normalization. The mandatory flag follows the inferred category.
    pub fn from_extracted_row(
        code: &str,
        title: &str,
        category: SubjectCategory,
        credit_weight: f64,
        contact_hours: Option<String>,
    ) -> Self {
        Self {
            code: Self::normalize_code(code),
            title: title.trim().to_string(),
            category,
            credit_weight,
            contact_hours: contact_hours.filter(|h| !h.trim().is_empty()),
            is_mandatory: category.is_mandatory(),
        }
    }

    /// Strips all whitespace and uppercases a course code.
    pub fn normalize_code(code: &str) -> String {
        code.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase()
    }

    /// Checks the course code grammar.
    pub fn is_valid_code(code: &str) -> bool {
        COURSE_CODE_RE.is_match(code)
    }

    /// A zero-credit row outside the mandatory category is most likely a
    /// mis-parsed header and must be surfaced to the caller, not kept
    /// silently. Mandatory courses legitimately carry 0 credits.
    pub fn is_suspect_zero_credit(&self) -> bool {
        self.credit_weight <= 0.0 && !self.is_mandatory
    }

    /// Key under which the storage collaborator reconciles this record.
    pub fn key(&self, semester_id: Uuid) -> SubjectKey {
        SubjectKey {
            semester_id,
            code: self.code.clone(),
        }
    }
}

/// Per-subject module/topic block parsed from detailed syllabus pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusModule {
    /// Sequence number parsed from the "Module N" / "Unit N" heading.
    pub module_number: u32,
    pub title: String,
    pub topics: String,
    /// Populated only on module 1; empty elsewhere.
    pub learning_objectives: String,
}

impl SyllabusModule {
    pub fn has_objectives(&self) -> bool {
        !self.learning_objectives.is_empty()
    }
}
