//! Subject category inference.
//!
//! Maps a course code, title, and optional explicit category hint to one
//! [`SubjectCategory`]. Rules run in a fixed priority order and the first
//! match wins: an explicit hint column is most trustworthy, code patterns
//! are syntactically constrained and next most reliable, title keywords are
//! the last resort before the theory default.

use academe_models::SubjectCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// Mandatory-course code shape, e.g. BRMCK357.
static MANDATORY_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^B.{2,4}K\d{3}$").unwrap());

/// Lab-suffix code shape, e.g. BCSL305.
static LAB_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,5}L\d{3}[A-Z]?$").unwrap());

const LAB_TITLE_KEYWORDS: [&str; 4] = ["LAB", "LABORATORY", "PRACTICAL", "WORKSHOP"];

/// Infers the subject category. Pure function: identical inputs always
/// yield the same category.
pub fn infer_category(code: &str, title: &str, type_hint: &str) -> SubjectCategory {
    let code = code.trim().to_uppercase();
    let hint = type_hint.trim().to_uppercase();
    let title = title.to_uppercase();

    // Explicit category hint from a PDF column
    if !hint.is_empty() {
        if hint.contains("IPCC") {
            return SubjectCategory::TheoryLab;
        }
        if hint.contains("PCCL") || hint.contains("LAB") {
            return SubjectCategory::PureLab;
        }
        if hint.contains("MC") || hint.contains("MANDATORY") {
            return SubjectCategory::Mandatory;
        }
        if hint.contains("ESC") {
            return SubjectCategory::ElectiveScience;
        }
        if hint.contains("AEC") {
            return SubjectCategory::AbilityEnhancement;
        }
        if hint.contains("UHV") {
            return SubjectCategory::HumanValues;
        }
        if hint.contains("PCC") {
            return SubjectCategory::Theory;
        }
    }

    // Code patterns
    if MANDATORY_CODE_RE.is_match(&code) || code.contains("RMCK") {
        return SubjectCategory::Mandatory;
    }
    if code.contains("UHV") || code.contains("HVE") {
        return SubjectCategory::HumanValues;
    }
    if LAB_CODE_RE.is_match(&code) {
        return SubjectCategory::PureLab;
    }

    // Title keywords
    if LAB_TITLE_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return SubjectCategory::PureLab;
    }

    SubjectCategory::Theory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_overrides_code_and_title() {
        // Code would infer a pure lab, but the explicit hint wins.
        assert_eq!(
            infer_category("BCSL305", "Data Structures Laboratory", "IPCC"),
            SubjectCategory::TheoryLab
        );
        assert_eq!(infer_category("BCS301", "", "ESC"), SubjectCategory::ElectiveScience);
        assert_eq!(infer_category("BCS301", "", "AEC"), SubjectCategory::AbilityEnhancement);
        assert_eq!(infer_category("BCS301", "", "Mandatory"), SubjectCategory::Mandatory);
    }

    #[test]
    fn test_lab_suffix_code() {
        assert_eq!(
            infer_category("BCSL305", "Data Structures Laboratory", ""),
            SubjectCategory::PureLab
        );
        assert_eq!(infer_category("BCSL606A", "", ""), SubjectCategory::PureLab);
    }

    #[test]
    fn test_mandatory_code_patterns() {
        assert_eq!(infer_category("BRMCK357", "", ""), SubjectCategory::Mandatory);
        assert_eq!(infer_category("BNSK359", "", ""), SubjectCategory::Mandatory);
    }

    #[test]
    fn test_human_values_marker() {
        assert_eq!(infer_category("BUHK408", "Universal Human Values", ""), SubjectCategory::Mandatory);
        assert_eq!(infer_category("BSFHUHV258", "", ""), SubjectCategory::HumanValues);
    }

    #[test]
    fn test_title_keyword_fallback() {
        assert_eq!(
            infer_category("BXX301", "Engineering Workshop", ""),
            SubjectCategory::PureLab
        );
        assert_eq!(
            infer_category("BXX302", "Physics Practical Sessions", ""),
            SubjectCategory::PureLab
        );
    }

    #[test]
    fn test_theory_default() {
        assert_eq!(infer_category("BCS301", "Operating Systems", ""), SubjectCategory::Theory);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let a = infer_category("BCSL305", "Data Structures Laboratory", "");
        let b = infer_category("BCSL305", "Data Structures Laboratory", "");
        assert_eq!(a, b);
    }
}
