//! Semester-end exam (SEE) reduction.
//!
//! The written exam is marked out of 100 and enters the grade sheet reduced
//! to 50 by halving. Mandatory courses carry no SEE component at all.

use academe_models::{SeeMark, SubjectCategory};

/// Builds the stored SEE mark from the raw written score. An absent
/// candidate keeps a record with no scores.
pub fn reduce_see(raw_scored: Option<f64>, is_absent: bool, category: SubjectCategory) -> SeeMark {
    if category.is_mandatory() || is_absent {
        return SeeMark {
            raw_scored: None,
            reduced_scored: None,
            is_absent,
        };
    }

    let reduced_scored = raw_scored.map(|raw| (raw / 2.0 * 100.0).round() / 100.0);
    SeeMark {
        raw_scored,
        reduced_scored,
        is_absent: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_written_score() {
        let mark = reduce_see(Some(76.0), false, SubjectCategory::Theory);
        assert_eq!(mark.raw_scored, Some(76.0));
        assert_eq!(mark.reduced_scored, Some(38.0));
        assert!(!mark.is_absent);
    }

    #[test]
    fn test_odd_score_keeps_half_point() {
        let mark = reduce_see(Some(77.0), false, SubjectCategory::Theory);
        assert_eq!(mark.reduced_scored, Some(38.5));
    }

    #[test]
    fn test_absent_candidate_has_no_scores() {
        let mark = reduce_see(Some(40.0), true, SubjectCategory::Theory);
        assert_eq!(mark.raw_scored, None);
        assert_eq!(mark.reduced_scored, None);
        assert!(mark.is_absent);
    }

    #[test]
    fn test_mandatory_has_no_see_component() {
        let mark = reduce_see(Some(40.0), false, SubjectCategory::Mandatory);
        assert_eq!(mark.raw_scored, None);
        assert_eq!(mark.reduced_scored, None);
    }
}
