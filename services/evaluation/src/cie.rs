//! CIE computation engine.
//!
//! Scheme weights per subject category:
//!   theory (incl. elective, ability-enhancement, human-values, other):
//!       avg(IA tests)/50 scaled to 30, plus CCE /20, capped at 50
//!   theory+lab: avg(IA tests)/50 scaled to 20, plus CCE /10, lab record /12,
//!       avg(lab tests)/100 scaled to 8, capped at 50
//!   pure lab: lab record /30 plus lab test /100 scaled to 20, capped at 50
//!   mandatory: one direct mark, capped at 100, never detained
//!
//! Tests are averaged over present values only; absent additive terms
//! contribute zero. Raw marks above a component's declared maximum are
//! passed through unchanged; the final cap still bounds the result.

use academe_models::{CieResult, RawComponentMarks, SubjectCategory};
use tracing::debug;

/// CIE below this value on the 50-point scale blocks exam eligibility.
pub const DETENTION_FLOOR: f64 = 20.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Detention check on an already-computed final CIE.
pub fn is_detained(final_cie: Option<f64>, category: SubjectCategory) -> bool {
    if category.is_mandatory() {
        return false;
    }
    match final_cie {
        Some(value) => value < DETENTION_FLOOR,
        None => false,
    }
}

/// Computes scaled sub-scores and the final CIE for one subject.
pub fn compute_cie(category: SubjectCategory, marks: &RawComponentMarks) -> CieResult {
    let mut ia_scaled = None;
    let mut lab_test_scaled = None;

    let final_cie = match category {
        SubjectCategory::Theory
        | SubjectCategory::ElectiveScience
        | SubjectCategory::AbilityEnhancement
        | SubjectCategory::HumanValues
        | SubjectCategory::Other => {
            ia_scaled = average(&[marks.ia_test1, marks.ia_test2])
                .map(|avg| round2(avg * 30.0 / 50.0));
            let total = ia_scaled.unwrap_or(0.0) + marks.cce.unwrap_or(0.0);
            Some(round2(total.min(50.0)))
        }
        SubjectCategory::TheoryLab => {
            ia_scaled = average(&[marks.ia_test1, marks.ia_test2])
                .map(|avg| round2(avg * 20.0 / 50.0));
            lab_test_scaled = average(&[marks.lab_test1, marks.lab_test2])
                .map(|avg| round2(avg * 8.0 / 100.0));
            let total = ia_scaled.unwrap_or(0.0)
                + marks.cce.unwrap_or(0.0)
                + marks.lab_record.unwrap_or(0.0)
                + lab_test_scaled.unwrap_or(0.0);
            Some(round2(total.min(50.0)))
        }
        SubjectCategory::PureLab => {
            lab_test_scaled = marks.lab_test1.map(|lt| round2(lt * 20.0 / 100.0));
            let total = marks.lab_record.unwrap_or(0.0) + lab_test_scaled.unwrap_or(0.0);
            Some(round2(total.min(50.0)))
        }
        SubjectCategory::Mandatory => marks.direct_cie.map(|d| round2(d.min(100.0))),
    };

    let detained = is_detained(final_cie, category);
    debug!(
        "computed CIE for {:?}: final={:?} detained={}",
        category, final_cie, detained
    );
    CieResult::new(ia_scaled, lab_test_scaled, final_cie, detained)
}
