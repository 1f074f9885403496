//! Continuous internal evaluation (CIE) records.
//!
//! Raw component marks are entered per subject; scaled sub-scores and the
//! final CIE are pure derived values recomputed whenever any component
//! changes, never edited independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw component marks for one subject. A `None` component is absent, not
/// zero: absent tests are excluded from averages, while absent additive
/// terms contribute nothing to the final sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct RawComponentMarks {
    /// Internal assessment test 1, out of 50.
    #[validate(range(min = 0.0))]
    pub ia_test1: Option<f64>,
    /// Internal assessment test 2, out of 50.
    #[validate(range(min = 0.0))]
    pub ia_test2: Option<f64>,
    /// Continuous comprehensive evaluation: /20 theory, /10 theory+lab.
    #[validate(range(min = 0.0))]
    pub cce: Option<f64>,
    /// Lab record: /12 theory+lab, /30 pure lab.
    #[validate(range(min = 0.0))]
    pub lab_record: Option<f64>,
    /// Lab test 1, out of 100.
    #[validate(range(min = 0.0))]
    pub lab_test1: Option<f64>,
    /// Lab test 2, out of 100 (theory+lab only).
    #[validate(range(min = 0.0))]
    pub lab_test2: Option<f64>,
    /// Direct CIE mark out of 100 (mandatory courses only).
    #[validate(range(min = 0.0))]
    pub direct_cie: Option<f64>,
}

impl RawComponentMarks {
    pub fn is_empty(&self) -> bool {
        self.ia_test1.is_none()
            && self.ia_test2.is_none()
            && self.cce.is_none()
            && self.lab_record.is_none()
            && self.lab_test1.is_none()
            && self.lab_test2.is_none()
            && self.direct_cie.is_none()
    }
}

/// Computed CIE outcome for one subject.
///
/// Invariant: `final_cie`, when present, lies in `[0, category.cie_max()]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CieResult {
    /// Scaled internal-assessment average (/30 theory, /20 theory+lab).
    pub ia_scaled: Option<f64>,
    /// Scaled lab-test average (/8 theory+lab, /20 pure lab).
    pub lab_test_scaled: Option<f64>,
    pub final_cie: Option<f64>,
    /// Exam-eligibility block: CIE below the floor on the 50-point scale.
    pub is_detained: bool,
    pub computed_at: DateTime<Utc>,
}

impl CieResult {
    pub fn new(
        ia_scaled: Option<f64>,
        lab_test_scaled: Option<f64>,
        final_cie: Option<f64>,
        is_detained: bool,
    ) -> Self {
        Self {
            ia_scaled,
            lab_test_scaled,
            final_cie,
            is_detained,
            computed_at: Utc::now(),
        }
    }
}

/// Semester-end exam mark: written /100, reduced to /50 by halving.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeeMark {
    pub raw_scored: Option<f64>,
    pub reduced_scored: Option<f64>,
    pub is_absent: bool,
}
