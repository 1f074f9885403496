//! Evaluation service.
//!
//! Pure scoring functions over the shared models: the category-dependent
//! CIE formula table, the detention rule, and SEE reduction. Results are
//! derived values; callers persist and recompute them whenever a raw
//! component changes.

pub mod cie;
pub mod see;

pub use cie::{compute_cie, is_detained, DETENTION_FLOOR};
pub use see::reduce_see;

#[cfg(test)]
mod property_tests {
    use super::*;
    use academe_models::{RawComponentMarks, SubjectCategory};
    use proptest::prelude::*;

    fn arb_category() -> impl Strategy<Value = SubjectCategory> {
        prop::sample::select(SubjectCategory::ALL.to_vec())
    }

    fn arb_mark(max: f64) -> impl Strategy<Value = Option<f64>> {
        prop::option::of(0.0..max)
    }

    proptest! {
        #[test]
        fn final_cie_never_exceeds_category_max(
            category in arb_category(),
            ia1 in arb_mark(50.0),
            ia2 in arb_mark(50.0),
            cce in arb_mark(20.0),
            lab_record in arb_mark(30.0),
            lab_test1 in arb_mark(100.0),
            lab_test2 in arb_mark(100.0),
            direct_cie in arb_mark(100.0),
        ) {
            let marks = RawComponentMarks {
                ia_test1: ia1,
                ia_test2: ia2,
                cce,
                lab_record,
                lab_test1,
                lab_test2,
                direct_cie,
            };
            let result = compute_cie(category, &marks);
            if let Some(final_cie) = result.final_cie {
                prop_assert!(final_cie >= 0.0);
                prop_assert!(final_cie <= category.cie_max());
            }
        }

        #[test]
        fn mandatory_subjects_are_never_detained(direct_cie in arb_mark(100.0)) {
            let marks = RawComponentMarks {
                direct_cie,
                ..Default::default()
            };
            let result = compute_cie(SubjectCategory::Mandatory, &marks);
            prop_assert!(!result.is_detained);
        }

        #[test]
        fn detention_tracks_the_floor(
            category in arb_category(),
            ia1 in arb_mark(50.0),
            ia2 in arb_mark(50.0),
            cce in arb_mark(20.0),
            lab_record in arb_mark(30.0),
            lab_test1 in arb_mark(100.0),
        ) {
            let marks = RawComponentMarks {
                ia_test1: ia1,
                ia_test2: ia2,
                cce,
                lab_record,
                lab_test1,
                ..Default::default()
            };
            let result = compute_cie(category, &marks);
            match (result.final_cie, category.is_mandatory()) {
                (_, true) => prop_assert!(!result.is_detained),
                (Some(f), false) => prop_assert_eq!(result.is_detained, f < DETENTION_FLOOR),
                (None, false) => prop_assert!(!result.is_detained),
            }
        }

        #[test]
        fn recomputation_is_deterministic(
            category in arb_category(),
            ia1 in arb_mark(50.0),
            cce in arb_mark(20.0),
            lab_record in arb_mark(30.0),
            lab_test1 in arb_mark(100.0),
            direct_cie in arb_mark(100.0),
        ) {
            let marks = RawComponentMarks {
                ia_test1: ia1,
                cce,
                lab_record,
                lab_test1,
                direct_cie,
                ..Default::default()
            };
            let first = compute_cie(category, &marks);
            let second = compute_cie(category, &marks);
            prop_assert_eq!(first.ia_scaled, second.ia_scaled);
            prop_assert_eq!(first.lab_test_scaled, second.lab_test_scaled);
            prop_assert_eq!(first.final_cie, second.final_cie);
            prop_assert_eq!(first.is_detained, second.is_detained);
        }

        #[test]
        fn reduced_see_is_half_of_raw(raw in 0.0f64..100.0) {
            let mark = reduce_see(Some(raw), false, SubjectCategory::Theory);
            let reduced = mark.reduced_scored.unwrap();
            prop_assert!((reduced - raw / 2.0).abs() < 0.005 + f64::EPSILON);
        }
    }
}
