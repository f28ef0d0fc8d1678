use proptest::prelude::*;

use sdt_core::errors::SdtError;
use sdt_core::models::Criteria;

proptest! {
    #[test]
    fn sorted_distinct_interiors_are_accepted(
        raw in prop::collection::vec(-1e3f64..1e3, 0..16),
    ) {
        let mut interior = raw;
        interior.sort_by(f64::total_cmp);
        interior.dedup();
        let criteria = Criteria::from_interior(&interior).unwrap();
        prop_assert_eq!(criteria.num_bins(), interior.len() + 1);
        prop_assert_eq!(criteria.interior(), interior.as_slice());
    }

    #[test]
    fn repeated_threshold_is_rejected(
        value in -1e3f64..1e3,
        extra in prop::collection::vec(-1e3f64..1e3, 0..8),
    ) {
        let mut interior = extra;
        interior.push(value);
        interior.push(value);
        interior.sort_by(f64::total_cmp);
        let is_invalid_criteria = matches!(
            Criteria::from_interior(&interior),
            Err(SdtError::InvalidCriteria { .. })
        );
        prop_assert!(is_invalid_criteria);
    }
}
