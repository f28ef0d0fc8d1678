use proptest::prelude::*;

use sdt_core::models::{Criteria, ItemClass, Population, SimulationConfig, StrengthDistribution};
use sdt_simulation::{classify, classify_all, score, simulate_roc, RocCurve};

/// Strictly increasing finite thresholds, 0 to 8 of them.
fn arb_interior() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-5.0f64..5.0, 0..8).prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        v.dedup();
        v
    })
}

fn arb_distribution() -> impl Strategy<Value = StrengthDistribution> {
    prop_oneof![
        (-3.0f64..3.0).prop_map(StrengthDistribution::constant),
        (-3.0f64..3.0, 0.0f64..3.0).prop_map(|(m, s)| StrengthDistribution::normal(m, s)),
        (0.1f64..5.0).prop_map(StrengthDistribution::exponential),
    ]
}

proptest! {
    #[test]
    fn every_strength_lands_in_exactly_one_bin(
        interior in arb_interior(),
        strength in -1e6f64..1e6,
    ) {
        let criteria = Criteria::from_interior(&interior).unwrap();
        let bin = classify(strength, &criteria);
        prop_assert!((1..=criteria.num_bins()).contains(&bin));

        // The bin's interval contains the strength: [lower, upper).
        let bounds = criteria.bounds();
        prop_assert!(bounds[bin - 1] <= strength);
        prop_assert!(strength < bounds[bin]);
    }

    #[test]
    fn score_is_non_increasing(
        bins in prop::collection::vec(1usize..=6, 1..200),
    ) {
        let s = score(&bins, 6).unwrap();
        prop_assert_eq!(s.len(), 6);
        prop_assert!(s.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(s.iter().all(|r| (0.0..=1.0).contains(r)));
        prop_assert_eq!(s[5], 0.0);
    }

    #[test]
    fn roc_is_monotonic_and_bounded(
        interior in arb_interior(),
        foil in arb_distribution(),
        initial in arb_distribution(),
        increment in arb_distribution(),
        population_size in 1usize..300,
        seed in any::<u64>(),
    ) {
        let mut criteria = vec![f64::NEG_INFINITY];
        criteria.extend(&interior);
        criteria.push(f64::INFINITY);
        let config = SimulationConfig {
            population_size,
            foil,
            target_initial: initial,
            study_increment: increment,
            criteria,
            seed: Some(seed),
        };

        let roc = simulate_roc(&config).unwrap();
        prop_assert_eq!(roc.len(), interior.len() + 1);
        for w in roc.windows(2) {
            prop_assert!(w[0].false_alarm_rate >= w[1].false_alarm_rate);
            prop_assert!(w[0].hit_rate >= w[1].hit_rate);
        }
        for p in &roc {
            prop_assert!((0.0..=1.0).contains(&p.false_alarm_rate));
            prop_assert!((0.0..=1.0).contains(&p.hit_rate));
        }
    }

    #[test]
    fn shifted_copy_never_falls_below_diagonal(
        interior in arb_interior(),
        strengths in prop::collection::vec(-4.0f64..4.0, 1..100),
        shift in 0.0f64..3.0,
    ) {
        // Targets are the foils moved up by a non-negative shift, trial for trial.
        let criteria = Criteria::from_interior(&interior).unwrap();
        let foils = Population::new(ItemClass::Foil, strengths.clone()).unwrap();
        let targets = Population::new(
            ItemClass::Target,
            strengths.iter().map(|s| s + shift).collect(),
        ).unwrap();

        let curve = RocCurve::from_bins(
            &classify_all(&foils, &criteria),
            &classify_all(&targets, &criteria),
            criteria.num_bins(),
        ).unwrap();
        prop_assert!(curve.above_diagonal());
        prop_assert!(curve.area_under_curve() >= 0.5 - 1e-12);
    }
}
