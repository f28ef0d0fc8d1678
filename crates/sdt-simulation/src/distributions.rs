//! Strength generation for foil and target populations.
//!
//! Foils are drawn from a base distribution. Targets are a draw from their
//! pre-study distribution plus an independent study increment.

use rand::RngCore;
use tracing::debug;

use sdt_core::errors::{SdtError, SdtResult};
use sdt_core::models::{ItemClass, Population, StrengthDistribution};
use sdt_core::traits::IStrengthDistribution;

/// Draw `count` strengths from any distribution.
pub fn generate(
    count: usize,
    distribution: &dyn IStrengthDistribution,
    rng: &mut dyn RngCore,
) -> SdtResult<Vec<f64>> {
    if count == 0 {
        return Err(SdtError::sample_count(count));
    }
    distribution.validate()?;
    distribution.sample_with(count, rng)
}

/// Draw a foil population.
pub fn generate_foils(
    count: usize,
    foil: &dyn IStrengthDistribution,
    rng: &mut dyn RngCore,
) -> SdtResult<Population> {
    let strengths = generate(count, foil, rng)?;
    debug!(count, "foil strengths generated");
    Population::new(ItemClass::Foil, strengths)
}

/// Draw a target population: initial strength plus study increment.
pub fn generate_targets(
    count: usize,
    initial: &dyn IStrengthDistribution,
    increment: &dyn IStrengthDistribution,
    rng: &mut dyn RngCore,
) -> SdtResult<Population> {
    let strengths = StudiedTargets { initial, increment }.draw(count, rng)?;
    debug!(count, "target strengths generated");
    Population::new(ItemClass::Target, strengths)
}

/// Target strengths as a distribution in their own right:
/// `initial + increment`, each drawn independently.
///
/// All initial strengths are drawn before any increment, so a constant
/// increment reproduces the same initial draws as a bare `initial`.
pub struct StudiedTargets<'a> {
    pub initial: &'a dyn IStrengthDistribution,
    pub increment: &'a dyn IStrengthDistribution,
}

impl StudiedTargets<'_> {
    fn draw(&self, count: usize, rng: &mut dyn RngCore) -> SdtResult<Vec<f64>> {
        let mut strengths = generate(count, self.initial, rng)?;
        let increments = generate(count, self.increment, rng)?;
        for (s, inc) in strengths.iter_mut().zip(increments) {
            *s += inc;
        }
        Ok(strengths)
    }
}

impl IStrengthDistribution for StudiedTargets<'_> {
    fn validate(&self) -> SdtResult<()> {
        self.initial.validate()?;
        self.increment.validate()
    }

    fn sample_with(&self, count: usize, rng: &mut dyn RngCore) -> SdtResult<Vec<f64>> {
        self.draw(count, rng)
    }
}

/// Mean and variance of `initial + increment` when both are known
/// parametric distributions.
pub(crate) fn studied_moments(
    initial: &StrengthDistribution,
    increment: &StrengthDistribution,
) -> (f64, f64) {
    (
        initial.mean() + increment.mean(),
        initial.variance() + increment.variance(),
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn fixed_scalar_strengths() {
        let mut rng = StdRng::seed_from_u64(0);
        let foils = generate_foils(3, &StrengthDistribution::constant(0.25), &mut rng).unwrap();
        assert_eq!(foils.strengths, vec![0.25; 3]);
        assert_eq!(foils.class, ItemClass::Foil);
    }

    #[test]
    fn constant_increment_shifts_targets() {
        let initial = StrengthDistribution::normal(0.0, 1.0);
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let bare = generate(50, &initial, &mut a).unwrap();
        let studied = generate_targets(
            50,
            &initial,
            &StrengthDistribution::constant(1.5),
            &mut b,
        )
        .unwrap();
        for (x, y) in bare.iter().zip(&studied.strengths) {
            assert!((y - x - 1.5).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_count_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(0, &StrengthDistribution::default(), &mut rng),
            Err(SdtError::InvalidSampleCount { count: 0 })
        ));
    }

    #[test]
    fn studied_targets_is_a_distribution() {
        let initial = StrengthDistribution::constant(1.0);
        let increment = StrengthDistribution::constant(2.0);
        let targets = StudiedTargets {
            initial: &initial,
            increment: &increment,
        };
        assert_eq!(targets.sample(2, 1).unwrap(), vec![3.0, 3.0]);
    }

    #[test]
    fn exponential_increment_only_raises_strength() {
        let initial = StrengthDistribution::normal(0.0, 1.0);
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let bare = generate(100, &initial, &mut a).unwrap();
        let studied = generate_targets(
            100,
            &initial,
            &StrengthDistribution::exponential(1.0),
            &mut b,
        )
        .unwrap();
        assert!(bare.iter().zip(&studied.strengths).all(|(x, y)| y >= x));
    }
}
