use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::errors::{SdtError, SdtResult};

/// A source of memory-strength samples.
///
/// Implementations can be swapped (normal, exponential, composite) without
/// touching classification or scoring.
pub trait IStrengthDistribution: Send + Sync {
    /// Check that the parameters describe a well-defined distribution.
    fn validate(&self) -> SdtResult<()>;

    /// Draw `count` samples from a caller-owned generator.
    ///
    /// Several populations can share one seeded generator this way, which
    /// keeps a whole run reproducible from a single seed.
    fn sample_with(&self, count: usize, rng: &mut dyn RngCore) -> SdtResult<Vec<f64>>;

    /// Draw `count` samples from a fresh generator seeded with `seed`.
    fn sample(&self, count: usize, seed: u64) -> SdtResult<Vec<f64>> {
        if count == 0 {
            return Err(SdtError::sample_count(count));
        }
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample_with(count, &mut rng)
    }
}
