use rand::RngCore;
use rand_distr::{Distribution, Exp, Normal};
use serde::{Deserialize, Serialize};

use crate::errors::{SdtError, SdtResult};
use crate::traits::IStrengthDistribution;

/// Parametric strength distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrengthDistribution {
    /// Degenerate distribution: every sample equals `value`.
    Constant { value: f64 },
    /// Gaussian with the given mean and standard deviation (`std >= 0`).
    Normal { mean: f64, std: f64 },
    /// Exponential with the given rate (`rate > 0`, mean `1 / rate`).
    Exponential { rate: f64 },
}

impl StrengthDistribution {
    pub fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    pub fn normal(mean: f64, std: f64) -> Self {
        Self::Normal { mean, std }
    }

    pub fn exponential(rate: f64) -> Self {
        Self::Exponential { rate }
    }

    /// Expected value of a sample.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Constant { value } => value,
            Self::Normal { mean, .. } => mean,
            Self::Exponential { rate } => 1.0 / rate,
        }
    }

    /// Variance of a sample.
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Constant { .. } => 0.0,
            Self::Normal { std, .. } => std * std,
            Self::Exponential { rate } => 1.0 / (rate * rate),
        }
    }

    /// True for distributions with a Gaussian (or degenerate) shape.
    pub fn is_gaussian(&self) -> bool {
        matches!(self, Self::Constant { .. } | Self::Normal { .. })
    }
}

impl Default for StrengthDistribution {
    /// Standard normal, the usual foil distribution.
    fn default() -> Self {
        Self::Normal {
            mean: 0.0,
            std: 1.0,
        }
    }
}

impl IStrengthDistribution for StrengthDistribution {
    fn validate(&self) -> SdtResult<()> {
        match *self {
            Self::Constant { value } if !value.is_finite() => Err(SdtError::distribution(
                format!("constant value must be finite, got {value}"),
            )),
            Self::Normal { mean, .. } if !mean.is_finite() => Err(SdtError::distribution(
                format!("normal mean must be finite, got {mean}"),
            )),
            Self::Normal { std, .. } if !(std.is_finite() && std >= 0.0) => Err(
                SdtError::distribution(format!(
                    "normal standard deviation must be finite and >= 0, got {std}"
                )),
            ),
            Self::Exponential { rate } if !(rate.is_finite() && rate > 0.0) => Err(
                SdtError::distribution(format!(
                    "exponential rate must be finite and > 0, got {rate}"
                )),
            ),
            _ => Ok(()),
        }
    }

    fn sample_with(&self, count: usize, rng: &mut dyn RngCore) -> SdtResult<Vec<f64>> {
        if count == 0 {
            return Err(SdtError::sample_count(count));
        }
        self.validate()?;
        match *self {
            Self::Constant { value } => Ok(vec![value; count]),
            Self::Normal { mean, std } => {
                let normal = Normal::new(mean, std)
                    .map_err(|e| SdtError::distribution(e.to_string()))?;
                Ok(normal.sample_iter(rng).take(count).collect())
            }
            Self::Exponential { rate } => {
                let exp = Exp::new(rate).map_err(|e| SdtError::distribution(e.to_string()))?;
                Ok(exp.sample_iter(rng).take(count).collect())
            }
        }
    }
}
