use super::error_code::{self, SdtErrorCode};
use super::ConfigError;

/// Top-level error for the simulator.
///
/// Every variant is detected before any sampling happens, so an error
/// never comes with partial results.
#[derive(Debug, thiserror::Error)]
pub enum SdtError {
    #[error("invalid criteria: {reason}")]
    InvalidCriteria { reason: String },

    #[error("invalid sample count {count}: must be a positive integer")]
    InvalidSampleCount { count: i64 },

    #[error("invalid distribution parameters: {reason}")]
    InvalidDistributionParameters { reason: String },

    #[error("non-finite strength {value} at index {index}")]
    NonFiniteStrength { index: usize, value: f64 },

    #[error("invalid {name} {value}: must lie strictly between 0 and 1")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type SdtResult<T> = Result<T, SdtError>;

impl SdtError {
    pub(crate) fn criteria(reason: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            reason: reason.into(),
        }
    }

    pub(crate) fn distribution(reason: impl Into<String>) -> Self {
        Self::InvalidDistributionParameters {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidSampleCount` from an unsigned count.
    pub fn sample_count(count: usize) -> Self {
        Self::InvalidSampleCount {
            count: i64::try_from(count).unwrap_or(i64::MAX),
        }
    }
}

impl SdtErrorCode for SdtError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCriteria { .. } => error_code::INVALID_CRITERIA,
            Self::InvalidSampleCount { .. } => error_code::INVALID_SAMPLE_COUNT,
            Self::InvalidDistributionParameters { .. } => {
                error_code::INVALID_DISTRIBUTION_PARAMETERS
            }
            Self::NonFiniteStrength { .. } => error_code::NON_FINITE_STRENGTH,
            Self::InvalidRate { .. } => error_code::INVALID_RATE,
            Self::Config(e) => e.error_code(),
        }
    }
}
