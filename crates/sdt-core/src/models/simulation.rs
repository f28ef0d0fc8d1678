use serde::{Deserialize, Serialize};

use super::{Criteria, StrengthDistribution};
use crate::constants;
use crate::errors::{SdtError, SdtResult};
use crate::traits::IStrengthDistribution;

/// Everything one simulation run needs. Replaces ad hoc script globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Items per population (targets and foils alike).
    pub population_size: usize,
    /// Foil strength distribution.
    pub foil: StrengthDistribution,
    /// Pre-study strength of targets.
    pub target_initial: StrengthDistribution,
    /// Strength added to each target by studying it.
    pub study_increment: StrengthDistribution,
    /// Full boundary list, `-inf` first and `+inf` last.
    #[serde(with = "super::bounds_serde")]
    pub criteria: Vec<f64>,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let mut criteria = vec![f64::NEG_INFINITY];
        criteria.extend_from_slice(&constants::DEFAULT_INTERIOR_CRITERIA);
        criteria.push(f64::INFINITY);
        Self {
            population_size: constants::DEFAULT_POPULATION_SIZE,
            foil: StrengthDistribution::default(),
            target_initial: StrengthDistribution::default(),
            study_increment: StrengthDistribution::normal(
                constants::DEFAULT_STUDY_INCREMENT_MEAN,
                constants::DEFAULT_STUDY_INCREMENT_STD,
            ),
            criteria,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validate in the order criteria, sample count, distributions.
    ///
    /// Returns the checked criteria so callers never re-validate.
    pub fn validate(&self) -> SdtResult<Criteria> {
        let criteria = Criteria::new(self.criteria.clone())?;
        if self.population_size == 0 {
            return Err(SdtError::sample_count(self.population_size));
        }
        self.foil.validate()?;
        self.target_initial.validate()?;
        self.study_increment.validate()?;
        Ok(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_bounds() {
        let config = SimulationConfig {
            seed: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""criteria":["-inf",-0.5,0.0,0.5,1.0,1.5,"inf"]"#));
        assert!(!json.contains("null"));
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn default_config_is_valid() {
        let criteria = SimulationConfig::default().validate().unwrap();
        assert_eq!(criteria.num_bins(), 6);
    }

    #[test]
    fn criteria_are_checked_before_sample_count() {
        let config = SimulationConfig {
            population_size: 0,
            criteria: vec![0.0, 1.0],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SdtError::InvalidCriteria { .. })
        ));
    }

    #[test]
    fn sample_count_is_checked_before_distributions() {
        let config = SimulationConfig {
            population_size: 0,
            foil: StrengthDistribution::normal(0.0, -1.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SdtError::InvalidSampleCount { count: 0 })
        ));
    }
}
