//! `[simulation]` section of `sdt.toml`.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{SdtError, SdtResult};
use crate::models::{Criteria, SimulationConfig, StrengthDistribution};

/// File-level view of a simulation. Every field is optional so layers
/// can be merged; unset fields fall back to the compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationSection {
    /// Items per population. Signed so that negative values in a file are
    /// reported as a sample-count error rather than a parse error.
    pub population_size: Option<i64>,
    /// RNG seed. Unset means a fresh seed per run.
    pub seed: Option<u64>,
    /// Full boundary list; TOML spells the ends `-inf` and `inf`.
    pub criteria: Option<Vec<f64>>,
    pub foil: Option<StrengthDistribution>,
    pub target_initial: Option<StrengthDistribution>,
    pub study_increment: Option<StrengthDistribution>,
}

impl SimulationSection {
    /// Resolve the section into a runnable config, filling in defaults.
    ///
    /// Criteria are checked before the sample count, matching
    /// `SimulationConfig::validate`.
    pub fn to_simulation_config(&self) -> SdtResult<SimulationConfig> {
        let defaults = SimulationConfig::default();
        let criteria = self.criteria.clone().unwrap_or(defaults.criteria);
        Criteria::new(criteria.clone())?;
        let population_size = match self.population_size {
            None => constants::DEFAULT_POPULATION_SIZE,
            Some(n) if n <= 0 => return Err(SdtError::InvalidSampleCount { count: n }),
            Some(n) => usize::try_from(n).map_err(|_| SdtError::InvalidSampleCount { count: n })?,
        };
        Ok(SimulationConfig {
            population_size,
            foil: self.foil.unwrap_or(defaults.foil),
            target_initial: self.target_initial.unwrap_or(defaults.target_initial),
            study_increment: self.study_increment.unwrap_or(defaults.study_increment),
            criteria,
            seed: self.seed,
        })
    }

    /// Overlay every `Some` field of `other` onto `self`.
    pub(crate) fn merge(&mut self, other: &SimulationSection) {
        if other.population_size.is_some() {
            self.population_size = other.population_size;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.criteria.is_some() {
            self.criteria = other.criteria.clone();
        }
        if other.foil.is_some() {
            self.foil = other.foil;
        }
        if other.target_initial.is_some() {
            self.target_initial = other.target_initial;
        }
        if other.study_increment.is_some() {
            self.study_increment = other.study_increment;
        }
    }
}
