use anyhow::Result;
use serde::Serialize;

use sdt_core::models::{RocPoint, SimulationConfig};
use sdt_simulation::{d_prime, theoretical_roc, zroc_fit, SimulationRun, ZRocFit};

/// JSON document printed by `sdt-roc`.
#[derive(Debug, Serialize)]
pub struct RocReport {
    pub seed: u64,
    pub population_size: usize,
    /// Finite criteria only; JSON has no infinities.
    pub criteria: Vec<f64>,
    pub points: Vec<RocPoint>,
    pub auc: f64,
    /// d' at the middle criterion, absent when a rate there is 0 or 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d_prime: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zroc: Option<ZRocFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<ResponseCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theoretical: Option<Vec<RocPoint>>,
}

#[derive(Debug, Serialize)]
pub struct ResponseCounts {
    pub foils: Vec<usize>,
    pub targets: Vec<usize>,
}

impl RocReport {
    pub fn build(
        config: &SimulationConfig,
        run: &SimulationRun,
        include_counts: bool,
        include_theoretical: bool,
    ) -> Result<Self> {
        let interior = run.criteria.interior().to_vec();
        let points = run.roc.points().to_vec();

        let sensitivity = points
            .get(interior.len() / 2)
            .and_then(|p| d_prime(p.hit_rate, p.false_alarm_rate).ok());

        let counts = include_counts.then(|| ResponseCounts {
            foils: run.foils.counts.clone(),
            targets: run.targets.counts.clone(),
        });

        let theoretical = if include_theoretical {
            Some(theoretical_roc(config)?)
        } else {
            None
        };

        Ok(Self {
            seed: run.seed,
            population_size: config.population_size,
            criteria: interior,
            auc: run.roc.area_under_curve(),
            d_prime: sensitivity,
            zroc: zroc_fit(&run.roc)?,
            counts,
            theoretical,
            points,
        })
    }
}
