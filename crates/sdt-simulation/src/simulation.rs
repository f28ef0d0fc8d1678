//! End-to-end simulation runs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, info_span};

use sdt_core::errors::SdtResult;
use sdt_core::models::{Criteria, Population, RocPoint, SimulationConfig};

use crate::classify::{classify_all, response_counts};
use crate::distributions::{generate_foils, generate_targets};
use crate::roc::RocCurve;

/// A population with its response bins and per-bin counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPopulation {
    pub population: Population,
    pub bins: Vec<usize>,
    /// Responses per bin; index 0 holds bin 1.
    pub counts: Vec<usize>,
}

impl ScoredPopulation {
    fn score(population: Population, criteria: &Criteria) -> Self {
        let bins = classify_all(&population, criteria);
        let counts = response_counts(&bins, criteria.num_bins());
        Self {
            population,
            bins,
            counts,
        }
    }
}

/// Everything a single run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRun {
    pub criteria: Criteria,
    /// Seed actually used, so unseeded runs can be replayed.
    pub seed: u64,
    pub foils: ScoredPopulation,
    pub targets: ScoredPopulation,
    pub roc: RocCurve,
}

/// Run one simulation and keep every intermediate result.
///
/// All configuration errors surface before the first sample is drawn.
/// Draw order from the single seeded generator: foils, target initial
/// strengths, study increments.
pub fn run_simulation(config: &SimulationConfig) -> SdtResult<SimulationRun> {
    let criteria = config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let n = config.population_size;

    let span = info_span!(
        "sdt.simulation",
        population_size = n,
        num_bins = criteria.num_bins(),
        seed
    );
    let _guard = span.enter();

    let mut rng = StdRng::seed_from_u64(seed);
    let foils = generate_foils(n, &config.foil, &mut rng)?;
    let targets = generate_targets(n, &config.target_initial, &config.study_increment, &mut rng)?;
    debug!(
        foil_mean = foils.mean(),
        target_mean = targets.mean(),
        "strengths sampled"
    );

    let foils = ScoredPopulation::score(foils, &criteria);
    let targets = ScoredPopulation::score(targets, &criteria);
    debug!(foil_counts = ?foils.counts, target_counts = ?targets.counts, "responses classified");

    let roc = RocCurve::from_bins(&foils.bins, &targets.bins, criteria.num_bins())?;
    info!(
        points = roc.len(),
        auc = roc.area_under_curve(),
        "simulation complete"
    );

    Ok(SimulationRun {
        criteria,
        seed,
        foils,
        targets,
        roc,
    })
}

/// Simulate one recognition test and return its ROC points, one per
/// confidence level in increasing level order.
pub fn simulate_roc(config: &SimulationConfig) -> SdtResult<Vec<RocPoint>> {
    Ok(run_simulation(config)?.roc.into_points())
}
