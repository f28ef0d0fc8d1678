//! Parameter sweeps: many independent runs in parallel.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use sdt_core::errors::SdtResult;
use sdt_core::models::SimulationConfig;

use crate::roc::RocCurve;
use crate::simulation::run_simulation;

/// One run of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRun<P> {
    pub parameter: P,
    pub seed: u64,
    pub roc: RocCurve,
}

/// Run one simulation per value in `values`, each configured by applying
/// the value to a copy of `base`.
///
/// Run `i` is seeded with `base_seed + i` (wrapping), so a seeded sweep is
/// reproducible regardless of thread scheduling. Every derived config is
/// validated before any run starts; results come back in `values` order.
pub fn sweep<P, F>(base: &SimulationConfig, values: &[P], apply: F) -> SdtResult<Vec<SweepRun<P>>>
where
    P: Clone + Send + Sync,
    F: Fn(&mut SimulationConfig, &P),
{
    let base_seed = base.seed.unwrap_or_else(rand::random);

    let configs = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let mut config = base.clone();
            apply(&mut config, value);
            config.seed = Some(base_seed.wrapping_add(i as u64));
            config.validate()?;
            Ok(config)
        })
        .collect::<SdtResult<Vec<_>>>()?;

    info!(runs = configs.len(), base_seed, "starting sweep");

    configs
        .par_iter()
        .zip(values.par_iter())
        .map(|(config, value)| {
            let run = run_simulation(config)?;
            Ok(SweepRun {
                parameter: value.clone(),
                seed: run.seed,
                roc: run.roc,
            })
        })
        .collect()
}
