//! # sdt-simulation
//!
//! Signal-detection simulation of recognition memory: sample item strengths,
//! classify them against decision criteria, and score the classifications
//! into empirical ROC points.
//!
//! ```text
//! strengths ──classify──▶ response bins ──score──▶ 1 − ECDF ──pair──▶ ROC
//! ```

pub mod analysis;
pub mod classify;
pub mod distributions;
pub mod roc;
pub mod scoring;
pub mod simulation;
pub mod sweep;

pub use analysis::{criterion_c, d_prime, theoretical_roc, zroc_fit, ZRocFit};
pub use classify::{classify, classify_all, response_counts};
pub use distributions::{generate, generate_foils, generate_targets, StudiedTargets};
pub use roc::{build_roc, RocCurve};
pub use scoring::{cumulative_fractions, score};
pub use simulation::{run_simulation, simulate_roc, ScoredPopulation, SimulationRun};
pub use sweep::{sweep, SweepRun};
