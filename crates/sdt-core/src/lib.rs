//! # sdt-core
//!
//! Foundation crate for the SDT recognition-memory simulator.
//! Defines the value types, traits, errors, config, and tracing setup
//! shared by the simulation crate and the CLI.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::SdtConfig;
pub use errors::{ConfigError, SdtError, SdtErrorCode, SdtResult};
pub use models::{Criteria, ItemClass, Population, RocPoint, SimulationConfig, StrengthDistribution};
pub use traits::IStrengthDistribution;
