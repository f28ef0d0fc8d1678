//! Configuration system.
//! TOML-based, 4-layer resolution: CLI > env > project file > defaults.

pub mod output_config;
pub mod sdt_config;
pub mod simulation_section;

pub use output_config::OutputConfig;
pub use sdt_config::{CliOverrides, SdtConfig};
pub use simulation_section::SimulationSection;
