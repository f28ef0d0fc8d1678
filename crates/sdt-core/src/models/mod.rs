pub mod bounds_serde;
pub mod criteria;
pub mod distribution;
pub mod population;
pub mod roc_point;
pub mod simulation;

pub use criteria::Criteria;
pub use distribution::StrengthDistribution;
pub use population::{ItemClass, Population};
pub use roc_point::RocPoint;
pub use simulation::SimulationConfig;
