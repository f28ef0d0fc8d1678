/// Number of simulated items per population when nothing else is configured.
pub const DEFAULT_POPULATION_SIZE: usize = 1000;

/// Finite decision criteria of the running six-point confidence scale.
/// The infinite end bounds are added by `Criteria::from_interior`.
pub const DEFAULT_INTERIOR_CRITERIA: [f64; 5] = [-0.5, 0.0, 0.5, 1.0, 1.5];

/// Mean of the default study increment added to target strengths.
pub const DEFAULT_STUDY_INCREMENT_MEAN: f64 = 1.0;

/// Standard deviation of the default study increment.
pub const DEFAULT_STUDY_INCREMENT_STD: f64 = 0.5;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "sdt.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "SDT_LOG";
