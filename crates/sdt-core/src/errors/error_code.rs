//! Stable error codes for callers that report failures outside Rust.

/// Maps an error to a stable, machine-readable code string.
pub trait SdtErrorCode {
    /// Returns the error code (e.g., "INVALID_CRITERIA").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_CRITERIA: &str = "INVALID_CRITERIA";
pub const INVALID_SAMPLE_COUNT: &str = "INVALID_SAMPLE_COUNT";
pub const INVALID_DISTRIBUTION_PARAMETERS: &str = "INVALID_DISTRIBUTION_PARAMETERS";
pub const NON_FINITE_STRENGTH: &str = "NON_FINITE_STRENGTH";
pub const INVALID_RATE: &str = "INVALID_RATE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
