//! Error handling for the simulator.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod sdt_error;

pub use config_error::ConfigError;
pub use error_code::SdtErrorCode;
pub use sdt_error::{SdtError, SdtResult};
