//! Output configuration.

use serde::{Deserialize, Serialize};

/// How results are written by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON. Default: false.
    pub pretty: Option<bool>,
    /// Include per-bin response counts in the report. Default: false.
    pub include_counts: Option<bool>,
}

impl OutputConfig {
    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }

    pub fn effective_include_counts(&self) -> bool {
        self.include_counts.unwrap_or(false)
    }
}
