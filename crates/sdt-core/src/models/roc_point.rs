use serde::{Deserialize, Serialize};

/// One operating point of an ROC curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// Proportion of foils responded to at or above the level (x).
    pub false_alarm_rate: f64,
    /// Proportion of targets responded to at or above the level (y).
    pub hit_rate: f64,
}

impl RocPoint {
    pub fn new(false_alarm_rate: f64, hit_rate: f64) -> Self {
        Self {
            false_alarm_rate,
            hit_rate,
        }
    }

    /// True when the point lies on or above the chance diagonal.
    pub fn is_above_diagonal(&self) -> bool {
        self.hit_rate >= self.false_alarm_rate
    }
}

impl From<(f64, f64)> for RocPoint {
    fn from((false_alarm_rate, hit_rate): (f64, f64)) -> Self {
        Self::new(false_alarm_rate, hit_rate)
    }
}
