use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{SdtError, SdtResult};

/// Which side of the old/new judgement an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    /// Studied item.
    Target,
    /// Unstudied item.
    Foil,
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target => f.write_str("target"),
            Self::Foil => f.write_str("foil"),
        }
    }
}

/// Strength samples for one item class, in trial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub class: ItemClass,
    pub strengths: Vec<f64>,
}

impl Population {
    /// Create a population, rejecting empty or non-finite input.
    pub fn new(class: ItemClass, strengths: Vec<f64>) -> SdtResult<Self> {
        if strengths.is_empty() {
            return Err(SdtError::sample_count(0));
        }
        if let Some((index, &value)) = strengths.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(SdtError::NonFiniteStrength { index, value });
        }
        Ok(Self { class, strengths })
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    /// Sample mean of the strengths.
    pub fn mean(&self) -> f64 {
        self.strengths.iter().sum::<f64>() / self.strengths.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_population() {
        assert!(matches!(
            Population::new(ItemClass::Foil, vec![]),
            Err(SdtError::InvalidSampleCount { count: 0 })
        ));
    }

    #[test]
    fn rejects_non_finite_strength() {
        let err = Population::new(ItemClass::Target, vec![0.1, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, SdtError::NonFiniteStrength { index: 1, .. }));
    }

    #[test]
    fn mean_of_strengths() {
        let p = Population::new(ItemClass::Target, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p.len(), 3);
        assert!((p.mean() - 2.0).abs() < 1e-12);
    }
}
