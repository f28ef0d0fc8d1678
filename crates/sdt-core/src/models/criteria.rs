use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::bounds_serde;
use crate::errors::{SdtError, SdtResult};

/// Ordered decision criteria on the strength axis.
///
/// Always strictly increasing, starting at `-inf` and ending at `+inf`,
/// so N boundaries partition the whole real line into N-1 response bins.
/// The only way to obtain a value is through validation, deserialization
/// included. Serialized as a list with the end bounds spelled `"-inf"` and
/// `"inf"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria(Vec<f64>);

impl Criteria {
    /// Validate a full boundary list, infinite end bounds included.
    pub fn new(bounds: Vec<f64>) -> SdtResult<Self> {
        if bounds.len() < 2 {
            return Err(SdtError::criteria(format!(
                "need at least 2 boundaries, got {}",
                bounds.len()
            )));
        }
        if bounds[0] != f64::NEG_INFINITY {
            return Err(SdtError::criteria(format!(
                "first boundary must be -inf, got {}",
                bounds[0]
            )));
        }
        let last = bounds[bounds.len() - 1];
        if last != f64::INFINITY {
            return Err(SdtError::criteria(format!(
                "last boundary must be +inf, got {last}"
            )));
        }
        if let Some(i) = bounds.iter().position(|c| c.is_nan()) {
            return Err(SdtError::criteria(format!("boundary {i} is NaN")));
        }
        if let Some(i) = bounds.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SdtError::criteria(format!(
                "boundaries must be strictly increasing: {} at index {} is not below {}",
                bounds[i],
                i,
                bounds[i + 1]
            )));
        }
        Ok(Self(bounds))
    }

    /// Build criteria from the finite thresholds only, adding `-inf`/`+inf`.
    pub fn from_interior(interior: &[f64]) -> SdtResult<Self> {
        let mut bounds = Vec::with_capacity(interior.len() + 2);
        bounds.push(f64::NEG_INFINITY);
        bounds.extend_from_slice(interior);
        bounds.push(f64::INFINITY);
        Self::new(bounds)
    }

    /// All boundaries, infinite end bounds included.
    pub fn bounds(&self) -> &[f64] {
        &self.0
    }

    /// The finite thresholds between the two infinite end bounds.
    pub fn interior(&self) -> &[f64] {
        &self.0[1..self.0.len() - 1]
    }

    /// Number of response bins (boundaries - 1).
    pub fn num_bins(&self) -> usize {
        self.0.len() - 1
    }
}

impl TryFrom<Vec<f64>> for Criteria {
    type Error = SdtError;

    fn try_from(bounds: Vec<f64>) -> SdtResult<Self> {
        Self::new(bounds)
    }
}

impl Serialize for Criteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bounds_serde::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Criteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = bounds_serde::deserialize(deserializer)?;
        Self::new(bounds).map_err(D::Error::custom)
    }
}

impl From<Criteria> for Vec<f64> {
    fn from(criteria: Criteria) -> Self {
        criteria.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn accepts_bounded_increasing_criteria() {
        let c = Criteria::new(vec![-INF, -1.0, 0.0, 1.0, INF]).unwrap();
        assert_eq!(c.num_bins(), 4);
        assert_eq!(c.interior(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn two_infinite_bounds_make_one_bin() {
        let c = Criteria::new(vec![-INF, INF]).unwrap();
        assert_eq!(c.num_bins(), 1);
        assert!(c.interior().is_empty());
    }

    #[test]
    fn rejects_missing_bounds() {
        assert!(matches!(
            Criteria::new(vec![-1.0, 0.0, INF]),
            Err(SdtError::InvalidCriteria { .. })
        ));
        assert!(matches!(
            Criteria::new(vec![-INF, 0.0, 1.0]),
            Err(SdtError::InvalidCriteria { .. })
        ));
        assert!(matches!(
            Criteria::new(vec![-INF]),
            Err(SdtError::InvalidCriteria { .. })
        ));
    }

    #[test]
    fn rejects_ties_and_descending() {
        assert!(Criteria::new(vec![-INF, 0.5, 0.5, INF]).is_err());
        assert!(Criteria::new(vec![-INF, 1.0, 0.0, INF]).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(Criteria::new(vec![-INF, f64::NAN, INF]).is_err());
    }

    #[test]
    fn json_keeps_infinite_bounds() {
        let c = Criteria::from_interior(&[0.5]).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"["-inf",0.5,"inf"]"#);
        let back: Criteria = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn json_deserialization_validates() {
        assert!(serde_json::from_str::<Criteria>(r#"[0.0, 1.0]"#).is_err());
        assert!(serde_json::from_str::<Criteria>(r#"["-inf", 1.0, 0.0, "inf"]"#).is_err());
        assert!(serde_json::from_str::<Criteria>(r#"["-inf", "huge"]"#).is_err());
    }

    #[test]
    fn from_interior_adds_bounds() {
        let c = Criteria::from_interior(&[0.5]).unwrap();
        assert_eq!(c.bounds(), &[-INF, 0.5, INF]);
    }
}
