//! Empirical scoring of response bins.

use sdt_core::errors::{SdtError, SdtResult};

/// Fraction of responses at or below each level, for levels `1..=num_levels`.
pub fn cumulative_fractions(bins: &[usize], num_levels: usize) -> SdtResult<Vec<f64>> {
    if bins.is_empty() {
        return Err(SdtError::sample_count(0));
    }
    let mut sorted = bins.to_vec();
    sorted.sort_unstable();
    let n = sorted.len() as f64;
    Ok((1..=num_levels)
        .map(|level| sorted.partition_point(|&b| b <= level) as f64 / n)
        .collect())
}

/// Proportion of responses strictly above each level, for levels
/// `1..=num_levels` (the complement of the empirical CDF).
///
/// Read as "confidence at or above the next level up", these are the
/// ROC coordinates. Non-increasing in level.
pub fn score(bins: &[usize], num_levels: usize) -> SdtResult<Vec<f64>> {
    Ok(cumulative_fractions(bins, num_levels)?
        .into_iter()
        .map(|f| 1.0 - f)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_fractions() {
        let foil = cumulative_fractions(&[1, 1, 1, 1, 2], 2).unwrap();
        let target = cumulative_fractions(&[2, 2, 2, 1, 1], 2).unwrap();
        assert!((foil[0] - 0.8).abs() < 1e-12);
        assert!((target[0] - 0.4).abs() < 1e-12);
        assert_eq!(foil[1], 1.0);
        assert_eq!(target[1], 1.0);
    }

    #[test]
    fn score_is_complement() {
        let s = score(&[1, 1, 1, 1, 2], 2).unwrap();
        assert!((s[0] - 0.2).abs() < 1e-12);
        assert_eq!(s[1], 0.0);
    }

    #[test]
    fn score_non_increasing() {
        let s = score(&[3, 1, 4, 1, 5, 2, 6, 5, 3, 5], 6).unwrap();
        assert!(s.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn empty_responses_rejected() {
        assert!(matches!(
            score(&[], 3),
            Err(SdtError::InvalidSampleCount { count: 0 })
        ));
    }

    #[test]
    fn zero_levels_yield_nothing() {
        assert!(score(&[1, 2], 0).unwrap().is_empty());
    }
}
