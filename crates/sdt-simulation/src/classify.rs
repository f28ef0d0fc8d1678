//! Criterion classification.
//!
//! Bin `i` (1-based) is the half-open interval `[criteria[i-1], criteria[i])`.
//! A strength equal to a boundary goes to the higher bin.

use sdt_core::models::{Criteria, Population};

/// Locate the 1-based response bin containing `strength`.
///
/// Binary search over the boundaries: the bin index equals the number of
/// boundaries at or below the strength. Since `criteria[0]` is `-inf` every
/// finite strength counts at least one, and since the last boundary is
/// `+inf` none counts all of them. The clamp only matters for non-finite
/// input, which populations never hold.
pub fn classify(strength: f64, criteria: &Criteria) -> usize {
    let at_or_below = criteria.bounds().partition_point(|&c| c <= strength);
    at_or_below.clamp(1, criteria.num_bins())
}

/// Classify every strength of a population, preserving trial order.
pub fn classify_all(population: &Population, criteria: &Criteria) -> Vec<usize> {
    population
        .strengths
        .iter()
        .map(|&s| classify(s, criteria))
        .collect()
}

/// Count responses per bin. Index 0 holds bin 1.
pub fn response_counts(bins: &[usize], num_bins: usize) -> Vec<usize> {
    let mut counts = vec![0; num_bins];
    for &bin in bins {
        if (1..=num_bins).contains(&bin) {
            counts[bin - 1] += 1;
        }
    }
    counts
}
