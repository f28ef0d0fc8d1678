//! ROC construction from foil and target responses.

use serde::{Deserialize, Serialize};

use sdt_core::errors::{SdtError, SdtResult};
use sdt_core::models::RocPoint;

use crate::analysis::probit;
use crate::scoring::score;

/// Pair foil scores (false-alarm rates) with target scores (hit rates),
/// one point per level `1..=num_levels`.
pub fn build_roc(
    foil_bins: &[usize],
    target_bins: &[usize],
    num_levels: usize,
) -> SdtResult<Vec<RocPoint>> {
    let false_alarms = score(foil_bins, num_levels)?;
    let hits = score(target_bins, num_levels)?;
    Ok(false_alarms
        .into_iter()
        .zip(hits)
        .map(RocPoint::from)
        .collect())
}

/// An empirical ROC curve together with the population sizes behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
    foil_count: usize,
    target_count: usize,
}

impl RocCurve {
    /// Score both populations' bins and pair the results.
    pub fn from_bins(
        foil_bins: &[usize],
        target_bins: &[usize],
        num_levels: usize,
    ) -> SdtResult<Self> {
        Ok(Self {
            points: build_roc(foil_bins, target_bins, num_levels)?,
            foil_count: foil_bins.len(),
            target_count: target_bins.len(),
        })
    }

    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<RocPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn foil_count(&self) -> usize {
        self.foil_count
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Both coordinates non-increasing as the level rises.
    pub fn is_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| {
            w[0].false_alarm_rate >= w[1].false_alarm_rate && w[0].hit_rate >= w[1].hit_rate
        })
    }

    /// Every point on or above the chance diagonal.
    pub fn above_diagonal(&self) -> bool {
        self.points.iter().all(RocPoint::is_above_diagonal)
    }

    /// Trapezoidal area under the curve, anchored at (0,0) and (1,1).
    pub fn area_under_curve(&self) -> f64 {
        let mut xy: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|p| (p.false_alarm_rate, p.hit_rate))
            .collect();
        xy.push((0.0, 0.0));
        xy.push((1.0, 1.0));
        xy.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        xy.windows(2)
            .map(|w| {
                let (x0, y0) = w[0];
                let (x1, y1) = w[1];
                (x1 - x0) * (y0 + y1) / 2.0
            })
            .sum()
    }

    /// z-transformed points, `(z(FA), z(H))`.
    ///
    /// Rates of exactly 0 or 1 are moved in by `1 / (2n)` first, where `n`
    /// is the size of the population the rate came from.
    pub fn z_transform(&self) -> SdtResult<Vec<(f64, f64)>> {
        if self.foil_count == 0 || self.target_count == 0 {
            return Err(SdtError::sample_count(0));
        }
        self.points
            .iter()
            .map(|p| {
                let zf = probit(nudge(p.false_alarm_rate, self.foil_count))?;
                let zh = probit(nudge(p.hit_rate, self.target_count))?;
                Ok((zf, zh))
            })
            .collect()
    }
}

/// Pull a rate off the 0/1 edges by half an observation.
fn nudge(rate: f64, n: usize) -> f64 {
    let half = 0.5 / n as f64;
    rate.clamp(half, 1.0 - half)
}
