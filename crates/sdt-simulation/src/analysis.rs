//! SDT summary statistics: sensitivity, bias, z-ROC fits, and the ROC an
//! equal- or unequal-variance Gaussian model predicts.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use sdt_core::errors::{SdtError, SdtResult};
use sdt_core::models::{RocPoint, SimulationConfig};

use crate::distributions::studied_moments;
use crate::roc::RocCurve;

fn standard_normal() -> SdtResult<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| SdtError::InvalidDistributionParameters {
        reason: e.to_string(),
    })
}

/// Inverse standard-normal CDF.
pub(crate) fn probit(p: f64) -> SdtResult<f64> {
    Ok(standard_normal()?.inverse_cdf(p))
}

fn check_rate(name: &'static str, value: f64) -> SdtResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(SdtError::InvalidRate { name, value })
    }
}

/// Sensitivity `d' = z(H) - z(FA)`.
pub fn d_prime(hit_rate: f64, false_alarm_rate: f64) -> SdtResult<f64> {
    check_rate("hit rate", hit_rate)?;
    check_rate("false-alarm rate", false_alarm_rate)?;
    Ok(probit(hit_rate)? - probit(false_alarm_rate)?)
}

/// Response bias `c = -(z(H) + z(FA)) / 2`. Positive means conservative.
pub fn criterion_c(hit_rate: f64, false_alarm_rate: f64) -> SdtResult<f64> {
    check_rate("hit rate", hit_rate)?;
    check_rate("false-alarm rate", false_alarm_rate)?;
    Ok(-(probit(hit_rate)? + probit(false_alarm_rate)?) / 2.0)
}

/// Least-squares line through the z-ROC, `z(H) = intercept + slope * z(FA)`.
///
/// Under a Gaussian model the slope estimates `σ_foil / σ_target`
/// (1 for equal variance, below 1 for UVSD) and the intercept estimates
/// `(μ_target - μ_foil) / σ_target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZRocFit {
    pub slope: f64,
    pub intercept: f64,
    /// Points that entered the fit.
    pub points: usize,
}

/// Fit the z-ROC using only points whose rates both lie strictly inside (0,1).
///
/// Returns `None` when fewer than two such points with distinct
/// false-alarm rates remain.
pub fn zroc_fit(curve: &RocCurve) -> SdtResult<Option<ZRocFit>> {
    let inside = |r: f64| r > 0.0 && r < 1.0;
    let z: Vec<(f64, f64)> = curve
        .points()
        .iter()
        .filter(|p| inside(p.false_alarm_rate) && inside(p.hit_rate))
        .map(|p| Ok((probit(p.false_alarm_rate)?, probit(p.hit_rate)?)))
        .collect::<SdtResult<_>>()?;

    if z.len() < 2 {
        return Ok(None);
    }

    let n = z.len() as f64;
    let mean_x = z.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = z.iter().map(|(_, y)| y).sum::<f64>() / n;
    let sxx: f64 = z.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = z.iter().map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
    if sxx <= f64::EPSILON {
        return Ok(None);
    }

    let slope = sxy / sxx;
    Ok(Some(ZRocFit {
        slope,
        intercept: mean_y - slope * mean_x,
        points: z.len(),
    }))
}

/// The ROC a Gaussian model predicts for `config`, one point per level.
///
/// Each rate is `P(strength >= criterion)`, i.e. `1 - Φ((c - μ) / σ)`.
/// Target moments are those of `target_initial + study_increment`.
/// Exponential components have no Gaussian closed form and are rejected.
pub fn theoretical_roc(config: &SimulationConfig) -> SdtResult<Vec<RocPoint>> {
    let criteria = config.validate()?;
    for (name, dist) in [
        ("foil", &config.foil),
        ("target_initial", &config.target_initial),
        ("study_increment", &config.study_increment),
    ] {
        if !dist.is_gaussian() {
            return Err(SdtError::InvalidDistributionParameters {
                reason: format!("{name} distribution has no Gaussian closed form"),
            });
        }
    }

    let foil = (config.foil.mean(), config.foil.variance().sqrt());
    let (target_mean, target_var) = studied_moments(&config.target_initial, &config.study_increment);
    let target = (target_mean, target_var.sqrt());
    let std_normal = standard_normal()?;

    let upper_tail = |c: f64, (mean, sd): (f64, f64)| -> f64 {
        if c == f64::INFINITY {
            0.0
        } else if sd == 0.0 {
            if mean >= c {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - std_normal.cdf((c - mean) / sd)
        }
    };

    Ok(criteria.bounds()[1..]
        .iter()
        .map(|&c| RocPoint::new(upper_tail(c, foil), upper_tail(c, target)))
        .collect())
}
