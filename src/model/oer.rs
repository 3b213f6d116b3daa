//! Oxygen enhancement ratio, instantaneous and averaged over an exposure
//!
//! OER values are normalised so that fully oxygenated tissue has a value of
//! 1.0 and anoxic tissue 1/3. [`mean_oer`] reports the conventional scale
//! from 1 to 3.

use tracing::trace;

use super::config::{DepletionRegime, ModelConfig};
use super::depletion::recovery_kernel;
use super::exposure::Exposure;
use crate::error::{finite, FlashError};

/// Normalised OER at a given oxygen fraction
///
/// Increases monotonically from 1/3 at zero oxygen towards 1.0.
#[inline]
pub fn instantaneous_oer(oxygen: f64, oer_midpoint: f64) -> f64 {
    (3.0 * oxygen + oer_midpoint) / (oxygen + oer_midpoint) / 3.0
}

/// Time-averaged normalised OER over an exposure of `dose` at `dose_rate`
///
/// Integrates [`instantaneous_oer`] along the oxygen trajectory of the
/// configured regime and divides by the exposure time `dose / dose_rate`.
/// The result lies in [1/3, 1].
///
/// A zero dose returns `0.0`. This is a sentinel, not an OER, and must not be
/// used as a dose scaling factor except where the dose itself is zero.
///
/// # Errors
///
/// [`FlashError::InvalidParameter`] when `dose_rate <= 0` or a dose or oxygen
/// level is negative, [`FlashError::InvalidConfig`] for an invalid `config`.
pub fn cumulative_oer(
    dose: f64,
    dose_rate: f64,
    baseline_oxygen: f64,
    config: &ModelConfig,
) -> Result<f64, FlashError> {
    config.validate()?;
    let exposure = Exposure::new(dose, dose_rate, baseline_oxygen);
    exposure.validate()?;

    if dose == 0.0 {
        return Ok(0.0);
    }

    let t = exposure.duration();
    // Exposure time underflows for vanishing doses; this is the t -> 0 limit
    if t == 0.0 {
        return Ok(instantaneous_oer(baseline_oxygen, config.oer_midpoint));
    }

    let depletion = dose_rate * config.depletion_rate;
    let value = match config.regime {
        DepletionRegime::ConcentrationDependent => proportional_oer(
            t,
            depletion,
            config.recovery_rate,
            baseline_oxygen,
            config.oer_midpoint,
        ),
        DepletionRegime::ConcentrationIndependent => linear_oer(
            t,
            depletion,
            config.recovery_rate,
            baseline_oxygen,
            config.oer_midpoint,
        ),
    };

    finite("cumulative OER", value)
}

/// [`cumulative_oer`] on the conventional 1..3 OER scale
///
/// Zero dose keeps the `0.0` sentinel.
pub fn mean_oer(
    dose: f64,
    dose_rate: f64,
    baseline_oxygen: f64,
    config: &ModelConfig,
) -> Result<f64, FlashError> {
    Ok(3.0 * cumulative_oer(dose, dose_rate, baseline_oxygen, config)?)
}

/// Depletion proportional to the oxygen level.
///
/// `d` is the depletion rate times the dose rate, `k` the recovery rate.
fn proportional_oer(t: f64, d: f64, k: f64, o2: f64, m: f64) -> f64 {
    let total = d + k;
    // ln of the oxygen-dependent denominator at t relative to its value at 0
    let log_ratio = (-o2 * d * recovery_kernel(total, t) / (m + o2)).ln_1p();

    let numerator = t * (3.0 * k * o2 + m * total) - 2.0 * m * log_ratio;
    let denominator = t * (k * o2 + m * total);

    numerator / denominator / 3.0
}

/// Depletion at a constant rate, with oxygen floored at zero.
///
/// When oxygen runs out before the exposure ends, the remainder of the
/// exposure is spent at the anoxic OER of 1/3.
fn linear_oer(t: f64, d: f64, k: f64, o2: f64, m: f64) -> f64 {
    let threshold = o2 * k / d;
    let cross_time = if threshold >= 1.0 {
        None
    } else if k > 0.0 {
        Some(-(-threshold).ln_1p() / k)
    } else {
        Some(o2 / d)
    };

    let weighted = match cross_time {
        Some(tc) if tc <= t => {
            trace!(cross_time = tc, t, "oxygen fully depleted during exposure");
            linear_oer_integral(tc, d, k, o2, m) + (t - tc) / 3.0
        }
        Some(tc) => {
            trace!(cross_time = tc, t, "exposure ends before oxygen is depleted");
            linear_oer_integral(t, d, k, o2, m)
        }
        None => {
            trace!(threshold, "oxygen never depleted");
            linear_oer_integral(t, d, k, o2, m)
        }
    };

    weighted / t
}

/// Integral of the normalised OER over `[0, tau]` along the linear trajectory,
/// valid while the trajectory stays non-negative.
fn linear_oer_integral(tau: f64, d: f64, k: f64, o2: f64, m: f64) -> f64 {
    let denominator = 3.0 * d - 3.0 * k * (o2 + m);

    // d == k * (o2 + m) is a removable singularity
    if denominator.abs() <= 1e-9 * 3.0 * d {
        return tau - 2.0 * m / 3.0 * (k * tau).exp_m1() / d;
    }

    let log_term = 2.0 * m * (-d * recovery_kernel(k, tau) / (m + o2)).ln_1p();
    ((3.0 * d - m * k - 3.0 * k * o2) * tau + log_term) / denominator
}
