//! Oxygen concentration during an exposure
//!
//! Both regimes have closed forms, so a trajectory is evaluated directly
//! at any time point without stepping through the ones before it.

use ndarray::Array1;

use super::config::{DepletionRegime, ModelConfig};
use crate::error::{non_negative, positive, FlashError};

/// `(1 - exp(-rate * t)) / rate`, continued to `t` at `rate == 0`
#[inline]
pub(crate) fn recovery_kernel(rate: f64, t: f64) -> f64 {
    if rate > 0.0 {
        -(-rate * t).exp_m1() / rate
    } else {
        t
    }
}

/// Oxygen level as a function of exposure time for a fixed dose rate
///
/// # Example
///
/// ```rust
/// use flashoer::{ModelConfig, OxygenTrajectory};
///
/// let trajectory = OxygenTrajectory::new(10.0, 0.05, &ModelConfig::default()).unwrap();
/// assert_eq!(trajectory.at(0.0).unwrap(), 0.05);
/// assert!(trajectory.at(1.0).unwrap() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenTrajectory {
    regime: DepletionRegime,
    /// dose_rate * depletion_rate
    depletion: f64,
    recovery: f64,
    baseline_oxygen: f64,
}

impl OxygenTrajectory {
    pub fn new(
        dose_rate: f64,
        baseline_oxygen: f64,
        config: &ModelConfig,
    ) -> Result<Self, FlashError> {
        config.validate()?;
        let dose_rate = positive("dose_rate", dose_rate)?;
        let baseline_oxygen = non_negative("baseline_oxygen", baseline_oxygen)?;

        Ok(Self {
            regime: config.regime,
            depletion: dose_rate * config.depletion_rate,
            recovery: config.recovery_rate,
            baseline_oxygen,
        })
    }

    /// Oxygen fraction after `t` seconds of irradiation
    pub fn at(&self, t: f64) -> Result<f64, FlashError> {
        let t = non_negative("t", t)?;
        Ok(self.eval(t))
    }

    /// Evaluate at every time point, in order
    pub fn sample(&self, times: &[f64]) -> Result<Vec<f64>, FlashError> {
        times.iter().map(|&t| self.at(t)).collect()
    }

    fn eval(&self, t: f64) -> f64 {
        let o2 = self.baseline_oxygen;
        match self.regime {
            // O2 * (d * exp(-(d + k) t) + k) / (d + k), written so that t = 0
            // returns the baseline exactly.
            DepletionRegime::ConcentrationDependent => {
                let total = self.depletion + self.recovery;
                o2 - o2 * self.depletion * recovery_kernel(total, t)
            }
            // Linear depletion never re-derives the crossing: the curve is
            // simply floored at zero.
            DepletionRegime::ConcentrationIndependent => {
                (o2 - self.depletion * recovery_kernel(self.recovery, t)).max(0.0)
            }
        }
    }
}

/// Oxygen fraction after `t` seconds at `dose_rate`, starting from `baseline_oxygen`
pub fn oxygen_concentration(
    t: f64,
    dose_rate: f64,
    baseline_oxygen: f64,
    config: &ModelConfig,
) -> Result<f64, FlashError> {
    OxygenTrajectory::new(dose_rate, baseline_oxygen, config)?.at(t)
}

/// [`oxygen_concentration`] at each of `times`; the output has the same order
pub fn oxygen_curve(
    times: &[f64],
    dose_rate: f64,
    baseline_oxygen: f64,
    config: &ModelConfig,
) -> Result<Vec<f64>, FlashError> {
    OxygenTrajectory::new(dose_rate, baseline_oxygen, config)?.sample(times)
}

/// [`oxygen_curve`] over an `ndarray` time axis
pub fn oxygen_curve_array(
    times: &Array1<f64>,
    dose_rate: f64,
    baseline_oxygen: f64,
    config: &ModelConfig,
) -> Result<Array1<f64>, FlashError> {
    let trajectory = OxygenTrajectory::new(dose_rate, baseline_oxygen, config)?;
    times.iter().try_for_each(|&t| non_negative("t", t).map(|_| ()))?;
    Ok(times.mapv(|t| trajectory.eval(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario_starts_at_baseline() {
        let config = ModelConfig::default();
        assert_eq!(oxygen_concentration(0.0, 10.0, 0.05, &config).unwrap(), 0.05);

        let linear = ModelConfig::concentration_independent();
        assert_eq!(oxygen_concentration(0.0, 10.0, 0.05, &linear).unwrap(), 0.05);
    }

    #[test]
    fn test_dependent_matches_closed_form() {
        let config = ModelConfig::default();
        let (dose_rate, o2) = (10.0, 0.05);
        let d = dose_rate * config.depletion_rate;
        let k = config.recovery_rate;

        for &t in &[1e-3, 0.1, 0.5, 2.0, 30.0] {
            let expected = o2 / (d + k) * (d * (-(d + k) * t).exp() + k);
            let actual = oxygen_concentration(t, dose_rate, o2, &config).unwrap();
            assert_relative_eq!(actual, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_dependent_approaches_steady_state() {
        let config = ModelConfig::default();
        let d = 100.0 * config.depletion_rate;
        let steady = 0.05 * config.recovery_rate / (d + config.recovery_rate);
        let late = oxygen_concentration(1e3, 100.0, 0.05, &config).unwrap();
        assert_relative_eq!(late, steady, max_relative = 1e-12);
    }

    #[test]
    fn test_independent_matches_closed_form() {
        let config = ModelConfig::concentration_independent();
        let (dose_rate, o2) = (100.0, 0.2);
        let d = dose_rate * config.depletion_rate;
        let k = config.recovery_rate;

        for &t in &[1e-3, 0.1, 1.0, 10.0] {
            let expected = o2 + d / k * ((-k * t).exp() - 1.0);
            let actual = oxygen_concentration(t, dose_rate, o2, &config).unwrap();
            assert_relative_eq!(actual, expected.max(0.0), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_independent_clamps_at_zero() {
        let config = ModelConfig::concentration_independent();
        // 1000 Gy/s depletes 0.518 per second, far more than 1% O2
        let o2 = oxygen_concentration(1.0, 1000.0, 0.01, &config).unwrap();
        assert_eq!(o2, 0.0);
    }

    #[test]
    fn test_zero_recovery_is_linear_decay() {
        let config = ModelConfig::concentration_independent().with_recovery_rate(0.0);
        let o2 = oxygen_concentration(2.0, 10.0, 0.05, &config).unwrap();
        assert_relative_eq!(o2, 0.05 - 10.0 * 0.000518 * 2.0, max_relative = 1e-12);

        let config = ModelConfig::default().with_recovery_rate(0.0);
        let o2 = oxygen_concentration(2.0, 10.0, 0.05, &config).unwrap();
        assert_relative_eq!(o2, 0.05 * (-0.53_f64 * 2.0).exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_curve_is_elementwise() {
        let config = ModelConfig::default();
        let times = [5.0, 0.0, 1e-7, 1e3, 0.5];
        let curve = oxygen_curve(&times, 3.0, 0.05, &config).unwrap();
        assert_eq!(curve.len(), times.len());
        for (&t, &o2) in times.iter().zip(curve.iter()) {
            assert_eq!(o2, oxygen_concentration(t, 3.0, 0.05, &config).unwrap());
        }

        let array = oxygen_curve_array(&Array1::from(times.to_vec()), 3.0, 0.05, &config).unwrap();
        assert_eq!(array.to_vec(), curve);
    }

    #[test]
    fn test_rejects_out_of_domain_inputs() {
        let config = ModelConfig::default();
        assert!(oxygen_concentration(-1.0, 1.0, 0.05, &config).is_err());
        assert!(oxygen_concentration(1.0, 0.0, 0.05, &config).is_err());
        assert!(oxygen_concentration(1.0, 1.0, -0.05, &config).is_err());
        assert!(oxygen_curve(&[0.0, -1.0], 1.0, 0.05, &config).is_err());
        assert!(oxygen_curve_array(&Array1::from(vec![f64::NAN]), 1.0, 0.05, &config).is_err());
    }

    #[test]
    fn test_kernel_limits() {
        assert_eq!(recovery_kernel(0.0, 3.0), 3.0);
        assert_relative_eq!(recovery_kernel(1e-12, 3.0), 3.0, max_relative = 1e-9);
        assert_relative_eq!(recovery_kernel(2.0, 1e3), 0.5, max_relative = 1e-15);
        assert_eq!(recovery_kernel(5.3e8, 0.0), 0.0);
    }
}
