use serde::{Deserialize, Serialize};

use crate::error::{non_negative, positive, FlashError};

/// A single irradiation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exposure {
    /// Total dose (Gy). Zero is a valid, degenerate exposure.
    pub dose: f64,
    /// Dose rate (Gy/s), strictly positive
    pub dose_rate: f64,
    /// Oxygen level before irradiation (atmospheric fraction)
    pub baseline_oxygen: f64,
}

impl Exposure {
    pub fn new(dose: f64, dose_rate: f64, baseline_oxygen: f64) -> Self {
        Self {
            dose,
            dose_rate,
            baseline_oxygen,
        }
    }

    /// Time needed to deliver the dose (s)
    ///
    /// Not checked: a zero `dose_rate` gives infinity or NaN. Call
    /// [`Exposure::validate`] first when the inputs are untrusted.
    pub fn duration(&self) -> f64 {
        self.dose / self.dose_rate
    }

    pub fn validate(&self) -> Result<(), FlashError> {
        non_negative("dose", self.dose)?;
        positive("dose_rate", self.dose_rate)?;
        non_negative("baseline_oxygen", self.baseline_oxygen)?;
        Ok(())
    }
}

/// `[dose, dose_rate, baseline_oxygen]`
impl From<[f64; 3]> for Exposure {
    fn from([dose, dose_rate, baseline_oxygen]: [f64; 3]) -> Self {
        Self::new(dose, dose_rate, baseline_oxygen)
    }
}

impl From<(f64, f64, f64)> for Exposure {
    fn from((dose, dose_rate, baseline_oxygen): (f64, f64, f64)) -> Self {
        Self::new(dose, dose_rate, baseline_oxygen)
    }
}

/// Linear-quadratic radiosensitivity, given for normoxic cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LQParameters {
    /// Linear term (1/Gy)
    pub alpha: f64,
    /// Quadratic term (1/Gy²)
    pub beta: f64,
}

impl LQParameters {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn validate(&self) -> Result<(), FlashError> {
        non_negative("alpha", self.alpha)?;
        non_negative("beta", self.beta)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_from_triple() {
        let from_array = Exposure::from([10.0, 0.2333, 0.2]);
        let from_tuple = Exposure::from((10.0, 0.2333, 0.2));
        assert_eq!(from_array, from_tuple);
        assert_eq!(from_array.dose, 10.0);
        assert_eq!(from_array.dose_rate, 0.2333);
        assert_eq!(from_array.baseline_oxygen, 0.2);
    }

    #[test]
    fn test_duration() {
        assert_eq!(Exposure::new(20.0, 600.0, 0.016).duration(), 20.0 / 600.0);
        assert_eq!(Exposure::new(0.0, 1.0, 0.05).duration(), 0.0);

        let unchecked = Exposure::new(1.0, 0.0, 0.05);
        assert!(unchecked.duration().is_infinite());
        assert!(unchecked.validate().is_err());
    }

    #[test]
    fn test_exposure_validation() {
        assert!(Exposure::new(0.0, 1.0, 0.0).validate().is_ok());
        assert!(Exposure::new(1.0, 0.0, 0.05).validate().is_err());
        assert!(Exposure::new(-1.0, 1.0, 0.05).validate().is_err());
        assert!(Exposure::new(1.0, 1.0, -0.05).validate().is_err());
    }

    #[test]
    fn test_lq_validation() {
        assert!(LQParameters::new(0.12, 0.027).validate().is_ok());
        assert!(LQParameters::new(0.0, 0.0).validate().is_ok());
        assert!(LQParameters::new(-0.1, 0.027).validate().is_err());
    }
}
