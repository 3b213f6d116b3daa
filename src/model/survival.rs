//! Linear-quadratic survival with an OER-scaled dose

use tracing::debug;

use super::config::ModelConfig;
use super::exposure::{Exposure, LQParameters};
use super::oer::cumulative_oer;
use crate::error::FlashError;

/// Dose weighted by the cumulative OER of the exposure
///
/// Zero for a zero dose.
pub fn oer_scaled_dose(exposure: &Exposure, config: &ModelConfig) -> Result<f64, FlashError> {
    let oer = cumulative_oer(
        exposure.dose,
        exposure.dose_rate,
        exposure.baseline_oxygen,
        config,
    )?;
    Ok(exposure.dose * oer)
}

/// Surviving fraction after a single exposure
///
/// `exp(-alpha * D - beta * D²)` with `D` the [`oer_scaled_dose`]. `lq` holds
/// normoxic parameters; both the baseline oxygen level and its depletion
/// during irradiation are accounted for through the OER.
pub fn surviving_fraction(
    exposure: &Exposure,
    lq: &LQParameters,
    config: &ModelConfig,
) -> Result<f64, FlashError> {
    lq.validate()?;
    let scaled = oer_scaled_dose(exposure, config)?;
    Ok((-scaled * lq.alpha - lq.beta * scaled * scaled).exp())
}

/// Surviving fraction for each exposure, in input order
///
/// Exposures are independent of each other. The reference recovery rate
/// applies unless `config` overrides it.
///
/// # Example
///
/// ```rust
/// use flashoer::{predict_survival, Exposure, LQParameters, ModelConfig};
///
/// let exposures = [Exposure::from([10.0, 0.2333, 0.2])];
/// let survival = predict_survival(
///     &exposures,
///     &LQParameters::new(0.12, 0.027),
///     &ModelConfig::default(),
/// )
/// .unwrap();
/// assert!(survival[0] > 0.0 && survival[0] < 1.0);
/// ```
pub fn predict_survival(
    exposures: &[Exposure],
    lq: &LQParameters,
    config: &ModelConfig,
) -> Result<Vec<f64>, FlashError> {
    debug!(
        exposures = exposures.len(),
        regime = %config.regime,
        "predicting survival"
    );
    exposures
        .iter()
        .map(|exposure| surviving_fraction(exposure, lq, config))
        .collect()
}
