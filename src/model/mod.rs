//! Analytic oxygen depletion model for FLASH radiotherapy
//!
//! Implements the oxygen depletion, oxygen enhancement ratio (OER) and cell
//! survival relationships of Petersson et al., "A Quantitative Analysis of the
//! Role of Oxygen Tension in FLASH Radiation Therapy", IJROBP 107(3), 539-547.
//!
//! Every quantity is a closed-form expression; nothing is integrated
//! numerically and no state is kept between calls.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`oxygen_concentration`] | Oxygen fraction after `t` seconds of irradiation |
//! | [`oxygen_curve`] | The same over a sequence of times |
//! | [`instantaneous_oer`] | Normalised OER at an oxygen fraction, in (1/3, 1] |
//! | [`cumulative_oer`] | Normalised OER averaged over an exposure, in [1/3, 1] |
//! | [`mean_oer`] | [`cumulative_oer`] on the 1..3 scale |
//! | [`predict_survival`] | Linear-quadratic survival with an OER-scaled dose |
//!
//! # Depletion regimes
//!
//! [`ModelConfig`] chooses between depletion proportional to the oxygen level
//! ([`DepletionRegime::ConcentrationDependent`], the reference model) and
//! depletion at a constant rate
//! ([`DepletionRegime::ConcentrationIndependent`]).
//!
//! ```rust
//! use flashoer::{cumulative_oer, ModelConfig};
//!
//! let config = ModelConfig::default();
//! let conventional = cumulative_oer(20.0, 0.2333, 0.2, &config).unwrap();
//! let flash = cumulative_oer(20.0, 600.0, 0.016, &config).unwrap();
//! assert!(flash < conventional);
//! ```

mod config;
mod depletion;
mod exposure;
mod oer;
mod survival;


pub use config::{
    DepletionRegime, ModelConfig, REF_DEPLETION_RATE, REF_LINEAR_DEPLETION_RATE,
    REF_OER_MIDPOINT, REF_RECOVERY_RATE,
};
pub use depletion::{oxygen_concentration, oxygen_curve, oxygen_curve_array, OxygenTrajectory};
pub use exposure::{Exposure, LQParameters};
pub use oer::{cumulative_oer, instantaneous_oer, mean_oer};
pub use survival::{oer_scaled_dose, predict_survival, surviving_fraction};
