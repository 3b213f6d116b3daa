//! Model constants and the depletion regime selector

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FlashError;

/// Reference depletion rate for [`DepletionRegime::ConcentrationDependent`] (per Gy)
pub const REF_DEPLETION_RATE: f64 = 0.053;
/// Reference depletion rate for [`DepletionRegime::ConcentrationIndependent`]
/// (atmospheric fraction per Gy)
pub const REF_LINEAR_DEPLETION_RATE: f64 = 0.000518;
/// Reference recovery rate (per second), shared by both regimes
pub const REF_RECOVERY_RATE: f64 = 1.0;
/// Oxygen fraction at which the OER curve is half-maximal (1% O2)
pub const REF_OER_MIDPOINT: f64 = 0.010;

/// How radiation consumes oxygen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepletionRegime {
    /// Depletion proportional to the current oxygen level
    #[default]
    ConcentrationDependent,
    /// Depletion at a constant rate; the trajectory is clamped at zero
    ConcentrationIndependent,
}

impl fmt::Display for DepletionRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepletionRegime::ConcentrationDependent => write!(f, "concentration-dependent"),
            DepletionRegime::ConcentrationIndependent => write!(f, "concentration-independent"),
        }
    }
}

/// Constants of one model variant
///
/// Every model function takes the configuration explicitly, so both
/// regimes can be evaluated side by side. Start from a preset and
/// override single constants with the `with_*` methods:
///
/// ```rust
/// use flashoer::ModelConfig;
///
/// let config = ModelConfig::default().with_recovery_rate(0.5);
/// assert_eq!(config.depletion_rate, 0.053);
/// ```
///
/// When deserialized, omitted constants take the reference values of the
/// regime that was read (the concentration-dependent one if it is omitted too).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartialModelConfig")]
pub struct ModelConfig {
    /// Depletion kinetics
    pub regime: DepletionRegime,
    /// Per Gy (concentration-dependent) or atmospheric fraction per Gy
    /// (concentration-independent)
    pub depletion_rate: f64,
    /// Per second
    pub recovery_rate: f64,
    /// Oxygen fraction at which the OER is half-maximal
    pub oer_midpoint: f64,
}

/// A `ModelConfig` document in which every field is optional
#[derive(Deserialize)]
struct PartialModelConfig {
    #[serde(default)]
    regime: DepletionRegime,
    depletion_rate: Option<f64>,
    recovery_rate: Option<f64>,
    oer_midpoint: Option<f64>,
}

impl From<PartialModelConfig> for ModelConfig {
    fn from(partial: PartialModelConfig) -> Self {
        let preset = match partial.regime {
            DepletionRegime::ConcentrationDependent => Self::concentration_dependent(),
            DepletionRegime::ConcentrationIndependent => Self::concentration_independent(),
        };
        Self {
            regime: partial.regime,
            depletion_rate: partial.depletion_rate.unwrap_or(preset.depletion_rate),
            recovery_rate: partial.recovery_rate.unwrap_or(preset.recovery_rate),
            oer_midpoint: partial.oer_midpoint.unwrap_or(preset.oer_midpoint),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::concentration_dependent()
    }
}

impl ModelConfig {
    /// Reference constants with depletion proportional to oxygen level
    pub fn concentration_dependent() -> Self {
        Self {
            regime: DepletionRegime::ConcentrationDependent,
            depletion_rate: REF_DEPLETION_RATE,
            recovery_rate: REF_RECOVERY_RATE,
            oer_midpoint: REF_OER_MIDPOINT,
        }
    }

    /// Reference constants with depletion independent of oxygen level
    pub fn concentration_independent() -> Self {
        Self {
            regime: DepletionRegime::ConcentrationIndependent,
            depletion_rate: REF_LINEAR_DEPLETION_RATE,
            recovery_rate: REF_RECOVERY_RATE,
            oer_midpoint: REF_OER_MIDPOINT,
        }
    }

    /// Set the depletion regime, keeping the current rate constants
    pub fn with_regime(mut self, regime: DepletionRegime) -> Self {
        self.regime = regime;
        self
    }

    pub fn with_depletion_rate(mut self, depletion_rate: f64) -> Self {
        self.depletion_rate = depletion_rate;
        self
    }

    pub fn with_recovery_rate(mut self, recovery_rate: f64) -> Self {
        self.recovery_rate = recovery_rate;
        self
    }

    pub fn with_oer_midpoint(mut self, oer_midpoint: f64) -> Self {
        self.oer_midpoint = oer_midpoint;
        self
    }

    /// Check every constant against its domain
    ///
    /// Requires `depletion_rate > 0`, `recovery_rate >= 0` and
    /// `oer_midpoint > 0`, all finite.
    pub fn validate(&self) -> Result<(), FlashError> {
        let checks = [
            ("depletion_rate", self.depletion_rate, false),
            ("recovery_rate", self.recovery_rate, true),
            ("oer_midpoint", self.oer_midpoint, false),
        ];
        for (param, value, zero_allowed) in checks {
            let ok = value.is_finite() && (value > 0.0 || (zero_allowed && value == 0.0));
            if !ok {
                return Err(FlashError::InvalidConfig {
                    param: param.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}
