pub mod error;
pub mod model;

pub use error::FlashError;
pub use model::*;

pub mod prelude {
    pub mod model {
        pub use crate::model::{
            cumulative_oer, instantaneous_oer, mean_oer, oer_scaled_dose, oxygen_concentration,
            oxygen_curve, oxygen_curve_array, predict_survival, surviving_fraction,
            OxygenTrajectory,
        };
    }
    pub mod config {
        pub use crate::model::{
            DepletionRegime, ModelConfig, REF_DEPLETION_RATE, REF_LINEAR_DEPLETION_RATE,
            REF_OER_MIDPOINT, REF_RECOVERY_RATE,
        };
    }

    pub use crate::error::FlashError;
    pub use crate::model::{Exposure, LQParameters};
    pub use self::config::*;
    pub use self::model::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_exports() {
        let config = ModelConfig::default();
        let exposure = Exposure::from([10.0, 0.2333, 0.2]);
        let survival =
            predict_survival(&[exposure], &LQParameters::new(0.12, 0.027), &config).unwrap();
        assert_eq!(survival.len(), 1);
        assert_eq!(config.regime, DepletionRegime::ConcentrationDependent);
    }
}
