use thiserror::Error;

/// Errors returned by the model functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlashError {
    /// An argument is outside the domain the model is defined on
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },

    /// A [`crate::ModelConfig`] constant is outside its domain
    #[error("Invalid model configuration: {param} = {value}")]
    InvalidConfig { param: String, value: String },

    /// A closed-form evaluation did not produce a finite number
    #[error("Non-finite {quantity}: {value}")]
    NonFinite { quantity: String, value: f64 },
}

impl FlashError {
    pub(crate) fn invalid(param: &str, value: f64) -> Self {
        FlashError::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
        }
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn non_negative(param: &str, value: f64) -> Result<f64, FlashError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FlashError::invalid(param, value))
    }
}

/// Reject NaN, infinities, zero and negative values
pub(crate) fn positive(param: &str, value: f64) -> Result<f64, FlashError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FlashError::invalid(param, value))
    }
}

pub(crate) fn finite(quantity: &str, value: f64) -> Result<f64, FlashError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FlashError::NonFinite {
            quantity: quantity.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_checks() {
        assert_eq!(non_negative("dose", 0.0), Ok(0.0));
        assert!(non_negative("dose", -1e-12).is_err());
        assert!(non_negative("dose", f64::NAN).is_err());
        assert!(positive("dose_rate", 0.0).is_err());
        assert!(positive("dose_rate", f64::INFINITY).is_err());
        assert_eq!(positive("dose_rate", 600.0), Ok(600.0));
    }

    #[test]
    fn test_error_messages() {
        let err = FlashError::invalid("dose_rate", 0.0);
        assert_eq!(err.to_string(), "Invalid parameter: dose_rate = 0");

        let err = finite("cumulative OER", f64::NAN).unwrap_err();
        assert!(err.to_string().starts_with("Non-finite cumulative OER"));
    }
}
