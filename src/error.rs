//! Error types shared by the calculator core and the scenario store

use thiserror::Error;

use crate::scenario::MAX_HORIZON_MONTHS;

/// Errors raised by the calculator library
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// An input value is outside its allowed domain
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// No scenario is stored under the requested name
    #[error("scenario not found: {0}")]
    NotFound(String),

    #[error("scenario store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A computed quantity left the representable floating-point range
    #[error("{0} overflows for these parameters; lower the rate or the horizon")]
    Overflow(&'static str),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl CalculatorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidParameter`, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculatorError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Reject negative and non-finite values for a named field
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalculatorError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(CalculatorError::invalid(field, format!("must be non-negative, got {}", value)));
    }
    Ok(())
}

/// Horizon must be between one month and `MAX_HORIZON_MONTHS`
pub(crate) fn ensure_horizon(horizon_months: u32) -> Result<()> {
    if horizon_months == 0 {
        return Err(CalculatorError::invalid("horizon_months", "must be at least one month"));
    }
    if horizon_months > MAX_HORIZON_MONTHS {
        return Err(CalculatorError::invalid(
            "horizon_months",
            format!("must be at most {} months, got {}", MAX_HORIZON_MONTHS, horizon_months),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(ensure_non_negative("initial_capital", 0.0).is_ok());
    }

    #[test]
    fn test_non_negative_names_field() {
        let err = ensure_non_negative("monthly_contribution", -1.0).unwrap_err();
        assert_eq!(err.field(), Some("monthly_contribution"));
        assert!(err.to_string().contains("monthly_contribution"));
    }

    #[test]
    fn test_horizon_bounds() {
        assert!(ensure_horizon(1).is_ok());
        assert!(ensure_horizon(MAX_HORIZON_MONTHS).is_ok());
        assert_eq!(ensure_horizon(0).unwrap_err().field(), Some("horizon_months"));
        assert_eq!(ensure_horizon(3_000_000_000).unwrap_err().field(), Some("horizon_months"));
    }

    #[test]
    fn test_nan_rejected() {
        let err = ensure_non_negative("annual_rate", f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate"));
    }
}
