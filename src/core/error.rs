use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }
}

/// Rejects negative, NaN and infinite amounts.
pub(crate) fn ensure_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(value)
}

pub(crate) fn ensure_periods(field: &'static str, periods: u32) -> Result<u32> {
    if periods == 0 {
        return Err(CalcError::invalid(field, "must be >= 1"));
    }
    Ok(periods)
}

pub(crate) fn ensure_rate_pct(field: &'static str, rate_pct: f64) -> Result<f64> {
    if !rate_pct.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if rate_pct <= -100.0 {
        return Err(CalcError::invalid(
            field,
            format!("must be > -100, got {rate_pct}"),
        ));
    }
    Ok(rate_pct)
}
