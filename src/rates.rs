//! Annual to monthly rate conversion
//!
//! Rates are converted by compound equivalence: twelve months at the periodic
//! rate grow exactly as much as one year at the annual rate.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};

/// Number of compounding periods in a year
pub const PERIODS_PER_YEAR: u32 = 12;

/// Monthly-equivalent rate as a decimal (0.01 = 1% per month)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodicRate(f64);

impl PeriodicRate {
    pub const ZERO: PeriodicRate = PeriodicRate(0.0);

    /// Convert an annual rate in percent: (1 + annual/100)^(1/12) - 1
    pub fn from_annual_percent(annual_rate_percent: f64) -> Result<Self> {
        ensure_non_negative("annual_rate", annual_rate_percent)?;
        if annual_rate_percent == 0.0 {
            return Ok(Self::ZERO);
        }
        let periodic = (1.0 + annual_rate_percent / 100.0).powf(1.0 / PERIODS_PER_YEAR as f64) - 1.0;
        Ok(PeriodicRate(periodic))
    }

    /// Wrap an already-periodic decimal rate
    pub fn from_decimal(rate: f64) -> Result<Self> {
        ensure_non_negative("periodic_rate", rate)?;
        Ok(PeriodicRate(rate))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Compound growth over `months` periods: (1 + i)^n
    pub fn growth_factor(self, months: u32) -> f64 {
        match i32::try_from(months) {
            Ok(n) => (1.0 + self.0).powi(n),
            Err(_) => (1.0 + self.0).powf(months as f64),
        }
    }

    /// Effective annual rate in percent, the inverse of `from_annual_percent`
    pub fn annual_percent(self) -> f64 {
        (self.growth_factor(PERIODS_PER_YEAR) - 1.0) * 100.0
    }
}

/// Convert an annual nominal rate in percent to its monthly equivalent
pub fn to_periodic_rate(annual_rate_percent: f64) -> Result<PeriodicRate> {
    PeriodicRate::from_annual_percent(annual_rate_percent)
}
