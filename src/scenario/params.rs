//! Scenario input parameters

use serde::{Deserialize, Serialize};

use crate::error::{ensure_horizon, ensure_non_negative, CalculatorError, Result};
use crate::rates::{PeriodicRate, PERIODS_PER_YEAR};

/// Horizon used when none is given
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Longest horizon offered by the front end
pub const MAX_HORIZON_YEARS: u32 = 50;

/// Longest horizon the engine and solver accept
pub const MAX_HORIZON_MONTHS: u32 = MAX_HORIZON_YEARS * PERIODS_PER_YEAR;

/// Inputs for a single projection run
///
/// Rates are annual percentages (12.0 = 12% a year). Stored scenarios written
/// before the benchmark existed deserialize with a benchmark rate of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Lump sum invested at month 0
    pub initial_capital: f64,

    /// Contribution added at the end of each month
    pub monthly_contribution: f64,

    /// Annual rate of the investment, in percent
    pub annual_rate: f64,

    /// Annual rate of the reference benchmark, in percent
    #[serde(default)]
    pub benchmark_annual_rate: f64,

    /// Number of months to project
    pub horizon_months: u32,
}

impl ScenarioParameters {
    pub fn new(
        initial_capital: f64,
        monthly_contribution: f64,
        annual_rate: f64,
        benchmark_annual_rate: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            initial_capital,
            monthly_contribution,
            annual_rate,
            benchmark_annual_rate,
            horizon_months,
        }
    }

    /// Build parameters with the horizon given in whole years
    pub fn from_years(
        initial_capital: f64,
        monthly_contribution: f64,
        annual_rate: f64,
        benchmark_annual_rate: f64,
        years: u32,
    ) -> Self {
        Self::new(
            initial_capital,
            monthly_contribution,
            annual_rate,
            benchmark_annual_rate,
            years.saturating_mul(PERIODS_PER_YEAR),
        )
    }

    /// Check every field, reporting the first one out of range
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("initial_capital", self.initial_capital)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)?;
        ensure_non_negative("annual_rate", self.annual_rate)?;
        ensure_non_negative("benchmark_annual_rate", self.benchmark_annual_rate)?;
        ensure_horizon(self.horizon_months)
    }

    pub fn periodic_rate(&self) -> Result<PeriodicRate> {
        PeriodicRate::from_annual_percent(self.annual_rate)
    }

    pub fn benchmark_periodic_rate(&self) -> Result<PeriodicRate> {
        PeriodicRate::from_annual_percent(self.benchmark_annual_rate)
            .map_err(|err| match err {
                CalculatorError::InvalidParameter { reason, .. } => {
                    CalculatorError::invalid("benchmark_annual_rate", reason)
                }
                other => other,
            })
    }

    /// Capital plus every contribution made through `month`
    pub fn cumulative_contribution(&self, month: u32) -> f64 {
        self.initial_capital + self.monthly_contribution * month as f64
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::from_years(0.0, 0.0, 0.0, 0.0, DEFAULT_HORIZON_YEARS)
    }
}
