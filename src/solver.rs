//! Reverse solve: the monthly contribution needed to reach a target value
//!
//! Inverts the annuity future-value formula
//! `FV = P*(1+i)^n + PMT*(((1+i)^n - 1)/i)` for `PMT` in closed form.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_horizon, ensure_non_negative, CalculatorError, Result};
use crate::rates::PeriodicRate;
use crate::scenario::ScenarioParameters;

/// Outcome of a reverse solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReverseSolveResult {
    /// Contribution per month, `None` when the target is met without one
    pub required_monthly_contribution: Option<f64>,

    /// Initial capital growth alone already reaches the target
    pub feasible_without_additional_contribution: bool,
}

impl ReverseSolveResult {
    fn required(contribution: f64) -> Self {
        Self {
            required_monthly_contribution: Some(contribution),
            feasible_without_additional_contribution: false,
        }
    }

    fn already_feasible() -> Self {
        Self {
            required_monthly_contribution: None,
            feasible_without_additional_contribution: true,
        }
    }
}

/// Contribution needed to grow `initial_capital` into `target_value`
///
/// Returns `Ok(None)` when `target_value <= 0`, meaning no solve was asked
/// for. A zero periodic rate uses the linear form `(FV - P) / n`.
pub fn solve_required_contribution(
    target_value: f64,
    initial_capital: f64,
    periodic_rate: PeriodicRate,
    horizon_months: u32,
) -> Result<Option<ReverseSolveResult>> {
    if !target_value.is_finite() {
        return Err(CalculatorError::invalid(
            "target_value",
            format!("must be finite, got {}", target_value),
        ));
    }
    ensure_non_negative("initial_capital", initial_capital)?;
    ensure_non_negative("periodic_rate", periodic_rate.value())?;
    ensure_horizon(horizon_months)?;

    if target_value <= 0.0 {
        return Ok(None);
    }

    let n = horizon_months as f64;
    let pmt = if periodic_rate.is_zero() {
        (target_value - initial_capital) / n
    } else {
        let i = periodic_rate.value();
        let growth = periodic_rate.growth_factor(horizon_months);
        if !growth.is_finite() {
            return Err(CalculatorError::Overflow("growth factor"));
        }
        (target_value - initial_capital * growth) / ((growth - 1.0) / i)
    };

    if !pmt.is_finite() {
        return Err(CalculatorError::Overflow("required monthly contribution"));
    }

    if pmt < 0.0 {
        warn!(
            "Target {:.2} is reached by initial capital {:.2} alone over {} months",
            target_value, initial_capital, horizon_months
        );
        return Ok(Some(ReverseSolveResult::already_feasible()));
    }

    Ok(Some(ReverseSolveResult::required(pmt)))
}

/// Reverse solve using a scenario's capital, rate and horizon
pub fn solve_for_scenario(
    params: &ScenarioParameters,
    target_value: f64,
) -> Result<Option<ReverseSolveResult>> {
    params.validate()?;
    solve_required_contribution(
        target_value,
        params.initial_capital,
        params.periodic_rate()?,
        params.horizon_months,
    )
}
