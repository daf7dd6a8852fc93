//! Monthly compound growth projection against a benchmark

use log::debug;
use rayon::prelude::*;

use crate::error::{CalculatorError, Result};
use crate::rates::PeriodicRate;
use crate::scenario::ScenarioParameters;
use super::series::ProjectionSeries;
use super::state::ProjectionState;

/// Projection engine for one validated scenario
///
/// Both balances share the same contribution timing and differ only in the
/// rate they grow at.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ScenarioParameters,
    rate: PeriodicRate,
    benchmark_rate: PeriodicRate,
}

impl ProjectionEngine {
    /// Validate the scenario and convert its annual rates
    pub fn new(params: ScenarioParameters) -> Result<Self> {
        params.validate()?;
        let rate = params.periodic_rate()?;
        let benchmark_rate = params.benchmark_periodic_rate()?;
        ensure_final_balance_finite(&params, rate, "balance")?;
        ensure_final_balance_finite(&params, benchmark_rate, "benchmark balance")?;
        Ok(Self {
            params,
            rate,
            benchmark_rate,
        })
    }

    pub fn params(&self) -> &ScenarioParameters {
        &self.params
    }

    pub fn periodic_rate(&self) -> PeriodicRate {
        self.rate
    }

    pub fn benchmark_periodic_rate(&self) -> PeriodicRate {
        self.benchmark_rate
    }

    /// Run the projection over months 0..=horizon
    pub fn project(&self) -> ProjectionSeries {
        let params = &self.params;
        let mut series = ProjectionSeries::with_capacity(params.horizon_months);
        let mut state = ProjectionState::from_params(params);

        series.push(state.to_point(params));
        for _month in 1..=params.horizon_months {
            state.advance_month(params.monthly_contribution, self.rate, self.benchmark_rate);
            series.push(state.to_point(params));
        }

        debug!(
            "Projected {} months at {:.6}/month (benchmark {:.6}/month): final balance {:.2}",
            params.horizon_months,
            self.rate.value(),
            self.benchmark_rate.value(),
            state.balance,
        );

        series
    }
}

/// Balances never decrease and stay below `(P + PMT*n) * (1+i)^n`, so a
/// finite bound keeps every point of the series finite.
fn ensure_final_balance_finite(
    params: &ScenarioParameters,
    rate: PeriodicRate,
    quantity: &'static str,
) -> Result<()> {
    let n = params.horizon_months;
    let bound = (params.initial_capital + params.monthly_contribution * n as f64) * rate.growth_factor(n);
    if !bound.is_finite() {
        return Err(CalculatorError::Overflow(quantity));
    }
    Ok(())
}

/// Validate and project a single scenario
pub fn project(params: &ScenarioParameters) -> Result<ProjectionSeries> {
    Ok(ProjectionEngine::new(*params)?.project())
}

/// Project many independent scenarios in parallel, results in input order
pub fn project_batch(scenarios: &[ScenarioParameters]) -> Vec<Result<ProjectionSeries>> {
    scenarios.par_iter().map(project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params() -> ScenarioParameters {
        ScenarioParameters::new(1000.0, 100.0, 12.0, 10.0, 1)
    }

    #[test]
    fn test_projection_runs() {
        let series = project(&ScenarioParameters::from_years(1000.0, 100.0, 12.0, 10.0, 10)).unwrap();
        assert_eq!(series.len(), 121);
        assert_eq!(series.first().unwrap().month, 0);
        assert_eq!(series.last().unwrap().month, 120);
    }

    #[test]
    fn test_one_month_twelve_percent() {
        let series = project(&test_params()).unwrap();
        let month_1 = series.get(1).unwrap();

        let expected = 1000.0 * 1.12_f64.powf(1.0 / 12.0) + 100.0;
        assert_relative_eq!(month_1.balance, expected, epsilon = 1e-9);
        assert!((month_1.balance - 1109.49).abs() < 0.01);
        assert_eq!(month_1.cumulative_contribution, 1100.0);
        assert!((month_1.gain - 9.49).abs() < 0.01);

        let expected_benchmark = 1000.0 * 1.10_f64.powf(1.0 / 12.0) + 100.0;
        assert_relative_eq!(month_1.benchmark_balance, expected_benchmark, epsilon = 1e-9);
    }

    #[test]
    fn test_month_zero_is_initial_capital() {
        let series = project(&test_params()).unwrap();
        let start = series.first().unwrap();
        assert_eq!(start.balance, 1000.0);
        assert_eq!(start.cumulative_contribution, 1000.0);
        assert_eq!(start.benchmark_balance, 1000.0);
        assert_eq!(start.gain, 0.0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let params = ScenarioParameters::new(250.0, 75.0, 0.0, 0.0, 36);
        let series = project(&params).unwrap();
        for point in &series {
            assert_eq!(point.balance, 250.0 + 75.0 * point.month as f64);
            assert_eq!(point.gain, 0.0);
            assert_eq!(point.benchmark_balance, point.balance);
        }
    }

    #[test]
    fn test_matches_closed_form() {
        let params = ScenarioParameters::from_years(5000.0, 200.0, 8.0, 0.0, 20);
        let engine = ProjectionEngine::new(params).unwrap();
        let series = engine.project();

        let i = engine.periodic_rate().value();
        let n = params.horizon_months;
        let growth = (1.0 + i).powi(n as i32);
        let closed_form = 5000.0 * growth + 200.0 * (growth - 1.0) / i;
        assert_relative_eq!(series.last().unwrap().balance, closed_form, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = ScenarioParameters::new(1000.0, 100.0, -1.0, 0.0, 12);
        let err = project(&params).unwrap_err();
        assert_eq!(err.field(), Some("annual_rate"));

        let params = ScenarioParameters::new(1000.0, 100.0, 1.0, 0.0, 0);
        assert_eq!(project(&params).unwrap_err().field(), Some("horizon_months"));
    }

    #[test]
    fn test_overflowing_rate_rejected() {
        let params = ScenarioParameters::new(1000.0, 100.0, 1e10, 0.0, 600);
        let err = project(&params).unwrap_err();
        assert!(matches!(err, CalculatorError::Overflow("balance")));

        let params = ScenarioParameters::new(1000.0, 100.0, 5.0, 1e10, 600);
        let err = project(&params).unwrap_err();
        assert!(matches!(err, CalculatorError::Overflow("benchmark balance")));
    }

    #[test]
    fn test_highest_accepted_inputs_stay_finite() {
        let params = ScenarioParameters::new(1e9, 1e6, 500.0, 500.0, 600);
        let series = project(&params).unwrap();
        assert!(series.iter().all(|p| p.balance.is_finite() && p.gain.is_finite()));
    }

    #[test]
    fn test_batch_preserves_order() {
        let scenarios = vec![
            ScenarioParameters::new(1000.0, 0.0, 5.0, 0.0, 12),
            ScenarioParameters::new(1000.0, 0.0, -5.0, 0.0, 12),
            ScenarioParameters::new(2000.0, 0.0, 5.0, 0.0, 24),
        ];

        let results = project_batch(&scenarios);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 13);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().len(), 25);
    }

    #[test]
    fn test_deterministic() {
        let params = ScenarioParameters::from_years(1234.5, 67.8, 9.1, 4.5, 30);
        assert_eq!(project(&params).unwrap(), project(&params).unwrap());
    }
}
