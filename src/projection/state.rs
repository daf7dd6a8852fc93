//! Running balances carried from one month to the next

use crate::rates::PeriodicRate;
use crate::scenario::ScenarioParameters;
use super::series::ProjectionPoint;

/// Balances of the investment and its benchmark at a point in time
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months elapsed since the start (0 = before any contribution)
    pub month: u32,

    /// Balance growing at the scenario rate
    pub balance: f64,

    /// Balance growing at the benchmark rate, same contributions
    pub benchmark_balance: f64,
}

impl ProjectionState {
    /// Month 0: both balances equal the initial capital
    pub fn from_params(params: &ScenarioParameters) -> Self {
        Self {
            month: 0,
            balance: params.initial_capital,
            benchmark_balance: params.initial_capital,
        }
    }

    /// Grow both balances by one period, then add the monthly contribution
    pub fn advance_month(&mut self, contribution: f64, rate: PeriodicRate, benchmark: PeriodicRate) {
        self.month += 1;
        self.balance = self.balance * (1.0 + rate.value()) + contribution;
        self.benchmark_balance = self.benchmark_balance * (1.0 + benchmark.value()) + contribution;
    }

    /// Snapshot with contribution and gain derived from the current balance
    pub fn to_point(&self, params: &ScenarioParameters) -> ProjectionPoint {
        let cumulative_contribution = params.cumulative_contribution(self.month);
        ProjectionPoint {
            month: self.month,
            balance: self.balance,
            cumulative_contribution,
            gain: self.balance - cumulative_contribution,
            benchmark_balance: self.benchmark_balance,
        }
    }
}
