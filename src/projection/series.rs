//! Projection output structures

use serde::{Deserialize, Serialize};

/// Balances and contributions at the end of one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub balance: f64,
    pub cumulative_contribution: f64,
    /// Always `balance - cumulative_contribution`
    pub gain: f64,
    pub benchmark_balance: f64,
}

/// Month-by-month trajectory, month 0 through the horizon inclusive
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn with_capacity(horizon_months: u32) -> Self {
        Self {
            points: Vec::with_capacity(horizon_months as usize + 1),
        }
    }

    pub fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn get(&self, month: u32) -> Option<&ProjectionPoint> {
        self.points.get(month as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    /// Final-month figures
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();
        let final_balance = last.map(|p| p.balance).unwrap_or(0.0);
        let final_benchmark_balance = last.map(|p| p.benchmark_balance).unwrap_or(0.0);

        ProjectionSummary {
            months: last.map(|p| p.month).unwrap_or(0),
            final_balance,
            total_contributed: last.map(|p| p.cumulative_contribution).unwrap_or(0.0),
            total_gain: last.map(|p| p.gain).unwrap_or(0.0),
            final_benchmark_balance,
            outperformance: final_balance - final_benchmark_balance,
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// End-of-horizon figures for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_balance: f64,
    pub total_contributed: f64,
    pub total_gain: f64,
    pub final_benchmark_balance: f64,
    /// Final balance minus final benchmark balance
    pub outperformance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionSeries::default().summary();
        assert_eq!(summary.months, 0);
        assert_eq!(summary.final_balance, 0.0);
    }

    #[test]
    fn test_summary_uses_last_point() {
        let mut series = ProjectionSeries::with_capacity(1);
        series.push(ProjectionPoint {
            month: 0,
            balance: 100.0,
            cumulative_contribution: 100.0,
            gain: 0.0,
            benchmark_balance: 100.0,
        });
        series.push(ProjectionPoint {
            month: 1,
            balance: 120.0,
            cumulative_contribution: 110.0,
            gain: 10.0,
            benchmark_balance: 115.0,
        });

        let summary = series.summary();
        assert_eq!(summary.months, 1);
        assert_eq!(summary.total_gain, 10.0);
        assert_eq!(summary.outperformance, 5.0);
    }
}
