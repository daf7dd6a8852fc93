//! Batch projection of stored scenarios
//!
//! Loads every scenario from a store, then projects them in parallel.

use crate::error::Result;
use crate::projection::{project_batch, ProjectionSummary};
use super::params::ScenarioParameters;
use super::store::ScenarioStore;

/// Summary of one stored scenario's projection
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub params: ScenarioParameters,
    /// Projection summary, or the validation error for a bad scenario
    pub summary: Result<ProjectionSummary>,
}

/// Runs projections for the scenarios held in a store
///
/// # Example
/// ```ignore
/// let store = JsonFileStore::new("scenarios.json");
/// let runner = ScenarioRunner::new(&store);
/// for outcome in runner.run_all()? {
///     println!("{}: {:?}", outcome.name, outcome.summary);
/// }
/// ```
pub struct ScenarioRunner<'a, S: ScenarioStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ScenarioStore + ?Sized> ScenarioRunner<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Project every stored scenario, sorted by name
    ///
    /// Store failures abort the run; a scenario with invalid parameters is
    /// reported in its own outcome without affecting the others.
    pub fn run_all(&self) -> Result<Vec<ScenarioOutcome>> {
        let names = self.store.list()?;
        let scenarios = names
            .iter()
            .map(|name| self.store.load(name))
            .collect::<Result<Vec<_>>>()?;

        let results = project_batch(&scenarios);

        Ok(names
            .into_iter()
            .zip(scenarios)
            .zip(results)
            .map(|((name, params), result)| ScenarioOutcome {
                name,
                params,
                summary: result.map(|series| series.summary()),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::MemoryStore;

    #[test]
    fn test_scenario_runner_batch() {
        let mut store = MemoryStore::new();
        for (name, rate) in [("low", 3.0), ("mid", 4.0), ("high", 5.0)] {
            store
                .save(name, ScenarioParameters::from_years(10_000.0, 100.0, rate, 0.0, 10))
                .unwrap();
        }

        let outcomes = ScenarioRunner::new(&store).run_all().unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].name, "high");
        assert_eq!(outcomes[2].name, "mid");
        assert_eq!(outcomes[0].params.annual_rate, 5.0);

        // Higher rate should result in higher final balance
        let high = outcomes[0].summary.as_ref().unwrap().final_balance;
        let low = outcomes[1].summary.as_ref().unwrap().final_balance;
        assert!(high > low);
    }

    #[test]
    fn test_invalid_scenario_isolated() {
        let mut store = MemoryStore::new();
        store.save("good", ScenarioParameters::new(100.0, 10.0, 5.0, 0.0, 12)).unwrap();
        store.save("bad", ScenarioParameters::new(100.0, 10.0, 5.0, 0.0, 0)).unwrap();

        let outcomes = ScenarioRunner::new(&store).run_all().unwrap();
        assert!(outcomes[0].summary.is_err());
        assert!(outcomes[1].summary.is_ok());
    }
}
