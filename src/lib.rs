//! Compound Calculator - monthly compound growth projections
//!
//! This library provides:
//! - Annual to monthly rate conversion by compound equivalence
//! - Month-by-month projection of balance, contributions and gain against a benchmark
//! - Reverse solve for the monthly contribution needed to reach a target value
//! - Named-scenario storage and CSV export for front ends

pub mod error;
pub mod rates;
pub mod projection;
pub mod solver;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use rates::{to_periodic_rate, PeriodicRate};
pub use projection::{project, ProjectionEngine, ProjectionPoint, ProjectionSeries, ProjectionSummary};
pub use solver::{solve_for_scenario, solve_required_contribution, ReverseSolveResult};
pub use scenario::{JsonFileStore, MemoryStore, ScenarioParameters, ScenarioRunner, ScenarioStore};
