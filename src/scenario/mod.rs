//! Scenario parameters, named-scenario storage and batch runs

mod params;
mod runner;
pub mod store;

pub use params::{ScenarioParameters, DEFAULT_HORIZON_YEARS, MAX_HORIZON_MONTHS, MAX_HORIZON_YEARS};
pub use runner::{ScenarioOutcome, ScenarioRunner};
pub use store::{JsonFileStore, MemoryStore, ScenarioStore, DEFAULT_STORE_PATH};
