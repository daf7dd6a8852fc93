//! Named-scenario persistence
//!
//! The projection engine never touches a store. Front ends receive one and
//! use it to save and reload the parameters a user has entered.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::params::ScenarioParameters;
use crate::error::{CalculatorError, Result};

/// Default file used by `JsonFileStore`
pub const DEFAULT_STORE_PATH: &str = "scenarios.json";

/// Key-value storage of scenarios by name
pub trait ScenarioStore {
    /// Insert or replace a scenario
    fn save(&mut self, name: &str, params: ScenarioParameters) -> Result<()>;

    /// Fetch a scenario, `NotFound` if absent
    fn load(&self, name: &str) -> Result<ScenarioParameters>;

    /// Remove a scenario, `NotFound` if absent
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Names of all stored scenarios, sorted
    fn list(&self) -> Result<Vec<String>>;
}

/// Trim a scenario name and reject it if nothing is left
fn checked_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::invalid("name", "scenario name must not be blank"));
    }
    Ok(trimmed)
}

/// In-process store backed by a sorted map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scenarios: BTreeMap<String, ScenarioParameters>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl ScenarioStore for MemoryStore {
    fn save(&mut self, name: &str, params: ScenarioParameters) -> Result<()> {
        let name = checked_name(name)?;
        self.scenarios.insert(name.to_string(), params);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ScenarioParameters> {
        let name = checked_name(name)?;
        self.scenarios
            .get(name)
            .copied()
            .ok_or_else(|| CalculatorError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let name = checked_name(name)?;
        self.scenarios
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CalculatorError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.scenarios.keys().cloned().collect())
    }
}

/// Store holding every scenario in one pretty-printed JSON object
///
/// The file is read on every call and rewritten on every mutation, so two
/// handles on the same path always observe each other's changes. A missing
/// file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, ScenarioParameters>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Scenario file {} does not exist yet", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, scenarios: &BTreeMap<String, ScenarioParameters>) -> Result<()> {
        let json = serde_json::to_string_pretty(scenarios)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl ScenarioStore for JsonFileStore {
    fn save(&mut self, name: &str, params: ScenarioParameters) -> Result<()> {
        let name = checked_name(name)?;
        let mut scenarios = self.read_all()?;
        scenarios.insert(name.to_string(), params);
        self.write_all(&scenarios)?;
        info!("Saved scenario '{}' to {}", name, self.path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<ScenarioParameters> {
        let name = checked_name(name)?;
        self.read_all()?
            .remove(name)
            .ok_or_else(|| CalculatorError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let name = checked_name(name)?;
        let mut scenarios = self.read_all()?;
        if scenarios.remove(name).is_none() {
            return Err(CalculatorError::NotFound(name.to_string()));
        }
        self.write_all(&scenarios)?;
        info!("Deleted scenario '{}' from {}", name, self.path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.read_all()?.into_keys().collect())
    }
}
