//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use compound_calculator::scenario::{
    ScenarioParameters, DEFAULT_HORIZON_YEARS, DEFAULT_STORE_PATH, MAX_HORIZON_MONTHS,
    MAX_HORIZON_YEARS,
};

#[derive(Parser, Debug)]
#[command(name = "compound-calc", version, about = "Compound growth projections with a benchmark and reverse solver")]
pub struct CliArgs {
    /// JSON file holding saved scenarios
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a scenario month by month
    Project {
        #[command(flatten)]
        params: ScenarioArgs,

        /// Use a saved scenario instead of the parameter flags
        #[arg(long)]
        scenario: Option<String>,

        /// Target final value for the reverse solve
        #[arg(long)]
        target: Option<f64>,

        /// Write the full series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Number of months to print
        #[arg(long, default_value_t = 12)]
        rows: usize,
    },

    /// Manage saved scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommand),
}

#[derive(Subcommand, Debug)]
pub enum ScenarioCommand {
    /// Save or replace a named scenario
    Save {
        name: String,
        #[command(flatten)]
        params: ScenarioArgs,
    },
    /// Show a saved scenario
    Load { name: String },
    /// Delete a saved scenario
    Delete { name: String },
    /// List saved scenario names
    List,
    /// Project every saved scenario and compare final values
    Compare,
}

#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Initial capital
    #[arg(long, default_value_t = 0.0)]
    pub initial: f64,

    /// Monthly contribution
    #[arg(long, default_value_t = 0.0)]
    pub monthly: f64,

    /// Annual rate in percent
    #[arg(long, default_value_t = 0.0)]
    pub rate: f64,

    /// Benchmark annual rate in percent
    #[arg(long, default_value_t = 0.0)]
    pub benchmark_rate: f64,

    /// Horizon in years
    #[arg(
        long,
        default_value_t = DEFAULT_HORIZON_YEARS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_HORIZON_YEARS as i64)
    )]
    pub years: u32,

    /// Horizon in months, overrides --years
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_HORIZON_MONTHS as i64))]
    pub months: Option<u32>,
}

impl ScenarioArgs {
    pub fn to_params(&self) -> ScenarioParameters {
        let params = ScenarioParameters::from_years(
            self.initial,
            self.monthly,
            self.rate,
            self.benchmark_rate,
            self.years,
        );
        match self.months {
            Some(months) => ScenarioParameters { horizon_months: months, ..params },
            None => params,
        }
    }
}
