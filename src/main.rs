//! Compound Calculator CLI
//!
//! Projects scenarios, runs the reverse solver and manages saved scenarios

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use compound_calculator::{
    projection::{write_csv_file, ProjectionEngine, ProjectionSeries},
    scenario::{JsonFileStore, ScenarioParameters, ScenarioRunner, ScenarioStore},
    solver::solve_for_scenario,
};

use crate::cli::{CliArgs, Commands, ScenarioCommand};

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let mut store = JsonFileStore::new(&args.store);

    match args.command {
        Commands::Project { params, scenario, target, csv, rows } => {
            let params = match scenario {
                Some(name) => store
                    .load(&name)
                    .with_context(|| format!("loading scenario '{}'", name))?,
                None => params.to_params(),
            };
            let engine = ProjectionEngine::new(params)?;
            let series = engine.project();

            print_projection(&engine, &series, rows);

            if let Some(target) = target {
                print_reverse_solve(engine.params(), target)?;
            }

            if let Some(path) = csv {
                write_csv_file(&path, &series)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nFull results written to: {}", path.display());
            }
        }
        Commands::Scenario(command) => run_scenario_command(&mut store, command)?,
    }

    Ok(())
}

fn run_scenario_command(store: &mut JsonFileStore, command: ScenarioCommand) -> Result<()> {
    match command {
        ScenarioCommand::Save { name, params } => {
            let params = params.to_params();
            params.validate()?;
            store.save(&name, params)?;
            println!("Scenario '{}' saved", name.trim());
        }
        ScenarioCommand::Load { name } => {
            let params = store.load(&name)?;
            print_params(name.trim(), &params);
        }
        ScenarioCommand::Delete { name } => {
            store.delete(&name)?;
            println!("Scenario '{}' deleted", name.trim());
        }
        ScenarioCommand::List => {
            let names = store.list()?;
            if names.is_empty() {
                println!("No saved scenarios in {}", store.path().display());
            }
            for name in names {
                println!("{}", name);
            }
        }
        ScenarioCommand::Compare => {
            let outcomes = ScenarioRunner::new(&*store).run_all()?;
            println!("{:<24} {:>7} {:>7} {:>16} {:>16} {:>16} {:>16}",
                "Scenario", "Rate %", "Months", "Final value", "Contributed", "Gain", "Benchmark");
            println!("{}", "-".repeat(108));
            for outcome in outcomes {
                match outcome.summary {
                    Ok(s) => println!("{:<24} {:>7.2} {:>7} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
                        outcome.name,
                        outcome.params.annual_rate,
                        s.months,
                        s.final_balance,
                        s.total_contributed,
                        s.total_gain,
                        s.final_benchmark_balance,
                    ),
                    Err(e) => println!("{:<24} invalid: {}", outcome.name, e),
                }
            }
        }
    }
    Ok(())
}

fn print_params(name: &str, params: &ScenarioParameters) {
    println!("Scenario: {}", name);
    println!("  Initial capital:      {:.2}", params.initial_capital);
    println!("  Monthly contribution: {:.2}", params.monthly_contribution);
    println!("  Annual rate:          {:.2}%", params.annual_rate);
    println!("  Benchmark rate:       {:.2}%", params.benchmark_annual_rate);
    println!("  Horizon:              {} months", params.horizon_months);
}

fn print_projection(engine: &ProjectionEngine, series: &ProjectionSeries, rows: usize) {
    let rate = engine.periodic_rate();
    let benchmark = engine.benchmark_periodic_rate();
    println!("Monthly rate: {:.6} ({:.2}% a year)  Benchmark monthly rate: {:.6} ({:.2}% a year)",
        rate.value(),
        rate.annual_percent(),
        benchmark.value(),
        benchmark.annual_percent());
    println!();

    println!("{:>5} {:>16} {:>16} {:>16} {:>16}",
        "Month", "Balance", "Contributed", "Gain", "Benchmark");
    println!("{}", "-".repeat(73));
    for point in series.iter().take(rows) {
        println!("{:>5} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            point.month,
            point.balance,
            point.cumulative_contribution,
            point.gain,
            point.benchmark_balance,
        );
    }
    if series.len() > rows {
        println!("... ({} more months)", series.len() - rows);
    }

    let summary = series.summary();
    println!("\nSummary:");
    println!("  Final value:       {:.2}", summary.final_balance);
    println!("  Total contributed: {:.2}", summary.total_contributed);
    println!("  Gain:              {:.2}", summary.total_gain);
    println!("  Benchmark value:   {:.2}", summary.final_benchmark_balance);
    println!("  Vs benchmark:      {:+.2}", summary.outperformance);
}

fn print_reverse_solve(params: &ScenarioParameters, target: f64) -> Result<()> {
    match solve_for_scenario(params, target)? {
        None => {}
        Some(result) => match result.required_monthly_contribution {
            Some(pmt) if !result.feasible_without_additional_contribution => {
                println!("\nRequired monthly contribution to reach {:.2}: {:.2}", target, pmt);
            }
            _ => println!("\nTarget {:.2} is already reached without additional contributions", target),
        },
    }
    Ok(())
}
