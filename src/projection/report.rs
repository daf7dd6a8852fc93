//! CSV export of a projection series

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use super::series::{ProjectionPoint, ProjectionSeries};

/// One exported row; column names are the CSV header
#[derive(Debug, Serialize)]
struct CsvRow {
    month: u32,
    balance: f64,
    total_contributed: f64,
    gain: f64,
    benchmark_balance: f64,
}

impl From<&ProjectionPoint> for CsvRow {
    fn from(point: &ProjectionPoint) -> Self {
        Self {
            month: point.month,
            balance: point.balance,
            total_contributed: point.cumulative_contribution,
            gain: point.gain,
            benchmark_balance: point.benchmark_balance,
        }
    }
}

/// Write the series as CSV to any writer, header first
pub fn write_csv<W: Write>(writer: W, series: &ProjectionSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in series {
        csv_writer.serialize(CsvRow::from(point))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the series as CSV to a file, replacing it if present
pub fn write_csv_file<P: AsRef<Path>>(path: P, series: &ProjectionSeries) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, series)
}
