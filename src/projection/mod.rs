//! Projection engine, output series and CSV export

mod state;
mod engine;
mod series;
pub mod report;

pub use state::ProjectionState;
pub use engine::{project, project_batch, ProjectionEngine};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
pub use report::{write_csv, write_csv_file};
