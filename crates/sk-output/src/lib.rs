//! `sk-output`: writers for solved plans.
//!
//! | Writer        | Files created                                        |
//! |---------------|------------------------------------------------------|
//! | [`CsvWriter`] | `summary.csv`, `allocation.csv`, `ledger.csv`        |
//!
//! Writers implement [`PlanWriter`] and can be driven directly or through
//! [`PlanOutputObserver`], which implements `sk_opt::SolveObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sk_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = PlanOutputObserver::new(writer);
//! optimizer.solve_observed(&actions, &params, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{AllocationRow, LedgerRow, SummaryRow};
pub use writer::PlanWriter;
