//! The `PlanWriter` trait implemented by all plan writers.

use sk_opt::Plan;

use crate::{AllocationRow, LedgerRow, OutputResult, SummaryRow};

/// Trait implemented by plan output backends.
pub trait PlanWriter {
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Write a batch of allocation rows.
    fn write_allocation(&mut self, rows: &[AllocationRow]) -> OutputResult<()>;

    fn write_ledger(&mut self, rows: &[LedgerRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every part of `plan`.
    fn write_plan(&mut self, plan: &Plan) -> OutputResult<()> {
        self.write_summary(&SummaryRow::from_plan(plan))?;
        self.write_allocation(&AllocationRow::from_plan(plan))?;
        self.write_ledger(&LedgerRow::from_ledger(&plan.ledger))
    }
}
