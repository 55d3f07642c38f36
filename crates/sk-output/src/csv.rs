//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `summary.csv`
//! - `allocation.csv`
//! - `ledger.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{AllocationRow, LedgerRow, OutputResult, SummaryRow};

/// Writes a plan to three CSV files.
pub struct CsvWriter {
    summary:    Writer<File>,
    allocation: Writer<File>,
    ledger:     Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["reward", "objective", "status"])?;

        let mut allocation = Writer::from_path(dir.join("allocation.csv"))?;
        allocation.write_record(["kind", "index", "label", "value"])?;

        let mut ledger = Writer::from_path(dir.join("ledger.csv"))?;
        ledger.write_record(LedgerRow::headers())?;

        Ok(Self {
            summary,
            allocation,
            ledger,
            finished: false,
        })
    }
}

impl PlanWriter for CsvWriter {
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.reward.to_string(),
            row.objective.to_string(),
            row.status.clone(),
        ])?;
        Ok(())
    }

    fn write_allocation(&mut self, rows: &[AllocationRow]) -> OutputResult<()> {
        for row in rows {
            self.allocation.write_record(&[
                row.kind.to_owned(),
                row.index.to_string(),
                row.label.clone(),
                row.value.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_ledger(&mut self, rows: &[LedgerRow]) -> OutputResult<()> {
        for row in rows {
            let mut record = vec![row.row.to_owned()];
            record.extend(row.values.iter().map(f64::to_string));
            self.ledger.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summary.flush()?;
        self.allocation.flush()?;
        self.ledger.flush()?;
        Ok(())
    }
}
