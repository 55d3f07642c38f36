//! `PlanOutputObserver<W>`: bridges `SolveObserver` to a `PlanWriter`.

use sk_opt::{Plan, SolveObserver};

use crate::writer::PlanWriter;
use crate::{OutputError, OutputResult};

/// A [`SolveObserver`] that writes every solved plan to any [`PlanWriter`].
///
/// Errors from the writer are stored internally because `SolveObserver`
/// methods have no return value.  After the solve returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct PlanOutputObserver<W: PlanWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: PlanWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PlanWriter> SolveObserver for PlanOutputObserver<W> {
    fn on_solved(&mut self, plan: &Plan) {
        let result = self.writer.write_plan(plan).and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
