//! The call every solve goes through, whichever backend is plugged in.

use std::panic::{AssertUnwindSafe, catch_unwind};

use sk_model::LpModel;

use crate::{LpBackend, RawSolution, SolverError, SolverLog, SolverResult};

/// Absolute slack allowed when re-checking a returned solution.
const CHECK_TOL: f64 = 1e-3;

/// Run `backend` on `model`.
///
/// - A panic inside the backend becomes [`SolverError::Unavailable`].
/// - A solution whose value count differs from the variable count is
///   rejected with [`SolverError::ValueCount`].
/// - A returned solution is re-checked against every row; violations are
///   logged but the values are passed through untouched.
/// - Every outcome is appended to `log` and reported through `log`.
pub fn solve_model<B: LpBackend + ?Sized>(
    backend: &B,
    model:   &LpModel,
    log:     &mut SolverLog,
) -> SolverResult<RawSolution> {
    let name = backend.name();
    log.line(format!(
        "{name}: solving {} ({} variables, {} constraints)",
        model.name,
        model.variables.len(),
        model.constraints.len()
    ));

    let outcome = catch_unwind(AssertUnwindSafe(|| backend.solve(model, log))).unwrap_or_else(|panic| {
        let message = panic
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "backend panicked".to_owned());
        Err(SolverError::Unavailable { backend: name, message })
    });

    match outcome {
        Ok(solution) if solution.values.len() != model.variables.len() => {
            let err = SolverError::ValueCount {
                backend:  name,
                expected: model.variables.len(),
                got:      solution.values.len(),
            };
            log::error!("{err}");
            log.line(err.to_string());
            Err(err)
        }
        Ok(solution) => {
            log::info!("{name}: {} objective {:.4}", solution.status, solution.objective);
            let violated = model.violations(&solution.values, CHECK_TOL);
            if let Some(first) = violated.first() {
                log::warn!("{name}: solution violates {} rows, first {first}", violated.len());
                log.line(format!("{name}: {} rows violated beyond {CHECK_TOL}", violated.len()));
            }
            Ok(solution)
        }
        Err(err) => {
            log::warn!("{name}: {}: {err}", err.status());
            log.line(format!("{name}: status {}", err.status()));
            Err(err)
        }
    }
}
