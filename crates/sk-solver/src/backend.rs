//! The `LpBackend` trait: the one seam between the model and any engine.

use std::fmt;

use sk_model::{LpModel, VarId};

use crate::SolverResult;

/// Final status of a solve.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolveStatus::Optimal    => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded  => "unbounded",
            SolveStatus::Error      => "error",
        })
    }
}

/// Raw values straight from the engine, before any snapping or rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSolution {
    pub status:    SolveStatus,
    /// One value per model variable, indexed by [`VarId`].
    pub values:    Vec<f64>,
    /// Objective evaluated at `values`.
    pub objective: f64,
}

impl RawSolution {
    #[inline]
    pub fn value(&self, var: VarId) -> f64 {
        self.values[var.index()]
    }
}

/// Diagnostic lines produced while solving.
///
/// Lines are for display only; nothing reads them back into the solution.
#[derive(Clone, Debug, Default)]
pub struct SolverLog {
    lines: Vec<String>,
}

impl SolverLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// A linear programming engine.
///
/// Implementations accept an objective plus linear (in)equality constraints
/// over bounded continuous variables and return a status and one value per
/// variable.  Any engine with that capability can be substituted without
/// touching the model builder.
///
/// # Thread safety
///
/// Parameter sweeps may call `solve` from several threads at once, so
/// implementations must be `Send + Sync` and keep per-solve state local.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysInfeasible;
///
/// impl LpBackend for AlwaysInfeasible {
///     fn name(&self) -> &'static str { "always-infeasible" }
///     fn solve(&self, _: &LpModel, _: &mut SolverLog) -> SolverResult<RawSolution> {
///         Err(SolverError::Infeasible)
///     }
/// }
/// ```
pub trait LpBackend: Send + Sync {
    /// Short engine name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Solve `model`, appending any engine diagnostics to `log`.
    fn solve(&self, model: &LpModel, log: &mut SolverLog) -> SolverResult<RawSolution>;
}

impl<B: LpBackend + ?Sized> LpBackend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, model: &LpModel, log: &mut SolverLog) -> SolverResult<RawSolution> {
        (**self).solve(model, log)
    }
}
