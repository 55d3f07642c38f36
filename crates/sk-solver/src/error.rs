use thiserror::Error;

use crate::SolveStatus;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("model has no feasible solution")]
    Infeasible,

    #[error("model is unbounded: the objective can grow without limit")]
    Unbounded,

    #[error("{backend} failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} could not be run: {message}")]
    Unavailable {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} returned {got} values for {expected} variables")]
    ValueCount {
        backend:  &'static str,
        expected: usize,
        got:      usize,
    },
}

impl SolverError {
    /// The solve status this error corresponds to.
    pub fn status(&self) -> SolveStatus {
        match self {
            SolverError::Infeasible => SolveStatus::Infeasible,
            SolverError::Unbounded  => SolveStatus::Unbounded,
            _                       => SolveStatus::Error,
        }
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
