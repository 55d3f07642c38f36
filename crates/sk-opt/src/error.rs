use sk_input::{InputError, InputErrorKind};
use sk_solver::SolverError;
use thiserror::Error;

/// What went wrong, at the granularity a caller can act on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OptErrorKind {
    /// Missing data or mismatched dimensions.  No model was built.
    InputShape,
    /// A value outside its allowed range.  No model was built.
    InputRange,
    /// The action source could not be read or parsed.
    InputFormat,
    /// The model has no feasible allocation.
    Infeasible,
    Unbounded,
    /// The backend could not be run at all.
    SolverUnavailable,
    /// The backend ran and failed for another reason.
    Solver,
}

#[derive(Debug, Error)]
pub enum OptError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("no feasible allocation exists for these inputs")]
    Infeasible,

    #[error("allocation is unbounded; check for actions with a reward and no cost")]
    Unbounded,

    #[error("solver unavailable: {0}")]
    SolverUnavailable(SolverError),

    #[error("solver error: {0}")]
    Solver(SolverError),
}

impl From<SolverError> for OptError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::Infeasible          => OptError::Infeasible,
            SolverError::Unbounded           => OptError::Unbounded,
            SolverError::Unavailable { .. }  => OptError::SolverUnavailable(err),
            SolverError::Backend { .. }
            | SolverError::ValueCount { .. } => OptError::Solver(err),
        }
    }
}

impl OptError {
    pub fn kind(&self) -> OptErrorKind {
        match self {
            OptError::Input(e) => match e.kind() {
                InputErrorKind::Shape  => OptErrorKind::InputShape,
                InputErrorKind::Range  => OptErrorKind::InputRange,
                InputErrorKind::Format => OptErrorKind::InputFormat,
            },
            OptError::Infeasible           => OptErrorKind::Infeasible,
            OptError::Unbounded            => OptErrorKind::Unbounded,
            OptError::SolverUnavailable(_) => OptErrorKind::SolverUnavailable,
            OptError::Solver(_)            => OptErrorKind::Solver,
        }
    }
}

pub type OptResult<T> = Result<T, OptError>;
