use thiserror::Error;

/// Coarse classification of an [`InputError`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputErrorKind {
    /// Missing data or mismatched dimensions.
    Shape,
    /// A value outside its allowed range.
    Range,
    /// Unreadable or malformed source file.
    Format,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("at least one action is required")]
    NoActions,

    #[error("{what} length {got} does not match action count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("consumption row {row} has {got} entries, expected {expected}")]
    RowWidth {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("max share of action {action:?} is {value}, must lie in [0, 1]")]
    ShareOutOfRange { action: String, value: f64 },

    #[error("{what} is not a finite number")]
    NotFinite { what: String },

    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    #[error("active, inactive, and rest hours sum to {total} h, more than {limit} h per day")]
    DayTooLong { total: f64, limit: f64 },

    #[error("action table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub fn kind(&self) -> InputErrorKind {
        match self {
            InputError::NoActions
            | InputError::LengthMismatch { .. }
            | InputError::RowWidth { .. } => InputErrorKind::Shape,
            InputError::ShareOutOfRange { .. }
            | InputError::NotFinite { .. }
            | InputError::Negative { .. }
            | InputError::DayTooLong { .. } => InputErrorKind::Range,
            InputError::Parse(_) | InputError::Io(_) => InputErrorKind::Format,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
