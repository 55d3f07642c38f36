//! `sk-input`: turns raw per-action columns into a validated [`ActionTable`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`action`]  | `ActionSpec`, `ActionTable`                               |
//! | [`params`]  | `validate_params`                                         |
//! | [`loader`]  | `load_actions_csv`, `load_actions_reader`, wide-sheet variants |
//! | [`error`]   | `InputError`, `InputErrorKind`, `InputResult<T>`          |
//!
//! Every check runs before any model is built, and a failure aborts the whole
//! call: there is no partially validated table.

pub mod action;
pub mod error;
pub mod loader;
pub mod params;


pub use action::{ActionSpec, ActionTable};
pub use error::{InputError, InputErrorKind, InputResult};
pub use loader::{load_actions_csv, load_actions_reader, load_actions_wide_csv, load_actions_wide_reader};
pub use params::{MAX_HOURS_PER_DAY, validate_params};
