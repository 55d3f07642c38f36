//! `sk-solver`: hands an [`LpModel`](sk_model::LpModel) to a linear
//! programming engine and reads back one value per variable.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`backend`]   | `LpBackend` trait, `RawSolution`, `SolveStatus`, `SolverLog` |
//! | [`microlp`]   | `MicroLpBackend`: `good_lp` with the pure-Rust microlp engine |
//! | [`adapter`]   | `solve_model`: panic isolation, result checks, logging   |
//! | [`error`]     | `SolverError`, `SolverResult<T>`                          |
//!
//! A failed solve is always an error: no backend result is ever replaced by
//! zeros.

pub mod adapter;
pub mod backend;
pub mod error;
pub mod microlp;

#[cfg(test)]
mod tests;

pub use adapter::solve_model;
pub use backend::{LpBackend, RawSolution, SolveStatus, SolverLog};
pub use error::{SolverError, SolverResult};
pub use microlp::MicroLpBackend;
