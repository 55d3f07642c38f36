//! `sk-model`: builds the allocation linear program from validated inputs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`lp`]       | `LpModel`, `Variable`, `LinExpr`, `Constraint`, `Relation`, `Sense` |
//! | [`layout`]   | `VarLayout`: where each decision variable lives          |
//! | [`builder`]  | `ModelBuilder`, `BuiltModel`                              |
//!
//! # Decision variables
//!
//! ```text
//! action[i]       i < N    ≥ 0
//! exped_run[e]    e < 16   0 ≤ · ≤ active budget (hours)
//! exped_off[e]    e < 16   0 ≤ · ≤ inactive budget (hours)
//! exped_sleep[e]  e < 16   ≥ 0   (slot-uses; three in total)
//! shop[s]         s < 6    ≥ 0
//! ```
//!
//! The objective maximises `Σ reward[i] · action[i]`.  The special bonus is a
//! constant and is added by the result extractor instead.
//!
//! `LpModel` knows nothing about any solver; backends in `sk-solver` translate
//! it into their own representation.

pub mod builder;
pub mod layout;
pub mod lp;

#[cfg(test)]
mod tests;

pub use builder::{BuiltModel, ModelBuilder};
pub use layout::VarLayout;
pub use lp::{Constraint, LinExpr, LpModel, Relation, Sense, VarId, Variable};
