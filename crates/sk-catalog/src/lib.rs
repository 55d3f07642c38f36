//! `sk-catalog`: static domain data shared read-only by every solve.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`tables`]   | the raw constant matrices                                |
//! | [`catalog`]  | `Catalog` and its accessors, `Catalog::standard()`       |
//!
//! # Matrix orientation
//!
//! Yield matrices are stored resource-major (`[resource][expedition]`), the
//! same orientation as the constraint rows they feed.  A positive entry is a
//! gain, a negative entry a cost.  Sleep yields are per day; the model scales
//! them by the number of planned days.

pub mod catalog;
pub mod tables;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use tables::{NUM_EXPEDS, NUM_GROUPS, NUM_SHOP_ITEMS, SHORT_EXPEDS};
