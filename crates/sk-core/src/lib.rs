//! `sk-core`: foundational types for the senka allocation optimizer.
//!
//! This crate is a dependency of every other `sk-*` crate.  It has no `sk-*`
//! dependencies and only an optional `serde` externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`resource`]  | `Resource`, `ResourceVec` (the 6-dim flow space)        |
//! | [`ids`]       | `ActionId`, `ExpedId`, `ShopItemId`, `GroupId`          |
//! | [`mode`]      | `ExpedMode` (run / off / sleep)                         |
//! | [`params`]    | `PlanParams` and the budgets derived from it            |
//! | [`numeric`]   | snap-to-zero and display rounding                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod mode;
pub mod numeric;
pub mod params;
pub mod resource;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ActionId, ExpedId, GroupId, ShopItemId};
pub use mode::ExpedMode;
pub use numeric::{DISPLAY_DECIMALS, SNAP_TOLERANCE, round_to, snap_to_zero};
pub use params::{PlanParams, SECS_PER_HOUR, SLOTS};
pub use resource::{DISPLAYED_RESOURCES, NUM_RESOURCES, Resource, ResourceVec};
