//! `sk-opt`: runs a full solve and turns the raw solution into a [`Plan`].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`builder`]   | `OptimizerBuilder`                                        |
//! | [`optimizer`] | `Optimizer`: build, solve, extract; parameter sweeps     |
//! | [`extract`]   | `Plan`, `Allocation`, `ResourceLedger`, `extract`         |
//! | [`observer`]  | `SolveObserver` trait, `NoopObserver`, `LogCapture`       |
//! | [`error`]     | `OptError`, `OptErrorKind`, `OptResult<T>`                |
//!
//! # Feature flags
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on result types and parameters  |
//! | `parallel` | `Optimizer::solve_many` runs on Rayon's thread pool       |
//!
//! # Example
//!
//! ```rust,ignore
//! let actions = load_actions_csv("actions.csv")?;
//! let plan = Optimizer::standard().solve(&actions, &PlanParams::default())?;
//! for (name, runs) in plan.actions() {
//!     println!("{name}: {runs}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod extract;
pub mod observer;
pub mod optimizer;


pub use builder::OptimizerBuilder;
pub use error::{OptError, OptErrorKind, OptResult};
pub use extract::{Allocation, Plan, ResourceLedger, extract};
pub use observer::{LogCapture, NoopObserver, SolveObserver};
pub use optimizer::Optimizer;
