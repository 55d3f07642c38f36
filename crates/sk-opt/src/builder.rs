//! Fluent builder for constructing an [`Optimizer`].

use sk_catalog::Catalog;
use sk_solver::LpBackend;

use crate::Optimizer;

/// Fluent builder for [`Optimizer<B>`].
///
/// # Required inputs
///
/// - `B: LpBackend`: the engine (e.g. [`sk_solver::MicroLpBackend`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                  |
/// |-----------------|--------------------------|
/// | `.catalog(c)`   | [`Catalog::standard()`]  |
///
/// # Example
///
/// ```rust,ignore
/// let opt = OptimizerBuilder::new(MicroLpBackend).build();
/// let plan = opt.solve(&actions, &PlanParams::default())?;
/// println!("reward {}", plan.reward);
/// ```
pub struct OptimizerBuilder<'c, B: LpBackend> {
    backend: B,
    catalog: &'c Catalog,
}

impl<B: LpBackend> OptimizerBuilder<'static, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            catalog: Catalog::standard(),
        }
    }
}

impl<'c, B: LpBackend> OptimizerBuilder<'c, B> {
    /// Solve against a non-standard catalog.  The catalog is borrowed for the
    /// optimizer's whole lifetime and never copied per solve.
    pub fn catalog<'n>(self, catalog: &'n Catalog) -> OptimizerBuilder<'n, B> {
        OptimizerBuilder {
            backend: self.backend,
            catalog,
        }
    }

    pub fn build(self) -> Optimizer<'c, B> {
        log::debug!("optimizer ready: backend {}", self.backend.name());
        Optimizer {
            backend: self.backend,
            catalog: self.catalog,
        }
    }
}
