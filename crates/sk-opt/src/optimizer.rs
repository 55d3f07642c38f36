//! `Optimizer`: one synchronous solve from inputs to [`Plan`].

use sk_catalog::Catalog;
use sk_core::PlanParams;
use sk_input::ActionTable;
use sk_model::ModelBuilder;
use sk_solver::{LpBackend, MicroLpBackend, SolverLog, solve_model};

use crate::{NoopObserver, OptResult, OptimizerBuilder, Plan, SolveObserver, extract};

/// Builds, solves, and extracts a plan.
///
/// # Solve stages
///
/// 1. **Build**: parameters are validated and the LP is emitted.  Invalid
///    inputs fail here and no model exists.
/// 2. **Solve**: the model goes to the backend through
///    [`solve_model`], which turns backend panics into errors.
/// 3. **Extract**: values are snapped, the ledger is computed, and every
///    exposed number is rounded.
///
/// An optimizer holds no per-solve state, so one instance can serve any
/// number of solves, including concurrently.
pub struct Optimizer<'c, B: LpBackend = MicroLpBackend> {
    pub(crate) backend: B,
    pub(crate) catalog: &'c Catalog,
}

impl Optimizer<'static, MicroLpBackend> {
    /// The microlp backend with the standard catalog.
    pub fn standard() -> Self {
        OptimizerBuilder::new(MicroLpBackend).build()
    }
}

impl<'c, B: LpBackend> Optimizer<'c, B> {
    pub fn solve(&self, actions: &ActionTable, params: &PlanParams) -> OptResult<Plan> {
        self.solve_observed(actions, params, &mut NoopObserver)
    }

    /// Solve, reporting each stage to `observer`.
    pub fn solve_observed<O: SolveObserver + ?Sized>(
        &self,
        actions:  &ActionTable,
        params:   &PlanParams,
        observer: &mut O,
    ) -> OptResult<Plan> {
        let result = self.run(actions, params, observer);
        match &result {
            Ok(plan) => observer.on_solved(plan),
            Err(err) => {
                log::debug!("solve failed: {err}");
                observer.on_failed(err);
            }
        }
        result
    }

    fn run<O: SolveObserver + ?Sized>(
        &self,
        actions:  &ActionTable,
        params:   &PlanParams,
        observer: &mut O,
    ) -> OptResult<Plan> {
        let built = ModelBuilder::new(actions, params).catalog(self.catalog).build()?;
        observer.on_model_built(&built.model);

        let mut log = SolverLog::new();
        let raw = solve_model(&self.backend, &built.model, &mut log);
        for line in log.lines() {
            observer.on_solver_log(line);
        }
        let raw = raw?;

        let mut plan = extract(&built, &raw, actions, params, self.catalog);
        plan.solver_log = log.into_lines();
        Ok(plan)
    }

    /// Solve one plan per parameter set against the same actions.
    ///
    /// Results are returned in input order; one failing parameter set does
    /// not affect the others.  With the `parallel` feature the solves run on
    /// Rayon's thread pool.
    pub fn solve_many(&self, actions: &ActionTable, params: &[PlanParams]) -> Vec<OptResult<Plan>> {
        log::info!("solving {} parameter sets", params.len());

        #[cfg(not(feature = "parallel"))]
        {
            params.iter().map(|p| self.solve(actions, p)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            params.par_iter().map(|p| self.solve(actions, p)).collect()
        }
    }
}
