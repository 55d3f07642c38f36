//! Unit tests for sk-solver.

use sk_model::{Constraint, LinExpr, LpModel, Relation, Sense};

use crate::{
    LpBackend, MicroLpBackend, RawSolution, SolveStatus, SolverError, SolverLog, SolverResult,
    solve_model,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// max x + 2y  s.t.  x + y ≤ 4,  y ≤ 3 (bound),  x, y ≥ 0  →  x = 1, y = 3.
fn small_model() -> LpModel {
    let mut m = LpModel::new("small", Sense::Maximise);
    let x = m.add_variable("x", 0.0, None);
    let y = m.add_variable("y", 0.0, Some(3.0));
    m.objective = LinExpr::new().with_term(x, 1.0).with_term(y, 2.0);
    m.add_constraint(Constraint::new("cap", LinExpr::sum([x, y]), Relation::Le, 4.0));
    m
}

struct Fixed(fn() -> SolverResult<RawSolution>);

impl LpBackend for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn solve(&self, _model: &LpModel, log: &mut SolverLog) -> SolverResult<RawSolution> {
        log.line("fixed: called");
        (self.0)()
    }
}

struct Panicking;

impl LpBackend for Panicking {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn solve(&self, _model: &LpModel, _log: &mut SolverLog) -> SolverResult<RawSolution> {
        panic!("engine crashed");
    }
}

// ── MicroLpBackend ────────────────────────────────────────────────────────────

#[cfg(test)]
mod microlp {
    use super::*;

    #[test]
    fn solves_small_model() {
        let mut log = SolverLog::new();
        let sol = MicroLpBackend.solve(&small_model(), &mut log).unwrap();
        assert_eq!(sol.status, SolveStatus::Optimal);
        assert!((sol.values[0] - 1.0).abs() < 1e-6, "{:?}", sol.values);
        assert!((sol.values[1] - 3.0).abs() < 1e-6, "{:?}", sol.values);
        assert!((sol.objective - 7.0).abs() < 1e-6);
        assert!(!log.lines().is_empty());
    }

    #[test]
    fn minimise_and_equality_and_ge() {
        // min x + y  s.t.  x − y = 1,  x ≥ 2  →  x = 2, y = 1.
        let mut m = LpModel::new("min", Sense::Minimise);
        let x = m.add_variable("x", 0.0, None);
        let y = m.add_variable("y", 0.0, None);
        m.objective = LinExpr::sum([x, y]);
        m.add_constraint(Constraint::new("diff", LinExpr::new().with_term(x, 1.0).with_term(y, -1.0), Relation::Eq, 1.0));
        m.add_constraint(Constraint::new("floor", LinExpr::sum([x]), Relation::Ge, 2.0));
        let sol = MicroLpBackend.solve(&m, &mut SolverLog::new()).unwrap();
        assert!((sol.values[0] - 2.0).abs() < 1e-6);
        assert!((sol.values[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn expression_constant_moves_to_rhs() {
        // max x  s.t.  5 − x ≥ 0  →  x = 5.
        let mut m = LpModel::new("const", Sense::Maximise);
        let x = m.add_variable("x", 0.0, None);
        m.objective = LinExpr::sum([x]);
        m.add_constraint(Constraint::new("stock", LinExpr::constant(5.0).with_term(x, -1.0), Relation::Ge, 0.0));
        let sol = MicroLpBackend.solve(&m, &mut SolverLog::new()).unwrap();
        assert!((sol.values[0] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn infeasible() {
        let mut m = small_model();
        let x = sk_model::VarId(0);
        m.add_constraint(Constraint::new("impossible", LinExpr::sum([x]), Relation::Ge, 10.0));
        let err = MicroLpBackend.solve(&m, &mut SolverLog::new()).unwrap_err();
        assert!(matches!(err, SolverError::Infeasible));
    }

    #[test]
    fn unbounded() {
        let mut m = LpModel::new("open", Sense::Maximise);
        let x = m.add_variable("x", 0.0, None);
        m.objective = LinExpr::sum([x]);
        let err = MicroLpBackend.solve(&m, &mut SolverLog::new()).unwrap_err();
        assert!(matches!(err, SolverError::Unbounded));
        assert_eq!(err.status(), SolveStatus::Unbounded);
    }

    #[test]
    fn constant_rows_are_checked_not_dropped() {
        let mut ok = small_model();
        ok.add_constraint(Constraint::new("trivial", LinExpr::new(), Relation::Le, 0.0));
        assert!(MicroLpBackend.solve(&ok, &mut SolverLog::new()).is_ok());

        let mut bad = small_model();
        bad.add_constraint(Constraint::new("never", LinExpr::constant(1.0), Relation::Le, 0.0));
        assert!(matches!(MicroLpBackend.solve(&bad, &mut SolverLog::new()), Err(SolverError::Infeasible)));
    }
}

// ── solve_model adapter ───────────────────────────────────────────────────────

#[cfg(test)]
mod adapter {
    use super::*;

    #[test]
    fn passes_through_success_and_logs() {
        let mut log = SolverLog::new();
        let sol = solve_model(&MicroLpBackend, &small_model(), &mut log).unwrap();
        assert_eq!(sol.values.len(), 2);
        assert!(log.lines()[0].contains("solving small"));
    }

    #[test]
    fn infeasible_is_not_replaced_by_zeros() {
        let backend = Fixed(|| Err(SolverError::Infeasible));
        let mut log = SolverLog::new();
        let err = solve_model(&backend, &small_model(), &mut log).unwrap_err();
        assert_eq!(err.status(), SolveStatus::Infeasible);
        assert!(log.lines().iter().any(|l| l.contains("infeasible")));
    }

    #[test]
    fn wrong_value_count_is_rejected() {
        let backend = Fixed(|| {
            Ok(RawSolution { status: SolveStatus::Optimal, values: vec![0.0], objective: 0.0 })
        });
        let err = solve_model(&backend, &small_model(), &mut SolverLog::new()).unwrap_err();
        assert!(matches!(err, SolverError::ValueCount { expected: 2, got: 1, .. }));
    }

    #[test]
    fn panic_becomes_unavailable() {
        let err = solve_model(&Panicking, &small_model(), &mut SolverLog::new()).unwrap_err();
        match err {
            SolverError::Unavailable { backend, message } => {
                assert_eq!(backend, "panicking");
                assert!(message.contains("engine crashed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn backend_by_reference() {
        let backend = MicroLpBackend;
        let by_ref: &dyn LpBackend = &backend;
        assert_eq!(solve_model(by_ref, &small_model(), &mut SolverLog::new()).unwrap().values.len(), 2);
    }
}
