//! `good_lp` backend using the pure-Rust microlp simplex engine.
//!
//! No external binary is needed, so this backend is always available.

use good_lp::solvers::microlp::microlp as microlp_solver;
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, constraint,
    variable,
};

use sk_model::{LinExpr, LpModel, Relation, Sense};

use crate::{LpBackend, RawSolution, SolveStatus, SolverError, SolverLog, SolverResult};

/// Tolerance for checking constraints that have no variable terms.
const CONSTANT_ROW_TOL: f64 = 1e-9;

/// [`LpBackend`] built on `good_lp` + microlp.
#[derive(Copy, Clone, Debug, Default)]
pub struct MicroLpBackend;

impl LpBackend for MicroLpBackend {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &LpModel, log: &mut SolverLog) -> SolverResult<RawSolution> {
        // ── Variables ─────────────────────────────────────────────────────
        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = model
            .variables
            .iter()
            .map(|v| {
                let def = variable().min(v.lower);
                let def = match v.upper {
                    Some(u) => def.max(u),
                    None    => def,
                };
                vars.add(def)
            })
            .collect();

        // ── Objective ─────────────────────────────────────────────────────
        let objective = to_expression(&model.objective, &handles);
        let unsolved = match model.sense {
            Sense::Maximise => vars.maximise(objective),
            Sense::Minimise => vars.minimise(objective),
        };
        let mut problem = unsolved.using(microlp_solver);

        // ── Constraints ───────────────────────────────────────────────────
        let mut passed = 0usize;
        for c in &model.constraints {
            if c.expr.terms.is_empty() {
                // No variables: decide it here, the engine cannot.
                if !c.relation.holds(c.expr.constant, c.rhs, CONSTANT_ROW_TOL) {
                    log.line(format!("constant row {} is violated", c.name));
                    return Err(SolverError::Infeasible);
                }
                continue;
            }
            let lhs = to_expression(&c.expr, &handles);
            let row = match c.relation {
                Relation::Le => constraint::leq(lhs, c.rhs),
                Relation::Eq => constraint::eq(lhs, c.rhs),
                Relation::Ge => constraint::leq(Expression::from(c.rhs), lhs),
            };
            problem = problem.with(row);
            passed += 1;
        }
        log.line(format!(
            "microlp: {} columns, {} rows ({} constant rows checked directly)",
            handles.len(),
            passed,
            model.constraints.len() - passed
        ));

        // ── Solve ─────────────────────────────────────────────────────────
        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = handles.iter().map(|&h| solution.value(h)).collect();
                let objective = model.objective.evaluate(&values);
                log.line(format!("microlp: optimal, objective {objective}"));
                Ok(RawSolution {
                    status: SolveStatus::Optimal,
                    values,
                    objective,
                })
            }
            Err(ResolutionError::Infeasible) => {
                log.line("microlp: infeasible");
                Err(SolverError::Infeasible)
            }
            Err(ResolutionError::Unbounded) => {
                log.line("microlp: unbounded");
                Err(SolverError::Unbounded)
            }
            Err(other) => {
                let message = other.to_string();
                log.line(format!("microlp: error: {message}"));
                Err(SolverError::Backend { backend: self.name(), message })
            }
        }
    }
}

fn to_expression(expr: &LinExpr, handles: &[Variable]) -> Expression {
    let mut out = Expression::from(expr.constant);
    for &(var, coef) in &expr.terms {
        out += handles[var.index()] * coef;
    }
    out
}
