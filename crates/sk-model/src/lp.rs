//! A small, solver-agnostic linear program.

use std::fmt;

/// Index of a variable in [`LpModel::variables`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(pub u32);

impl VarId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A continuous decision variable with bounds.  `upper: None` is unbounded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    pub name:  String,
    pub lower: f64,
    pub upper: Option<f64>,
}

// ── LinExpr ───────────────────────────────────────────────────────────────────

/// `constant + Σ coef · var`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinExpr {
    pub terms:    Vec<(VarId, f64)>,
    pub constant: f64,
}

impl LinExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(value: f64) -> Self {
        Self { terms: Vec::new(), constant: value }
    }

    /// `Σ var` with unit coefficients.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        Self {
            terms:    vars.into_iter().map(|v| (v, 1.0)).collect(),
            constant: 0.0,
        }
    }

    /// Append `coef · var`.  Exact-zero coefficients are skipped.
    pub fn add_term(&mut self, var: VarId, coef: f64) -> &mut Self {
        if coef != 0.0 {
            self.terms.push((var, coef));
        }
        self
    }

    pub fn with_term(mut self, var: VarId, coef: f64) -> Self {
        self.add_term(var, coef);
        self
    }

    /// Evaluate against a full assignment indexed by [`VarId`].
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.constant
            + self
                .terms
                .iter()
                .map(|&(v, c)| c * values[v.index()])
                .sum::<f64>()
    }
}

// ── Constraint ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    Le,
    Eq,
    Ge,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Le => "<=",
            Relation::Eq => "=",
            Relation::Ge => ">=",
        }
    }

    /// Does `lhs ⋈ rhs` hold within `tol`?
    pub fn holds(self, lhs: f64, rhs: f64, tol: f64) -> bool {
        match self {
            Relation::Le => lhs <= rhs + tol,
            Relation::Eq => (lhs - rhs).abs() <= tol,
            Relation::Ge => lhs >= rhs - tol,
        }
    }
}

/// `expr ⋈ rhs`, named for diagnostics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub name:     String,
    pub expr:     LinExpr,
    pub relation: Relation,
    pub rhs:      f64,
}

impl Constraint {
    pub fn new(name: impl Into<String>, expr: LinExpr, relation: Relation, rhs: f64) -> Self {
        Self { name: name.into(), expr, relation, rhs }
    }

    pub fn is_satisfied(&self, values: &[f64], tol: f64) -> bool {
        self.relation.holds(self.expr.evaluate(values), self.rhs, tol)
    }

    /// Right-hand side with the expression's constant moved across.
    #[inline]
    pub fn effective_rhs(&self) -> f64 {
        self.rhs - self.expr.constant
    }
}

// ── LpModel ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    Maximise,
    Minimise,
}

/// Variables, objective, and constraints of one linear program.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpModel {
    pub name:        String,
    pub sense:       Sense,
    pub variables:   Vec<Variable>,
    pub objective:   LinExpr,
    pub constraints: Vec<Constraint>,
}

impl LpModel {
    pub fn new(name: impl Into<String>, sense: Sense) -> Self {
        Self {
            name:        name.into(),
            sense,
            variables:   Vec::new(),
            objective:   LinExpr::new(),
            constraints: Vec::new(),
        }
    }

    pub fn add_variable(&mut self, name: impl Into<String>, lower: f64, upper: Option<f64>) -> VarId {
        let id = VarId(self.variables.len() as u32);
        self.variables.push(Variable { name: name.into(), lower, upper });
        id
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Constraints and bounds that `values` violates by more than `tol`.
    ///
    /// Returns the names of the violated rows; empty means feasible.
    pub fn violations(&self, values: &[f64], tol: f64) -> Vec<String> {
        let mut out = Vec::new();
        for (v, &x) in self.variables.iter().zip(values) {
            if x < v.lower - tol || v.upper.is_some_and(|u| x > u + tol) {
                out.push(format!("bound:{}", v.name));
            }
        }
        out.extend(
            self.constraints
                .iter()
                .filter(|c| !c.is_satisfied(values, tol))
                .map(|c| c.name.clone()),
        );
        out
    }
}

// ── LP-format rendering ───────────────────────────────────────────────────────

struct Terms<'a> {
    expr:  &'a LinExpr,
    model: &'a LpModel,
}

impl fmt::Display for Terms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expr.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, &(v, c)) in self.expr.terms.iter().enumerate() {
            let name = &self.model.variables[v.index()].name;
            match (i, c < 0.0) {
                (0, false) => write!(f, "{c} {name}")?,
                (0, true)  => write!(f, "- {} {name}", -c)?,
                (_, false) => write!(f, " + {c} {name}")?,
                (_, true)  => write!(f, " - {} {name}", -c)?,
            }
        }
        Ok(())
    }
}

/// CPLEX LP-style text, for logs and debugging.
impl fmt::Display for LpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\\ {}", self.name)?;
        writeln!(f, "{}", match self.sense {
            Sense::Maximise => "Maximize",
            Sense::Minimise => "Minimize",
        })?;
        writeln!(f, " obj: {}", Terms { expr: &self.objective, model: self })?;
        writeln!(f, "Subject To")?;
        for c in &self.constraints {
            writeln!(
                f,
                " {}: {} {} {}",
                c.name,
                Terms { expr: &c.expr, model: self },
                c.relation.symbol(),
                c.effective_rhs()
            )?;
        }
        writeln!(f, "Bounds")?;
        for v in &self.variables {
            match v.upper {
                Some(u) => writeln!(f, " {} <= {} <= {}", v.lower, v.name, u)?,
                None    => writeln!(f, " {} >= {}", v.name, v.lower)?,
            }
        }
        writeln!(f, "End")
    }
}
