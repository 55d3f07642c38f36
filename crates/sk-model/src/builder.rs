//! Fluent builder that turns validated inputs into an [`LpModel`].

use sk_catalog::{Catalog, NUM_EXPEDS, NUM_GROUPS, NUM_SHOP_ITEMS, SHORT_EXPEDS};
use sk_core::{ExpedId, ExpedMode, GroupId, PlanParams, Resource, SLOTS, ShopItemId};
use sk_input::{ActionTable, InputResult, validate_params};

use crate::{Constraint, LinExpr, LpModel, Relation, Sense, VarLayout};

/// A built model together with the layout needed to read its solution.
#[derive(Clone, Debug)]
pub struct BuiltModel {
    pub model:  LpModel,
    pub layout: VarLayout,
}

/// Fluent builder for the allocation [`LpModel`].
///
/// # Required inputs
///
/// - [`ActionTable`]: the normalized user actions
/// - [`PlanParams`]: hours, days, budget, offsets, policy switch
///
/// # Optional inputs
///
/// | Method         | Default                  |
/// |----------------|--------------------------|
/// | `.catalog(c)`  | [`Catalog::standard()`]  |
///
/// # Example
///
/// ```rust,ignore
/// let built = ModelBuilder::new(&actions, &params).build()?;
/// println!("{}", built.model);
/// ```
pub struct ModelBuilder<'a> {
    actions: &'a ActionTable,
    params:  &'a PlanParams,
    catalog: &'a Catalog,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(actions: &'a ActionTable, params: &'a PlanParams) -> Self {
        Self {
            actions,
            params,
            catalog: Catalog::standard(),
        }
    }

    /// Use a non-standard catalog.
    pub fn catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Validate the parameters and emit every variable, the objective, and
    /// every constraint.  Invalid parameters abort before anything is built.
    pub fn build(self) -> InputResult<BuiltModel> {
        validate_params(self.params)?;

        let layout = VarLayout::new(self.actions.len());
        let mut model = LpModel::new("senka_allocation", Sense::Maximise);
        self.add_variables(&mut model);

        // Objective: Σ reward · action.
        for id in self.actions.ids() {
            model.objective.add_term(layout.action(id), self.actions.reward(id));
        }

        self.add_budget(&mut model, &layout);
        self.add_slot_totals(&mut model, &layout);
        self.add_sleep_eligibility(&mut model, &layout);
        self.add_group_capacity(&mut model, &layout);
        if !self.params.allow_short_inactive {
            self.add_short_inactive_ban(&mut model, &layout);
        }
        self.add_resource_balance(&mut model, &layout);
        self.add_share_caps(&mut model, &layout);

        log::debug!(
            "built model {}: {} variables, {} constraints",
            model.name,
            model.variables.len(),
            model.constraints.len()
        );
        Ok(BuiltModel { model, layout })
    }

    // ── Variables ─────────────────────────────────────────────────────────

    fn add_variables(&self, model: &mut LpModel) {
        let active = self.params.active_budget();
        let inactive = self.params.inactive_budget();

        for id in self.actions.ids() {
            model.add_variable(format!("sortie_{}", id.0), 0.0, None);
        }
        for e in 0..NUM_EXPEDS {
            model.add_variable(format!("exped_run_{e}"), 0.0, Some(active));
        }
        for e in 0..NUM_EXPEDS {
            model.add_variable(format!("exped_off_{e}"), 0.0, Some(inactive));
        }
        for e in 0..NUM_EXPEDS {
            model.add_variable(format!("exped_sleep_{e}"), 0.0, None);
        }
        for s in 0..NUM_SHOP_ITEMS {
            model.add_variable(format!("shop_{s}"), 0.0, None);
        }
    }

    // ── Constraint groups ─────────────────────────────────────────────────

    /// Σ cost · shop ≤ max_money.
    fn add_budget(&self, model: &mut LpModel, layout: &VarLayout) {
        let mut expr = LinExpr::new();
        for s in ShopItemId::range(NUM_SHOP_ITEMS) {
            expr.add_term(layout.shop(s), self.catalog.shop_cost(s));
        }
        model.add_constraint(Constraint::new("budget", expr, Relation::Le, self.params.max_money));
    }

    /// Every mode keeps all three slots busy for its whole budget.
    fn add_slot_totals(&self, model: &mut LpModel, layout: &VarLayout) {
        let totals = [
            (ExpedMode::Run, SLOTS * self.params.active_budget()),
            (ExpedMode::Off, SLOTS * self.params.inactive_budget()),
            (ExpedMode::Sleep, SLOTS),
        ];
        for (mode, total) in totals {
            let expr = LinExpr::sum(ExpedId::range(NUM_EXPEDS).map(|e| layout.exped(mode, e)));
            model.add_constraint(Constraint::new(format!("{mode}_total"), expr, Relation::Eq, total));
        }
    }

    /// Expeditions that do not finish within the rest period never sleep.
    fn add_sleep_eligibility(&self, model: &mut LpModel, layout: &VarLayout) {
        for e in ExpedId::range(NUM_EXPEDS) {
            if !self.catalog.sleep_eligible(e, self.params.rest_hours) {
                let expr = LinExpr::new().with_term(layout.exped(ExpedMode::Sleep, e), 1.0);
                model.add_constraint(Constraint::new(format!("sleep_forbidden_{}", e.0), expr, Relation::Eq, 0.0));
            }
        }
    }

    /// Both variants of a slot share one fleet: one sleep use and one
    /// budget's worth of hours per mode.
    fn add_group_capacity(&self, model: &mut LpModel, layout: &VarLayout) {
        let caps = [
            (ExpedMode::Sleep, 1.0),
            (ExpedMode::Run, self.params.active_budget()),
            (ExpedMode::Off, self.params.inactive_budget()),
        ];
        for g in GroupId::range(NUM_GROUPS) {
            for (mode, cap) in caps {
                let expr = LinExpr::sum(self.catalog.group_members(g).map(|e| layout.exped(mode, e)));
                model.add_constraint(Constraint::new(format!("group_{mode}_{}", g.0), expr, Relation::Le, cap));
            }
        }
    }

    fn add_short_inactive_ban(&self, model: &mut LpModel, layout: &VarLayout) {
        for e in ExpedId::range(SHORT_EXPEDS) {
            let expr = LinExpr::new().with_term(layout.exped(ExpedMode::Off, e), 1.0);
            model.add_constraint(Constraint::new(format!("short_off_{}", e.0), expr, Relation::Eq, 0.0));
        }
    }

    /// End-of-period balance per resource:
    ///
    /// ```text
    /// offset − Σ cost·action + Σ run·x + Σ off·x + days·Σ sleep·x + Σ shop·x ≥ 0
    /// ```
    ///
    /// Intermediate shortfalls within the period are not modelled.
    fn add_resource_balance(&self, model: &mut LpModel, layout: &VarLayout) {
        let offsets = self.params.offsets();
        let days = self.params.days as f64;

        for r in Resource::ALL {
            let mut expr = LinExpr::constant(offsets[r]);
            for id in self.actions.ids() {
                expr.add_term(layout.action(id), -self.actions.consumption(id)[r]);
            }
            for mode in ExpedMode::ALL {
                let scale = if mode == ExpedMode::Sleep { days } else { 1.0 };
                let row = &self.catalog.yields(mode)[r.index()];
                for e in ExpedId::range(NUM_EXPEDS) {
                    expr.add_term(layout.exped(mode, e), scale * row[e.index()]);
                }
            }
            for s in ShopItemId::range(NUM_SHOP_ITEMS) {
                expr.add_term(layout.shop(s), self.catalog.shop_yield[r.index()][s.index()]);
            }
            model.add_constraint(Constraint::new(format!("resource_{r}"), expr, Relation::Ge, 0.0));
        }
    }

    /// `(1 − cap_i)·action_i ≤ cap_i · Σ_{j≠i} action_j`, i.e. action `i`
    /// takes at most `cap_i` of total action volume.  Emitted for every
    /// action, including `cap = 1` where it is trivially satisfied.
    fn add_share_caps(&self, model: &mut LpModel, layout: &VarLayout) {
        for i in self.actions.ids() {
            let cap = self.actions.max_share(i);
            let mut expr = LinExpr::new();
            expr.add_term(layout.action(i), 1.0 - cap);
            for j in self.actions.ids().filter(|&j| j != i) {
                expr.add_term(layout.action(j), -cap);
            }
            model.add_constraint(Constraint::new(format!("share_cap_{}", i.0), expr, Relation::Le, 0.0));
        }
    }
}

