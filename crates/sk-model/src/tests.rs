//! Unit tests for sk-model.

use sk_catalog::Catalog;
use sk_core::{ActionId, ExpedId, ExpedMode, PlanParams, ShopItemId};
use sk_input::{ActionSpec, ActionTable, InputErrorKind};

use crate::{BuiltModel, LinExpr, ModelBuilder, Relation, VarId, VarLayout};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn actions() -> ActionTable {
    ActionTable::from_specs(vec![
        ActionSpec::new("a", [10.0, 0.0, 0.0, 0.0, 0.0, 100.0], 1.0, 1.0),
        ActionSpec::new("b", [0.0, 10.0, 0.0, 0.0, 0.0, 100.0], 2.0, 0.25),
    ])
    .unwrap()
}

fn build(params: &PlanParams) -> BuiltModel {
    ModelBuilder::new(&actions(), params).build().unwrap()
}

fn coef(expr: &LinExpr, var: VarId) -> f64 {
    expr.terms.iter().filter(|(v, _)| *v == var).map(|(_, c)| c).sum()
}

// ── LinExpr / LpModel ─────────────────────────────────────────────────────────

#[cfg(test)]
mod lp {
    use super::*;
    use crate::{Constraint, LpModel, Sense};

    #[test]
    fn zero_coefficients_are_skipped() {
        let mut e = LinExpr::new();
        e.add_term(VarId(0), 0.0).add_term(VarId(1), 2.0);
        assert_eq!(e.terms, vec![(VarId(1), 2.0)]);
    }

    #[test]
    fn evaluate_includes_constant() {
        let e = LinExpr::constant(5.0).with_term(VarId(0), 2.0).with_term(VarId(1), -1.0);
        assert_eq!(e.evaluate(&[3.0, 4.0]), 7.0);
    }

    #[test]
    fn relation_tolerance() {
        assert!(Relation::Le.holds(1.0005, 1.0, 1e-3));
        assert!(!Relation::Le.holds(1.01, 1.0, 1e-3));
        assert!(Relation::Eq.holds(2.0, 2.0005, 1e-3));
        assert!(Relation::Ge.holds(0.9995, 1.0, 1e-3));
    }

    #[test]
    fn violations_reports_bounds_and_rows() {
        let mut m = LpModel::new("t", Sense::Maximise);
        let x = m.add_variable("x", 0.0, Some(1.0));
        m.add_constraint(Constraint::new("cap", LinExpr::sum([x]), Relation::Le, 0.5));
        assert!(m.violations(&[0.25], 1e-9).is_empty());
        assert_eq!(m.violations(&[2.0], 1e-9), vec!["bound:x".to_owned(), "cap".to_owned()]);
    }

    #[test]
    fn lp_text_rendering() {
        let mut m = LpModel::new("demo", Sense::Maximise);
        let x = m.add_variable("x", 0.0, None);
        let y = m.add_variable("y", 0.0, Some(4.0));
        m.objective = LinExpr::sum([x, y]);
        m.add_constraint(Constraint::new(
            "row",
            LinExpr::constant(1.0).with_term(x, 2.0).with_term(y, -3.0),
            Relation::Ge,
            0.0,
        ));
        let text = m.to_string();
        assert!(text.contains("Maximize"));
        assert!(text.contains(" obj: 1 x + 1 y"));
        assert!(text.contains(" row: 2 x - 3 y >= -1"));
        assert!(text.contains(" 0 <= y <= 4"));
        assert!(text.contains(" x >= 0"));
        assert!(text.trim_end().ends_with("End"));
    }
}

// ── VarLayout ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use super::*;

    #[test]
    fn blocks_are_contiguous() {
        let l = VarLayout::new(3);
        assert_eq!(l.len(), 3 + 48 + 6);
        assert_eq!(l.action_range(), 0..3);
        assert_eq!(l.exped_range(ExpedMode::Run), 3..19);
        assert_eq!(l.exped_range(ExpedMode::Off), 19..35);
        assert_eq!(l.exped_range(ExpedMode::Sleep), 35..51);
        assert_eq!(l.shop_range(), 51..57);
        assert_eq!(l.exped(ExpedMode::Off, ExpedId(2)), VarId(21));
        assert_eq!(l.shop(ShopItemId(5)), VarId(56));
    }
}

// ── ModelBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn variable_names_and_bounds() {
        let params = PlanParams { active_hours: 10.0, inactive_hours: 4.0, days: 30, ..Default::default() };
        let b = build(&params);
        assert_eq!(b.model.variables.len(), b.layout.len());

        let run0 = &b.model.variables[b.layout.exped(ExpedMode::Run, ExpedId(0)).index()];
        assert_eq!(run0.name, "exped_run_0");
        assert_eq!(run0.upper, Some(300.0));

        let off0 = &b.model.variables[b.layout.exped(ExpedMode::Off, ExpedId(0)).index()];
        assert_eq!(off0.upper, Some(120.0));

        let sleep0 = &b.model.variables[b.layout.exped(ExpedMode::Sleep, ExpedId(0)).index()];
        assert_eq!(sleep0.upper, None);

        assert!(b.model.variables.iter().all(|v| v.lower == 0.0));
    }

    #[test]
    fn objective_is_reward_weighted_actions() {
        let b = build(&PlanParams::default());
        assert_eq!(coef(&b.model.objective, b.layout.action(ActionId(0))), 1.0);
        assert_eq!(coef(&b.model.objective, b.layout.action(ActionId(1))), 2.0);
        assert_eq!(b.model.objective.terms.len(), 2);
    }

    #[test]
    fn slot_totals() {
        let params = PlanParams { active_hours: 10.0, inactive_hours: 4.0, days: 30, ..Default::default() };
        let b = build(&params);
        let run = b.model.constraint("run_total").unwrap();
        assert_eq!((run.relation, run.rhs, run.expr.terms.len()), (Relation::Eq, 900.0, 16));
        assert_eq!(b.model.constraint("off_total").unwrap().rhs, 360.0);
        assert_eq!(b.model.constraint("sleep_total").unwrap().rhs, 3.0);
    }

    #[test]
    fn budget_uses_shop_costs() {
        let params = PlanParams { max_money: 1_000.0, ..Default::default() };
        let b = build(&params);
        let c = b.model.constraint("budget").unwrap();
        assert_eq!(c.relation, Relation::Le);
        assert_eq!(c.rhs, 1_000.0);
        assert_eq!(coef(&c.expr, b.layout.shop(ShopItemId(5))), 700.0);
    }

    #[test]
    fn sleep_forbidden_for_long_expeditions() {
        // Rest 4 h: the four 4-hour expeditions (6..=9) are ineligible.
        let params = PlanParams { active_hours: 12.0, inactive_hours: 6.0, rest_hours: 4.0, ..Default::default() };
        let b = build(&params);
        let names: Vec<&str> = b
            .model
            .constraints
            .iter()
            .filter(|c| c.name.starts_with("sleep_forbidden_"))
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["sleep_forbidden_6", "sleep_forbidden_7", "sleep_forbidden_8", "sleep_forbidden_9"]);

        let defaults = build(&PlanParams::default());
        assert!(defaults.model.constraint("sleep_forbidden_6").is_none());
    }

    #[test]
    fn group_capacity_rows() {
        let params = PlanParams { active_hours: 10.0, inactive_hours: 4.0, days: 30, ..Default::default() };
        let b = build(&params);
        let sleep = b.model.constraint("group_sleep_0").unwrap();
        assert_eq!((sleep.relation, sleep.rhs), (Relation::Le, 1.0));
        assert_eq!(sleep.expr.terms.len(), 2);
        assert_eq!(b.model.constraint("group_run_6").unwrap().rhs, 300.0);
        assert_eq!(b.model.constraint("group_off_3").unwrap().rhs, 120.0);
        assert!(b.model.constraint("group_run_7").is_none());
    }

    #[test]
    fn short_inactive_switch() {
        let on = build(&PlanParams::default());
        assert!(on.model.constraint("short_off_0").is_none());

        let params = PlanParams { allow_short_inactive: false, ..Default::default() };
        let off = build(&params);
        for e in 0..4 {
            let c = off.model.constraint(&format!("short_off_{e}")).unwrap();
            assert_eq!((c.relation, c.rhs), (Relation::Eq, 0.0));
            assert_eq!(c.expr.terms, vec![(off.layout.exped(ExpedMode::Off, ExpedId(e)), 1.0)]);
        }
        assert!(off.model.constraint("short_off_4").is_none());
    }

    #[test]
    fn resource_balance_signs_and_scaling() {
        let params = PlanParams { days: 10, fuel_offset: 500.0, ..Default::default() };
        let b = build(&params);
        let fuel = b.model.constraint("resource_fuel").unwrap();
        assert_eq!(fuel.relation, Relation::Ge);
        assert_eq!(fuel.expr.constant, 500.0);
        assert_eq!(coef(&fuel.expr, b.layout.action(ActionId(0))), -10.0);
        assert_eq!(coef(&fuel.expr, b.layout.exped(ExpedMode::Run, ExpedId(2))), 115.6);
        assert_eq!(coef(&fuel.expr, b.layout.exped(ExpedMode::Off, ExpedId(2))), 115.6);
        assert_eq!(coef(&fuel.expr, b.layout.exped(ExpedMode::Sleep, ExpedId(2))), 1060.0);
        assert_eq!(coef(&fuel.expr, b.layout.shop(ShopItemId(0))), 1200.0);

        let time = b.model.constraint("resource_time").unwrap();
        assert_eq!(time.expr.constant, 12.0 * 10.0 * 3_600.0);
        assert_eq!(coef(&time.expr, b.layout.action(ActionId(0))), -100.0);
        assert_eq!(coef(&time.expr, b.layout.exped(ExpedMode::Off, ExpedId(0))), 0.0);
        assert_eq!(coef(&time.expr, b.layout.exped(ExpedMode::Run, ExpedId(0))), -20.0);
    }

    #[test]
    fn share_cap_rows() {
        let b = build(&PlanParams::default());
        let a0 = b.layout.action(ActionId(0));
        let a1 = b.layout.action(ActionId(1));

        // cap 1: 0·a0 − 1·a1 ≤ 0
        let c0 = b.model.constraint("share_cap_0").unwrap();
        assert_eq!(coef(&c0.expr, a0), 0.0);
        assert_eq!(coef(&c0.expr, a1), -1.0);

        // cap 0.25: 0.75·a1 − 0.25·a0 ≤ 0
        let c1 = b.model.constraint("share_cap_1").unwrap();
        assert_eq!(coef(&c1.expr, a1), 0.75);
        assert_eq!(coef(&c1.expr, a0), -0.25);
        assert_eq!((c1.relation, c1.rhs), (Relation::Le, 0.0));
    }

    #[test]
    fn custom_catalog_is_used() {
        let zero = Catalog::standard().without_yields();
        let acts = actions();
        let params = PlanParams::default();
        let b = ModelBuilder::new(&acts, &params).catalog(&zero).build().unwrap();
        let fuel = b.model.constraint("resource_fuel").unwrap();
        assert_eq!(fuel.expr.terms.len(), 1); // only action 0 costs fuel
    }

    #[test]
    fn too_many_hours_builds_nothing() {
        let params = PlanParams { active_hours: 13.0, inactive_hours: 6.0, rest_hours: 6.0, ..Default::default() };
        let err = ModelBuilder::new(&actions(), &params).build().unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Range);
    }
}
