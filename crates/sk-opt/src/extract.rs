//! Turns a raw solution into a displayable [`Plan`].
//!
//! Order of operations:
//!
//! 1. snap every value with `|x| < SNAP_TOLERANCE` to exactly zero;
//! 2. compute the reward and the resource ledger on the snapped values;
//! 3. round every exposed number to the display precision.
//!
//! Rounding never feeds back into arithmetic.

use sk_catalog::{Catalog, NUM_EXPEDS, NUM_SHOP_ITEMS};
use sk_core::{
    ActionId, DISPLAY_DECIMALS, DISPLAYED_RESOURCES, ExpedId, ExpedMode, PlanParams, ResourceVec, SNAP_TOLERANCE,
    ShopItemId, round_to, snap_to_zero,
};
use sk_input::ActionTable;
use sk_model::{BuiltModel, VarLayout};
use sk_solver::{RawSolution, SolveStatus};

// ── Allocation ────────────────────────────────────────────────────────────────

/// Volume allocated to every decision variable, grouped by kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// Runs of each user action, in input order.
    pub actions: Vec<f64>,
    /// Slot-hours of each expedition during active hours.
    pub run:     [f64; NUM_EXPEDS],
    /// Slot-hours of each expedition during inactive hours.
    pub off:     [f64; NUM_EXPEDS],
    /// Overnight slot-uses of each expedition.
    pub sleep:   [f64; NUM_EXPEDS],
    /// Units bought of each shop item.
    pub shop:    [f64; NUM_SHOP_ITEMS],
}

impl Allocation {
    /// Slice `values` according to `layout`.
    ///
    /// `values` must hold exactly `layout.len()` entries; the solver adapter
    /// rejects any solution that does not.
    pub fn from_values(values: &[f64], layout: &VarLayout) -> Self {
        let exped = |mode| {
            let mut out = [0.0; NUM_EXPEDS];
            out.copy_from_slice(&values[layout.exped_range(mode)]);
            out
        };
        let mut shop = [0.0; NUM_SHOP_ITEMS];
        shop.copy_from_slice(&values[layout.shop_range()]);

        Self {
            actions: values[layout.action_range()].to_vec(),
            run:     exped(ExpedMode::Run),
            off:     exped(ExpedMode::Off),
            sleep:   exped(ExpedMode::Sleep),
            shop,
        }
    }

    /// Apply `f` to every value.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            actions: self.actions.iter().map(|&v| f(v)).collect(),
            run:     self.run.map(&f),
            off:     self.off.map(&f),
            sleep:   self.sleep.map(&f),
            shop:    self.shop.map(&f),
        }
    }

    pub fn exped(&self, mode: ExpedMode) -> &[f64; NUM_EXPEDS] {
        match mode {
            ExpedMode::Run   => &self.run,
            ExpedMode::Off   => &self.off,
            ExpedMode::Sleep => &self.sleep,
        }
    }

    #[inline]
    pub fn action(&self, id: ActionId) -> f64 {
        self.actions[id.index()]
    }

    /// Sum over all sixteen expeditions in one mode.
    pub fn mode_total(&self, mode: ExpedMode) -> f64 {
        self.exped(mode).iter().sum()
    }

    /// Every value, in layout order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.actions
            .iter()
            .chain(&self.run)
            .chain(&self.off)
            .chain(&self.sleep)
            .chain(&self.shop)
            .copied()
    }
}

// ── ResourceLedger ────────────────────────────────────────────────────────────

/// Where each displayed resource came from and where it went.
///
/// All vectors cover the five displayed resources; time is excluded.
/// `remaining = offset − spent + earned + bought` holds for every entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceLedger {
    pub offset:    [f64; DISPLAYED_RESOURCES],
    /// Consumed by user actions.
    pub spent:     [f64; DISPLAYED_RESOURCES],
    /// Net yield of all expeditions, sleep scaled by days.
    pub earned:    [f64; DISPLAYED_RESOURCES],
    /// Gained from shop purchases.
    pub bought:    [f64; DISPLAYED_RESOURCES],
    pub remaining: [f64; DISPLAYED_RESOURCES],
}

impl ResourceLedger {
    /// Compute the ledger from an (unrounded) allocation.
    pub fn compute(
        alloc:   &Allocation,
        actions: &ActionTable,
        params:  &PlanParams,
        catalog: &Catalog,
    ) -> Self {
        let days = params.days as f64;

        let mut spent = ResourceVec::ZERO;
        for id in actions.ids() {
            spent += actions.consumption(id) * alloc.action(id);
        }

        let mut earned = ResourceVec::ZERO;
        for mode in ExpedMode::ALL {
            let scale = if mode == ExpedMode::Sleep { days } else { 1.0 };
            let volumes = alloc.exped(mode);
            for e in ExpedId::range(NUM_EXPEDS) {
                earned += catalog.exped_yield(mode, e) * (scale * volumes[e.index()]);
            }
        }

        let mut bought = ResourceVec::ZERO;
        for s in ShopItemId::range(NUM_SHOP_ITEMS) {
            bought += catalog.shop_yield(s) * alloc.shop[s.index()];
        }

        let offset = params.offsets();
        let remaining = offset - spent + earned + bought;

        Self {
            offset:    offset.displayed(),
            spent:     spent.displayed(),
            earned:    earned.displayed(),
            bought:    bought.displayed(),
            remaining: remaining.displayed(),
        }
    }

    /// Round every entry to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        let r = |v: &[f64; DISPLAYED_RESOURCES]| v.map(|x| round_to(x, decimals));
        Self {
            offset:    r(&self.offset),
            spent:     r(&self.spent),
            earned:    r(&self.earned),
            bought:    r(&self.bought),
            remaining: r(&self.remaining),
        }
    }

    /// The four breakdown rows with their labels, in display order.
    pub fn rows(&self) -> [(&'static str, &[f64; DISPLAYED_RESOURCES]); 4] {
        [
            ("spent", &self.spent),
            ("earned", &self.earned),
            ("bought", &self.bought),
            ("remaining", &self.remaining),
        ]
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// The solved monthly allocation, ready for display.
///
/// Every number is rounded to the display precision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// `Σ reward · action + special`.
    pub reward:       f64,
    /// Raw LP objective as reported by the backend (special excluded).
    pub objective:    f64,
    pub status:       SolveStatus,
    pub action_names: Vec<String>,
    pub allocation:   Allocation,
    pub ledger:       ResourceLedger,
    /// Diagnostic lines captured during the solve.
    pub solver_log:   Vec<String>,
}

impl Plan {
    /// Combined active and inactive slot-hours of expedition `e`.
    pub fn expedition_total(&self, e: ExpedId) -> f64 {
        round_to(self.allocation.run[e.index()] + self.allocation.off[e.index()], DISPLAY_DECIMALS)
    }

    /// `(name, runs)` for every action, in input order.
    pub fn actions(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.action_names
            .iter()
            .map(String::as_str)
            .zip(self.allocation.actions.iter().copied())
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Build a [`Plan`] from a successful solve.
///
/// `solver_log` is left empty; the optimizer fills it in.
pub fn extract(
    built:    &BuiltModel,
    raw:      &RawSolution,
    actions:  &ActionTable,
    params:   &PlanParams,
    catalog:  &Catalog,
) -> Plan {
    let snapped: Vec<f64> = raw.values.iter().map(|&v| snap_to_zero(v, SNAP_TOLERANCE)).collect();
    let alloc = Allocation::from_values(&snapped, &built.layout);

    let reward: f64 = actions
        .ids()
        .map(|id| actions.reward(id) * alloc.action(id))
        .sum::<f64>()
        + params.special;
    let ledger = ResourceLedger::compute(&alloc, actions, params, catalog);

    log::debug!("extracted plan: reward {reward:.4}, {} actions", actions.len());

    Plan {
        reward:       round_to(reward, DISPLAY_DECIMALS),
        objective:    round_to(raw.objective, DISPLAY_DECIMALS),
        status:       raw.status,
        action_names: actions.names().to_vec(),
        allocation:   alloc.map(|v| round_to(v, DISPLAY_DECIMALS)),
        ledger:       ledger.rounded(DISPLAY_DECIMALS),
        solver_log:   Vec::new(),
    }
}
