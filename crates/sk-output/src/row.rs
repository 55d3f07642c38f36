//! Plain data row types written by plan writers.

use sk_catalog::{Catalog, NUM_EXPEDS, NUM_SHOP_ITEMS};
use sk_core::{ExpedId, ExpedMode, Resource, ShopItemId};
use sk_opt::{Plan, ResourceLedger};

/// Headline numbers of one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub reward:    f64,
    pub objective: f64,
    pub status:    String,
}

impl SummaryRow {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            reward:    plan.reward,
            objective: plan.objective,
            status:    plan.status.to_string(),
        }
    }
}

/// One allocated decision variable.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRow {
    /// `action`, `run`, `off`, `sleep`, or `shop`.
    pub kind:  &'static str,
    /// Position within its kind.
    pub index: usize,
    pub label: String,
    pub value: f64,
}

impl AllocationRow {
    /// Every variable of `plan`: actions in input order, then the three
    /// expedition modes, then the shop.
    pub fn from_plan(plan: &Plan) -> Vec<Self> {
        let alloc = &plan.allocation;
        let mut rows = Vec::with_capacity(alloc.actions.len() + 3 * NUM_EXPEDS + NUM_SHOP_ITEMS);

        for (index, (name, value)) in plan.actions().enumerate() {
            rows.push(Self { kind: "action", index, label: name.to_owned(), value });
        }
        for mode in ExpedMode::ALL {
            for e in ExpedId::range(NUM_EXPEDS) {
                rows.push(Self {
                    kind:  mode.as_str(),
                    index: e.index(),
                    label: Catalog::exped_label(e),
                    value: alloc.exped(mode)[e.index()],
                });
            }
        }
        for s in ShopItemId::range(NUM_SHOP_ITEMS) {
            rows.push(Self {
                kind:  "shop",
                index: s.index(),
                label: Catalog::shop_label(s).to_owned(),
                value: alloc.shop[s.index()],
            });
        }
        rows
    }
}

/// One line of the resource breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerRow {
    /// `offset`, `spent`, `earned`, `bought`, or `remaining`.
    pub row:    &'static str,
    pub values: [f64; 5],
}

impl LedgerRow {
    pub fn from_ledger(ledger: &ResourceLedger) -> Vec<Self> {
        std::iter::once(("offset", &ledger.offset))
            .chain(ledger.rows())
            .map(|(row, values)| Self { row, values: *values })
            .collect()
    }

    /// Column headers matching [`values`][Self::values].
    pub fn headers() -> [&'static str; 6] {
        let mut out = ["row"; 6];
        for (slot, r) in out[1..].iter_mut().zip(Resource::DISPLAYED) {
            *slot = r.as_str();
        }
        out
    }
}
