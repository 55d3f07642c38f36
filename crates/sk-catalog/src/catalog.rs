//! The immutable [`Catalog`] consumed by the model builder.

use sk_core::{ExpedId, ExpedMode, GroupId, NUM_RESOURCES, ResourceVec, ShopItemId};

use crate::tables::{
    DURATION_HOURS, GROUPS, NUM_EXPEDS, NUM_GROUPS, NUM_SHOP_ITEMS, OFF_YIELD, RUN_YIELD,
    SHOP_COST, SHOP_LABELS, SHOP_YIELD, SLEEP_YIELD, YieldMatrix,
};

static STANDARD: Catalog = Catalog {
    run_yield:      RUN_YIELD,
    off_yield:      OFF_YIELD,
    sleep_yield:    SLEEP_YIELD,
    duration_hours: DURATION_HOURS,
    groups:         GROUPS,
    shop_yield:     SHOP_YIELD,
    shop_cost:      SHOP_COST,
};

/// Expedition, group, and shop tables.
///
/// The fields are public so tests and what-if studies can build variants
/// (e.g. a catalog with every yield zeroed); the standard tables are always
/// available through [`Catalog::standard`].  A catalog is never mutated
/// once handed to the model builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    pub run_yield:      YieldMatrix,
    pub off_yield:      YieldMatrix,
    /// Per-day yields; scaled by `days` in the resource balance.
    pub sleep_yield:    YieldMatrix,
    pub duration_hours: [f64; NUM_EXPEDS],
    pub groups:         [[u8; NUM_EXPEDS]; NUM_GROUPS],
    pub shop_yield:     [[f64; NUM_SHOP_ITEMS]; NUM_RESOURCES],
    pub shop_cost:      [f64; NUM_SHOP_ITEMS],
}

impl Catalog {
    /// The shared standard catalog.  Built at compile time, never re-derived.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Yield matrix for one temporal mode.
    pub fn yields(&self, mode: ExpedMode) -> &YieldMatrix {
        match mode {
            ExpedMode::Run   => &self.run_yield,
            ExpedMode::Off   => &self.off_yield,
            ExpedMode::Sleep => &self.sleep_yield,
        }
    }

    /// Column of [`yields`][Self::yields] for one expedition.
    pub fn exped_yield(&self, mode: ExpedMode, exped: ExpedId) -> ResourceVec {
        let m = self.yields(mode);
        ResourceVec(std::array::from_fn(|r| m[r][exped.index()]))
    }

    #[inline]
    pub fn duration(&self, exped: ExpedId) -> f64 {
        self.duration_hours[exped.index()]
    }

    /// An expedition can fill an overnight slot only if it finishes strictly
    /// within the rest period.
    #[inline]
    pub fn sleep_eligible(&self, exped: ExpedId, rest_hours: f64) -> bool {
        self.duration(exped) < rest_hours
    }

    /// Member expeditions of `group`, ascending.
    pub fn group_members(&self, group: GroupId) -> impl Iterator<Item = ExpedId> + '_ {
        let row = &self.groups[group.index()];
        ExpedId::range(NUM_EXPEDS).filter(move |e| row[e.index()] != 0)
    }

    pub fn shop_yield(&self, item: ShopItemId) -> ResourceVec {
        ResourceVec(std::array::from_fn(|r| self.shop_yield[r][item.index()]))
    }

    #[inline]
    pub fn shop_cost(&self, item: ShopItemId) -> f64 {
        self.shop_cost[item.index()]
    }

    pub fn shop_label(item: ShopItemId) -> &'static str {
        SHOP_LABELS[item.index()]
    }

    /// Display label for an expedition: the pair index plus a marker for the
    /// sparkled (odd) variant.
    pub fn exped_label(exped: ExpedId) -> String {
        let pair = exped.0 / 2;
        let variant = if exped.0 % 2 == 1 { "b" } else { "a" };
        format!("E{pair:02}{variant}")
    }

    /// A copy of this catalog with every expedition and shop yield zeroed.
    /// Durations, groups, and costs are kept.
    pub fn without_yields(&self) -> Catalog {
        Catalog {
            run_yield:   [[0.0; NUM_EXPEDS]; NUM_RESOURCES],
            off_yield:   [[0.0; NUM_EXPEDS]; NUM_RESOURCES],
            sleep_yield: [[0.0; NUM_EXPEDS]; NUM_RESOURCES],
            shop_yield:  [[0.0; NUM_SHOP_ITEMS]; NUM_RESOURCES],
            ..self.clone()
        }
    }
}
