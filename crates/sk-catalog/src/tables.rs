//! Raw constant tables.  Values must be reproduced exactly for output
//! compatibility; do not edit without re-deriving every downstream result.

use sk_core::NUM_RESOURCES;

pub const NUM_EXPEDS:     usize = 16;
pub const NUM_GROUPS:     usize = 7;
pub const NUM_SHOP_ITEMS: usize = 6;

/// The first `SHORT_EXPEDS` expeditions are the "short" ones that the
/// `allow_short_inactive` switch can exclude from off mode.
pub const SHORT_EXPEDS: usize = 4;

pub type YieldMatrix = [[f64; NUM_EXPEDS]; NUM_RESOURCES];

/// Per-hour yield of each expedition while running in active hours.
pub const RUN_YIELD: YieldMatrix = [
    [-50.0, -50.0, 115.6, 157.0, 133.0, 220.0, 97.0, 149.5, 49.50, 79.50, 171.2, 222.9, -29.1, -29.1, 183.5, 234.5],
    [240.0, 360.0, 63.27, -34.0, 160.0, 244.0, 0.0, 0.0, 63.50, 101.0, 138.3, 180.0, 164.9, 213.8, -30.2, -30.2],
    [72.0, 108.0, 0.0, 0.0, 18.0, 24.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 120.0, 177.0, 80.0, 123.0],
    [1.000, 1.000, 1.091, 1.000, 0.000, 0.000, 0.0, 0.375, 0.000, 0.000, 0.000, 0.000, 0.000, 0.000, 0.000, 0.000],
    [0.000, -30.0, -13.1, -12.0, 0.000, -10.0, 0.0, -3.75, 0.000, -4.50, 0.000, -5.15, 0.000, -4.37, 0.000, -4.12],
    [-20.0, -30.0, -16.4, -15.0, -6.67, -10.0, -3.75, -3.75, -2.50, -3.75, -4.29, -6.43, -3.64, -5.45, -3.43, -5.14],
];

/// Per-day yield of one overnight slot-use of each expedition.
pub const SLEEP_YIELD: YieldMatrix = [
    [-25.0, -25.0, 106.0, 157.0, 200.0, 330.0, 388.0, 598.0, 198.0, 318.0, 400.0, 520.0, -80.0, -80.0, 535.0, 684.0],
    [120.0, 180.0, 58.0, -34.0, 240.0, 366.0, 0.0, 0.0, 254.0, 404.0, 323.0, 420.0, 453.0, 588.0, -84.0, -84.0],
    [36.0, 54.0, 0.0, 0.0, 24.0, 36.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 324.0, 486.0, 240.0, 360.0],
    [0.5, 0.5, 1.0, 1.0, 0.0, 0.0, 0.0, 1.5, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, -15.0, -12.0, -12.0, 0.0, -15.0, 0.0, 0.0, 0.0, -18.0, 0.0, -12.0, 0.0, -12.0, 0.0, -12.0],
    [0.0; NUM_EXPEDS],
];

/// Expedition durations in hours.
pub const DURATION_HOURS: [f64; NUM_EXPEDS] = [
    0.5, 0.5, 55.0 / 60.0, 1.0, 1.5, 1.5, 4.0, 4.0, 4.0, 4.0, 7.0 / 3.0, 7.0 / 3.0, 11.0 / 4.0, 11.0 / 4.0,
    175.0 / 60.0, 175.0 / 60.0,
];

/// Group membership.  Each row pairs the plain and sparkled variant of one
/// expedition slot; expeditions 2 and 3 belong to no group.
pub const GROUPS: [[u8; NUM_EXPEDS]; NUM_GROUPS] = [
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
];

/// Resource yield of one unit of each shop item, `[resource][item]`.
pub const SHOP_YIELD: [[f64; NUM_SHOP_ITEMS]; NUM_RESOURCES] = [
    [1200.0, 0.0, 0.0, 500.0, 0.0, 200.0],
    [0.0, 250.0, 0.0, 500.0, 0.0, 200.0],
    [0.0, 0.0, 0.0, 200.0, 0.0, 1500.0],
    [0.0, 0.0, 6.0, 3.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 180.0, 0.0],
    [0.0; NUM_SHOP_ITEMS],
];

pub const SHOP_COST: [f64; NUM_SHOP_ITEMS] = [300.0, 100.0, 300.0, 300.0, 300.0, 700.0];

pub const SHOP_LABELS: [&str; NUM_SHOP_ITEMS] = [
    "tanker requisition",
    "ammo crate",
    "fast repair",
    "sortie set",
    "mamiya",
    "arsenal set",
];

/// Off-mode yields: the first five rows of `run`, with a zero time row since
/// inactive hours do not draw on the active play-time budget.
pub const fn off_from_run(run: &YieldMatrix) -> YieldMatrix {
    let mut off = [[0.0; NUM_EXPEDS]; NUM_RESOURCES];
    let mut r = 0;
    while r < NUM_RESOURCES - 1 {
        off[r] = run[r];
        r += 1;
    }
    off
}

pub const OFF_YIELD: YieldMatrix = off_from_run(&RUN_YIELD);
