//! Validation of the global [`PlanParams`].

use sk_core::PlanParams;

use crate::{InputError, InputResult};

pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Reject parameter sets no model should be built from.
///
/// Hours, budget, and offsets must be finite; hours and budget must be
/// non-negative; active + inactive + rest hours may not exceed a day.
pub fn validate_params(params: &PlanParams) -> InputResult<()> {
    let finite = [
        ("active hours", params.active_hours),
        ("inactive hours", params.inactive_hours),
        ("rest hours", params.rest_hours),
        ("money budget", params.max_money),
        ("special reward", params.special),
        ("fuel offset", params.fuel_offset),
        ("ammo offset", params.ammo_offset),
        ("steel offset", params.steel_offset),
        ("bucket offset", params.bucket_offset),
        ("readiness offset", params.readiness_offset),
    ];
    for (what, value) in finite {
        if !value.is_finite() {
            return Err(InputError::NotFinite { what: what.to_owned() });
        }
    }

    let non_negative = [
        ("active hours", params.active_hours),
        ("inactive hours", params.inactive_hours),
        ("rest hours", params.rest_hours),
        ("money budget", params.max_money),
    ];
    for (what, value) in non_negative {
        if value < 0.0 {
            return Err(InputError::Negative { what, value });
        }
    }

    let total = params.hours_per_day();
    if total > MAX_HOURS_PER_DAY {
        return Err(InputError::DayTooLong { total, limit: MAX_HOURS_PER_DAY });
    }
    Ok(())
}
