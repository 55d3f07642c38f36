//! Global plan parameters and the budgets derived from them.

use crate::{Resource, ResourceVec};

/// Concurrent expedition slots filled in every temporal mode.
pub const SLOTS: f64 = 3.0;

pub const SECS_PER_HOUR: f64 = 3_600.0;

/// Scalar inputs of one solve.
///
/// Typically loaded from a JSON file by the application and overridden from
/// the command line.  `Default` reproduces the interactive defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanParams {
    /// Hours per day of active play (sorties and run-mode expeditions).
    pub active_hours: f64,

    /// Hours per day where expeditions cycle but no sorties are played.
    pub inactive_hours: f64,

    /// Overnight rest length in hours.  Expeditions at least this long cannot
    /// be used in sleep mode.
    pub rest_hours: f64,

    /// Number of days in the planning period.
    pub days: u32,

    /// Money budget for shop purchases.  `0` disables the shop.
    pub max_money: f64,

    /// Carried-over and special reward, added after the solve.
    pub special: f64,

    pub fuel_offset:      f64,
    pub ammo_offset:      f64,
    pub steel_offset:     f64,
    pub bucket_offset:    f64,
    pub readiness_offset: f64,

    /// When `false`, the four shortest expeditions may not run in off mode.
    pub allow_short_inactive: bool,
}

impl Default for PlanParams {
    fn default() -> Self {
        Self {
            active_hours:         12.0,
            inactive_hours:       6.0,
            rest_hours:           6.0,
            days:                 31,
            max_money:            0.0,
            special:              3_000.0,
            fuel_offset:          200_000.0,
            ammo_offset:          200_000.0,
            steel_offset:         150_000.0,
            bucket_offset:        1_900.0,
            readiness_offset:     0.0,
            allow_short_inactive: true,
        }
    }
}

impl PlanParams {
    /// Total active hours over the whole period.
    #[inline]
    pub fn active_budget(&self) -> f64 {
        self.active_hours * self.days as f64
    }

    /// Total inactive hours over the whole period.
    #[inline]
    pub fn inactive_budget(&self) -> f64 {
        self.inactive_hours * self.days as f64
    }

    /// Hours per day claimed by the three schedule blocks.
    #[inline]
    pub fn hours_per_day(&self) -> f64 {
        self.active_hours + self.inactive_hours + self.rest_hours
    }

    /// Initial stock of every resource.  The time dimension is the active
    /// budget in seconds.
    pub fn offsets(&self) -> ResourceVec {
        let mut v = ResourceVec::ZERO;
        v[Resource::Fuel]      = self.fuel_offset;
        v[Resource::Ammo]      = self.ammo_offset;
        v[Resource::Steel]     = self.steel_offset;
        v[Resource::Bucket]    = self.bucket_offset;
        v[Resource::Readiness] = self.readiness_offset;
        v[Resource::Time]      = self.active_budget() * SECS_PER_HOUR;
        v
    }
}
