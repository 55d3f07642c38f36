//! The three mutually exclusive temporal modes an expedition can run in.

use std::fmt;

/// Temporal allocation class for expedition volume.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExpedMode {
    /// Daytime active hours.  Consumes the active play-time budget.
    Run,
    /// Daytime hours where expeditions keep cycling but no sorties happen.
    Off,
    /// Overnight: three slot-uses in total, yields scaled by the day count.
    Sleep,
}

impl ExpedMode {
    pub const ALL: [ExpedMode; 3] = [ExpedMode::Run, ExpedMode::Off, ExpedMode::Sleep];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpedMode::Run   => "run",
            ExpedMode::Off   => "off",
            ExpedMode::Sleep => "sleep",
        }
    }
}

impl fmt::Display for ExpedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
