//! The six-dimensional resource space every flow in the model lives in.
//!
//! Four consumable stockpiles, one readiness counter, and the active play-time
//! budget in seconds.  All action costs, expedition yields, and shop yields are
//! linear combinations over this space, stored as a [`ResourceVec`].

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

/// Number of tracked resource dimensions.
pub const NUM_RESOURCES: usize = 6;

/// Number of resources shown in a ledger.  The trailing time dimension is
/// excluded from display.
pub const DISPLAYED_RESOURCES: usize = 5;

// ── Resource ─────────────────────────────────────────────────────────────────

/// One resource dimension.  Discriminants are the row index in every matrix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Resource {
    Fuel      = 0,
    Ammo      = 1,
    Steel     = 2,
    Bucket    = 3,
    /// Expedition readiness ("cond") counter.
    Readiness = 4,
    /// Active play time, in seconds.
    Time      = 5,
}

impl Resource {
    pub const ALL: [Resource; NUM_RESOURCES] = [
        Resource::Fuel,
        Resource::Ammo,
        Resource::Steel,
        Resource::Bucket,
        Resource::Readiness,
        Resource::Time,
    ];

    /// The resources that appear in a ledger, in row order.
    pub const DISPLAYED: [Resource; DISPLAYED_RESOURCES] = [
        Resource::Fuel,
        Resource::Ammo,
        Resource::Steel,
        Resource::Bucket,
        Resource::Readiness,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case column name used by the CSV loaders and writers.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Fuel      => "fuel",
            Resource::Ammo      => "ammo",
            Resource::Steel     => "steel",
            Resource::Bucket    => "bucket",
            Resource::Readiness => "cond",
            Resource::Time      => "time",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ResourceVec ──────────────────────────────────────────────────────────────

/// A value for each of the six resource dimensions.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceVec(pub [f64; NUM_RESOURCES]);

impl ResourceVec {
    pub const ZERO: ResourceVec = ResourceVec([0.0; NUM_RESOURCES]);

    pub const fn new(values: [f64; NUM_RESOURCES]) -> Self {
        ResourceVec(values)
    }

    /// Build from a slice, returning `None` unless it has exactly six entries.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        <[f64; NUM_RESOURCES]>::try_from(values).ok().map(ResourceVec)
    }

    /// The five displayed dimensions (time dropped).
    pub fn displayed(&self) -> [f64; DISPLAYED_RESOURCES] {
        let mut out = [0.0; DISPLAYED_RESOURCES];
        out.copy_from_slice(&self.0[..DISPLAYED_RESOURCES]);
        out
    }

    /// Apply `f` to every component.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        ResourceVec(self.0.map(f))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl Index<Resource> for ResourceVec {
    type Output = f64;
    #[inline]
    fn index(&self, r: Resource) -> &f64 {
        &self.0[r.index()]
    }
}

impl IndexMut<Resource> for ResourceVec {
    #[inline]
    fn index_mut(&mut self, r: Resource) -> &mut f64 {
        &mut self.0[r.index()]
    }
}

impl Add for ResourceVec {
    type Output = ResourceVec;
    fn add(self, rhs: ResourceVec) -> ResourceVec {
        ResourceVec(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl AddAssign for ResourceVec {
    fn add_assign(&mut self, rhs: ResourceVec) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl Sub for ResourceVec {
    type Output = ResourceVec;
    fn sub(self, rhs: ResourceVec) -> ResourceVec {
        ResourceVec(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Mul<f64> for ResourceVec {
    type Output = ResourceVec;
    fn mul(self, k: f64) -> ResourceVec {
        self.map(|v| v * k)
    }
}
