//! Solver-noise suppression and display rounding.
//!
//! Snapping always runs before rounding, and ledger arithmetic uses the
//! snapped but unrounded values.

/// Magnitude below which a solved value is treated as exactly zero.
pub const SNAP_TOLERANCE: f64 = 1e-3;

/// Decimal places kept in every displayed number.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Return `0.0` when `|x| < tol`, otherwise `x` unchanged.
#[inline]
pub fn snap_to_zero(x: f64, tol: f64) -> f64 {
    if x.abs() < tol { 0.0 } else { x }
}

/// Round half away from zero to `decimals` places.
///
/// Negative zero is normalised to `+0.0` so it never prints as `-0.00`.
#[inline]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (x * scale).round() / scale + 0.0
}
