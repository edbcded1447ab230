// Centralized tolerances for robust geometry

pub const EPS_POS: f64 = 1e-9; // point / parameter coincidence threshold
pub const EPS_DENOM: f64 = 1e-12; // denominator guard for cross products

#[inline]
pub fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}
