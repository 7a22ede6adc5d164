//! Tolerant floating-point comparisons.
//!
//! Rate arithmetic accumulates round-off: the incremental total maintained by
//! the direct-method aggregator agrees with the exact sum only to within a
//! few ulps per partial update.  Selection scans therefore compare rates with
//! a small relative tolerance.  Time comparisons stay strict — two events at
//! the same floating-point time are a bug at the call site, not a rounding
//! artifact.

/// Relative comparison tolerance for rates.
pub const EPSILON: f64 = 1e-12;

/// Tolerance scaled to the magnitudes being compared, with an absolute floor
/// of `EPSILON` near zero.
#[inline]
fn tolerance(x: f64, y: f64) -> f64 {
    EPSILON * x.abs().max(y.abs()).max(1.0)
}

/// `x >= y` under the relative tolerance.
#[inline]
pub fn approx_ge(x: f64, y: f64) -> bool {
    x >= y - tolerance(x, y)
}

/// `x <= y` under the relative tolerance.
#[inline]
pub fn approx_le(x: f64, y: f64) -> bool {
    y >= x - tolerance(x, y)
}

/// `x == 0` under the absolute tolerance.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() <= EPSILON
}

/// `x < 0` beyond the absolute tolerance.
#[inline]
pub fn is_negative(x: f64) -> bool {
    x < -EPSILON
}
