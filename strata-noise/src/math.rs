//! Scalar utilities shared by the noise generators.
//!
//! The wrap semantics here are load-bearing near and below zero:
//! [`floor_to_int`] floors toward negative infinity (not toward zero) and
//! [`periodic`] is a true modulo with a result in `[0, period)` even for
//! negative inputs. Truncating variants would tear the lattice apart at the
//! origin.

use num_traits::Euclid;

/// Sentinel period for an axis that does not tile.
///
/// `periodic(v, INFINITE_PERIOD)` leaves non-negative lattice coordinates
/// unchanged, so the noise field extends without repetition along that axis.
pub const INFINITE_PERIOD: i32 = i32::MAX;

/// Floor toward negative infinity, as an `i32` lattice index.
///
/// `floor_to_int(-1.5) == -2`, where an `as`-cast alone would truncate to `-1`.
#[inline]
#[must_use]
pub fn floor_to_int(x: f64) -> i32 {
    x.floor() as i32
}

/// True (non-negative) modulo: the representative of `value` in `[0, period)`.
///
/// Works for both integer lattice coordinates and float input coordinates;
/// unlike `%`, negative values wrap upward: `periodic(-3, 8) == 5`.
#[inline]
#[must_use]
pub fn periodic<T: Euclid>(value: T, period: T) -> T {
    value.rem_euclid(&period)
}

/// Wrap a float input coordinate into `[0, period)` when the axis tiles.
///
/// Axes with the [`INFINITE_PERIOD`] sentinel pass through unchanged.
#[inline]
#[must_use]
pub fn wrap_coordinate(v: f64, period: i32) -> f64 {
    if period == INFINITE_PERIOD {
        v
    } else {
        periodic(v, f64::from(period))
    }
}

/// Double a period component, saturating at [`INFINITE_PERIOD`].
///
/// Octave loops double the period alongside the frequency; saturation keeps
/// the sentinel stable and makes overflow impossible.
#[inline]
#[must_use]
pub const fn double_period(period: i32) -> i32 {
    period.saturating_mul(2)
}

/// Quintic fade `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at `t = 0` and `t = 1`, so classic noise
/// is C2-continuous across cell boundaries.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}
