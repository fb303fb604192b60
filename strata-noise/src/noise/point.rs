//! The dimension seam between samplers and generators.
//!
//! Instead of compile-time dimensional metaprogramming, each supported
//! dimension is a concrete point type (`f64`, [`DVec2`], [`DVec3`],
//! [`DVec4`]) tied to a matching integer period type through [`NoisePoint`].

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4};

use crate::math::{INFINITE_PERIOD, double_period};

/// A D-dimensional sampling coordinate with a matching integer period type.
///
/// Implemented for `f64` (1D) and the glam double vectors (2-4D). The
/// arithmetic bounds are what the octave loop and [`ValueDerivative`]
/// accumulation need; all of them are component-wise and linear.
///
/// [`ValueDerivative`]: crate::noise::sample::ValueDerivative
pub trait NoisePoint:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Per-axis integer period: a positive modulus, or
    /// [`INFINITE_PERIOD`](crate::math::INFINITE_PERIOD) for a non-tiling
    /// axis.
    type Period: Copy + Debug + PartialEq;

    /// Number of axes.
    const DIMENSION: usize;

    /// The all-axes-infinite period (no tiling anywhere).
    const INFINITE: Self::Period;

    /// A point with `value` on every axis.
    fn splat(value: f64) -> Self;

    /// Double every period component, saturating at the infinite sentinel.
    fn double_period(period: Self::Period) -> Self::Period;
}

impl NoisePoint for f64 {
    type Period = i32;

    const DIMENSION: usize = 1;
    const INFINITE: i32 = INFINITE_PERIOD;

    #[inline]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline]
    fn double_period(period: i32) -> i32 {
        double_period(period)
    }
}

impl NoisePoint for DVec2 {
    type Period = IVec2;

    const DIMENSION: usize = 2;
    const INFINITE: IVec2 = IVec2::MAX;

    #[inline]
    fn splat(value: f64) -> Self {
        Self::splat(value)
    }

    #[inline]
    fn double_period(period: IVec2) -> IVec2 {
        IVec2::new(double_period(period.x), double_period(period.y))
    }
}

impl NoisePoint for DVec3 {
    type Period = IVec3;

    const DIMENSION: usize = 3;
    const INFINITE: IVec3 = IVec3::MAX;

    #[inline]
    fn splat(value: f64) -> Self {
        Self::splat(value)
    }

    #[inline]
    fn double_period(period: IVec3) -> IVec3 {
        IVec3::new(
            double_period(period.x),
            double_period(period.y),
            double_period(period.z),
        )
    }
}

impl NoisePoint for DVec4 {
    type Period = IVec4;

    const DIMENSION: usize = 4;
    const INFINITE: IVec4 = IVec4::MAX;

    #[inline]
    fn splat(value: f64) -> Self {
        Self::splat(value)
    }

    #[inline]
    fn double_period(period: IVec4) -> IVec4 {
        IVec4::new(
            double_period(period.x),
            double_period(period.y),
            double_period(period.z),
            double_period(period.w),
        )
    }
}
