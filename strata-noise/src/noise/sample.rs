//! A noise value paired with its gradient.

use core::ops::{Add, Div, Mul, Neg, Sub};

use super::point::NoisePoint;

/// A scalar noise value and its analytic derivative vector.
///
/// All arithmetic acts on `value` and `derivative` independently, so the
/// pair is linear: summing weighted pairs is the same as summing values and
/// derivatives separately. Multi-octave accumulation in
/// [`NoiseSampler::sample_derivative`](crate::noise::sampler::NoiseSampler::sample_derivative)
/// relies on exactly this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDerivative<P> {
    /// The noise value.
    pub value: f64,
    /// Gradient of the value with respect to the sampled point.
    pub derivative: P,
}

impl<P> ValueDerivative<P> {
    /// Pair a value with its derivative.
    #[inline]
    pub const fn new(value: f64, derivative: P) -> Self {
        Self { value, derivative }
    }
}

impl<P: NoisePoint> ValueDerivative<P> {
    /// The additive identity: zero value, zero gradient.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, P::splat(0.0))
    }
}

impl<P: Add<Output = P>> Add for ValueDerivative<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<P: Sub<Output = P>> Sub for ValueDerivative<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl<P: Neg<Output = P>> Neg for ValueDerivative<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl<P: Mul<f64, Output = P>> Mul<f64> for ValueDerivative<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.derivative * rhs)
    }
}

impl<P: Div<f64, Output = P>> Div<f64> for ValueDerivative<P> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.derivative / rhs)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;

    #[test]
    fn arithmetic_is_component_wise_linear() {
        let a = ValueDerivative::new(1.5, DVec2::new(2.0, -4.0));
        let b = ValueDerivative::new(-0.5, DVec2::new(1.0, 8.0));

        let sum = a + b;
        assert_eq!(sum, ValueDerivative::new(1.0, DVec2::new(3.0, 4.0)));

        let diff = a - b;
        assert_eq!(diff, ValueDerivative::new(2.0, DVec2::new(1.0, -12.0)));

        let neg = -a;
        assert_eq!(neg, ValueDerivative::new(-1.5, DVec2::new(-2.0, 4.0)));

        let scaled = a * 2.0;
        assert_eq!(scaled, ValueDerivative::new(3.0, DVec2::new(4.0, -8.0)));

        let halved = a / 2.0;
        assert_eq!(halved, ValueDerivative::new(0.75, DVec2::new(1.0, -2.0)));

        // Weighted sums distribute over value and derivative independently.
        let combined = a * 0.25 + b * 0.75;
        assert_eq!(combined.value, a.value * 0.25 + b.value * 0.75);
        assert_eq!(
            combined.derivative,
            a.derivative * 0.25 + b.derivative * 0.75
        );
    }
}
