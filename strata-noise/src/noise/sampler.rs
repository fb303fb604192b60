//! Multi-octave fractal sampling over any [`NoiseGenerator`].

use tracing::warn;

use crate::math::INFINITE_PERIOD;
use crate::noise::point::NoisePoint;
use crate::noise::sample::ValueDerivative;
use crate::noise::{DifferentiableNoise, NoiseGenerator};

/// Fractal sampler configuration: frequency scale, tiling period, octave
/// count and per-octave amplitude decay.
///
/// A sampler holds no generator; the generator is passed per call, so one
/// configuration can drive classic and simplex noise interchangeably. With
/// `octaves == 1` (the default) [`sample`](Self::sample) is an exact
/// pass-through of `generator.raw(point * scale, period)` with no
/// normalization. With more octaves, each layer doubles the frequency and
/// the period and scales the amplitude by `persistence`; the accumulated
/// total is divided by the amplitude sum so the output range is independent
/// of the octave count.
///
/// ```
/// use glam::DVec2;
/// use strata_noise::{NoiseSampler2d, SimplexNoise};
///
/// let mut sampler = NoiseSampler2d::new();
/// sampler.set_octaves(3);
/// sampler.set_persistence(0.5);
///
/// let noise = SimplexNoise::new();
/// let v = sampler.sample(&noise, DVec2::new(4.2, -1.7));
/// assert!(v.abs() <= 1.05);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseSampler<P: NoisePoint> {
    scale: P,
    period: P::Period,
    octaves: u32,
    persistence: f64,
}

/// One-dimensional fractal sampler.
pub type NoiseSampler1d = NoiseSampler<f64>;
/// Two-dimensional fractal sampler.
pub type NoiseSampler2d = NoiseSampler<glam::DVec2>;
/// Three-dimensional fractal sampler.
pub type NoiseSampler3d = NoiseSampler<glam::DVec3>;
/// Four-dimensional fractal sampler.
pub type NoiseSampler4d = NoiseSampler<glam::DVec4>;

impl<P: NoisePoint> NoiseSampler<P> {
    /// A sampler with unit scale, no tiling, one octave and persistence 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: P::splat(1.0),
            period: P::INFINITE,
            octaves: 1,
            persistence: 1.0,
        }
    }

    /// Sample `generator` at `point`.
    pub fn sample<G: NoiseGenerator<P>>(&self, generator: &G, point: P) -> f64 {
        let base = point * self.scale;
        if self.octaves == 1 {
            return generator.raw(base, self.period);
        }

        let mut total = 0.0;
        let mut amplitude_sum = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut period = self.period;
        for _ in 0..self.octaves {
            total += generator.raw(base * frequency, period) * amplitude;
            amplitude_sum += amplitude;
            frequency *= 2.0;
            period = P::double_period(period);
            amplitude *= self.persistence;
        }
        total / amplitude_sum
    }

    /// Sample `generator` at `point` together with the analytic derivative.
    ///
    /// The octave loop is the same as [`sample`](Self::sample), run over
    /// [`ValueDerivative`] pairs; their linear arithmetic makes the weighted
    /// accumulation identical for values and derivatives.
    pub fn sample_derivative<G: DifferentiableNoise<P>>(
        &self,
        generator: &G,
        point: P,
    ) -> ValueDerivative<P> {
        let base = point * self.scale;
        if self.octaves == 1 {
            return generator.raw_derivative(base, self.period);
        }

        let mut total = ValueDerivative::zero();
        let mut amplitude_sum = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut period = self.period;
        for _ in 0..self.octaves {
            total = total + generator.raw_derivative(base * frequency, period) * amplitude;
            amplitude_sum += amplitude;
            frequency *= 2.0;
            period = P::double_period(period);
            amplitude *= self.persistence;
        }
        total / amplitude_sum
    }

    /// Set the octave count. Zero is invalid and clamps to one.
    pub fn set_octaves(&mut self, octaves: u32) {
        if octaves == 0 {
            warn!("octave count 0 is invalid, clamping to 1");
        }
        self.octaves = octaves.max(1);
    }

    /// Octave count.
    #[must_use]
    pub const fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Set the per-octave amplitude decay.
    pub fn set_persistence(&mut self, persistence: f64) {
        self.persistence = persistence;
    }

    /// Per-octave amplitude decay.
    #[must_use]
    pub const fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Set the frequency scale on all axes at once.
    pub fn set_scale(&mut self, scale: P) {
        self.scale = scale;
    }

    /// Frequency scale.
    #[must_use]
    pub const fn scale(&self) -> P {
        self.scale
    }

    /// Set the tiling period on all axes at once.
    pub fn set_period(&mut self, period: P::Period) {
        self.period = period;
    }

    /// Tiling period.
    #[must_use]
    pub const fn period(&self) -> P::Period {
        self.period
    }
}

impl<P: NoisePoint> Default for NoiseSampler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSampler1d {
    /// Set the frequency scale.
    pub fn set_scale_x(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Tile every `period` lattice units.
    pub fn set_period_x(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period = period;
    }

    /// Stop tiling.
    pub fn remove_period_x(&mut self) {
        self.period = INFINITE_PERIOD;
    }
}

impl NoiseSampler2d {
    /// Set the frequency scale along x.
    pub fn set_scale_x(&mut self, scale: f64) {
        self.scale.x = scale;
    }

    /// Set the frequency scale along y.
    pub fn set_scale_y(&mut self, scale: f64) {
        self.scale.y = scale;
    }

    /// Tile the x axis every `period` lattice units.
    pub fn set_period_x(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.x = period;
    }

    /// Tile the y axis every `period` lattice units.
    pub fn set_period_y(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.y = period;
    }

    /// Stop tiling the x axis.
    pub fn remove_period_x(&mut self) {
        self.period.x = INFINITE_PERIOD;
    }

    /// Stop tiling the y axis.
    pub fn remove_period_y(&mut self) {
        self.period.y = INFINITE_PERIOD;
    }
}

impl NoiseSampler3d {
    /// Set the frequency scale along x.
    pub fn set_scale_x(&mut self, scale: f64) {
        self.scale.x = scale;
    }

    /// Set the frequency scale along y.
    pub fn set_scale_y(&mut self, scale: f64) {
        self.scale.y = scale;
    }

    /// Set the frequency scale along z.
    pub fn set_scale_z(&mut self, scale: f64) {
        self.scale.z = scale;
    }

    /// Tile the x axis every `period` lattice units.
    pub fn set_period_x(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.x = period;
    }

    /// Tile the y axis every `period` lattice units.
    pub fn set_period_y(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.y = period;
    }

    /// Tile the z axis every `period` lattice units.
    pub fn set_period_z(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.z = period;
    }

    /// Stop tiling the x axis.
    pub fn remove_period_x(&mut self) {
        self.period.x = INFINITE_PERIOD;
    }

    /// Stop tiling the y axis.
    pub fn remove_period_y(&mut self) {
        self.period.y = INFINITE_PERIOD;
    }

    /// Stop tiling the z axis.
    pub fn remove_period_z(&mut self) {
        self.period.z = INFINITE_PERIOD;
    }
}

impl NoiseSampler4d {
    /// Set the frequency scale along x.
    pub fn set_scale_x(&mut self, scale: f64) {
        self.scale.x = scale;
    }

    /// Set the frequency scale along y.
    pub fn set_scale_y(&mut self, scale: f64) {
        self.scale.y = scale;
    }

    /// Set the frequency scale along z.
    pub fn set_scale_z(&mut self, scale: f64) {
        self.scale.z = scale;
    }

    /// Set the frequency scale along w.
    pub fn set_scale_w(&mut self, scale: f64) {
        self.scale.w = scale;
    }

    /// Tile the x axis every `period` lattice units.
    pub fn set_period_x(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.x = period;
    }

    /// Tile the y axis every `period` lattice units.
    pub fn set_period_y(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.y = period;
    }

    /// Tile the z axis every `period` lattice units.
    pub fn set_period_z(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.z = period;
    }

    /// Tile the w axis every `period` lattice units.
    pub fn set_period_w(&mut self, period: i32) {
        debug_assert!(period > 0, "period must be positive");
        self.period.w = period;
    }

    /// Stop tiling the x axis.
    pub fn remove_period_x(&mut self) {
        self.period.x = INFINITE_PERIOD;
    }

    /// Stop tiling the y axis.
    pub fn remove_period_y(&mut self) {
        self.period.y = INFINITE_PERIOD;
    }

    /// Stop tiling the z axis.
    pub fn remove_period_z(&mut self) {
        self.period.z = INFINITE_PERIOD;
    }

    /// Stop tiling the w axis.
    pub fn remove_period_w(&mut self) {
        self.period.w = INFINITE_PERIOD;
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, IVec2};

    use super::*;
    use crate::noise::perlin_noise::PerlinNoise;
    use crate::noise::simplex_noise::SimplexNoise;

    /// Generator whose value is a constant everywhere, with a zero gradient.
    struct Constant(f64);

    impl NoiseGenerator<DVec2> for Constant {
        fn raw(&self, _point: DVec2, _period: IVec2) -> f64 {
            self.0
        }
    }

    impl DifferentiableNoise<DVec2> for Constant {
        fn raw_derivative(&self, _point: DVec2, _period: IVec2) -> ValueDerivative<DVec2> {
            ValueDerivative::new(self.0, DVec2::ZERO)
        }
    }

    #[test]
    fn constant_field_survives_octave_averaging_exactly() {
        let mut sampler = NoiseSampler2d::new();
        sampler.set_octaves(3);
        sampler.set_persistence(0.5);

        let constant = Constant(0.375);
        #[allow(clippy::float_cmp, reason = "dyadic weights make the average exact")]
        {
            assert_eq!(sampler.sample(&constant, DVec2::new(12.0, -7.5)), 0.375);
            let pair = sampler.sample_derivative(&constant, DVec2::new(12.0, -7.5));
            assert_eq!(pair.value, 0.375);
            assert_eq!(pair.derivative, DVec2::ZERO);
        }
    }

    #[test]
    fn single_octave_is_a_bit_exact_pass_through() {
        let mut sampler = NoiseSampler2d::new();
        sampler.set_scale_x(0.5);
        sampler.set_scale_y(2.0);
        sampler.set_period_x(8);

        let noise = PerlinNoise::new();
        let point = DVec2::new(3.7, -1.2);
        let expected = noise.raw_2d(
            point * DVec2::new(0.5, 2.0),
            IVec2::new(8, INFINITE_PERIOD),
        );
        #[allow(clippy::float_cmp, reason = "pass-through must be bit-exact")]
        {
            assert_eq!(sampler.sample(&noise, point), expected);
        }
    }

    #[test]
    fn zero_octaves_clamps_to_one() {
        let mut sampler = NoiseSampler2d::new();
        sampler.set_octaves(0);
        assert_eq!(sampler.octaves(), 1);

        // Still samples like a pass-through rather than dividing by zero.
        let noise = SimplexNoise::new();
        let v = sampler.sample(&noise, DVec2::new(0.3, 0.8));
        assert!(v.is_finite());
    }

    #[test]
    fn per_axis_setters_touch_exactly_one_component() {
        let mut sampler = NoiseSampler2d::new();
        sampler.set_scale_y(4.0);
        assert_eq!(sampler.scale(), DVec2::new(1.0, 4.0));

        sampler.set_period_y(16);
        assert_eq!(sampler.period(), IVec2::new(INFINITE_PERIOD, 16));

        sampler.remove_period_y();
        assert_eq!(sampler.period(), IVec2::splat(INFINITE_PERIOD));
    }

    #[test]
    fn octaves_add_detail_but_stay_in_range() {
        let mut sampler = NoiseSampler2d::new();
        sampler.set_octaves(5);
        sampler.set_persistence(0.5);

        let noise = SimplexNoise::new();
        for i in 0..128 {
            let p = DVec2::new(f64::from(i) * 0.83, f64::from(i) * -0.29 + 3.0);
            let v = sampler.sample(&noise, p);
            assert!(v.abs() <= 1.05, "out of range at {p}: {v}");
        }
    }
}
