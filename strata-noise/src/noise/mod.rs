//! Gradient-noise generators and the fractal sampler built on them.
//!
//! - [`PerlinNoise`](perlin_noise::PerlinNoise) - classic lattice noise
//! - [`SimplexNoise`](simplex_noise::SimplexNoise) - simplex lattice noise,
//!   value and value+derivative forms
//! - [`NoiseSampler`](sampler::NoiseSampler) - scale, periodicity and
//!   multi-octave summation over either generator
//!
//! Both generators implement [`NoiseGenerator`] for each supported point
//! type; [`SimplexNoise`](simplex_noise::SimplexNoise) additionally
//! implements [`DifferentiableNoise`].

pub mod gradients;
pub mod perlin_noise;
pub mod point;
pub mod sample;
pub mod sampler;
pub mod simplex_noise;

use point::NoisePoint;
use sample::ValueDerivative;

/// A lattice noise evaluator over the point type `P`.
///
/// `raw` is deterministic and pure: identical `(table, point, period)`
/// always produce a bit-identical result. Output stays near `[-1, 1]`
/// (simplex can slightly exceed the nominal bound).
pub trait NoiseGenerator<P: NoisePoint> {
    /// Raw noise value at `point`, tiling along every axis whose `period`
    /// component is finite.
    fn raw(&self, point: P, period: P::Period) -> f64;
}

/// A generator that can also propagate analytic derivatives.
pub trait DifferentiableNoise<P: NoisePoint>: NoiseGenerator<P> {
    /// Raw noise value and its gradient with respect to `point`.
    ///
    /// The returned value is bit-identical to [`NoiseGenerator::raw`] at the
    /// same arguments.
    fn raw_derivative(&self, point: P, period: P::Period) -> ValueDerivative<P>;
}
