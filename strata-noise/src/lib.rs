//! Seamlessly tiling gradient noise over 1-4 dimensions.
//!
//! This crate provides the two standard gradient-noise lattices and a fractal
//! compositor on top of them:
//!
//! - [`PerlinNoise`] - classic lattice noise (2^D corners, quintic fade)
//! - [`SimplexNoise`] - simplex lattice noise (D+1 corners, quartic falloff),
//!   with analytic derivatives and a rotated-gradient variant
//! - [`NoiseSampler`] - frequency scaling, per-axis integer periodicity and
//!   multi-octave amplitude-weighted summation over either generator
//!
//! Points are plain `f64` (1D) or glam vectors ([`glam::DVec2`] .. [`glam::DVec4`]);
//! periods are matching integer vectors where [`math::INFINITE_PERIOD`] marks a
//! non-tiling axis. Every operation is synchronous, pure and deterministic:
//! the same `(table, point, period)` always produces the same bits.
//!
//! ```
//! use glam::DVec2;
//! use strata_noise::{NoiseSampler2d, SimplexNoise};
//!
//! let noise = SimplexNoise::new();
//! let mut sampler = NoiseSampler2d::new();
//! sampler.set_octaves(4);
//! sampler.set_persistence(0.5);
//! sampler.set_period_x(16);
//!
//! let v = sampler.sample(&noise, DVec2::new(3.25, -1.5));
//! assert!(v.is_finite());
//! ```

pub mod hash;
pub mod math;
pub mod noise;

pub use hash::PermutationTable;
pub use noise::perlin_noise::PerlinNoise;
pub use noise::point::NoisePoint;
pub use noise::sample::ValueDerivative;
pub use noise::sampler::{
    NoiseSampler, NoiseSampler1d, NoiseSampler2d, NoiseSampler3d, NoiseSampler4d,
};
pub use noise::simplex_noise::SimplexNoise;
pub use noise::{DifferentiableNoise, NoiseGenerator};
