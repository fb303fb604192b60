//! Classic ("Perlin") lattice gradient noise over 1-4 dimensions.
//!
//! Each evaluation floors the point onto the integer lattice, hashes the
//! 2^D wrapped corner coordinates into gradient picks, and blends the corner
//! contributions with the quintic fade through D nested interpolations. The
//! per-dimension output constants are empirical normalization factors for
//! exactly these gradient sets; they keep the result near `[-1, 1]` and must
//! not be re-derived.

use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4};
use rand::Rng;

use crate::hash::PermutationTable;
use crate::math::{fade, floor_to_int, lerp, periodic};
use crate::noise::NoiseGenerator;
use crate::noise::gradients::{GRAD1, PERLIN_GRAD2, PERLIN_GRAD3, PERLIN_GRAD4};

/// Empirical normalization, 1D.
const SCALE_1D: f64 = 0.188;
/// Empirical normalization, 2D.
const SCALE_2D: f64 = 0.507;
/// Empirical normalization, 3D.
const SCALE_3D: f64 = 0.936;
/// Empirical normalization, 4D.
const SCALE_4D: f64 = 0.87;

/// Classic lattice gradient noise.
///
/// Owns its [`PermutationTable`]; the same table, point and period always
/// produce the same bits. Implements [`NoiseGenerator`] for every supported
/// point type.
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinNoise {
    perm: PermutationTable,
}

impl PerlinNoise {
    /// Classic noise over the fixed reference permutation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            perm: PermutationTable::reference(),
        }
    }

    /// Classic noise over a permutation shuffled from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            perm: PermutationTable::shuffled(rng),
        }
    }

    /// Classic noise over an explicit table.
    #[must_use]
    pub const fn with_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    /// 1D classic noise; `period` tiles the lattice when finite.
    #[must_use]
    pub fn raw_1d(&self, point: f64, period: i32) -> f64 {
        let ix = floor_to_int(point);
        let fx = point - f64::from(ix);

        let n0 = self.gradient_1d(ix, period) * fx;
        let n1 = self.gradient_1d(ix + 1, period) * (fx - 1.0);

        SCALE_1D * lerp(fade(fx), n0, n1)
    }

    /// 2D classic noise.
    #[must_use]
    pub fn raw_2d(&self, point: DVec2, period: IVec2) -> f64 {
        let ix = floor_to_int(point.x);
        let iy = floor_to_int(point.y);
        let f = point - DVec2::new(f64::from(ix), f64::from(iy));

        let n00 = self.corner_2d(ix, iy, 0, 0, f, period);
        let n01 = self.corner_2d(ix, iy, 0, 1, f, period);
        let n10 = self.corner_2d(ix, iy, 1, 0, f, period);
        let n11 = self.corner_2d(ix, iy, 1, 1, f, period);

        let ty = fade(f.y);
        let nx0 = lerp(ty, n00, n01);
        let nx1 = lerp(ty, n10, n11);

        SCALE_2D * lerp(fade(f.x), nx0, nx1)
    }

    /// 3D classic noise.
    #[must_use]
    pub fn raw_3d(&self, point: DVec3, period: IVec3) -> f64 {
        let ix = floor_to_int(point.x);
        let iy = floor_to_int(point.y);
        let iz = floor_to_int(point.z);
        let f = point - DVec3::new(f64::from(ix), f64::from(iy), f64::from(iz));

        let tz = fade(f.z);
        let n00 = lerp(
            tz,
            self.corner_3d(ix, iy, iz, 0, 0, 0, f, period),
            self.corner_3d(ix, iy, iz, 0, 0, 1, f, period),
        );
        let n01 = lerp(
            tz,
            self.corner_3d(ix, iy, iz, 0, 1, 0, f, period),
            self.corner_3d(ix, iy, iz, 0, 1, 1, f, period),
        );
        let n10 = lerp(
            tz,
            self.corner_3d(ix, iy, iz, 1, 0, 0, f, period),
            self.corner_3d(ix, iy, iz, 1, 0, 1, f, period),
        );
        let n11 = lerp(
            tz,
            self.corner_3d(ix, iy, iz, 1, 1, 0, f, period),
            self.corner_3d(ix, iy, iz, 1, 1, 1, f, period),
        );

        let ty = fade(f.y);
        let n0 = lerp(ty, n00, n01);
        let n1 = lerp(ty, n10, n11);

        SCALE_3D * lerp(fade(f.x), n0, n1)
    }

    /// 4D classic noise.
    #[must_use]
    pub fn raw_4d(&self, point: DVec4, period: IVec4) -> f64 {
        let ix = floor_to_int(point.x);
        let iy = floor_to_int(point.y);
        let iz = floor_to_int(point.z);
        let iw = floor_to_int(point.w);
        let f = point
            - DVec4::new(
                f64::from(ix),
                f64::from(iy),
                f64::from(iz),
                f64::from(iw),
            );

        let cell = IVec4::new(ix, iy, iz, iw);
        let tw = fade(f.w);
        let mut blended = [0.0; 8];
        for (index, slot) in blended.iter_mut().enumerate() {
            let ox = (index >> 2) as i32;
            let oy = ((index >> 1) & 1) as i32;
            let oz = (index & 1) as i32;
            *slot = lerp(
                tw,
                self.corner_4d(cell, IVec4::new(ox, oy, oz, 0), f, period),
                self.corner_4d(cell, IVec4::new(ox, oy, oz, 1), f, period),
            );
        }

        let tz = fade(f.z);
        let n00 = lerp(tz, blended[0], blended[1]);
        let n01 = lerp(tz, blended[2], blended[3]);
        let n10 = lerp(tz, blended[4], blended[5]);
        let n11 = lerp(tz, blended[6], blended[7]);

        let ty = fade(f.y);
        let n0 = lerp(ty, n00, n01);
        let n1 = lerp(ty, n10, n11);

        SCALE_4D * lerp(fade(f.x), n0, n1)
    }

    fn gradient_1d(&self, i: i32, period: i32) -> f64 {
        let hash = self.perm.mix(&[periodic(i, period) as u32]);
        GRAD1[(hash & 15) as usize]
    }

    fn corner_2d(&self, ix: i32, iy: i32, ox: i32, oy: i32, f: DVec2, period: IVec2) -> f64 {
        let hash = self.perm.mix(&[
            periodic(ix + ox, period.x) as u32,
            periodic(iy + oy, period.y) as u32,
        ]);
        let gradient = PERLIN_GRAD2[(hash & 7) as usize];
        gradient.dot(f - DVec2::new(f64::from(ox), f64::from(oy)))
    }

    #[expect(clippy::too_many_arguments, reason = "corner offsets stay scalar")]
    fn corner_3d(
        &self,
        ix: i32,
        iy: i32,
        iz: i32,
        ox: i32,
        oy: i32,
        oz: i32,
        f: DVec3,
        period: IVec3,
    ) -> f64 {
        let hash = self.perm.mix(&[
            periodic(ix + ox, period.x) as u32,
            periodic(iy + oy, period.y) as u32,
            periodic(iz + oz, period.z) as u32,
        ]);
        let gradient = PERLIN_GRAD3[(hash & 15) as usize];
        gradient.dot(f - DVec3::new(f64::from(ox), f64::from(oy), f64::from(oz)))
    }

    fn corner_4d(&self, cell: IVec4, offset: IVec4, f: DVec4, period: IVec4) -> f64 {
        let hash = self.perm.mix(&[
            periodic(cell.x + offset.x, period.x) as u32,
            periodic(cell.y + offset.y, period.y) as u32,
            periodic(cell.z + offset.z, period.z) as u32,
            periodic(cell.w + offset.w, period.w) as u32,
        ]);
        let gradient = PERLIN_GRAD4[(hash & 31) as usize];
        gradient.dot(f - offset.as_dvec4())
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseGenerator<f64> for PerlinNoise {
    #[inline]
    fn raw(&self, point: f64, period: i32) -> f64 {
        self.raw_1d(point, period)
    }
}

impl NoiseGenerator<DVec2> for PerlinNoise {
    #[inline]
    fn raw(&self, point: DVec2, period: IVec2) -> f64 {
        self.raw_2d(point, period)
    }
}

impl NoiseGenerator<DVec3> for PerlinNoise {
    #[inline]
    fn raw(&self, point: DVec3, period: IVec3) -> f64 {
        self.raw_3d(point, period)
    }
}

impl NoiseGenerator<DVec4> for PerlinNoise {
    #[inline]
    fn raw(&self, point: DVec4, period: IVec4) -> f64 {
        self.raw_4d(point, period)
    }
}
