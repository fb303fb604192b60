//! Simplex lattice gradient noise over 1-4 dimensions.
//!
//! Points are skewed onto the simplex grid, the D+1 corners of the enclosing
//! simplex are visited in coordinate-magnitude order, and each corner inside
//! the falloff radius contributes `t^4 * dot(gradient, offset)`. Corners
//! outside the radius contribute exactly zero, which is the early-out that
//! makes simplex cheaper than classic noise per dimension.
//!
//! Tiling: a skewed lattice is not periodic under lattice wrapping alone, so
//! finite-period axes wrap the input coordinate before skewing; corner
//! lattice coordinates are wrapped again before hashing so gradient picks
//! tile with the field. `raw(p + n*k) == raw(p)` holds bit-exactly along a
//! tiled axis.
//!
//! The derivative forms propagate the exact analytic gradient through the
//! quartic kernel: per axis, `-8*t^3*offset*(g.offset) + t^4*g`, scaled by
//! the same empirical constant as the value.

use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4};
use rand::Rng;

use crate::hash::PermutationTable;
use crate::math::{floor_to_int, periodic, wrap_coordinate};
use crate::noise::gradients::{
    GRAD1, ROT_GRAD2, ROT_GRAD3, SIMPLEX_GRAD2, SIMPLEX_GRAD3, SIMPLEX_GRAD4, SIMPLEX_ORDER_4D,
};
use crate::noise::sample::ValueDerivative;
use crate::noise::{DifferentiableNoise, NoiseGenerator};

const SQRT_3: f64 = 1.7320508075688772;
const SQRT_5: f64 = 2.23606797749979;

/// Skewing factor, 2D: `0.5 * (sqrt(3) - 1)`.
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
/// Unskewing factor, 2D: `(3 - sqrt(3)) / 6`.
const G2: f64 = (3.0 - SQRT_3) / 6.0;
/// Skewing factor, 3D: `1/3`.
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor, 3D: `1/6`.
const G3: f64 = 1.0 / 6.0;
/// Skewing factor, 4D: `(sqrt(5) - 1) / 4`.
const F4: f64 = (SQRT_5 - 1.0) / 4.0;
/// Unskewing factor, 4D: `(5 - sqrt(5)) / 20`.
const G4: f64 = (5.0 - SQRT_5) / 20.0;

/// Squared falloff radius per dimension. 1D uses the full unit radius.
const RADIUS_SQ_1D: f64 = 1.0;
const RADIUS_SQ_2D: f64 = 0.5;
const RADIUS_SQ_3D: f64 = 0.6;
const RADIUS_SQ_4D: f64 = 0.6;

/// Empirical normalization, 1D.
const SCALE_1D: f64 = 0.395;
/// Empirical normalization, 2D.
const SCALE_2D: f64 = 40.0;
/// Empirical normalization, 3D.
const SCALE_3D: f64 = 28.0;
/// Empirical normalization, 4D.
const SCALE_4D: f64 = 27.0;

/// Simplex lattice gradient noise with analytic derivatives.
///
/// Owns its [`PermutationTable`]. Implements [`NoiseGenerator`] and
/// [`DifferentiableNoise`] for every supported point type; the 2D and 3D
/// derivative forms additionally come in rotated-gradient variants for
/// flow-style animated fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexNoise {
    perm: PermutationTable,
}

/// Pick the traversal order of the two middle 2D corners.
///
/// Returns the lattice offset of the second corner; the first is always the
/// cell origin and the last is `(1, 1)`.
pub(crate) fn corner_order_2d(x0: f64, y0: f64) -> (i32, i32) {
    if x0 > y0 { (1, 0) } else { (0, 1) }
}

/// Pick the traversal order of the two middle 3D corners by ranking the
/// cell-relative coordinates.
pub(crate) fn corner_order_3d(d: DVec3) -> (IVec3, IVec3) {
    if d.x >= d.y {
        if d.y >= d.z {
            (IVec3::new(1, 0, 0), IVec3::new(1, 1, 0))
        } else if d.x >= d.z {
            (IVec3::new(1, 0, 0), IVec3::new(1, 0, 1))
        } else {
            (IVec3::new(0, 0, 1), IVec3::new(1, 0, 1))
        }
    } else if d.y < d.z {
        (IVec3::new(0, 0, 1), IVec3::new(0, 1, 1))
    } else if d.x < d.z {
        (IVec3::new(0, 1, 0), IVec3::new(0, 1, 1))
    } else {
        (IVec3::new(0, 1, 0), IVec3::new(1, 1, 0))
    }
}

/// Pick the traversal order of the three middle 4D corners via the 64-entry
/// ranking table keyed by the 6-bit pairwise-comparison code.
pub(crate) fn corner_order_4d(d: DVec4) -> (IVec4, IVec4, IVec4) {
    let code = (usize::from(d.x > d.y) << 5)
        | (usize::from(d.x > d.z) << 4)
        | (usize::from(d.y > d.z) << 3)
        | (usize::from(d.x > d.w) << 2)
        | (usize::from(d.y > d.w) << 1)
        | usize::from(d.z > d.w);
    let ranks = SIMPLEX_ORDER_4D[code];
    let corner = |threshold: u8| {
        IVec4::new(
            i32::from(ranks[0] >= threshold),
            i32::from(ranks[1] >= threshold),
            i32::from(ranks[2] >= threshold),
            i32::from(ranks[3] >= threshold),
        )
    };
    (corner(3), corner(2), corner(1))
}

fn wrap_input_2d(point: DVec2, period: IVec2) -> DVec2 {
    DVec2::new(
        wrap_coordinate(point.x, period.x),
        wrap_coordinate(point.y, period.y),
    )
}

fn wrap_input_3d(point: DVec3, period: IVec3) -> DVec3 {
    DVec3::new(
        wrap_coordinate(point.x, period.x),
        wrap_coordinate(point.y, period.y),
        wrap_coordinate(point.z, period.z),
    )
}

fn wrap_input_4d(point: DVec4, period: IVec4) -> DVec4 {
    DVec4::new(
        wrap_coordinate(point.x, period.x),
        wrap_coordinate(point.y, period.y),
        wrap_coordinate(point.z, period.z),
        wrap_coordinate(point.w, period.w),
    )
}

/// Corner kernel, 1D value form.
fn corner_1d(offset: f64, gradient: f64) -> f64 {
    let t = RADIUS_SQ_1D - offset * offset;
    if t <= 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (gradient * offset)
    }
}

/// Corner kernel, 1D derivative form.
fn corner_deriv_1d(offset: f64, gradient: f64) -> ValueDerivative<f64> {
    let t = RADIUS_SQ_1D - offset * offset;
    if t <= 0.0 {
        return ValueDerivative::zero();
    }
    let t2 = t * t;
    let t4 = t2 * t2;
    let dot = gradient * offset;
    ValueDerivative::new(t4 * dot, -8.0 * t2 * t * dot * offset + t4 * gradient)
}

fn corner_2d(offset: DVec2, gradient: DVec2) -> f64 {
    let t = RADIUS_SQ_2D - offset.length_squared();
    if t <= 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient.dot(offset)
    }
}

fn corner_deriv_2d(offset: DVec2, gradient: DVec2) -> ValueDerivative<DVec2> {
    let t = RADIUS_SQ_2D - offset.length_squared();
    if t <= 0.0 {
        return ValueDerivative::zero();
    }
    let t2 = t * t;
    let t4 = t2 * t2;
    let dot = gradient.dot(offset);
    ValueDerivative::new(t4 * dot, offset * (-8.0 * t2 * t * dot) + gradient * t4)
}

fn corner_3d(offset: DVec3, gradient: DVec3) -> f64 {
    let t = RADIUS_SQ_3D - offset.length_squared();
    if t <= 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient.dot(offset)
    }
}

fn corner_deriv_3d(offset: DVec3, gradient: DVec3) -> ValueDerivative<DVec3> {
    let t = RADIUS_SQ_3D - offset.length_squared();
    if t <= 0.0 {
        return ValueDerivative::zero();
    }
    let t2 = t * t;
    let t4 = t2 * t2;
    let dot = gradient.dot(offset);
    ValueDerivative::new(t4 * dot, offset * (-8.0 * t2 * t * dot) + gradient * t4)
}

fn corner_4d(offset: DVec4, gradient: DVec4) -> f64 {
    let t = RADIUS_SQ_4D - offset.length_squared();
    if t <= 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient.dot(offset)
    }
}

fn corner_deriv_4d(offset: DVec4, gradient: DVec4) -> ValueDerivative<DVec4> {
    let t = RADIUS_SQ_4D - offset.length_squared();
    if t <= 0.0 {
        return ValueDerivative::zero();
    }
    let t2 = t * t;
    let t4 = t2 * t2;
    let dot = gradient.dot(offset);
    ValueDerivative::new(t4 * dot, offset * (-8.0 * t2 * t * dot) + gradient * t4)
}

impl SimplexNoise {
    /// Simplex noise over the fixed reference permutation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            perm: PermutationTable::reference(),
        }
    }

    /// Simplex noise over a permutation shuffled from `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            perm: PermutationTable::shuffled(rng),
        }
    }

    /// Simplex noise over an explicit table.
    #[must_use]
    pub const fn with_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    fn lattice_1d(&self, i: i32, period: i32) -> u32 {
        self.perm.mix(&[periodic(i, period) as u32])
    }

    fn lattice_2d(&self, i: i32, j: i32, period: IVec2) -> u32 {
        self.perm.mix(&[
            periodic(i, period.x) as u32,
            periodic(j, period.y) as u32,
        ])
    }

    fn lattice_3d(&self, i: i32, j: i32, k: i32, period: IVec3) -> u32 {
        self.perm.mix(&[
            periodic(i, period.x) as u32,
            periodic(j, period.y) as u32,
            periodic(k, period.z) as u32,
        ])
    }

    fn lattice_4d(&self, cell: IVec4, period: IVec4) -> u32 {
        self.perm.mix(&[
            periodic(cell.x, period.x) as u32,
            periodic(cell.y, period.y) as u32,
            periodic(cell.z, period.z) as u32,
            periodic(cell.w, period.w) as u32,
        ])
    }

    /// Cell geometry shared by the value, derivative and rotated forms:
    /// per-corner offset from the corner plus the corner's lattice hash.
    fn cell_1d(&self, point: f64, period: i32) -> [(f64, u32); 2] {
        let x = wrap_coordinate(point, period);
        let i = floor_to_int(x);
        let x0 = x - f64::from(i);
        [
            (x0, self.lattice_1d(i, period)),
            (x0 - 1.0, self.lattice_1d(i + 1, period)),
        ]
    }

    fn cell_2d(&self, point: DVec2, period: IVec2) -> [(DVec2, u32); 3] {
        let point = wrap_input_2d(point, period);
        let skew = (point.x + point.y) * F2;
        let i = floor_to_int(point.x + skew);
        let j = floor_to_int(point.y + skew);
        let unskew = f64::from(i + j) * G2;
        let d0 = point - DVec2::new(f64::from(i) - unskew, f64::from(j) - unskew);

        let (i1, j1) = corner_order_2d(d0.x, d0.y);
        let d1 = d0 - DVec2::new(f64::from(i1), f64::from(j1)) + DVec2::splat(G2);
        let d2 = d0 - DVec2::ONE + DVec2::splat(2.0 * G2);

        [
            (d0, self.lattice_2d(i, j, period)),
            (d1, self.lattice_2d(i + i1, j + j1, period)),
            (d2, self.lattice_2d(i + 1, j + 1, period)),
        ]
    }

    fn cell_3d(&self, point: DVec3, period: IVec3) -> [(DVec3, u32); 4] {
        let point = wrap_input_3d(point, period);
        let skew = (point.x + point.y + point.z) * F3;
        let i = floor_to_int(point.x + skew);
        let j = floor_to_int(point.y + skew);
        let k = floor_to_int(point.z + skew);
        let unskew = f64::from(i + j + k) * G3;
        let d0 = point
            - DVec3::new(
                f64::from(i) - unskew,
                f64::from(j) - unskew,
                f64::from(k) - unskew,
            );

        let (c1, c2) = corner_order_3d(d0);
        let d1 = d0 - c1.as_dvec3() + DVec3::splat(G3);
        let d2 = d0 - c2.as_dvec3() + DVec3::splat(2.0 * G3);
        let d3 = d0 - DVec3::ONE + DVec3::splat(3.0 * G3);

        [
            (d0, self.lattice_3d(i, j, k, period)),
            (d1, self.lattice_3d(i + c1.x, j + c1.y, k + c1.z, period)),
            (d2, self.lattice_3d(i + c2.x, j + c2.y, k + c2.z, period)),
            (d3, self.lattice_3d(i + 1, j + 1, k + 1, period)),
        ]
    }

    fn cell_4d(&self, point: DVec4, period: IVec4) -> [(DVec4, u32); 5] {
        let point = wrap_input_4d(point, period);
        let skew = (point.x + point.y + point.z + point.w) * F4;
        let cell = IVec4::new(
            floor_to_int(point.x + skew),
            floor_to_int(point.y + skew),
            floor_to_int(point.z + skew),
            floor_to_int(point.w + skew),
        );
        let unskew = f64::from(cell.x + cell.y + cell.z + cell.w) * G4;
        let d0 = point - (cell.as_dvec4() - DVec4::splat(unskew));

        let (c1, c2, c3) = corner_order_4d(d0);
        let d1 = d0 - c1.as_dvec4() + DVec4::splat(G4);
        let d2 = d0 - c2.as_dvec4() + DVec4::splat(2.0 * G4);
        let d3 = d0 - c3.as_dvec4() + DVec4::splat(3.0 * G4);
        let d4 = d0 - DVec4::ONE + DVec4::splat(4.0 * G4);

        [
            (d0, self.lattice_4d(cell, period)),
            (d1, self.lattice_4d(cell + c1, period)),
            (d2, self.lattice_4d(cell + c2, period)),
            (d3, self.lattice_4d(cell + c3, period)),
            (d4, self.lattice_4d(cell + IVec4::ONE, period)),
        ]
    }

    /// 1D simplex noise; `period` tiles the lattice when finite.
    #[must_use]
    pub fn raw_1d(&self, point: f64, period: i32) -> f64 {
        let mut total = 0.0;
        for (offset, hash) in self.cell_1d(point, period) {
            total += corner_1d(offset, GRAD1[(hash & 15) as usize]);
        }
        total * SCALE_1D
    }

    /// 1D simplex noise with its analytic derivative.
    #[must_use]
    pub fn raw_derivative_1d(&self, point: f64, period: i32) -> ValueDerivative<f64> {
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_1d(point, period) {
            total = total + corner_deriv_1d(offset, GRAD1[(hash & 15) as usize]);
        }
        total * SCALE_1D
    }

    /// 2D simplex noise.
    #[must_use]
    pub fn raw_2d(&self, point: DVec2, period: IVec2) -> f64 {
        let mut total = 0.0;
        for (offset, hash) in self.cell_2d(point, period) {
            total += corner_2d(offset, SIMPLEX_GRAD2[(hash & 7) as usize]);
        }
        total * SCALE_2D
    }

    /// 2D simplex noise with its analytic derivative.
    #[must_use]
    pub fn raw_derivative_2d(&self, point: DVec2, period: IVec2) -> ValueDerivative<DVec2> {
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_2d(point, period) {
            total = total + corner_deriv_2d(offset, SIMPLEX_GRAD2[(hash & 7) as usize]);
        }
        total * SCALE_2D
    }

    /// 2D simplex noise with derivative over gradients rotated by `angle`.
    ///
    /// Each base gradient `u` is mixed with its orthogonal companion `v` as
    /// `cos(angle)*u + sin(angle)*v`, preserving isotropy while the field
    /// animates; `angle = 0` reproduces [`raw_derivative_2d`](Self::raw_derivative_2d)
    /// exactly.
    #[must_use]
    pub fn raw_derivative_rotated_2d(
        &self,
        point: DVec2,
        period: IVec2,
        angle: f64,
    ) -> ValueDerivative<DVec2> {
        let (sin, cos) = angle.sin_cos();
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_2d(point, period) {
            let index = (hash & 7) as usize;
            let gradient = SIMPLEX_GRAD2[index] * cos + ROT_GRAD2[index] * sin;
            total = total + corner_deriv_2d(offset, gradient);
        }
        total * SCALE_2D
    }

    /// 3D simplex noise.
    #[must_use]
    pub fn raw_3d(&self, point: DVec3, period: IVec3) -> f64 {
        let mut total = 0.0;
        for (offset, hash) in self.cell_3d(point, period) {
            total += corner_3d(offset, SIMPLEX_GRAD3[(hash & 15) as usize]);
        }
        total * SCALE_3D
    }

    /// 3D simplex noise with its analytic derivative.
    #[must_use]
    pub fn raw_derivative_3d(&self, point: DVec3, period: IVec3) -> ValueDerivative<DVec3> {
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_3d(point, period) {
            total = total + corner_deriv_3d(offset, SIMPLEX_GRAD3[(hash & 15) as usize]);
        }
        total * SCALE_3D
    }

    /// 3D simplex noise with derivative over gradients rotated by `angle`;
    /// `angle = 0` reproduces [`raw_derivative_3d`](Self::raw_derivative_3d)
    /// exactly.
    #[must_use]
    pub fn raw_derivative_rotated_3d(
        &self,
        point: DVec3,
        period: IVec3,
        angle: f64,
    ) -> ValueDerivative<DVec3> {
        let (sin, cos) = angle.sin_cos();
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_3d(point, period) {
            let index = (hash & 15) as usize;
            let gradient = SIMPLEX_GRAD3[index] * cos + ROT_GRAD3[index] * sin;
            total = total + corner_deriv_3d(offset, gradient);
        }
        total * SCALE_3D
    }

    /// 4D simplex noise.
    #[must_use]
    pub fn raw_4d(&self, point: DVec4, period: IVec4) -> f64 {
        let mut total = 0.0;
        for (offset, hash) in self.cell_4d(point, period) {
            total += corner_4d(offset, SIMPLEX_GRAD4[(hash & 31) as usize]);
        }
        total * SCALE_4D
    }

    /// 4D simplex noise with its analytic derivative.
    #[must_use]
    pub fn raw_derivative_4d(&self, point: DVec4, period: IVec4) -> ValueDerivative<DVec4> {
        let mut total = ValueDerivative::zero();
        for (offset, hash) in self.cell_4d(point, period) {
            total = total + corner_deriv_4d(offset, SIMPLEX_GRAD4[(hash & 31) as usize]);
        }
        total * SCALE_4D
    }
}

impl Default for SimplexNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseGenerator<f64> for SimplexNoise {
    #[inline]
    fn raw(&self, point: f64, period: i32) -> f64 {
        self.raw_1d(point, period)
    }
}

impl NoiseGenerator<DVec2> for SimplexNoise {
    #[inline]
    fn raw(&self, point: DVec2, period: IVec2) -> f64 {
        self.raw_2d(point, period)
    }
}

impl NoiseGenerator<DVec3> for SimplexNoise {
    #[inline]
    fn raw(&self, point: DVec3, period: IVec3) -> f64 {
        self.raw_3d(point, period)
    }
}

impl NoiseGenerator<DVec4> for SimplexNoise {
    #[inline]
    fn raw(&self, point: DVec4, period: IVec4) -> f64 {
        self.raw_4d(point, period)
    }
}

impl DifferentiableNoise<f64> for SimplexNoise {
    #[inline]
    fn raw_derivative(&self, point: f64, period: i32) -> ValueDerivative<f64> {
        self.raw_derivative_1d(point, period)
    }
}

impl DifferentiableNoise<DVec2> for SimplexNoise {
    #[inline]
    fn raw_derivative(&self, point: DVec2, period: IVec2) -> ValueDerivative<DVec2> {
        self.raw_derivative_2d(point, period)
    }
}

impl DifferentiableNoise<DVec3> for SimplexNoise {
    #[inline]
    fn raw_derivative(&self, point: DVec3, period: IVec3) -> ValueDerivative<DVec3> {
        self.raw_derivative_3d(point, period)
    }
}

impl DifferentiableNoise<DVec4> for SimplexNoise {
    #[inline]
    fn raw_derivative(&self, point: DVec4, period: IVec4) -> ValueDerivative<DVec4> {
        self.raw_derivative_4d(point, period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::INFINITE_PERIOD;

    #[test]
    fn two_d_corner_order_picks_the_larger_axis() {
        assert_eq!(corner_order_2d(0.7, 0.2), (1, 0));
        assert_eq!(corner_order_2d(0.2, 0.7), (0, 1));
        // Ties walk the y edge first.
        assert_eq!(corner_order_2d(0.5, 0.5), (0, 1));
    }

    #[test]
    fn three_d_corner_order_ranks_by_magnitude() {
        // x > y > z: walk x, then y.
        assert_eq!(
            corner_order_3d(DVec3::new(0.9, 0.5, 0.1)),
            (IVec3::new(1, 0, 0), IVec3::new(1, 1, 0))
        );
        // z > y > x: walk z, then y.
        assert_eq!(
            corner_order_3d(DVec3::new(0.1, 0.5, 0.9)),
            (IVec3::new(0, 0, 1), IVec3::new(0, 1, 1))
        );
        // x > z > y: walk x, then z.
        assert_eq!(
            corner_order_3d(DVec3::new(0.9, 0.1, 0.5)),
            (IVec3::new(1, 0, 0), IVec3::new(1, 0, 1))
        );
    }

    #[test]
    fn four_d_corner_order_matches_the_ranking_table() {
        // Strictly descending: corners fill axes in x, y, z order.
        assert_eq!(
            corner_order_4d(DVec4::new(0.9, 0.7, 0.5, 0.3)),
            (
                IVec4::new(1, 0, 0, 0),
                IVec4::new(1, 1, 0, 0),
                IVec4::new(1, 1, 1, 0)
            )
        );
        // Strictly ascending: corners fill axes in w, z, y order.
        assert_eq!(
            corner_order_4d(DVec4::new(0.1, 0.3, 0.5, 0.7)),
            (
                IVec4::new(0, 0, 0, 1),
                IVec4::new(0, 0, 1, 1),
                IVec4::new(0, 1, 1, 1)
            )
        );
    }

    #[test]
    fn tiled_axis_is_bit_exact_across_one_period() {
        let noise = SimplexNoise::new();
        let period = IVec2::new(8, INFINITE_PERIOD);
        #[allow(clippy::float_cmp, reason = "tiling must be bit-exact")]
        {
            assert_eq!(
                noise.raw_2d(DVec2::new(0.0, 0.0), period),
                noise.raw_2d(DVec2::new(8.0, 0.0), period)
            );
            assert_eq!(
                noise.raw_2d(DVec2::new(2.25, -1.5), period),
                noise.raw_2d(DVec2::new(2.25 + 16.0, -1.5), period)
            );
        }
    }

    #[test]
    fn derivative_value_matches_the_value_form() {
        let noise = SimplexNoise::new();
        let p2 = DVec2::new(1.37, -4.92);
        let p3 = DVec3::new(0.31, 7.77, -2.25);
        let p4 = DVec4::new(-1.05, 2.5, 0.125, 9.33);

        assert!(
            (noise.raw_derivative_2d(p2, IVec2::MAX).value - noise.raw_2d(p2, IVec2::MAX)).abs()
                < 1e-15
        );
        assert!(
            (noise.raw_derivative_3d(p3, IVec3::MAX).value - noise.raw_3d(p3, IVec3::MAX)).abs()
                < 1e-15
        );
        assert!(
            (noise.raw_derivative_4d(p4, IVec4::MAX).value - noise.raw_4d(p4, IVec4::MAX)).abs()
                < 1e-15
        );
        assert!(
            (noise.raw_derivative_1d(0.73, INFINITE_PERIOD).value
                - noise.raw_1d(0.73, INFINITE_PERIOD))
            .abs()
                < 1e-15
        );
    }

    #[test]
    fn analytic_derivatives_match_finite_differences() {
        let noise = SimplexNoise::new();
        let h = 1e-5;

        let d1 = noise.raw_derivative_1d(0.37, INFINITE_PERIOD).derivative;
        let fd1 = (noise.raw_1d(0.37 + h, INFINITE_PERIOD)
            - noise.raw_1d(0.37 - h, INFINITE_PERIOD))
            / (2.0 * h);
        assert!((d1 - fd1).abs() < 1e-3, "1d: analytic {d1} vs fd {fd1}");

        let p2 = DVec2::new(1.37, -4.92);
        let d2 = noise.raw_derivative_2d(p2, IVec2::MAX).derivative;
        for axis in 0..2 {
            let mut step = DVec2::ZERO;
            step[axis] = h;
            let fd = (noise.raw_2d(p2 + step, IVec2::MAX) - noise.raw_2d(p2 - step, IVec2::MAX))
                / (2.0 * h);
            assert!(
                (d2[axis] - fd).abs() < 1e-3,
                "2d axis {axis}: analytic {} vs fd {fd}",
                d2[axis]
            );
        }

        let p3 = DVec3::new(0.31, 7.77, -2.25);
        let d3 = noise.raw_derivative_3d(p3, IVec3::MAX).derivative;
        for axis in 0..3 {
            let mut step = DVec3::ZERO;
            step[axis] = h;
            let fd = (noise.raw_3d(p3 + step, IVec3::MAX) - noise.raw_3d(p3 - step, IVec3::MAX))
                / (2.0 * h);
            assert!(
                (d3[axis] - fd).abs() < 1e-3,
                "3d axis {axis}: analytic {} vs fd {fd}",
                d3[axis]
            );
        }

        let p4 = DVec4::new(-1.05, 2.5, 0.125, 9.33);
        let d4 = noise.raw_derivative_4d(p4, IVec4::MAX).derivative;
        for axis in 0..4 {
            let mut step = DVec4::ZERO;
            step[axis] = h;
            let fd = (noise.raw_4d(p4 + step, IVec4::MAX) - noise.raw_4d(p4 - step, IVec4::MAX))
                / (2.0 * h);
            assert!(
                (d4[axis] - fd).abs() < 1e-3,
                "4d axis {axis}: analytic {} vs fd {fd}",
                d4[axis]
            );
        }
    }

    #[test]
    fn rotation_by_zero_reproduces_the_base_derivative() {
        let noise = SimplexNoise::new();
        let p2 = DVec2::new(3.7, 1.1);
        let p3 = DVec3::new(-0.4, 2.9, 5.5);

        assert_eq!(
            noise.raw_derivative_rotated_2d(p2, IVec2::MAX, 0.0),
            noise.raw_derivative_2d(p2, IVec2::MAX)
        );
        assert_eq!(
            noise.raw_derivative_rotated_3d(p3, IVec3::MAX, 0.0),
            noise.raw_derivative_3d(p3, IVec3::MAX)
        );
    }

    #[test]
    fn rotation_changes_the_field_but_stays_finite() {
        let noise = SimplexNoise::new();
        let p = DVec2::new(3.7, 1.1);
        let base = noise.raw_derivative_rotated_2d(p, IVec2::MAX, 0.0);
        let turned = noise.raw_derivative_rotated_2d(p, IVec2::MAX, 1.3);
        assert_ne!(base, turned);
        assert!(turned.value.is_finite());
        assert!(turned.derivative.is_finite());
    }

    #[test]
    fn degenerate_corners_stay_exactly_zero() {
        // Beyond the kernel radius a corner contributes exactly 0.0,
        // never a negative weight or NaN.
        let v = corner_2d(DVec2::new(1.0, 0.0), DVec2::new(1.0, 1.0));
        let d = corner_deriv_3d(DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
        #[allow(clippy::float_cmp, reason = "the kernel clamps to exact zero")]
        {
            assert_eq!(v, 0.0);
            assert_eq!(d.value, 0.0);
            assert_eq!(d.derivative, DVec3::ZERO);
        }
    }
}
