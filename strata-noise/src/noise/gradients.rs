//! Fixed gradient direction tables.
//!
//! Hand-chosen isotropic sets, indexed by the low bits of a lattice hash
//! (16 directions for 1D/3D, 8 for 2D, 32 for 4D). The classic and simplex
//! evaluators each use their own reference ordering; both are reproduced
//! verbatim because the empirical normalization constants were measured
//! against exactly these sets.

use glam::{DVec2, DVec3, DVec4};

/// 1D gradients: slopes `1..=8` and their negations (shared by classic and
/// simplex).
pub(crate) const GRAD1: [f64; 16] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0,
];

/// Classic 2D gradients: the eight `(+-1, +-2)` / `(+-2, +-1)` directions.
pub(crate) const PERLIN_GRAD2: [DVec2; 8] = [
    DVec2::new(1.0, 2.0),
    DVec2::new(-1.0, 2.0),
    DVec2::new(1.0, -2.0),
    DVec2::new(-1.0, -2.0),
    DVec2::new(2.0, 1.0),
    DVec2::new(2.0, -1.0),
    DVec2::new(-2.0, 1.0),
    DVec2::new(-2.0, -1.0),
];

/// Classic 3D gradients: the 12 cube-edge midpoints plus 4 repeats.
pub(crate) const PERLIN_GRAD3: [DVec3; 16] = [
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, -1.0),
];

/// Classic 4D gradients: the 32 tesseract edges (one zero component).
pub(crate) const PERLIN_GRAD4: [DVec4; 32] = [
    DVec4::new(1.0, 1.0, 1.0, 0.0),
    DVec4::new(-1.0, 1.0, 1.0, 0.0),
    DVec4::new(1.0, -1.0, 1.0, 0.0),
    DVec4::new(-1.0, -1.0, 1.0, 0.0),
    DVec4::new(1.0, 1.0, -1.0, 0.0),
    DVec4::new(-1.0, 1.0, -1.0, 0.0),
    DVec4::new(1.0, -1.0, -1.0, 0.0),
    DVec4::new(-1.0, -1.0, -1.0, 0.0),
    DVec4::new(1.0, 1.0, 0.0, 1.0),
    DVec4::new(-1.0, 1.0, 0.0, 1.0),
    DVec4::new(1.0, -1.0, 0.0, 1.0),
    DVec4::new(-1.0, -1.0, 0.0, 1.0),
    DVec4::new(1.0, 1.0, 0.0, -1.0),
    DVec4::new(-1.0, 1.0, 0.0, -1.0),
    DVec4::new(1.0, -1.0, 0.0, -1.0),
    DVec4::new(-1.0, -1.0, 0.0, -1.0),
    DVec4::new(1.0, 0.0, 1.0, 1.0),
    DVec4::new(-1.0, 0.0, 1.0, 1.0),
    DVec4::new(1.0, 0.0, -1.0, 1.0),
    DVec4::new(-1.0, 0.0, -1.0, 1.0),
    DVec4::new(1.0, 0.0, 1.0, -1.0),
    DVec4::new(-1.0, 0.0, 1.0, -1.0),
    DVec4::new(1.0, 0.0, -1.0, -1.0),
    DVec4::new(-1.0, 0.0, -1.0, -1.0),
    DVec4::new(0.0, 1.0, 1.0, 1.0),
    DVec4::new(0.0, -1.0, 1.0, 1.0),
    DVec4::new(0.0, 1.0, -1.0, 1.0),
    DVec4::new(0.0, -1.0, -1.0, 1.0),
    DVec4::new(0.0, 1.0, 1.0, -1.0),
    DVec4::new(0.0, -1.0, 1.0, -1.0),
    DVec4::new(0.0, 1.0, -1.0, -1.0),
    DVec4::new(0.0, -1.0, -1.0, -1.0),
];

/// Simplex 2D gradients, derivative-reference ordering.
pub(crate) const SIMPLEX_GRAD2: [DVec2; 8] = [
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(0.0, -1.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(1.0, -1.0),
];

/// Simplex 3D gradients: cube edges in derivative-reference ordering.
pub(crate) const SIMPLEX_GRAD3: [DVec3; 16] = [
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
];

/// Simplex 4D gradients: tesseract edges in derivative-reference ordering.
pub(crate) const SIMPLEX_GRAD4: [DVec4; 32] = [
    DVec4::new(0.0, 1.0, 1.0, 1.0),
    DVec4::new(0.0, 1.0, 1.0, -1.0),
    DVec4::new(0.0, 1.0, -1.0, 1.0),
    DVec4::new(0.0, 1.0, -1.0, -1.0),
    DVec4::new(0.0, -1.0, 1.0, 1.0),
    DVec4::new(0.0, -1.0, 1.0, -1.0),
    DVec4::new(0.0, -1.0, -1.0, 1.0),
    DVec4::new(0.0, -1.0, -1.0, -1.0),
    DVec4::new(1.0, 0.0, 1.0, 1.0),
    DVec4::new(1.0, 0.0, 1.0, -1.0),
    DVec4::new(1.0, 0.0, -1.0, 1.0),
    DVec4::new(1.0, 0.0, -1.0, -1.0),
    DVec4::new(-1.0, 0.0, 1.0, 1.0),
    DVec4::new(-1.0, 0.0, 1.0, -1.0),
    DVec4::new(-1.0, 0.0, -1.0, 1.0),
    DVec4::new(-1.0, 0.0, -1.0, -1.0),
    DVec4::new(1.0, 1.0, 0.0, 1.0),
    DVec4::new(1.0, 1.0, 0.0, -1.0),
    DVec4::new(1.0, -1.0, 0.0, 1.0),
    DVec4::new(1.0, -1.0, 0.0, -1.0),
    DVec4::new(-1.0, 1.0, 0.0, 1.0),
    DVec4::new(-1.0, 1.0, 0.0, -1.0),
    DVec4::new(-1.0, -1.0, 0.0, 1.0),
    DVec4::new(-1.0, -1.0, 0.0, -1.0),
    DVec4::new(1.0, 1.0, 1.0, 0.0),
    DVec4::new(1.0, 1.0, -1.0, 0.0),
    DVec4::new(1.0, -1.0, 1.0, 0.0),
    DVec4::new(1.0, -1.0, -1.0, 0.0),
    DVec4::new(-1.0, 1.0, 1.0, 0.0),
    DVec4::new(-1.0, 1.0, -1.0, 0.0),
    DVec4::new(-1.0, -1.0, 1.0, 0.0),
    DVec4::new(-1.0, -1.0, -1.0, 0.0),
];

/// Rotation companion to [`SIMPLEX_GRAD2`]: each entry is the base gradient
/// rotated by 90 degrees, so `cos(a)*u + sin(a)*v` sweeps a circle of
/// constant magnitude and reduces to the base table at `a = 0`.
pub(crate) const ROT_GRAD2: [DVec2; 8] = [
    DVec2::new(1.0, -1.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, -1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(1.0, 1.0),
];

/// Rotation companion to [`SIMPLEX_GRAD3`]: each entry is the base edge
/// vector rotated by 90 degrees within its face plane (orthogonal, equal
/// magnitude).
pub(crate) const ROT_GRAD3: [DVec3; 16] = [
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
];

/// 4D simplex corner ranking, keyed by the 6-bit pairwise-comparison code
/// built from `x>y, x>z, y>z, x>w, y>w, z>w` (high bit first).
///
/// Each entry gives the magnitude rank (3 = largest) of the x, y, z and w
/// cell-relative coordinates; impossible codes hold all-zero filler.
pub(crate) const SIMPLEX_ORDER_4D: [[u8; 4]; 64] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 0, 0, 0],
    [0, 2, 3, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 2, 3, 0],
    [0, 2, 1, 3],
    [0, 0, 0, 0],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 3, 2, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 2, 0, 3],
    [0, 0, 0, 0],
    [1, 3, 0, 2],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 0, 3, 1],
    [0, 0, 0, 0],
    [2, 1, 3, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [2, 0, 1, 3],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [0, 0, 0, 0],
    [3, 1, 2, 0],
    [2, 1, 0, 3],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [3, 1, 0, 2],
    [0, 0, 0, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_bases_are_orthogonal_with_equal_magnitude() {
        for (u, v) in SIMPLEX_GRAD2.iter().zip(ROT_GRAD2.iter()) {
            assert!(u.dot(*v).abs() < 1e-12, "non-orthogonal pair {u} / {v}");
            assert!((u.length_squared() - v.length_squared()).abs() < 1e-12);
        }
        for (u, v) in SIMPLEX_GRAD3.iter().zip(ROT_GRAD3.iter()) {
            assert!(u.dot(*v).abs() < 1e-12, "non-orthogonal pair {u} / {v}");
            assert!((u.length_squared() - v.length_squared()).abs() < 1e-12);
        }
    }

    #[test]
    fn four_d_ranking_covers_every_strict_ordering() {
        // 24 permutations of 4 axes, each reachable through exactly one code.
        let populated = SIMPLEX_ORDER_4D
            .iter()
            .filter(|entry| {
                let mut ranks = **entry;
                ranks.sort_unstable();
                ranks == [0, 1, 2, 3]
            })
            .count();
        assert_eq!(populated, 24);
    }
}
