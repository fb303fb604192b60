//! Permutation-table hashing for gradient selection.
//!
//! A [`PermutationTable`] maps a `u32` lattice coordinate to a pseudo-random
//! byte by indexing a 256-entry permutation. Multi-dimensional coordinates
//! are combined with the nested composition `h(c0 + h(c1 + h(c2 + ...)))`,
//! exposed as [`PermutationTable::mix`] so its ordering assumptions can be
//! tested in isolation.

use rand::{Rng, RngExt};

/// Number of entries in a permutation table.
pub const TABLE_SIZE: usize = 256;

/// The fixed reference permutation of `0..=255`.
///
/// Reused verbatim; regenerating it would silently change every noise field
/// built on the reference table.
const REFERENCE: [u8; TABLE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// A 256-entry permutation used as a `u32 -> u32` hash.
///
/// Deterministic and stateless apart from its table; an instance may be
/// shared read-only across threads once constructed. Generators store one of
/// these as a plain field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    table: [u8; TABLE_SIZE],
}

impl PermutationTable {
    /// The fixed reference permutation. `hash(0)` is its literal first
    /// entry, `151`.
    #[must_use]
    pub const fn reference() -> Self {
        Self { table: REFERENCE }
    }

    /// A permutation shuffled from a caller-supplied RNG.
    ///
    /// Fills `0..=255`, then Fisher-Yates shuffles with `rng`. The same RNG
    /// state yields an identical table, so seeded noise fields are
    /// reproducible.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table = [0u8; TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.random_range(0..=i);
            table.swap(i, j);
        }
        Self { table }
    }

    /// Build from an explicit table, for callers that persist permutations.
    #[must_use]
    pub const fn from_table(table: [u8; TABLE_SIZE]) -> Self {
        Self { table }
    }

    /// Hash a single coordinate: index the table with `x % TABLE_SIZE`
    /// (equivalently `x & 0xFF`).
    #[inline]
    #[must_use]
    pub const fn hash(&self, x: u32) -> u32 {
        self.table[(x & 0xFF) as usize] as u32
    }

    /// Combine wrapped lattice coordinates into one hash via the nested
    /// composition `h(c0 + h(c1 + h(c2 + ...)))`.
    ///
    /// Coordinates must already be wrapped through `periodic`, so each is at
    /// most `i32::MAX - 1` and the additions cannot overflow a `u32`.
    #[inline]
    #[must_use]
    pub fn mix(&self, coords: &[u32]) -> u32 {
        debug_assert!(!coords.is_empty());
        coords.iter().rev().fold(0, |acc, &c| self.hash(c + acc))
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reference_hash_of_zero_is_first_entry() {
        let table = PermutationTable::reference();
        assert_eq!(table.hash(0), 151);
    }

    #[test]
    fn hash_wraps_at_table_size() {
        let table = PermutationTable::reference();
        assert_eq!(table.hash(256), table.hash(0));
        assert_eq!(table.hash(1000), table.hash(1000 & 0xFF));
    }

    #[test]
    fn shuffled_tables_are_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(12345);
        let mut b = StdRng::seed_from_u64(12345);
        assert_eq!(
            PermutationTable::shuffled(&mut a),
            PermutationTable::shuffled(&mut b)
        );
    }

    #[test]
    fn shuffled_tables_differ_across_seeds() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(
            PermutationTable::shuffled(&mut a),
            PermutationTable::shuffled(&mut b)
        );
    }

    #[test]
    fn shuffled_table_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = PermutationTable::shuffled(&mut rng);
        let mut seen = [false; TABLE_SIZE];
        for x in 0..TABLE_SIZE as u32 {
            seen[table.hash(x) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn mix_composes_from_the_last_coordinate_inward() {
        let table = PermutationTable::reference();
        assert_eq!(table.mix(&[42]), table.hash(42));
        assert_eq!(table.mix(&[3, 7]), table.hash(3 + table.hash(7)));
        assert_eq!(
            table.mix(&[3, 7, 11]),
            table.hash(3 + table.hash(7 + table.hash(11)))
        );
    }
}
