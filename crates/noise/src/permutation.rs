use nk_rng::{FromRng, Rng};

/// The number of entries of a [`PermutationTable`].
pub const PSIZE: usize = 2048;

/// The mask that wraps any lattice coordinate into `[0, PSIZE)`.
pub const PMASK: usize = PSIZE - 1;

/// Wraps a lattice coordinate of any magnitude into `[0, PSIZE)`.
#[inline(always)]
pub(crate) fn wrap(coord: i64) -> usize {
    coord as usize & PMASK
}

/// A seeded permutation of `[0, 2048)`.
///
/// Lattice coordinates are hashed by chaining lookups into the table, each one XORed with the
/// next (masked) coordinate. The chain order matters: `hash3(x, y, z)` is
/// `perm[perm[x] ^ y] ^ z`, which is not the same as `perm[perm[y] ^ x] ^ z`.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: Box<[u16; PSIZE]>,
}

impl PermutationTable {
    /// Shuffles `[0, 2048)` using a 64-bit LCG seeded with `seed`.
    ///
    /// Every seed is valid, including `0`.
    #[profiling::function]
    pub fn new(mut seed: u64) -> Self {
        let mut source: [u16; PSIZE] = std::array::from_fn(|i| i as u16);
        let mut perm = Box::new([0u16; PSIZE]);

        for i in (0..PSIZE).rev() {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);

            // The high 32 bits of the state, scaled to `[0, i]`.
            let r = ((seed >> 32) * (i as u64 + 1)) >> 32;
            let r = r as usize;

            perm[i] = source[r];
            source[r] = source[i];
        }

        Self { perm }
    }

    /// Returns the entry at `index`, wrapping the index into the table.
    #[inline(always)]
    pub fn get(&self, index: usize) -> usize {
        self.perm[index & PMASK] as usize
    }

    /// Returns the raw permutation.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.perm[..]
    }

    /// Combines two wrapped lattice coordinates into a table slot.
    #[inline(always)]
    pub fn hash2(&self, x: usize, y: usize) -> usize {
        self.get(x) ^ (y & PMASK)
    }

    /// Combines three wrapped lattice coordinates into a table slot.
    #[inline(always)]
    pub fn hash3(&self, x: usize, y: usize, z: usize) -> usize {
        self.get(self.hash2(x, y)) ^ (z & PMASK)
    }

    /// Combines four wrapped lattice coordinates into a table slot.
    #[inline(always)]
    pub fn hash4(&self, x: usize, y: usize, z: usize, w: usize) -> usize {
        self.get(self.hash3(x, y, z)) ^ (w & PMASK)
    }
}

impl FromRng for PermutationTable {
    fn from_rng(rng: &mut impl Rng) -> Self {
        Self::new(rng.next_u64())
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nk_rng::DefaultRng;

    fn is_bijection(table: &PermutationTable) -> bool {
        let mut seen = [false; PSIZE];
        for &p in table.as_slice() {
            if std::mem::replace(&mut seen[p as usize], true) {
                return false;
            }
        }
        seen.iter().all(|&s| s)
    }

    #[test]
    fn reference_shuffle() {
        let table = PermutationTable::new(1234567890987654321);
        assert_eq!(
            &table.as_slice()[..8],
            &[51u16, 652, 2021, 412, 961, 1659, 782, 754]
        );
        assert_eq!(table.as_slice()[2047], 1342);

        let table = PermutationTable::new(0);
        assert_eq!(
            &table.as_slice()[..8],
            &[1167u16, 776, 741, 47, 1268, 28, 733, 2013]
        );
        assert_eq!(table.as_slice()[2047], 160);

        let table = PermutationTable::new(42);
        assert_eq!(
            &table.as_slice()[..8],
            &[294u16, 1486, 367, 1760, 1887, 1803, 188, 1578]
        );
    }

    #[test]
    fn always_a_bijection() {
        for seed in [0, 1, 42, u64::MAX, 1 << 63, 0xDEAD_BEEF] {
            assert!(is_bijection(&PermutationTable::new(seed)), "seed {seed}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(PermutationTable::new(9), PermutationTable::new(9));
        assert_ne!(PermutationTable::new(9), PermutationTable::new(10));
    }

    #[test]
    fn from_rng_uses_the_next_u64() {
        let mut rng = DefaultRng::from_seed(5);
        let table = PermutationTable::from_rng(&mut rng);
        let mut rng = DefaultRng::from_seed(5);
        assert_eq!(table, PermutationTable::new(rng.next_u64()));
    }

    #[test]
    fn hashes_chain_in_order() {
        let t = PermutationTable::new(3);
        assert_eq!(t.hash2(5, 9), t.get(5) ^ 9);
        assert_eq!(t.hash3(5, 9, 700), t.get(t.get(5) ^ 9) ^ 700);
        assert_eq!(
            t.hash4(5, 9, 700, 2047),
            t.get(t.get(t.get(5) ^ 9) ^ 700) ^ 2047
        );
        for x in [0, 1, 1000, 2047, usize::MAX] {
            assert!(t.hash4(x, x, x, x) < PSIZE);
        }
    }

    #[test]
    fn wrap_handles_negative_coordinates() {
        assert_eq!(wrap(-1), 2047);
        assert_eq!(wrap(-2048), 0);
        assert_eq!(wrap(2049), 1);
        assert_eq!(wrap(i64::MIN), 0);
        assert_eq!(wrap(i64::MAX), 2047);
    }
}
