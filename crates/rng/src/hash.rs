//! Fast hashes of integer lattice points.

use crate::{FromRng, Noise};

/// Final avalanche step shared by every dimension.
#[inline(always)]
fn finish(s: u64) -> u64 {
    let s = (s ^ (s >> 27) ^ 0x9E3779B97F4A7C15).wrapping_mul(0xC6BC279692B5CC83);
    s ^ (s >> 25)
}

/// A quick, non-cryptographic hash of 2 to 6 signed integer coordinates and a 64-bit state.
///
/// Each coordinate is folded into the previous one with a distinct odd multiplier before a
/// final avalanche step. Lowering the quality of the low bits is the price for speed: when
/// only a few bits are needed, prefer [`HastyPointHash::hash_bits2`] and friends, which keep
/// the high bits.
#[derive(FromRng, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HastyPointHash {
    /// The state mixed into every hash.
    pub state: u64,
}

impl HastyPointHash {
    /// Creates a new [`HastyPointHash`] with the provided state.
    #[inline]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }

    /// Hashes a 2D point into 64 bits.
    #[inline]
    pub fn hash_all2(&self, x: i64, y: i64) -> u64 {
        let mut s = self.state;
        let y = (y as u64).wrapping_add(s.wrapping_mul(0xD1B54A32D192ED03));
        let x = (x as u64).wrapping_add(y.wrapping_mul(0xABC98388FB8FAC03));
        s = s.wrapping_add(x.wrapping_mul(0x8CB92BA72F3D8DD7));
        finish(s)
    }

    /// Hashes a 3D point into 64 bits.
    #[inline]
    pub fn hash_all3(&self, x: i64, y: i64, z: i64) -> u64 {
        let mut s = self.state;
        let z = (z as u64).wrapping_add(s.wrapping_mul(0xDB4F0B9175AE2165));
        let y = (y as u64).wrapping_add(z.wrapping_mul(0xBBE0563303A4615F));
        let x = (x as u64).wrapping_add(y.wrapping_mul(0xA0F2EC75A1FE1575));
        s = s.wrapping_add(x.wrapping_mul(0x89E182857D9ED689));
        finish(s)
    }

    /// Hashes a 4D point into 64 bits.
    #[inline]
    pub fn hash_all4(&self, x: i64, y: i64, z: i64, w: i64) -> u64 {
        let mut s = self.state;
        let w = (w as u64).wrapping_add(s.wrapping_mul(0xE19B01AA9D42C633));
        let z = (z as u64).wrapping_add(w.wrapping_mul(0xC6D1D6C8ED0C9631));
        let y = (y as u64).wrapping_add(z.wrapping_mul(0xAF36D01EF7518DBB));
        let x = (x as u64).wrapping_add(y.wrapping_mul(0x9A69443F36F710E7));
        s = s.wrapping_add(x.wrapping_mul(0x881403B9339BD42D));
        finish(s)
    }

    /// Hashes a 5D point into 64 bits.
    #[inline]
    pub fn hash_all5(&self, [x, y, z, w, u]: [i64; 5]) -> u64 {
        let mut s = self.state;
        let u = (u as u64).wrapping_add(s.wrapping_mul(0xE60E2B722B53AEEB));
        let w = (w as u64).wrapping_add(u.wrapping_mul(0xCEBD76D9EDB6A8EF));
        let z = (z as u64).wrapping_add(w.wrapping_mul(0xB9C9AA3A51D00B65));
        let y = (y as u64).wrapping_add(z.wrapping_mul(0xA6F5777F6F88983F));
        let x = (x as u64).wrapping_add(y.wrapping_mul(0x9609C71EB7D03F7B));
        s = s.wrapping_add(x.wrapping_mul(0x86D516E50B04AB1B));
        finish(s)
    }

    /// Hashes a 6D point into 64 bits.
    #[inline]
    pub fn hash_all6(&self, [x, y, z, w, u, v]: [i64; 6]) -> u64 {
        let mut s = self.state;
        let v = (v as u64).wrapping_add(s.wrapping_mul(0xE95E1DD17D35800D));
        let u = (u as u64).wrapping_add(v.wrapping_mul(0xD4BC74E13F3C782F));
        let w = (w as u64).wrapping_add(u.wrapping_mul(0xC1EDBC5B5C68AC25));
        let z = (z as u64).wrapping_add(w.wrapping_mul(0xB0C8AC50F0EDEF5D));
        let y = (y as u64).wrapping_add(z.wrapping_mul(0xA127A31C56D1CDB5));
        let x = (x as u64).wrapping_add(y.wrapping_mul(0x92E852C80D153DB3));
        s = s.wrapping_add(x.wrapping_mul(0x85EB75C3024385C3));
        finish(s)
    }

    /// Hashes a 2D point into its `bits` most significant bits (`1..=64`).
    #[inline]
    pub fn hash_bits2(&self, x: i64, y: i64, bits: u32) -> u64 {
        top_bits(self.hash_all2(x, y), bits)
    }

    /// Hashes a 3D point into its `bits` most significant bits (`1..=64`).
    #[inline]
    pub fn hash_bits3(&self, x: i64, y: i64, z: i64, bits: u32) -> u64 {
        top_bits(self.hash_all3(x, y, z), bits)
    }

    /// Hashes a 4D point into its `bits` most significant bits (`1..=64`).
    #[inline]
    pub fn hash_bits4(&self, x: i64, y: i64, z: i64, w: i64, bits: u32) -> u64 {
        top_bits(self.hash_all4(x, y, z, w), bits)
    }

    /// Hashes a 5D point into its `bits` most significant bits (`1..=64`).
    #[inline]
    pub fn hash_bits5(&self, point: [i64; 5], bits: u32) -> u64 {
        top_bits(self.hash_all5(point), bits)
    }
}

#[inline(always)]
fn top_bits(hash: u64, bits: u32) -> u64 {
    debug_assert!((1..=64).contains(&bits), "invalid bit count: {bits}");
    hash >> (64 - bits)
}

impl Noise<[i64; 2]> for HastyPointHash {
    type Output = u64;

    #[inline]
    fn sample(&self, [x, y]: [i64; 2]) -> Self::Output {
        self.hash_all2(x, y)
    }
}

impl Noise<[i64; 3]> for HastyPointHash {
    type Output = u64;

    #[inline]
    fn sample(&self, [x, y, z]: [i64; 3]) -> Self::Output {
        self.hash_all3(x, y, z)
    }
}

impl Noise<[i64; 4]> for HastyPointHash {
    type Output = u64;

    #[inline]
    fn sample(&self, [x, y, z, w]: [i64; 4]) -> Self::Output {
        self.hash_all4(x, y, z, w)
    }
}

impl Noise<[i64; 5]> for HastyPointHash {
    type Output = u64;

    #[inline]
    fn sample(&self, input: [i64; 5]) -> Self::Output {
        self.hash_all5(input)
    }
}

impl Noise<[i64; 6]> for HastyPointHash {
    type Output = u64;

    #[inline]
    fn sample(&self, input: [i64; 6]) -> Self::Output {
        self.hash_all6(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultRng, Rng};

    #[test]
    fn reference_hashes() {
        assert_eq!(HastyPointHash::new(3).hash_all2(1, 2), 862554368571901865);
        assert_eq!(
            HastyPointHash::new(0).hash_all2(-5, 9),
            10821761420096226885
        );
        assert_eq!(
            HastyPointHash::new(4).hash_all3(1, 2, 3),
            14476170777584104036
        );
        assert_eq!(
            HastyPointHash::new(5).hash_all4(1, 2, 3, 4),
            17253187501890942740
        );
        assert_eq!(
            HastyPointHash::new(6).hash_all5([1, 2, 3, 4, 5]),
            14002670282072529064
        );
        assert_eq!(
            HastyPointHash::new(0).hash_all5([-7, 0, 12, -3, 9]),
            14269751107725993662
        );
        assert_eq!(
            HastyPointHash::new(7).hash_all6([1, 2, 3, 4, 5, 6]),
            17858236457331587564
        );
    }

    #[test]
    fn bit_limited_hashes_keep_the_high_bits() {
        let h = HastyPointHash::new(3);
        assert_eq!(h.hash_bits2(1, 2, 8), 862554368571901865 >> 56);
        assert_eq!(h.hash_bits2(1, 2, 64), 862554368571901865);
        for x in -50..50 {
            assert!(h.hash_bits3(x, 7, -x, 5) < 32);
            assert!(h.hash_bits4(x, 7, -x, 1, 6) < 64);
        }

        let point = [1, 2, 3, 4, 5];
        let h = HastyPointHash::new(6);
        assert_eq!(h.hash_bits5(point, 8), 14002670282072529064 >> 56);
        assert_eq!(h.hash_bits5(point, 8), h.sample(point) >> 56);
    }

    #[test]
    fn neighbours_disagree() {
        let h = HastyPointHash::from_rng(&mut DefaultRng::from_seed(11));
        let center = h.sample([10, 10]);
        for [dx, dy] in [[1, 0], [-1, 0], [0, 1], [0, -1]] {
            assert_ne!(center, h.sample([10 + dx, 10 + dy]));
        }
    }

    #[test]
    fn state_changes_the_field() {
        let a = HastyPointHash::new(1);
        let b = HastyPointHash::new(2);
        assert_ne!(a.sample([0, 0, 0]), b.sample([0, 0, 0]));
        assert_ne!(a.sample([0, 0, 0, 0]), b.sample([0, 0, 0, 0]));
        assert_ne!(a.sample([0, 0, 0, 0, 0]), b.sample([0, 0, 0, 0, 0]));
    }
}
