use crate::{utility, Rng};

/// A small and fast general-purpose pseudo-random number generator.
///
/// This number generator is based on the [xorshift128+][source] algorithm. Its state is derived
/// from the seed through SplitMix64, which guarantees it is never all-zero.
///
/// [source]: https://prng.di.unimi.it/xorshift128plus.c
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128Plus {
    a: u64,
    b: u64,
}

impl Rng for Xorshift128Plus {
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized,
    {
        // `splitmix64` is a bijection, so `a` and `b` can't both be zero.
        let a = utility::splitmix64(seed);
        let b = utility::splitmix64(a);

        Self { a, b }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.a;
        let s0 = self.b;
        let ret = s0.wrapping_add(s1);

        self.a = s0;
        s1 ^= s1 << 23;
        self.b = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);

        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_never_zero() {
        for seed in [0, 1, u64::MAX, 0x9e3779b97f4a7c15_u64.wrapping_neg()] {
            let rng = Xorshift128Plus::from_seed(seed);
            assert!(rng.a != 0 || rng.b != 0);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift128Plus::from_seed(1234);
        let mut b = Xorshift128Plus::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_ne!(
            Xorshift128Plus::from_seed(1).next_u64(),
            Xorshift128Plus::from_seed(2).next_u64()
        );
    }

    #[test]
    fn first_output_is_the_sum_of_the_state() {
        let mut rng = Xorshift128Plus::from_seed(0);
        let a = utility::splitmix64(0);
        let b = utility::splitmix64(a);
        assert_eq!(rng.next_u64(), a.wrapping_add(b));
    }
}
