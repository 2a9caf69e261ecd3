use crate::Rng;

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB5026F5AA96619E9;
/// Most significant 33 bits.
const UM: u64 = 0xFFFFFFFF80000000;
/// Least significant 31 bits.
const LM: u64 = 0x7FFFFFFF;

/// The 64-bit Mersenne Twister ([MT19937-64][source]).
///
/// This generator is much slower to seed than [`Xorshift128Plus`](super::Xorshift128Plus) and
/// carries 2.5KB of state, but it has an enormous period and its output is reproducible across
/// every implementation of the reference algorithm.
///
/// [source]: http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/emt64.html
#[derive(Clone)]
pub struct MersenneTwister64 {
    mt: Box<[u64; NN]>,
    index: usize,
}

impl MersenneTwister64 {
    /// Creates a new generator from a slice of seed words of any length.
    ///
    /// An empty slice seeds the generator as if only the initialization seed had been used.
    pub fn from_seed_slice(key: &[u64]) -> Self {
        let mut ret = Self::from_seed(19650218);
        if key.is_empty() {
            return ret;
        }

        let mt = &mut *ret.mt;
        let mut i = 1;
        let mut j = 0;

        for _ in 0..NN.max(key.len()) {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(3935559000370003845))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..NN - 1 {
            mt[i] = (mt[i] ^ (mt[i - 1] ^ (mt[i - 1] >> 62)).wrapping_mul(2862933555777941757))
                .wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
        }

        // Guarantees a non-zero initial state.
        mt[0] = 1 << 63;

        ret
    }

    /// Regenerates the whole state block.
    fn twist(&mut self) {
        let mt = &mut *self.mt;
        let mix = |upper: u64, lower: u64| {
            let x = (upper & UM) | (lower & LM);
            (x >> 1) ^ ((x & 1) * MATRIX_A)
        };

        for i in 0..NN - MM {
            mt[i] = mt[i + MM] ^ mix(mt[i], mt[i + 1]);
        }
        for i in NN - MM..NN - 1 {
            mt[i] = mt[i + MM - NN] ^ mix(mt[i], mt[i + 1]);
        }
        mt[NN - 1] = mt[MM - 1] ^ mix(mt[NN - 1], mt[0]);

        self.index = 0;
    }
}

impl Rng for MersenneTwister64 {
    #[profiling::function]
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized,
    {
        let mut mt = Box::new([0u64; NN]);
        mt[0] = seed;
        for i in 1..NN {
            mt[i] = 6364136223846793005u64
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> 62))
                .wrapping_add(i as u64);
        }

        Self { mt, index: NN }
    }

    fn next_u64(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }

        let mut x = self.mt[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555555555555555;
        x ^= (x << 17) & 0x71D67FFFEDA60000;
        x ^= (x << 37) & 0xFFF7EEE000000000;
        x ^= x >> 43;

        x
    }
}

impl std::fmt::Debug for MersenneTwister64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister64")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence_from_seed() {
        let mut rng = MersenneTwister64::from_seed(5489);
        assert_eq!(rng.next_u64(), 14514284786278117030);
        assert_eq!(rng.next_u64(), 4620546740167642908);
        assert_eq!(rng.next_u64(), 13109570281517897720);
    }

    #[test]
    fn reference_sequence_from_slice() {
        let mut rng = MersenneTwister64::from_seed_slice(&[0x12345, 0x23456, 0x34567, 0x45678]);
        assert_eq!(rng.next_u64(), 7266447313870364031);
        assert_eq!(rng.next_u64(), 4946485549665804864);
        assert_eq!(rng.next_u64(), 16945909448695747420);
    }

    #[test]
    fn zero_seed_is_valid() {
        let mut rng = MersenneTwister64::from_seed(0);
        assert_eq!(rng.next_u64(), 2947667278772165694);
        assert_eq!(rng.next_u64(), 18301848765998365067);
    }

    #[test]
    fn survives_several_twists() {
        let mut a = MersenneTwister64::from_seed(42);
        let mut b = a.clone();
        for _ in 0..3 * NN {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
