/// A simple implementation of the [SplitMix64] algorithm.
///
/// This is mainly used to turn a 64-bit seed into a sequence of 64-bit numbers to use as
/// the base state of the other random number generators.
///
/// [SplitMix64]: http://prng.di.unimi.it/splitmix64.c
#[inline]
pub fn splitmix64(st: u64) -> u64 {
    let mut t = st.wrapping_add(0x9e3779b97f4a7c15);
    t = (t ^ (t >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    t = (t ^ (t >> 27)).wrapping_mul(0x94d049bb133111eb);
    t ^ (t >> 31)
}

#[cfg(test)]
mod tests {
    #[test]
    fn reference_outputs() {
        assert_eq!(super::splitmix64(0), 16294208416658607535);
        assert_eq!(super::splitmix64(1), 10451216379200822465);
    }
}
