/// Converts a `u32` value into a `f32` value in the range `[0.0, 1.0]`.
#[inline]
pub fn f32_from_u32_01(x: u32) -> f32 {
    (x & 0xFFFFFF) as f32 * (1.0 / 0xFFFFFF as f32)
}

/// Converts a `u32` value into a `f32` value in the range `[-1.0, 1.0]`.
#[inline]
pub fn f32_from_u32_11(x: u32) -> f32 {
    // `f32_from_u32_01` does not use the most significant bit of `x`, meaning we can use it for
    // the sign bit.
    if x & 0x8000_0000 != 0 {
        -f32_from_u32_01(x)
    } else {
        f32_from_u32_01(x)
    }
}

/// Converts a `u64` value into a `f64` value in the range `[0.0, 1.0)`.
///
/// Only the 53 most significant bits of `x` are used.
#[inline]
pub fn f64_from_u64_01(x: u64) -> f64 {
    (x >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Returns the largest integer that is less than or equal to `x`.
///
/// Values out of the range of `i64` saturate, and `NaN` maps to `0`.
#[inline(always)]
pub fn floor_i64(x: f64) -> i64 {
    x.floor() as i64
}
