//! The pseudo-random number generators of this crate.

mod mersenne_twister64;
pub use mersenne_twister64::*;

mod xorshift128plus;
pub use xorshift128plus::*;
