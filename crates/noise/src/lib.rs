//! OpenSimplex2 coherent noise.
//!
//! Two evaluators share the same lattices and differ in how many vertices contribute to a
//! sample:
//!
//! - [`OpenSimplex2F`] is the fast one. Fewer vertices, a smaller kernel.
//! - [`OpenSimplex2S`] is the smooth one. Every vertex of a wider radius contributes.
//!
//! Both are deterministic functions of their seed and of the input coordinates, produce values
//! roughly within `[-1, 1]`, and are immutable once created.

mod fast;
mod smooth;

pub mod gradients;
pub mod lattice;
pub mod orientation;
pub mod permutation;

pub use self::fast::OpenSimplex2F;
pub use self::orientation::{Orientation2, Orientation3, Orientation4};
pub use self::permutation::PermutationTable;
pub use self::smooth::OpenSimplex2S;

/// The seed used by [`Default`] implementations.
pub const DEFAULT_SEED: u64 = 1234567890987654321;

/// Implements the sampling traits of `nk_rng` for an evaluator.
///
/// Plain samples use the default orientation of each dimension and seeded samples offset the
/// input.
macro_rules! impl_sampling_traits {
    ($ty:ty) => {
        impl Default for $ty {
            #[inline]
            fn default() -> Self {
                Self::new($crate::DEFAULT_SEED)
            }
        }

        impl ::nk_rng::FromRng for $ty {
            fn from_rng(rng: &mut impl ::nk_rng::Rng) -> Self {
                Self::new(rng.next_u64())
            }
        }

        impl ::nk_rng::Noise<[f64; 2]> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, [x, y]: [f64; 2]) -> f64 {
                self.noise2(x, y)
            }
        }

        impl ::nk_rng::Noise<[f64; 3]> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, [x, y, z]: [f64; 3]) -> f64 {
                self.noise3_classic(x, y, z)
            }
        }

        impl ::nk_rng::Noise<[f64; 4]> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, [x, y, z, w]: [f64; 4]) -> f64 {
                self.noise4_classic(x, y, z, w)
            }
        }

        impl ::nk_rng::SeededNoise<[f64; 2]> for $ty {
            #[inline]
            fn sample_with_seed(&self, [x, y]: [f64; 2], seed: u64) -> f64 {
                self.noise2_with_seed(x, y, seed)
            }
        }

        impl ::nk_rng::SeededNoise<[f64; 3]> for $ty {
            #[inline]
            fn sample_with_seed(&self, [x, y, z]: [f64; 3], seed: u64) -> f64 {
                self.noise3_with_seed(x, y, z, seed)
            }
        }

        impl ::nk_rng::SeededNoise<[f64; 4]> for $ty {
            #[inline]
            fn sample_with_seed(&self, [x, y, z, w]: [f64; 4], seed: u64) -> f64 {
                self.noise4_with_seed(x, y, z, w, seed)
            }
        }

        #[cfg(feature = "glam")]
        impl ::nk_rng::Noise<::glam::DVec2> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, input: ::glam::DVec2) -> f64 {
                self.noise2(input.x, input.y)
            }
        }

        #[cfg(feature = "glam")]
        impl ::nk_rng::Noise<::glam::DVec3> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, input: ::glam::DVec3) -> f64 {
                self.noise3_classic(input.x, input.y, input.z)
            }
        }

        #[cfg(feature = "glam")]
        impl ::nk_rng::Noise<::glam::DVec4> for $ty {
            type Output = f64;

            #[inline]
            fn sample(&self, input: ::glam::DVec4) -> f64 {
                self.noise4_classic(input.x, input.y, input.z, input.w)
            }
        }
    };
}

pub(crate) use impl_sampling_traits;

#[cfg(test)]
mod tests {
    use super::*;
    use nk_rng::{DefaultRng, FromRng, Noise, Rng, SeededNoise};

    #[test]
    fn traits_forward_to_the_classic_orientation() {
        let n = OpenSimplex2S::default();
        assert_eq!(n.sample([0.3, -1.7]), n.noise2(0.3, -1.7));
        assert_eq!(n.sample([0.3, -1.7, 2.2]), n.noise3_classic(0.3, -1.7, 2.2));
        assert_eq!(
            n.sample([0.3, -1.7, 2.2, 0.9]),
            n.noise4_classic(0.3, -1.7, 2.2, 0.9)
        );
        assert_eq!(
            n.sample_with_seed([0.3, -1.7], 5),
            n.noise2_with_seed(0.3, -1.7, 5)
        );
    }

    #[test]
    fn from_rng_draws_the_seed() {
        let a = OpenSimplex2F::from_rng(&mut DefaultRng::from_seed(8));
        let b = OpenSimplex2F::new(DefaultRng::from_seed(8).next_u64());
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.permutation(), b.permutation());
    }

    #[cfg(feature = "glam")]
    #[test]
    fn glam_vectors() {
        use glam::{DVec2, DVec3, DVec4};

        let n = OpenSimplex2F::default();
        assert_eq!(n.sample(DVec2::new(1.5, 2.5)), n.sample([1.5, 2.5]));
        assert_eq!(
            n.sample(DVec3::new(1.5, 2.5, -0.5)),
            n.sample([1.5, 2.5, -0.5])
        );
        assert_eq!(
            n.sample(DVec4::new(1.5, 2.5, -0.5, 8.0)),
            n.sample([1.5, 2.5, -0.5, 8.0])
        );
    }
}
