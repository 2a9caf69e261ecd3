//! OpenSimplex2 noise, fast and smooth, in 2D, 3D and 4D.
//!
//! This crate gathers the workspace crates behind one name:
//!
//! - [`noise`] holds the evaluators ([`OpenSimplex2F`], [`OpenSimplex2S`]) and their tables.
//! - [`rng`] holds the sampling traits, the pseudo-random generators and the point hashes.
//! - [`log`] holds the logging macros.
//!
//! On top of that, [`NoiseConfig`] describes a noise source as data that can be loaded from RON.
//!
//! ```
//! use noisekit::{Noise, OpenSimplex2S};
//!
//! let noise = OpenSimplex2S::new(42);
//! let value = noise.sample([0.5, 1.25]);
//! assert!((-1.0..=1.0).contains(&value));
//! ```

mod config;

pub use nk_log as log;
pub use nk_noise as noise;
pub use nk_rng as rng;

pub use self::config::*;
pub use nk_noise::{
    OpenSimplex2F, OpenSimplex2S, Orientation2, Orientation3, Orientation4, PermutationTable,
    DEFAULT_SEED,
};
pub use nk_rng::{DefaultRng, FromRng, Noise, Rng, SeededNoise};
