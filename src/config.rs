//! Data-driven description of a noise source.

use std::fmt;

use nk_noise::{
    OpenSimplex2F, OpenSimplex2S, Orientation2, Orientation3, Orientation4, DEFAULT_SEED,
};
use nk_rng::{Noise, SeededNoise};

/// The OpenSimplex2 variant to evaluate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// [`OpenSimplex2F`].
    Fast,
    /// [`OpenSimplex2S`].
    #[default]
    Smooth,
}

/// Describes a noise source: which variant, which seed, how each dimension is oriented and the
/// scale applied to the input.
///
/// In RON, every field is optional:
///
/// ```ron
/// (
///     variant: Fast,
///     seed: 42,
///     orientation3: XZBeforeY,
///     frequency: 0.05,
/// )
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct NoiseConfig {
    pub variant: Variant,
    pub seed: u64,
    pub orientation2: Orientation2,
    pub orientation3: Orientation3,
    pub orientation4: Orientation4,
    /// Every input coordinate is multiplied by this value before evaluation.
    pub frequency: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: DEFAULT_SEED,
            orientation2: Orientation2::default(),
            orientation3: Orientation3::default(),
            orientation4: Orientation4::default(),
            frequency: 1.0,
        }
    }
}

/// An error that might occur while loading a [`NoiseConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The input is not a valid RON description of a [`NoiseConfig`].
    #[cfg(feature = "serde")]
    Parse(ron::error::SpannedError),
    /// The frequency is not a finite, strictly positive number.
    InvalidFrequency(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Self::Parse(err) => write!(f, "failed to parse the noise configuration: {err}"),
            Self::InvalidFrequency(freq) => {
                write!(f, "invalid frequency `{freq}` (must be finite and positive)")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Parse(err) => Some(err),
            Self::InvalidFrequency(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Parse(err)
    }
}

impl NoiseConfig {
    /// Parses and validates a configuration written in RON.
    #[cfg(feature = "serde")]
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration to pretty-printed RON.
    #[cfg(feature = "serde")]
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Checks the values that the type system does not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }

    /// Creates the evaluator described by this configuration.
    #[profiling::function]
    pub fn build(&self) -> ConfiguredNoise {
        let evaluator = match self.variant {
            Variant::Fast => Evaluator::Fast(OpenSimplex2F::new(self.seed)),
            Variant::Smooth => Evaluator::Smooth(OpenSimplex2S::new(self.seed)),
        };

        nk_log::trace!(
            "built {:?} noise (seed {}, frequency {})",
            self.variant,
            self.seed,
            self.frequency,
        );

        ConfiguredNoise {
            evaluator,
            orientation2: self.orientation2,
            orientation3: self.orientation3,
            orientation4: self.orientation4,
            frequency: self.frequency,
        }
    }
}

#[derive(Debug, Clone)]
enum Evaluator {
    Fast(OpenSimplex2F),
    Smooth(OpenSimplex2S),
}

/// A noise source built from a [`NoiseConfig`].
///
/// Sampling goes through the [`Noise`] and [`SeededNoise`] traits, using the orientation the
/// configuration selected for the dimension of the input.
#[derive(Debug, Clone)]
pub struct ConfiguredNoise {
    evaluator: Evaluator,
    orientation2: Orientation2,
    orientation3: Orientation3,
    orientation4: Orientation4,
    frequency: f64,
}

impl ConfiguredNoise {
    /// The variant this noise evaluates.
    pub fn variant(&self) -> Variant {
        match self.evaluator {
            Evaluator::Fast(_) => Variant::Fast,
            Evaluator::Smooth(_) => Variant::Smooth,
        }
    }

    /// The frequency applied to every input.
    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Samples a `width` by `height` grid of points spaced by `step`, starting at `origin`.
    ///
    /// The result is laid out row by row.
    #[profiling::function]
    pub fn sample_grid2(
        &self,
        origin: [f64; 2],
        width: usize,
        height: usize,
        step: f64,
    ) -> Vec<f64> {
        let mut ret = Vec::with_capacity(width * height);
        for j in 0..height {
            let y = origin[1] + j as f64 * step;
            for i in 0..width {
                let x = origin[0] + i as f64 * step;
                ret.push(self.sample([x, y]));
            }
        }
        ret
    }
}

impl Noise<[f64; 2]> for ConfiguredNoise {
    type Output = f64;

    fn sample(&self, [x, y]: [f64; 2]) -> f64 {
        let (x, y) = (x * self.frequency, y * self.frequency);
        match &self.evaluator {
            Evaluator::Fast(n) => n.noise2_oriented(self.orientation2, x, y),
            Evaluator::Smooth(n) => n.noise2_oriented(self.orientation2, x, y),
        }
    }
}

impl Noise<[f64; 3]> for ConfiguredNoise {
    type Output = f64;

    fn sample(&self, [x, y, z]: [f64; 3]) -> f64 {
        let f = self.frequency;
        match &self.evaluator {
            Evaluator::Fast(n) => n.noise3_oriented(self.orientation3, x * f, y * f, z * f),
            Evaluator::Smooth(n) => n.noise3_oriented(self.orientation3, x * f, y * f, z * f),
        }
    }
}

impl Noise<[f64; 4]> for ConfiguredNoise {
    type Output = f64;

    fn sample(&self, [x, y, z, w]: [f64; 4]) -> f64 {
        let f = self.frequency;
        match &self.evaluator {
            Evaluator::Fast(n) => n.noise4_oriented(self.orientation4, x * f, y * f, z * f, w * f),
            Evaluator::Smooth(n) => {
                n.noise4_oriented(self.orientation4, x * f, y * f, z * f, w * f)
            }
        }
    }
}

macro_rules! impl_seeded {
    ($($n:literal),*) => {$(
        impl SeededNoise<[f64; $n]> for ConfiguredNoise {
            fn sample_with_seed(&self, input: [f64; $n], seed: u64) -> f64 {
                let input = input.map(|c| c * self.frequency);
                match &self.evaluator {
                    Evaluator::Fast(n) => n.sample_with_seed(input, seed),
                    Evaluator::Smooth(n) => n.sample_with_seed(input, seed),
                }
            }
        }
    )*};
}

// Seeded samples always use the classic orientation of the dimension.
impl_seeded!(2, 3, 4);

#[cfg(feature = "glam")]
impl Noise<glam::DVec2> for ConfiguredNoise {
    type Output = f64;

    #[inline]
    fn sample(&self, input: glam::DVec2) -> f64 {
        self.sample(input.to_array())
    }
}

#[cfg(feature = "glam")]
impl Noise<glam::DVec3> for ConfiguredNoise {
    type Output = f64;

    #[inline]
    fn sample(&self, input: glam::DVec3) -> f64 {
        self.sample(input.to_array())
    }
}

#[cfg(feature = "glam")]
impl Noise<glam::DVec4> for ConfiguredNoise {
    type Output = f64;

    #[inline]
    fn sample(&self, input: glam::DVec4) -> f64 {
        self.sample(input.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_default_evaluator() {
        let noise = NoiseConfig::default().build();
        let reference = OpenSimplex2S::default();
        assert_eq!(noise.variant(), Variant::Smooth);
        assert_eq!(noise.sample([0.3, -1.7]), reference.noise2(0.3, -1.7));
        assert_eq!(
            noise.sample([0.3, -1.7, 2.2]),
            reference.noise3_classic(0.3, -1.7, 2.2)
        );
    }

    #[test]
    fn frequency_scales_the_input() {
        let config = NoiseConfig {
            variant: Variant::Fast,
            frequency: 0.5,
            orientation4: Orientation4::XYZBeforeW,
            ..Default::default()
        };
        let noise = config.build();
        let reference = OpenSimplex2F::default();
        assert_eq!(noise.sample([2.0, 4.0]), reference.noise2(1.0, 2.0));
        assert_eq!(
            noise.sample([2.0, 4.0, 6.0, 8.0]),
            reference.noise4_xyz_before_w(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            noise.sample_with_seed([2.0, 4.0, 6.0], 99),
            reference.noise3_with_seed(1.0, 2.0, 3.0, 99)
        );
    }

    #[test]
    fn invalid_frequencies() {
        for frequency in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = NoiseConfig {
                frequency,
                ..Default::default()
            };
            let result = config.validate();
            assert!(matches!(result, Err(ConfigError::InvalidFrequency(_))));
        }
    }

    #[test]
    fn grid_is_row_major() {
        let noise = NoiseConfig::default().build();
        let grid = noise.sample_grid2([1.0, 2.0], 3, 2, 0.5);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], noise.sample([1.0, 2.0]));
        assert_eq!(grid[2], noise.sample([2.0, 2.0]));
        assert_eq!(grid[4], noise.sample([1.5, 2.5]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_ron() {
        let source = "(variant: Fast, seed: 42, orientation3: XZBeforeY, frequency: 0.05)";
        let config = NoiseConfig::from_ron(source).unwrap();
        assert_eq!(config.variant, Variant::Fast);
        assert_eq!(config.seed, 42);
        assert_eq!(config.orientation2, Orientation2::Standard);
        assert_eq!(config.orientation3, Orientation3::XZBeforeY);
        assert_eq!(config.frequency, 0.05);

        assert_eq!(NoiseConfig::from_ron("()").unwrap(), NoiseConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ron_errors() {
        assert!(matches!(
            NoiseConfig::from_ron("(octaves: 3)"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            NoiseConfig::from_ron("(frequency: -2.0)"),
            Err(ConfigError::InvalidFrequency(_))
        ));
        let err = NoiseConfig::from_ron("(variant: Fast").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ron_output_parses_back() {
        let config = NoiseConfig {
            variant: Variant::Fast,
            seed: 7,
            orientation2: Orientation2::XBeforeY,
            orientation3: Orientation3::XYBeforeZ,
            orientation4: Orientation4::XZBeforeYW,
            frequency: 0.25,
        };
        let text = config.to_ron().unwrap();
        assert_eq!(NoiseConfig::from_ron(&text).unwrap(), config);
    }
}
