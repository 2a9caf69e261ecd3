//! Coordinate transforms applied before evaluating the lattices.
//!
//! The 2D and 4D transforms skew the input onto the simplex lattice. The 3D transforms are
//! rotations of the BCC lattice. Each non-classic orientation singles out one axis (or one
//! pair of axes) so that the remaining ones look like the corresponding lower-dimensional noise.

#![allow(clippy::excessive_precision)]

/// `(sqrt(3) - 1) / 2`, skews a 2D point onto the triangular lattice.
pub const SKEW_2D: f64 = 0.366025403784439;

/// Standard 2D skew.
#[inline(always)]
pub fn skew2([x, y]: [f64; 2]) -> [f64; 2] {
    let s = SKEW_2D * (x + y);
    [x + s, y + s]
}

/// 2D skew and rotation baked into one, with Y pointing down the main diagonal.
#[inline(always)]
pub fn x_before_y2([x, y]: [f64; 2]) -> [f64; 2] {
    let xx = x * 0.7071067811865476;
    let yy = y * 1.224744871380249;
    [yy + xx, yy - xx]
}

/// Classic 3D orientation: an orthonormal rotation that keeps the cardinal planes looking alike.
#[inline(always)]
pub fn classic3([x, y, z]: [f64; 3]) -> [f64; 3] {
    let r = (2.0 / 3.0) * (x + y + z);
    [r - x, r - y, r - z]
}

/// Rotates the BCC lattice so that X and Y are triangular, like the 2D noise.
#[inline(always)]
pub fn xy_before_z3([x, y, z]: [f64; 3]) -> [f64; 3] {
    let xy = x + y;
    let s2 = xy * -0.211324865405187;
    let zz = z * 0.577350269189626;
    [x + s2 - zz, y + s2 - zz, xy * 0.577350269189626 + zz]
}

/// Rotates the BCC lattice so that X and Z are triangular, like the 2D noise.
#[inline(always)]
pub fn xz_before_y3([x, y, z]: [f64; 3]) -> [f64; 3] {
    let xz = x + z;
    let s2 = xz * -0.211324865405187;
    let yy = y * 0.577350269189626;
    [x + s2 - yy, xz * 0.577350269189626 + yy, z + s2 - yy]
}

/// The 4D skew constants of one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skew4 {
    /// Factor of the classic skew, `s = classic * (x + y + z + w)`.
    pub classic: f64,
    pub pair_s_own: f64,
    pub pair_s_other: f64,
    pub pair_t_own: f64,
    pub pair_t_other: f64,
    /// Scale of W in the XYZ-before-W orientation.
    pub w_scale: f64,
}

/// Skew constants of the fast variant.
pub const SKEW_4D_FAST: Skew4 = Skew4 {
    classic: -0.138196601125011,
    pair_s_own: -0.178275657951399372,
    pair_s_other: 0.215623393288842828,
    pair_t_own: -0.403949762580207112,
    pair_t_other: -0.375199083010075342,
    w_scale: 0.2236067977499788,
};

/// Skew constants of the smooth variant.
pub const SKEW_4D_SMOOTH: Skew4 = Skew4 {
    classic: 0.309016994374947,
    pair_s_own: -0.28522513987434876941,
    pair_s_other: 0.83897065470611435718,
    pair_t_own: 0.21939749883706435719,
    pair_t_other: -0.48214856493302476942,
    w_scale: 1.118033988749894,
};

impl Skew4 {
    /// Classic 4D skew.
    #[inline(always)]
    pub fn classic(&self, [x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let s = self.classic * (x + y + z + w);
        [x + s, y + s, z + s, w + s]
    }

    /// Skews the `(a, b)` and `(c, d)` planes into two orthogonal triangular planes.
    #[inline(always)]
    fn pairs(&self, a: f64, b: f64, c: f64, d: f64) -> (f64, f64) {
        let ab = a + b;
        let cd = c + d;
        let s2 = ab * self.pair_s_own + cd * self.pair_s_other;
        let t2 = cd * self.pair_t_own + ab * self.pair_t_other;
        (s2, t2)
    }

    /// X and Y (or Z and W) form orthogonal triangular planes.
    #[inline(always)]
    pub fn xy_before_zw(&self, [x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let (s2, t2) = self.pairs(x, y, z, w);
        [x + s2, y + s2, z + t2, w + t2]
    }

    /// X and Z (or Y and W) form orthogonal triangular planes.
    #[inline(always)]
    pub fn xz_before_yw(&self, [x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let (s2, t2) = self.pairs(x, z, y, w);
        [x + s2, y + t2, z + s2, w + t2]
    }

    /// XYZ oriented like the classic 3D noise, with W as an extra degree of freedom.
    #[inline(always)]
    pub fn xyz_before_w(&self, [x, y, z, w]: [f64; 4]) -> [f64; 4] {
        let xyz = x + y + z;
        let ww = w * self.w_scale;
        let s2 = xyz * -0.16666666666666666 + ww;
        [x + s2, y + s2, z + s2, -0.5 * xyz + ww]
    }
}

/// Seed offsets for 2D sampling: the low and high 32 bits.
#[inline]
pub fn seed_offset2(seed: u64) -> [f64; 2] {
    [(seed & 0xFFFF_FFFF) as f64, (seed >> 32) as f64]
}

/// Seed offsets for 3D sampling: 21, 21 and 22 bits.
#[inline]
pub fn seed_offset3(seed: u64) -> [f64; 3] {
    [
        (seed & 0x1F_FFFF) as f64,
        ((seed >> 21) & 0x1F_FFFF) as f64,
        (seed >> 42) as f64,
    ]
}

/// Seed offsets for 4D sampling: four 16-bit chunks.
#[inline]
pub fn seed_offset4(seed: u64) -> [f64; 4] {
    [
        (seed & 0xFFFF) as f64,
        ((seed >> 16) & 0xFFFF) as f64,
        ((seed >> 32) & 0xFFFF) as f64,
        (seed >> 48) as f64,
    ]
}

/// The orientation of a 2D evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation2 {
    /// The standard lattice orientation.
    #[default]
    Standard,
    /// Y points down the main diagonal. Suits 2D games where Y is vertical.
    XBeforeY,
}

/// The orientation of a 3D evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation3 {
    #[default]
    Classic,
    /// Better isotropy in (X, Y). Z is the "different" axis (elevation or time).
    XYBeforeZ,
    /// Better isotropy in (X, Z). Y is the "different" axis.
    XZBeforeY,
}

/// The orientation of a 4D evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation4 {
    #[default]
    Classic,
    XYBeforeZW,
    XZBeforeYW,
    XYZBeforeW,
}

impl Orientation2 {
    /// Transforms a point into skewed lattice space.
    #[inline]
    pub fn apply(self, p: [f64; 2]) -> [f64; 2] {
        match self {
            Self::Standard => skew2(p),
            Self::XBeforeY => x_before_y2(p),
        }
    }
}

impl Orientation3 {
    /// Transforms a point into rotated lattice space.
    #[inline]
    pub fn apply(self, p: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Classic => classic3(p),
            Self::XYBeforeZ => xy_before_z3(p),
            Self::XZBeforeY => xz_before_y3(p),
        }
    }
}

impl Orientation4 {
    /// Transforms a point into skewed lattice space, using the constants of one variant.
    #[inline]
    pub fn apply(self, skew: &Skew4, p: [f64; 4]) -> [f64; 4] {
        match self {
            Self::Classic => skew.classic(p),
            Self::XYBeforeZW => skew.xy_before_zw(p),
            Self::XZBeforeYW => skew.xz_before_yw(p),
            Self::XYZBeforeW => skew.xyz_before_w(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm<const N: usize>(p: [f64; N]) -> f64 {
        p.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn three_dimensional_rotations_preserve_length() {
        let p = [0.3, -1.7, 2.2];
        for o in [
            Orientation3::Classic,
            Orientation3::XYBeforeZ,
            Orientation3::XZBeforeY,
        ] {
            assert!((norm(o.apply(p)) - norm(p)).abs() < 1e-9, "{o:?}");
        }
    }

    #[test]
    fn xz_before_y_swaps_the_roles_of_y_and_z() {
        let [a, b, c] = xy_before_z3([0.3, 2.2, -1.7]);
        let [x, y, z] = xz_before_y3([0.3, -1.7, 2.2]);
        assert_eq!([a, b, c], [x, z, y]);
    }

    #[test]
    fn skew_moves_along_the_diagonal() {
        let [xs, ys] = skew2([1.0, 1.0]);
        assert_eq!(xs, ys);
        assert!((xs - (1.0 + 2.0 * SKEW_2D)).abs() < 1e-15);
        assert_eq!(skew2([0.0, 0.0]), [0.0, 0.0]);
    }

    #[test]
    fn four_dimensional_pairs_are_symmetric() {
        let p = [0.3, -1.7, 2.2, 0.9];
        for skew in [SKEW_4D_FAST, SKEW_4D_SMOOTH] {
            let [x, y, z, w] = skew.xy_before_zw(p);
            let [x2, z2, y2, w2] = skew.xz_before_yw([p[0], p[2], p[1], p[3]]);
            assert_eq!([x, y, z, w], [x2, y2, z2, w2]);
        }
    }

    #[test]
    fn seed_offsets_split_the_seed() {
        assert_eq!(seed_offset2(0x0000_0002_0000_0001), [1.0, 2.0]);
        assert_eq!(seed_offset3((3 << 42) | (2 << 21) | 1), [1.0, 2.0, 3.0]);
        assert_eq!(seed_offset4(0x0004_0003_0002_0001), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(seed_offset4(u64::MAX), [65535.0; 4]);
        assert_eq!(seed_offset3(0), [0.0; 3]);
    }
}
