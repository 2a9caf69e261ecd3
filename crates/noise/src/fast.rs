//! The fast variant of OpenSimplex2.

use nk_rng::utility::floor_i64;

use crate::gradients::GradientSet;
use crate::lattice::{Lattice3D, LOOKUP_2D_FAST, VERTICES_4D};
use crate::orientation::{self, Orientation2, Orientation3, Orientation4, SKEW_4D_FAST};
use crate::permutation::{wrap, PermutationTable};

const UNSKEW_2D: f64 = -0.211324865405187;
const UNSKEW_4D: f64 = 0.309016994374947;

/// Squared kernel radius of the 2D, 3D and 4D contributions.
const RSQUARED: f64 = 0.5;

/// OpenSimplex2 noise, fast variant.
///
/// 2D noise is simplex noise on a triangular lattice. 3D noise evaluates the four closest points
/// of a rotated body-centered-cubic lattice. 4D noise walks five overlapping copies of the
/// reciprocal A4 lattice.
///
/// The seed only selects the permutation table; re-seeding means building a new evaluator.
/// The `*_with_seed` methods offer a cheaper alternative that samples another region of the
/// same field.
#[derive(Debug, Clone)]
pub struct OpenSimplex2F {
    seed: u64,
    perm: PermutationTable,
    grads: GradientSet,
}

impl OpenSimplex2F {
    /// Creates a new evaluator.
    #[profiling::function]
    pub fn new(seed: u64) -> Self {
        let perm = PermutationTable::new(seed);
        let grads = GradientSet::fast(&perm);

        nk_log::trace!("created a fast OpenSimplex2 evaluator with seed {seed}");

        Self { seed, perm, grads }
    }

    /// The seed this evaluator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The permutation table of this evaluator.
    #[inline]
    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// 2D simplex noise, standard lattice orientation.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let [xs, ys] = orientation::skew2([x, y]);
        self.noise2_base(xs, ys)
    }

    /// 2D simplex noise, with Y pointing down the main diagonal.
    ///
    /// Might be better for a 2D sandbox style game where Y is vertical, and slightly less
    /// optimal for heightmaps or continent maps.
    pub fn noise2_x_before_y(&self, x: f64, y: f64) -> f64 {
        let [xs, ys] = orientation::x_before_y2([x, y]);
        self.noise2_base(xs, ys)
    }

    /// 2D simplex noise with a runtime-selected orientation.
    #[inline]
    pub fn noise2_oriented(&self, orientation: Orientation2, x: f64, y: f64) -> f64 {
        let [xs, ys] = orientation.apply([x, y]);
        self.noise2_base(xs, ys)
    }

    fn noise2_base(&self, xs: f64, ys: f64) -> f64 {
        let xsb = floor_i64(xs);
        let ysb = floor_i64(ys);
        let xsi = xs - xsb as f64;
        let ysi = ys - ysb as f64;

        // `0` for the lower triangle, `1` for the upper one.
        let index = ((ysi - xsi) / 2.0 + 1.0) as usize & 1;

        let ssi = (xsi + ysi) * UNSKEW_2D;
        let xi = xsi + ssi;
        let yi = ysi + ssi;

        let mut value = 0.0;
        for c in &LOOKUP_2D_FAST[index..index + 3] {
            let dx = xi + c.dx;
            let dy = yi + c.dy;
            let mut attn = RSQUARED - dx * dx - dy * dy;
            if attn <= 0.0 {
                continue;
            }

            let slot =
                self.perm.hash2(wrap(xsb.wrapping_add(c.xsv)), wrap(ysb.wrapping_add(c.ysv)));
            let grad = self.grads.grad2.get(slot);
            let extrapolation = grad[0] * dx + grad[1] * dy;

            attn *= attn;
            value += attn * attn * extrapolation;
        }

        value
    }

    /// 3D re-oriented 4-point BCC noise, classic orientation.
    ///
    /// Prefer [`noise3_xy_before_z`](Self::noise3_xy_before_z) or
    /// [`noise3_xz_before_y`](Self::noise3_xz_before_y) wherever one axis is special.
    pub fn noise3_classic(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation::classic3([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    /// 3D re-oriented 4-point BCC noise, with better visual isotropy in (X, Y).
    ///
    /// Recommended for 3D terrain and time-varied animations. Z should always be the
    /// "different" coordinate: call `noise3_xy_before_z(x, z, y)` if Y is vertical, or
    /// `noise3_xy_before_z(x, y, t)` for an animation.
    pub fn noise3_xy_before_z(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation::xy_before_z3([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    /// 3D re-oriented 4-point BCC noise, with better visual isotropy in (X, Z).
    ///
    /// Y should always be the "different" coordinate.
    pub fn noise3_xz_before_y(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation::xz_before_y3([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    /// 3D noise with a runtime-selected orientation.
    #[inline]
    pub fn noise3_oriented(&self, orientation: Orientation3, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation.apply([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    fn noise3_bcc(&self, xr: f64, yr: f64, zr: f64) -> f64 {
        let xrb = floor_i64(xr);
        let yrb = floor_i64(yr);
        let zrb = floor_i64(zr);
        let xri = xr - xrb as f64;
        let yri = yr - yrb as f64;
        let zri = zr - zrb as f64;

        // The octant of the cube determines the cell of the other cubic lattice.
        let xht = (xri + 0.5) as usize & 1;
        let yht = (yri + 0.5) as usize & 1;
        let zht = (zri + 0.5) as usize & 1;

        let lattice = Lattice3D::fast();
        let mut value = 0.0;
        let mut next = Some(lattice.entry(xht | (yht << 1) | (zht << 2)));

        while let Some(index) = next {
            let c = lattice.node(index);
            let dxr = xri + c.dxr;
            let dyr = yri + c.dyr;
            let dzr = zri + c.dzr;
            let mut attn = RSQUARED - dxr * dxr - dyr * dyr - dzr * dzr;

            if attn < 0.0 {
                next = c.next_on_failure;
                continue;
            }

            let slot = self.perm.hash3(
                wrap(xrb.wrapping_add(c.xrv)),
                wrap(yrb.wrapping_add(c.yrv)),
                wrap(zrb.wrapping_add(c.zrv)),
            );
            let grad = self.grads.grad3.get(slot);
            let extrapolation = grad[0] * dxr + grad[1] * dyr + grad[2] * dzr;

            attn *= attn;
            value += attn * attn * extrapolation;
            next = c.next_on_success;
        }

        value
    }

    /// 4D noise, classic lattice orientation.
    pub fn noise4_classic(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_FAST.classic([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D noise, with XY and ZW forming orthogonal triangular-based planes.
    ///
    /// Recommended for 3D terrain where X and Y (or Z and W) are horizontal, and for the
    /// `noise(x, y, sin(t), cos(t))` trick.
    pub fn noise4_xy_before_zw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_FAST.xy_before_zw([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D noise, with XZ and YW forming orthogonal triangular-based planes.
    pub fn noise4_xz_before_yw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_FAST.xz_before_yw([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D noise, with XYZ oriented like [`noise3_classic`](Self::noise3_classic) and W as an
    /// extra degree of freedom. W repeats eventually.
    ///
    /// Recommended for time-varied animations texturing a 3D object (W = time).
    pub fn noise4_xyz_before_w(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_FAST.xyz_before_w([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D noise with a runtime-selected orientation.
    #[inline]
    pub fn noise4_oriented(
        &self,
        orientation: Orientation4,
        x: f64,
        y: f64,
        z: f64,
        w: f64,
    ) -> f64 {
        let [xs, ys, zs, ws] = orientation.apply(&SKEW_4D_FAST, [x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    fn noise4_base(&self, xs: f64, ys: f64, zs: f64, ws: f64) -> f64 {
        let mut xsb = floor_i64(xs);
        let mut ysb = floor_i64(ys);
        let mut zsb = floor_i64(zs);
        let mut wsb = floor_i64(ws);
        let mut xsi = xs - xsb as f64;
        let mut ysi = ys - ysb as f64;
        let mut zsi = zs - zsb as f64;
        let mut wsi = ws - wsb as f64;

        let mut si_sum = xsi + ysi + zsi + wsi;
        let mut ssi = si_sum * UNSKEW_4D;

        // The lower half is the upper half mirrored. Flip, and flip back once the first vertex
        // is known.
        let in_lower_half = si_sum < 2.0;
        if in_lower_half {
            xsi = 1.0 - xsi;
            ysi = 1.0 - ysi;
            zsi = 1.0 - zsi;
            wsi = 1.0 - wsi;
            si_sum = 4.0 - si_sum;
        }

        // Opposing vertex pairs of the octahedron formed by the central cross-section of the
        // stretched tesseract.
        let aabb = xsi + ysi - zsi - wsi;
        let abab = xsi - ysi + zsi - wsi;
        let abba = xsi - ysi - zsi + wsi;
        let aabb_score = aabb.abs();
        let abab_score = abab.abs();
        let abba_score = abba.abs();

        let (mut asi, mut bsi, mut vertex_index, mut via, vib) =
            if aabb_score > abab_score && aabb_score > abba_score {
                if aabb > 0.0 {
                    (zsi, wsi, 0b0011, 0b0111, 0b1011)
                } else {
                    (xsi, ysi, 0b1100, 0b1101, 0b1110)
                }
            } else if abab_score > abba_score {
                if abab > 0.0 {
                    (ysi, wsi, 0b0101, 0b0111, 0b1101)
                } else {
                    (xsi, zsi, 0b1010, 0b1011, 0b1110)
                }
            } else if abba > 0.0 {
                (ysi, zsi, 0b1001, 0b1011, 0b1101)
            } else {
                (xsi, wsi, 0b0110, 0b0111, 0b1110)
            };

        if bsi > asi {
            via = vib;
            std::mem::swap(&mut asi, &mut bsi);
        }
        if si_sum + asi > 3.0 {
            vertex_index = via;
            if si_sum + bsi > 4.0 {
                vertex_index = 0b1111;
            }
        }

        if in_lower_half {
            xsi = 1.0 - xsi;
            ysi = 1.0 - ysi;
            zsi = 1.0 - zsi;
            wsi = 1.0 - wsi;
            vertex_index ^= 0b1111;
        }

        let vertices = &*VERTICES_4D;
        let mut value = 0.0;

        // One vertex from each of the five copies of the lattice.
        for step in 0..5 {
            let c = &vertices[vertex_index & 0b1111];
            xsb = xsb.wrapping_add(c.xsv);
            ysb = ysb.wrapping_add(c.ysv);
            zsb = zsb.wrapping_add(c.zsv);
            wsb = wsb.wrapping_add(c.wsv);

            let dx = xsi + ssi + c.dx;
            let dy = ysi + ssi + c.dy;
            let dz = zsi + ssi + c.dz;
            let dw = wsi + ssi + c.dw;
            let mut attn = RSQUARED - dx * dx - dy * dy - dz * dz - dw * dw;
            if attn > 0.0 {
                let slot = self.perm.hash4(wrap(xsb), wrap(ysb), wrap(zsb), wrap(wsb));
                let grad = self.grads.grad4.get(slot);
                let ramped = grad[0] * dx + grad[1] * dy + grad[2] * dz + grad[3] * dw;

                attn *= attn;
                value += attn * attn * ramped;
            }

            if step == 4 {
                break;
            }

            // Move to the counterpart of this vertex on the copy of the lattice shifted by
            // <-0.2, -0.2, -0.2, -0.2>.
            xsi += c.xsi;
            ysi += c.ysi;
            zsi += c.zsi;
            wsi += c.wsi;
            ssi += c.ssi_delta;

            // The next vertex is the closest one of the simplex based at that counterpart.
            let score0 = 1.0 + ssi * (-1.0 / UNSKEW_4D);
            vertex_index = if xsi >= ysi && xsi >= zsi && xsi >= wsi && xsi >= score0 {
                0b0001
            } else if ysi > xsi && ysi >= zsi && ysi >= wsi && ysi >= score0 {
                0b0010
            } else if zsi > xsi && zsi > ysi && zsi >= wsi && zsi >= score0 {
                0b0100
            } else if wsi > xsi && wsi > ysi && wsi > zsi && wsi >= score0 {
                0b1000
            } else {
                0b0000
            };
        }

        value
    }

    /// 2D noise sampled in the region of the field selected by `seed`.
    ///
    /// The low 32 bits of the seed offset X, the high 32 bits offset Y.
    pub fn noise2_with_seed(&self, x: f64, y: f64, seed: u64) -> f64 {
        let [ox, oy] = orientation::seed_offset2(seed);
        self.noise2(x + ox, y + oy)
    }

    /// 3D classic noise sampled in the region of the field selected by `seed`.
    ///
    /// The seed is split in 21, 21 and 22 bits offsetting X, Y and Z.
    pub fn noise3_with_seed(&self, x: f64, y: f64, z: f64, seed: u64) -> f64 {
        let [ox, oy, oz] = orientation::seed_offset3(seed);
        self.noise3_classic(x + ox, y + oy, z + oz)
    }

    /// 4D classic noise sampled in the region of the field selected by `seed`.
    ///
    /// The seed is split in four 16-bit chunks offsetting X, Y, Z and W.
    pub fn noise4_with_seed(&self, x: f64, y: f64, z: f64, w: f64, seed: u64) -> f64 {
        let [ox, oy, oz, ow] = orientation::seed_offset4(seed);
        self.noise4_classic(x + ox, y + oy, z + oz, w + ow)
    }
}

crate::impl_sampling_traits!(OpenSimplex2F);
