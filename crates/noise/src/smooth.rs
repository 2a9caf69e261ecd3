//! The smooth variant of OpenSimplex2.

use nk_rng::utility::floor_i64;

use crate::gradients::GradientSet;
use crate::lattice::{lookup_4d, Lattice3D, LOOKUP_2D_SMOOTH};
use crate::orientation::{self, Orientation2, Orientation3, Orientation4, SKEW_4D_SMOOTH};
use crate::permutation::{wrap, PermutationTable};

const UNSKEW_2D: f64 = -0.211324865405187;
const UNSKEW_4D: f64 = -0.138196601125011;

/// OpenSimplex2 noise, smooth variant.
///
/// Same lattices as [`OpenSimplex2F`](crate::OpenSimplex2F), but every vertex within a larger
/// radius contributes. The result is smoother and more isotropic at the cost of speed.
#[derive(Debug, Clone)]
pub struct OpenSimplex2S {
    seed: u64,
    perm: PermutationTable,
    grads: GradientSet,
}

impl OpenSimplex2S {
    /// Creates a new evaluator.
    #[profiling::function]
    pub fn new(seed: u64) -> Self {
        let perm = PermutationTable::new(seed);
        let grads = GradientSet::smooth(&perm);

        nk_log::trace!("created a smooth OpenSimplex2 evaluator with seed {seed}");

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

    /// 2D OpenSimplex2S noise, standard lattice orientation.
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let [xs, ys] = orientation::skew2([x, y]);
        self.noise2_base(xs, ys)
    }

    /// 2D OpenSimplex2S noise, with Y pointing down the main diagonal.
    pub fn noise2_x_before_y(&self, x: f64, y: f64) -> f64 {
        let [xs, ys] = orientation::x_before_y2([x, y]);
        self.noise2_base(xs, ys)
    }

    /// 2D OpenSimplex2S noise with a runtime-selected orientation.
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

        // Which side of the cell diagonal, then which of the two regions on either side of it
        // the point lies in.
        let a = (xsi + ysi) as i32;
        let half_a = a as f64 / 2.0;
        let index = (((a & 1) as usize) << 2)
            | ((((xsi - ysi / 2.0 + 1.0 - half_a) as i32 & 1) as usize) << 3)
            | ((((ysi - xsi / 2.0 + 1.0 - half_a) as i32 & 1) as usize) << 4);

        let ssi = (xsi + ysi) * UNSKEW_2D;
        let xi = xsi + ssi;
        let yi = ysi + ssi;

        let mut value = 0.0;
        for c in &LOOKUP_2D_SMOOTH[index..index + 4] {
            let dx = xi + c.dx;
            let dy = yi + c.dy;
            let mut attn = 2.0 / 3.0 - dx * dx - dy * dy;
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

    /// 3D re-oriented 8-point BCC noise, classic orientation.
    pub fn noise3_classic(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation::classic3([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    /// 3D re-oriented 8-point BCC noise, with better visual isotropy in (X, Y).
    ///
    /// Use `noise3_xy_before_z(x, z, y)` for terrain where Y is vertical.
    pub fn noise3_xy_before_z(&self, x: f64, y: f64, z: f64) -> f64 {
        let [xr, yr, zr] = orientation::xy_before_z3([x, y, z]);
        self.noise3_bcc(xr, yr, zr)
    }

    /// 3D re-oriented 8-point BCC noise, with better visual isotropy in (X, Z).
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

        let xht = (xri + 0.5) as usize & 1;
        let yht = (yri + 0.5) as usize & 1;
        let zht = (zri + 0.5) as usize & 1;

        let lattice = Lattice3D::smooth();
        let mut value = 0.0;
        let mut next = Some(lattice.entry(xht | (yht << 1) | (zht << 2)));

        while let Some(index) = next {
            let c = lattice.node(index);
            let dxr = xri + c.dxr;
            let dyr = yri + c.dyr;
            let dzr = zri + c.dzr;
            let mut attn = 0.75 - dxr * dxr - dyr * dyr - dzr * dzr;

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

    /// 4D OpenSimplex2S noise, classic lattice orientation.
    pub fn noise4_classic(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_SMOOTH.classic([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D OpenSimplex2S noise, with XY and ZW forming orthogonal triangular-based planes.
    pub fn noise4_xy_before_zw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_SMOOTH.xy_before_zw([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D OpenSimplex2S noise, with XZ and YW forming orthogonal triangular-based planes.
    pub fn noise4_xz_before_yw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_SMOOTH.xz_before_yw([x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    /// 4D OpenSimplex2S noise, with XYZ oriented like the classic 3D noise and W as an extra
    /// degree of freedom.
    pub fn noise4_xyz_before_w(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let [xs, ys, zs, ws] = SKEW_4D_SMOOTH.xyz_before_w([x, y, z, w]);
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
        let [xs, ys, zs, ws] = orientation.apply(&SKEW_4D_SMOOTH, [x, y, z, w]);
        self.noise4_base(xs, ys, zs, ws)
    }

    fn noise4_base(&self, xs: f64, ys: f64, zs: f64, ws: f64) -> f64 {
        let xsb = floor_i64(xs);
        let ysb = floor_i64(ys);
        let zsb = floor_i64(zs);
        let wsb = floor_i64(ws);
        let xsi = xs - xsb as f64;
        let ysi = ys - ysb as f64;
        let zsi = zs - zsb as f64;
        let wsi = ws - wsb as f64;

        let ssi = (xsi + ysi + zsi + wsi) * UNSKEW_4D;
        let xi = xsi + ssi;
        let yi = ysi + ssi;
        let zi = zsi + ssi;
        let wi = wsi + ssi;

        let quarter = |v: f64| (floor_i64(v * 4.0) & 3) as usize;
        let index = quarter(xs) | (quarter(ys) << 2) | (quarter(zs) << 4) | (quarter(ws) << 6);

        let mut value = 0.0;
        for c in lookup_4d(index) {
            let dx = xi + c.dx;
            let dy = yi + c.dy;
            let dz = zi + c.dz;
            let dw = wi + c.dw;
            let mut attn = 0.8 - dx * dx - dy * dy - dz * dz - dw * dw;
            if attn > 0.0 {
                attn *= attn;
                let slot = self.perm.hash4(
                    wrap(xsb.wrapping_add(c.xsv)),
                    wrap(ysb.wrapping_add(c.ysv)),
                    wrap(zsb.wrapping_add(c.zsv)),
                    wrap(wsb.wrapping_add(c.wsv)),
                );
                let grad = self.grads.grad4.get(slot);
                let extrapolation = grad[0] * dx + grad[1] * dy + grad[2] * dz + grad[3] * dw;
                value += attn * attn * extrapolation;
            }
        }

        value
    }

    /// 2D noise sampled in the region of the field selected by `seed`.
    pub fn noise2_with_seed(&self, x: f64, y: f64, seed: u64) -> f64 {
        let [ox, oy] = orientation::seed_offset2(seed);
        self.noise2(x + ox, y + oy)
    }

    /// 3D classic noise sampled in the region of the field selected by `seed`.
    pub fn noise3_with_seed(&self, x: f64, y: f64, z: f64, seed: u64) -> f64 {
        let [ox, oy, oz] = orientation::seed_offset3(seed);
        self.noise3_classic(x + ox, y + oy, z + oz)
    }

    /// 4D classic noise sampled in the region of the field selected by `seed`.
    pub fn noise4_with_seed(&self, x: f64, y: f64, z: f64, w: f64, seed: u64) -> f64 {
        let [ox, oy, oz, ow] = orientation::seed_offset4(seed);
        self.noise4_classic(x + ox, y + oy, z + oz, w + ow)
    }
}

crate::impl_sampling_traits!(OpenSimplex2S);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SEED;

    #[test]
    fn reference_values_2d() {
        let n = OpenSimplex2S::new(DEFAULT_SEED);
        assert_eq!(n.noise2(0.0, 0.0), 0.0);
        assert_eq!(n.noise2_x_before_y(0.0, 0.0), 0.0);
        assert_eq!(n.noise2(0.3, -1.7), -0.11164279603192007);
        assert_eq!(n.noise2(12.5, 7.25), 0.20394113189541493);
        assert_eq!(n.noise2(-103.37, 55.9), 0.060532853016263155);
        assert_eq!(n.noise2_x_before_y(0.3, -1.7), 0.5960803560402734);
        assert_eq!(n.noise2_x_before_y(12.5, 7.25), -0.09704760417457466);
        assert_eq!(n.noise2_x_before_y(-103.37, 55.9), 0.09287117255250571);
    }

    #[test]
    fn reference_values_3d() {
        let n = OpenSimplex2S::new(DEFAULT_SEED);
        assert_eq!(n.noise3_classic(0.3, -1.7, 2.2), 0.5942801897787064);
        assert_eq!(n.noise3_xy_before_z(0.3, -1.7, 2.2), 0.3992860552253831);
        assert_eq!(n.noise3_xz_before_y(0.3, -1.7, 2.2), 0.33907605953538544);
        assert_eq!(n.noise3_classic(12.5, 7.25, -3.1), -0.07930082726297911);
        assert_eq!(n.noise3_xy_before_z(12.5, 7.25, -3.1), -0.5545705269926089);
        assert_eq!(n.noise3_xz_before_y(12.5, 7.25, -3.1), 0.5319786615641959);
        assert_eq!(n.noise3_classic(-103.37, 55.9, 0.61), 0.25111645730392024);
        assert_eq!(
            n.noise3_xy_before_z(-103.37, 55.9, 0.61),
            -0.04132224024135547
        );
        assert_eq!(
            n.noise3_xz_before_y(-103.37, 55.9, 0.61),
            0.24088103608805228
        );
    }

    #[test]
    fn reference_values_4d() {
        let n = OpenSimplex2S::new(DEFAULT_SEED);
        let p = (0.3, -1.7, 2.2, 0.9);
        assert_eq!(n.noise4_classic(p.0, p.1, p.2, p.3), 0.3045865512731904);
        assert_eq!(
            n.noise4_xy_before_zw(p.0, p.1, p.2, p.3),
            0.46835912389380924
        );
        assert_eq!(
            n.noise4_xz_before_yw(p.0, p.1, p.2, p.3),
            -0.28651641067271494
        );
        assert_eq!(
            n.noise4_xyz_before_w(p.0, p.1, p.2, p.3),
            -0.43507867080478213
        );

        let p = (12.5, 7.25, -3.1, 4.4);
        assert_eq!(n.noise4_classic(p.0, p.1, p.2, p.3), -0.7930836671576568);
        assert_eq!(
            n.noise4_xy_before_zw(p.0, p.1, p.2, p.3),
            -0.1823445728190812
        );
        assert_eq!(
            n.noise4_xz_before_yw(p.0, p.1, p.2, p.3),
            -0.23913390561839018
        );
        assert_eq!(
            n.noise4_xyz_before_w(p.0, p.1, p.2, p.3),
            0.1447299440710995
        );

        let p = (-103.37, 55.9, 0.61, -8.8);
        assert_eq!(n.noise4_classic(p.0, p.1, p.2, p.3), -0.15775680144709595);
        assert_eq!(
            n.noise4_xy_before_zw(p.0, p.1, p.2, p.3),
            -0.10592601085600317
        );
        assert_eq!(
            n.noise4_xz_before_yw(p.0, p.1, p.2, p.3),
            0.09476004288428619
        );
        assert_eq!(
            n.noise4_xyz_before_w(p.0, p.1, p.2, p.3),
            -0.09866856487487743
        );
    }

    #[test]
    fn other_seed() {
        let n = OpenSimplex2S::new(7);
        assert_eq!(n.noise2(0.3, -1.7), 0.477805282146743);
        assert_eq!(n.noise3_classic(0.3, -1.7, 2.2), 0.03083990997225126);
        assert_eq!(n.noise4_classic(0.3, -1.7, 2.2, 0.9), -0.10607109878803112);
    }

    #[test]
    fn seed_offsets() {
        let n = OpenSimplex2S::new(DEFAULT_SEED);
        assert_eq!(
            n.noise4_with_seed(0.3, -1.7, 2.2, 0.9, 123456789),
            0.009525893202485642
        );
        assert_eq!(
            n.noise3_with_seed(0.3, -1.7, 2.2, 0),
            n.noise3_classic(0.3, -1.7, 2.2)
        );
    }

    #[test]
    fn oriented_entry_points_match_the_named_ones() {
        let n = OpenSimplex2S::new(3);
        let (x, y, z, w) = (1.25, -0.5, 3.75, 0.125);
        assert_eq!(
            n.noise2_oriented(Orientation2::Standard, x, y),
            n.noise2(x, y)
        );
        assert_eq!(
            n.noise3_oriented(Orientation3::XYBeforeZ, x, y, z),
            n.noise3_xy_before_z(x, y, z)
        );
        assert_eq!(
            n.noise4_oriented(Orientation4::XZBeforeYW, x, y, z, w),
            n.noise4_xz_before_yw(x, y, z, w)
        );
    }

    #[test]
    fn neighbouring_samples_stay_close() {
        let n = OpenSimplex2S::new(DEFAULT_SEED);
        let step = 1e-4;
        for i in 0..2000 {
            let x = i as f64 * 0.173;
            let y = i as f64 * -0.031;
            assert!((n.noise2(x + step, y) - n.noise2(x, y)).abs() < 0.01);
            assert!(
                (n.noise3_classic(x, y + step, 0.5) - n.noise3_classic(x, y, 0.5)).abs() < 0.01
            );
            assert!(
                (n.noise4_classic(x, y, 0.5, step) - n.noise4_classic(x, y, 0.5, 0.0)).abs() < 0.01
            );
        }
    }

    #[test]
    fn non_finite_inputs_do_not_panic() {
        let n = OpenSimplex2S::default();
        for v in [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MAX,
            f64::MIN,
            -0.0,
        ] {
            let _ = n.noise2(v, 0.5);
            let _ = n.noise2_x_before_y(v, v);
            let _ = n.noise3_xz_before_y(v, 0.5, v);
            let _ = n.noise4_classic(v, v, 0.5, 0.5);
            let _ = n.noise4_xy_before_zw(0.5, v, v, 0.5);
        }
    }
}
