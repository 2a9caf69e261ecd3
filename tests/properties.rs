use noisekit::noise::lattice::{lookup_4d, Lattice3D};
use noisekit::noise::orientation;
use noisekit::{
    DefaultRng, Noise, OpenSimplex2F, OpenSimplex2S, PermutationTable, Rng, SeededNoise,
    DEFAULT_SEED,
};

const SAMPLES: usize = 100_000;

fn random_coord(rng: &mut DefaultRng) -> f64 {
    rng.next_f64() * 2000.0 - 1000.0
}

fn random_points<const N: usize>(seed: u64, count: usize) -> Vec<[f64; N]> {
    let mut rng = DefaultRng::from_seed(seed);
    (0..count)
        .map(|_| std::array::from_fn(|_| random_coord(&mut rng)))
        .collect()
}

#[test]
fn construction_and_evaluation_are_deterministic() {
    for seed in [0, 1, DEFAULT_SEED, u64::MAX] {
        let (f1, f2) = (OpenSimplex2F::new(seed), OpenSimplex2F::new(seed));
        let (s1, s2) = (OpenSimplex2S::new(seed), OpenSimplex2S::new(seed));

        for [x, y, z, w] in random_points::<4>(seed, 200) {
            assert_eq!(f1.noise2(x, y).to_bits(), f2.noise2(x, y).to_bits());
            assert_eq!(
                f1.noise3_xz_before_y(x, y, z).to_bits(),
                f2.noise3_xz_before_y(x, y, z).to_bits()
            );
            assert_eq!(
                f1.noise4_xy_before_zw(x, y, z, w).to_bits(),
                f2.noise4_xy_before_zw(x, y, z, w).to_bits()
            );
            assert_eq!(
                s1.noise2_x_before_y(x, y).to_bits(),
                s2.noise2_x_before_y(x, y).to_bits()
            );
            assert_eq!(
                s1.noise3_classic(x, y, z).to_bits(),
                s2.noise3_classic(x, y, z).to_bits()
            );
            assert_eq!(
                s1.noise4_xyz_before_w(x, y, z, w).to_bits(),
                s2.noise4_xyz_before_w(x, y, z, w).to_bits()
            );
        }
    }
}

#[test]
fn permutations_are_bijections() {
    let mut rng = DefaultRng::from_seed(2024);
    let seeds = [0, 1, 2, DEFAULT_SEED, u64::MAX, i64::MIN as u64]
        .into_iter()
        .chain((0..32).map(|_| rng.next_u64()));

    for seed in seeds {
        let table = PermutationTable::new(seed);
        let mut sorted = table.as_slice().to_vec();
        sorted.sort_unstable();
        assert!(
            sorted.iter().enumerate().all(|(i, &p)| p as usize == i),
            "seed {seed}"
        );
    }
}

fn assert_bounded<const N: usize>(
    name: &str,
    noise: &impl Noise<[f64; N], Output = f64>,
    bound: f64,
) {
    let mut max = 0.0f64;
    for p in random_points::<N>(N as u64, SAMPLES) {
        let v = noise.sample(p);
        assert!(v.is_finite(), "{name} at {p:?}");
        max = max.max(v.abs());
    }
    assert!(max <= bound, "{name}: max |value| = {max}");
    assert!(max > 0.5, "{name}: suspiciously flat (max |value| = {max})");
}

#[test]
fn values_stay_within_unit_range() {
    let fast = OpenSimplex2F::default();
    let smooth = OpenSimplex2S::default();

    assert_bounded::<2>("fast 2D", &fast, 1.0 + 1e-9);
    assert_bounded::<3>("fast 3D", &fast, 1.0 + 1e-9);
    assert_bounded::<4>("fast 4D", &fast, 1.0 + 1e-9);
    // The dense 2D gradient set overshoots the unit range by a few thousandths.
    assert_bounded::<2>("smooth 2D", &smooth, 1.005);
    assert_bounded::<3>("smooth 3D", &smooth, 1.0 + 1e-9);
    assert_bounded::<4>("smooth 4D", &smooth, 1.0 + 1e-9);
}

fn assert_close(a: f64, b: f64, tolerance: f64) {
    assert!((a - b).abs() < tolerance, "{a} vs {b}");
}

#[test]
fn small_steps_make_small_changes() {
    let fast = OpenSimplex2F::default();
    let smooth = OpenSimplex2S::default();
    let d = 1e-6;

    for [x, y, z, w] in random_points::<4>(77, 5000) {
        assert_close(fast.noise2(x + d, y), fast.noise2(x, y), 1e-3);
        assert_close(smooth.noise2(x, y + d), smooth.noise2(x, y), 1e-3);
        assert_close(
            fast.noise3_classic(x, y, z + d),
            fast.noise3_classic(x, y, z),
            1e-3,
        );
        assert_close(
            smooth.noise3_xy_before_z(x + d, y, z),
            smooth.noise3_xy_before_z(x, y, z),
            1e-3,
        );
        assert_close(
            fast.noise4_classic(x, y, z, w + d),
            fast.noise4_classic(x, y, z, w),
            1e-3,
        );
        assert_close(
            smooth.noise4_xz_before_yw(x, y + d, z, w),
            smooth.noise4_xz_before_yw(x, y, z, w),
            1e-3,
        );
    }
}

#[test]
fn cell_boundaries_are_continuous() {
    // Integer skewed coordinates sit exactly on cell boundaries.
    let fast = OpenSimplex2F::default();
    let smooth = OpenSimplex2S::default();
    let d = 1e-9;

    for i in -20..20 {
        let x = i as f64;
        assert_close(fast.noise2(x - d, 0.25), fast.noise2(x + d, 0.25), 1e-6);
        assert_close(smooth.noise2(0.25, x - d), smooth.noise2(0.25, x + d), 1e-6);
        assert_close(
            fast.noise3_classic(x - d, x, 0.5),
            fast.noise3_classic(x + d, x, 0.5),
            1e-6,
        );
        assert_close(
            smooth.noise4_classic(x, 0.5, x - d, 0.5),
            smooth.noise4_classic(x, 0.5, x + d, 0.5),
            1e-6,
        );
    }
}

#[test]
fn golden_values_of_the_default_seed() {
    let fast = OpenSimplex2F::new(DEFAULT_SEED);
    let smooth = OpenSimplex2S::new(DEFAULT_SEED);

    assert_eq!(fast.noise2(0.0, 0.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(smooth.noise2(0.0, 0.0).to_bits(), 0.0f64.to_bits());
    assert_eq!(fast.noise2(12.5, 7.25), 0.2606706741816268);
    assert_eq!(
        smooth.noise3_xz_before_y(12.5, 7.25, -3.1),
        0.5319786615641959
    );
    assert_eq!(
        fast.noise4_xyz_before_w(-103.37, 55.9, 0.61, -8.8),
        0.05333502225198705
    );
    assert_eq!(
        smooth.noise4_xy_before_zw(0.3, -1.7, 2.2, 0.9),
        0.46835912389380924
    );
}

#[test]
fn seed_offsets_select_other_regions() {
    let fast = OpenSimplex2F::default();
    let smooth = OpenSimplex2S::default();

    let mut differing = 0;
    for [x, y, z, w] in random_points::<4>(5, 100) {
        let a = fast.sample_with_seed([x, y], 0);
        let b = fast.sample_with_seed([x, y], 1);
        assert_eq!(a, fast.noise2_with_seed(x, y, 0));
        assert_eq!(b, fast.noise2_with_seed(x, y, 1));
        differing += (a != b) as usize;

        assert_ne!(
            smooth.sample_with_seed([x, y, z], 0),
            smooth.sample_with_seed([x, y, z], 1)
        );
        assert_ne!(
            fast.noise4_with_seed(x, y, z, w, 0),
            fast.noise4_with_seed(x, y, z, w, 1)
        );
    }
    assert!(differing > 90);

    assert_eq!(fast.noise2_with_seed(0.3, -1.7, 1), 0.08989479000290672);
    assert_eq!(
        smooth.noise4_with_seed(0.3, -1.7, 2.2, 0.9, 123456789),
        0.009525893202485642
    );
}

/// Finds a point whose rotated coordinates fall in the requested octant of the BCC cell.
fn point_in_octant(octant: usize) -> [f64; 3] {
    let half = |bit: usize| if octant & bit != 0 { 0.75 } else { 0.25 };
    // `classic3` is its own inverse.
    orientation::classic3([half(1), half(2), half(4)])
}

#[test]
fn every_octant_terminates() {
    let fast = OpenSimplex2F::default();
    let smooth = OpenSimplex2S::default();

    for octant in 0..8 {
        let [x, y, z] = point_in_octant(octant);
        let [xr, yr, zr] = orientation::classic3([x, y, z]);
        let ht = |v: f64| (v - v.floor() + 0.5) as usize & 1;
        assert_eq!(ht(xr) | (ht(yr) << 1) | (ht(zr) << 2), octant);

        assert!(fast.noise3_classic(x, y, z).is_finite());
        assert!(smooth.noise3_classic(x, y, z).is_finite());

        // Replay the radius test of each variant along the graph.
        let (xri, yri, zri) = (xr - xr.floor(), yr - yr.floor(), zr - zr.floor());
        for (lattice, r2) in [(Lattice3D::fast(), 0.5), (Lattice3D::smooth(), 0.75)] {
            let steps = lattice.walk_len(octant, |c| {
                let (dx, dy, dz) = (xri + c.dxr, yri + c.dyr, zri + c.dzr);
                r2 - dx * dx - dy * dy - dz * dz >= 0.0
            });
            assert!((1..=14).contains(&steps), "octant {octant}: {steps} steps");
        }
    }
}

#[test]
fn every_4d_lookup_entry_has_candidates() {
    for index in 0..256 {
        assert!(!lookup_4d(index).is_empty(), "entry {index}");
    }
}
