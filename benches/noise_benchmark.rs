use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noisekit::{NoiseConfig, OpenSimplex2F, OpenSimplex2S, PermutationTable, Variant};

const POINT_4D: [f64; 4] = [12.3, -4.5, 0.7, 9.1];

fn bench_construction(c: &mut Criterion) {
    c.bench_function("permutation table", |b| {
        b.iter(|| PermutationTable::new(black_box(42)))
    });
    c.bench_function("OpenSimplex2F::new", |b| {
        b.iter(|| OpenSimplex2F::new(black_box(42)))
    });
    c.bench_function("OpenSimplex2S::new", |b| {
        b.iter(|| OpenSimplex2S::new(black_box(42)))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let fast = OpenSimplex2F::new(42);
    let smooth = OpenSimplex2S::new(42);

    let mut group = c.benchmark_group("sample");
    group.bench_function("fast 2D", |b| {
        b.iter(|| fast.noise2(black_box(12.3), black_box(-4.5)))
    });
    group.bench_function("smooth 2D", |b| {
        b.iter(|| smooth.noise2(black_box(12.3), black_box(-4.5)))
    });
    group.bench_function("fast 3D", |b| {
        b.iter(|| fast.noise3_xy_before_z(black_box(12.3), black_box(-4.5), black_box(0.7)))
    });
    group.bench_function("smooth 3D", |b| {
        b.iter(|| smooth.noise3_xy_before_z(black_box(12.3), black_box(-4.5), black_box(0.7)))
    });
    group.bench_function("fast 4D", |b| {
        b.iter(|| {
            let [x, y, z, w] = black_box(POINT_4D);
            fast.noise4_classic(x, y, z, w)
        })
    });
    group.bench_function("smooth 4D", |b| {
        b.iter(|| {
            let [x, y, z, w] = black_box(POINT_4D);
            smooth.noise4_classic(x, y, z, w)
        })
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    for variant in [Variant::Fast, Variant::Smooth] {
        let noise = NoiseConfig {
            variant,
            frequency: 0.05,
            ..Default::default()
        }
        .build();

        c.bench_function(&format!("{variant:?} 64x64 grid"), |b| {
            b.iter(|| noise.sample_grid2(black_box([0.0, 0.0]), 64, 64, 1.0))
        });
    }
}

criterion_group!(benches, bench_construction, bench_sampling, bench_grid);
criterion_main!(benches);
