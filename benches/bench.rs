use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use shamir_rec::{
    _test_util::{
        corrupt, rand_poly, shares, LARGE_SHARES_JSON, SAMPLE_SHARES_JSON,
    },
    rec::lagrange::interpolate_at_zero,
    reconstruct,
    share::ShareSet,
    Point,
};

const NPOLYS: usize = 20;

fn gen_shares(
    k: usize,
    n: usize,
    ncorrupt: usize,
    mut rng: impl Rng,
) -> Vec<Vec<Point>> {
    Vec::from_iter((0..NPOLYS).map(|_| {
        let poly = rand_poly(k - 1, &mut rng);
        let mut pts = shares(&poly, n);
        let bad = Vec::from_iter(0..ncorrupt);
        corrupt(&mut pts, &bad, &mut rng);
        pts
    }))
}

fn interpolate(pts: &[Vec<Point>]) -> usize {
    pts.iter()
        .filter(|pts| interpolate_at_zero(pts.as_slice()).is_ok())
        .count()
}

fn rec_all(pts: &[Vec<Point>], k: usize) -> usize {
    pts.iter().filter(|pts| reconstruct(pts, k).is_ok()).count()
}

fn criterion_benchmark(c: &mut Criterion) {
    let sample = ShareSet::from_json(SAMPLE_SHARES_JSON).unwrap();
    c.bench_function("sample share set", |b| {
        b.iter(|| sample.reconstruct())
    });

    let large = ShareSet::from_json(LARGE_SHARES_JSON).unwrap();
    c.bench_function("large share set", |b| b.iter(|| large.reconstruct()));

    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
    for k in [3, 7, 12] {
        let pts = gen_shares(k, k, 0, &mut rng);
        c.bench_function(&format!("interpolate {k} points"), |b| {
            b.iter(|| interpolate(&pts))
        });
    }

    for (k, n, ncorrupt) in [(3, 6, 2), (5, 10, 3), (7, 12, 2)] {
        let pts = gen_shares(k, n, ncorrupt, &mut rng);
        c.bench_function(
            &format!("majority {k} of {n}, {ncorrupt} corrupted"),
            |b| b.iter(|| rec_all(&pts, k)),
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
