// Benchmarks for the BN254 pairing and endomorphism-accelerated
// multiplication

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use milagro_algorithms::pairing::{ate, double_pairing, final_exp, pairing};
use milagro_algorithms::{g1_mul, g2_mul, gt_member, gt_pow, Big, Bn254, Bn254G1, Bn254G2, CurveConfig};
use rand::rngs::OsRng;

fn scalar() -> Big {
    Big::randomnum(&Bn254::ORDER, &mut OsRng)
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn254-pairing");
    let p = Bn254G2::generator();
    let q = Bn254G1::generator();
    let m = ate(&p, &q);

    group.bench_function("miller_loop", |b| b.iter(|| black_box(ate(&p, &q))));
    group.bench_function("final_exp", |b| b.iter(|| black_box(final_exp::<Bn254>(&m))));
    group.bench_function("pairing", |b| b.iter(|| black_box(pairing(&p, &q))));
    group.bench_function("double_pairing", |b| {
        b.iter(|| black_box(double_pairing(&p, &q, &p, &q)))
    });

    group.finish();
}

fn bench_endomorphisms(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn254-glv");
    let p = Bn254G2::generator();
    let q = Bn254G1::generator();
    let g = pairing(&p, &q).unwrap();

    group.bench_function("g1_mul", |b| {
        b.iter_batched(scalar, |e| black_box(g1_mul(&q, &e)), BatchSize::SmallInput)
    });
    group.bench_function("g1_mul_plain", |b| {
        b.iter_batched(scalar, |e| black_box(q.mul(&e)), BatchSize::SmallInput)
    });
    group.bench_function("g2_mul", |b| {
        b.iter_batched(scalar, |e| black_box(g2_mul(&p, &e)), BatchSize::SmallInput)
    });
    group.bench_function("g2_mul_plain", |b| {
        b.iter_batched(scalar, |e| black_box(p.mul(&e)), BatchSize::SmallInput)
    });
    group.bench_function("gt_pow", |b| {
        b.iter_batched(scalar, |e| black_box(gt_pow::<Bn254>(&g, &e)), BatchSize::SmallInput)
    });
    group.bench_function("gt_member", |b| b.iter(|| black_box(gt_member::<Bn254>(&g))));

    group.finish();
}

criterion_group!(benches, bench_pairing, bench_endomorphisms);
criterion_main!(benches);
