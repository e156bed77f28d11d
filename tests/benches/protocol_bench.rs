// End-to-end protocol shapes built on the facade: BLS-style verification
// with a shared Miller loop and three-party key agreement

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use milagro::prelude::*;
use milagro_tests::{random_scalar, seeded_rng};

/// Check `e(sig, G1) == e(H, pk)` as `e(sig, G1) * e(H, -pk) == 1`
fn bench_signature_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("protocol");
    let mut rng = seeded_rng(1);

    let sk = random_scalar::<Bn254>(&mut rng);
    let g1 = Bn254G1::generator();
    let pk = Bn254Pairing::g1_mul(&g1, &sk);
    let h = Bn254Pairing::g2_mul(&Bn254G2::generator(), &random_scalar::<Bn254>(&mut rng));
    let sig = Bn254Pairing::g2_mul(&h, &sk);

    group.bench_function("verify_two_pairings", |b| {
        b.iter(|| {
            let lhs = Bn254Pairing::pairing(&sig, &g1).unwrap();
            let rhs = Bn254Pairing::pairing(&h, &pk).unwrap();
            black_box(lhs == rhs)
        })
    });

    let npk = pk.neg();
    group.bench_function("verify_double_pairing", |b| {
        b.iter(|| {
            let v = Bn254Pairing::double_pairing(&sig, &g1, &h, &npk).unwrap();
            black_box(bool::from(v.is_one()))
        })
    });

    group.bench_function("tripartite_share", |b| {
        let a = random_scalar::<Bn254>(&mut rng);
        let b2 = Bn254Pairing::g2_mul(&Bn254G2::generator(), &random_scalar::<Bn254>(&mut rng));
        let c1 = Bn254Pairing::g1_mul(&g1, &random_scalar::<Bn254>(&mut rng));
        b.iter(|| {
            let e = Bn254Pairing::pairing(&b2, &c1).unwrap();
            black_box(Bn254Pairing::gt_pow(&e, &a))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_signature_check);
criterion_main!(benches);
