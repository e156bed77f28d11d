//! End-to-end use of the facade: known answers, byte formats through the
//! `Serialize` trait and the `PairingEngine` interface

use milagro::prelude::*;
use milagro_internal::{ct_eq, ct_lookup};
use milagro_params::sizes::{COMPRESSED_POINT_SIZE, FP12_SIZE, TWIST_POINT_SIZE, UNCOMPRESSED_POINT_SIZE};
use milagro_tests::vectors::{self, MulVector};
use milagro_tests::{big, random_scalar, seeded_rng};

fn check_weierstrass<C: WeierstrassCurve>(v: &MulVector) {
    let g = WeierstrassPoint::<C>::generator();
    assert_eq!(g.double().get_x(), big(v.double_x), "{}", v.curve);
    let p = g.mul(&big(vectors::SCALAR));
    assert_eq!(p.get_x(), big(v.x), "{}", v.curve);
    assert_eq!(p.get_y(), big(v.y), "{}", v.curve);
}

#[test]
fn test_known_answers_every_shape() {
    check_weierstrass::<Nist256>(&vectors::NIST256);
    check_weierstrass::<Bn254>(&vectors::BN254);

    let g = Ed25519Point::generator();
    assert_eq!(g.double().get_x(), big(vectors::ED25519.double_x));
    let p = g.mul(&big(vectors::SCALAR));
    assert_eq!(p.get_x(), big(vectors::ED25519.x));
    assert_eq!(p.get_y(), big(vectors::ED25519.y));

    let g = Curve25519Point::generator();
    assert_eq!(g.double().get_x(), Some(big(vectors::CURVE25519_DOUBLE_X)));
    assert_eq!(
        g.mul(&big(vectors::SCALAR)).get_x(),
        Some(big(vectors::CURVE25519_X))
    );
}

#[test]
fn test_joint_multiplication_known_answer() {
    let g = Nist256Point::generator();
    let r = Nist256Point::mul2(&g, &big(vectors::SCALAR), &g.double(), &big(vectors::SCALAR2));
    assert_eq!(r.get_x(), big(vectors::NIST256_MUL2.0));
    assert_eq!(r.get_y(), big(vectors::NIST256_MUL2.1));
}

#[test]
fn test_compressed_generator_encoding() {
    let g = Nist256Point::generator();
    assert_eq!(hex::encode(g.to_bytes(true)), vectors::NIST256_G_COMPRESSED);

    let bytes = hex::decode(vectors::NIST256_G_COMPRESSED).unwrap();
    assert_eq!(Nist256Point::from_bytes(&bytes).unwrap(), g);
}

#[test]
fn test_serialize_trait_round_trips() {
    let mut rng = seeded_rng(7);

    let p = Nist256Point::generator().mul(&random_scalar::<Nist256>(&mut rng));
    let bytes = Serialize::to_bytes(&p);
    assert_eq!(bytes.len(), UNCOMPRESSED_POINT_SIZE);
    assert_eq!(<Nist256Point as Serialize>::from_bytes(&bytes).unwrap(), p);

    let p = Ed25519Point::generator().mul(&random_scalar::<Ed25519>(&mut rng));
    let bytes = Serialize::to_bytes(&p);
    assert_eq!(<Ed25519Point as Serialize>::from_bytes(&bytes).unwrap(), p);

    let p = Curve25519Point::generator().mul(&random_scalar::<Curve25519>(&mut rng));
    let bytes = Serialize::to_bytes(&p);
    assert_eq!(bytes.len(), COMPRESSED_POINT_SIZE);
    assert_eq!(<Curve25519Point as Serialize>::from_bytes(&bytes).unwrap(), p);

    let q = Bn254G2::generator().mul(&random_scalar::<Bn254>(&mut rng));
    let bytes = Serialize::to_bytes(&q);
    assert_eq!(bytes.len(), TWIST_POINT_SIZE);
    assert_eq!(<Bn254G2 as Serialize>::from_bytes(&bytes).unwrap(), q);

    let e = Bn254Pairing::pairing(&q, &Bn254G1::generator()).unwrap();
    let bytes = Serialize::to_bytes(&e);
    assert_eq!(bytes.len(), FP12_SIZE);
    assert_eq!(<Bn254Gt as Serialize>::from_bytes(&bytes).unwrap(), e);
}

#[test]
fn test_serialize_trait_reports_api_errors() {
    let g = Nist256Point::generator();
    let mut bytes = Serialize::to_bytes(&g);

    assert!(matches!(
        <Nist256Point as Serialize>::from_bytes(&bytes[..40]),
        Err(Error::InvalidLength { .. })
    ));

    bytes[64] ^= 1;
    assert!(matches!(
        <Nist256Point as Serialize>::from_bytes(&bytes),
        Err(Error::InvalidPoint { .. })
    ));

    bytes[0] = 0x07;
    assert!(matches!(
        <Nist256Point as Serialize>::from_bytes(&bytes),
        Err(Error::InvalidEncoding { .. })
    ));

    assert!(matches!(
        <Bn254Gt as Serialize>::from_bytes(&[0xff; FP12_SIZE]),
        Err(Error::InvalidEncoding { .. })
    ));
}

#[test]
fn test_pairing_engine_known_answer() {
    let e = Bn254Pairing::pairing(&Bn254G2::generator(), &Bn254G1::generator()).unwrap();
    assert_eq!(hex::encode(e.to_bytes()), vectors::BN254_E_G2_G1.concat());
    assert!(Bn254Pairing::gt_member(&e));
}

#[test]
fn test_pairing_engine_rejects_infinity() {
    let r = Bn254Pairing::pairing(&Bn254G2::infinity(), &Bn254G1::generator());
    assert!(matches!(r, Err(Error::DegeneratePairing { .. })));
    let r = Bn254Pairing::double_pairing(
        &Bn254G2::generator(),
        &Bn254G1::generator(),
        &Bn254G2::generator(),
        &Bn254G1::infinity(),
    );
    assert!(matches!(r, Err(Error::DegeneratePairing { .. })));
}

/// Three-party one-round key agreement: every party derives
/// `e(G2, G1)^(abc)` from the other two parties' public values
#[test]
fn test_tripartite_agreement() {
    let mut rng = seeded_rng(3);
    let (a, b, c) = (
        random_scalar::<Bn254>(&mut rng),
        random_scalar::<Bn254>(&mut rng),
        random_scalar::<Bn254>(&mut rng),
    );
    let g1 = Bn254G1::generator();
    let g2 = Bn254G2::generator();

    let (a1, a2) = (Bn254Pairing::g1_mul(&g1, &a), Bn254Pairing::g2_mul(&g2, &a));
    let (b1, b2) = (Bn254Pairing::g1_mul(&g1, &b), Bn254Pairing::g2_mul(&g2, &b));
    let (c1, c2) = (Bn254Pairing::g1_mul(&g1, &c), Bn254Pairing::g2_mul(&g2, &c));

    let ka = Bn254Pairing::gt_pow(&Bn254Pairing::pairing(&b2, &c1).unwrap(), &a);
    let kb = Bn254Pairing::gt_pow(&Bn254Pairing::pairing(&c2, &a1).unwrap(), &b);
    let kc = Bn254Pairing::gt_pow(&Bn254Pairing::pairing(&a2, &b1).unwrap(), &c);
    assert_eq!(ka, kb);
    assert_eq!(kb, kc);
}

#[test]
fn test_constant_time_helpers() {
    let a = Nist256Point::generator().to_bytes(true);
    let b = Nist256Point::generator().double().to_bytes(true);
    assert!(ct_eq(a.as_ref(), a.as_ref()));
    assert!(!ct_eq(a.as_ref(), b.as_ref()));

    let table = [Bn254G1::infinity(), Bn254G1::generator(), Bn254G1::generator().double()];
    assert_eq!(ct_lookup(&table, 2), table[2]);
    assert!(bool::from(ct_lookup(&table, 0).is_infinity()));
}
