//! Property-based tests for scalar multiplication, encodings and the pairing

use milagro::algorithms::curves::Bn254Fp;
use milagro::algorithms::pairing::{glv, gs};
use milagro::prelude::*;
use milagro_tests::scalar_from_bytes;
use proptest::prelude::*;

/// Scalar multiplication is slow enough that a few dozen cases suffice
fn config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn sum(a: &Big, b: &Big, m: &Big) -> Big {
    let mut s = a.plus(b);
    s.norm();
    s.rmod(m);
    s
}

proptest! {
    #![proptest_config(config(24))]

    #[test]
    fn weierstrass_mul_distributes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (scalar_from_bytes::<Nist256>(&a), scalar_from_bytes::<Nist256>(&b));
        let g = Nist256Point::generator();
        let lhs = g.mul(&sum(&a, &b, &Nist256::ORDER));
        prop_assert_eq!(lhs, g.mul(&a).add(&g.mul(&b)));
        prop_assert_eq!(Nist256Point::mul2(&g, &a, &g, &b), lhs);
    }

    #[test]
    fn montgomery_friendly_curve_mul_distributes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (scalar_from_bytes::<Mf254>(&a), scalar_from_bytes::<Mf254>(&b));
        let g = Mf254Point::generator();
        prop_assert_eq!(g.mul(&sum(&a, &b, &Mf254::ORDER)), g.mul(&a).add(&g.mul(&b)));
    }

    #[test]
    fn edwards_mul_distributes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (scalar_from_bytes::<Ed25519>(&a), scalar_from_bytes::<Ed25519>(&b));
        let g = Ed25519Point::generator();
        prop_assert_eq!(g.mul(&sum(&a, &b, &Ed25519::ORDER)), g.mul(&a).add(&g.mul(&b)));
    }

    #[test]
    fn montgomery_ladder_commutes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (scalar_from_bytes::<Curve25519>(&a), scalar_from_bytes::<Curve25519>(&b));
        let g = Curve25519Point::generator();
        prop_assert_eq!(g.mul(&a).mul(&b), g.mul(&b).mul(&a));
    }

    #[test]
    fn weierstrass_encoding_round_trip(k in any::<[u8; 32]>(), compress in any::<bool>()) {
        let p = Nist256Point::generator().mul(&scalar_from_bytes::<Nist256>(&k));
        let bytes = p.to_bytes(compress);
        prop_assert_eq!(Nist256Point::from_bytes(bytes.as_ref()).unwrap(), p);
    }

    #[test]
    fn uncompressed_bit_flip_rejected(k in any::<[u8; 32]>(), bit in 0usize..512) {
        let p = Bn254G1::generator().mul(&scalar_from_bytes::<Bn254>(&k));
        prop_assume!(!bool::from(p.is_infinity()));
        let mut bytes = [0u8; 65];
        bytes.copy_from_slice(p.to_bytes(false).as_ref());
        bytes[1 + bit / 8] ^= 1 << (bit % 8);
        prop_assert!(Bn254G1::from_bytes(&bytes).is_err());
    }

    #[test]
    fn edwards_encoding_round_trip(k in any::<[u8; 32]>(), compress in any::<bool>()) {
        let p = Ed25519Point::generator().mul(&scalar_from_bytes::<Ed25519>(&k));
        let bytes = p.to_bytes(compress);
        prop_assert_eq!(Ed25519Point::from_bytes(bytes.as_ref()).unwrap(), p);
    }

    #[test]
    fn decoding_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..80)) {
        let _ = Nist256Point::from_bytes(&bytes);
        let _ = Ed25519Point::from_bytes(&bytes);
        let _ = Curve25519Point::from_bytes(&bytes);
        let _ = Bn254G2::from_slice(&bytes);
    }
}

proptest! {
    #![proptest_config(config(8))]

    #[test]
    fn glv_reconstructs_scalar(k in any::<[u8; 32]>()) {
        let r = Bn254::ORDER;
        let e = scalar_from_bytes::<Bn254>(&k);
        let [u0, u1] = glv::<Bn254>(&e);
        for u in [u0, u1] {
            prop_assert!(u.nbits().min(Big::modneg(&u, &r).nbits()) <= 128);
        }

        // (cru*x, y) is the endomorphism image of G
        let g = Bn254G1::generator();
        let x = Big::modmul(&g.get_x(), &Bn254::CRU, &Bn254Fp::MODULUS);
        let endo = Option::<Bn254G1>::from(Bn254G1::from_coordinates(&x, &g.get_y()));
        prop_assert!(endo.is_some());
        let endo = endo.unwrap();
        prop_assert_eq!(Bn254G1::mul2(&g, &u0, &endo, &u1), g.mul(&e));
    }

    #[test]
    fn gs_parts_are_short(k in any::<[u8; 32]>()) {
        let r = Bn254::ORDER;
        let e = scalar_from_bytes::<Bn254>(&k);
        for u in gs::<Bn254>(&e) {
            prop_assert!(u.nbits().min(Big::modneg(&u, &r).nbits()) <= 66);
        }
    }

    #[test]
    fn endomorphism_paths_match_plain(k in any::<[u8; 32]>()) {
        let e = scalar_from_bytes::<Bn254>(&k);
        let g1 = Bn254G1::generator();
        let g2 = Bn254G2::generator();
        prop_assert_eq!(Bn254Pairing::g1_mul(&g1, &e), g1.mul(&e));
        prop_assert_eq!(Bn254Pairing::g2_mul(&g2, &e), g2.mul(&e));
    }
}

proptest! {
    #![proptest_config(config(4))]

    #[test]
    fn pairing_is_bilinear(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (scalar_from_bytes::<Bn254>(&a), scalar_from_bytes::<Bn254>(&b));
        prop_assume!(!a.is_zero() && !b.is_zero());
        let g1 = Bn254G1::generator();
        let g2 = Bn254G2::generator();

        let lhs = Bn254Pairing::pairing(&g2.mul(&a), &g1.mul(&b)).unwrap();
        let ab = Big::modmul(&a, &b, &Bn254::ORDER);
        let base = Bn254Pairing::pairing(&g2, &g1).unwrap();
        prop_assert_eq!(lhs, Bn254Pairing::gt_pow(&base, &ab));
        prop_assert!(Bn254Pairing::gt_member(&lhs));
    }
}
