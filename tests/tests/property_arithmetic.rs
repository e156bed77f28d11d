//! Property-based tests for limb and field arithmetic against num-bigint

use milagro::algorithms::curves::{Bn254Fp, Fp25519, Mf254Fp, Nist256Fp};
use milagro::prelude::*;
use num_bigint::{BigInt, Sign};
use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

fn int(x: &Big) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &x.to_bytes())
}

fn modulus<F: FieldConfig>() -> BigInt {
    int(&F::MODULUS)
}

/// Field element from arbitrary bytes, reduced modulo `p`
fn element<F: FieldConfig>(bytes: &[u8; 32]) -> Fp<F> {
    Fp::new(&Big::from_bytes(bytes))
}

fn value<F: FieldConfig>(a: &Fp<F>) -> BigInt {
    int(&a.redc())
}

fn check_ring<F: FieldConfig>(a: &[u8; 32], b: &[u8; 32]) -> TestCaseResult {
    let p = modulus::<F>();
    let (x, y) = (element::<F>(a), element::<F>(b));
    let (xi, yi) = (value(&x), value(&y));

    prop_assert_eq!(value(&x.mul(&y)), (&xi * &yi) % &p);
    prop_assert_eq!(value(&x.add(&y)), (&xi + &yi) % &p);
    prop_assert_eq!(value(&x.sub(&y)), ((&xi - &yi) % &p + &p) % &p);
    prop_assert_eq!(x.mul(&y.add(&x)), x.mul(&y).add(&x.square()));
    if !bool::from(y.is_zero()) {
        prop_assert!(bool::from(x.mul(&y).mul(&y.inv()).ct_eq(&x)));
    }
    Ok(())
}

proptest! {
    #[test]
    fn big_bytes_round_trip(bytes in any::<[u8; 32]>()) {
        let b = Big::from_bytes(&bytes);
        prop_assert_eq!(b.to_bytes(), bytes);
        prop_assert_eq!(Big::from_hex(&format!("{:x}", b)).unwrap(), b);
    }

    #[test]
    fn big_modmul_matches_reference(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let m = Bn254::ORDER;
        let (x, y) = (Big::from_bytes(&a), Big::from_bytes(&b));
        let mut xr = x;
        xr.rmod(&m);
        let mut yr = y;
        yr.rmod(&m);
        let r = Big::modmul(&xr, &yr, &m);
        prop_assert_eq!(int(&r), (int(&x) * int(&y)) % int(&m));
    }

    #[test]
    fn bn254_field_ring(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        check_ring::<Bn254Fp>(&a, &b)?;
    }

    #[test]
    fn nist256_field_ring(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        check_ring::<Nist256Fp>(&a, &b)?;
    }

    #[test]
    fn pseudo_mersenne_field_ring(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        check_ring::<Fp25519>(&a, &b)?;
    }

    #[test]
    fn montgomery_friendly_field_ring(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        check_ring::<Mf254Fp>(&a, &b)?;
    }

    #[test]
    fn nres_redc_round_trip(bytes in any::<[u8; 32]>()) {
        let mut b = Big::from_bytes(&bytes);
        b.rmod(&Bn254Fp::MODULUS);
        prop_assert_eq!(Fp::<Bn254Fp>::new(&b).redc(), b);

        let mut c = Big::from_bytes(&bytes);
        c.rmod(&Fp25519::MODULUS);
        prop_assert_eq!(Fp::<Fp25519>::new(&c).redc(), c);
    }

    #[test]
    fn sqrt_of_square(bytes in any::<[u8; 32]>()) {
        let x = element::<Nist256Fp>(&bytes);
        let r = Option::<Fp<Nist256Fp>>::from(x.square().sqrt());
        prop_assert!(r.is_some());
        let r = r.unwrap();
        prop_assert!(r == x || r == x.neg());

        let x = element::<Fp25519>(&bytes);
        let r = Option::<Fp<Fp25519>>::from(x.square().sqrt());
        prop_assert!(r.is_some());
        prop_assert_eq!(r.unwrap().square(), x.square());
    }

    #[test]
    fn fp_decoding_rejects_non_canonical(bytes in any::<[u8; 32]>()) {
        let b = Big::from_bytes(&bytes);
        let canonical = Big::comp(&b, &Bn254Fp::MODULUS) < 0;
        prop_assert_eq!(Fp::<Bn254Fp>::from_slice(&bytes).is_ok(), canonical);
    }
}
