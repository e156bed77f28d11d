use super::*;

use crate::bigint::{Big, DBig};
use crate::curves::{Bn254, Bn254Fp, Fp25519, Mf254Fp, Nist256Fp};
use crate::ec::{CurveConfig, PairingCurve, TwistPoint, WeierstrassPoint};
use crate::error::Error;
use crate::pairing::{frobenius_constant, pairing};

use milagro_params::arch::{Chunk, MODBYTES};
use milagro_params::sizes::{FP12_SIZE, FP2_SIZE};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x46505f31)
}

fn int(x: &Big) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &x.to_bytes())
}

fn modulus<F: FieldConfig>() -> BigInt {
    int(&F::MODULUS)
}

fn value<F: FieldConfig>(a: &Fp<F>) -> BigInt {
    int(&a.redc())
}

fn canon(x: BigInt, p: &BigInt) -> BigInt {
    ((x % p) + p) % p
}

// ============================================================================
// Fp against num-bigint
// ============================================================================

fn check_arithmetic<F: FieldConfig>() {
    let mut rng = rng();
    let p = modulus::<F>();
    let half = (&p + 1u32) / 2u32;

    for _ in 0..200 {
        let a = Fp::<F>::random(&mut rng);
        let b = Fp::<F>::random(&mut rng);
        let (x, y) = (value(&a), value(&b));

        assert_eq!(value(&a.add(&b)), canon(&x + &y, &p), "{} add", F::NAME);
        assert_eq!(value(&a.sub(&b)), canon(&x - &y, &p), "{} sub", F::NAME);
        assert_eq!(value(&a.mul(&b)), canon(&x * &y, &p), "{} mul", F::NAME);
        assert_eq!(value(&a.square()), canon(&x * &x, &p), "{} sqr", F::NAME);
        assert_eq!(value(&a.neg()), canon(-&x, &p), "{} neg", F::NAME);
        assert_eq!(value(&a.double()), canon(&x * 2, &p), "{} dbl", F::NAME);
        assert_eq!(value(&a.div2()), canon(&x * &half, &p), "{} div2", F::NAME);

        let c: Chunk = rng.gen_range(-(1i64 << 40)..(1i64 << 40));
        assert_eq!(
            value(&a.imul(c)),
            canon(&x * BigInt::from(c), &p),
            "{} imul {}",
            F::NAME,
            c
        );

        if !x.is_zero() {
            assert!(bool::from(a.inv().mul(&a).is_one()), "{} inv", F::NAME);
        }
    }
}

#[test]
fn test_bn254_arithmetic() {
    check_arithmetic::<Bn254Fp>();
}

#[test]
fn test_nist256_arithmetic() {
    check_arithmetic::<Nist256Fp>();
}

#[test]
fn test_25519_arithmetic() {
    check_arithmetic::<Fp25519>();
}

#[test]
fn test_mf254_arithmetic() {
    check_arithmetic::<Mf254Fp>();
}

/// Long chains of unreduced additions must still multiply correctly
fn check_lazy_excess<F: FieldConfig>() {
    let mut rng = rng();
    let p = modulus::<F>();

    for _ in 0..20 {
        let a = Fp::<F>::random(&mut rng);
        let b = Fp::<F>::random(&mut rng);
        let (x, y) = (value(&a), value(&b));

        let mut s = a;
        let mut n = 1u32;
        for _ in 0..40 {
            s = s.add(&a);
            n += 1;
        }
        let expected = canon(&x * n * &y, &p);
        assert_eq!(value(&s.mul(&b)), expected, "{} lazy mul", F::NAME);
        assert_eq!(value(&s.neg().neg()), canon(&x * n, &p), "{} lazy neg", F::NAME);
    }
}

#[test]
fn test_lazy_excess() {
    check_lazy_excess::<Bn254Fp>();
    check_lazy_excess::<Nist256Fp>();
    check_lazy_excess::<Fp25519>();
    check_lazy_excess::<Mf254Fp>();
}

fn check_pow_and_sqrt<F: FieldConfig>() {
    let mut rng = rng();
    let p = modulus::<F>();

    let mut non_residues = 0;
    for _ in 0..50 {
        let a = Fp::<F>::random(&mut rng);
        let x = value(&a);
        let e = Big::randomnum(&F::MODULUS, &mut rng);
        assert_eq!(value(&a.pow(&e)), x.modpow(&int(&e), &p), "{} pow", F::NAME);

        let sq = a.square();
        let r = Option::<Fp<F>>::from(sq.sqrt()).expect("square has a root");
        assert_eq!(r.square(), sq, "{} sqrt", F::NAME);
        assert_eq!(sq.sqrt_checked().map(|r| r.square()), Ok(sq));

        let euler = x.modpow(&((&p - 1u32) / 2u32), &p);
        if euler == BigInt::one() {
            assert!(a.is_qr());
            assert!(bool::from(a.sqrt().is_some()));
        } else if !x.is_zero() {
            non_residues += 1;
            assert!(!a.is_qr());
            assert_eq!(a.jacobi(), -1);
            assert!(bool::from(a.sqrt().is_none()), "{} non-residue", F::NAME);
            assert!(matches!(a.sqrt_checked(), Err(Error::NonResidue { .. })));
        }
    }
    assert!(non_residues > 0);
}

#[test]
fn test_pow_and_sqrt() {
    check_pow_and_sqrt::<Bn254Fp>();
    check_pow_and_sqrt::<Nist256Fp>();
    check_pow_and_sqrt::<Fp25519>();
    check_pow_and_sqrt::<Mf254Fp>();
}

#[test]
fn test_inverse_of_zero_is_zero() {
    let z = Fp::<Bn254Fp>::zero();
    assert!(bool::from(z.inv().is_zero()));
    assert!(bool::from(z.invert().is_none()));
    assert!(bool::from(Fp::<Fp25519>::zero().inv().is_zero()));
}

#[test]
fn test_small_constructors() {
    let p = modulus::<Bn254Fp>();
    assert_eq!(value(&Fp::<Bn254Fp>::from_int(-5)), canon(BigInt::from(-5), &p));
    assert_eq!(value(&Fp::<Bn254Fp>::from_int(7)), BigInt::from(7));
    assert!(bool::from(Fp::<Bn254Fp>::one().is_one()));

    let h = Fp::<Bn254Fp>::from_hex("ff").unwrap();
    assert_eq!(value(&h), BigInt::from(255));
    assert!(Fp::<Bn254Fp>::from_hex("xyz").is_err());
}

#[test]
fn test_sign_is_parity() {
    assert!(!bool::from(Fp::<Bn254Fp>::from_int(4).sign()));
    assert!(bool::from(Fp::<Bn254Fp>::from_int(5).sign()));
    // -1 = p - 1 is even
    assert!(!bool::from(Fp::<Bn254Fp>::from_int(-1).sign()));
}

#[test]
fn test_montgomery_reductions_agree() {
    let mut rng = rng();
    for _ in 0..200 {
        let a = Fp::<Bn254Fp>::random(&mut rng);
        let b = Fp::<Bn254Fp>::random(&mut rng);
        let mut d1: DBig = Big::mul(a.raw(), b.raw());
        let mut d2 = d1;
        let mut r1 = GenericMontgomery::reduce_comba::<Bn254Fp>(&mut d1);
        let mut r2 = GenericMontgomery::reduce_rows::<Bn254Fp>(&mut d2);
        r1.rmod(&Bn254Fp::MODULUS);
        r2.rmod(&Bn254Fp::MODULUS);
        assert_eq!(r1, r2);
    }
}

#[test]
fn test_fp_encoding() {
    let mut rng = rng();
    let a = Fp::<Nist256Fp>::random(&mut rng);
    let bytes = a.to_bytes();
    assert_eq!(Option::<Fp<Nist256Fp>>::from(Fp::from_bytes(&bytes)), Some(a));
    assert_eq!(Fp::<Nist256Fp>::from_slice(&bytes).unwrap(), a);

    let p = Nist256Fp::MODULUS.to_bytes();
    assert!(bool::from(Fp::<Nist256Fp>::from_bytes(&p).is_none()));
    assert!(matches!(
        Fp::<Nist256Fp>::from_slice(&p),
        Err(Error::Encoding { .. })
    ));
    assert!(matches!(
        Fp::<Nist256Fp>::from_slice(&bytes[1..]),
        Err(Error::Length { expected: MODBYTES, actual: 31, .. })
    ));
}

// ============================================================================
// Fp2 and Fp4
// ============================================================================

type F2 = Fp2<Bn254Fp>;
type F4 = Fp4<Bn254Fp>;
type F12 = Fp12<Bn254Fp>;

#[test]
fn test_fp2_arithmetic() {
    let mut rng = rng();
    let p = modulus::<Bn254Fp>();
    for _ in 0..100 {
        let u = F2::random(&mut rng);
        let v = F2::random(&mut rng);
        let (a0, a1) = (value(&u.a), value(&u.b));
        let (b0, b1) = (value(&v.a), value(&v.b));

        let w = u.mul(&v);
        assert_eq!(value(&w.a), canon(&a0 * &b0 - &a1 * &b1, &p));
        assert_eq!(value(&w.b), canon(&a0 * &b1 + &a1 * &b0, &p));
        assert_eq!(u.square(), u.mul(&u));
        assert!(bool::from(u.inv().mul(&u).is_one()));
        assert_eq!(u.mul_ip().div_ip(), u);
        assert_eq!(u.mul_ip(), u.mul(&F2::from_ints(1, 1)));
        assert_eq!(u.pmul(&v.a), u.mul(&F2::from_fp(v.a)));
        assert_eq!(u.imul(7), u.mul(&F2::from_ints(7, 0)));
        assert_eq!(u.div2().double(), u);
    }
}

#[test]
fn test_fp2_conjugate_is_frobenius() {
    let mut rng = rng();
    let u = F2::random(&mut rng);
    assert_eq!(u.pow(&Bn254Fp::MODULUS), u.conj());
}

#[test]
fn test_fp2_sqrt() {
    let mut rng = rng();
    let mut non_residues = 0;
    for _ in 0..50 {
        let u = F2::random(&mut rng);
        let sq = u.square();
        let r = Option::<F2>::from(sq.sqrt()).expect("square has a root");
        assert_eq!(r.square(), sq);

        if !u.is_qr() {
            non_residues += 1;
            assert!(bool::from(u.sqrt().is_none()));
        }
    }
    assert!(non_residues > 0);

    // Real non-residue: the root is purely imaginary
    let mut a = Fp::<Bn254Fp>::from_int(2);
    while a.is_qr() {
        a = a.add(&Fp::one());
    }
    let u = F2::from_fp(a);
    let r = Option::<F2>::from(u.sqrt()).expect("real elements are squares in Fp2");
    assert!(bool::from(r.a.is_zero()));
    assert_eq!(r.square(), u);
}

#[test]
fn test_fp2_encoding() {
    let mut rng = rng();
    let u = F2::random(&mut rng);
    let bytes = u.to_bytes();
    assert_eq!(bytes.len(), FP2_SIZE);
    assert_eq!(Option::<F2>::from(F2::from_bytes(&bytes)), Some(u));

    let mut bad = bytes;
    bad[MODBYTES..].copy_from_slice(&Bn254Fp::MODULUS.to_bytes());
    assert!(bool::from(F2::from_bytes(&bad).is_none()));
}

#[test]
fn test_fp4_arithmetic() {
    let mut rng = rng();
    let f = frobenius_constant::<Bn254>();
    let f3 = f.square().mul(&f);
    for _ in 0..20 {
        let x = F4::random(&mut rng);
        let y = F4::random(&mut rng);
        assert_eq!(x.square(), x.mul(&x));
        assert!(bool::from(x.inv().mul(&x).is_one()));
        assert_eq!(x.mul(&y), y.mul(&x));
        assert_eq!(x.times_i(), x.mul(&F4::new(F2::zero(), F2::one())));
        assert_eq!(x.conj().add(&x), F4::from_fp2(x.a.double()));
    }
    let x = F4::random(&mut rng);
    assert_eq!(x.frob(&f3), x.pow(&Bn254Fp::MODULUS));
}

// ============================================================================
// Fp12
// ============================================================================

/// Random element of the cyclotomic subgroup, via the easy part of the
/// final exponentiation
fn cyclotomic(rng: &mut ChaCha8Rng) -> F12 {
    let f = frobenius_constant::<Bn254>();
    let m = F12::random(rng);
    let t = m.conj().mul(&m.inv());
    t.frob(&f).frob(&f).mul(&t)
}

fn gt_element() -> F12 {
    pairing::<Bn254>(&TwistPoint::generator(), &WeierstrassPoint::generator()).unwrap()
}

#[test]
fn test_fp12_arithmetic() {
    let mut rng = rng();
    for _ in 0..10 {
        let x = F12::random(&mut rng);
        let y = F12::random(&mut rng);
        assert_eq!(x.square(), x.mul(&x));
        assert_eq!(x.mul(&y), y.mul(&x));
        assert!(bool::from(x.inv().mul(&x).is_one()));
        assert_eq!(x.sub(&y).add(&y), x);
        assert!(bool::from(x.add(&x.neg()).is_zero()));
    }
    assert!(bool::from(F12::zero().inv().is_zero()));
    assert!(bool::from(F12::zero().invert().is_none()));
}

#[test]
fn test_fp12_sparse_product() {
    let mut rng = rng();
    for _ in 0..10 {
        let x = F12::random(&mut rng);
        let line = F12::new(
            F4::random(&mut rng),
            F4::from_fp2(F2::random(&mut rng)),
            F4::zero(),
        );
        assert_eq!(x.smul(&line), x.mul(&line));
    }
}

#[test]
fn test_fp12_frobenius() {
    let mut rng = rng();
    let f = frobenius_constant::<Bn254>();
    let g = cyclotomic(&mut rng);
    assert_eq!(g.frob(&f), g.pow(&Bn254Fp::MODULUS));

    let mut x = F12::random(&mut rng);
    let y = x;
    for _ in 0..12 {
        x = x.frob(&f);
    }
    assert_eq!(x, y);
}

#[test]
fn test_unitary_squaring() {
    let mut rng = rng();
    for _ in 0..10 {
        let g = cyclotomic(&mut rng);
        assert!(bool::from(g.conj().mul(&g).is_one()));
        assert_eq!(g.usqr(), g.square());
    }
}

#[test]
fn test_fp12_pow() {
    let mut rng = rng();
    let g = cyclotomic(&mut rng);
    let a = Big::new_int(rng.gen_range(1..1i64 << 40));
    let b = Big::new_int(rng.gen_range(1..1i64 << 40));
    let mut ab = a.plus(&b);
    ab.norm();
    assert_eq!(g.pow(&ab), g.pow(&a).mul(&g.pow(&b)));
    assert!(bool::from(g.pow(&Big::new()).is_one()));
    assert_eq!(g.pow(&Big::one()), g);

    let gt = gt_element();
    assert!(bool::from(gt.pow(&Bn254::ORDER).is_one()));
}

#[test]
fn test_pinpow_matches_pow() {
    let mut rng = rng();
    let g = cyclotomic(&mut rng);
    for bts in [1usize, 5, 16, 32] {
        let e: u32 = if bts == 32 {
            rng.gen()
        } else {
            rng.gen_range(0..1u32 << bts)
        };
        assert_eq!(g.pinpow(e, bts), g.pow(&Big::new_int(e as Chunk)), "{} bits", bts);
    }
    assert!(bool::from(g.pinpow(0, 8).is_one()));
}

#[test]
fn test_pow4_matches_separate_powers() {
    let mut rng = rng();
    let q = [
        cyclotomic(&mut rng),
        cyclotomic(&mut rng),
        cyclotomic(&mut rng),
        cyclotomic(&mut rng),
    ];
    let cases = [
        [5i64, 8, 13, 21],
        [0, 1, 2, 3],
        [1 << 40, (1 << 33) + 1, 6, 0],
    ];
    for c in cases {
        let u = c.map(Big::new_int);
        let expected = q
            .iter()
            .zip(u.iter())
            .fold(F12::one(), |acc, (qi, ui)| acc.mul(&qi.pow(ui)));
        assert_eq!(F12::pow4(&q, &u), expected, "{:?}", c);
    }

    let u: [Big; 4] = core::array::from_fn(|_| {
        let mut b = Big::randomnum(&Bn254::ORDER, &mut rng);
        b.shr(192);
        b
    });
    let expected = q
        .iter()
        .zip(u.iter())
        .fold(F12::one(), |acc, (qi, ui)| acc.mul(&qi.pow(ui)));
    assert_eq!(F12::pow4(&q, &u), expected);
}

#[test]
fn test_fp12_encoding() {
    let mut rng = rng();
    let x = F12::random(&mut rng);
    let bytes = x.to_bytes();
    assert_eq!(bytes.len(), FP12_SIZE);
    assert_eq!(Option::<F12>::from(F12::from_bytes(&bytes)), Some(x));

    let mut bad = bytes;
    bad[..MODBYTES].fill(0xff);
    assert!(bool::from(F12::from_bytes(&bad).is_none()));
}

// ============================================================================
// XTR traces
// ============================================================================

#[test]
fn test_xtr_pow_tracks_trace() {
    let mut rng = rng();
    let g = gt_element();
    let c = g.trace();
    for _ in 0..5 {
        let n = Big::randomnum(&Bn254::ORDER, &mut rng);
        if n.is_zero() {
            continue;
        }
        assert_eq!(c.xtr_pow(&n), g.pow(&n).trace());
    }
    assert_eq!(c.xtr_pow(&Big::one()), c);
}

#[test]
fn test_xtr_pow2_tracks_trace() {
    let mut rng = rng();
    let f = frobenius_constant::<Bn254>();
    let g = gt_element();
    let gp = g.frob(&f);
    let gi = g.conj();

    let ck = gp.trace();
    let cl = g.trace();
    let ckml = gp.mul(&gi).trace();
    let ckm2l = gp.mul(&gi).mul(&gi).trace();

    let fixed: [(i64, i64); 3] = [(2, 3), (5, 7), (12345, 678)];
    let random = (0..3).map(|_| (rng.gen_range(1..1i64 << 60), rng.gen_range(1..1i64 << 60)));
    for (a, b) in fixed.into_iter().chain(random) {
        let (a, b) = (Big::new_int(a), Big::new_int(b));
        // a pairs with l = 1, b with k = p
        let expected = gp.pow(&b).mul(&g.pow(&a)).trace();
        assert_eq!(F4::xtr_pow2(&ck, &cl, &ckml, &ckm2l, &a, &b), expected);
    }
}

#[test]
fn test_field_names() {
    assert_eq!(Bn254Fp::NAME, "BN254");
    assert_eq!(<Fp25519 as FieldConfig>::Reduction::KIND, "pseudo-mersenne");
    assert!(!value(&Fp::<Fp25519>::one()).is_zero());
}
