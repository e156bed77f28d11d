//! Optimal-ate pairing on BN curves
//!
//! `e(P, Q)` takes `P` on the sextic twist (G2) and `Q` on the base curve
//! (G1) and lands in the order-`r` subgroup of `Fp12^*` (GT). The Miller
//! loop runs over `6u + 2` with the two Frobenius fixup lines of the R-ate
//! variant; the final exponentiation splits into the easy part
//! `(p^6 - 1)(p^2 + 1)` and the Duquesne-Ghammam hard part.
//!
//! Scalar multiplication in all three groups goes through the GLV and
//! Galbraith-Scott decompositions in [`glv`].

use core::marker::PhantomData;

use milagro_api::{PairingEngine, Result as CoreResult};

use crate::bigint::Big;
use crate::ec::{PairingCurve, StepKind, TwistPoint, WeierstrassPoint};
use crate::error::{to_core_result, validate, Result};
use crate::field::{FieldConfig, Fp, Fp12, Fp2, Fp4, ModularReduction};

mod glv;

pub use glv::{g1_mul, g2_mul, gs, gt_pow, glv};

/// The Frobenius constant `(1 + i)^((p - 1)/6)` as an `Fp2`
pub(crate) fn frobenius_constant<C: PairingCurve>() -> Fp2<C::Field> {
    Fp2::from_bigs(&C::FRA, &C::FRB)
}

/// `6|u| - 2`, the Miller loop length
fn loop_parameter<C: PairingCurve>() -> Big {
    let mut n = C::BNX;
    n.pmul(6);
    n.dec(2);
    n.norm();
    n
}

/// One Miller loop step: double `a` (when `b` is none) or add `b` to it,
/// and return the line through the old `a` evaluated at `(qx, qy)`
///
/// The result is sparse: its `c` part is zero and its `b` part is real, so
/// it can be accumulated with [`Fp12::smul`].
pub(crate) fn line<C: PairingCurve>(
    a: &mut TwistPoint<C>,
    b: Option<&TwistPoint<C>>,
    qx: &Fp<C::Field>,
    qy: &Fp<C::Field>,
) -> Fp12<C::Field> {
    let p = *a;
    let kind = match b {
        None => a.dbl_step(),
        Some(b) => a.add_step(b),
    };
    let z3 = a.z;
    let zz = p.z.square();

    let (la, lb) = match kind {
        StepKind::Infinity => return Fp12::one(),
        StepKind::Addition => {
            let (bx, by) = b.and_then(TwistPoint::get).unwrap_or((p.x, p.y));
            let t = p.z.mul(&by);
            let ny = p.y.neg();
            let slope = zz.mul(&t).add(&ny);
            let z3 = z3.pmul(qy);
            let t = t.mul(&p.x).add(&bx.mul(&ny));
            (Fp4::new(z3, t), Fp4::from_fp2(slope.neg().pmul(qx)))
        }
        StepKind::Doubling => {
            let slope = p.x.square().imul(3);
            let y2 = p.y.square().double();
            let z3 = z3.mul(&zz).pmul(qy);
            let x = p.x.mul(&slope).sub(&y2);
            (Fp4::new(z3, x), Fp4::from_fp2(zz.mul(&slope.neg()).pmul(qx)))
        }
    };
    Fp12::new(la, lb, Fp4::zero())
}

/// Miller loop of the optimal-ate pairing, without the final
/// exponentiation
///
/// Inputs are not checked; an input at infinity contributes lines equal to
/// one.
pub fn ate<C: PairingCurve>(p: &TwistPoint<C>, q: &WeierstrassPoint<C>) -> Fp12<C::Field> {
    let _span = tracing::debug_span!("ate", curve = C::NAME).entered();
    let f = frobenius_constant::<C>();
    let n = loop_parameter::<C>();
    tracing::trace!(
        bits = n.nbits(),
        reduction = <C::Field as FieldConfig>::Reduction::KIND,
        "miller loop"
    );

    let p = p.to_affine();
    let q = q.to_affine();
    let (qx, qy) = (q.x, q.y);

    let mut a = p;
    let mut r = Fp12::one();
    for i in (1..n.nbits() - 1).rev() {
        r = r.smul(&line(&mut a, None, &qx, &qy));
        if n.bit(i) == 1 {
            r = r.smul(&line(&mut a, Some(&p), &qx, &qy));
        }
        r = r.square();
    }
    r = r.smul(&line(&mut a, None, &qx, &qy));

    // R-ate fixup with pi(P) and -pi^2(P)
    let k = p.frob(&f);
    a = a.neg();
    r = r.conj();
    r = r.smul(&line(&mut a, Some(&k), &qx, &qy));
    let k = k.frob(&f).neg();
    r.smul(&line(&mut a, Some(&k), &qx, &qy))
}

/// Miller loop of `e(p, q) * e(r, s)` sharing squarings
pub fn double_ate<C: PairingCurve>(
    p: &TwistPoint<C>,
    q: &WeierstrassPoint<C>,
    r: &TwistPoint<C>,
    s: &WeierstrassPoint<C>,
) -> Fp12<C::Field> {
    let _span = tracing::debug_span!("double_ate", curve = C::NAME).entered();
    let f = frobenius_constant::<C>();
    let n = loop_parameter::<C>();

    let p = p.to_affine();
    let q = q.to_affine();
    let r = r.to_affine();
    let s = s.to_affine();
    let (qx, qy) = (q.x, q.y);
    let (sx, sy) = (s.x, s.y);

    let mut a = p;
    let mut b = r;
    let mut acc = Fp12::one();
    for i in (1..n.nbits() - 1).rev() {
        acc = acc.smul(&line(&mut a, None, &qx, &qy));
        acc = acc.smul(&line(&mut b, None, &sx, &sy));
        if n.bit(i) == 1 {
            acc = acc.smul(&line(&mut a, Some(&p), &qx, &qy));
            acc = acc.smul(&line(&mut b, Some(&r), &sx, &sy));
        }
        acc = acc.square();
    }
    acc = acc.smul(&line(&mut a, None, &qx, &qy));
    acc = acc.smul(&line(&mut b, None, &sx, &sy));

    acc = acc.conj();
    for (t, base, (x, y)) in [(&mut a, &p, (qx, qy)), (&mut b, &r, (sx, sy))] {
        let k = base.frob(&f);
        *t = t.neg();
        acc = acc.smul(&line(t, Some(&k), &x, &y));
        let k = k.frob(&f).neg();
        acc = acc.smul(&line(t, Some(&k), &x, &y));
    }
    acc
}

/// Final exponentiation `m^((p^12 - 1)/r)`
pub fn final_exp<C: PairingCurve>(m: &Fp12<C::Field>) -> Fp12<C::Field> {
    let _span = tracing::debug_span!("final_exp", curve = C::NAME).entered();
    let f = frobenius_constant::<C>();
    let x = C::BNX;

    // Easy part: m^((p^6 - 1)(p^2 + 1))
    let t0 = m.inv();
    let mut r = m.conj().mul(&t0);
    let t0 = r;
    r = r.frob(&f).frob(&f).mul(&t0);

    // Hard part
    let t0 = r.pow(&x);
    let y3 = t0.usqr();
    let y0 = t0.mul(&y3);
    let y2 = y3.frob(&f).mul(&y3).usqr().mul(&y3);

    let t0 = y0.pow(&x);
    let y0 = r.conj();
    let y1 = t0.frob(&f).frob(&f).mul(&y0);
    let t0 = t0.conj();
    let y3 = t0.frob(&f).mul(&t0);
    let y1 = y1.mul(&t0.usqr());

    let t0 = y3.pow(&x).usqr().conj();
    let y3 = y3.mul(&t0);

    r = r.frob(&f);
    let mut y0 = r;
    r = r.frob(&f);
    y0 = y0.mul(&r);
    r = r.frob(&f);
    y0 = y0.mul(&r);

    r = y3.usqr().mul(&y2);
    let y3 = r.mul(&y0);
    r = r.mul(&y1).usqr().mul(&y3);
    r.reduce();
    r
}

/// Whether `m` lies in the order-`r` subgroup GT of the cyclotomic group
///
/// Rejects the identity. On GT-strong curves the cyclotomic checks
/// suffice; otherwise `m^p = m^(6u^2)` is also checked.
pub fn gt_member<C: PairingCurve>(m: &Fp12<C::Field>) -> bool {
    if bool::from(m.is_one()) {
        return false;
    }
    if !bool::from(m.conj().mul(m).is_one()) {
        tracing::debug!(curve = C::NAME, "GT candidate is not unitary");
        return false;
    }

    let f = frobenius_constant::<C>();
    let r = m.frob(&f).frob(&f);
    let w = r.frob(&f).frob(&f).mul(m);
    if C::GT_STRONG {
        return w == r;
    }
    if w != r {
        return false;
    }

    let w = m.pow(&C::BNX).pow(&C::BNX);
    let r = w.square().mul(&w).square();
    m.frob(&f) == r
}

/// `e(p, q)`, rejecting inputs at infinity
pub fn pairing<C: PairingCurve>(
    p: &TwistPoint<C>,
    q: &WeierstrassPoint<C>,
) -> Result<Fp12<C::Field>> {
    validate::finite(p.is_infinity().into(), "pairing G2 input")?;
    validate::finite(q.is_infinity().into(), "pairing G1 input")?;
    Ok(final_exp::<C>(&ate(p, q)))
}

/// `e(p, q) * e(r, s)` with one shared Miller loop and one final
/// exponentiation, rejecting inputs at infinity
pub fn double_pairing<C: PairingCurve>(
    p: &TwistPoint<C>,
    q: &WeierstrassPoint<C>,
    r: &TwistPoint<C>,
    s: &WeierstrassPoint<C>,
) -> Result<Fp12<C::Field>> {
    validate::finite(p.is_infinity().into(), "double pairing G2 input")?;
    validate::finite(q.is_infinity().into(), "double pairing G1 input")?;
    validate::finite(r.is_infinity().into(), "double pairing G2 input")?;
    validate::finite(s.is_infinity().into(), "double pairing G1 input")?;
    Ok(final_exp::<C>(&double_ate(p, q, r, s)))
}

/// [`PairingEngine`] over a pairing-friendly curve marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pairing<C: PairingCurve>(PhantomData<C>);

impl<C: PairingCurve> PairingEngine for Pairing<C> {
    type G1 = WeierstrassPoint<C>;
    type G2 = TwistPoint<C>;
    type Gt = Fp12<C::Field>;
    type Scalar = Big;

    fn pairing(p: &Self::G2, q: &Self::G1) -> CoreResult<Self::Gt> {
        to_core_result(pairing(p, q), "pairing")
    }

    fn double_pairing(
        p: &Self::G2,
        q: &Self::G1,
        r: &Self::G2,
        s: &Self::G1,
    ) -> CoreResult<Self::Gt> {
        to_core_result(double_pairing(p, q, r, s), "double pairing")
    }

    fn g1_mul(p: &Self::G1, e: &Big) -> Self::G1 {
        g1_mul(p, e)
    }

    fn g2_mul(p: &Self::G2, e: &Big) -> Self::G2 {
        g2_mul(p, e)
    }

    fn gt_pow(g: &Self::Gt, e: &Big) -> Self::Gt {
        gt_pow::<C>(g, e)
    }

    fn gt_member(g: &Self::Gt) -> bool {
        gt_member::<C>(g)
    }
}
