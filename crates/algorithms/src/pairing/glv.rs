//! Endomorphism-accelerated scalar multiplication in G1, G2 and GT
//!
//! A scalar is split against a short lattice basis into two (GLV) or four
//! (Galbraith-Scott) sub-scalars of roughly `1/2` or `1/4` the bit length,
//! then evaluated with a joint multi-scalar method. Each sub-scalar is
//! replaced by its negation modulo `r` when that is shorter, with the
//! matching base negated.

use subtle::{Choice, ConditionallySelectable};

use super::frobenius_constant;
use crate::bigint::Big;
use crate::ec::{PairingCurve, TwistPoint, WeierstrassPoint};
use crate::field::{Fp, Fp12};

/// Babai rounding of `e` against a lattice `(weights, basis)`
fn decompose<const N: usize>(e: &Big, q: &Big, weights: &[Big; N], basis: &[[Big; N]; N]) -> [Big; N] {
    let _span = tracing::debug_span!("decompose", parts = N).entered();
    let mut e = *e;
    e.norm();
    e.rmod(q);
    let v: [Big; N] = core::array::from_fn(|i| {
        let mut d = Big::mul(&weights[i], &e);
        d.div(q)
    });

    let mut u = [Big::new(); N];
    u[0] = e;
    for (i, ui) in u.iter_mut().enumerate() {
        for (j, vj) in v.iter().enumerate() {
            let t = Big::modmul(vj, &basis[j][i], q);
            ui.add(q);
            ui.sub(&t);
            ui.rmod(q);
        }
    }
    u
}

/// GLV split `e = u0 + u1*lambda mod r`
pub fn glv<C: PairingCurve>(e: &Big) -> [Big; 2] {
    decompose(e, &C::ORDER, &C::W, &C::SB)
}

/// Galbraith-Scott split `e = u0 + u1*psi + u2*psi^2 + u3*psi^3 mod r`
pub fn gs<C: PairingCurve>(e: &Big) -> [Big; 4] {
    decompose(e, &C::ORDER, &C::WB, &C::BB)
}

/// Public bit bound on a shortened GLV part, about half the order
pub(crate) fn glv_bits<C: PairingCurve>() -> usize {
    (C::ORDER.nbits() + 1) / 2 + 4
}

/// Public bit bound on a shortened GS part, about a quarter of the order
pub(crate) fn gs_bits<C: PairingCurve>() -> usize {
    (C::ORDER.nbits() + 3) / 4 + 4
}

/// Replace `u` by `r - u` when that has fewer bits; returns whether it did
fn shorten(u: &mut Big, q: &Big) -> Choice {
    let t = Big::modneg(u, q);
    let swap = Choice::from((t.nbits() < u.nbits()) as u8);
    u.cmove(&t, swap);
    swap
}

/// `e*p` in G1 using the cube-root-of-unity endomorphism
pub fn g1_mul<C: PairingCurve>(p: &WeierstrassPoint<C>, e: &Big) -> WeierstrassPoint<C> {
    let q = C::ORDER;
    let mut u = glv::<C>(e);

    let p = p.to_affine();
    let mut endo = p;
    endo.x = p.x.mul(&Fp::new(&C::CRU));
    let mut bases = [p, endo];

    for (ui, bi) in u.iter_mut().zip(bases.iter_mut()) {
        let swap = shorten(ui, &q);
        let nb = bi.neg();
        bi.conditional_assign(&nb, swap);
    }
    WeierstrassPoint::mul2_short(&bases[0], &u[0], &bases[1], &u[1], glv_bits::<C>())
}

/// `e*p` in G2 using the Frobenius endomorphism
pub fn g2_mul<C: PairingCurve>(p: &TwistPoint<C>, e: &Big) -> TwistPoint<C> {
    let q = C::ORDER;
    let f = frobenius_constant::<C>();
    let mut u = gs::<C>(e);

    let mut bases = [p.to_affine(); 4];
    for i in 1..4 {
        bases[i] = bases[i - 1].frob(&f);
    }
    for (ui, bi) in u.iter_mut().zip(bases.iter_mut()) {
        let swap = shorten(ui, &q);
        let nb = bi.neg();
        bi.conditional_assign(&nb, swap);
    }
    TwistPoint::mul4_short(&bases, &u, gs_bits::<C>())
}

/// `g^e` in GT using the Frobenius endomorphism
///
/// `g` must be unitary, as every pairing output is.
pub fn gt_pow<C: PairingCurve>(g: &Fp12<C::Field>, e: &Big) -> Fp12<C::Field> {
    let q = C::ORDER;
    let f = frobenius_constant::<C>();
    let mut u = gs::<C>(e);

    let mut bases = [*g; 4];
    for i in 1..4 {
        bases[i] = bases[i - 1].frob(&f);
    }
    for (ui, bi) in u.iter_mut().zip(bases.iter_mut()) {
        let swap = shorten(ui, &q);
        let nb = bi.conj();
        bi.conditional_assign(&nb, swap);
    }
    Fp12::pow4_short(&bases, &u, gs_bits::<C>())
}
