//! Scalar multiplication shared by the projective point types

use milagro_params::arch::BIGBITS;
use subtle::{Choice, ConditionallySelectable};

use crate::bigint::Big;
use crate::window;

/// Group law of a projective point type, in place
pub(crate) trait ProjectivePoint: Copy + ConditionallySelectable {
    /// Display name for tracing
    const NAME: &'static str;

    fn identity() -> Self;

    /// Public identity check, used only for early exits on public inputs
    fn is_identity(&self) -> bool;

    fn dbl_assign(&mut self);

    fn add_assign_point(&mut self, q: &Self);

    fn negate(&self) -> Self;

    /// Equivalent point with `Z = 1`
    fn normalize(&self) -> Self;

    /// Normalize a whole table; types with a batch inversion override this
    fn normalize_table<const N: usize>(table: &mut [Self; N]) {
        for p in table.iter_mut() {
            *p = p.normalize();
        }
    }
}

/// Montgomery ladder over the low `bts` bits of a small secret `e`
pub(crate) fn ladder<P: ProjectivePoint>(p: &P, e: u32, bts: usize) -> P {
    let p = p.normalize();
    let mut r0 = P::identity();
    let mut r1 = p;
    for i in (0..bts).rev() {
        let b = Choice::from(((e >> i) & 1) as u8);
        let mut s = r1;
        s.add_assign_point(&r0);
        P::conditional_swap(&mut r0, &mut r1, b);
        r1 = s;
        r0.dbl_assign();
        P::conditional_swap(&mut r0, &mut r1, b);
    }
    r0.normalize()
}

/// `e*p` with a signed 4-bit fixed window over a table of odd multiples
///
/// The window count covers the full `Big` width whatever the value of `e`.
pub(crate) fn window_mul<P: ProjectivePoint>(p: &P, e: &Big) -> P {
    let mut e = *e;
    e.norm();
    if p.is_identity() {
        return P::identity();
    }

    let p = p.normalize();
    let mut q = p;
    q.dbl_assign();
    let mut table = [p; 8];
    for i in 1..8 {
        table[i] = table[i - 1];
        table[i].add_assign_point(&q);
    }
    P::normalize_table(&mut table);

    let (t, correct_by_p) = window::make_odd(&e);
    let c = P::conditional_select(&q, &p, correct_by_p);
    let (w, nb) = window::fixed_window(&t, BIGBITS);

    let mut r = window::select(&table, w[nb], P::negate);
    for &d in w[..nb].iter().rev() {
        let s = window::select(&table, d, P::negate);
        for _ in 0..4 {
            r.dbl_assign();
        }
        r.add_assign_point(&s);
    }
    r.add_assign_point(&c.negate());
    r.normalize()
}

/// `e*p + f*q` with a signed 2-bit joint window
///
/// `bits` is a public bound on the bit length of both scalars and fixes
/// the number of windows.
pub(crate) fn joint_mul2<P: ProjectivePoint>(p: &P, e: &Big, q: &P, f: &Big, bits: usize) -> P {
    let p = p.normalize();
    let q = q.normalize();
    let add = |a: &P, b: &P| {
        let mut r = *a;
        r.add_assign_point(b);
        r
    };

    let mut s = q;
    s.dbl_assign();
    let mut t = p;
    t.dbl_assign();
    let ns = s.negate();

    let mut table = [P::identity(); 8];
    table[1] = add(&p, &q.negate());
    table[2] = add(&p, &q);
    table[0] = add(&table[1], &ns);
    table[3] = add(&table[2], &s);
    table[5] = add(&table[1], &t);
    table[6] = add(&table[2], &t);
    table[4] = add(&table[5], &ns);
    table[7] = add(&table[6], &s);
    P::normalize_table(&mut table);

    let (te, p_fix) = window::make_odd(e);
    let mut c = P::conditional_select(&t, &p, p_fix);
    let (tf, q_fix) = window::make_odd(f);
    c.add_assign_point(&P::conditional_select(&s, &q, q_fix));

    let (w, nb) = window::joint2(&te, &tf, bits);
    let mut r = window::select(&table, w[nb], P::negate);
    for &d in w[..nb].iter().rev() {
        let s = window::select(&table, d, P::negate);
        r.dbl_assign();
        r.dbl_assign();
        r.add_assign_point(&s);
    }
    r.add_assign_point(&c.negate());
    r.normalize()
}

/// `u[0]*q[0] + u[1]*q[1] + u[2]*q[2] + u[3]*q[3]` for four short scalars
///
/// Even scalars are bumped to odd with a constant-time correction. `bits`
/// is a public bound on the scalars' bit length.
pub(crate) fn joint_mul4<P: ProjectivePoint>(q: &[P; 4], u: &[Big; 4], bits: usize) -> P {
    let _span = tracing::trace_span!("mul4", group = P::NAME).entered();
    let q: [P; 4] = core::array::from_fn(|i| q[i].normalize());
    let add = |a: &P, b: &P| {
        let mut r = *a;
        r.add_assign_point(b);
        r
    };

    let q23p = add(&q[2], &q[3]);
    let q23m = add(&q[2], &q[3].negate());
    let q01m = add(&q[0], &q[1].negate());
    let q01p = add(&q[0], &q[1]);
    let table = {
        let mut w = [
            add(&q01m, &q23p.negate()),
            add(&q01m, &q23m.negate()),
            add(&q01m, &q23m),
            add(&q01m, &q23p),
            add(&q01p, &q23p.negate()),
            add(&q01p, &q23m.negate()),
            add(&q01p, &q23m),
            add(&q01p, &q23p),
        ];
        P::normalize_table(&mut w);
        w
    };

    let mut t = *u;
    let mut c = P::identity();
    for (ti, qi) in t.iter_mut().zip(q.iter()) {
        ti.norm();
        let even = Choice::from((1 - (ti.parity() & 1)) as u8);
        let mut bumped = *ti;
        bumped.inc(1);
        bumped.norm();
        ti.cmove(&bumped, even);
        let with = add(&c, qi);
        c.conditional_assign(&with, even);
    }

    let (w, nb) = window::joint4(&t, bits);
    let mut r = window::select(&table, w[nb], P::negate);
    for &d in w[..nb].iter().rev() {
        let s = window::select(&table, d, P::negate);
        r.dbl_assign();
        r.add_assign_point(&s);
    }
    r.add_assign_point(&c.negate());
    r.normalize()
}
