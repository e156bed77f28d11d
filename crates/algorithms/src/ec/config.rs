//! Compile-time curve descriptions

use core::fmt::Debug;

use crate::bigint::Big;
use crate::field::{FieldConfig, Fp};

/// Base field element of a curve
pub type Base<C> = Fp<<C as CurveConfig>::Field>;

/// Constants shared by every curve shape
pub trait CurveConfig:
    'static + Copy + Clone + Debug + Default + Send + Sync + PartialEq + Eq
{
    /// Field the coordinates live in
    type Field: FieldConfig;

    /// Display name used in tracing spans and errors
    const NAME: &'static str;

    /// Coefficient `A`: `0` or `-3` for Weierstrass curves, `1` or `-1` for
    /// Edwards curves, the Montgomery coefficient otherwise
    const CURVE_A: isize;

    /// Coefficient `B` of a Weierstrass curve or `d` of an Edwards curve
    const CURVE_B: Big = Big::new();

    /// Prime order of the generator
    const ORDER: Big;

    /// Generator x-coordinate
    const GX: Big;

    /// Generator y-coordinate, unused for Montgomery curves
    const GY: Big = Big::new();
}

/// `y^2 = x^3 + A x + B` with `A` in `{0, -3}`
pub trait WeierstrassCurve: CurveConfig {}

/// `A x^2 + y^2 = 1 + B x^2 y^2` with `A` in `{1, -1}`
pub trait EdwardsCurve: CurveConfig {}

/// `y^2 = x^3 + A x^2 + x`, used x-only
pub trait MontgomeryCurve: CurveConfig {}

/// A BN curve with a D-type sextic twist, `B' = B / (1 + i)`, and the
/// tables for the optimal-ate pairing and endomorphism decompositions
///
/// All constants are plain integers; negative lattice entries are stored
/// reduced modulo [`CurveConfig::ORDER`].
pub trait PairingCurve: WeierstrassCurve {
    /// `B` as a small integer
    const CURVE_B_I: isize;

    /// Absolute value of the BN parameter `u`
    const BNX: Big;

    /// Cube root of unity in the base field, the GLV endomorphism
    const CRU: Big;

    /// Real part of the Frobenius constant
    const FRA: Big;

    /// Imaginary part of the Frobenius constant
    const FRB: Big;

    /// G2 generator, real part of x
    const PXA: Big;
    /// G2 generator, imaginary part of x
    const PXB: Big;
    /// G2 generator, real part of y
    const PYA: Big;
    /// G2 generator, imaginary part of y
    const PYB: Big;

    /// GLV weights
    const W: [Big; 2];
    /// GLV short lattice basis
    const SB: [[Big; 2]; 2];
    /// Galbraith-Scott weights
    const WB: [Big; 4];
    /// Galbraith-Scott short lattice basis
    const BB: [[Big; 4]; 4];

    /// Whether the curve is GT-strong, so membership in the target group
    /// needs only the cyclotomic checks
    const GT_STRONG: bool = false;
}
