//! Bundled fields and curves
//!
//! Each marker ties a constant module from [`milagro_params::rom`] to the
//! field and curve traits. Swapping curves means naming a different marker;
//! nothing is selected at runtime.

use milagro_params::arch::Chunk;
use milagro_params::rom::{bn254, c25519, ed25519, mf254, nist256};

use crate::bigint::Big;
use crate::ec::{
    CurveConfig, EdwardsCurve, EdwardsPoint, MontgomeryCurve, MontgomeryPoint, PairingCurve,
    TwistPoint, WeierstrassCurve, WeierstrassPoint,
};
use crate::field::{FieldConfig, Fp, Fp12, GenericMontgomery, MontgomeryFriendly, PseudoMersenne};
use crate::pairing::Pairing;

// ============================================================================
// Fields
// ============================================================================

/// Base field of BN254, `p = 36u^4 + 36u^3 + 24u^2 + 6u + 1`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bn254Fp;

impl FieldConfig for Bn254Fp {
    type Reduction = GenericMontgomery;
    const NAME: &'static str = "BN254";
    const MODULUS: Big = Big::from_limbs(bn254::MODULUS);
    const R2MODP: Big = Big::from_limbs(bn254::R2MODP);
    const MCONST: Chunk = bn254::MCONST;
    const MODBITS: usize = bn254::MODBITS;
    const MOD8: usize = bn254::MOD8;
}

/// Base field of NIST P-256
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nist256Fp;

impl FieldConfig for Nist256Fp {
    type Reduction = GenericMontgomery;
    const NAME: &'static str = "NIST256";
    const MODULUS: Big = Big::from_limbs(nist256::MODULUS);
    const R2MODP: Big = Big::from_limbs(nist256::R2MODP);
    const MCONST: Chunk = nist256::MCONST;
    const MODBITS: usize = nist256::MODBITS;
    const MOD8: usize = nist256::MOD8;
}

/// `GF(2^255 - 19)`, shared by Ed25519 and Curve25519
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp25519;

impl FieldConfig for Fp25519 {
    type Reduction = PseudoMersenne;
    const NAME: &'static str = "25519";
    const MODULUS: Big = Big::from_limbs(ed25519::MODULUS);
    const MCONST: Chunk = ed25519::MCONST;
    const MODBITS: usize = ed25519::MODBITS;
    const MOD8: usize = ed25519::MOD8;
}

/// Montgomery-friendly prime `p = c*2^224 - 1`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mf254Fp;

impl FieldConfig for Mf254Fp {
    type Reduction = MontgomeryFriendly;
    const NAME: &'static str = "MF254";
    const MODULUS: Big = Big::from_limbs(mf254::MODULUS);
    const R2MODP: Big = Big::from_limbs(mf254::R2MODP);
    const MCONST: Chunk = mf254::MCONST;
    const MODBITS: usize = mf254::MODBITS;
    const MOD8: usize = mf254::MOD8;
}

// ============================================================================
// Curves
// ============================================================================

/// Barreto-Naehrig curve `y^2 = x^3 + 2` with `u = -(2^62 + 2^55 + 1)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bn254;

impl CurveConfig for Bn254 {
    type Field = Bn254Fp;
    const NAME: &'static str = "BN254";
    const CURVE_A: isize = bn254::CURVE_A;
    const CURVE_B: Big = Big::from_limbs(bn254::CURVE_B);
    const ORDER: Big = Big::from_limbs(bn254::CURVE_ORDER);
    const GX: Big = Big::from_limbs(bn254::CURVE_GX);
    const GY: Big = Big::from_limbs(bn254::CURVE_GY);
}

impl WeierstrassCurve for Bn254 {}

impl PairingCurve for Bn254 {
    const CURVE_B_I: isize = bn254::CURVE_B_I;
    const BNX: Big = Big::from_limbs(bn254::CURVE_BNX);
    const CRU: Big = Big::from_limbs(bn254::CURVE_CRU);
    const FRA: Big = Big::from_limbs(bn254::FRA);
    const FRB: Big = Big::from_limbs(bn254::FRB);
    const PXA: Big = Big::from_limbs(bn254::CURVE_PXA);
    const PXB: Big = Big::from_limbs(bn254::CURVE_PXB);
    const PYA: Big = Big::from_limbs(bn254::CURVE_PYA);
    const PYB: Big = Big::from_limbs(bn254::CURVE_PYB);
    const W: [Big; 2] = [
        Big::from_limbs(bn254::CURVE_W[0]),
        Big::from_limbs(bn254::CURVE_W[1]),
    ];
    const SB: [[Big; 2]; 2] = [
        [
            Big::from_limbs(bn254::CURVE_SB[0][0]),
            Big::from_limbs(bn254::CURVE_SB[0][1]),
        ],
        [
            Big::from_limbs(bn254::CURVE_SB[1][0]),
            Big::from_limbs(bn254::CURVE_SB[1][1]),
        ],
    ];
    const WB: [Big; 4] = [
        Big::from_limbs(bn254::CURVE_WB[0]),
        Big::from_limbs(bn254::CURVE_WB[1]),
        Big::from_limbs(bn254::CURVE_WB[2]),
        Big::from_limbs(bn254::CURVE_WB[3]),
    ];
    const BB: [[Big; 4]; 4] = bb_table();
    const GT_STRONG: bool = true;
}

const fn bb_table() -> [[Big; 4]; 4] {
    let mut t = [[Big::new(); 4]; 4];
    let mut i = 0;
    while i < 4 {
        let mut j = 0;
        while j < 4 {
            t[i][j] = Big::from_limbs(bn254::CURVE_BB[i][j]);
            j += 1;
        }
        i += 1;
    }
    t
}

/// NIST P-256, `y^2 = x^3 - 3x + b`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nist256;

impl CurveConfig for Nist256 {
    type Field = Nist256Fp;
    const NAME: &'static str = "NIST256";
    const CURVE_A: isize = nist256::CURVE_A;
    const CURVE_B: Big = Big::from_limbs(nist256::CURVE_B);
    const ORDER: Big = Big::from_limbs(nist256::CURVE_ORDER);
    const GX: Big = Big::from_limbs(nist256::CURVE_GX);
    const GY: Big = Big::from_limbs(nist256::CURVE_GY);
}

impl WeierstrassCurve for Nist256 {}

/// Ed25519, `-x^2 + y^2 = 1 + d x^2 y^2`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ed25519;

impl CurveConfig for Ed25519 {
    type Field = Fp25519;
    const NAME: &'static str = "ED25519";
    const CURVE_A: isize = ed25519::CURVE_A;
    const CURVE_B: Big = Big::from_limbs(ed25519::CURVE_B);
    const ORDER: Big = Big::from_limbs(ed25519::CURVE_ORDER);
    const GX: Big = Big::from_limbs(ed25519::CURVE_GX);
    const GY: Big = Big::from_limbs(ed25519::CURVE_GY);
}

impl EdwardsCurve for Ed25519 {}

/// Curve25519, `y^2 = x^3 + 486662 x^2 + x`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Curve25519;

impl CurveConfig for Curve25519 {
    type Field = Fp25519;
    const NAME: &'static str = "C25519";
    const CURVE_A: isize = c25519::CURVE_A;
    const ORDER: Big = Big::from_limbs(c25519::CURVE_ORDER);
    const GX: Big = Big::from_limbs(c25519::CURVE_GX);
}

impl MontgomeryCurve for Curve25519 {}

/// Weierstrass curve `y^2 = x^3 + 6` over a Montgomery-friendly prime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mf254;

impl CurveConfig for Mf254 {
    type Field = Mf254Fp;
    const NAME: &'static str = "MF254";
    const CURVE_A: isize = mf254::CURVE_A;
    const CURVE_B: Big = Big::from_limbs(mf254::CURVE_B);
    const ORDER: Big = Big::from_limbs(mf254::CURVE_ORDER);
    const GX: Big = Big::from_limbs(mf254::CURVE_GX);
    const GY: Big = Big::from_limbs(mf254::CURVE_GY);
}

impl WeierstrassCurve for Mf254 {}

// ============================================================================
// Type aliases
// ============================================================================

/// BN254 base field element
pub type Bn254Fq = Fp<Bn254Fp>;
/// Points of BN254 G1
pub type Bn254G1 = WeierstrassPoint<Bn254>;
/// Points of BN254 G2 on the sextic twist
pub type Bn254G2 = TwistPoint<Bn254>;
/// Elements of the BN254 target group
pub type Bn254Gt = Fp12<Bn254Fp>;
/// The BN254 optimal-ate pairing engine
pub type Bn254Pairing = Pairing<Bn254>;
/// NIST P-256 points
pub type Nist256Point = WeierstrassPoint<Nist256>;
/// Ed25519 points
pub type Ed25519Point = EdwardsPoint<Ed25519>;
/// Curve25519 x-only points
pub type Curve25519Point = MontgomeryPoint<Curve25519>;
/// MF254 points
pub type Mf254Point = WeierstrassPoint<Mf254>;
