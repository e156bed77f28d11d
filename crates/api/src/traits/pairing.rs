//! Bilinear pairing engine interface

use crate::Result;

/// A type-3 pairing `e: G2 x G1 -> GT` with its group operations
///
/// Scalars are plain integers below the group order; implementations do
/// not reduce them.
pub trait PairingEngine {
    /// Points on the base curve
    type G1;
    /// Points on the twist
    type G2;
    /// Elements of the target group
    type Gt;
    /// Scalar type shared by the three groups
    type Scalar;

    /// Evaluate `e(p, q)` including the final exponentiation
    ///
    /// Fails with [`Error::DegeneratePairing`](crate::Error::DegeneratePairing)
    /// when either input is the point at infinity.
    fn pairing(p: &Self::G2, q: &Self::G1) -> Result<Self::Gt>;

    /// Evaluate `e(p, q) * e(r, s)` sharing the Miller loop
    fn double_pairing(p: &Self::G2, q: &Self::G1, r: &Self::G2, s: &Self::G1) -> Result<Self::Gt>;

    /// Scalar multiplication in G1
    fn g1_mul(p: &Self::G1, e: &Self::Scalar) -> Self::G1;

    /// Scalar multiplication in G2
    fn g2_mul(p: &Self::G2, e: &Self::Scalar) -> Self::G2;

    /// Exponentiation in GT
    fn gt_pow(g: &Self::Gt, e: &Self::Scalar) -> Self::Gt;

    /// Whether `g` lies in the order-r subgroup of the target group
    fn gt_member(g: &Self::Gt) -> bool;
}
