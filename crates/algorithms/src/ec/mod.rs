//! Elliptic curve points in the three supported shapes and on the sextic
//! twist of a pairing-friendly curve
//!
//! Curves are compile-time markers implementing [`CurveConfig`] plus one of
//! the shape traits. Every point type is `Copy`, compares in constant time
//! across coordinate systems and returns new values from its group
//! operations.

/// Operator impls forwarding to the inherent `add`, `sub`, `neg` and `mul`
/// of a point type generic over a curve marker
macro_rules! impl_point_ops {
    ($t:ident, $bound:ident) => {
        impl<'a, 'b, C: $bound> core::ops::Add<&'b $t<C>> for &'a $t<C> {
            type Output = $t<C>;

            #[inline]
            fn add(self, rhs: &'b $t<C>) -> $t<C> {
                $t::<C>::add(self, rhs)
            }
        }

        impl<C: $bound> core::ops::Add<$t<C>> for $t<C> {
            type Output = $t<C>;

            #[inline]
            fn add(self, rhs: $t<C>) -> $t<C> {
                $t::<C>::add(&self, &rhs)
            }
        }

        impl<'a, 'b, C: $bound> core::ops::Sub<&'b $t<C>> for &'a $t<C> {
            type Output = $t<C>;

            #[inline]
            fn sub(self, rhs: &'b $t<C>) -> $t<C> {
                $t::<C>::sub(self, rhs)
            }
        }

        impl<C: $bound> core::ops::Sub<$t<C>> for $t<C> {
            type Output = $t<C>;

            #[inline]
            fn sub(self, rhs: $t<C>) -> $t<C> {
                $t::<C>::sub(&self, &rhs)
            }
        }

        impl<'a, C: $bound> core::ops::Neg for &'a $t<C> {
            type Output = $t<C>;

            #[inline]
            fn neg(self) -> $t<C> {
                $t::<C>::neg(self)
            }
        }

        impl<C: $bound> core::ops::Neg for $t<C> {
            type Output = $t<C>;

            #[inline]
            fn neg(self) -> $t<C> {
                $t::<C>::neg(&self)
            }
        }

        impl<C: $bound> core::ops::AddAssign<$t<C>> for $t<C> {
            #[inline]
            fn add_assign(&mut self, rhs: $t<C>) {
                *self = $t::<C>::add(self, &rhs);
            }
        }

        impl<C: $bound> core::ops::SubAssign<$t<C>> for $t<C> {
            #[inline]
            fn sub_assign(&mut self, rhs: $t<C>) {
                *self = $t::<C>::sub(self, &rhs);
            }
        }

        impl_point_ops!(@scalar $t, $bound);
    };

    (@scalar $t:ident, $bound:ident) => {
        impl<'a, 'b, C: $bound> core::ops::Mul<&'b $crate::bigint::Big> for &'a $t<C> {
            type Output = $t<C>;

            #[inline]
            fn mul(self, e: &'b $crate::bigint::Big) -> $t<C> {
                $t::<C>::mul(self, e)
            }
        }

        impl<'b, C: $bound> core::ops::Mul<&'b $crate::bigint::Big> for $t<C> {
            type Output = $t<C>;

            #[inline]
            fn mul(self, e: &'b $crate::bigint::Big) -> $t<C> {
                $t::<C>::mul(&self, e)
            }
        }
    };
}

mod config;
mod edwards;
mod montgomery;
mod scalar;
mod twist;
mod weierstrass;

pub use config::{
    Base, CurveConfig, EdwardsCurve, MontgomeryCurve, PairingCurve, WeierstrassCurve,
};
pub use edwards::EdwardsPoint;
pub use montgomery::MontgomeryPoint;
pub use twist::TwistPoint;
pub(crate) use twist::StepKind;
pub use weierstrass::WeierstrassPoint;

#[cfg(test)]
mod tests;
