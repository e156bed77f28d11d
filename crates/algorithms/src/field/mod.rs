//! Prime fields and the `Fp2 / Fp4 / Fp12` extension tower
//!
//! Field elements are generic over a [`FieldConfig`] marker that fixes the
//! modulus and its [`ModularReduction`] strategy at compile time. Addition
//! is lazy: limbs are allowed to grow and are only reduced once the tracked
//! excess could overflow a product.

/// Operator impls forwarding to the inherent `add`, `sub`, `mul` and `neg`
/// of a field type generic over `F: FieldConfig`
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl<'a, 'b, F: $crate::field::FieldConfig> core::ops::Add<&'b $t<F>> for &'a $t<F> {
            type Output = $t<F>;

            #[inline]
            fn add(self, rhs: &'b $t<F>) -> $t<F> {
                $t::<F>::add(self, rhs)
            }
        }

        impl<'a, 'b, F: $crate::field::FieldConfig> core::ops::Sub<&'b $t<F>> for &'a $t<F> {
            type Output = $t<F>;

            #[inline]
            fn sub(self, rhs: &'b $t<F>) -> $t<F> {
                $t::<F>::sub(self, rhs)
            }
        }

        impl<'a, 'b, F: $crate::field::FieldConfig> core::ops::Mul<&'b $t<F>> for &'a $t<F> {
            type Output = $t<F>;

            #[inline]
            fn mul(self, rhs: &'b $t<F>) -> $t<F> {
                $t::<F>::mul(self, rhs)
            }
        }

        impl<'a, F: $crate::field::FieldConfig> core::ops::Neg for &'a $t<F> {
            type Output = $t<F>;

            #[inline]
            fn neg(self) -> $t<F> {
                $t::<F>::neg(self)
            }
        }

        impl<F: $crate::field::FieldConfig> core::ops::Neg for $t<F> {
            type Output = $t<F>;

            #[inline]
            fn neg(self) -> $t<F> {
                $t::<F>::neg(&self)
            }
        }

        impl_field_ops!(@owned $t, Add, add, AddAssign, add_assign);
        impl_field_ops!(@owned $t, Sub, sub, SubAssign, sub_assign);
        impl_field_ops!(@owned $t, Mul, mul, MulAssign, mul_assign);
    };

    (@owned $t:ident, $op:ident, $f:ident, $assign:ident, $fa:ident) => {
        impl<'b, F: $crate::field::FieldConfig> core::ops::$op<&'b $t<F>> for $t<F> {
            type Output = $t<F>;

            #[inline]
            fn $f(self, rhs: &'b $t<F>) -> $t<F> {
                $t::<F>::$f(&self, rhs)
            }
        }

        impl<'a, F: $crate::field::FieldConfig> core::ops::$op<$t<F>> for &'a $t<F> {
            type Output = $t<F>;

            #[inline]
            fn $f(self, rhs: $t<F>) -> $t<F> {
                $t::<F>::$f(self, &rhs)
            }
        }

        impl<F: $crate::field::FieldConfig> core::ops::$op<$t<F>> for $t<F> {
            type Output = $t<F>;

            #[inline]
            fn $f(self, rhs: $t<F>) -> $t<F> {
                $t::<F>::$f(&self, &rhs)
            }
        }

        impl<F: $crate::field::FieldConfig> core::ops::$assign<$t<F>> for $t<F> {
            #[inline]
            fn $fa(&mut self, rhs: $t<F>) {
                *self = $t::<F>::$f(self, &rhs);
            }
        }

        impl<'b, F: $crate::field::FieldConfig> core::ops::$assign<&'b $t<F>> for $t<F> {
            #[inline]
            fn $fa(&mut self, rhs: &'b $t<F>) {
                *self = $t::<F>::$f(self, rhs);
            }
        }
    };
}

mod config;
mod fp;
mod fp12;
mod fp2;
mod fp4;
mod reduce;

#[cfg(test)]
mod tests;

pub use config::FieldConfig;
pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp4::Fp4;
pub use reduce::{GenericMontgomery, ModularReduction, MontgomeryFriendly, PseudoMersenne};
