//! Fixed-width multiprecision integers
//!
//! [`Big`] holds [`NLEN`](milagro_params::arch::NLEN) signed limbs of
//! [`BASEBITS`](milagro_params::arch::BASEBITS) bits each, leaving headroom
//! in every limb so additions can be chained before carries are propagated.
//! [`DBig`] holds double-width products ahead of modular reduction.
//!
//! Comparison, bit-length, division and inversion here run in variable time
//! and are meant for public values. Secret-dependent selection goes through
//! [`Big::cmove`] and [`Big::cswap`].

mod arith;
mod big;
mod dbig;


pub(crate) use arith::muladd;
pub use big::Big;
pub use dbig::DBig;
