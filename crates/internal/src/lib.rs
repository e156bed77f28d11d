//! Internal utilities for the milagro engine
//!
//! Every secret-dependent selection in the arithmetic layers goes through
//! the primitives in [`constant_time`], so the branch-free code lives in one
//! place.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;

pub use constant_time::{ct_assign, ct_eq, ct_index_eq, ct_is_negative, ct_lookup, ct_swap};
