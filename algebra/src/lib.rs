//! Field, group and pairing abstractions used by the zkt proving system.
//!
//! Every proving routine is written against the traits in [`traits`] and is
//! instantiated with one of the concrete engines below.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BLS12-381 curve
pub mod bls12_381;

/// Module for the BN254 curve
pub mod bn254;

/// Module for error handling
pub mod errors;

/// Module for the prelude
pub mod prelude;

/// Module for test rngs
pub mod rand_helper;

/// Module for serialization of scalars and group elements
pub mod serialization;

/// Module for traits
pub mod traits;

/// Module for utils
pub mod utils;

#[doc(hidden)]
pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
