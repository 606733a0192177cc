//! Pairing-based zkSNARKs for rank-1 constraint systems.
//!
//! A [`r1cs::ConstraintSystem`] is reduced either to a quadratic arithmetic
//! program ([`reduction::qap`], proved with [`groth16`]) or to a square span
//! program ([`reduction::sap`], proved with [`gm17`]). Both schemes share the
//! evaluation domain in [`poly`] and the exponentiation routines in [`msm`].
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::too_many_arguments)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// The SAP-based proving mode.
pub mod gm17;

/// The QAP-based proving mode.
pub mod groth16;

/// Multi-exponentiation, fixed-base tables and pairing products.
pub mod msm;

/// Evaluation domains and polynomials.
pub mod poly;

/// Rank-1 constraint systems.
pub mod r1cs;

/// Reductions from R1CS to QAP and SAP.
pub mod reduction;

/// Setup randomness.
pub mod toxic_waste;

/// Parallelism helpers.
pub mod utils;
