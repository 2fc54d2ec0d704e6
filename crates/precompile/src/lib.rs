//! # privacy-precompile
//!
//! Precompiled contracts for privacy applications on EVM-like chains: Groth16 proof verification
//! over BN254, BabyJubJub point arithmetic, Poseidon EdDSA verification and the Poseidon hash.
//!
//! Every precompile implements [`Precompile`]. Calls are independent and stateless, instances can
//! be shared freely between threads.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[cfg(feature = "babyjubjub")]
pub mod babyjubjub;
pub mod babyjubjub_const;
pub mod groth16;
pub mod interface;
#[cfg(feature = "poseidon")]
pub mod poseidon;
pub mod utilities;

pub use groth16::{CurveId, Groth16Verify, MAX_PUBLIC_INPUTS};
pub use interface::*;

/// Calculate the linear cost of a precompile.
#[inline]
pub const fn calc_linear_cost_u32(len: usize, base: u64, word: u64) -> u64 {
    (len as u64).div_ceil(32) * word + base
}
