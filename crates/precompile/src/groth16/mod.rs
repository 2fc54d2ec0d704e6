//! # Groth16 verification precompile
//!
//! Verifies a Groth16 proof passed as Solidity verifier calldata:
//!
//! | proof | verifying key | public inputs |
//! | :---: | :-----------: | :-----------: |
//! | `proof_size` | `verifying_key_size + (n + 1) * g1_size` | `n * public_input_size` |
//!
//! The number of public inputs `n` is not encoded, it is inferred from the input length. Output
//! is `0x01` for a valid proof and `0x00` for an invalid one; only malformed calldata is an error.
use crate::{
    interface::{Precompile, PrecompileError},
    utilities::{bool_to_byte, safe_slice},
};
use alloy_primitives::Bytes;
use parser::{PairingEngine, SolidityGroth16Parser};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, trace};

pub mod bn254;
pub mod gas;
pub mod params;
pub mod parser;

pub use params::{CurveId, CurveParameters};

/// Maximum number of public inputs a proof may carry.
pub const MAX_PUBLIC_INPUTS: usize = 64;

/// Returns the Groth16 precompile for `curve`, `None` if no codec is registered for it.
pub fn precompile(curve: CurveId) -> Option<Box<dyn Precompile>> {
    match curve {
        CurveId::Bn254 => Some(Box::new(Groth16Verify::bn254())),
        CurveId::Bls12_381 | CurveId::Bls12_377 | CurveId::Bw6_761 => None,
    }
}

/// Groth16 verifier for one curve, generic over its calldata codec.
#[derive(Debug)]
pub struct Groth16Verify<P: SolidityGroth16Parser> {
    curve: CurveId,
    name: String,
    parser: P,
    engine: P::Engine,
}

impl Groth16Verify<bn254::SolidityBn254Parser> {
    /// Verifier over BN254, named `bn254Groth16Verify`.
    pub fn bn254() -> Self {
        Self::new(CurveId::Bn254, bn254::SolidityBn254Parser)
    }
}

impl<P: SolidityGroth16Parser> Groth16Verify<P> {
    /// Returns a verifier that decodes calldata for `curve` with `parser`.
    ///
    /// A curve without registered parameters is accepted here and rejected on every call.
    pub fn new(curve: CurveId, parser: P) -> Self {
        Self {
            curve,
            name: format!("{}Groth16Verify", curve.name()),
            parser,
            engine: P::Engine::default(),
        }
    }

    /// Curve the verifier decodes.
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Decodes `input` and checks the proof.
    ///
    /// Returns `Ok(false)` for a well-formed but invalid proof. A panic anywhere during decoding
    /// or pairing is caught and reported as [`PrecompileError::Groth16Panic`].
    pub fn verify(&self, input: &[u8]) -> Result<bool, PrecompileError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.verify_inner(input)))
            .unwrap_or(Err(PrecompileError::Groth16Panic))
    }

    fn verify_inner(&self, input: &[u8]) -> Result<bool, PrecompileError> {
        let params = self
            .curve
            .parameters()
            .ok_or(PrecompileError::Groth16UnsupportedCurve)?;

        if input.len() < params.min_input_size() {
            return Err(PrecompileError::Groth16InvalidInputLength);
        }

        let number_of_public_inputs = gas::number_of_public_inputs(input.len(), params);
        trace!(curve = %self.curve, number_of_public_inputs, "inferred public inputs");
        if number_of_public_inputs <= 0 || number_of_public_inputs > MAX_PUBLIC_INPUTS as i64 {
            return Err(PrecompileError::Groth16InvalidInputLength);
        }
        let n = number_of_public_inputs as usize;

        // Truncating division leaves any remainder after the witness unread.
        let proof_end = params.proof_size;
        let verifying_key_end = proof_end + params.verifying_key_total_size(n);
        let witness_end = verifying_key_end + n * params.public_input_size;

        let proof = self
            .parser
            .parse_proof(safe_slice(input, 0, proof_end).unwrap_or_default())
            .map_err(|_| PrecompileError::Groth16InvalidProof)?;
        let verifying_key = self
            .parser
            .parse_verifying_key(
                safe_slice(input, proof_end, verifying_key_end).unwrap_or_default(),
                n,
            )
            .map_err(|_| PrecompileError::Groth16InvalidVerifyingKey)?;
        let public_witness = self
            .parser
            .parse_public_witness(
                safe_slice(input, verifying_key_end, witness_end).unwrap_or_default(),
                n,
            )
            .map_err(|_| PrecompileError::Groth16InvalidPublicWitness)?;

        let valid = self.engine.verify(&proof, &verifying_key, &public_witness);
        debug!(curve = %self.curve, n, valid, "verified groth16 proof");
        Ok(valid)
    }
}

impl<P: SolidityGroth16Parser> Precompile for Groth16Verify<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_gas(&self, input: &[u8]) -> u64 {
        gas::required_gas(self.curve, input)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        self.verify(input).map(bool_to_byte)
    }
}
