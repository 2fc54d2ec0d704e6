//! Interface for the precompiles. It contains the precompile trait, the precompile result type,
//! the precompile output type, and the precompile error type.
use alloy_primitives::Bytes;
use core::fmt::Debug;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// A precompiled contract.
///
/// Implementations are stateless: every call decodes its input from scratch and shares nothing
/// with concurrent calls, so a single instance can serve any number of threads.
pub trait Precompile: Send + Sync + Debug {
    /// Stable identifier of the precompile.
    fn name(&self) -> &str;

    /// Gas charged for executing the precompile with `input`.
    ///
    /// Never fails. Malformed inputs still get a price, the error surfaces in [`Self::run`].
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Executes the precompile logic on the given input bytes.
    ///
    /// Output is never returned together with an error.
    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError>;

    /// Charges gas against `gas_limit` and runs the precompile.
    fn execute(&self, input: &[u8], gas_limit: u64) -> PrecompileResult {
        let gas_used = self.required_gas(input);
        if gas_used > gas_limit {
            return Err(PrecompileError::OutOfGas);
        }
        self.run(input).map(|bytes| PrecompileOutput::new(gas_used, bytes))
    }
}

/// Precompile error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PrecompileError {
    /// out of gas is the main error. Others are here just for completeness
    #[error("out of gas")]
    OutOfGas,
    /// The curve has no registered parameters or parser.
    #[error("unsupported curve")]
    Groth16UnsupportedCurve,
    /// Calldata length does not describe a proof, a key and at least one public input.
    #[error("invalid input length")]
    Groth16InvalidInputLength,
    /// The proof segment could not be decoded.
    #[error("invalid proof")]
    Groth16InvalidProof,
    /// The verifying key segment could not be decoded or precomputed.
    #[error("invalid verifying key")]
    Groth16InvalidVerifyingKey,
    /// The public input segment could not be decoded.
    #[error("invalid public witness")]
    Groth16InvalidPublicWitness,
    /// A fault was caught at the verification boundary.
    #[error("panic during Groth16 verification")]
    Groth16Panic,
    /// BabyJubJub input is not exactly the expected size.
    #[error("invalid input length")]
    BabyJubJubInvalidInputLength,
    /// BabyJubJub point does not satisfy the curve equation.
    #[error("point not on curve")]
    BabyJubJubPointNotOnCurve,
    /// BabyJubJub point is outside the prime order subgroup.
    #[error("point not in subgroup")]
    BabyJubJubPointNotInSubgroup,
    /// EdDSA input is not exactly six words.
    #[error("invalid input length")]
    EdDsaInvalidInputLength,
    /// EdDSA public key is not a subgroup point.
    #[error("public key is not on curve")]
    EdDsaPublicKeyNotOnCurve,
    /// EdDSA `R8` is not a subgroup point.
    #[error("r8 is not on curve")]
    EdDsaR8NotOnCurve,
    /// EdDSA `S` is not below the subgroup order.
    #[error("s is greater than suborder")]
    EdDsaInvalidS,
    /// Poseidon input is empty, unaligned or has too many words.
    #[error("invalid input length")]
    PoseidonInvalidInputLength,
    /// Poseidon input word is not below the field modulus.
    #[error("inputs values not inside finite field")]
    PoseidonInputNotInField,
    /// Catch-all variant for other errors
    #[error("{0}")]
    Other(String),
}

impl PrecompileError {
    /// Returns another error with the given message.
    pub fn other(err: impl Into<String>) -> Self {
        Self::Other(err.into())
    }

    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}
