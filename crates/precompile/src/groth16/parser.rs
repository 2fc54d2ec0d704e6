//! Capabilities a curve provides to the verifier: a Solidity calldata codec and a pairing engine.
use core::fmt::Debug;

/// Structural decoding failure of a calldata segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// Not enough bytes left for a G1 point.
    #[error("invalid G1 point")]
    InvalidG1,
    /// Not enough bytes left for one of the four G2 coordinates.
    #[error("invalid G2 point")]
    InvalidG2,
    /// The decoded verifying key could not be prepared for pairing.
    #[error("invalid verifying key")]
    InvalidVerifyingKey,
    /// Not enough bytes left for a public input.
    #[error("invalid public witness")]
    InvalidPublicWitness,
}

/// Performs the Groth16 verification equation.
///
/// The engine owns the curve types; a [`SolidityGroth16Parser`] produces them from bytes.
pub trait PairingEngine: Send + Sync + Debug + Default {
    /// Proof `(A, B, C)`.
    type Proof;
    /// Verifying key including its pairing precomputation.
    type VerifyingKey;
    /// Ordered public inputs.
    type PublicWitness;

    /// Returns `true` if `proof` is valid for `verifying_key` and `public_witness`.
    ///
    /// Invalid group elements make the proof invalid, they are not an error.
    fn verify(
        &self,
        proof: &Self::Proof,
        verifying_key: &Self::VerifyingKey,
        public_witness: &Self::PublicWitness,
    ) -> bool;
}

/// Decodes Groth16 artifacts serialized in the Solidity verifier layout.
///
/// Implementations read with bounds checks only; curve membership is left to the engine.
pub trait SolidityGroth16Parser: Send + Sync + Debug {
    /// Engine the decoded values are handed to.
    type Engine: PairingEngine;

    /// Parses `A || B || C`.
    fn parse_proof(
        &self,
        data: &[u8],
    ) -> Result<<Self::Engine as PairingEngine>::Proof, ParseError>;

    /// Parses `Alpha || Beta || Gamma || Delta` followed by `number_of_public_inputs + 1` IC
    /// points, then precomputes the pairing values of the key.
    fn parse_verifying_key(
        &self,
        data: &[u8],
        number_of_public_inputs: usize,
    ) -> Result<<Self::Engine as PairingEngine>::VerifyingKey, ParseError>;

    /// Parses `number_of_public_inputs` big-endian field elements.
    fn parse_public_witness(
        &self,
        data: &[u8],
        number_of_public_inputs: usize,
    ) -> Result<<Self::Engine as PairingEngine>::PublicWitness, ParseError>;
}
