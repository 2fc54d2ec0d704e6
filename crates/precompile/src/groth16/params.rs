//! Curve parameter registry.
//!
//! Every curve the verifier can decode has one immutable [`CurveParameters`] entry. The table is
//! a `match` over [`CurveId`], so it is fixed at compile time and shared by all callers without
//! synchronization. Registering a curve means adding its arm here and its parser in
//! [`super::precompile`].
use super::bn254;
use core::fmt;

/// Identifier of a pairing-friendly curve.
///
/// Not every identifier has registered parameters, see [`CurveId::parameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    /// BN254, also known as alt_bn128.
    Bn254,
    /// BLS12-381.
    Bls12_381,
    /// BLS12-377.
    Bls12_377,
    /// BW6-761.
    Bw6_761,
}

impl CurveId {
    /// Returns the curve name used in precompile names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bn254 => "bn254",
            Self::Bls12_381 => "bls12_381",
            Self::Bls12_377 => "bls12_377",
            Self::Bw6_761 => "bw6_761",
        }
    }

    /// Looks up the serialization sizes and base gas of the curve.
    ///
    /// Returns `None` for curves the verifier does not support.
    pub const fn parameters(self) -> Option<&'static CurveParameters> {
        match self {
            Self::Bn254 => Some(&BN254),
            Self::Bls12_381 | Self::Bls12_377 | Self::Bw6_761 => None,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialization sizes and base gas of one curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurveParameters {
    /// Byte size of a serialized proof, `A || B || C`.
    pub proof_size: usize,
    /// Byte size of the fixed part of a verifying key, `Alpha || Beta || Gamma || Delta`.
    pub verifying_key_size: usize,
    /// Byte size of one G1 point.
    pub g1_size: usize,
    /// Byte size of one public input field element.
    pub public_input_size: usize,
    /// Gas charged before any public input is priced.
    pub base_gas: u64,
}

impl CurveParameters {
    /// Smallest input the verifier looks at: a proof and the fixed part of a verifying key.
    pub const fn min_input_size(&self) -> usize {
        self.proof_size + self.verifying_key_size
    }

    /// Byte size of a verifying key with `number_of_public_inputs + 1` IC points.
    pub const fn verifying_key_total_size(&self, number_of_public_inputs: usize) -> usize {
        self.verifying_key_size + self.g1_size * (number_of_public_inputs + 1)
    }
}

/// BN254 entry of the registry.
pub const BN254: CurveParameters = CurveParameters {
    proof_size: bn254::PROOF_SIZE,
    verifying_key_size: bn254::VERIFYING_KEY_SIZE,
    g1_size: bn254::G1_SIZE,
    public_input_size: bn254::PUBLIC_INPUT_SIZE,
    base_gas: bn254::BASE_GAS,
};
