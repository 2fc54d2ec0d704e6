//! Groth16 over BN254: wire constants, decoded value types, codec and pairing engine.
//!
//! Points are kept as raw affine coordinates after decoding. Curve and subgroup membership are
//! only checked by the [`ArkworksBn254`] engine, so a corrupted point makes the proof invalid
//! instead of failing to parse.
use super::parser::ParseError;
use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{PrimeField, Zero};
use ark_groth16::{Groth16, PreparedVerifyingKey};
use ark_snark::SNARK;
use core::fmt;

mod engine;
mod parser;
#[cfg(test)]
pub(crate) mod test_utils;

pub use engine::ArkworksBn254;
pub use parser::{
    parse_g1, parse_g2, serialize_g1, serialize_g2, serialize_proof, serialize_public_witness,
    serialize_verifying_key, SolidityBn254Parser,
};

/// Base gas cost of verifying a BN254 Groth16 proof, before public inputs are priced.
pub const BASE_GAS: u64 = 220_000;
/// Byte size of a base field element.
pub const FIELD_SIZE: usize = 32;
/// Byte size of an uncompressed affine G1 point, `X || Y`.
pub const G1_SIZE: usize = 2 * FIELD_SIZE;
/// Byte size of an uncompressed affine G2 point, `X.A1 || X.A0 || Y.A1 || Y.A0`.
pub const G2_SIZE: usize = 4 * FIELD_SIZE;
/// Byte size of a proof, `A (G1) || B (G2) || C (G1)`.
pub const PROOF_SIZE: usize = 2 * G1_SIZE + G2_SIZE;
/// Byte size of the fixed part of a verifying key, `Alpha (G1) || Beta || Gamma || Delta (G2)`.
pub const VERIFYING_KEY_SIZE: usize = G1_SIZE + 3 * G2_SIZE;
/// Byte size of one public input.
pub const PUBLIC_INPUT_SIZE: usize = 32;

/// Affine G1 point. `(0, 0)` encodes the point at infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Point {
    /// X coordinate.
    pub x: Fq,
    /// Y coordinate.
    pub y: Fq,
}

impl G1Point {
    /// Returns a point from its affine coordinates.
    pub const fn new(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    /// Converts to an arkworks point without any membership check.
    pub fn to_affine(&self) -> G1Affine {
        if self.x.is_zero() && self.y.is_zero() {
            G1Affine::zero()
        } else {
            G1Affine::new_unchecked(self.x, self.y)
        }
    }

    /// Returns `true` if the point is infinity or a member of the prime order subgroup.
    pub fn is_valid(&self) -> bool {
        let point = self.to_affine();
        point.is_zero() || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
    }
}

impl From<G1Affine> for G1Point {
    fn from(point: G1Affine) -> Self {
        if point.infinity {
            Self::default()
        } else {
            Self::new(point.x, point.y)
        }
    }
}

/// Affine G2 point over `Fq2`. All-zero coordinates encode the point at infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Point {
    /// X coordinate.
    pub x: Fq2,
    /// Y coordinate.
    pub y: Fq2,
}

impl G2Point {
    /// Returns a point from its affine coordinates.
    pub const fn new(x: Fq2, y: Fq2) -> Self {
        Self { x, y }
    }

    /// Converts to an arkworks point without any membership check.
    pub fn to_affine(&self) -> G2Affine {
        if self.x.is_zero() && self.y.is_zero() {
            G2Affine::zero()
        } else {
            G2Affine::new_unchecked(self.x, self.y)
        }
    }

    /// Returns `true` if the point is infinity or a member of the prime order subgroup.
    pub fn is_valid(&self) -> bool {
        let point = self.to_affine();
        point.is_zero() || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
    }
}

impl From<G2Affine> for G2Point {
    fn from(point: G2Affine) -> Self {
        if point.infinity {
            Self::default()
        } else {
            Self::new(point.x, point.y)
        }
    }
}

/// Groth16 proof.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Proof {
    /// `A`, in G1.
    pub a: G1Point,
    /// `B`, in G2.
    pub b: G2Point,
    /// `C`, in G1.
    pub c: G1Point,
}

impl Proof {
    /// Returns `true` if all three elements are valid group elements.
    pub fn is_valid(&self) -> bool {
        self.a.is_valid() && self.b.is_valid() && self.c.is_valid()
    }

    /// Converts to the arkworks representation.
    pub fn to_ark(&self) -> ark_groth16::Proof<Bn254> {
        ark_groth16::Proof {
            a: self.a.to_affine(),
            b: self.b.to_affine(),
            c: self.c.to_affine(),
        }
    }
}

impl From<&ark_groth16::Proof<Bn254>> for Proof {
    fn from(proof: &ark_groth16::Proof<Bn254>) -> Self {
        Self {
            a: proof.a.into(),
            b: proof.b.into(),
            c: proof.c.into(),
        }
    }
}

/// Groth16 verifying key with its pairing precomputation.
///
/// `ic` always holds one point more than there are public inputs.
pub struct VerifyingKey {
    /// `Alpha`, in G1.
    pub alpha: G1Point,
    /// `Beta`, in G2.
    pub beta: G2Point,
    /// `Gamma`, in G2.
    pub gamma: G2Point,
    /// `Delta`, in G2.
    pub delta: G2Point,
    /// Input commitments, `IC[0]` is the constant term.
    pub ic: Vec<G1Point>,
    prepared: PreparedVerifyingKey<Bn254>,
}

impl VerifyingKey {
    /// Builds a verifying key and precomputes `e(Alpha, Beta)`, `-Gamma` and `-Delta`.
    ///
    /// Fails if `ic` is empty or the precomputation fails.
    pub fn new(
        alpha: G1Point,
        beta: G2Point,
        gamma: G2Point,
        delta: G2Point,
        ic: Vec<G1Point>,
    ) -> Result<Self, ParseError> {
        if ic.is_empty() {
            return Err(ParseError::InvalidVerifyingKey);
        }
        let vk = ark_groth16::VerifyingKey::<Bn254> {
            alpha_g1: alpha.to_affine(),
            beta_g2: beta.to_affine(),
            gamma_g2: gamma.to_affine(),
            delta_g2: delta.to_affine(),
            gamma_abc_g1: ic.iter().map(G1Point::to_affine).collect(),
        };
        let prepared =
            Groth16::<Bn254>::process_vk(&vk).map_err(|_| ParseError::InvalidVerifyingKey)?;
        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            ic,
            prepared,
        })
    }

    /// Number of public inputs the key accepts.
    pub fn number_of_public_inputs(&self) -> usize {
        self.ic.len() - 1
    }

    /// Pairing-ready form of the key.
    pub fn prepared(&self) -> &PreparedVerifyingKey<Bn254> {
        &self.prepared
    }

    /// Returns `true` if every element of the key is a valid group element.
    pub fn is_valid(&self) -> bool {
        self.alpha.is_valid()
            && self.beta.is_valid()
            && self.gamma.is_valid()
            && self.delta.is_valid()
            && self.ic.iter().all(G1Point::is_valid)
    }
}

impl TryFrom<&ark_groth16::VerifyingKey<Bn254>> for VerifyingKey {
    type Error = ParseError;

    fn try_from(vk: &ark_groth16::VerifyingKey<Bn254>) -> Result<Self, Self::Error> {
        Self::new(
            vk.alpha_g1.into(),
            vk.beta_g2.into(),
            vk.gamma_g2.into(),
            vk.delta_g2.into(),
            vk.gamma_abc_g1.iter().copied().map(Into::into).collect(),
        )
    }
}

impl PartialEq for VerifyingKey {
    fn eq(&self, other: &Self) -> bool {
        self.alpha == other.alpha
            && self.beta == other.beta
            && self.gamma == other.gamma
            && self.delta == other.delta
            && self.ic == other.ic
    }
}

impl Eq for VerifyingKey {}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("alpha", &self.alpha)
            .field("beta", &self.beta)
            .field("gamma", &self.gamma)
            .field("delta", &self.delta)
            .field("ic", &self.ic)
            .finish_non_exhaustive()
    }
}

/// Public inputs as raw big-endian integers.
///
/// Values are not required to be below the scalar field modulus; they are reduced when
/// converted with [`PublicWitness::scalars`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PublicWitness {
    inputs: Vec<[u8; PUBLIC_INPUT_SIZE]>,
}

impl PublicWitness {
    /// Returns a witness from raw big-endian words.
    pub fn new(inputs: Vec<[u8; PUBLIC_INPUT_SIZE]>) -> Self {
        Self { inputs }
    }

    /// Raw input words in order.
    pub fn inputs(&self) -> &[[u8; PUBLIC_INPUT_SIZE]] {
        &self.inputs
    }

    /// Number of public inputs.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns `true` if there are no public inputs.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Inputs reduced into the scalar field.
    pub fn scalars(&self) -> Vec<Fr> {
        self.inputs
            .iter()
            .map(|input| Fr::from_be_bytes_mod_order(input))
            .collect()
    }
}

impl From<&[Fr]> for PublicWitness {
    fn from(scalars: &[Fr]) -> Self {
        Self::new(scalars.iter().map(parser::fr_to_bytes).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifying_key_without_ic_is_rejected() {
        let g1 = G1Point::from(G1Affine::generator());
        let g2 = G2Point::from(G2Affine::generator());
        assert_eq!(
            VerifyingKey::new(g1, g2, g2, g2, Vec::new()),
            Err(ParseError::InvalidVerifyingKey)
        );
    }

    #[test]
    fn verifying_key_with_constant_term_only() {
        let g1 = G1Point::from(G1Affine::generator());
        let g2 = G2Point::from(G2Affine::generator());
        let vk = VerifyingKey::new(g1, g2, g2, g2, vec![g1]).unwrap();
        assert_eq!(vk.number_of_public_inputs(), 0);
        assert!(vk.is_valid());
    }
}
