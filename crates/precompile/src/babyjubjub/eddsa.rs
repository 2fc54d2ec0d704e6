//! Poseidon EdDSA signature verification over BabyJubJub.
//!
//! Signatures follow the iden3 scheme: with public key `A`, nonce point `R8`, scalar `S` and
//! message `M`, the challenge is `hm = Poseidon(R8.x, R8.y, A.x, A.y, M)` and the signature is
//! valid iff `S·B8 == R8 + 8·hm·A`.
use super::{is_valid_point, read_point, BabyJubJubAffine, Fq, Fr};
use crate::{
    babyjubjub_const::{EDDSA_VERIFY_GAS, EDDSA_VERIFY_INPUT_LENGTH, FIELD_LENGTH},
    interface::{Precompile, PrecompileError},
    utilities::{bool_to_byte, read_canonical, read_word},
};
use alloy_primitives::Bytes;
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use light_poseidon::{Poseidon, PoseidonHasher};

/// Verifies a Poseidon EdDSA signature.
///
/// Input is `Ax || Ay || R8x || R8y || S || M` (`192` bytes). Output is `0x01` for a valid
/// signature and `0x00` otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct BabyJubJubEdDsaVerify;

impl Precompile for BabyJubJubEdDsaVerify {
    fn name(&self) -> &str {
        "BabyJubJubEdDSAVerify"
    }

    fn required_gas(&self, _input: &[u8]) -> u64 {
        EDDSA_VERIFY_GAS
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        if input.len() != EDDSA_VERIFY_INPUT_LENGTH {
            return Err(PrecompileError::EdDsaInvalidInputLength);
        }

        let public_key = read_point(input, 0)
            .filter(is_valid_point)
            .ok_or(PrecompileError::EdDsaPublicKeyNotOnCurve)?;
        let r8 = read_point(input, 1)
            .filter(is_valid_point)
            .ok_or(PrecompileError::EdDsaR8NotOnCurve)?;
        let s = read_word(input, 4 * FIELD_LENGTH)
            .and_then(read_canonical::<Fr>)
            .ok_or(PrecompileError::EdDsaInvalidS)?;
        let message = read_word(input, 5 * FIELD_LENGTH)
            .ok_or(PrecompileError::EdDsaInvalidInputLength)?;

        // A message outside the field cannot be hashed, so it cannot carry a valid signature.
        let Some(message) = read_canonical::<Fq>(message) else {
            return Ok(bool_to_byte(false));
        };

        Ok(bool_to_byte(verify(&public_key, &r8, s, message)))
    }
}

/// Checks `S·B8 == R8 + 8·hm·A` for subgroup points `public_key` and `r8`.
pub fn verify(public_key: &BabyJubJubAffine, r8: &BabyJubJubAffine, s: Fr, message: Fq) -> bool {
    let Some(hm) = challenge(public_key, r8, message) else {
        return false;
    };
    // A has order l, so the challenge can be reduced into the scalar field.
    let hm = Fr::from_le_bytes_mod_order(&hm.into_bigint().to_bytes_le());

    let left = BabyJubJubAffine::generator() * s;
    let right = *public_key * (hm * Fr::from(8u64)) + r8;
    left == right
}

/// Computes `Poseidon(R8.x, R8.y, A.x, A.y, M)`.
pub fn challenge(public_key: &BabyJubJubAffine, r8: &BabyJubJubAffine, message: Fq) -> Option<Fq> {
    let mut poseidon = Poseidon::<Fq>::new_circom(5).ok()?;
    poseidon
        .hash(&[r8.x, r8.y, public_key.x, public_key.y, message])
        .ok()
}
