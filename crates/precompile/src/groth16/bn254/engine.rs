use super::{Proof, PublicWitness, VerifyingKey};
use crate::groth16::parser::PairingEngine;
use ark_bn254::Bn254;
use ark_groth16::Groth16;
use ark_snark::SNARK;

/// BN254 pairing engine backed by `ark-groth16`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArkworksBn254;

impl PairingEngine for ArkworksBn254 {
    type Proof = Proof;
    type VerifyingKey = VerifyingKey;
    type PublicWitness = PublicWitness;

    fn verify(
        &self,
        proof: &Proof,
        verifying_key: &VerifyingKey,
        public_witness: &PublicWitness,
    ) -> bool {
        // Off-curve or small subgroup elements never verify.
        if !proof.is_valid() || !verifying_key.is_valid() {
            return false;
        }
        Groth16::<Bn254>::verify_with_processed_vk(
            verifying_key.prepared(),
            &public_witness.scalars(),
            &proof.to_ark(),
        )
        .unwrap_or(false)
    }
}
