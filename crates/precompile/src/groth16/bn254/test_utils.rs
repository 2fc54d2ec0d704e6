//! Groth16 fixtures generated with a throwaway setup.
use super::{
    serialize_proof, serialize_public_witness, serialize_verifying_key, Proof, PublicWitness,
    VerifyingKey,
};
use ark_bn254::{Bn254, Fr};
use ark_ff::One;
use ark_groth16::Groth16;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

/// Proves knowledge of a private copy of every public input.
#[derive(Clone)]
pub(crate) struct EqualityCircuit {
    pub(crate) inputs: Vec<Fr>,
}

impl ConstraintSynthesizer<Fr> for EqualityCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        for value in self.inputs {
            let public = FpVar::new_input(cs.clone(), || Ok(value))?;
            let private = FpVar::new_witness(cs.clone(), || Ok(value))?;
            public.enforce_equal(&private)?;
        }
        Ok(())
    }
}

/// Proves that the single public input `x` equals one.
#[derive(Clone)]
pub(crate) struct IsOneCircuit {
    pub(crate) x: Fr,
}

impl ConstraintSynthesizer<Fr> for IsOneCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let x = FpVar::new_input(cs.clone(), || Ok(self.x))?;
        let witness = FpVar::new_witness(cs, || Ok(self.x))?;
        x.enforce_equal(&witness)?;
        x.enforce_equal(&FpVar::Constant(Fr::one()))
    }
}

/// A proof, its verifying key and the public inputs it was made for.
pub(crate) struct Fixture {
    pub(crate) proof: Proof,
    pub(crate) vk: VerifyingKey,
    pub(crate) witness: PublicWitness,
}

impl Fixture {
    /// Runs setup and proving for an [`EqualityCircuit`] over `inputs`.
    pub(crate) fn new(inputs: &[Fr]) -> Self {
        Self::prove(
            EqualityCircuit {
                inputs: inputs.to_vec(),
            },
            inputs,
        )
    }

    /// Runs setup and proving for the `x == 1` circuit.
    pub(crate) fn is_one() -> Self {
        Self::prove(IsOneCircuit { x: Fr::one() }, &[Fr::one()])
    }

    /// Runs setup and proving for `circuit` whose public inputs are `inputs`.
    pub(crate) fn prove<C: ConstraintSynthesizer<Fr> + Clone>(circuit: C, inputs: &[Fr]) -> Self {
        let mut rng = StdRng::seed_from_u64(0);
        let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit.clone(), &mut rng)
            .expect("setup failed");
        let proof = Groth16::<Bn254>::prove(&pk, circuit, &mut rng).expect("proving failed");
        Self {
            proof: Proof::from(&proof),
            vk: VerifyingKey::try_from(&vk).expect("invalid verifying key"),
            witness: PublicWitness::from(inputs),
        }
    }

    /// Serializes `proof || vk || witness`.
    pub(crate) fn calldata(&self) -> Vec<u8> {
        let mut out = serialize_proof(&self.proof);
        out.extend(serialize_verifying_key(&self.vk));
        out.extend(serialize_public_witness(&self.witness));
        out
    }
}
