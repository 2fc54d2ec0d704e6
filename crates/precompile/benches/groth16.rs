//! Benchmarks for the Groth16 verification precompile
use ark_bn254::{Bn254, Fr};
use ark_groth16::Groth16;
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use criterion::{measurement::Measurement, BenchmarkGroup};
use privacy_precompile::{
    groth16::bn254::{
        serialize_proof, serialize_public_witness, serialize_verifying_key, Proof, PublicWitness,
        VerifyingKey,
    },
    Groth16Verify, Precompile,
};

#[derive(Clone)]
struct Copies(Vec<Fr>);

impl ConstraintSynthesizer<Fr> for Copies {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        for value in self.0 {
            let public = FpVar::new_input(cs.clone(), || Ok(value))?;
            let private = FpVar::new_witness(cs.clone(), || Ok(value))?;
            public.enforce_equal(&private)?;
        }
        Ok(())
    }
}

fn calldata(n: u64) -> Vec<u8> {
    let inputs: Vec<Fr> = (1..=n).map(Fr::from).collect();
    let circuit = Copies(inputs.clone());
    let mut rng = StdRng::seed_from_u64(0);
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit.clone(), &mut rng).unwrap();
    let proof = Groth16::<Bn254>::prove(&pk, circuit, &mut rng).unwrap();

    let mut input = serialize_proof(&Proof::from(&proof));
    input.extend(serialize_verifying_key(&VerifyingKey::try_from(&vk).unwrap()));
    input.extend(serialize_public_witness(&PublicWitness::from(&inputs[..])));
    input
}

/// Add benches for the Groth16 verification precompile
pub fn add_benches<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let verifier = Groth16Verify::bn254();

    for n in [1, 8, 64] {
        let input = calldata(n);
        assert_eq!(verifier.run(&input).unwrap()[..], [1]);
        println!("gas used by groth16 verify with {n} inputs: {}", verifier.required_gas(&input));

        group.bench_function(format!("groth16 verify | {n} public inputs"), |b| {
            b.iter(|| verifier.run(&input).unwrap())
        });
    }
}
