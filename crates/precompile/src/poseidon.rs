//! # Poseidon hash precompile
//!
//! Hashes up to [`MAX_INPUTS`] BN254 scalar field elements with the circom parameters of
//! Poseidon, so results match circomlib circuits and `poseidon-solidity`.
use crate::{
    calc_linear_cost_u32,
    interface::{Precompile, PrecompileError},
    utilities::{read_canonical, read_word, WORD_LEN},
};
use alloy_primitives::Bytes;
use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::find_poseidon_ark_and_mds;
use ark_ff::{BigInteger, PrimeField};
use light_poseidon::{Poseidon, PoseidonError, PoseidonHasher, PoseidonParameters, MAX_X5_LEN};
use once_cell::race::OnceBox;

/// Base gas of a Poseidon hash.
pub const POSEIDON_BASE: u64 = 600;
/// Gas per 32-byte input word.
pub const POSEIDON_PER_WORD: u64 = 5_400;
/// Maximum number of field elements in one call.
pub const MAX_INPUTS: usize = 16;

/// Inputs covered by the parameters bundled with `light-poseidon`.
const BUNDLED_INPUTS: usize = MAX_X5_LEN - 1;
/// Input counts whose parameters are derived on first use.
const DERIVED_WIDTHS: usize = MAX_INPUTS - BUNDLED_INPUTS;

const FULL_ROUNDS: usize = 8;
/// Partial rounds of the circom parameters for 13 to 16 inputs.
const DERIVED_PARTIAL_ROUNDS: [usize; DERIVED_WIDTHS] = [70, 60, 64, 68];
const ALPHA: u64 = 5;

/// Round constants, flattened per round, and MDS matrix of one width.
struct RoundParameters {
    ark: Vec<Fr>,
    mds: Vec<Vec<Fr>>,
}

impl RoundParameters {
    /// Runs the Grain LFSR of the Poseidon reference script for `nr_inputs + 1` cells. This is
    /// how the circomlib constants were generated.
    fn derive(nr_inputs: usize, partial_rounds: usize) -> Self {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            Fr::MODULUS_BIT_SIZE as u64,
            nr_inputs,
            FULL_ROUNDS as u64,
            partial_rounds as u64,
            0,
        );
        Self {
            ark: ark.into_iter().flatten().collect(),
            mds,
        }
    }

    fn hasher(&self, nr_inputs: usize, partial_rounds: usize) -> Poseidon<Fr> {
        Poseidon::new(PoseidonParameters::new(
            self.ark.clone(),
            self.mds.clone(),
            FULL_ROUNDS,
            partial_rounds,
            nr_inputs + 1,
            ALPHA,
        ))
    }
}

static DERIVED_PARAMETERS: [OnceBox<RoundParameters>; DERIVED_WIDTHS] =
    [const { OnceBox::new() }; DERIVED_WIDTHS];

/// Returns the circom Poseidon hasher for `nr_inputs` elements.
fn circom_hasher(nr_inputs: usize) -> Result<Poseidon<Fr>, PoseidonError> {
    if nr_inputs <= BUNDLED_INPUTS {
        return Poseidon::<Fr>::new_circom(nr_inputs);
    }
    let index = nr_inputs - BUNDLED_INPUTS - 1;
    let (cache, partial_rounds) = DERIVED_PARAMETERS
        .get(index)
        .zip(DERIVED_PARTIAL_ROUNDS.get(index))
        .ok_or(PoseidonError::InvalidWidthCircom {
            width: nr_inputs + 1,
            max_limit: MAX_INPUTS + 1,
        })?;
    let params =
        cache.get_or_init(|| Box::new(RoundParameters::derive(nr_inputs, *partial_rounds)));
    Ok(params.hasher(nr_inputs, *partial_rounds))
}

/// Circom-compatible Poseidon hash over 32-byte big-endian field elements.
///
/// Input is `e1 || ... || eN` with `1 <= N <= 16`; each element must be below the BN254 scalar
/// field modulus. Output is the 32-byte big-endian hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoseidonHash;

impl Precompile for PoseidonHash {
    fn name(&self) -> &str {
        "Poseidon"
    }

    fn required_gas(&self, input: &[u8]) -> u64 {
        calc_linear_cost_u32(input.len(), POSEIDON_BASE, POSEIDON_PER_WORD)
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        if input.is_empty() || input.len() % WORD_LEN != 0 {
            return Err(PrecompileError::PoseidonInvalidInputLength);
        }
        let len = input.len() / WORD_LEN;
        if len > MAX_INPUTS {
            return Err(PrecompileError::PoseidonInvalidInputLength);
        }

        let elements = (0..len)
            .map(|i| {
                read_word(input, i * WORD_LEN)
                    .and_then(read_canonical::<Fr>)
                    .ok_or(PrecompileError::PoseidonInputNotInField)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let hash = circom_hasher(len)
            .and_then(|mut poseidon| poseidon.hash(&elements))
            .map_err(|e| PrecompileError::other(e.to_string()))?;

        Ok(hash.into_bigint().to_bytes_be().into())
    }
}
