//! Gas model of the Groth16 verifier.
//!
//! Gas is a pure function of the input length and the curve parameters. It performs no bounds
//! validation and is only meant for metering: lengths the verifier rejects still get a price.
use super::params::{CurveId, CurveParameters};
use crate::babyjubjub_const::{ADD_GAS, MUL_GAS};

/// Gas charged per public input: folding one input into the key costs one scalar
/// multiplication and one point addition.
pub const PER_PUBLIC_INPUT_GAS: u64 = ADD_GAS + MUL_GAS;

/// Infers the number of public inputs from the input length.
///
/// The verifying key carries one IC point more than there are inputs, hence the extra
/// `g1_size` in the numerator. Division truncates toward zero and lengths shorter than the
/// fixed layout give zero or a negative count; callers validate the result.
#[inline]
pub fn number_of_public_inputs(input_len: usize, params: &CurveParameters) -> i64 {
    let fixed = params.proof_size + params.verifying_key_size + params.g1_size;
    let per_input = params.g1_size + params.public_input_size;
    (input_len as i64 - fixed as i64) / per_input as i64
}

/// Returns the gas for verifying `input` on `curve`, `0` if the curve is not registered.
///
/// A negative inferred count wraps like an unsigned cast would, producing a price no caller
/// can afford.
pub fn required_gas(curve: CurveId, input: &[u8]) -> u64 {
    let Some(params) = curve.parameters() else {
        return 0;
    };
    let number_of_public_inputs = number_of_public_inputs(input.len(), params);
    params
        .base_gas
        .wrapping_add(PER_PUBLIC_INPUT_GAS.wrapping_mul(number_of_public_inputs as u64))
}
