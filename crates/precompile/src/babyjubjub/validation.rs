//! BabyJubJub point validation precompile.
use super::{is_valid_point, read_point};
use crate::{
    babyjubjub_const::{VALIDATE_POINT_GAS, VALIDATE_POINT_INPUT_LENGTH},
    interface::{Precompile, PrecompileError},
    utilities::bool_to_byte,
};
use alloy_primitives::Bytes;

/// Checks that a point is on BabyJubJub and in the prime order subgroup.
///
/// Input is `x || y` (`64` bytes). Output is `0x01` for a valid point and `0x00` otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct BabyJubJubValidatePoint;

impl Precompile for BabyJubJubValidatePoint {
    fn name(&self) -> &str {
        "BabyJubJubCurveValidatePoint"
    }

    fn required_gas(&self, _input: &[u8]) -> u64 {
        VALIDATE_POINT_GAS
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        if input.len() != VALIDATE_POINT_INPUT_LENGTH {
            return Err(PrecompileError::BabyJubJubInvalidInputLength);
        }
        let point = read_point(input, 0).ok_or(PrecompileError::BabyJubJubInvalidInputLength)?;
        Ok(bool_to_byte(is_valid_point(&point)))
    }
}
