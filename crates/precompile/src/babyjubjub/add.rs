//! BabyJubJub point addition precompile.
use super::{encode_point, read_subgroup_point, BabyJubJubAffine};
use crate::{
    babyjubjub_const::{ADD_GAS, ADD_INPUT_LENGTH},
    interface::{Precompile, PrecompileError},
};
use alloy_primitives::Bytes;

/// Adds two BabyJubJub points.
///
/// Input is `x1 || y1 || x2 || y2` (`128` bytes). Both points must be members of the prime
/// order subgroup. Output is the sum encoded as `x || y` (`64` bytes).
///
/// An operand off the curve fails with [`PrecompileError::BabyJubJubPointNotOnCurve`] and one
/// outside the subgroup with [`PrecompileError::BabyJubJubPointNotInSubgroup`]. iden3 based
/// implementations report both cases as a single "not in subgroup" error.
#[derive(Clone, Copy, Debug, Default)]
pub struct BabyJubJubAdd;

impl Precompile for BabyJubJubAdd {
    fn name(&self) -> &str {
        "BabyJubJubCurveAdd"
    }

    fn required_gas(&self, _input: &[u8]) -> u64 {
        ADD_GAS
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        if input.len() != ADD_INPUT_LENGTH {
            return Err(PrecompileError::BabyJubJubInvalidInputLength);
        }

        let a = read_subgroup_point(input, 0)?;
        let b = read_subgroup_point(input, 1)?;
        let sum: BabyJubJubAffine = (a + b).into();

        Ok(Bytes::copy_from_slice(&encode_point(&sum)))
    }
}
