//! BabyJubJub scalar multiplication precompile.
use super::{encode_point, read_subgroup_point, BabyJubJubAffine, Fr};
use crate::{
    babyjubjub_const::{AFFINE_POINT_LENGTH, MUL_GAS, MUL_INPUT_LENGTH},
    interface::{Precompile, PrecompileError},
    utilities::read_word,
};
use alloy_primitives::Bytes;
use ark_ff::PrimeField;

/// Multiplies a BabyJubJub point by a scalar.
///
/// Input is `x || y || scalar` (`96` bytes). The point must be a member of the prime order
/// subgroup; the scalar is reduced modulo the subgroup order. Output is the product encoded as
/// `x || y` (`64` bytes).
#[derive(Clone, Copy, Debug, Default)]
pub struct BabyJubJubMul;

impl Precompile for BabyJubJubMul {
    fn name(&self) -> &str {
        "BabyJubJubMul"
    }

    fn required_gas(&self, _input: &[u8]) -> u64 {
        MUL_GAS
    }

    fn run(&self, input: &[u8]) -> Result<Bytes, PrecompileError> {
        if input.len() != MUL_INPUT_LENGTH {
            return Err(PrecompileError::BabyJubJubInvalidInputLength);
        }

        let point = read_subgroup_point(input, 0)?;
        let scalar = read_word(input, AFFINE_POINT_LENGTH)
            .map(|word| Fr::from_be_bytes_mod_order(word))
            .ok_or(PrecompileError::BabyJubJubInvalidInputLength)?;
        let product: BabyJubJubAffine = (point * scalar).into();

        Ok(Bytes::copy_from_slice(&encode_point(&product)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::babyjubjub::test_utils::{encode_points, off_curve_point, point, torsion_point};
    use ark_ec::AffineRepr;
    use ark_ff::BigInteger;
    use proptest::prelude::*;
    use rstest::rstest;

    fn input(point: BabyJubJubAffine, scalar: [u8; 32]) -> Vec<u8> {
        let mut input = encode_points(&[point]);
        input.extend(scalar);
        input
    }

    fn scalar(k: u64) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&k.to_be_bytes());
        out
    }

    #[test]
    fn multiplies_point() {
        let out = BabyJubJubMul.execute(&input(point(3), scalar(5)), MUL_GAS).unwrap();
        assert_eq!(out.gas_used, 14_400);
        assert_eq!(out.bytes[..], encode_point(&point(15)));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    #[case::large(u64::MAX)]
    fn multiplies_generator(#[case] k: u64) {
        let out = BabyJubJubMul.run(&input(BabyJubJubAffine::generator(), scalar(k))).unwrap();
        assert_eq!(out[..], encode_point(&point(k)));
    }

    #[test]
    fn scalar_is_reduced_by_subgroup_order() {
        let order: [u8; 32] = Fr::MODULUS.to_bytes_be().try_into().unwrap();
        let out = BabyJubJubMul.run(&input(point(4), order)).unwrap();
        assert_eq!(out[..], encode_point(&BabyJubJubAffine::zero()));
    }

    #[rstest]
    #[case::off_curve(off_curve_point(), PrecompileError::BabyJubJubPointNotOnCurve)]
    #[case::torsion(torsion_point(), PrecompileError::BabyJubJubPointNotInSubgroup)]
    fn invalid_point(#[case] p: BabyJubJubAffine, #[case] expected: PrecompileError) {
        assert_eq!(BabyJubJubMul.run(&input(p, scalar(2))), Err(expected));
    }

    #[rstest]
    #[case::empty(0)]
    #[case::point_only(64)]
    #[case::long(97)]
    fn invalid_length(#[case] len: usize) {
        assert_eq!(
            BabyJubJubMul.run(&vec![0u8; len]),
            Err(PrecompileError::BabyJubJubInvalidInputLength)
        );
    }

    proptest! {
        #[test]
        fn mul_distributes(a in any::<u32>(), k in any::<u32>()) {
            let out = BabyJubJubMul.run(&input(point(a.into()), scalar(k.into()))).unwrap();
            prop_assert_eq!(&out[..], &encode_point(&point(u64::from(a) * u64::from(k)))[..]);
        }
    }
}
