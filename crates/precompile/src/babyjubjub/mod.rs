//! # BabyJubJub precompiles
//!
//! BabyJubJub is the twisted Edwards curve `168700·x² + y² = 1 + 168696·x²·y²` defined over the
//! BN254 scalar field, so its arithmetic is cheap inside BN254 circuits. Points are encoded as
//! `x || y`, two 32-byte big-endian coordinates. The identity is `(0, 1)`.
use crate::{
    babyjubjub_const::{AFFINE_POINT_LENGTH, FIELD_LENGTH},
    interface::PrecompileError,
    utilities::read_word,
};
use ark_ec::{
    twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig},
    CurveConfig,
};
use ark_ff::{BigInteger, MontFp, PrimeField};

pub mod add;
pub mod eddsa;
pub mod mul;
pub mod validation;

pub use add::BabyJubJubAdd;
pub use eddsa::BabyJubJubEdDsaVerify;
pub use mul::BabyJubJubMul;
pub use validation::BabyJubJubValidatePoint;

/// Base field of BabyJubJub, the BN254 scalar field.
pub type Fq = ark_bn254::Fr;
/// Scalar field of the prime order subgroup.
pub type Fr = ark_ed_on_bn254::Fr;
/// Affine BabyJubJub point.
pub type BabyJubJubAffine = Affine<BabyJubJubConfig>;
/// Projective BabyJubJub point.
pub type BabyJubJubProjective = Projective<BabyJubJubConfig>;

/// Curve constants of BabyJubJub in its iden3 parametrization.
///
/// `ark-ed-on-bn254` ships the same group scaled to `a = 1`, whose coordinates differ from the
/// ones circuits and wallets use, so the curve is declared here with the iden3 coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BabyJubJubConfig;

impl CurveConfig for BabyJubJubConfig {
    type BaseField = Fq;
    type ScalarField = Fr;

    /// COFACTOR = 8
    const COFACTOR: &'static [u64] = &[8];

    /// COFACTOR^(-1) mod l
    const COFACTOR_INV: Fr = MontFp!(
        "2394026564107420727433200628387514462817212225638746351800188703329891451411"
    );
}

impl TECurveConfig for BabyJubJubConfig {
    /// COEFF_A = 168700
    const COEFF_A: Fq = MontFp!("168700");

    /// COEFF_D = 168696
    const COEFF_D: Fq = MontFp!("168696");

    /// Base point `B8`, the generator of the prime order subgroup.
    const GENERATOR: BabyJubJubAffine = BabyJubJubAffine::new_unchecked(B8_X, B8_Y);

    type MontCurveConfig = BabyJubJubConfig;
}

impl MontCurveConfig for BabyJubJubConfig {
    /// COEFF_A = 168698
    const COEFF_A: Fq = MontFp!("168698");

    /// COEFF_B = 1
    const COEFF_B: Fq = MontFp!("1");

    type TECurveConfig = BabyJubJubConfig;
}

/// x coordinate of `B8`.
pub const B8_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");

/// y coordinate of `B8`.
pub const B8_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

/// Reads the `index`-th point of `input`. Coordinates are reduced into the base field.
///
/// The point is not checked to be on the curve.
pub fn read_point(input: &[u8], index: usize) -> Option<BabyJubJubAffine> {
    let offset = index.checked_mul(AFFINE_POINT_LENGTH)?;
    let x = read_word(input, offset)?;
    let y = read_word(input, offset.checked_add(FIELD_LENGTH)?)?;
    Some(BabyJubJubAffine::new_unchecked(
        Fq::from_be_bytes_mod_order(x),
        Fq::from_be_bytes_mod_order(y),
    ))
}

/// Encodes a point as `x || y`.
pub fn encode_point(point: &BabyJubJubAffine) -> [u8; AFFINE_POINT_LENGTH] {
    let mut out = [0u8; AFFINE_POINT_LENGTH];
    out[..FIELD_LENGTH].copy_from_slice(&point.x.into_bigint().to_bytes_be());
    out[FIELD_LENGTH..].copy_from_slice(&point.y.into_bigint().to_bytes_be());
    out
}

/// Returns `true` if `point` is on the curve and in the prime order subgroup.
pub fn is_valid_point(point: &BabyJubJubAffine) -> bool {
    point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}

/// Reads the `index`-th point and checks that it is a subgroup element.
fn read_subgroup_point(input: &[u8], index: usize) -> Result<BabyJubJubAffine, PrecompileError> {
    let point = read_point(input, index).ok_or(PrecompileError::BabyJubJubInvalidInputLength)?;
    if !point.is_on_curve() {
        return Err(PrecompileError::BabyJubJubPointNotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PrecompileError::BabyJubJubPointNotInSubgroup);
    }
    Ok(point)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use ark_ec::AffineRepr;

    /// `k·B8`.
    pub(crate) fn point(k: u64) -> BabyJubJubAffine {
        (BabyJubJubAffine::generator() * Fr::from(k)).into()
    }

    /// A point of order two, on the curve but outside the prime order subgroup.
    pub(crate) fn torsion_point() -> BabyJubJubAffine {
        BabyJubJubAffine::new_unchecked(Fq::from(0u64), -Fq::from(1u64))
    }

    /// A point that does not satisfy the curve equation.
    pub(crate) fn off_curve_point() -> BabyJubJubAffine {
        BabyJubJubAffine::new_unchecked(Fq::from(1u64), Fq::from(2u64))
    }

    /// Concatenates encoded points.
    pub(crate) fn encode_points(points: &[BabyJubJubAffine]) -> Vec<u8> {
        points.iter().flat_map(encode_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{test_utils::*, *};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{One, Zero};
    use proptest::prelude::*;

    #[test]
    fn generator_is_valid() {
        let b8 = BabyJubJubAffine::generator();
        assert!(b8.is_on_curve());
        assert!(b8.is_in_correct_subgroup_assuming_on_curve());
        assert!((b8 * -Fr::one() + b8.into_group()).is_zero());
    }

    #[test]
    fn identity_encoding() {
        let mut expected = [0u8; 64];
        expected[63] = 1;
        assert_eq!(encode_point(&BabyJubJubAffine::zero()), expected);
        assert_eq!(read_point(&expected, 0), Some(BabyJubJubAffine::zero()));
    }

    #[test]
    fn torsion_point_is_rejected() {
        let point = torsion_point();
        assert!(point.is_on_curve());
        assert!(!is_valid_point(&point));
        assert_eq!(
            read_subgroup_point(&encode_point(&point), 0),
            Err(PrecompileError::BabyJubJubPointNotInSubgroup)
        );
    }

    #[test]
    fn off_curve_point_is_rejected() {
        assert_eq!(
            read_subgroup_point(&encode_point(&off_curve_point()), 0),
            Err(PrecompileError::BabyJubJubPointNotOnCurve)
        );
    }

    #[test]
    fn read_point_bounds() {
        let input = encode_points(&[point(1), point(2)]);
        assert_eq!(read_point(&input, 1), Some(point(2)));
        assert_eq!(read_point(&input[..127], 1), None);
        assert_eq!(read_point(&input, usize::MAX), None);
    }

    #[test]
    fn coordinates_are_reduced() {
        // (p, 1 + p) is the identity once reduced
        let modulus = Fq::MODULUS.to_bytes_be();
        let mut input = [0u8; 64];
        input[..32].copy_from_slice(&modulus);
        input[32..].copy_from_slice(&modulus);
        input[63] += 1;
        assert_eq!(read_point(&input, 0), Some(BabyJubJubAffine::zero()));
    }

    proptest! {
        #[test]
        fn encode_read_round_trip(k in any::<u64>()) {
            let p = point(k);
            prop_assert_eq!(read_point(&encode_point(&p), 0), Some(p));
            prop_assert!(is_valid_point(&p));
            prop_assert_eq!(p, p.into_group().into_affine());
        }
    }
}
