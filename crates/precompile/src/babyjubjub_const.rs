// Constants related to the BabyJubJub gas schedule and precompile inputs.
//
// These stay available without the `babyjubjub` feature: the Groth16 gas model prices every
// public input as one BabyJubJub addition plus one scalar multiplication.

/// Gas cost of adding two BabyJubJub points.
pub const ADD_GAS: u64 = 12_300;
/// Gas cost of a BabyJubJub scalar multiplication.
pub const MUL_GAS: u64 = 14_400;
/// Gas cost of checking curve and subgroup membership of a BabyJubJub point.
pub const VALIDATE_POINT_GAS: u64 = 10_000;
/// Gas cost of verifying a Poseidon EdDSA signature.
pub const EDDSA_VERIFY_GAS: u64 = 270_000;

/// FIELD_LENGTH specifies the number of bytes of a big-endian coordinate or scalar.
pub const FIELD_LENGTH: usize = 32;
/// AFFINE_POINT_LENGTH specifies the number of bytes of an `X || Y` encoded point.
pub const AFFINE_POINT_LENGTH: usize = 2 * FIELD_LENGTH;

/// Input length of the add precompile, two points.
pub const ADD_INPUT_LENGTH: usize = 2 * AFFINE_POINT_LENGTH;
/// Input length of the mul precompile, a point followed by a scalar.
pub const MUL_INPUT_LENGTH: usize = AFFINE_POINT_LENGTH + FIELD_LENGTH;
/// Input length of the point validation precompile.
pub const VALIDATE_POINT_INPUT_LENGTH: usize = AFFINE_POINT_LENGTH;
/// Input length of the EdDSA precompile: public key, R8, S and message.
pub const EDDSA_VERIFY_INPUT_LENGTH: usize = 6 * FIELD_LENGTH;
