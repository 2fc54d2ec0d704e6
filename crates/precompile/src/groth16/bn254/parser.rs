use super::{
    ArkworksBn254, G1Point, G2Point, Proof, PublicWitness, VerifyingKey, FIELD_SIZE, G1_SIZE,
    G2_SIZE, PUBLIC_INPUT_SIZE,
};
use crate::{
    groth16::parser::{ParseError, SolidityGroth16Parser},
    utilities::read_word,
};
use ark_bn254::{Fq, Fq2, Fr};
use ark_ff::{BigInteger, PrimeField};

/// Solidity calldata codec for BN254.
///
/// Coordinates are big-endian and reduced modulo the base field on read.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolidityBn254Parser;

impl SolidityGroth16Parser for SolidityBn254Parser {
    type Engine = ArkworksBn254;

    fn parse_proof(&self, data: &[u8]) -> Result<Proof, ParseError> {
        let (a, offset) = parse_g1(data, 0)?;
        let (b, offset) = parse_g2(data, offset)?;
        let (c, _) = parse_g1(data, offset)?;
        Ok(Proof { a, b, c })
    }

    fn parse_verifying_key(
        &self,
        data: &[u8],
        number_of_public_inputs: usize,
    ) -> Result<VerifyingKey, ParseError> {
        let (alpha, offset) = parse_g1(data, 0)?;
        let (beta, offset) = parse_g2(data, offset)?;
        let (gamma, offset) = parse_g2(data, offset)?;
        let (delta, mut offset) = parse_g2(data, offset)?;

        let ic_len = number_of_public_inputs.saturating_add(1);
        // Never reserve more than the remaining bytes can hold.
        let mut ic = Vec::with_capacity(ic_len.min(data.len().saturating_sub(offset) / G1_SIZE));
        for _ in 0..ic_len {
            let (point, next) = parse_g1(data, offset)?;
            ic.push(point);
            offset = next;
        }

        VerifyingKey::new(alpha, beta, gamma, delta, ic)
    }

    fn parse_public_witness(
        &self,
        data: &[u8],
        number_of_public_inputs: usize,
    ) -> Result<PublicWitness, ParseError> {
        let mut inputs =
            Vec::with_capacity(number_of_public_inputs.min(data.len() / PUBLIC_INPUT_SIZE));
        let mut offset = 0;
        for _ in 0..number_of_public_inputs {
            let word = read_word(data, offset).ok_or(ParseError::InvalidPublicWitness)?;
            inputs.push(*word);
            offset += PUBLIC_INPUT_SIZE;
        }
        Ok(PublicWitness::new(inputs))
    }
}

/// Reads a base field element at `offset`.
#[inline]
fn read_fq(data: &[u8], offset: usize) -> Option<Fq> {
    read_word(data, offset).map(|word| Fq::from_be_bytes_mod_order(word))
}

/// Parses a G1 point `X || Y` at `offset` and returns it with the offset past it.
pub fn parse_g1(data: &[u8], offset: usize) -> Result<(G1Point, usize), ParseError> {
    let x = read_fq(data, offset).ok_or(ParseError::InvalidG1)?;
    let y = read_fq(data, offset.saturating_add(FIELD_SIZE)).ok_or(ParseError::InvalidG1)?;
    Ok((G1Point::new(x, y), offset + G1_SIZE))
}

/// Parses a G2 point `X.A1 || X.A0 || Y.A1 || Y.A0` at `offset` and returns it with the offset
/// past it.
///
/// Each coordinate read is checked on its own, the first one out of bounds fails the parse.
pub fn parse_g2(data: &[u8], offset: usize) -> Result<(G2Point, usize), ParseError> {
    let coordinate = |n: usize| {
        read_fq(data, offset.saturating_add(n * FIELD_SIZE)).ok_or(ParseError::InvalidG2)
    };
    let x1 = coordinate(0)?;
    let x0 = coordinate(1)?;
    let y1 = coordinate(2)?;
    let y0 = coordinate(3)?;
    Ok((
        G2Point::new(Fq2::new(x0, x1), Fq2::new(y0, y1)),
        offset + G2_SIZE,
    ))
}

/// Encodes a base field element as a big-endian word.
#[inline]
fn fq_to_bytes(fq: &Fq) -> [u8; FIELD_SIZE] {
    let mut out = [0u8; FIELD_SIZE];
    out.copy_from_slice(&fq.into_bigint().to_bytes_be());
    out
}

/// Encodes a scalar field element as a big-endian word.
#[inline]
pub(super) fn fr_to_bytes(fr: &Fr) -> [u8; PUBLIC_INPUT_SIZE] {
    let mut out = [0u8; PUBLIC_INPUT_SIZE];
    out.copy_from_slice(&fr.into_bigint().to_bytes_be());
    out
}

/// Encodes a G1 point as `X || Y`.
pub fn serialize_g1(point: &G1Point) -> [u8; G1_SIZE] {
    let mut out = [0u8; G1_SIZE];
    out[..FIELD_SIZE].copy_from_slice(&fq_to_bytes(&point.x));
    out[FIELD_SIZE..].copy_from_slice(&fq_to_bytes(&point.y));
    out
}

/// Encodes a G2 point as `X.A1 || X.A0 || Y.A1 || Y.A0`.
pub fn serialize_g2(point: &G2Point) -> [u8; G2_SIZE] {
    let mut out = [0u8; G2_SIZE];
    for (chunk, fq) in out
        .chunks_exact_mut(FIELD_SIZE)
        .zip([&point.x.c1, &point.x.c0, &point.y.c1, &point.y.c0])
    {
        chunk.copy_from_slice(&fq_to_bytes(fq));
    }
    out
}

/// Encodes a proof as `A || B || C`.
pub fn serialize_proof(proof: &Proof) -> Vec<u8> {
    let mut out = Vec::with_capacity(super::PROOF_SIZE);
    out.extend_from_slice(&serialize_g1(&proof.a));
    out.extend_from_slice(&serialize_g2(&proof.b));
    out.extend_from_slice(&serialize_g1(&proof.c));
    out
}

/// Encodes a verifying key as `Alpha || Beta || Gamma || Delta || IC[0..]`.
pub fn serialize_verifying_key(vk: &VerifyingKey) -> Vec<u8> {
    let mut out = Vec::with_capacity(super::VERIFYING_KEY_SIZE + vk.ic.len() * G1_SIZE);
    out.extend_from_slice(&serialize_g1(&vk.alpha));
    out.extend_from_slice(&serialize_g2(&vk.beta));
    out.extend_from_slice(&serialize_g2(&vk.gamma));
    out.extend_from_slice(&serialize_g2(&vk.delta));
    for point in &vk.ic {
        out.extend_from_slice(&serialize_g1(point));
    }
    out
}

/// Encodes public inputs as consecutive big-endian words.
pub fn serialize_public_witness(witness: &PublicWitness) -> Vec<u8> {
    witness.inputs().concat()
}
