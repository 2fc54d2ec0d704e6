use alloy_primitives::Bytes;
use ark_ff::{BigInteger, PrimeField};

/// Size of a big-endian field element word.
pub const WORD_LEN: usize = 32;

/// Returns `data[start..end]`, or `None` when the range is inverted or out of bounds.
///
/// The returned slice aliases `data`, no copy is made.
#[inline]
pub fn safe_slice(data: &[u8], start: usize, end: usize) -> Option<&[u8]> {
    data.get(start..end)
}

/// Reads the 32-byte word starting at `offset`.
#[inline]
pub fn read_word(data: &[u8], offset: usize) -> Option<&[u8; WORD_LEN]> {
    let end = offset.checked_add(WORD_LEN)?;
    safe_slice(data, offset, end)?.try_into().ok()
}

/// Interprets a big-endian word as a field element, `None` if it is not below the modulus.
#[inline]
pub fn read_canonical<F: PrimeField>(word: &[u8; WORD_LEN]) -> Option<F> {
    let value = F::from_be_bytes_mod_order(word);
    (value.into_bigint().to_bytes_be() == word[..]).then_some(value)
}

/// Converts a boolean to a single byte `Bytes` value, `0x01` or `0x00`.
///
/// This is optimized to not allocate at runtime by using 2 static arrays.
#[inline]
pub const fn bool_to_byte(value: bool) -> Bytes {
    const TRUE: &[u8] = &[1];
    const FALSE: &[u8] = &[0];
    if value {
        Bytes::from_static(TRUE)
    } else {
        Bytes::from_static(FALSE)
    }
}
