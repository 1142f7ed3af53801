//! Field-element codecs.
//!
//! Two framings are supported:
//!
//! - [`decode`] / [`encode`]: fixed-width 32-byte words in either byte order.
//! - [`decode_json`] / [`encode_decimal`]: a JSON array of canonical decimal
//!   strings, e.g. `["123", "456"]`, used by the C entry point.
//!
//! Decoding never reduces: a word or string whose value is >= the modulus is
//! rejected with [`ErrorCode::E300_NonCanonicalFr`].

mod limits;

pub use limits::{Limits, MAX_DECIMAL_DIGITS};

use crate::error::{ErrorCode, PoseidonResult};
use crate::field::Fr;

/// Width of one encoded field element in bytes.
pub const ELEMENT_BYTES: usize = Fr::BYTES;

/// Byte order of the fixed-width encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first (the circom/EVM convention).
    #[default]
    Big,
}

/// Decode `count` field elements from `bytes`.
///
/// Fails with `E104_WrongLength` if the length is not a multiple of
/// [`ELEMENT_BYTES`] or does not match `count`, and with
/// `E300_NonCanonicalFr` if any word is >= the modulus.
pub fn decode(bytes: &[u8], count: usize, order: ByteOrder) -> PoseidonResult<Vec<Fr>> {
    if bytes.len() % ELEMENT_BYTES != 0 || bytes.len() / ELEMENT_BYTES != count {
        return Err(ErrorCode::E104_WrongLength(
            format!("{} x {}", count, ELEMENT_BYTES),
            bytes.len() as u64,
        ));
    }

    bytes
        .chunks_exact(ELEMENT_BYTES)
        .map(|chunk| {
            let mut word = [0u8; ELEMENT_BYTES];
            word.copy_from_slice(chunk);
            match order {
                ByteOrder::Little => Fr::from_bytes_le(&word),
                ByteOrder::Big => Fr::from_bytes_be(&word),
            }
        })
        .collect()
}

/// Encode a field element as a canonical zero-padded 32-byte word.
pub fn encode(fr: &Fr, order: ByteOrder) -> [u8; ELEMENT_BYTES] {
    match order {
        ByteOrder::Little => fr.to_bytes_le(),
        ByteOrder::Big => fr.to_bytes_be(),
    }
}

/// Decode a JSON array of decimal strings.
///
/// The whole array is validated before any element is returned; the first
/// failing element determines the error.
pub fn decode_json(input: &str, limits: &Limits) -> PoseidonResult<Vec<Fr>> {
    if input.len() as u64 > limits.max_input_size {
        return Err(ErrorCode::E110_InputTooLarge(
            input.len() as u64,
            limits.max_input_size,
        ));
    }

    let values: Vec<String> =
        serde_json::from_str(input).map_err(|_| ErrorCode::E100_InvalidJSON)?;

    if values.len() as u64 > limits.max_array_length {
        return Err(ErrorCode::E114_ArrayTooLong(
            values.len() as u64,
            limits.max_array_length,
        ));
    }

    values
        .iter()
        .map(|value| {
            if value.len() as u64 > limits.max_string_length {
                return Err(ErrorCode::E112_StringTooLong(
                    value.len() as u64,
                    limits.max_string_length,
                ));
            }
            Fr::from_decimal(value)
        })
        .collect()
}

/// Encode a field element as its canonical decimal string.
pub fn encode_decimal(fr: &Fr) -> String {
    fr.to_decimal()
}
