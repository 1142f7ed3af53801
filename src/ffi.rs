//! Boundary adapter between callers' buffers and the hasher.
//!
//! The safe functions take slices and return [`PoseidonResult`]; the two
//! `extern "C"` functions are thin wrappers that translate raw pointers into
//! slices and errors into the negative status values of [`ErrorCode::status`].
//!
//! On every failure path the output buffer is left untouched.

use crate::codec::{self, ByteOrder, Limits, ELEMENT_BYTES};
use crate::error::{ErrorCode, PoseidonResult};
use crate::poseidon;
use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Hash a JSON array of decimal strings and return the decimal digest.
pub fn hash_json(input: &str) -> PoseidonResult<String> {
    hash_json_with_limits(input, &Limits::strict())
}

/// [`hash_json`] with caller-chosen input limits.
pub fn hash_json_with_limits(input: &str, limits: &Limits) -> PoseidonResult<String> {
    let inputs = codec::decode_json(input, limits)?;
    tracing::debug!(arity = inputs.len(), "decoded JSON input");
    let digest = poseidon::hash(&inputs)?;
    Ok(codec::encode_decimal(&digest))
}

/// Hash a JSON array of decimal strings into `buf`.
///
/// Writes the decimal digest followed by a NUL byte and returns the number of
/// digits. `buf` must hold at least `digits + 1` bytes, otherwise
/// `E500_BufferTooSmall(required, capacity)` is returned.
pub fn hash_json_into(input: &str, buf: &mut [u8]) -> PoseidonResult<usize> {
    let digest = hash_json(input)?;
    write_terminated(digest.as_bytes(), buf)
}

/// Hash concatenated 32-byte words into `buf`.
///
/// The element count is `input.len() / 32`; a ragged length is rejected. The
/// digest is written as one 32-byte word in `order` and 32 is returned.
pub fn hash_bytes_into(input: &[u8], order: ByteOrder, buf: &mut [u8]) -> PoseidonResult<usize> {
    let inputs = codec::decode(input, input.len() / ELEMENT_BYTES, order)?;
    let digest = poseidon::hash(&inputs)?;
    let word = codec::encode(&digest, order);

    let available = buf.len();
    let out = buf.get_mut(..word.len()).ok_or(ErrorCode::E500_BufferTooSmall(
        word.len() as u64,
        available as u64,
    ))?;
    out.copy_from_slice(&word);
    Ok(word.len())
}

fn write_terminated(bytes: &[u8], buf: &mut [u8]) -> PoseidonResult<usize> {
    let required = bytes.len() + 1;
    let available = buf.len();
    let out = buf.get_mut(..required).ok_or(ErrorCode::E500_BufferTooSmall(
        required as u64,
        available as u64,
    ))?;

    let (body, nul) = out.split_at_mut(bytes.len());
    body.copy_from_slice(bytes);
    nul.fill(0);
    Ok(bytes.len())
}

fn capacity(max_len: c_int) -> usize {
    usize::try_from(max_len).unwrap_or(0)
}

/// Run one C entry point, mapping errors and panics to status codes.
fn guarded(entry: &'static str, f: impl FnOnce() -> PoseidonResult<usize>) -> c_int {
    let result = catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!(entry, "panic caught at C boundary");
        Err(ErrorCode::E900_InternalError("panic".to_string()))
    });

    let result = result.and_then(|len| {
        c_int::try_from(len)
            .map_err(|_| ErrorCode::E900_InternalError(format!("length {} overflows c_int", len)))
    });

    match result {
        Ok(len) => {
            tracing::debug!(entry, len, "hash written");
            len
        }
        Err(e) => {
            tracing::warn!(
                entry,
                error = %e,
                code = e.code(),
                status = e.status(),
                "hash failed"
            );
            e.status()
        }
    }
}

/// Creates a hash of multiple Fr elements.
///
/// `input` is a NUL-terminated JSON array of decimal strings. The decimal
/// digest and a NUL byte are written to `buf`; the return value is the number
/// of digits, or a negative status on error.
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string. `buf` must be
/// null or valid for writes of `max_len` bytes, and must not overlap `input`.
#[no_mangle]
pub unsafe extern "C" fn poseidon_hash(
    input: *const c_char,
    buf: *mut c_char,
    max_len: c_int,
) -> c_int {
    guarded("poseidon_hash", || {
        if input.is_null() || buf.is_null() {
            return Err(ErrorCode::E102_NullPointer);
        }
        // SAFETY: non-null and NUL-terminated per the caller contract.
        let input = unsafe { CStr::from_ptr(input) }
            .to_str()
            .map_err(|_| ErrorCode::E101_InvalidUtf8)?;
        // SAFETY: non-null and writable for `max_len` bytes per the caller contract.
        let buf = unsafe { std::slice::from_raw_parts_mut(buf.cast::<u8>(), capacity(max_len)) };
        hash_json_into(input, buf)
    })
}

/// Creates a hash of multiple Fr elements given as 32-byte big-endian words.
///
/// Returns 32 on success, or a negative status on error.
///
/// # Safety
///
/// `input` must be null or valid for reads of `input_len` bytes. `buf` must be
/// null or valid for writes of `max_len` bytes, and must not overlap `input`.
#[no_mangle]
pub unsafe extern "C" fn poseidon_hash_bytes(
    input: *const u8,
    input_len: usize,
    buf: *mut u8,
    max_len: c_int,
) -> c_int {
    guarded("poseidon_hash_bytes", || {
        if input.is_null() || buf.is_null() {
            return Err(ErrorCode::E102_NullPointer);
        }
        // SAFETY: non-null and readable for `input_len` bytes per the caller contract.
        let input = unsafe { std::slice::from_raw_parts(input, input_len) };
        // SAFETY: non-null and writable for `max_len` bytes per the caller contract.
        let buf = unsafe { std::slice::from_raw_parts_mut(buf, capacity(max_len)) };
        hash_bytes_into(input, ByteOrder::Big, buf)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_terminated_exact_fit() {
        let mut buf = [0xffu8; 4];
        assert_eq!(write_terminated(b"123", &mut buf), Ok(3));
        assert_eq!(&buf, b"123\0");
    }

    #[test]
    fn test_write_terminated_too_small() {
        let mut buf = [0xffu8; 3];
        assert_eq!(
            write_terminated(b"123", &mut buf),
            Err(ErrorCode::E500_BufferTooSmall(4, 3))
        );
        assert_eq!(buf, [0xff; 3]);
    }

    #[test]
    fn test_hash_bytes_into_too_small() {
        let mut buf = [0xffu8; 31];
        assert_eq!(
            hash_bytes_into(&[0u8; 32], ByteOrder::Big, &mut buf),
            Err(ErrorCode::E500_BufferTooSmall(32, 31))
        );
        assert_eq!(buf, [0xff; 31]);
    }

    #[test]
    fn test_capacity_clamps_negative() {
        assert_eq!(capacity(-5), 0);
        assert_eq!(capacity(0), 0);
        assert_eq!(capacity(100), 100);
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_guarded_maps_errors() {
        assert_eq!(guarded("test", || Ok(77)), 77);
        assert_eq!(guarded("test", || Err(ErrorCode::E400_EmptyInput)), -3);
        assert_eq!(guarded("test", || panic!("boom")), -4);
    }
}
