//! Error handling for the Poseidon hasher.
//!
//! Error codes are generated from `metadata.json` so the numeric codes and the
//! negative C status values stay in one place.
//!
//! Every failure is local to one call: nothing is retried, and the output
//! buffer is never written when an error is returned. Internal invariant
//! violations are reported as [`ErrorCode::E900_InternalError`] instead of
//! panicking, since the crate is called across a C boundary.

// Include the generated error code enum
include!(concat!(env!("OUT_DIR"), "/error_generated.rs"));

impl ErrorCode {
    /// Whether the error was caused by the caller's input rather than by the
    /// hasher itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ErrorCode::E900_InternalError(_))
    }
}
