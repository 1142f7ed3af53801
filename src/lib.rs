//! Poseidon hash over the BN254 scalar field, compatible with circomlib.
//!
//! The crate is built as a Rust library and as a C library exposing
//! `poseidon_hash` (see `include/poseidon.h`).
//!
//! # Architecture
//!
//! - [`field`] - BN254 scalar field arithmetic (Fr)
//! - [`codec`] - fixed-width binary and JSON/decimal framing of Fr elements
//! - [`poseidon`] - parameter tables, permutation and fixed-arity hashing
//! - [`ffi`] - buffer-writing adapters and the `extern "C"` entry points
//! - [`error`] - error codes and C status values
//!
//! # Parameters
//!
//! Round constants and MDS matrices are pinned in `params/circom_bn254_x5.json`
//! and turned into Rust tables by build.rs, which checks them against a
//! SHA-256 digest before generating any code.
//!
//! ```
//! use poseidon_bn254::{poseidon, Fr};
//!
//! let digest = poseidon::hash(&[Fr::from_u64(1), Fr::from_u64(2)]).unwrap();
//! assert_eq!(
//!     digest.to_decimal(),
//!     "7853200120776062878684798364095072458815029376092732009249414926327459813530"
//! );
//! ```

// Library code sits behind a C ABI and must not unwind or abort on input.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod ffi;
pub mod field;
pub mod poseidon;

// Re-export commonly used types
pub use codec::{ByteOrder, Limits};
pub use error::{ErrorCode, PoseidonResult};
pub use ffi::{hash_bytes_into, hash_json, hash_json_into};
pub use field::Fr;
