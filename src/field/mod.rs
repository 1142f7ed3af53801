//! BN254 scalar field (Fr) operations.
//!
//! This module provides the Fr type used throughout the crate for
//! field arithmetic, Poseidon hashing, and the input/output codecs.
//!
//! Every constructor that takes external data validates that the value is a
//! canonical representative (strictly below the modulus) and rejects it with
//! [`ErrorCode::E300_NonCanonicalFr`](crate::error::ErrorCode) otherwise.
//! Values are never silently reduced.

mod fr;

pub use fr::Fr;

// Include generated modulus constants
include!(concat!(env!("OUT_DIR"), "/modulus_generated.rs"));
