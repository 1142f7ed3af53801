//! Poseidon hash function (circom-compatible, BN254, x^5).
//!
//! Implements the Poseidon permutation and the fixed-arity hashing mode used
//! by circomlib: the state is `[domain_tag, inputs...]`, one permutation is
//! applied, and element 0 is the digest.
//!
//! Parameters are generated at build time from `params/circom_bn254_x5.json`
//! and cover state widths 2 through 13 (1 to 12 inputs). The build fails if
//! the constants do not hash to the pinned [`PARAMS_DIGEST`].

mod hash;
mod params;
mod permute;

pub use hash::{hash, hash_with_domain_tag, Hasher, MAX_ARITY};
pub use params::PoseidonParams;
pub use permute::{permute, permute_in_place, permute_with_trace};

// Include generated parameters
include!(concat!(env!("OUT_DIR"), "/params_generated.rs"));
