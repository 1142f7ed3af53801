//! Fixed-arity Poseidon hashing.
//!
//! The state is loaded as `[domain_tag, inputs...]`, permuted once, and the
//! first element is squeezed as the digest. Input order matters.

use super::{permute_in_place, PoseidonParams, MAX_WIDTH};
use crate::error::{ErrorCode, PoseidonResult};
use crate::field::Fr;

/// Largest number of inputs accepted in one call.
pub const MAX_ARITY: usize = MAX_WIDTH - 1;

fn check_arity(arity: usize) -> PoseidonResult<()> {
    if arity == 0 {
        return Err(ErrorCode::E400_EmptyInput);
    }
    if arity > MAX_ARITY {
        return Err(ErrorCode::E401_UnsupportedArity(
            arity as u64,
            MAX_ARITY as u64,
        ));
    }
    Ok(())
}

/// Hasher bound to one arity.
///
/// Resolving the parameter table is done once in [`Hasher::new`]; the hasher
/// holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    params: &'static PoseidonParams,
    arity: usize,
}

impl Hasher {
    /// Create a hasher for `arity` inputs (1 to [`MAX_ARITY`]).
    pub fn new(arity: usize) -> PoseidonResult<Self> {
        check_arity(arity)?;
        let params = PoseidonParams::for_width(arity + 1)?;
        Ok(Self { params, arity })
    }

    /// Number of inputs this hasher accepts.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The parameter table in use.
    pub fn params(&self) -> &'static PoseidonParams {
        self.params
    }

    /// Hash exactly `arity` inputs with a zero domain tag.
    pub fn hash(&self, inputs: &[Fr]) -> PoseidonResult<Fr> {
        self.hash_with_domain_tag(inputs, Fr::ZERO)
    }

    /// Hash exactly `arity` inputs with `domain_tag` in the capacity element.
    pub fn hash_with_domain_tag(&self, inputs: &[Fr], domain_tag: Fr) -> PoseidonResult<Fr> {
        if inputs.len() != self.arity {
            return Err(ErrorCode::E401_UnsupportedArity(
                inputs.len() as u64,
                self.arity as u64,
            ));
        }

        let mut state = Vec::with_capacity(self.params.width());
        state.push(domain_tag);
        state.extend_from_slice(inputs);

        permute_in_place(self.params, &mut state)?;

        state
            .first()
            .copied()
            .ok_or_else(|| ErrorCode::E900_InternalError("empty state".to_string()))
    }
}

/// Hash an array of field elements to a single field element.
pub fn hash(inputs: &[Fr]) -> PoseidonResult<Fr> {
    Hasher::new(inputs.len())?.hash(inputs)
}

/// Hash with an explicit domain tag in the capacity element.
pub fn hash_with_domain_tag(inputs: &[Fr], domain_tag: Fr) -> PoseidonResult<Fr> {
    Hasher::new(inputs.len())?.hash_with_domain_tag(inputs, domain_tag)
}
