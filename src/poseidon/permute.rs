//! Poseidon permutation implementation.
//!
//! The permutation applies `RF + RP` rounds:
//! - RF/2 full rounds (all elements get S-box)
//! - RP partial rounds (only the first element gets S-box)
//! - RF/2 full rounds
//!
//! Each round consists of:
//! 1. Round constant addition
//! 2. S-box (x^5)
//! 3. MDS matrix multiplication

use super::PoseidonParams;
use crate::error::{ErrorCode, PoseidonResult};
use crate::field::Fr;

/// Apply the S-box to a field element.
#[inline]
fn sbox(x: Fr, alpha: u64) -> Fr {
    if alpha == 5 {
        x.pow5()
    } else {
        x.pow(alpha)
    }
}

/// Add round constants to state.
fn add_round_constants(state: &mut [Fr], constants: &[Fr]) {
    for (s, c) in state.iter_mut().zip(constants) {
        *s += *c;
    }
}

/// Apply MDS matrix multiplication: state' = MDS * state
fn apply_mds(state: &mut [Fr], mds: &[Vec<Fr>]) {
    let mixed: Vec<Fr> = mds
        .iter()
        .map(|row| {
            row.iter()
                .zip(state.iter())
                .fold(Fr::ZERO, |acc, (m, s)| acc + *m * *s)
        })
        .collect();

    for (s, m) in state.iter_mut().zip(mixed) {
        *s = m;
    }
}

fn run(
    params: &PoseidonParams,
    state: &mut [Fr],
    mut on_round: impl FnMut(&[Fr]),
) -> PoseidonResult<()> {
    if state.len() != params.width() {
        return Err(ErrorCode::E900_InternalError(format!(
            "state has {} elements, parameters expect {}",
            state.len(),
            params.width()
        )));
    }

    let alpha = params.alpha();
    for (round, constants) in params.round_constants().iter().enumerate() {
        add_round_constants(state, constants);

        if params.is_full_round(round) {
            for s in state.iter_mut() {
                *s = sbox(*s, alpha);
            }
        } else if let Some(first) = state.first_mut() {
            *first = sbox(*first, alpha);
        }

        apply_mds(state, params.mds());
        on_round(state);
    }

    Ok(())
}

/// Permute `state` in place with an already resolved parameter table.
///
/// Fails only if the state width does not match the table, which callers
/// going through [`permute`] or the hash driver cannot trigger.
pub fn permute_in_place(params: &PoseidonParams, state: &mut [Fr]) -> PoseidonResult<()> {
    run(params, state, |_| {})
}

/// Complete Poseidon permutation.
///
/// The width is taken from `state.len()`; widths outside the generated
/// tables fail with `E402_UnsupportedWidth`.
pub fn permute(state: &[Fr]) -> PoseidonResult<Vec<Fr>> {
    let params = PoseidonParams::for_width(state.len())?;
    let mut st = state.to_vec();
    permute_in_place(params, &mut st)?;
    Ok(st)
}

/// Poseidon permutation with trace output for debugging.
///
/// Returns (final_state, round_traces) where each trace entry contains
/// the state after that round.
pub fn permute_with_trace(state: &[Fr]) -> PoseidonResult<(Vec<Fr>, Vec<Vec<Fr>>)> {
    let params = PoseidonParams::for_width(state.len())?;
    let mut st = state.to_vec();
    let mut traces = Vec::with_capacity(params.total_rounds());
    run(params, &mut st, |s| traces.push(s.to_vec()))?;
    Ok((st, traces))
}
