//! Parsed Poseidon parameter tables.
//!
//! The generated tables hold constants as hex strings; they are parsed into
//! field elements once per process and shared read-only afterwards.

use super::{
    FULL_ROUNDS, MAX_WIDTH, MDS_MATRICES, MIN_WIDTH, PARAMS_DIGEST, PARAMS_NAME, PARTIAL_ROUNDS,
    ROUND_CONSTANTS, SBOX_ALPHA,
};
use crate::error::{ErrorCode, PoseidonResult};
use crate::field::Fr;
use std::sync::OnceLock;

/// Round constants and MDS matrix for one state width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseidonParams {
    width: usize,
    full_rounds: usize,
    partial_rounds: usize,
    alpha: u64,
    round_constants: Vec<Vec<Fr>>,
    mds: Vec<Vec<Fr>>,
}

impl PoseidonParams {
    /// Look up the parameter table for a state width.
    ///
    /// Fails with `E402_UnsupportedWidth` outside `MIN_WIDTH..=MAX_WIDTH`.
    pub fn for_width(width: usize) -> PoseidonResult<&'static PoseidonParams> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(ErrorCode::E402_UnsupportedWidth(width as u64));
        }
        tables()?
            .get(width - MIN_WIDTH)
            .ok_or(ErrorCode::E402_UnsupportedWidth(width as u64))
    }

    /// State width `t`.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of full rounds (split evenly around the partial rounds).
    pub fn full_rounds(&self) -> usize {
        self.full_rounds
    }

    /// Number of partial rounds.
    pub fn partial_rounds(&self) -> usize {
        self.partial_rounds
    }

    /// Total number of rounds.
    pub fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    /// S-box exponent.
    pub fn alpha(&self) -> u64 {
        self.alpha
    }

    /// Round constants, one row of `width` elements per round.
    pub fn round_constants(&self) -> &[Vec<Fr>] {
        &self.round_constants
    }

    /// The `width x width` MDS matrix.
    pub fn mds(&self) -> &[Vec<Fr>] {
        &self.mds
    }

    /// Whether `round` applies the S-box to every element.
    pub fn is_full_round(&self, round: usize) -> bool {
        let half = self.full_rounds / 2;
        round < half || round >= half + self.partial_rounds
    }

    fn parse(
        width: usize,
        partial_rounds: usize,
        round_constants: &[&str],
        mds: &[&str],
    ) -> PoseidonResult<Self> {
        let rounds = FULL_ROUNDS + partial_rounds;
        if round_constants.len() != width * rounds || mds.len() != width * width {
            return Err(ErrorCode::E900_InternalError(format!(
                "width {}: table sizes {} / {} do not match {} rounds",
                width,
                round_constants.len(),
                mds.len(),
                rounds
            )));
        }

        let parse_rows = |flat: &[&str]| -> PoseidonResult<Vec<Vec<Fr>>> {
            flat.chunks(width)
                .map(|row| {
                    row.iter()
                        .map(|c| {
                            Fr::from_hex(c).map_err(|e| {
                                ErrorCode::E900_InternalError(format!("width {}: {}", width, e))
                            })
                        })
                        .collect()
                })
                .collect()
        };

        Ok(Self {
            width,
            full_rounds: FULL_ROUNDS,
            partial_rounds,
            alpha: SBOX_ALPHA,
            round_constants: parse_rows(round_constants)?,
            mds: parse_rows(mds)?,
        })
    }
}

fn load() -> PoseidonResult<Vec<PoseidonParams>> {
    let tables = ROUND_CONSTANTS
        .iter()
        .zip(MDS_MATRICES.iter())
        .zip(PARTIAL_ROUNDS.iter())
        .enumerate()
        .map(|(i, ((rc, mds), &rp))| PoseidonParams::parse(MIN_WIDTH + i, rp, rc, mds))
        .collect::<PoseidonResult<Vec<_>>>();

    match &tables {
        Ok(t) => tracing::debug!(
            params = PARAMS_NAME,
            digest = PARAMS_DIGEST,
            widths = t.len(),
            "loaded Poseidon parameter tables"
        ),
        Err(e) => tracing::error!(params = PARAMS_NAME, error = %e, "invalid Poseidon parameter tables"),
    }
    tables
}

/// Get parsed tables (lazily initialized).
fn tables() -> PoseidonResult<&'static [PoseidonParams]> {
    static TABLES: OnceLock<PoseidonResult<Vec<PoseidonParams>>> = OnceLock::new();
    TABLES
        .get_or_init(load)
        .as_ref()
        .map(|t| t.as_slice())
        .map_err(|e| e.clone())
}
