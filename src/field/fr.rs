//! BN254 scalar field element (Fr).
//!
//! Wraps `ark_bn254::Fr` with validation on construction to ensure
//! canonical representation.

use crate::error::{ErrorCode, PoseidonResult};
use ark_ff::{BigInteger256, Field, PrimeField};
use num_bigint::BigUint;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

type Scalar = ark_bn254::Fr;

/// A BN254 scalar field element.
///
/// This is a newtype wrapper around `ark_bn254::Fr` that enforces
/// canonical encoding on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fr(Scalar);

impl Fr {
    /// The additive identity (zero).
    pub const ZERO: Fr = Fr(<Scalar as Field>::ZERO);

    /// The multiplicative identity (one).
    pub const ONE: Fr = Fr(<Scalar as Field>::ONE);

    /// Width of the canonical byte encoding.
    pub const BYTES: usize = 32;

    /// Create an Fr from a u64 value.
    pub fn from_u64(val: u64) -> Fr {
        Fr(Scalar::from(val))
    }

    /// The field modulus as an arbitrary-precision integer.
    pub fn modulus() -> BigUint {
        BigUint::from(<Scalar as PrimeField>::MODULUS)
    }

    fn from_repr(repr: BigInteger256) -> Option<Fr> {
        if repr >= <Scalar as PrimeField>::MODULUS {
            return None;
        }
        Scalar::from_bigint(repr).map(Fr)
    }

    fn from_le_array(bytes: &[u8; 32]) -> Option<Fr> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        Self::from_repr(BigInteger256::new(limbs))
    }

    /// Create an Fr from raw bytes (little-endian).
    ///
    /// Returns an error if the bytes do not represent a canonical field element
    /// (i.e., the value is >= the field modulus).
    pub fn from_bytes_le(bytes: &[u8; 32]) -> PoseidonResult<Fr> {
        Self::from_le_array(bytes).ok_or_else(|| ErrorCode::E300_NonCanonicalFr(hex::encode(bytes)))
    }

    /// Create an Fr from raw bytes (big-endian).
    pub fn from_bytes_be(bytes: &[u8; 32]) -> PoseidonResult<Fr> {
        let mut le = *bytes;
        le.reverse();
        Self::from_le_array(&le).ok_or_else(|| ErrorCode::E300_NonCanonicalFr(hex::encode(bytes)))
    }

    /// Create an Fr from a hex string (64 hex chars, big-endian, optional `0x`).
    pub fn from_hex(hex_str: &str) -> PoseidonResult<Fr> {
        let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        if digits.len() != 64 {
            return Err(ErrorCode::E104_WrongLength(
                "64".to_string(),
                digits.len() as u64,
            ));
        }

        let bytes = hex::decode(digits).map_err(|_| ErrorCode::E105_InvalidHex)?;

        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Self::from_bytes_be(&arr)
    }

    /// Create an Fr from its canonical decimal representation.
    ///
    /// Accepts `0` or a digit string without leading zeros. Signs, whitespace
    /// and empty strings are rejected as malformed; values >= the modulus are
    /// rejected as non-canonical.
    pub fn from_decimal(s: &str) -> PoseidonResult<Fr> {
        let malformed = || ErrorCode::E103_InvalidDecimal(s.to_string());

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(malformed());
        }

        let value = BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(malformed)?;
        let non_canonical = || ErrorCode::E300_NonCanonicalFr(s.to_string());
        let repr = BigInteger256::try_from(value).map_err(|_| non_canonical())?;
        Self::from_repr(repr).ok_or_else(non_canonical)
    }

    /// Convert to canonical 32-byte little-endian representation.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        let limbs = self.0.into_bigint().0;
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Convert to canonical 32-byte big-endian representation.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut out = self.to_bytes_le();
        out.reverse();
        out
    }

    /// Convert to 64-character lowercase hex string (big-endian).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes_be())
    }

    /// Convert to decimal string representation.
    pub fn to_decimal(&self) -> String {
        BigUint::from(self.0.into_bigint()).to_str_radix(10)
    }

    /// Get the underlying scalar value.
    pub fn inner(&self) -> &Scalar {
        &self.0
    }

    /// Compute x^5 (used in Poseidon S-box).
    pub fn pow5(&self) -> Fr {
        let x2 = self.0.square();
        let x4 = x2.square();
        Fr(x4 * self.0)
    }

    /// Square the field element.
    pub fn square(&self) -> Fr {
        Fr(self.0.square())
    }

    /// Raise to a small power.
    pub fn pow(&self, exp: u64) -> Fr {
        Fr(self.0.pow([exp]))
    }
}

impl Default for Fr {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for Fr {
    fn from(val: u64) -> Self {
        Fr::from_u64(val)
    }
}

impl From<Scalar> for Fr {
    fn from(val: Scalar) -> Self {
        Fr(val)
    }
}

impl From<Fr> for Scalar {
    fn from(val: Fr) -> Self {
        val.0
    }
}

impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        Fr(self.0 + rhs.0)
    }
}

impl AddAssign for Fr {
    fn add_assign(&mut self, rhs: Fr) {
        self.0 += rhs.0;
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        Fr(self.0 - rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        Fr(self.0 * rhs.0)
    }
}

impl Neg for Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        Fr(-self.0)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
