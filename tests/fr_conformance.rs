//! Fr field conformance tests.
//!
//! These tests pin the canonical encodings of BN254 scalar field elements and
//! the rejection of non-canonical input in every framing.

use poseidon_bn254::error::ErrorCode;
use poseidon_bn254::field::{MODULUS_DECIMAL, MODULUS_HEX};
use poseidon_bn254::Fr;

/// p - 1, the largest canonical element.
const MAX_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495616";

/// p + 1
const MODULUS_PLUS_ONE_DECIMAL: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495618";

fn be_bytes(hex_str: &str) -> [u8; 32] {
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&hex::decode(hex_str).unwrap());
    arr
}

// =============================================================================
// Modulus
// =============================================================================

#[test]
fn modulus_constants_agree() {
    assert_eq!(Fr::modulus().to_string(), MODULUS_DECIMAL);
    assert_eq!(
        format!("{:064x}", Fr::modulus()),
        MODULUS_HEX,
        "hex and decimal modulus must describe the same value"
    );
}

// =============================================================================
// Canonical encoding
// =============================================================================

#[test]
fn zero_encoding() {
    assert_eq!(Fr::ZERO.to_bytes_le(), [0u8; 32]);
    assert_eq!(Fr::ZERO.to_bytes_be(), [0u8; 32]);
    assert_eq!(Fr::ZERO.to_decimal(), "0");
}

#[test]
fn one_encoding() {
    let mut le = [0u8; 32];
    le[0] = 1;
    assert_eq!(Fr::ONE.to_bytes_le(), le, "One should encode to LE bytes");

    let mut be = [0u8; 32];
    be[31] = 1;
    assert_eq!(Fr::ONE.to_bytes_be(), be, "One should encode to BE bytes");
}

#[test]
fn max_element_encodings() {
    let max = Fr::from_decimal(MAX_DECIMAL).unwrap();
    assert_eq!(max, -Fr::ONE, "p - 1 is the additive inverse of one");
    assert_eq!(max.to_decimal(), MAX_DECIMAL);
    assert_eq!(
        max.to_hex(),
        "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000000"
    );
    assert_eq!(Fr::from_hex(&max.to_hex()).unwrap(), max);
    assert_eq!(Fr::from_bytes_be(&max.to_bytes_be()).unwrap(), max);
    assert_eq!(Fr::from_bytes_le(&max.to_bytes_le()).unwrap(), max);
}

#[test]
fn display_is_decimal() {
    assert_eq!(format!("{}", Fr::from_u64(123456789)), "123456789");
    assert_eq!(format!("{}", Fr::ZERO), "0");
}

// =============================================================================
// Non-canonical rejection
// =============================================================================

#[test]
fn modulus_bytes_rejected() {
    let be = be_bytes(MODULUS_HEX);
    assert_eq!(
        Fr::from_bytes_be(&be),
        Err(ErrorCode::E300_NonCanonicalFr(MODULUS_HEX.to_string()))
    );

    let mut le = be;
    le.reverse();
    assert!(matches!(
        Fr::from_bytes_le(&le),
        Err(ErrorCode::E300_NonCanonicalFr(_))
    ));
}

#[test]
fn all_ones_bytes_rejected() {
    assert!(matches!(
        Fr::from_bytes_be(&[0xff; 32]),
        Err(ErrorCode::E300_NonCanonicalFr(_))
    ));
    assert!(matches!(
        Fr::from_bytes_le(&[0xff; 32]),
        Err(ErrorCode::E300_NonCanonicalFr(_))
    ));
}

#[test]
fn modulus_decimal_rejected_not_reduced() {
    assert_eq!(
        Fr::from_decimal(MODULUS_DECIMAL),
        Err(ErrorCode::E300_NonCanonicalFr(MODULUS_DECIMAL.to_string()))
    );
    assert_eq!(
        Fr::from_decimal(MODULUS_PLUS_ONE_DECIMAL),
        Err(ErrorCode::E300_NonCanonicalFr(
            MODULUS_PLUS_ONE_DECIMAL.to_string()
        ))
    );
}

#[test]
fn oversized_decimal_rejected() {
    let huge = "9".repeat(100);
    assert_eq!(
        Fr::from_decimal(&huge),
        Err(ErrorCode::E300_NonCanonicalFr(huge.clone()))
    );
}

#[test]
fn modulus_hex_rejected() {
    assert!(matches!(
        Fr::from_hex(MODULUS_HEX),
        Err(ErrorCode::E300_NonCanonicalFr(_))
    ));
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn malformed_decimals() {
    for bad in ["", "e", "-1", "+1", " 1", "1 ", "1.0", "0x10", "01", "00"] {
        assert_eq!(
            Fr::from_decimal(bad),
            Err(ErrorCode::E103_InvalidDecimal(bad.to_string())),
            "{:?} must be rejected as malformed",
            bad
        );
    }
}

#[test]
fn hex_wrong_length() {
    assert_eq!(
        Fr::from_hex("0x01"),
        Err(ErrorCode::E104_WrongLength("64".to_string(), 2))
    );
}

#[test]
fn hex_invalid_digit() {
    let bad = format!("{}zz", "0".repeat(62));
    assert_eq!(Fr::from_hex(&bad), Err(ErrorCode::E105_InvalidHex));
}

#[test]
fn hex_prefix_optional() {
    let with = Fr::from_hex(&format!("0x{}", "0".repeat(63) + "7")).unwrap();
    let without = Fr::from_hex(&("0".repeat(63) + "7")).unwrap();
    assert_eq!(with, without);
    assert_eq!(with, Fr::from_u64(7));
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn arithmetic_wraps_at_modulus() {
    let max = Fr::from_decimal(MAX_DECIMAL).unwrap();
    assert_eq!(max + Fr::ONE, Fr::ZERO);
    assert_eq!(Fr::ZERO - Fr::ONE, max);
    assert_eq!(max * max, Fr::ONE);
}

#[test]
fn pow5_matches_repeated_multiplication() {
    let x = Fr::from_decimal("123456789123456789123456789").unwrap();
    assert_eq!(x.pow5(), x * x * x * x * x);
    assert_eq!(x.pow5(), x.pow(5));
}
