//! # Domain Invariants
//!
//! Structural rules every decoded address must satisfy before it leaves
//! the codec.

use super::errors::AddressError;

/// Longest accepted Bech32/Bech32m string.
pub const MAX_BECH32_LENGTH: usize = 90;

/// Highest Segwit witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Witness program size bounds, inclusive.
pub const MIN_WITNESS_PROGRAM_LEN: usize = 2;
/// Upper witness program bound.
pub const MAX_WITNESS_PROGRAM_LEN: usize = 40;

/// Witness v0 program sizes (P2WPKH and P2WSH).
pub const WITNESS_V0_PROGRAM_LENS: [usize; 2] = [20, 32];

/// Length of a decoded legacy address: version byte, 20-byte hash, 4-byte checksum.
pub const BASE58CHECK_ADDRESS_LEN: usize = 25;

/// Invariant: witness version in 0..=16.
pub fn invariant_witness_version(version: u8) -> Result<(), AddressError> {
    if version > MAX_WITNESS_VERSION {
        return Err(AddressError::InvalidWitnessVersion(version));
    }
    Ok(())
}

/// Invariant: witness program length fits its version.
///
/// Every version accepts 2..=40 bytes; version 0 accepts only 20 or 32.
pub fn invariant_witness_program(version: u8, program: &[u8]) -> Result<(), AddressError> {
    invariant_witness_version(version)?;
    let len = program.len();
    if !(MIN_WITNESS_PROGRAM_LEN..=MAX_WITNESS_PROGRAM_LEN).contains(&len) {
        return Err(AddressError::length("2..=40 program bytes", len));
    }
    if version == 0 && !WITNESS_V0_PROGRAM_LENS.contains(&len) {
        return Err(AddressError::length("20 or 32 program bytes for v0", len));
    }
    Ok(())
}

/// Invariant: decoded byte string has an exact length.
pub fn invariant_exact_length(bytes: &[u8], expected: usize) -> Result<(), AddressError> {
    if bytes.len() != expected {
        return Err(AddressError::length(&format!("{expected} bytes"), bytes.len()));
    }
    Ok(())
}

/// Invariant: Bech32 strings are never mixed case.
pub fn invariant_single_case(input: &str) -> Result<(), AddressError> {
    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AddressError::MalformedCharset("mixed case".into()));
    }
    Ok(())
}
