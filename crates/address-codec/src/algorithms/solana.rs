//! Solana public keys: Base58 strings decoding to exactly 32 bytes.

use super::{base58, hex_address};
use crate::domain::{entities::to_array, invariant_exact_length, AddressError};

/// Public key length in bytes.
pub const PUBKEY_LEN: usize = 32;

/// Decode a Solana address. With `hex_fallback`, 64 hex digits are accepted too.
pub fn decode(address: &str, hex_fallback: bool) -> Result<[u8; PUBKEY_LEN], AddressError> {
    let base58_result = base58::decode(address, PUBKEY_LEN).and_then(|bytes| {
        invariant_exact_length(&bytes, PUBKEY_LEN)?;
        Ok(to_array(&bytes))
    });

    match base58_result {
        Ok(key) => Ok(key),
        Err(err) if hex_fallback => hex_address::decode_hex_address(address).map_err(|_| err),
        Err(err) => Err(err),
    }
}

/// Base58 form of a public key.
pub fn encode(key: &[u8; PUBKEY_LEN]) -> String {
    base58::encode(key)
}
