//! Hex-encoded addresses: EVM accounts and raw 32-byte public keys.

use crate::domain::AddressError;

/// EVM account length in bytes.
pub const EVM_ADDRESS_LEN: usize = 20;

/// Decode an optionally `0x`-prefixed hex string of exactly `LEN` bytes.
///
/// Either case is accepted; no EIP-55 checksum is enforced.
pub fn decode_hex_address<const LEN: usize>(address: &str) -> Result<[u8; LEN], AddressError> {
    if !address.is_ascii() {
        return Err(AddressError::MalformedCharset("non-ASCII input".into()));
    }
    let digits = address.strip_prefix("0x").unwrap_or(address);
    if digits.len() != LEN * 2 {
        return Err(AddressError::length(
            &format!("{} hex digits", LEN * 2),
            digits.len(),
        ));
    }

    let mut out = [0u8; LEN];
    hex::decode_to_slice(digits, &mut out).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, .. } => {
            AddressError::MalformedCharset(format!("invalid hex character '{c}'"))
        }
        other => AddressError::LengthViolation(other.to_string()),
    })?;
    Ok(out)
}

/// Decode an EVM account address.
pub fn decode_evm(address: &str) -> Result<[u8; EVM_ADDRESS_LEN], AddressError> {
    decode_hex_address(address)
}

/// `0x`-prefixed lower-case hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
