//! # Base58 / Base58Check Codec
//!
//! Bitcoin alphabet (no `0`, `O`, `I`, `l`). Leading `'1'` characters map to
//! leading zero bytes and back.

use crate::domain::{
    entities::to_array, invariant_exact_length, AddressError, Base58CheckPayload,
    BASE58CHECK_ADDRESS_LEN,
};
use sha2::{Digest, Sha256};

/// Base58 alphabet, indexed by digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// `sha256(sha256(data))`
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Longest Base58 string that can decode to at most `max_len` bytes.
///
/// Each character carries log2(58) ≈ 5.86 bits, so `n` bytes need at most
/// `ceil(n * 1.366)` characters.
pub fn max_encoded_len(max_len: usize) -> usize {
    max_len * 138 / 100 + 1
}

/// Decode a Base58 string of at most `max_len` bytes.
///
/// Input that cannot fit is rejected as a [`AddressError::LengthViolation`]
/// before any arithmetic, so the cost is bounded by `max_len` rather than by
/// the length of the untrusted string.
pub fn decode(input: &str, max_len: usize) -> Result<Vec<u8>, AddressError> {
    if !input.is_ascii() {
        return Err(AddressError::MalformedCharset("non-ASCII input".into()));
    }
    if input.len() > max_encoded_len(max_len) {
        return Err(AddressError::length(
            &format!("at most {} base58 characters", max_encoded_len(max_len)),
            input.len(),
        ));
    }

    let mut buf = vec![0u8; max_len];
    let written = bs58::decode(input)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .onto(&mut buf[..])
        .map_err(|e| match e {
            bs58::decode::Error::BufferTooSmall => {
                AddressError::length(&format!("at most {max_len} bytes"), input.len())
            }
            other => AddressError::MalformedCharset(other.to_string()),
        })?;
    buf.truncate(written);
    Ok(buf)
}

/// Encode bytes as Base58.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Append a 4-byte double-SHA256 checksum and encode.
pub fn encode_check(data: &[u8]) -> String {
    let mut buf = Vec::with_capacity(data.len() + 4);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&sha256d(data)[..4]);
    encode(&buf)
}

/// Encode a legacy address from its version byte and 20-byte hash.
pub fn encode_payload(version_byte: u8, payload: &[u8; 20]) -> String {
    let mut data = [0u8; 21];
    data[0] = version_byte;
    data[1..].copy_from_slice(payload);
    encode_check(&data)
}

/// Decode a legacy Bitcoin address: exactly 25 bytes with a valid checksum.
pub fn decode_checked(address: &str) -> Result<Base58CheckPayload, AddressError> {
    let bytes = decode(address, BASE58CHECK_ADDRESS_LEN)?;
    invariant_exact_length(&bytes, BASE58CHECK_ADDRESS_LEN)?;

    let checksum = sha256d(&bytes[..21]);
    if checksum[..4] != bytes[21..] {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(Base58CheckPayload {
        version_byte: bytes[0],
        payload: to_array(&bytes[1..21]),
        checksum: to_array(&bytes[21..]),
    })
}
