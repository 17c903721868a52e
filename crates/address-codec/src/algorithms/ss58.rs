//! # SS58 Codec
//!
//! Substrate account addresses: Base58 over `prefix ‖ account ‖ checksum`,
//! where the checksum is the first two bytes of
//! `blake2b-512("SS58PRE" ‖ prefix ‖ account)`.

use super::base58;
use crate::domain::{entities::to_array, AddressError};
use blake2::{Blake2b512, Digest};

const CHECKSUM_PREAMBLE: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;
const ACCOUNT_LEN: usize = 32;
/// Two-byte prefix, account and checksum.
const MAX_DECODED_LEN: usize = 2 + ACCOUNT_LEN + CHECKSUM_LEN;

/// Largest prefix expressible in the two-byte form.
pub const MAX_PREFIX: u16 = 16_383;

/// Decoded SS58 address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ss58Address {
    /// Network prefix.
    pub prefix: u16,
    /// 32-byte account id.
    pub account: [u8; 32],
}

fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_PREAMBLE);
    hasher.update(body);
    let hash = hasher.finalize();
    [hash[0], hash[1]]
}

fn encode_prefix(prefix: u16) -> Result<Vec<u8>, AddressError> {
    match prefix {
        0..=63 => Ok(vec![prefix as u8]),
        64..=MAX_PREFIX => Ok(vec![
            (((prefix & 0x00fc) >> 2) as u8) | 0x40,
            ((prefix >> 8) as u8) | (((prefix & 0x0003) << 6) as u8),
        ]),
        _ => Err(AddressError::InvalidConfig(format!(
            "ss58 prefix {prefix} out of range"
        ))),
    }
}

/// Decode an SS58 address with a 32-byte account id.
pub fn decode(address: &str) -> Result<Ss58Address, AddressError> {
    let data = base58::decode(address, MAX_DECODED_LEN)?;

    let (prefix, prefix_len) = match data.first() {
        Some(&b0 @ 0..=63) => (u16::from(b0), 1),
        Some(&b0 @ 64..=127) => {
            let b1 = *data
                .get(1)
                .ok_or_else(|| AddressError::length("a two-byte prefix", data.len()))?;
            let lower = (b0 << 2) | (b1 >> 6);
            let upper = b1 & 0x3f;
            (u16::from(lower) | (u16::from(upper) << 8), 2)
        }
        Some(b0) => {
            return Err(AddressError::MalformedCharset(format!(
                "reserved ss58 prefix byte {b0}"
            )))
        }
        None => return Err(AddressError::length("non-empty input", 0)),
    };

    let expected = prefix_len + ACCOUNT_LEN + CHECKSUM_LEN;
    if data.len() != expected {
        return Err(AddressError::length(&format!("{expected} bytes"), data.len()));
    }

    let (body, check) = data.split_at(expected - CHECKSUM_LEN);
    if checksum(body) != check {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(Ss58Address {
        prefix,
        account: to_array(&body[prefix_len..]),
    })
}

/// Encode an account id under `prefix`.
pub fn encode(prefix: u16, account: &[u8; 32]) -> Result<String, AddressError> {
    let mut data = encode_prefix(prefix)?;
    data.extend_from_slice(account);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    Ok(base58::encode(&data))
}
