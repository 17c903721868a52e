//! # Bech32 / Bech32m Checksum Codec
//!
//! Stateless encode/decode of `hrp ‖ '1' ‖ data ‖ checksum` strings. The two
//! variants differ only in the constant XOR-ed into the polymod residue.

use crate::domain::{invariant_single_case, AddressError, MAX_BECH32_LENGTH};

/// Data alphabet, indexed by 5-bit value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// Number of checksum symbols.
pub const CHECKSUM_LENGTH: usize = 6;

const GENERATORS: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

const BECH32_CONST: u32 = 1;
const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Checksum variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP-173 checksum, used by witness version 0.
    Bech32,
    /// BIP-350 checksum, used by witness versions 1 through 16.
    Bech32m,
}

impl Variant {
    /// Constant the polymod residue must equal.
    pub fn constant(&self) -> u32 {
        match self {
            Variant::Bech32 => BECH32_CONST,
            Variant::Bech32m => BECH32M_CONST,
        }
    }

    fn from_residue(residue: u32) -> Option<Self> {
        match residue {
            BECH32_CONST => Some(Variant::Bech32),
            BECH32M_CONST => Some(Variant::Bech32m),
            _ => None,
        }
    }
}

/// Decoded Bech32 string with the checksum stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bech32Data {
    /// Lower-cased human-readable part.
    pub hrp: String,
    /// 5-bit data values.
    pub values: Vec<u8>,
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(v);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &[u8]) -> impl Iterator<Item = u8> + '_ {
    hrp.iter()
        .map(|b| b >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.iter().map(|b| b & 0x1f))
}

fn create_checksum(hrp: &[u8], values: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let residue = polymod(
        hrp_expand(hrp)
            .chain(values.iter().copied())
            .chain([0u8; CHECKSUM_LENGTH]),
    ) ^ variant.constant();

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (5 - i))) & 0x1f) as u8;
    }
    checksum
}

fn check_hrp(hrp: &str) -> Result<(), AddressError> {
    if hrp.is_empty() {
        return Err(AddressError::length("non-empty hrp", 0));
    }
    if let Some(c) = hrp.bytes().find(|b| !(33..=126).contains(b)) {
        return Err(AddressError::MalformedCharset(format!(
            "hrp character 0x{c:02x} out of range"
        )));
    }
    Ok(())
}

/// Encode `values` (each below 32) under `hrp` with the given checksum variant.
///
/// The hrp is lower-cased; the output is always lower case.
pub fn encode(hrp: &str, values: &[u8], variant: Variant) -> Result<String, AddressError> {
    check_hrp(hrp)?;
    if let Some(v) = values.iter().find(|v| **v >= 32) {
        return Err(AddressError::MalformedCharset(format!(
            "value {v} does not fit in 5 bits"
        )));
    }

    let total = hrp.len() + 1 + values.len() + CHECKSUM_LENGTH;
    if total > MAX_BECH32_LENGTH {
        return Err(AddressError::length("at most 90 characters", total));
    }

    let hrp = hrp.to_ascii_lowercase();
    let checksum = create_checksum(hrp.as_bytes(), values, variant);

    let mut out = String::with_capacity(total);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    out.extend(
        values
            .iter()
            .chain(checksum.iter())
            .map(|v| char::from(CHARSET[usize::from(*v)])),
    );
    Ok(out)
}

/// Decode and verify `input` against a single checksum variant.
///
/// A string carrying the other variant's checksum fails with
/// [`AddressError::ChecksumMismatch`].
pub fn decode(input: &str, variant: Variant) -> Result<Bech32Data, AddressError> {
    let (data, found) = decode_any(input)?;
    if found != variant {
        return Err(AddressError::ChecksumMismatch);
    }
    Ok(data)
}

/// Decode `input`, reporting which checksum variant verified.
pub fn decode_any(input: &str) -> Result<(Bech32Data, Variant), AddressError> {
    if !input.is_ascii() {
        return Err(AddressError::MalformedCharset("non-ASCII input".into()));
    }
    if input.len() > MAX_BECH32_LENGTH {
        return Err(AddressError::length("at most 90 characters", input.len()));
    }
    invariant_single_case(input)?;

    let lower = input.to_ascii_lowercase();
    let sep = lower
        .rfind(SEPARATOR)
        .ok_or_else(|| AddressError::MalformedCharset("missing separator".into()))?;
    let (hrp, data) = (&lower[..sep], &lower[sep + 1..]);
    check_hrp(hrp)?;

    if data.len() < CHECKSUM_LENGTH {
        return Err(AddressError::length("at least 6 checksum characters", data.len()));
    }

    let values = data
        .bytes()
        .map(|c| {
            CHARSET
                .iter()
                .position(|x| *x == c)
                .map(|p| p as u8)
                .ok_or_else(|| {
                    AddressError::MalformedCharset(format!("invalid character '{}'", char::from(c)))
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let residue = polymod(hrp_expand(hrp.as_bytes()).chain(values.iter().copied()));
    let variant = Variant::from_residue(residue).ok_or(AddressError::ChecksumMismatch)?;

    let payload_len = values.len() - CHECKSUM_LENGTH;
    Ok((
        Bech32Data {
            hrp: hrp.to_string(),
            values: values[..payload_len].to_vec(),
        },
        variant,
    ))
}
