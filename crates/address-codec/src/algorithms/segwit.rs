//! # Segwit Address Codec
//!
//! Witness version/program encoding on top of Bech32 (v0) and Bech32m (v1+).

use super::bech32::{self, Variant};
use super::regroup::regroup;
use crate::domain::{
    invariant_witness_program, invariant_witness_version, AddressError, Chain,
    DecodedWitnessProgram, Network,
};

/// Network bound to a Segwit HRP, if any.
pub fn network_for_hrp(hrp: &str) -> Option<Network> {
    Network::ALL
        .into_iter()
        .find(|n| n.segwit_hrp().eq_ignore_ascii_case(hrp))
}

/// Checksum variant required for a witness version.
pub fn variant_for_version(version: u8) -> Variant {
    if version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    }
}

/// Decode a Segwit address, requiring its HRP to equal `hrp`.
///
/// Both checksum variants are tried; the one that verifies must match the
/// witness version.
pub fn decode(hrp: &str, address: &str) -> Result<DecodedWitnessProgram, AddressError> {
    let (data, variant) = bech32::decode_any(address)?;

    if !data.hrp.eq_ignore_ascii_case(hrp) {
        return Err(match network_for_hrp(hrp) {
            Some(network) => AddressError::NetworkMismatch {
                chain: Chain::Bitcoin,
                network,
            },
            None => AddressError::MalformedCharset(format!(
                "expected hrp {hrp}, found {}",
                data.hrp
            )),
        });
    }

    let (&version, values) = data
        .values
        .split_first()
        .ok_or_else(|| AddressError::length("a witness version", 0))?;
    invariant_witness_version(version)?;

    let program = regroup(values, 5, 8, false)?;
    invariant_witness_program(version, &program)?;

    if variant != variant_for_version(version) {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(DecodedWitnessProgram { version, program })
}

/// Encode a witness program under `hrp`.
///
/// The result is decoded again before returning and rejected if the round
/// trip does not reproduce the same version and program.
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, AddressError> {
    invariant_witness_program(version, program)?;

    let mut values = Vec::with_capacity(1 + (program.len() * 8).div_ceil(5));
    values.push(version);
    values.extend(regroup(program, 8, 5, true)?);

    let address = bech32::encode(hrp, &values, variant_for_version(version))?;

    let decoded = decode(hrp, &address)?;
    if decoded.version != version || decoded.program != program {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(address)
}
