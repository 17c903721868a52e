//! # Canonicalizer
//!
//! Turns a validated address string into the bytes embedded in outbound
//! swap requests, and back into a human-readable string.

use super::dispatcher::AddressDispatcher;
use crate::algorithms::{hex_address, solana, ss58};
use crate::domain::{AddressError, CanonicalAddress, Chain, Network};
use crate::ports::AddressValidationApi;
use tracing::error;

/// Converts validated addresses to their canonical binary form.
#[derive(Clone, Debug, Default)]
pub struct Canonicalizer {
    dispatcher: AddressDispatcher,
}

impl Canonicalizer {
    /// Canonicalizer routing through `dispatcher`.
    pub fn new(dispatcher: AddressDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Decode an address that is expected to be valid on `chain`.
    ///
    /// Output scripts and account ids do not depend on the network, so every
    /// network is tried in [`Network::ALL`] order. An address that decodes
    /// nowhere is a caller contract violation and is logged at error level.
    pub fn to_canonical(
        &self,
        chain: Chain,
        address: &str,
    ) -> Result<CanonicalAddress, AddressError> {
        let mut first_error = None;
        for network in Network::ALL {
            match self.dispatcher.decode(chain, network, address) {
                Ok(canonical) => return Ok(canonical),
                Err(err) if !err.is_user_input_error() => return Err(err),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        let err = first_error.unwrap_or(AddressError::ChecksumMismatch);
        error!(
            %chain,
            reason = %err,
            "[address-codec] Canonicalization requested for an address that does not decode"
        );
        Err(err)
    }

    /// Canonical bytes of `address` on `chain`.
    pub fn to_canonical_bytes(&self, chain: Chain, address: &str) -> Result<Vec<u8>, AddressError> {
        self.to_canonical(chain, address).map(|c| c.raw_bytes())
    }
}

impl CanonicalAddress {
    /// Human-readable form of the address on `network`.
    ///
    /// EVM accounts come out as lower-case `0x` hex, Substrate accounts as
    /// SS58 with the network's prefix.
    pub fn to_human_readable(&self, network: Network) -> Result<String, AddressError> {
        match self {
            Self::Eth(bytes) | Self::Arb(bytes) => Ok(hex_address::encode_hex(bytes)),
            Self::Dot(account) | Self::Hub(account) => ss58::encode(network.ss58_prefix(), account),
            Self::Btc(script_pubkey) => script_pubkey.to_address(network),
            Self::Sol(key) => Ok(solana::encode(key)),
        }
    }
}
