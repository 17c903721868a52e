//! # Bitcoin Address Validator
//!
//! An address is valid for a network when either
//!
//! - it carries the network's Segwit HRP and decodes as a witness program, or
//! - it decodes as Base58Check with a version byte from the network's set.
//!
//! Nothing else is accepted. Testnet and regtest share legacy version bytes,
//! so legacy addresses for those two networks cannot be told apart.

use super::{base58, segwit};
use crate::domain::{
    AddressError, AddressFormat, Chain, Network, ScriptPubkey, ValidatedAddress,
};
use tracing::debug;

/// Validates and decodes Bitcoin addresses per network. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitcoinAddressValidator;

fn has_segwit_prefix(address: &str, hrp: &str) -> bool {
    let prefix_len = hrp.len() + 1;
    address.len() > prefix_len
        && address.is_char_boundary(prefix_len)
        && address[..hrp.len()].eq_ignore_ascii_case(hrp)
        && address.as_bytes()[hrp.len()] == b'1'
}

impl BitcoinAddressValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Decode `address` for `network` into its format and output script.
    pub fn decode(
        &self,
        address: &str,
        network: Network,
    ) -> Result<ValidatedAddress, AddressError> {
        if !address.is_ascii() {
            return Err(AddressError::MalformedCharset("non-ASCII input".into()));
        }

        let hrp = network.segwit_hrp();
        if has_segwit_prefix(address, hrp) {
            let witness = segwit::decode(hrp, address)?;
            let script_pubkey = ScriptPubkey::from_witness(&witness);
            return Ok(ValidatedAddress {
                format: witness.format(),
                script_pubkey,
            });
        }

        let mismatch = AddressError::NetworkMismatch {
            chain: Chain::Bitcoin,
            network,
        };

        if let Some(other) = Network::ALL
            .into_iter()
            .find(|n| has_segwit_prefix(address, n.segwit_hrp()))
        {
            // Well-formed for another network is a mismatch; anything else
            // reports its own decode failure.
            segwit::decode(other.segwit_hrp(), address)?;
            return Err(mismatch);
        }

        let payload = base58::decode_checked(address)?;
        if !network.accepts_version_byte(payload.version_byte) {
            return Err(mismatch);
        }

        let script_pubkey = if payload.version_byte == network.p2pkh_version() {
            ScriptPubkey::P2pkh(payload.payload)
        } else {
            ScriptPubkey::P2sh(payload.payload)
        };
        Ok(ValidatedAddress {
            format: script_pubkey.format(),
            script_pubkey,
        })
    }

    /// Whether `address` is a valid Bitcoin address on `network`. Never errors.
    pub fn validate(&self, address: &str, network: Network) -> bool {
        match self.decode(address, network) {
            Ok(_) => true,
            Err(reason) => {
                debug!(
                    chain = %Chain::Bitcoin,
                    %network,
                    %reason,
                    "[address-codec] Rejected address"
                );
                false
            }
        }
    }

    /// Format of a valid address, or `None` when it does not validate.
    pub fn classify(&self, address: &str, network: Network) -> Option<AddressFormat> {
        self.decode(address, network).ok().map(|v| v.format)
    }
}

impl ScriptPubkey {
    /// Human-readable address paying to this script on `network`.
    pub fn to_address(&self, network: Network) -> Result<String, AddressError> {
        let hrp = network.segwit_hrp();
        match self {
            Self::P2pkh(hash) => Ok(base58::encode_payload(network.p2pkh_version(), hash)),
            Self::P2sh(hash) => Ok(base58::encode_payload(network.p2sh_version(), hash)),
            Self::P2wpkh(hash) => segwit::encode(hrp, 0, hash),
            Self::P2wsh(hash) => segwit::encode(hrp, 0, hash),
            Self::Taproot(key) => segwit::encode(hrp, 1, key),
            Self::OtherSegwit { version, program } => segwit::encode(hrp, *version, program),
        }
    }
}
