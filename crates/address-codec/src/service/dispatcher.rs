//! # Address Dispatcher
//!
//! Routes a `(chain, network)` pair to the validator for that chain. The
//! routing table is an exhaustive `match` over [`Chain`], so a new chain
//! does not compile until it has a decoder.

use crate::algorithms::{hex_address, solana, ss58, BitcoinAddressValidator};
use crate::domain::{
    AddressError, AddressFormat, Asset, CanonicalAddress, Chain, DispatcherConfig, Network,
};
use crate::ports::AddressValidationApi;
use tracing::{debug, warn};

type DecodeFn = fn(&str, Network, &DispatcherConfig) -> Result<CanonicalAddress, AddressError>;

fn decoder_for(chain: Chain) -> DecodeFn {
    match chain {
        Chain::Ethereum => decode_ethereum,
        Chain::Polkadot => decode_polkadot,
        Chain::Bitcoin => decode_bitcoin,
        Chain::Arbitrum => decode_arbitrum,
        Chain::Solana => decode_solana,
        Chain::Assethub => decode_assethub,
    }
}

fn decode_ethereum(
    address: &str,
    _network: Network,
    _config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    hex_address::decode_evm(address).map(CanonicalAddress::Eth)
}

fn decode_arbitrum(
    address: &str,
    _network: Network,
    _config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    hex_address::decode_evm(address).map(CanonicalAddress::Arb)
}

fn decode_bitcoin(
    address: &str,
    network: Network,
    _config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    BitcoinAddressValidator::new()
        .decode(address, network)
        .map(|validated| CanonicalAddress::Btc(validated.script_pubkey))
}

fn decode_polkadot(
    address: &str,
    network: Network,
    config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    decode_substrate(Chain::Polkadot, address, network, config).map(CanonicalAddress::Dot)
}

fn decode_assethub(
    address: &str,
    network: Network,
    config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    decode_substrate(Chain::Assethub, address, network, config).map(CanonicalAddress::Hub)
}

fn decode_solana(
    address: &str,
    _network: Network,
    config: &DispatcherConfig,
) -> Result<CanonicalAddress, AddressError> {
    solana::decode(address, config.hex_fallback).map(CanonicalAddress::Sol)
}

/// SS58 with the network's prefix, or raw hex when the fallback is enabled.
fn decode_substrate(
    chain: Chain,
    address: &str,
    network: Network,
    config: &DispatcherConfig,
) -> Result<[u8; 32], AddressError> {
    match ss58::decode(address) {
        Ok(decoded) if decoded.prefix == network.ss58_prefix() => Ok(decoded.account),
        Ok(_) => Err(AddressError::NetworkMismatch { chain, network }),
        Err(err) if config.hex_fallback => {
            hex_address::decode_hex_address(address).map_err(|_| err)
        }
        Err(err) => Err(err),
    }
}

/// Address dispatcher.
///
/// Holds only its configuration; cloning is cheap and every method takes
/// `&self`.
#[derive(Clone, Debug, Default)]
pub struct AddressDispatcher {
    config: DispatcherConfig,
}

impl AddressDispatcher {
    /// Create a dispatcher, rejecting an invalid configuration.
    pub fn new(config: DispatcherConfig) -> Result<Self, AddressError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    fn ensure_supported(&self, chain: Chain) -> Result<(), AddressError> {
        if !self.config.is_enabled(chain) {
            warn!("[address-codec] No validator enabled for {}", chain);
            return Err(AddressError::UnsupportedChainOrAsset(format!(
                "{chain} is not enabled"
            )));
        }
        Ok(())
    }
}

impl AddressValidationApi for AddressDispatcher {
    fn validate(
        &self,
        chain: Chain,
        asset: Asset,
        network: Network,
        address: &str,
    ) -> Result<bool, AddressError> {
        self.ensure_supported(chain)?;
        if asset.chain() != chain {
            warn!("[address-codec] {:?} is not an asset on {}", asset, chain);
            return Err(AddressError::UnsupportedChainOrAsset(format!(
                "{asset:?} is not an asset on {chain}"
            )));
        }

        Ok(self.decode(chain, network, address).is_ok())
    }

    fn decode(
        &self,
        chain: Chain,
        network: Network,
        address: &str,
    ) -> Result<CanonicalAddress, AddressError> {
        self.ensure_supported(chain)?;
        decoder_for(chain)(address, network, &self.config).inspect_err(|reason| {
            debug!(%chain, %network, %reason, "[address-codec] Rejected address");
        })
    }

    fn classify(&self, chain: Chain, network: Network, address: &str) -> Option<AddressFormat> {
        if chain != Chain::Bitcoin || !self.config.is_enabled(chain) {
            return None;
        }
        BitcoinAddressValidator::new().classify(address, network)
    }

    fn is_chain_supported(&self, chain: Chain) -> bool {
        self.config.is_enabled(chain)
    }
}
