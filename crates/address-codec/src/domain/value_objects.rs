//! # Domain Value Objects
//!
//! Immutable value types supplied by the caller with every validation
//! request: the network, the chain and the asset. None of these are ever
//! derived from the address string itself.

use super::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bech32 human-readable part for Bitcoin mainnet.
pub const HRP_MAINNET: &str = "bc";
/// Bech32 human-readable part for Bitcoin testnet.
pub const HRP_TESTNET: &str = "tb";
/// Bech32 human-readable part for Bitcoin regtest.
pub const HRP_REGTEST: &str = "bcrt";

/// SS58 prefix of the Polkadot relay chain.
pub const SS58_PREFIX_POLKADOT: u16 = 0;
/// SS58 prefix shared by generic Substrate test networks.
pub const SS58_PREFIX_SUBSTRATE: u16 = 42;

/// Deployment network the address must belong to.
///
/// Maps 1:1 from the product's deployment identifiers:
/// production → `Mainnet`, staging → `Testnet`, local → `Regtest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local development network.
    Regtest,
}

impl Network {
    /// All networks, in the order the canonicalizer tries them.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// The one Segwit HRP bound to this network.
    pub fn segwit_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => HRP_MAINNET,
            Network::Testnet => HRP_TESTNET,
            Network::Regtest => HRP_REGTEST,
        }
    }

    /// Base58Check version byte for pay-to-pubkey-hash.
    ///
    /// Testnet and regtest share version bytes.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6F,
        }
    }

    /// Base58Check version byte for pay-to-script-hash.
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xC4,
        }
    }

    /// Whether a legacy version byte belongs to this network's accepted set.
    pub fn accepts_version_byte(&self, version: u8) -> bool {
        version == self.p2pkh_version() || version == self.p2sh_version()
    }

    /// Expected SS58 prefix for Substrate-family chains on this network.
    pub fn ss58_prefix(&self) -> u16 {
        match self {
            Network::Mainnet => SS58_PREFIX_POLKADOT,
            Network::Testnet | Network::Regtest => SS58_PREFIX_SUBSTRATE,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "Mainnet"),
            Network::Testnet => write!(f, "Testnet"),
            Network::Regtest => write!(f, "Regtest"),
        }
    }
}

impl FromStr for Network {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "production" => Ok(Network::Mainnet),
            "testnet" | "staging" => Ok(Network::Testnet),
            "regtest" | "local" | "development" | "localnet" => Ok(Network::Regtest),
            other => Err(AddressError::InvalidConfig(format!(
                "unknown network: {other}"
            ))),
        }
    }
}

/// Supported destination chains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chain {
    /// Ethereum mainnet family.
    Ethereum,
    /// Polkadot relay chain.
    Polkadot,
    /// Bitcoin.
    Bitcoin,
    /// Arbitrum L2.
    Arbitrum,
    /// Solana.
    Solana,
    /// Polkadot Asset Hub parachain.
    Assethub,
}

impl Chain {
    /// Every chain the dispatcher knows about.
    pub const ALL: [Chain; 6] = [
        Chain::Ethereum,
        Chain::Polkadot,
        Chain::Bitcoin,
        Chain::Arbitrum,
        Chain::Solana,
        Chain::Assethub,
    ];

}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polkadot => "Polkadot",
            Chain::Bitcoin => "Bitcoin",
            Chain::Arbitrum => "Arbitrum",
            Chain::Solana => "Solana",
            Chain::Assethub => "Assethub",
        };
        f.write_str(name)
    }
}

impl FromStr for Chain {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            "polkadot" | "dot" => Ok(Chain::Polkadot),
            "bitcoin" | "btc" => Ok(Chain::Bitcoin),
            "arbitrum" | "arb" => Ok(Chain::Arbitrum),
            "solana" | "sol" => Ok(Chain::Solana),
            "assethub" | "hub" => Ok(Chain::Assethub),
            other => Err(AddressError::InvalidConfig(format!("unknown chain: {other}"))),
        }
    }
}

/// Swappable assets. Each asset lives on exactly one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Asset {
    /// Ether on Ethereum.
    Eth,
    /// FLIP (ERC-20).
    Flip,
    /// USDC on Ethereum.
    Usdc,
    /// USDT on Ethereum.
    Usdt,
    /// DOT on the relay chain.
    Dot,
    /// Bitcoin.
    Btc,
    /// Ether on Arbitrum.
    ArbEth,
    /// USDC on Arbitrum.
    ArbUsdc,
    /// SOL.
    Sol,
    /// USDC on Solana.
    SolUsdc,
    /// DOT on Asset Hub.
    HubDot,
    /// USDT on Asset Hub.
    HubUsdt,
    /// USDC on Asset Hub.
    HubUsdc,
}

impl Asset {
    /// All assets.
    pub const ALL: [Asset; 13] = [
        Asset::Eth,
        Asset::Flip,
        Asset::Usdc,
        Asset::Usdt,
        Asset::Dot,
        Asset::Btc,
        Asset::ArbEth,
        Asset::ArbUsdc,
        Asset::Sol,
        Asset::SolUsdc,
        Asset::HubDot,
        Asset::HubUsdt,
        Asset::HubUsdc,
    ];

    /// Home chain of the asset.
    pub fn chain(&self) -> Chain {
        match self {
            Asset::Eth | Asset::Flip | Asset::Usdc | Asset::Usdt => Chain::Ethereum,
            Asset::Dot => Chain::Polkadot,
            Asset::Btc => Chain::Bitcoin,
            Asset::ArbEth | Asset::ArbUsdc => Chain::Arbitrum,
            Asset::Sol | Asset::SolUsdc => Chain::Solana,
            Asset::HubDot | Asset::HubUsdt | Asset::HubUsdc => Chain::Assethub,
        }
    }
}

/// Bitcoin address format, determined during decode and never asserted up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFormat {
    /// Legacy pay-to-pubkey-hash.
    P2pkh,
    /// Legacy pay-to-script-hash.
    P2sh,
    /// Witness version 0 (P2WPKH or P2WSH).
    SegwitV0,
    /// Witness version 1 through 16.
    SegwitV1Plus(u8),
}
