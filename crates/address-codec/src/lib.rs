//! # Address Codec
//!
//! Recognition, validation and canonicalization of destination and refund
//! addresses for cross-chain swap requests.
//!
//! **Architecture:** Hexagonal (domain / algorithms / ports / service)
//!
//! ## Purpose
//!
//! Decide whether a user-supplied string is a well-formed address for a given
//! chain and network, and convert it to the binary form embedded in outbound
//! requests. A false positive routes funds to an unspendable or wrong-network
//! destination, so every path is fail-closed.
//!
//! ## Supported Encodings
//!
//! | Chain | Encoding | Network-specific |
//! |-------|----------|------------------|
//! | Bitcoin | Base58Check (P2PKH, P2SH), Bech32 (v0), Bech32m (v1+) | HRP and version bytes |
//! | Ethereum, Arbitrum | `0x` + 40 hex digits | No |
//! | Polkadot, Assethub | SS58 (blake2b-512 checksum) | Prefix 0 / 42 |
//! | Solana | Base58, 32 bytes | No |
//!
//! ## Module Structure
//!
//! ```text
//! address-codec/
//! ├── domain/          # Network, Chain, Asset, CanonicalAddress, errors, config
//! ├── algorithms/      # Bech32, bit regrouping, Segwit, Base58, SS58, validators
//! ├── ports/           # AddressValidationApi
//! └── service/         # AddressDispatcher, Canonicalizer
//! ```
//!
//! ## Example
//!
//! ```
//! use address_codec::{AddressDispatcher, AddressValidationApi, Asset, Chain, Network};
//!
//! let dispatcher = AddressDispatcher::default();
//! let valid = dispatcher
//!     .validate(
//!         Chain::Bitcoin,
//!         Asset::Btc,
//!         Network::Mainnet,
//!         "bc1pv7lmxr8vvf220cumd4pft77l4pds85pt4l6rw6yrr3cghyf5kl7sq76puk",
//!     )
//!     .unwrap();
//! assert!(valid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{BitcoinAddressValidator, Variant};
pub use domain::{
    invariant_exact_length, invariant_single_case, invariant_witness_program,
    invariant_witness_version, AddressError, AddressFormat, Asset, Base58CheckPayload,
    CanonicalAddress, Chain, DecodedWitnessProgram, DispatcherConfig, Network, ScriptPubkey,
    ValidatedAddress, HRP_MAINNET, HRP_REGTEST, HRP_TESTNET, MAX_BECH32_LENGTH,
};
pub use ports::AddressValidationApi;
pub use service::{AddressDispatcher, Canonicalizer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
