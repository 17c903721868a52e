//! # Algorithms Module
//!
//! Address codecs and per-chain validators. Every function here is pure and
//! reentrant; no buffer outlives a call.

pub mod base58;
pub mod bech32;
pub mod bitcoin;
pub mod hex_address;
pub mod regroup;
pub mod segwit;
pub mod solana;
pub mod ss58;

pub use bech32::{Bech32Data, Variant};
pub use bitcoin::BitcoinAddressValidator;
pub use regroup::regroup;
pub use ss58::Ss58Address;
