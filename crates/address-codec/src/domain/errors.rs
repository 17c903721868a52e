//! # Domain Errors
//!
//! Error types for address decoding and validation.
//!
//! User-supplied strings fail with one of the structural variants
//! (`MalformedCharset`, `ChecksumMismatch`, `LengthViolation`,
//! `NetworkMismatch`, `InvalidWitnessVersion`, `InvalidPadding`). Only
//! `UnsupportedChainOrAsset` and `InvalidConfig` describe a caller mistake.

use super::value_objects::{Chain, Network};
use thiserror::Error;

/// Address codec error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Character outside the expected alphabet, mixed case, or non-ASCII input.
    #[error("Malformed charset: {0}")]
    MalformedCharset(String),

    /// Structurally decodable, but the checksum does not verify.
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// Decoded payload has the wrong byte count.
    #[error("Length violation: {0}")]
    LengthViolation(String),

    /// Well-formed address for a different network.
    #[error("Address is not valid for {chain} on {network}")]
    NetworkMismatch {
        /// Chain the caller asked for
        chain: Chain,
        /// Network the caller asked for
        network: Network,
    },

    /// Segwit witness version outside 0..=16.
    #[error("Invalid witness version: {0}")]
    InvalidWitnessVersion(u8),

    /// Non-zero or oversized padding when regrouping 5-bit values.
    #[error("Invalid padding in bit regrouping")]
    InvalidPadding,

    /// No validator registered for the requested chain/asset pair.
    #[error("Unsupported chain or asset: {0}")]
    UnsupportedChainOrAsset(String),

    /// Dispatcher configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AddressError {
    /// True when the error was caused by the address string itself rather
    /// than by how the codec was called or configured.
    pub fn is_user_input_error(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedChainOrAsset(_) | Self::InvalidConfig(_)
        )
    }

    pub(crate) fn length(expected: &str, actual: usize) -> Self {
        Self::LengthViolation(format!("expected {expected}, got {actual}"))
    }
}
