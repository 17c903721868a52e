//! Dispatcher configuration and validation
//!
//! # Example
//!
//! ```
//! use address_codec::{Chain, DispatcherConfig};
//!
//! let config = DispatcherConfig::default()
//!     .with_enabled_chains(vec![Chain::Bitcoin, Chain::Ethereum])
//!     .with_hex_fallback(false);
//! assert!(config.validate().is_ok());
//! ```

use super::errors::AddressError;
use super::value_objects::Chain;
use serde::{Deserialize, Serialize};
use std::env;

/// Routing options for the address dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Chains the dispatcher routes. Anything else is unsupported.
    pub enabled_chains: Vec<Chain>,
    /// Accept raw 32-byte hex for Substrate-family and Solana addresses.
    pub hex_fallback: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            enabled_chains: Chain::ALL.to_vec(),
            hex_fallback: true,
        }
    }
}

impl DispatcherConfig {
    /// Create a new configuration with validation
    pub fn new(enabled_chains: Vec<Chain>, hex_fallback: bool) -> Result<Self, AddressError> {
        let config = Self {
            enabled_chains,
            hex_fallback,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ADDR_ENABLED_CHAINS`: comma-separated chain names (default: all)
    /// - `ADDR_HEX_FALLBACK`: accept raw hex public keys (default: true)
    pub fn from_env() -> Result<Self, AddressError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`DispatcherConfig::from_env`], reading variables through
    /// `lookup` instead of the process environment.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AddressError> {
        let enabled_chains = match lookup("ADDR_ENABLED_CHAINS") {
            Some(list) => parse_chain_list(&list)?,
            None => Chain::ALL.to_vec(),
        };

        let hex_fallback = lookup("ADDR_HEX_FALLBACK")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self::new(enabled_chains, hex_fallback)
    }

    /// Reject an empty or duplicated chain list.
    pub fn validate(&self) -> Result<(), AddressError> {
        if self.enabled_chains.is_empty() {
            return Err(AddressError::InvalidConfig(
                "enabled_chains cannot be empty".to_string(),
            ));
        }

        for (i, chain) in self.enabled_chains.iter().enumerate() {
            if self.enabled_chains[..i].contains(chain) {
                return Err(AddressError::InvalidConfig(format!(
                    "chain listed twice: {chain}"
                )));
            }
        }

        Ok(())
    }

    /// Whether the dispatcher routes `chain`.
    pub fn is_enabled(&self, chain: Chain) -> bool {
        self.enabled_chains.contains(&chain)
    }

    /// Builder-style method to set enabled chains
    pub fn with_enabled_chains(mut self, chains: Vec<Chain>) -> Self {
        self.enabled_chains = chains;
        self
    }

    /// Builder-style method to toggle the hex fallback
    pub fn with_hex_fallback(mut self, enabled: bool) -> Self {
        self.hex_fallback = enabled;
        self
    }
}

fn parse_chain_list(list: &str) -> Result<Vec<Chain>, AddressError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
