//! # Inbound Ports
//!
//! API trait used by the swap-request layer.

use crate::domain::{AddressError, AddressFormat, Asset, CanonicalAddress, Chain, Network};

/// Address validation API - inbound port.
///
/// Implementations hold no mutable state and are safe to share between
/// threads.
pub trait AddressValidationApi: Send + Sync {
    /// Whether `address` is valid for `asset` on `chain` and `network`.
    ///
    /// Bad addresses yield `Ok(false)`. `Err` means the chain or asset is
    /// unsupported, which is a caller mistake.
    fn validate(
        &self,
        chain: Chain,
        asset: Asset,
        network: Network,
        address: &str,
    ) -> Result<bool, AddressError>;

    /// Decode `address` into its canonical form.
    fn decode(
        &self,
        chain: Chain,
        network: Network,
        address: &str,
    ) -> Result<CanonicalAddress, AddressError>;

    /// Decode `address` for the home chain of `asset`.
    fn decode_for_asset(
        &self,
        asset: Asset,
        network: Network,
        address: &str,
    ) -> Result<CanonicalAddress, AddressError> {
        self.decode(asset.chain(), network, address)
    }

    /// Bitcoin address format; `None` for other chains or invalid input.
    fn classify(&self, chain: Chain, network: Network, address: &str) -> Option<AddressFormat>;

    /// Check if chain is supported.
    fn is_chain_supported(&self, chain: Chain) -> bool;
}
