//! # Service Module
//!
//! Entry points used by the swap-request layer.

pub mod canonicalizer;
pub mod dispatcher;

pub use canonicalizer::Canonicalizer;
pub use dispatcher::AddressDispatcher;
