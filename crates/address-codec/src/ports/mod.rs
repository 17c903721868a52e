//! # Ports Module
//!
//! Inbound API of the address codec.

pub mod inbound;

pub use inbound::*;
