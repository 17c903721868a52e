//! # Domain Module
//!
//! Core domain types for address validation: networks, chains, assets,
//! decoded address forms, structural invariants and errors.

pub mod config;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use config::DispatcherConfig;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
