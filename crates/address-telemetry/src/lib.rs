//! # Address Telemetry
//!
//! Logging bootstrap for binaries and test harnesses that embed the address
//! codec. The codec itself only emits `tracing` events; this crate decides
//! where they go.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use address_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADDR_SERVICE_NAME` | `address-codec` | Service name attached to logs |
//! | `ADDR_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `ADDR_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `ADDR_CONSOLE_OUTPUT` | `true` | Emit to stdout |
//! | `ADDR_NETWORK` | `testnet` | Deployment network label |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized")]
    AlreadyInitialized,

    /// Configuration rejected.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
