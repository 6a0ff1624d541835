//! # Ark Telemetry
//!
//! Log output for Ark-Net binaries.
//!
//! Libraries in this workspace only emit `tracing` events; binaries call
//! [`init_telemetry`] once at startup to decide where those events go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ark_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::for_service("ark-netcheck"))?;
//!     // Application code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ARK_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ARK_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |
//! | `ARK_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `ARK_SERVICE_NAME` | `ark-net` | Service name |
//! | `ARK_NETWORK` | `devnet` | Network name |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level is not a valid filter directive.
    #[error("invalid log filter {0}")]
    Filter(String),

    /// Another global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber described by `config`.
///
/// Returns a guard to hold for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)?;

    tracing::info!(
        service = %config.service_name,
        network = %config.network,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active. Logs shutdown on drop.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}

/// Convenience macro for creating a span with component context.
///
/// # Example
///
/// ```rust
/// let span = ark_telemetry::component_span!("bootstrap", component = "netcheck", attempts = 3);
/// let _entered = span.enter();
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
