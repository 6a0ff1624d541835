//! Client configuration.
//!
//! Every field has a default, so an empty file (or `ClientConfig::default()`)
//! yields a working devnet client.
//!
//! # Config File Format
//!
//! ```toml
//! [network]
//! variant = "main"
//! max_broadcast_peers = 10
//! probe_timeout_ms = 3000
//!
//! [transport]
//! request_timeout_ms = 5000
//! connect_timeout_ms = 2000
//!
//! # Optional: replace the compiled-in seed lists
//! [seeds]
//! dev = ["167.114.29.49:4002", "167.114.29.54:4002"]
//! ```

use crate::domain::{NetworkVariant, PeerAddress, SeedList, TransportError};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A seed entry is not `host:port`.
    #[error("invalid seed peer: {0}")]
    InvalidPeer(String),

    /// A seed override was given but empty.
    #[error("seed list for {0} must not be empty")]
    EmptySeedList(NetworkVariant),

    /// A numeric setting is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The transport adapter could not be built from the settings.
    #[error("failed to build transport: {0}")]
    Transport(#[from] TransportError),
}

/// Network selection and bootstrap tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Variant used when none is given explicitly.
    pub variant: NetworkVariant,
    /// Submissions per broadcast.
    pub max_broadcast_peers: usize,
    /// Upper bound for one liveness probe.
    pub probe_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            variant: NetworkVariant::Dev,
            max_broadcast_peers: 10,
            probe_timeout_ms: 3_000,
        }
    }
}

/// HTTP transport timeouts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Whole-request timeout.
    pub request_timeout_ms: u64,
    /// TCP connect timeout.
    pub connect_timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5_000,
            connect_timeout_ms: 2_000,
        }
    }
}

/// Optional replacements for the compiled-in seed lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedOverrides {
    /// Mainnet seeds as `host:port`.
    pub main: Option<Vec<String>>,
    /// Devnet seeds as `host:port`.
    pub dev: Option<Vec<String>>,
}

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `[network]`
    pub network: NetworkConfig,
    /// `[transport]`
    pub transport: TransportConfig,
    /// `[seeds]`
    pub seeds: SeedOverrides,
}

impl ClientConfig {
    /// Parse a TOML document.
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    #[cfg(feature = "config")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check ranges and seed overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.max_broadcast_peers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.max_broadcast_peers",
                reason: "must be at least 1",
            });
        }
        if self.network.probe_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.probe_timeout_ms",
                reason: "must be positive",
            });
        }
        self.seed_list(NetworkVariant::Main)?;
        self.seed_list(NetworkVariant::Dev)?;
        Ok(())
    }

    /// Default config targeting `variant`.
    pub fn for_variant(variant: NetworkVariant) -> Self {
        let mut config = Self::default();
        config.network.variant = variant;
        config
    }

    /// Override the number of submissions per broadcast.
    #[must_use]
    pub fn with_max_broadcast_peers(mut self, max_broadcast_peers: usize) -> Self {
        self.network.max_broadcast_peers = max_broadcast_peers;
        self
    }

    /// Override the probe timeout.
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.network.probe_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Replace the seed list of `variant`.
    #[must_use]
    pub fn with_seeds(mut self, variant: NetworkVariant, seeds: &[PeerAddress]) -> Self {
        let entries = Some(seeds.iter().map(ToString::to_string).collect());
        match variant {
            NetworkVariant::Main => self.seeds.main = entries,
            NetworkVariant::Dev => self.seeds.dev = entries,
        }
        self
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.network.probe_timeout_ms)
    }

    /// Seed list for `variant`: the override if present, else the built-in one.
    pub fn seed_list(&self, variant: NetworkVariant) -> Result<SeedList, ConfigError> {
        let overrides = match variant {
            NetworkVariant::Main => &self.seeds.main,
            NetworkVariant::Dev => &self.seeds.dev,
        };
        let Some(entries) = overrides else {
            return Ok(SeedList::builtin(variant));
        };

        let peers = entries
            .iter()
            .map(|entry| entry.parse::<PeerAddress>().map_err(ConfigError::InvalidPeer))
            .collect::<Result<Vec<_>, _>>()?;
        SeedList::new(peers).ok_or(ConfigError::EmptySeedList(variant))
    }
}
