//! # Domain Value Objects
//!
//! Immutable value types shared by bootstrap, queries and broadcast.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A remote node's reachable address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerAddress {
    /// IP address or host name.
    pub host: String,
    /// API port.
    pub port: u16,
}

impl PeerAddress {
    /// Create a new peer address.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for PeerAddress {
    type Err = String;

    /// Parse `host:port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("missing port in peer address '{}'", s))?;
        if host.is_empty() {
            return Err(format!("missing host in peer address '{}'", s));
        }
        let port = port
            .parse::<u16>()
            .map_err(|e| format!("invalid port in peer address '{}': {}", s, e))?;
        Ok(Self::new(host, port))
    }
}

/// Which Ark network the client talks to.
///
/// Selects the seed list and the live parameters valid together with it;
/// the two are never mixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkVariant {
    /// Live network, real funds.
    #[serde(alias = "mainnet")]
    Main,
    /// Development network.
    #[default]
    #[serde(alias = "devnet")]
    Dev,
}

impl NetworkVariant {
    /// Canonical name used in logs and config files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "mainnet",
            Self::Dev => "devnet",
        }
    }
}

impl fmt::Display for NetworkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "dev" | "devnet" => Ok(Self::Dev),
            other => Err(format!("unknown network variant '{}'", other)),
        }
    }
}

/// Per-transaction-type fees in arktoshi, as published by `/api/blocks/getFees`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Plain transfer.
    pub send: u64,
    /// Delegate vote.
    pub vote: u64,
    /// Second-signature registration.
    #[serde(rename = "secondsignature")]
    pub second_signature: u64,
    /// Delegate registration.
    pub delegate: u64,
    /// Multi-signature registration.
    #[serde(rename = "multisignature")]
    pub multi_signature: u64,
}

/// Parameters negotiated with a confirmed peer.
///
/// Built once per bootstrap and shared behind an `Arc`; a network switch
/// replaces the whole value, never individual fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkSettings {
    /// Port of the confirmed peer.
    pub port: u16,
    /// Address version byte of the network.
    pub version_byte_prefix: u8,
    /// Protocol version reported by the confirmed peer.
    pub protocol_version: String,
    /// Identifier peers use to confirm they are on the same network.
    pub network_hash: String,
    /// Fee schedule of the network.
    pub fee_schedule: FeeSchedule,
    /// Number of submissions per broadcast.
    pub max_broadcast_peers: usize,
}
