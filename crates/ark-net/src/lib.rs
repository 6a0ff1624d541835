//! # Ark Network Client
//!
//! Joins an Ark network from a compiled-in seed list and talks to it.
//!
//! A bootstrap draws random seeds until one answers a liveness probe
//! (at most one probe per seed in the list), negotiates the network
//! settings with it (network hash, address version byte, protocol version,
//! fee schedule), and publishes those settings together with a warmed-up
//! active peer. Read queries go to the active peer; broadcasts fan a
//! transaction out to several known peers and report one outcome per
//! attempt.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** value types, seed lists, wire records, errors
//! - **Ports Layer:** `NetworkBootstrapApi` (inbound), `PeerTransport`,
//!   `Codec` and `RandomSource` (outbound)
//! - **Service Layer:** seed registry, probe, bootstrap, broadcast, queries
//! - **Adapters Layer:** JSON codec, random sources, HTTP transport (feature
//!   `http`), mock transport (feature `test-utils`)
//!
//! Network state lives in a `NetworkContext` shared explicitly by every
//! service of one client; there is no process-wide singleton.
//!
//! ## Features
//!
//! - `http` (default) - `HttpPeerTransport` over reqwest
//! - `config` (default) - TOML loading for `ClientConfig`
//! - `blocking` - `BlockingClient` owning a tokio runtime
//! - `test-utils` - `MockPeerTransport`, scripted random sources
//!
//! ## Example
//!
//! ```rust
//! use ark_net::{NetworkVariant, SeedList};
//!
//! let seeds = SeedList::builtin(NetworkVariant::Dev);
//! assert!(seeds.as_slice().iter().all(|peer| peer.port == 4002));
//! ```

#![warn(missing_docs)]

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod service;

mod client;

// =============================================================================
// ADAPTERS
// =============================================================================

/// Concrete implementations of the outbound ports.
pub mod adapters;

/// Blocking facade.
/// Requires feature: `blocking`
#[cfg(feature = "blocking")]
pub mod blocking;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain
pub use domain::{
    BroadcastOutcome, ClientError, CodecError, FeeSchedule, NegotiationStep, NetworkSettings,
    NetworkVariant, PeerAddress, PeerSeed, SeedList, TransportError, DEVNET_SEEDS, MAINNET_SEEDS,
};

// Wire records
pub use domain::{
    Account, BalanceResponse, HeightResponse, PeerRecord, TransactionPostResponse,
    TransactionRecord,
};

// Port traits
pub use ports::{Codec, HttpMethod, NetworkBootstrapApi, PeerRequest, PeerTransport, RandomSource};

// Services
pub use service::{
    ActiveNetwork, BroadcastCoordinator, NetworkBootstrap, NetworkContext, PeerHandle, PeerProbe,
    QueryService, SeedRegistry,
};

// Client
pub use client::ArkClient;
pub use config::{ClientConfig, ConfigError};

#[cfg(feature = "blocking")]
pub use blocking::BlockingClient;

// Adapters
pub use adapters::{JsonCodec, ThreadRandomSource};

#[cfg(feature = "http")]
pub use adapters::HttpPeerTransport;

#[cfg(any(test, feature = "test-utils"))]
pub use adapters::{FixedRandomSource, MockPeerTransport, ScriptedRandomSource};
