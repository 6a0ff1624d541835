//! # Network Services
//!
//! Wires the domain to the ports.
//!
//! - `SeedRegistry` draws seed peers per variant.
//! - `PeerProbe` answers "is this peer online?" as a plain boolean.
//! - `NetworkBootstrap` runs the bootstrap state machine and implements
//!   `NetworkBootstrapApi`.
//! - `BroadcastCoordinator` fans a payload out to several peers.
//! - `QueryService` issues read queries against the active peer.
//!
//! All of them share one `NetworkContext`, passed in at construction.

// Semantic submodules
mod api;
mod bootstrap;
mod broadcast;
mod context;
mod peer;
mod probe;
mod queries;
mod seed_registry;

// Re-export public API
pub use bootstrap::NetworkBootstrap;
pub use broadcast::BroadcastCoordinator;
pub use context::{ActiveNetwork, NetworkContext};
pub use peer::PeerHandle;
pub use probe::PeerProbe;
pub use queries::QueryService;
pub use seed_registry::SeedRegistry;
