//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** APIs the client exposes to applications
//! - **Driven Ports (Outbound):** capabilities the client requires from adapters

pub mod inbound;
pub mod outbound;

pub use inbound::NetworkBootstrapApi;
pub use outbound::{Codec, HttpMethod, PeerRequest, PeerTransport, RandomSource};
