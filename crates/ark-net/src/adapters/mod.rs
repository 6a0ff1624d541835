//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! - `json` - `JsonCodec` (always available)
//! - `random` - random sources (always available)
//! - `http` - `HttpPeerTransport` (feature `http`)
//! - `mocks` - `MockPeerTransport` (feature `test-utils`)

pub mod json;
pub mod random;

#[cfg(feature = "http")]
pub mod http;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use json::JsonCodec;
pub use random::{FixedRandomSource, ScriptedRandomSource, ThreadRandomSource};

#[cfg(feature = "http")]
pub use http::HttpPeerTransport;

#[cfg(any(test, feature = "test-utils"))]
pub use mocks::{MockPeerTransport, RecordedCall};
