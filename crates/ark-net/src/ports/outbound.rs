//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces the client **requires** the host application
//! (or the bundled adapters) to implement.

use crate::domain::{CodecError, PeerAddress, TransportError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Request method. Ark peers only distinguish reads from writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read request.
    Get,
    /// Write request.
    Post,
}

/// A single request to a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Path including the query string.
    pub path: String,
    /// Encoded body for writes.
    pub body: Option<Vec<u8>>,
    /// Extra headers (`nethash`, `version`, `port` once warmed up).
    pub headers: Vec<(&'static str, String)>,
}

impl PeerRequest {
    /// A read request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// A write request carrying `body`.
    pub fn post(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// Abstract interface for talking to a peer.
///
/// Each call either yields the raw body or an opaque failure. Retry,
/// pooling and TLS are the implementation's business.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; broadcast issues requests
/// concurrently from one shared transport.
#[async_trait]
pub trait PeerTransport: Send + Sync {
    /// Send `request` to `peer` and return the response body.
    async fn send(&self, peer: &PeerAddress, request: PeerRequest)
        -> Result<Vec<u8>, TransportError>;
}

/// Abstract interface for turning bodies into typed records and back.
pub trait Codec: Send + Sync {
    /// Decode a response body.
    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, CodecError>;

    /// Encode a request body.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;
}

/// Abstract source of randomness for seed and broadcast peer selection.
///
/// Enables deterministic tests by injecting scripted draws.
pub trait RandomSource: Send + Sync {
    /// Uniform value in `0..max`. Returns 0 when `max` is 0.
    fn random_usize(&self, max: usize) -> usize;
}
