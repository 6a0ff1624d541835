//! # Domain Errors
//!
//! Error types for the bootstrap, query and broadcast paths.

use super::value_objects::{NetworkVariant, PeerAddress};
use std::fmt;
use thiserror::Error;

/// Failure reported by a `PeerTransport`.
///
/// The core never inspects these beyond logging them; liveness probing
/// collapses every variant into "not online".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Operation timed out waiting for the peer.
    #[error("request timed out")]
    Timeout,

    /// The peer refused or dropped the connection.
    #[error("connection refused by peer")]
    ConnectionRefused,

    /// The peer answered with a non-success HTTP status.
    #[error("peer answered with status {0}")]
    Status(u16),

    /// Anything else the transport could not classify.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Failure reported by a `Codec`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The body could not be decoded into the requested record.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Encode(String),
}

/// The three requests issued against a confirmed peer while negotiating
/// network settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationStep {
    /// `/api/loader/autoconfigure`
    AutoConfigure,
    /// `/api/blocks/getFees`
    FeeSchedule,
    /// `/api/peers/get` for the confirmed peer itself
    PeerRecord,
}

impl fmt::Display for NegotiationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoConfigure => write!(f, "auto-configure"),
            Self::FeeSchedule => write!(f, "fee schedule"),
            Self::PeerRecord => write!(f, "peer record"),
        }
    }
}

/// Client error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No network settings are published: the client has not bootstrapped
    /// yet, or a network switch is in progress.
    #[error("network not ready: bootstrap has not completed")]
    NotReady,

    /// Every attempt allowed for the variant's seed list hit an offline peer.
    #[error("unable to connect to a seed peer on {variant} after {attempts} attempts")]
    BootstrapExhausted {
        /// Variant whose seed list was exhausted
        variant: NetworkVariant,
        /// Number of liveness probes issued
        attempts: usize,
    },

    /// The confirmed peer was alive but one of the negotiation requests
    /// failed or returned undecodable data.
    #[error("network negotiation with {peer} failed at {step}: {reason}")]
    Negotiation {
        /// Peer the negotiation ran against
        peer: PeerAddress,
        /// Request that failed
        step: NegotiationStep,
        /// Underlying failure
        reason: String,
    },

    /// Transport-level failure on a regular request.
    #[error("request to {peer} failed: {source}")]
    Transport {
        /// Peer the request was sent to
        peer: PeerAddress,
        /// Transport failure
        #[source]
        source: TransportError,
    },

    /// The response body could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The peer answered `success: false`.
    #[error("peer rejected request: {0}")]
    Rejected(String),

    /// The peer reports a network hash other than the negotiated one.
    #[error("network hash mismatch: expected {expected}, peer reported {actual}")]
    NetHashMismatch {
        /// Negotiated network hash
        expected: String,
        /// Hash carried by the response
        actual: String,
    },
}

impl ClientError {
    /// Whether this error leaves the client without published settings.
    pub fn is_bootstrap_failure(&self) -> bool {
        matches!(
            self,
            Self::BootstrapExhausted { .. } | Self::Negotiation { .. }
        )
    }
}
