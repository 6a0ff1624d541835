//! Domain Entities

use super::errors::ClientError;
use super::messages::TransactionPostResponse;
use super::value_objects::PeerAddress;

/// Result of one broadcast submission.
///
/// A broadcast returns one of these per attempt, in attempt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Zero-based attempt index.
    pub attempt: usize,
    /// Peer the payload was submitted to.
    pub peer: PeerAddress,
    /// Peer response, or why this attempt failed.
    pub result: Result<TransactionPostResponse, ClientError>,
}

impl BroadcastOutcome {
    /// Whether the peer accepted the submission.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ClientError> {
        self.result.as_ref().err()
    }
}
