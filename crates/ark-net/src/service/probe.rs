use super::peer::PeerHandle;
use crate::domain::StatusResponse;
use crate::paths;
use crate::ports::{Codec, PeerRequest, PeerTransport};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Boolean liveness check.
///
/// Any failure (timeout, refused connection, error status, undecodable or
/// unsuccessful status body) means "not online". Nothing is propagated.
pub struct PeerProbe<C> {
    transport: Arc<dyn PeerTransport>,
    codec: C,
    timeout: Duration,
}

impl<C: Codec> PeerProbe<C> {
    /// Create a probe bounded by `timeout` per check.
    pub fn new(transport: Arc<dyn PeerTransport>, codec: C, timeout: Duration) -> Self {
        Self {
            transport,
            codec,
            timeout,
        }
    }

    /// Whether `peer` answers its status endpoint.
    pub async fn is_online(&self, peer: &PeerHandle) -> bool {
        let check = peer.request::<StatusResponse, C>(
            self.transport.as_ref(),
            &self.codec,
            PeerRequest::get(paths::PEER_STATUS),
        );

        match tokio::time::timeout(self.timeout, check).await {
            Ok(Ok(status)) => status.success,
            Ok(Err(err)) => {
                debug!(peer = %peer.address(), error = %err, "[ark-net] probe failed");
                false
            }
            Err(_) => {
                debug!(peer = %peer.address(), timeout_ms = self.timeout.as_millis() as u64, "[ark-net] probe timed out");
                false
            }
        }
    }
}
