//! In-memory transport for testing.

use crate::domain::{PeerAddress, TransportError};
use crate::paths;
use crate::ports::{HttpMethod, PeerRequest, PeerTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// A request observed by `MockPeerTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Target peer.
    pub peer: PeerAddress,
    /// Request method.
    pub method: HttpMethod,
    /// Path including query string.
    pub path: String,
    /// Headers sent with the request.
    pub headers: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Body(Vec<u8>),
    Fail(TransportError),
}

/// Mock transport with per-peer, per-path scripted replies.
///
/// Unscripted paths answer `404`; peers marked offline refuse every
/// request. Every request is recorded, including refused ones.
#[derive(Debug, Default)]
pub struct MockPeerTransport {
    routes: Mutex<HashMap<(PeerAddress, String), MockReply>>,
    offline: Mutex<HashSet<PeerAddress>>,
    calls: Mutex<Vec<RecordedCall>>,
    delay: Mutex<Option<Duration>>,
}

impl MockPeerTransport {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` on `peer` with `body`.
    pub fn respond(&self, peer: &PeerAddress, path: &str, body: impl Into<String>) {
        self.routes.lock().insert(
            (peer.clone(), path.to_string()),
            MockReply::Body(body.into().into_bytes()),
        );
    }

    /// Fail `path` on `peer` with `error`.
    pub fn fail(&self, peer: &PeerAddress, path: &str, error: TransportError) {
        self.routes
            .lock()
            .insert((peer.clone(), path.to_string()), MockReply::Fail(error));
    }

    /// Refuse every request to `peer`.
    pub fn set_offline(&self, peer: &PeerAddress) {
        self.offline.lock().insert(peer.clone());
    }

    /// Delay every reply, to widen race windows in concurrency tests.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// Script a healthy Ark peer on `peer` serving the bootstrap endpoints,
    /// an empty peer list and accepting transactions.
    pub fn serve_ark_peer(&self, peer: &PeerAddress, nethash: &str, version_byte: u8, version: &str) {
        self.respond(peer, paths::PEER_STATUS, r#"{"success":true,"height":3000000}"#);
        self.respond(
            peer,
            paths::AUTO_CONFIGURE,
            format!(
                r#"{{"success":true,"network":{{"nethash":"{}","token":"ARK","symbol":"A","explorer":"https://explorer.ark.io","version":{}}}}}"#,
                nethash, version_byte
            ),
        );
        self.respond(
            peer,
            paths::FEES,
            r#"{"success":true,"fees":{"send":10000000,"vote":100000000,"secondsignature":500000000,"delegate":2500000000,"multisignature":500000000}}"#,
        );
        self.respond(
            peer,
            &paths::peer_record(&peer.host, peer.port),
            format!(
                r#"{{"success":true,"peer":{{"ip":"{}","port":{},"version":"{}","status":"OK","height":3000000}}}}"#,
                peer.host, peer.port, version
            ),
        );
        self.respond(peer, paths::PEERS, r#"{"success":true,"peers":[]}"#);
        self.respond(
            peer,
            paths::POST_TRANSACTIONS,
            r#"{"success":true,"transactionIds":["a1b2c3"]}"#,
        );
    }

    /// Publish `peers` as `peer`'s known-peer list, all with status `OK`.
    pub fn serve_peer_list(&self, peer: &PeerAddress, peers: &[PeerAddress], version: &str) {
        let records: Vec<String> = peers
            .iter()
            .map(|p| {
                format!(
                    r#"{{"ip":"{}","port":{},"version":"{}","status":"OK"}}"#,
                    p.host, p.port, version
                )
            })
            .collect();
        self.respond(
            peer,
            paths::PEERS,
            format!(r#"{{"success":true,"peers":[{}]}}"#, records.join(",")),
        );
    }

    /// All recorded calls, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Number of recorded calls whose path starts with `prefix`.
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.path.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl PeerTransport for MockPeerTransport {
    async fn send(
        &self,
        peer: &PeerAddress,
        request: PeerRequest,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().push(RecordedCall {
            peer: peer.clone(),
            method: request.method,
            path: request.path.clone(),
            headers: request.headers.clone(),
        });

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.offline.lock().contains(peer) {
            return Err(TransportError::ConnectionRefused);
        }

        let reply = self
            .routes
            .lock()
            .get(&(peer.clone(), request.path))
            .cloned();
        match reply {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::Fail(err)) => Err(err),
            None => Err(TransportError::Status(404)),
        }
    }
}
