//! Test fixtures shared by the integration flows and benchmarks.

use ark_net::PeerAddress;
use axum::body::{to_bytes, Body};
use axum::extract::{Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Largest request body the node accepts.
const MAX_BODY: usize = 1024 * 1024;

/// A request as seen by `FakeArkNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    /// Path without the query string.
    pub path: String,
    pub query: Option<String>,
    /// Value of the `nethash` header, if sent.
    pub nethash: Option<String>,
    pub body: String,
}

struct NodeState {
    address: PeerAddress,
    nethash: String,
    version_byte: u8,
    version: String,
    fail_fees: AtomicBool,
    reject_transactions: AtomicBool,
    peers: Mutex<Vec<PeerAddress>>,
    seen: Mutex<Vec<SeenRequest>>,
}

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn peer_json(address: &PeerAddress, version: &str) -> Value {
    json!({
        "ip": address.host,
        "port": address.port,
        "version": version,
        "status": "OK",
    })
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn status() -> Reply {
    ok(json!({ "success": true, "height": 3_100_000 }))
}

async fn autoconfigure(State(state): State<Arc<NodeState>>) -> Reply {
    ok(json!({
        "success": true,
        "network": {
            "nethash": state.nethash,
            "token": "DARK",
            "symbol": "DA",
            "explorer": "http://localhost",
            "version": state.version_byte,
        }
    }))
}

async fn fees(State(state): State<Arc<NodeState>>) -> Reply {
    if state.fail_fees.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": "internal error" })),
        );
    }
    ok(json!({
        "success": true,
        "fees": {
            "send": 10_000_000u64,
            "vote": 100_000_000u64,
            "secondsignature": 500_000_000u64,
            "delegate": 2_500_000_000u64,
            "multisignature": 500_000_000u64,
        }
    }))
}

#[derive(Debug, Deserialize)]
struct PeerQuery {
    ip: String,
    port: u16,
}

async fn peer_record(State(state): State<Arc<NodeState>>, Query(query): Query<PeerQuery>) -> Reply {
    if query.ip != state.address.host || query.port != state.address.port {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "Peer not found" })),
        );
    }
    ok(json!({ "success": true, "peer": peer_json(&state.address, &state.version) }))
}

async fn peers(State(state): State<Arc<NodeState>>) -> Reply {
    let peers: Vec<Value> = state
        .peers
        .lock()
        .iter()
        .map(|peer| peer_json(peer, &state.version))
        .collect();
    ok(json!({ "success": true, "peers": peers }))
}

async fn height(State(state): State<Arc<NodeState>>) -> Reply {
    ok(json!({
        "success": true,
        "height": 3_100_000,
        "id": "9876",
        "nethash": state.nethash,
    }))
}

async fn transactions(State(state): State<Arc<NodeState>>) -> Reply {
    if state.reject_transactions.load(Ordering::SeqCst) {
        return ok(json!({ "success": false, "message": "Invalid transaction detected" }));
    }
    ok(json!({ "success": true, "transactionIds": ["a1b2c3"] }))
}

/// Log every request before it reaches its handler.
async fn record(
    State(state): State<Arc<NodeState>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY)
        .await
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)?;

    state.seen.lock().push(SeenRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        nethash: nethash_header(&parts.headers),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    Ok(next
        .run(Request::from_parts(parts, Body::from(bytes)))
        .await)
}

fn nethash_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("nethash")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn router(state: Arc<NodeState>) -> Router {
    Router::new()
        .route("/peer/status", get(status))
        .route("/api/loader/autoconfigure", get(autoconfigure))
        .route("/api/blocks/getFees", get(fees))
        .route("/api/peers/get", get(peer_record))
        .route("/api/peers", get(peers))
        .route("/api/blocks/getHeight", get(height))
        .route("/peer/transactions", post(transactions))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), record))
        .with_state(state)
}

// =============================================================================
// FAKE NODE
// =============================================================================

/// A local axum server answering the Ark v1 endpoints the client uses.
///
/// The server task is aborted on drop.
pub struct FakeArkNode {
    state: Arc<NodeState>,
    task: JoinHandle<()>,
}

impl FakeArkNode {
    /// Bind on an ephemeral localhost port and start serving.
    pub async fn start(nethash: &str, version_byte: u8) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let local = listener.local_addr()?;
        let state = Arc::new(NodeState {
            address: PeerAddress::new("127.0.0.1", local.port()),
            nethash: nethash.to_string(),
            version_byte,
            version: "1.1.1".to_string(),
            fail_fees: AtomicBool::new(false),
            reject_transactions: AtomicBool::new(false),
            peers: Mutex::new(Vec::new()),
            seen: Mutex::new(Vec::new()),
        });

        let app = router(Arc::clone(&state));
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { state, task })
    }

    pub fn address(&self) -> PeerAddress {
        self.state.address.clone()
    }

    pub fn fail_fees(&self) {
        self.state.fail_fees.store(true, Ordering::SeqCst);
    }

    pub fn reject_transactions(&self) {
        self.state.reject_transactions.store(true, Ordering::SeqCst);
    }

    /// Peers reported by `/api/peers`.
    pub fn set_peers(&self, peers: Vec<PeerAddress>) {
        *self.state.peers.lock() = peers;
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.state
            .seen
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

impl Drop for FakeArkNode {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// An address nothing listens on.
pub async fn closed_address() -> std::io::Result<PeerAddress> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(PeerAddress::new("127.0.0.1", port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_peer_record_matches_own_address_only() {
        let node = FakeArkNode::start("hash", 30).await.unwrap();
        let state = Arc::clone(&node.state);

        let (status, Json(body)) = peer_record(
            State(Arc::clone(&state)),
            Query(PeerQuery {
                ip: "127.0.0.1".to_string(),
                port: node.address().port,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["peer"]["version"], "1.1.1");

        let (status, _) = peer_record(
            State(state),
            Query(PeerQuery {
                ip: "10.0.0.9".to_string(),
                port: 4002,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_nethash_header_extracted() {
        let mut headers = HeaderMap::new();
        assert_eq!(nethash_header(&headers), None);
        headers.insert("nethash", "abc".parse().unwrap());
        assert_eq!(nethash_header(&headers).as_deref(), Some("abc"));
    }
}
