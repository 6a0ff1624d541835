//! Ark API v1 endpoint paths used by the client.
//!
//! Caller-supplied query values are percent-encoded.

use urlencoding::encode;

/// Liveness probe.
pub const PEER_STATUS: &str = "/peer/status";
/// Network auto-configuration.
pub const AUTO_CONFIGURE: &str = "/api/loader/autoconfigure";
/// Fee schedule.
pub const FEES: &str = "/api/blocks/getFees";
/// Peers known to the queried node.
pub const PEERS: &str = "/api/peers";
/// Transaction submission.
pub const POST_TRANSACTIONS: &str = "/peer/transactions";
/// Current chain height.
pub const BLOCK_HEIGHT: &str = "/api/blocks/getHeight";

/// Self record of the peer at `host:port`.
pub fn peer_record(host: &str, port: u16) -> String {
    format!("/api/peers/get?ip={}&port={}", encode(host), port)
}

/// Account by address.
pub fn account(address: &str) -> String {
    format!("/api/accounts?address={}", encode(address))
}

/// Balance by address.
pub fn balance(address: &str) -> String {
    format!("/api/accounts/getBalance?address={}", encode(address))
}

/// Confirmed transaction by id.
pub fn transaction(id: &str) -> String {
    format!("/api/transactions/get?id={}", encode(id))
}
