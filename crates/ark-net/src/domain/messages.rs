//! Wire records exchanged with Ark peers (API v1).
//!
//! Only the fields the client reads are modelled; unknown fields are ignored.

use super::value_objects::FeeSchedule;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Fields every Ark response may carry.
///
/// Decoded separately from the typed record so that a bound peer handle
/// can validate any response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    /// `false` when the peer rejected the request.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Error text on rejection.
    #[serde(default)]
    pub error: Option<String>,
    /// Alternative error text used by some endpoints.
    #[serde(default)]
    pub message: Option<String>,
    /// Network hash, when the endpoint reports it.
    #[serde(default)]
    pub nethash: Option<String>,
}

impl ResponseEnvelope {
    /// Best available rejection reason.
    pub fn reason(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "unspecified error".to_string())
    }
}

/// `/peer/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    /// Whether the peer considers itself healthy.
    pub success: bool,
    /// Current chain height.
    #[serde(default)]
    pub height: u64,
}

/// Network block of `/api/loader/autoconfigure`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderNetwork {
    /// Network hash.
    pub nethash: String,
    /// Address version byte.
    pub version: u8,
    /// Token name.
    #[serde(default)]
    pub token: Option<String>,
    /// Token symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Block explorer URL.
    #[serde(default)]
    pub explorer: Option<String>,
}

/// `/api/loader/autoconfigure`
#[derive(Debug, Clone, Deserialize)]
pub struct AutoConfigureResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Network parameters.
    pub network: LoaderNetwork,
}

/// `/api/blocks/getFees`
#[derive(Debug, Clone, Deserialize)]
pub struct FeesResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Fee schedule.
    pub fees: FeeSchedule,
}

/// A peer as reported by `/api/peers` and `/api/peers/get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRecord {
    /// Peer IP.
    pub ip: String,
    /// Peer API port.
    pub port: u16,
    /// Software/protocol version.
    #[serde(default)]
    pub version: String,
    /// `OK` when the peer is usable.
    #[serde(default)]
    pub status: String,
    /// Reported height.
    #[serde(default)]
    pub height: Option<u64>,
    /// Operating system.
    #[serde(default)]
    pub os: Option<String>,
    /// Round-trip delay in ms.
    #[serde(default)]
    pub delay: Option<u64>,
}

impl PeerRecord {
    /// Whether the network reports this peer as usable.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("OK")
    }
}

/// `/api/peers/get?ip=..&port=..`
#[derive(Debug, Clone, Deserialize)]
pub struct PeerRecordResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// The peer record.
    pub peer: PeerRecord,
}

/// `/api/peers`
#[derive(Debug, Clone, Deserialize)]
pub struct PeerListResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Peers known to the queried node.
    #[serde(default)]
    pub peers: Vec<PeerRecord>,
}

/// Body of `POST /peer/transactions`.
#[derive(Debug, Serialize)]
pub struct TransactionSubmission<'a, P: Serialize> {
    /// Transactions to relay; always exactly one here.
    pub transactions: [&'a P; 1],
}

/// Response of `POST /peer/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionPostResponse {
    /// Whether the peer accepted the submission.
    pub success: bool,
    /// Ids of the accepted transactions.
    #[serde(default, rename = "transactionIds")]
    pub transaction_ids: Vec<String>,
}

/// An account as returned by `/api/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account address.
    pub address: String,
    /// Confirmed balance, in arktoshi.
    #[serde(default)]
    pub balance: String,
    /// Balance including unconfirmed transactions.
    #[serde(default)]
    pub unconfirmed_balance: String,
    /// Public key once the account has sent a transaction.
    #[serde(default)]
    pub public_key: Option<String>,
}

/// `/api/accounts?address=..`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// The account.
    pub account: Account,
}

/// `/api/accounts/getBalance?address=..`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Confirmed balance.
    pub balance: String,
    /// Balance including unconfirmed transactions.
    #[serde(default)]
    pub unconfirmed_balance: String,
}

/// `/api/blocks/getHeight`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeightResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Chain height.
    pub height: u64,
    /// Id of the block at that height.
    #[serde(default)]
    pub id: Option<String>,
}

/// A transaction as returned by `/api/transactions/get`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Transaction id.
    pub id: String,
    /// Transaction type.
    #[serde(rename = "type", default)]
    pub kind: u8,
    /// Amount, in arktoshi.
    #[serde(default)]
    pub amount: u64,
    /// Fee, in arktoshi.
    #[serde(default)]
    pub fee: u64,
    /// Sender address.
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Recipient address.
    #[serde(default)]
    pub recipient_id: Option<String>,
    /// Confirmations so far.
    #[serde(default)]
    pub confirmations: u64,
}

/// `/api/transactions/get?id=..`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    /// Request outcome.
    #[serde(default = "default_true")]
    pub success: bool,
    /// The transaction.
    pub transaction: TransactionRecord,
}
