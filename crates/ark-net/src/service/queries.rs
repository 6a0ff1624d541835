use super::context::NetworkContext;
use super::peer::PeerHandle;
use crate::adapters::JsonCodec;
use crate::domain::{
    Account, AccountResponse, BalanceResponse, ClientError, HeightResponse, PeerAddress,
    PeerListResponse, PeerRecord, TransactionPostResponse, TransactionRecord,
    TransactionResponse, TransactionSubmission,
};
use crate::paths;
use crate::ports::{Codec, PeerRequest, PeerTransport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Read queries and single-peer submission.
///
/// Every call goes to the active peer unless `peer` names another one; an
/// explicit peer is bound to the current settings so its responses are
/// validated the same way.
pub struct QueryService<C = JsonCodec> {
    transport: Arc<dyn PeerTransport>,
    codec: C,
    context: Arc<NetworkContext>,
}

impl<C: Codec> QueryService<C> {
    /// Create a query service over `context`.
    pub fn new(transport: Arc<dyn PeerTransport>, codec: C, context: Arc<NetworkContext>) -> Self {
        Self {
            transport,
            codec,
            context,
        }
    }

    fn target(&self, peer: Option<&PeerAddress>) -> Result<PeerHandle, ClientError> {
        let network = self.context.current()?;
        Ok(match peer {
            Some(address) => PeerHandle::bound(address.clone(), Arc::clone(network.settings())),
            None => network.active_peer().clone(),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: PeerRequest,
        peer: Option<&PeerAddress>,
    ) -> Result<T, ClientError> {
        let target = self.target(peer)?;
        target
            .request(self.transport.as_ref(), &self.codec, request)
            .await
    }

    /// Account by address.
    pub async fn get_account(
        &self,
        address: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<Account, ClientError> {
        let response: AccountResponse = self
            .fetch(PeerRequest::get(paths::account(address)), peer)
            .await?;
        Ok(response.account)
    }

    /// Confirmed and unconfirmed balance of an address.
    pub async fn get_balance(
        &self,
        address: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<BalanceResponse, ClientError> {
        self.fetch(PeerRequest::get(paths::balance(address)), peer)
            .await
    }

    /// Current chain height.
    pub async fn get_height(&self, peer: Option<&PeerAddress>) -> Result<HeightResponse, ClientError> {
        self.fetch(PeerRequest::get(paths::BLOCK_HEIGHT), peer).await
    }

    /// Confirmed transaction by id.
    pub async fn get_transaction(
        &self,
        id: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionRecord, ClientError> {
        let response: TransactionResponse = self
            .fetch(PeerRequest::get(paths::transaction(id)), peer)
            .await?;
        Ok(response.transaction)
    }

    /// Peers known to the target.
    pub async fn get_peers(&self, peer: Option<&PeerAddress>) -> Result<Vec<PeerRecord>, ClientError> {
        let response: PeerListResponse = self.fetch(PeerRequest::get(paths::PEERS), peer).await?;
        Ok(response.peers)
    }

    /// Submit `payload` to a single peer.
    pub async fn post_transaction<P>(
        &self,
        payload: &P,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionPostResponse, ClientError>
    where
        P: Serialize + Sync,
    {
        let body = self.codec.encode(&TransactionSubmission {
            transactions: [payload],
        })?;
        self.fetch(PeerRequest::post(paths::POST_TRANSACTIONS, body), peer)
            .await
    }
}
