//! Blocking facade.
//!
//! Owns a tokio runtime and blocks on the async client. Meant for the
//! outermost layer of synchronous applications only; never call it from
//! inside an async context.

use crate::client::ArkClient;
use crate::config::{ClientConfig, ConfigError};
use crate::domain::{
    Account, BalanceResponse, BroadcastOutcome, ClientError, HeightResponse, NetworkSettings,
    NetworkVariant, PeerAddress, TransactionPostResponse, TransactionRecord,
};
use crate::ports::{NetworkBootstrapApi, PeerTransport};
use serde::Serialize;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Synchronous wrapper around `ArkClient`.
pub struct BlockingClient {
    runtime: Runtime,
    inner: ArkClient,
}

impl BlockingClient {
    /// Client over `transport`.
    pub fn new(config: ClientConfig, transport: Arc<dyn PeerTransport>) -> Result<Self, ConfigError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ark-net-blocking")
            .enable_all()
            .build()?;
        let inner = ArkClient::new(config, transport)?;
        Ok(Self { runtime, inner })
    }

    /// Client over the bundled HTTP transport.
    #[cfg(feature = "http")]
    pub fn connect_http(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = crate::adapters::HttpPeerTransport::new(&config.transport)?;
        Self::new(config, Arc::new(transport))
    }

    /// The async client underneath.
    pub fn inner(&self) -> &ArkClient {
        &self.inner
    }

    /// Published settings.
    pub fn settings(&self) -> Result<Arc<NetworkSettings>, ClientError> {
        self.inner.settings()
    }

    /// Bootstrap the configured variant.
    pub fn start(&self) -> Result<Arc<NetworkSettings>, ClientError> {
        self.runtime.block_on(self.inner.start())
    }

    /// Bootstrap `variant`.
    pub fn start_network(&self, variant: NetworkVariant) -> Result<Arc<NetworkSettings>, ClientError> {
        self.runtime.block_on(self.inner.start_network(variant))
    }

    /// Bootstrap from `peer` without probing it.
    pub fn start_network_at(&self, peer: PeerAddress) -> Result<Arc<NetworkSettings>, ClientError> {
        self.runtime.block_on(self.inner.start_network_at(peer))
    }

    /// Clear the published settings, then bootstrap `variant`.
    pub fn switch_network(&self, variant: NetworkVariant) -> Result<Arc<NetworkSettings>, ClientError> {
        self.runtime.block_on(self.inner.switch_network(variant))
    }

    /// Clear the published settings, then bootstrap from `peer`.
    pub fn switch_network_at(&self, peer: PeerAddress) -> Result<Arc<NetworkSettings>, ClientError> {
        self.runtime.block_on(self.inner.switch_network_at(peer))
    }

    /// Submit `payload` to `max_broadcast_peers` peers.
    pub fn broadcast<P>(&self, payload: &P) -> Result<Vec<BroadcastOutcome>, ClientError>
    where
        P: Serialize + Sync,
    {
        self.runtime.block_on(self.inner.broadcast(payload))
    }

    /// Submit `payload` to one peer.
    pub fn post_transaction<P>(
        &self,
        payload: &P,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionPostResponse, ClientError>
    where
        P: Serialize + Sync,
    {
        self.runtime
            .block_on(self.inner.post_transaction(payload, peer))
    }

    /// Account by address.
    pub fn get_account(&self, address: &str, peer: Option<&PeerAddress>) -> Result<Account, ClientError> {
        self.runtime.block_on(self.inner.get_account(address, peer))
    }

    /// Balance of an address.
    pub fn get_balance(
        &self,
        address: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<BalanceResponse, ClientError> {
        self.runtime.block_on(self.inner.get_balance(address, peer))
    }

    /// Current chain height.
    pub fn get_height(&self, peer: Option<&PeerAddress>) -> Result<HeightResponse, ClientError> {
        self.runtime.block_on(self.inner.get_height(peer))
    }

    /// Transaction by id.
    pub fn get_transaction(
        &self,
        id: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionRecord, ClientError> {
        self.runtime.block_on(self.inner.get_transaction(id, peer))
    }
}
