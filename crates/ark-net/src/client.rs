//! Composition root.
//!
//! `ArkClient` constructs every service up front and hands each the same
//! `NetworkContext`. Nothing is created lazily.

use crate::adapters::{JsonCodec, ThreadRandomSource};
use crate::config::{ClientConfig, ConfigError};
use crate::domain::{
    Account, BalanceResponse, BroadcastOutcome, ClientError, HeightResponse, NetworkSettings,
    NetworkVariant, PeerAddress, PeerRecord, TransactionPostResponse, TransactionRecord,
};
use crate::ports::{Codec, NetworkBootstrapApi, PeerTransport, RandomSource};
use crate::service::{
    BroadcastCoordinator, NetworkBootstrap, NetworkContext, PeerHandle, QueryService,
    SeedRegistry,
};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// An Ark client: bootstrap, queries and broadcast over one network context.
///
/// # Example
///
/// ```rust,ignore
/// use ark_net::{ArkClient, ClientConfig, NetworkBootstrapApi};
///
/// let client = ArkClient::connect_http(ClientConfig::default())?;
/// client.start().await?;
/// let height = client.get_height(None).await?;
/// ```
pub struct ArkClient<C = JsonCodec> {
    config: ClientConfig,
    context: Arc<NetworkContext>,
    bootstrap: NetworkBootstrap<C>,
    broadcaster: BroadcastCoordinator<C>,
    queries: QueryService<C>,
}

impl ArkClient<JsonCodec> {
    /// Client over `transport` with the JSON codec and thread-local RNG.
    pub fn new(config: ClientConfig, transport: Arc<dyn PeerTransport>) -> Result<Self, ConfigError> {
        Self::with_parts(config, transport, JsonCodec, Arc::new(ThreadRandomSource))
    }

    /// Client over the bundled HTTP transport.
    #[cfg(feature = "http")]
    pub fn connect_http(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = crate::adapters::HttpPeerTransport::new(&config.transport)?;
        Self::new(config, Arc::new(transport))
    }
}

impl<C: Codec + Clone> ArkClient<C> {
    /// Client built from explicit collaborators.
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn PeerTransport>,
        codec: C,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let context = Arc::new(NetworkContext::new());
        let registry = SeedRegistry::with_seeds(
            config.seed_list(NetworkVariant::Main)?,
            config.seed_list(NetworkVariant::Dev)?,
            Arc::clone(&random),
        );
        let bootstrap = NetworkBootstrap::new(
            Arc::clone(&transport),
            codec.clone(),
            registry,
            Arc::clone(&context),
            config.probe_timeout(),
            config.network.max_broadcast_peers,
        );
        let broadcaster = BroadcastCoordinator::new(
            Arc::clone(&transport),
            codec.clone(),
            Arc::clone(&context),
            random,
        );
        let queries = QueryService::new(transport, codec, Arc::clone(&context));

        info!(
            variant = %config.network.variant,
            max_broadcast_peers = config.network.max_broadcast_peers,
            "[ark-net] client created"
        );
        Ok(Self {
            config,
            context,
            bootstrap,
            broadcaster,
            queries,
        })
    }

    /// Configuration the client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared network context.
    pub fn context(&self) -> &Arc<NetworkContext> {
        &self.context
    }

    /// Whether a bootstrap has published settings.
    pub fn is_ready(&self) -> bool {
        self.context.is_ready()
    }

    /// Published settings.
    pub fn settings(&self) -> Result<Arc<NetworkSettings>, ClientError> {
        self.context.settings()
    }

    /// Published active peer.
    pub fn active_peer(&self) -> Result<PeerHandle, ClientError> {
        self.context.active_peer()
    }

    /// Bootstrap the configured variant.
    pub async fn start(&self) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap.start_network(self.config.network.variant).await
    }

    /// Submit `payload` to `max_broadcast_peers` peers.
    pub async fn broadcast<P>(&self, payload: &P) -> Result<Vec<BroadcastOutcome>, ClientError>
    where
        P: Serialize + Sync,
    {
        self.broadcaster.broadcast(payload).await
    }

    /// Submit `payload` to one peer.
    pub async fn post_transaction<P>(
        &self,
        payload: &P,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionPostResponse, ClientError>
    where
        P: Serialize + Sync,
    {
        self.queries.post_transaction(payload, peer).await
    }

    /// Account by address.
    pub async fn get_account(
        &self,
        address: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<Account, ClientError> {
        self.queries.get_account(address, peer).await
    }

    /// Balance of an address.
    pub async fn get_balance(
        &self,
        address: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<BalanceResponse, ClientError> {
        self.queries.get_balance(address, peer).await
    }

    /// Current chain height.
    pub async fn get_height(&self, peer: Option<&PeerAddress>) -> Result<HeightResponse, ClientError> {
        self.queries.get_height(peer).await
    }

    /// Transaction by id.
    pub async fn get_transaction(
        &self,
        id: &str,
        peer: Option<&PeerAddress>,
    ) -> Result<TransactionRecord, ClientError> {
        self.queries.get_transaction(id, peer).await
    }

    /// Peers known to the target.
    pub async fn get_peers(&self, peer: Option<&PeerAddress>) -> Result<Vec<PeerRecord>, ClientError> {
        self.queries.get_peers(peer).await
    }
}

#[async_trait]
impl<C: Codec + Clone> NetworkBootstrapApi for ArkClient<C> {
    async fn start_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap.start_network(variant).await
    }

    async fn start_network_at(
        &self,
        peer: PeerAddress,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap.start_network_at(peer).await
    }

    async fn switch_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap.switch_network(variant).await
    }

    async fn switch_network_at(
        &self,
        peer: PeerAddress,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap.switch_network_at(peer).await
    }
}
