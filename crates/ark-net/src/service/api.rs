use super::bootstrap::{BootstrapTarget, NetworkBootstrap};
use crate::domain::{ClientError, NetworkSettings, NetworkVariant, PeerAddress};
use crate::ports::{Codec, NetworkBootstrapApi};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl<C: Codec + Clone> NetworkBootstrapApi for NetworkBootstrap<C> {
    async fn start_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap(BootstrapTarget::Variant(variant), false).await
    }

    async fn start_network_at(
        &self,
        peer: PeerAddress,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap(BootstrapTarget::Explicit(peer), false).await
    }

    async fn switch_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap(BootstrapTarget::Variant(variant), true).await
    }

    async fn switch_network_at(
        &self,
        peer: PeerAddress,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        self.bootstrap(BootstrapTarget::Explicit(peer), true).await
    }
}
