//! # Driving Ports (Inbound API)
//!
//! The bootstrap API applications drive.

use crate::domain::{ClientError, NetworkSettings, NetworkVariant, PeerAddress};
use async_trait::async_trait;
use std::sync::Arc;

/// Primary API for joining a network.
///
/// Every method runs the full bootstrap sequence and, on success,
/// publishes the settings and the active peer in one step. On failure
/// nothing is published.
///
/// # Example
///
/// ```rust,ignore
/// use ark_net::{NetworkBootstrapApi, NetworkVariant};
///
/// async fn join<B: NetworkBootstrapApi>(api: &B) {
///     let settings = api.start_network(NetworkVariant::Dev).await?;
///     println!("joined {} (v{})", settings.network_hash, settings.protocol_version);
/// }
/// ```
#[async_trait]
pub trait NetworkBootstrapApi: Send + Sync {
    /// Bootstrap from a random live seed of `variant`.
    ///
    /// # Errors
    ///
    /// - `BootstrapExhausted` if no seed answered within the attempt ceiling
    /// - `Negotiation` if the live seed could not serve the settings
    async fn start_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError>;

    /// Bootstrap from a caller-supplied peer, trusted without a liveness probe.
    async fn start_network_at(&self, peer: PeerAddress)
        -> Result<Arc<NetworkSettings>, ClientError>;

    /// Clear the published settings, then bootstrap `variant`.
    ///
    /// Requests issued after the clear fail with `NotReady` until the new
    /// settings are published.
    async fn switch_network(
        &self,
        variant: NetworkVariant,
    ) -> Result<Arc<NetworkSettings>, ClientError>;

    /// Clear the published settings, then bootstrap from `peer`.
    async fn switch_network_at(
        &self,
        peer: PeerAddress,
    ) -> Result<Arc<NetworkSettings>, ClientError>;
}
