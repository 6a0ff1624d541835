use super::peer::PeerHandle;
use crate::domain::{ClientError, NetworkSettings, NetworkVariant, PeerAddress};
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

/// Everything one successful bootstrap produced.
///
/// Settings and active peer live in the same value so that readers can
/// only ever observe both from the same bootstrap.
#[derive(Debug)]
pub struct ActiveNetwork {
    settings: Arc<NetworkSettings>,
    active_peer: PeerHandle,
    known_peers: Vec<PeerAddress>,
    variant: Option<NetworkVariant>,
}

impl ActiveNetwork {
    pub(crate) fn new(
        settings: Arc<NetworkSettings>,
        active_peer: PeerHandle,
        known_peers: Vec<PeerAddress>,
        variant: Option<NetworkVariant>,
    ) -> Self {
        Self {
            settings,
            active_peer,
            known_peers,
            variant,
        }
    }

    /// Negotiated settings.
    pub fn settings(&self) -> &Arc<NetworkSettings> {
        &self.settings
    }

    /// Peer every read defaults to.
    pub fn active_peer(&self) -> &PeerHandle {
        &self.active_peer
    }

    /// Peers the active peer reported as usable; broadcast candidates.
    pub fn known_peers(&self) -> &[PeerAddress] {
        &self.known_peers
    }

    /// Variant bootstrapped from, `None` for an explicit peer.
    pub fn variant(&self) -> Option<NetworkVariant> {
        self.variant
    }
}

/// Network state shared by every collaborator of one client.
///
/// Passed explicitly (behind an `Arc`) instead of living in a process-wide
/// singleton, so independent clients and tests never share state.
///
/// Publication swaps a single `Arc<ActiveNetwork>`; a reader sees either
/// nothing or one complete bootstrap result. Writers (bootstrap, switch)
/// serialize on an async lock held for the whole bootstrap.
#[derive(Debug, Default)]
pub struct NetworkContext {
    state: RwLock<Option<Arc<ActiveNetwork>>>,
    writer: Mutex<()>,
}

impl NetworkContext {
    /// An empty context; every request fails with `NotReady` until a
    /// bootstrap publishes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bootstrap result.
    pub fn current(&self) -> Result<Arc<ActiveNetwork>, ClientError> {
        self.state.read().clone().ok_or(ClientError::NotReady)
    }

    /// Current settings.
    pub fn settings(&self) -> Result<Arc<NetworkSettings>, ClientError> {
        self.current().map(|network| Arc::clone(network.settings()))
    }

    /// Current active peer.
    pub fn active_peer(&self) -> Result<PeerHandle, ClientError> {
        self.current().map(|network| network.active_peer().clone())
    }

    /// Whether settings are published.
    pub fn is_ready(&self) -> bool {
        self.state.read().is_some()
    }

    pub(crate) async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    pub(crate) fn publish(&self, network: ActiveNetwork) -> Arc<ActiveNetwork> {
        let network = Arc::new(network);
        info!(
            peer = %network.active_peer().address(),
            nethash = %network.settings().network_hash,
            known_peers = network.known_peers().len(),
            "[ark-net] network settings published"
        );
        *self.state.write() = Some(Arc::clone(&network));
        network
    }

    pub(crate) fn invalidate(&self) {
        if self.state.write().take().is_some() {
            info!("[ark-net] network settings cleared");
        }
    }
}
