use super::context::{ActiveNetwork, NetworkContext};
use super::peer::PeerHandle;
use super::probe::PeerProbe;
use super::seed_registry::SeedRegistry;
use crate::adapters::JsonCodec;
use crate::domain::{
    AutoConfigureResponse, ClientError, FeesResponse, NegotiationStep, NetworkSettings,
    NetworkVariant, PeerAddress, PeerListResponse, PeerRecord, PeerRecordResponse,
};
use crate::paths;
use crate::ports::{Codec, PeerRequest, PeerTransport};
use futures::TryFutureExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where a bootstrap starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BootstrapTarget {
    /// Random live seed of the variant.
    Variant(NetworkVariant),
    /// Caller-supplied peer, trusted without a probe.
    Explicit(PeerAddress),
}

/// Runs the bootstrap state machine and publishes its result.
///
/// Steps run strictly in order: seed selection and liveness check
/// (variant form only), settings negotiation, warm-up, publication. The
/// whole sequence holds the context's writer lock, so concurrent bootstraps
/// serialize and the later one replaces the earlier one wholesale.
pub struct NetworkBootstrap<C = JsonCodec> {
    transport: Arc<dyn PeerTransport>,
    codec: C,
    registry: SeedRegistry,
    probe: PeerProbe<C>,
    context: Arc<NetworkContext>,
    max_broadcast_peers: usize,
}

impl<C: Codec + Clone> NetworkBootstrap<C> {
    /// Wire a bootstrap over `transport`, publishing into `context`.
    pub fn new(
        transport: Arc<dyn PeerTransport>,
        codec: C,
        registry: SeedRegistry,
        context: Arc<NetworkContext>,
        probe_timeout: Duration,
        max_broadcast_peers: usize,
    ) -> Self {
        let probe = PeerProbe::new(Arc::clone(&transport), codec.clone(), probe_timeout);
        Self {
            transport,
            codec,
            registry,
            probe,
            context,
            max_broadcast_peers,
        }
    }

    /// Context this bootstrap publishes into.
    pub fn context(&self) -> &Arc<NetworkContext> {
        &self.context
    }

    /// Seed lists in use.
    pub fn registry(&self) -> &SeedRegistry {
        &self.registry
    }

    /// Draw seeds until one answers the liveness probe.
    ///
    /// Gives up after as many probes as the variant has seeds. Draws are
    /// independent, so an offline seed may be drawn twice and a live one
    /// never; the ceiling still holds.
    pub async fn find_initial_peer(&self, variant: NetworkVariant) -> Result<PeerHandle, ClientError> {
        let max_attempts = self.registry.max_attempts(variant);

        for attempt in 1..=max_attempts {
            let candidate = PeerHandle::unbound(self.registry.pick_random(variant));
            if self.probe.is_online(&candidate).await {
                info!(
                    peer = %candidate.address(),
                    %variant,
                    attempt,
                    "[ark-net] seed peer online"
                );
                return Ok(candidate);
            }
            debug!(
                peer = %candidate.address(),
                attempt,
                max_attempts,
                "[ark-net] seed peer offline, drawing another"
            );
        }

        warn!(%variant, attempts = max_attempts, "[ark-net] no seed peer reachable");
        Err(ClientError::BootstrapExhausted {
            variant,
            attempts: max_attempts,
        })
    }

    /// Fetch auto-configuration, fee schedule and the peer's own record,
    /// then assemble the settings.
    ///
    /// All three requests must succeed. The first failure aborts the others
    /// and is reported as `Negotiation` naming the failed step.
    pub async fn negotiate(&self, peer: &PeerHandle) -> Result<NetworkSettings, ClientError> {
        let address = peer.address();
        let transport = self.transport.as_ref();
        let failed_at = |step: NegotiationStep| {
            move |err: ClientError| ClientError::Negotiation {
                peer: address.clone(),
                step,
                reason: err.to_string(),
            }
        };

        let (config, fees, record) = futures::try_join!(
            peer.request::<AutoConfigureResponse, C>(
                transport,
                &self.codec,
                PeerRequest::get(paths::AUTO_CONFIGURE),
            )
            .map_err(failed_at(NegotiationStep::AutoConfigure)),
            peer.request::<FeesResponse, C>(transport, &self.codec, PeerRequest::get(paths::FEES))
                .map_err(failed_at(NegotiationStep::FeeSchedule)),
            peer.request::<PeerRecordResponse, C>(
                transport,
                &self.codec,
                PeerRequest::get(paths::peer_record(&address.host, address.port)),
            )
            .map_err(failed_at(NegotiationStep::PeerRecord)),
        )?;

        let settings = NetworkSettings {
            port: address.port,
            version_byte_prefix: config.network.version,
            protocol_version: record.peer.version,
            network_hash: config.network.nethash,
            fee_schedule: fees.fees,
            max_broadcast_peers: self.max_broadcast_peers,
        };
        debug!(
            peer = %address,
            nethash = %settings.network_hash,
            version = %settings.protocol_version,
            "[ark-net] network settings negotiated"
        );
        Ok(settings)
    }

    /// Bind a fresh handle for `address` to `settings` and collect the
    /// peers it reports as usable.
    ///
    /// A failing peer list is not fatal; the returned list is then empty
    /// and broadcasts go to the active peer.
    pub async fn warm_up(
        &self,
        address: PeerAddress,
        settings: &Arc<NetworkSettings>,
    ) -> (PeerHandle, Vec<PeerAddress>) {
        let active = PeerHandle::bound(address, Arc::clone(settings));
        let known = match active
            .request::<PeerListResponse, C>(
                self.transport.as_ref(),
                &self.codec,
                PeerRequest::get(paths::PEERS),
            )
            .await
        {
            Ok(list) => list
                .peers
                .into_iter()
                .filter(PeerRecord::is_ok)
                .map(|record| PeerAddress::new(record.ip, record.port))
                .collect(),
            Err(err) => {
                warn!(
                    peer = %active.address(),
                    error = %err,
                    "[ark-net] peer list unavailable, broadcasting via active peer only"
                );
                Vec::new()
            }
        };
        (active, known)
    }

    pub(crate) async fn bootstrap(
        &self,
        target: BootstrapTarget,
        switching: bool,
    ) -> Result<Arc<NetworkSettings>, ClientError> {
        let _writer = self.context.lock_writer().await;
        if switching {
            self.context.invalidate();
        }

        let (confirmed, variant) = match target {
            BootstrapTarget::Variant(variant) => (self.find_initial_peer(variant).await?, Some(variant)),
            BootstrapTarget::Explicit(address) => {
                info!(peer = %address, "[ark-net] bootstrapping from explicit peer");
                (PeerHandle::unbound(address), None)
            }
        };

        let settings = Arc::new(self.negotiate(&confirmed).await?);
        let (active, known) = self.warm_up(confirmed.address().clone(), &settings).await;
        let network = self.context.publish(ActiveNetwork::new(
            Arc::clone(&settings),
            active,
            known,
            variant,
        ));
        Ok(Arc::clone(network.settings()))
    }
}
