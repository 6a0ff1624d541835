use super::context::{ActiveNetwork, NetworkContext};
use super::peer::PeerHandle;
use crate::adapters::JsonCodec;
use crate::domain::{BroadcastOutcome, ClientError, TransactionPostResponse, TransactionSubmission};
use crate::paths;
use crate::ports::{Codec, PeerRequest, PeerTransport, RandomSource};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Submits one payload to several peers, each attempt independent.
pub struct BroadcastCoordinator<C = JsonCodec> {
    transport: Arc<dyn PeerTransport>,
    codec: C,
    context: Arc<NetworkContext>,
    random: Arc<dyn RandomSource>,
}

impl<C: Codec> BroadcastCoordinator<C> {
    /// Create a coordinator reading peers and settings from `context`.
    pub fn new(
        transport: Arc<dyn PeerTransport>,
        codec: C,
        context: Arc<NetworkContext>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            transport,
            codec,
            context,
            random,
        }
    }

    /// Submit `payload` `max_broadcast_peers` times.
    ///
    /// Targets are drawn up front from the known peers (repeats allowed), or
    /// the active peer when none are known. Attempts run concurrently; the
    /// returned outcomes are in attempt order and always number exactly
    /// `max_broadcast_peers`. Identical submissions are not de-duplicated.
    ///
    /// # Errors
    ///
    /// `NotReady` without published settings, `Codec` if the payload cannot
    /// be encoded. Per-peer failures are reported in the outcomes only.
    pub async fn broadcast<P>(&self, payload: &P) -> Result<Vec<BroadcastOutcome>, ClientError>
    where
        P: Serialize + Sync,
    {
        let network = self.context.current()?;
        let attempts = network.settings().max_broadcast_peers;
        let body = self.codec.encode(&TransactionSubmission {
            transactions: [payload],
        })?;

        let targets: Vec<PeerHandle> = (0..attempts).map(|_| self.select_peer(&network)).collect();
        let submissions = targets.into_iter().enumerate().map(|(attempt, peer)| {
            let request = PeerRequest::post(paths::POST_TRANSACTIONS, body.clone());
            async move {
                let result = peer
                    .request::<TransactionPostResponse, C>(self.transport.as_ref(), &self.codec, request)
                    .await;
                if let Err(err) = &result {
                    debug!(attempt, peer = %peer.address(), error = %err, "[ark-net] broadcast attempt failed");
                }
                BroadcastOutcome {
                    attempt,
                    peer: peer.address().clone(),
                    result,
                }
            }
        });
        let outcomes = join_all(submissions).await;

        info!(
            attempts,
            accepted = outcomes.iter().filter(|o| o.is_success()).count(),
            "[ark-net] broadcast finished"
        );
        Ok(outcomes)
    }

    fn select_peer(&self, network: &ActiveNetwork) -> PeerHandle {
        let known = network.known_peers();
        if known.is_empty() {
            return network.active_peer().clone();
        }
        let index = self.random.random_usize(known.len()) % known.len();
        PeerHandle::bound(known[index].clone(), Arc::clone(network.settings()))
    }
}
