use crate::domain::{ClientError, NetworkSettings, PeerAddress, ResponseEnvelope};
use crate::ports::{Codec, PeerRequest, PeerTransport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// A remote node reachable through the transport.
///
/// Handles created while probing and negotiating are *unbound*. Warm-up
/// binds a handle to the published `NetworkSettings`; a bound handle sends
/// the `nethash`, `version` and `port` headers Ark peers expect and rejects
/// responses that report a different network hash.
#[derive(Debug, Clone)]
pub struct PeerHandle {
    address: PeerAddress,
    settings: Option<Arc<NetworkSettings>>,
}

impl PeerHandle {
    /// A handle not yet tied to any network settings.
    pub fn unbound(address: PeerAddress) -> Self {
        Self {
            address,
            settings: None,
        }
    }

    /// A handle bound to `settings`.
    pub fn bound(address: PeerAddress, settings: Arc<NetworkSettings>) -> Self {
        Self {
            address,
            settings: Some(settings),
        }
    }

    /// Where this peer lives.
    pub fn address(&self) -> &PeerAddress {
        &self.address
    }

    /// Settings this handle validates against, once warmed up.
    pub fn settings(&self) -> Option<&Arc<NetworkSettings>> {
        self.settings.as_ref()
    }

    /// Whether the handle has been bound to network settings.
    pub fn is_warm(&self) -> bool {
        self.settings.is_some()
    }

    fn prepare(&self, request: PeerRequest) -> PeerRequest {
        match &self.settings {
            Some(settings) => request
                .with_header("nethash", settings.network_hash.clone())
                .with_header("version", settings.protocol_version.clone())
                .with_header("port", settings.port.to_string()),
            None => request,
        }
    }

    /// Send `request` and return the raw body.
    pub async fn send(
        &self,
        transport: &dyn PeerTransport,
        request: PeerRequest,
    ) -> Result<Vec<u8>, ClientError> {
        transport
            .send(&self.address, self.prepare(request))
            .await
            .map_err(|source| ClientError::Transport {
                peer: self.address.clone(),
                source,
            })
    }

    /// Send `request`, validate the response envelope, decode the record.
    pub async fn request<T, C>(
        &self,
        transport: &dyn PeerTransport,
        codec: &C,
        request: PeerRequest,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        C: Codec,
    {
        let path = request.path.clone();
        let body = self.send(transport, request).await?;
        self.validate(codec, &body)?;
        let record = codec.decode(&body)?;
        debug!(peer = %self.address, %path, "[ark-net] response accepted");
        Ok(record)
    }

    fn validate<C: Codec>(&self, codec: &C, body: &[u8]) -> Result<(), ClientError> {
        let envelope: ResponseEnvelope = codec.decode(body)?;
        if !envelope.success {
            return Err(ClientError::Rejected(envelope.reason()));
        }
        if let (Some(settings), Some(actual)) = (&self.settings, envelope.nethash) {
            if actual != settings.network_hash {
                return Err(ClientError::NetHashMismatch {
                    expected: settings.network_hash.clone(),
                    actual,
                });
            }
        }
        Ok(())
    }
}
