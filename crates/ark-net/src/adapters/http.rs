//! HTTP transport adapter over `reqwest`.

use crate::config::TransportConfig;
use crate::domain::{PeerAddress, TransportError};
use crate::ports::{HttpMethod, PeerRequest, PeerTransport};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

/// `PeerTransport` speaking plain HTTP to `http://host:port`.
pub struct HttpPeerTransport {
    client: Client,
}

impl HttpPeerTransport {
    /// Create a transport with the given timeouts.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    fn url(peer: &PeerAddress, path: &str) -> String {
        format!("http://{}:{}{}", peer.host, peer.port, path)
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::ConnectionRefused
    } else if let Some(status) = err.status() {
        TransportError::Status(status.as_u16())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl PeerTransport for HttpPeerTransport {
    async fn send(
        &self,
        peer: &PeerAddress,
        request: PeerRequest,
    ) -> Result<Vec<u8>, TransportError> {
        let url = Self::url(peer, &request.path);
        trace!(%url, method = ?request.method, "[ark-net] HTTP request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(classify)?;
        Ok(body.to_vec())
    }
}
