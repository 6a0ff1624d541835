//! # HTTP Flows
//!
//! `ArkClient` over `HttpPeerTransport` against local `FakeArkNode`s.
//!
//! ## Flows Tested:
//!
//! 1. Offline seed, then live seed: bootstrap lands on the live one
//! 2. Fee schedule failure: negotiation error, nothing published
//! 3. Broadcast to known peers with one rejecting node
//! 4. Queries carry the negotiated `nethash` header

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ark_net::{
        ArkClient, ClientConfig, ClientError, HttpPeerTransport, JsonCodec, NegotiationStep,
        NetworkBootstrapApi, NetworkVariant, PeerAddress, RandomSource, ScriptedRandomSource,
    };

    use crate::support::{closed_address, FakeArkNode};

    const NETHASH: &str = "578e820911f24e039733b45e4882b73e301f813a0d2c31330dafda84534ffa23";

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn http_client(
        dev_seeds: &[PeerAddress],
        max_broadcast_peers: usize,
        random: Arc<dyn RandomSource>,
    ) -> ArkClient {
        let config = ClientConfig::for_variant(NetworkVariant::Dev)
            .with_seeds(NetworkVariant::Dev, dev_seeds)
            .with_max_broadcast_peers(max_broadcast_peers)
            .with_probe_timeout(Duration::from_secs(2));
        let transport = HttpPeerTransport::new(&config.transport).unwrap();
        ArkClient::with_parts(config, Arc::new(transport), JsonCodec, random).unwrap()
    }

    // =============================================================================
    // BOOTSTRAP
    // =============================================================================

    #[tokio::test]
    async fn test_bootstrap_skips_closed_seed() {
        let offline = closed_address().await.unwrap();
        let node = FakeArkNode::start(NETHASH, 30).await.unwrap();
        let client = http_client(
            &[offline, node.address()],
            2,
            Arc::new(ScriptedRandomSource::new([0, 1])),
        );

        let settings = client.start().await.unwrap();

        assert_eq!(settings.network_hash, NETHASH);
        assert_eq!(settings.port, node.address().port);
        assert_eq!(settings.protocol_version, "1.1.1");
        assert_eq!(client.active_peer().unwrap().address(), &node.address());
        assert_eq!(node.count("/peer/status"), 1);

        let peer_list = node
            .requests()
            .into_iter()
            .find(|r| r.path == "/api/peers")
            .unwrap();
        assert_eq!(peer_list.nethash.as_deref(), Some(NETHASH));
    }

    #[tokio::test]
    async fn test_bootstrap_exhausted_over_http() {
        let a = closed_address().await.unwrap();
        let b = closed_address().await.unwrap();
        let client = http_client(&[a, b], 2, Arc::new(ScriptedRandomSource::new([0, 1])));

        let err = client.start().await.unwrap_err();

        assert_eq!(
            err,
            ClientError::BootstrapExhausted {
                variant: NetworkVariant::Dev,
                attempts: 2
            }
        );
        assert!(!client.is_ready());
    }

    #[tokio::test]
    async fn test_fee_failure_over_http() {
        let node = FakeArkNode::start(NETHASH, 30).await.unwrap();
        node.fail_fees();
        let client = http_client(&[node.address()], 2, Arc::new(ScriptedRandomSource::new([0])));

        let err = client.start().await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Negotiation {
                step: NegotiationStep::FeeSchedule,
                ..
            }
        ));
        assert_eq!(client.settings().unwrap_err(), ClientError::NotReady);
    }

    // =============================================================================
    // BROADCAST AND QUERIES
    // =============================================================================

    #[tokio::test]
    async fn test_broadcast_with_rejecting_node() {
        let seed = FakeArkNode::start(NETHASH, 30).await.unwrap();
        let good = FakeArkNode::start(NETHASH, 30).await.unwrap();
        let bad = FakeArkNode::start(NETHASH, 30).await.unwrap();
        bad.reject_transactions();
        seed.set_peers(vec![good.address(), bad.address()]);

        // Seed draw, then broadcast draws good, bad, good.
        let client = http_client(
            &[seed.address()],
            3,
            Arc::new(ScriptedRandomSource::new([0, 0, 1, 0])),
        );
        client.start().await.unwrap();

        let tx = serde_json::json!({"id": "a1b2c3", "amount": 100000000, "fee": 10000000});
        let outcomes = client.broadcast(&tx).await.unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].peer, good.address());
        assert_eq!(outcomes[1].peer, bad.address());
        assert_eq!(outcomes[2].peer, good.address());
        assert!(outcomes[0].is_success());
        assert_eq!(
            outcomes[1].error(),
            Some(&ClientError::Rejected("Invalid transaction detected".to_string()))
        );
        assert!(outcomes[2].is_success());

        let submissions = good.requests();
        let posted: Vec<_> = submissions
            .iter()
            .filter(|r| r.method == "POST")
            .collect();
        assert_eq!(posted.len(), 2);
        let expected = serde_json::json!({ "transactions": [tx] });
        for request in &posted {
            let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
            assert_eq!(body, expected);
        }
        assert!(posted.iter().all(|r| r.nethash.as_deref() == Some(NETHASH)));
    }

    #[tokio::test]
    async fn test_height_query_over_http() {
        let node = FakeArkNode::start(NETHASH, 30).await.unwrap();
        let client = http_client(&[node.address()], 1, Arc::new(ScriptedRandomSource::new([0])));

        assert_eq!(client.get_height(None).await.unwrap_err(), ClientError::NotReady);

        client.start_network_at(node.address()).await.unwrap();
        let height = client.get_height(None).await.unwrap();

        assert_eq!(height.height, 3_100_000);
        assert_eq!(height.id.as_deref(), Some("9876"));
        assert_eq!(node.count("/peer/status"), 0);
    }
}
