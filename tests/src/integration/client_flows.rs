//! # Client Flows
//!
//! `ArkClient` composed over `MockPeerTransport`, exercising the public API
//! the way an application would.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ark_net::paths;
    use ark_net::{
        ArkClient, ClientConfig, ClientError, FixedRandomSource, JsonCodec, MockPeerTransport,
        NetworkBootstrapApi, NetworkVariant, PeerAddress, ScriptedRandomSource, TransportError,
    };

    const DEV_HASH: &str = "578e820911f24e039733b45e4882b73e301f813a0d2c31330dafda84534ffa23";

    fn peer(last: u8) -> PeerAddress {
        PeerAddress::new(format!("10.0.0.{}", last), 4002)
    }

    #[tokio::test]
    async fn test_default_config_uses_builtin_devnet_seeds() {
        let mock = Arc::new(MockPeerTransport::new());
        let seed = NetworkVariant::Dev.seeds()[2].address();
        mock.serve_ark_peer(&seed, DEV_HASH, 30, "2.0.0");

        let client = ArkClient::with_parts(
            ClientConfig::default(),
            mock.clone(),
            JsonCodec,
            Arc::new(FixedRandomSource::new(2)),
        )
        .unwrap();
        let settings = client.start().await.unwrap();

        assert_eq!(settings.port, 4002);
        assert_eq!(settings.protocol_version, "2.0.0");
        assert_eq!(settings.max_broadcast_peers, 10);
        assert_eq!(client.active_peer().unwrap().address(), &seed);
    }

    #[tokio::test]
    async fn test_every_builtin_seed_offline_probes_each_draw_once() {
        let mock = Arc::new(MockPeerTransport::new());
        for seed in NetworkVariant::Main.seeds() {
            mock.set_offline(&seed.address());
        }
        let client = ArkClient::with_parts(
            ClientConfig::for_variant(NetworkVariant::Main),
            mock.clone(),
            JsonCodec,
            Arc::new(ScriptedRandomSource::new(0..11)),
        )
        .unwrap();

        let err = client.start().await.unwrap_err();

        assert_eq!(
            err,
            ClientError::BootstrapExhausted {
                variant: NetworkVariant::Main,
                attempts: 11
            }
        );
        assert_eq!(mock.count_calls(paths::PEER_STATUS), 11);
        let probed: std::collections::HashSet<_> =
            mock.calls().into_iter().map(|call| call.peer).collect();
        assert_eq!(probed.len(), 11);
    }

    #[tokio::test]
    async fn test_broadcast_outcomes_independent_of_each_other() {
        let mock = Arc::new(MockPeerTransport::new());
        let seed = peer(1);
        let known: Vec<PeerAddress> = (10..15).map(peer).collect();
        mock.serve_ark_peer(&seed, DEV_HASH, 30, "1.1.1");
        mock.serve_peer_list(&seed, &known, "1.1.1");
        for (i, address) in known.iter().enumerate() {
            mock.serve_ark_peer(address, DEV_HASH, 30, "1.1.1");
            if i % 2 == 1 {
                mock.fail(address, paths::POST_TRANSACTIONS, TransportError::Timeout);
            }
        }

        let config = ClientConfig::for_variant(NetworkVariant::Dev)
            .with_seeds(NetworkVariant::Dev, &[seed])
            .with_max_broadcast_peers(5);
        let client = ArkClient::with_parts(
            config,
            mock.clone(),
            JsonCodec,
            Arc::new(ScriptedRandomSource::new([0, 0, 1, 2, 3, 4])),
        )
        .unwrap();
        client.start().await.unwrap();

        let outcomes = client
            .broadcast(&serde_json::json!({"id": "a1b2c3"}))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 5);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.attempt, i);
            assert_eq!(outcome.peer, known[i]);
            assert_eq!(outcome.is_success(), i % 2 == 0, "attempt {}", i);
        }
    }

    #[tokio::test]
    async fn test_post_transaction_to_explicit_peer() {
        let mock = Arc::new(MockPeerTransport::new());
        let seed = peer(1);
        let target = peer(2);
        mock.serve_ark_peer(&seed, DEV_HASH, 30, "1.1.1");
        mock.serve_ark_peer(&target, DEV_HASH, 30, "1.1.1");

        let client = ArkClient::new(ClientConfig::default(), mock.clone()).unwrap();
        client.start_network_at(seed.clone()).await.unwrap();

        let response = client
            .post_transaction(&serde_json::json!({"id": "a1b2c3"}), Some(&target))
            .await
            .unwrap();

        assert_eq!(response.transaction_ids, vec!["a1b2c3".to_string()]);
        let post = mock
            .calls()
            .into_iter()
            .find(|call| call.path == paths::POST_TRANSACTIONS)
            .unwrap();
        assert_eq!(post.peer, target);
    }
}
