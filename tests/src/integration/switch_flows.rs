//! # Switch Flows
//!
//! Network switching while other tasks keep reading the context. Readers
//! must only ever see nothing or one complete bootstrap result.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use ark_net::{
        ArkClient, ClientConfig, ClientError, FixedRandomSource, JsonCodec, MockPeerTransport,
        NetworkBootstrapApi, NetworkVariant, PeerAddress,
    };

    const DEV_HASH: &str = "578e820911f24e039733b45e4882b73e301f813a0d2c31330dafda84534ffa23";
    const MAIN_HASH: &str = "6e84d08bd299ed97c212c886c98a57e36545c8f5d645ca7eeae63a8bd62d8988";

    fn two_network_client() -> (Arc<ArkClient>, Arc<MockPeerTransport>) {
        let dev = PeerAddress::new("10.0.0.1", 4002);
        let main = PeerAddress::new("10.1.0.1", 4001);
        let mock = Arc::new(MockPeerTransport::new());
        mock.serve_ark_peer(&dev, DEV_HASH, 30, "1.1.1");
        mock.serve_ark_peer(&main, MAIN_HASH, 23, "1.1.1");

        let config = ClientConfig::for_variant(NetworkVariant::Dev)
            .with_seeds(NetworkVariant::Dev, &[dev])
            .with_seeds(NetworkVariant::Main, &[main]);
        let client = ArkClient::with_parts(
            config,
            mock.clone(),
            JsonCodec,
            Arc::new(FixedRandomSource::first()),
        )
        .unwrap();
        (Arc::new(client), mock)
    }

    #[tokio::test]
    async fn test_switch_replaces_settings_wholesale() {
        let (client, _mock) = two_network_client();
        let dev = client.start().await.unwrap();

        let main = client.switch_network(NetworkVariant::Main).await.unwrap();

        assert_eq!(dev.network_hash, DEV_HASH);
        assert_eq!(dev.port, 4002);
        assert_eq!(main.network_hash, MAIN_HASH);
        assert_eq!(main.port, 4001);
        assert_eq!(main.version_byte_prefix, 23);
        let network = client.context().current().unwrap();
        assert_eq!(network.active_peer().address().port, 4001);
        assert_eq!(network.variant(), Some(NetworkVariant::Main));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_readers_never_observe_mixed_state() {
        let (client, mock) = two_network_client();
        client.start().await.unwrap();
        mock.set_delay(Duration::from_millis(2));

        let done = Arc::new(AtomicBool::new(false));
        let reads = Arc::new(AtomicUsize::new(0));
        let mut readers = Vec::new();
        for _ in 0..4 {
            let client = Arc::clone(&client);
            let done = Arc::clone(&done);
            let reads = Arc::clone(&reads);
            readers.push(tokio::spawn(async move {
                while !done.load(Ordering::SeqCst) {
                    match client.context().current() {
                        Ok(network) => {
                            let settings = network.settings();
                            let expected = match settings.port {
                                4001 => MAIN_HASH,
                                _ => DEV_HASH,
                            };
                            assert_eq!(settings.network_hash, expected);
                            assert_eq!(network.active_peer().address().port, settings.port);
                            assert_eq!(
                                network.active_peer().settings().unwrap().network_hash,
                                expected
                            );
                        }
                        Err(err) => {
                            assert_eq!(err, ClientError::NotReady);
                        }
                    }
                    reads.fetch_add(1, Ordering::Relaxed);
                    tokio::task::yield_now().await;
                }
            }));
        }

        for round in 0..6 {
            let variant = if round % 2 == 0 {
                NetworkVariant::Main
            } else {
                NetworkVariant::Dev
            };
            let settings = client.switch_network(variant).await.unwrap();
            assert_eq!(settings.port, variant.default_port());
        }
        done.store(true, Ordering::SeqCst);

        for reader in readers {
            reader.await.unwrap();
        }
        assert!(reads.load(Ordering::Relaxed) > 0);
        // Six switches end on devnet.
        assert_eq!(client.settings().unwrap().network_hash, DEV_HASH);
        assert!(client.context().is_ready());
    }
}
