//! Compiled-in seed peers.
//!
//! Seeds are only used to reach a first peer and pull network settings
//! from it; they are not long-term peers.

use super::value_objects::{NetworkVariant, PeerAddress};

/// A hard-coded initial contact point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerSeed {
    /// IP address.
    pub host: &'static str,
    /// API port.
    pub port: u16,
}

impl PeerSeed {
    const fn new(host: &'static str, port: u16) -> Self {
        Self { host, port }
    }

    /// Owned address of this seed.
    pub fn address(&self) -> PeerAddress {
        PeerAddress::new(self.host, self.port)
    }
}

/// Ark mainnet seed peers.
pub const MAINNET_SEEDS: &[PeerSeed] = &[
    PeerSeed::new("5.39.9.240", 4001),
    PeerSeed::new("5.39.9.241", 4001),
    PeerSeed::new("5.39.9.242", 4001),
    PeerSeed::new("5.39.9.243", 4001),
    PeerSeed::new("5.39.9.244", 4001),
    PeerSeed::new("5.39.9.250", 4001),
    PeerSeed::new("5.39.9.251", 4001),
    PeerSeed::new("5.39.9.252", 4001),
    PeerSeed::new("5.39.9.253", 4001),
    PeerSeed::new("5.39.9.254", 4001),
    PeerSeed::new("5.39.9.255", 4001),
];

/// Ark devnet seed peers.
pub const DEVNET_SEEDS: &[PeerSeed] = &[
    PeerSeed::new("167.114.43.48", 4002),
    PeerSeed::new("167.114.29.49", 4002),
    PeerSeed::new("167.114.43.43", 4002),
    PeerSeed::new("167.114.29.54", 4002),
    PeerSeed::new("167.114.29.45", 4002),
    PeerSeed::new("167.114.29.40", 4002),
    PeerSeed::new("167.114.29.56", 4002),
    PeerSeed::new("167.114.43.35", 4002),
    PeerSeed::new("167.114.29.51", 4002),
    PeerSeed::new("167.114.29.59", 4002),
    PeerSeed::new("167.114.43.42", 4002),
    PeerSeed::new("167.114.29.34", 4002),
    PeerSeed::new("167.114.29.62", 4002),
    PeerSeed::new("167.114.43.49", 4002),
    PeerSeed::new("167.114.29.44", 4002),
];

impl NetworkVariant {
    /// Compiled-in seeds for this variant.
    pub fn seeds(&self) -> &'static [PeerSeed] {
        match self {
            Self::Main => MAINNET_SEEDS,
            Self::Dev => DEVNET_SEEDS,
        }
    }

    /// Default API port for this variant.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Main => 4001,
            Self::Dev => 4002,
        }
    }
}

/// A seed list that is non-empty by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedList {
    peers: Vec<PeerAddress>,
}

impl SeedList {
    /// Build a seed list, rejecting an empty one.
    pub fn new(peers: Vec<PeerAddress>) -> Option<Self> {
        if peers.is_empty() {
            None
        } else {
            Some(Self { peers })
        }
    }

    /// The compiled-in list for a variant.
    pub fn builtin(variant: NetworkVariant) -> Self {
        Self {
            peers: variant.seeds().iter().map(PeerSeed::address).collect(),
        }
    }

    /// Number of seeds; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Seed at `index`, wrapping around the list.
    pub fn get(&self, index: usize) -> &PeerAddress {
        &self.peers[index % self.peers.len()]
    }

    /// Whether `peer` is one of the seeds.
    pub fn contains(&self, peer: &PeerAddress) -> bool {
        self.peers.contains(peer)
    }

    /// All seeds in declaration order.
    pub fn as_slice(&self) -> &[PeerAddress] {
        &self.peers
    }
}
