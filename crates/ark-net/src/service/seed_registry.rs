use crate::domain::{NetworkVariant, PeerAddress, SeedList};
use crate::ports::RandomSource;
use std::sync::Arc;

/// Holds one seed list per variant and draws seeds from them.
pub struct SeedRegistry {
    main: SeedList,
    dev: SeedList,
    random: Arc<dyn RandomSource>,
}

impl SeedRegistry {
    /// Registry over the compiled-in seed lists.
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_seeds(
            SeedList::builtin(NetworkVariant::Main),
            SeedList::builtin(NetworkVariant::Dev),
            random,
        )
    }

    /// Registry over custom seed lists.
    pub fn with_seeds(main: SeedList, dev: SeedList, random: Arc<dyn RandomSource>) -> Self {
        Self { main, dev, random }
    }

    /// Seeds of `variant`.
    pub fn seeds(&self, variant: NetworkVariant) -> &SeedList {
        match variant {
            NetworkVariant::Main => &self.main,
            NetworkVariant::Dev => &self.dev,
        }
    }

    /// Uniform draw from `variant`'s list.
    ///
    /// Every call is an independent draw, so the same seed may come back
    /// on consecutive calls.
    pub fn pick_random(&self, variant: NetworkVariant) -> PeerAddress {
        let seeds = self.seeds(variant);
        seeds.get(self.random.random_usize(seeds.len())).clone()
    }

    /// Liveness probes allowed before giving up on `variant`.
    pub fn max_attempts(&self, variant: NetworkVariant) -> usize {
        self.seeds(variant).len()
    }
}
