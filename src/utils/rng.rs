use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic seeding for every stochastic decision in the engine.
///
/// Each game, and each play within a game, gets an independent stream
/// derived from the master seed. Streams never cross game boundaries, so
/// concurrently resolved games stay reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Stream for a single play, keyed by game and play index.
    pub fn play_rng(&self, game: u64, play: u64) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        game.hash(&mut hasher);
        play.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}
