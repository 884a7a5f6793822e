//! Deterministic random number generation.
//!
//! Randomized triggers and actions (chance gates, spawn jitter) must replay
//! identically when the editor seeks or a level restarts, so all randomness
//! flows through a seeded `TickRng` owned by the runtime and passed to
//! handlers via the tick context. There is no hidden global RNG.
//!
//! The state is O(1) serializable regardless of how many numbers have been
//! drawn, so checkpoints taken for editor seek stay cheap.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG handed to modifier handlers.
#[derive(Clone, Debug)]
pub struct TickRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TickRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// The probability is clamped to [0, 1].
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Generate a random float in the given range.
    pub fn gen_f32(&mut self, range: std::ops::Range<f32>) -> f32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> TickRngState {
        TickRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &TickRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
