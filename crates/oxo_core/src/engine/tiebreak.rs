//! Injectable randomness for tie-breaks.
//!
//! The engine only draws random numbers to choose among moves it considers
//! equivalent. Everything else it does is deterministic, so substituting a
//! seeded or scripted source makes every decision reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of tie-break choices.
pub trait TieBreaker: Send + std::fmt::Debug {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Deterministic tie-breaker backed by ChaCha8.
///
/// The same seed always produces the same sequence of picks.
#[derive(Debug, Clone)]
pub struct SeededTieBreaker {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededTieBreaker {
    /// Creates a tie-breaker with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a tie-breaker with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded, so a surprising game can be replayed
    /// with [`SeededTieBreaker::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Returns the seed this tie-breaker was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TieBreaker for SeededTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Tie-breaker that replays a fixed sequence of picks.
///
/// Each pick is reduced modulo the number of candidates. Once the script
/// is exhausted every pick is 0, i.e. the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTieBreaker {
    picks: VecDeque<usize>,
}

impl ScriptedTieBreaker {
    /// Creates a tie-breaker that returns `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl TieBreaker for ScriptedTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % len)
    }
}
