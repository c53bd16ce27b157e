//! Deterministic die-face generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical faces
//! - **Forkable**: Independent streams for games played side by side
//! - **Loadable**: Recorded faces can be queued ahead of fresh draws,
//!   which is how a logged game is replayed
//!
//! ```
//! use decathlon_dice::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! // Loaded faces come out first, in order
//! rng.load(&[6, 1]);
//! assert_eq!(rng.roll_face(), 6);
//! assert_eq!(rng.roll_face(), 1);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on every die in these games.
pub const FACES: u8 = 6;

/// Deterministic die roller.
///
/// Uses ChaCha8 so a seed fully determines a game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
    loaded: VecDeque<u8>,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
            loaded: VecDeque::new(),
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Queue faces to be returned before any fresh draw.
    ///
    /// Faces outside `1..=6` are ignored.
    pub fn load(&mut self, faces: &[u8]) {
        self.loaded
            .extend(faces.iter().copied().filter(|f| (1..=FACES).contains(f)));
    }

    /// Number of loaded faces not yet consumed.
    #[must_use]
    pub fn loaded_len(&self) -> usize {
        self.loaded.len()
    }

    /// Roll a face index in `1..=6`.
    pub fn roll_face(&mut self) -> u8 {
        match self.loaded.pop_front() {
            Some(face) => face,
            None => self.inner.gen_range(1..=FACES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(), rng2.roll_face());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.roll_face()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let face = rng.roll_face();
            assert!((1..=FACES).contains(&face));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..32).map(|_| rng.roll_face()).collect();
        let seq2: Vec<_> = (0..32).map(|_| forked.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        let second = rng1.fork();
        assert_ne!(forked1.seed(), second.seed());
    }

    #[test]
    fn test_loaded_faces_come_first() {
        let mut rng = GameRng::new(42);
        let mut fresh = GameRng::new(42);

        rng.load(&[3, 9, 5, 0]);
        assert_eq!(rng.loaded_len(), 2);
        assert_eq!(rng.roll_face(), 3);
        assert_eq!(rng.roll_face(), 5);
        assert_eq!(rng.loaded_len(), 0);

        // Loading does not advance the underlying stream
        assert_eq!(rng.roll_face(), fresh.roll_face());
    }
}
