//! RNG module - 7-bag piece sequence
//!
//! Implements the "7-bag" randomizer: the sequence is built from whole bags,
//! each bag one shuffled copy of all seven kinds, so every bag-aligned run of
//! seven draws contains each kind exactly once.
//! Reference: https://tetris.wiki/Random_Generator
//!
//! Also provides a simple LCG so a seed reproduces a game exactly.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BAG_SIZE};

/// Upper bound on queued kinds: a refill never leaves more than two bags.
pub const QUEUE_CAPACITY: usize = 2 * BAG_SIZE;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, bound)`.
    ///
    /// Scales the full 32-bit output instead of taking a modulus; the low bits
    /// of a power-of-two LCG cycle with a very short period.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

/// FIFO queue of upcoming kinds, refilled one shuffled bag at a time.
#[derive(Debug, Clone)]
pub struct Randomizer {
    queue: ArrayVec<PieceKind, QUEUE_CAPACITY>,
    rng: SimpleRng,
}

impl Randomizer {
    /// Create a randomizer with the given seed; the queue starts filled.
    pub fn new(seed: u32) -> Self {
        let mut randomizer = Self {
            queue: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        randomizer.refill_if_needed();
        randomizer
    }

    /// Top the queue up: one bag when empty, then another while at most one
    /// bag remains. Afterwards the queue holds more than `BAG_SIZE` kinds.
    pub fn refill_if_needed(&mut self) {
        if self.queue.is_empty() {
            self.push_bag();
        }
        if self.queue.len() <= BAG_SIZE {
            self.push_bag();
        }
    }

    /// Append one bag, extracting random indices without replacement.
    fn push_bag(&mut self) {
        let mut remaining: ArrayVec<PieceKind, BAG_SIZE> = PieceKind::ALL.into_iter().collect();
        while !remaining.is_empty() {
            let index = self.rng.next_below(remaining.len() as u32) as usize;
            self.queue.push(remaining.remove(index));
        }
    }

    /// Pop the queue head.
    ///
    /// # Panics
    ///
    /// Never in practice: the refill above guarantees a non-empty queue.
    pub fn next_kind(&mut self) -> PieceKind {
        self.refill_if_needed();
        self.queue
            .pop_at(0)
            .expect("sequence queue is refilled before every draw")
    }

    /// Upcoming kinds, head first.
    pub fn upcoming(&self) -> &[PieceKind] {
        &self.queue
    }

    /// The first `n` upcoming kinds (fewer only if `n` exceeds the queue).
    pub fn preview(&self, n: usize) -> &[PieceKind] {
        &self.queue[..n.min(self.queue.len())]
    }

    /// Drop the queued kinds and start a fresh sequence.
    ///
    /// The generator keeps running, so a reset game gets a new sequence that is
    /// still reproducible from the original seed.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.refill_if_needed();
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(window: &[PieceKind]) -> bool {
        window.len() == BAG_SIZE && PieceKind::ALL.iter().all(|k| window.contains(k))
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in 1..=7 {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn next_below_reaches_every_index() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_below(7) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn new_queue_holds_two_bags() {
        let randomizer = Randomizer::new(1);
        assert_eq!(randomizer.upcoming().len(), 2 * BAG_SIZE);
        assert!(is_permutation(&randomizer.upcoming()[..BAG_SIZE]));
        assert!(is_permutation(&randomizer.upcoming()[BAG_SIZE..]));
    }

    #[test]
    fn queue_never_drops_below_one_bag() {
        let mut randomizer = Randomizer::new(42);
        for _ in 0..100 {
            randomizer.next_kind();
            assert!(randomizer.upcoming().len() >= BAG_SIZE);
            assert!(randomizer.upcoming().len() <= QUEUE_CAPACITY);
        }
    }

    #[test]
    fn preview_matches_following_draws() {
        let mut randomizer = Randomizer::new(3);
        randomizer.next_kind();
        let preview: Vec<_> = randomizer.preview(5).to_vec();
        let drawn: Vec<_> = (0..5).map(|_| randomizer.next_kind()).collect();
        assert_eq!(preview, drawn);
    }

    #[test]
    fn reset_refills_from_empty() {
        let mut randomizer = Randomizer::new(5);
        for _ in 0..3 {
            randomizer.next_kind();
        }
        randomizer.reset();
        assert_eq!(randomizer.upcoming().len(), 2 * BAG_SIZE);
        assert!(is_permutation(&randomizer.upcoming()[..BAG_SIZE]));
    }
}
