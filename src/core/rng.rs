//! Deterministic random number generation.
//!
//! Every random decision in a game flows through one `GameRng`:
//!
//! - weapon placement at setup
//! - drawing the solution and shuffling the deal
//! - dice rolls
//! - choosing which card a refuting player reveals
//!
//! Seeding it makes a whole game replayable.
//!
//! ```
//! use rust_cluedo::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let rolls_a: Vec<_> = (0..5).map(|_| a.roll_dice()).collect();
//! let rolls_b: Vec<_> = (0..5).map(|_| b.roll_dice()).collect();
//! assert_eq!(rolls_a, rolls_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of dice rolled each turn.
pub const DICE_COUNT: u32 = 2;

/// Faces on each die.
pub const DIE_SIDES: u32 = 6;

/// Seedable RNG shared by setup, the turn loop and suggestion resolution.
///
/// Uses ChaCha8 so the sequence is stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Roll a single die with `sides` faces (1..=sides).
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides)
    }

    /// Roll the movement dice: the sum of two six-sided dice, 2..=12.
    pub fn roll_dice(&mut self) -> u32 {
        (0..DICE_COUNT).map(|_| self.roll_die(DIE_SIDES)).sum()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Remove and return a uniformly chosen element, or `None` if empty.
    ///
    /// Order of the remaining elements is not preserved.
    pub fn take_one<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.gen_range_usize(0..items.len());
        Some(items.swap_remove(index))
    }

    /// Get the current state for replay checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capturing it is O(1) no matter how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
