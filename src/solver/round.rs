//! One completed round: a guess and its feedback
//!
//! Rounds are immutable once recorded. The engine keeps the full ordered
//! history both for incremental bound derivation and for the full-history
//! consistency check during guess synthesis.

use super::Pair;
use crate::core::{Code, Color, Feedback};

/// An immutable guess/feedback record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    guess: Code,
    feedback: Feedback,
}

impl Round {
    /// Record a completed round
    #[inline]
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guess that was played
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    /// The oracle's response
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// How many pegs of the guess were the given color
    #[inline]
    #[must_use]
    pub fn count_of(&self, color: Color) -> u8 {
        self.guess.count_of(color)
    }

    /// How many pegs of the guess belong to the given pair
    #[must_use]
    pub fn pair_count(&self, pair: Pair) -> u8 {
        let [a, b] = pair.members();
        self.guess.count_of(a) + self.guess.count_of(b)
    }

    /// Whether the guess used either member of the pair
    #[inline]
    #[must_use]
    pub fn contains_pair(&self, pair: Pair) -> bool {
        self.pair_count(pair) > 0
    }
}
