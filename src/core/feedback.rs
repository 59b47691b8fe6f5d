//! Oracle feedback for a guess
//!
//! After each guess the code-maker reports two integers: how many guessed
//! pegs occur somewhere in the secret regardless of position (multiset
//! intersection), and how many sit in their exact position.

use super::{CODE_LENGTH, Code, Color};
use std::fmt;

/// The two feedback counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    colors: u8,
    positions: u8,
}

impl Feedback {
    /// Feedback for a fully correct guess
    pub const WIN: Self = Self {
        colors: CODE_LENGTH as u8,
        positions: CODE_LENGTH as u8,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if either count exceeds the code length.
    #[inline]
    #[must_use]
    pub const fn new(colors: u8, positions: u8) -> Self {
        debug_assert!(colors <= CODE_LENGTH as u8, "color count out of range");
        debug_assert!(positions <= CODE_LENGTH as u8, "position count out of range");
        Self { colors, positions }
    }

    /// Score a guess against a secret
    ///
    /// `colors` is the multiset intersection size: for each color, the
    /// smaller of its counts in the two codes. `positions` counts indices
    /// where the codes agree exactly.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("mgbcr").unwrap();
    /// let guess = Code::parse("mmgbc").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// assert_eq!(feedback.colors(), 4);
    /// assert_eq!(feedback.positions(), 1);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut colors = 0;
        for color in Color::ALL {
            colors += secret.count_of(color).min(guess.count_of(color));
        }

        let positions = secret
            .colors()
            .iter()
            .zip(guess.colors())
            .filter(|(s, g)| s == g)
            .count() as u8;

        Self { colors, positions }
    }

    /// Count of guessed colors present in the secret
    #[inline]
    #[must_use]
    pub const fn colors(self) -> u8 {
        self.colors
    }

    /// Count of pegs in their exact position
    #[inline]
    #[must_use]
    pub const fn positions(self) -> u8 {
        self.positions
    }

    /// Whether this feedback means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.positions == CODE_LENGTH as u8
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correct colors, {} in the right place",
            self.colors, self.positions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn score_identical_codes() {
        let secret = code("mgbcr");
        assert_eq!(Feedback::score(&secret, &secret), Feedback::WIN);
    }

    #[test]
    fn score_disjoint_codes() {
        let feedback = Feedback::score(&code("mmmmm"), &code("yyyyy"));
        assert_eq!(feedback.colors(), 0);
        assert_eq!(feedback.positions(), 0);
    }

    #[test]
    fn score_duplicates_use_multiset_intersection() {
        // Secret has two maroons; guess has three. Only two can match.
        let feedback = Feedback::score(&code("mmgbc"), &code("mmmyy"));
        assert_eq!(feedback.colors(), 2);
        assert_eq!(feedback.positions(), 2);
    }

    #[test]
    fn score_counts_positions_independently() {
        // All five colors present, but shifted by one position.
        let feedback = Feedback::score(&code("mgbcr"), &code("rmgbc"));
        assert_eq!(feedback.colors(), 5);
        assert_eq!(feedback.positions(), 0);
    }

    #[test]
    fn score_is_symmetric_in_color_count() {
        let a = code("mmgbc");
        let b = code("ppccm");
        assert_eq!(
            Feedback::score(&a, &b).colors(),
            Feedback::score(&b, &a).colors()
        );
    }

    #[test]
    fn win_requires_all_positions() {
        assert!(Feedback::new(5, 5).is_win());
        assert!(!Feedback::new(5, 4).is_win());
        assert!(!Feedback::new(0, 0).is_win());
    }
}
