//! The deduction engine facade
//!
//! `Deducer` owns the belief state and the round history, and exposes the
//! strict-alternation interface the turn loop drives: `observe` one round,
//! then `next_guess`, and so on until the oracle reports a win.

use super::{Beliefs, Round, SolverError, propagate, synthesize};
use crate::core::{Code, Feedback};
use rand::Rng;

/// Plays the guesser's side of the game by constraint propagation
///
/// Single-threaded and synchronous; the only non-determinism is the random
/// source handed to [`Deducer::next_guess`], so a seeded RNG makes a whole
/// game reproducible.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback};
/// use mastermind_solver::solver::Deducer;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let secret = Code::parse("mgbcr").unwrap();
/// let mut deducer = Deducer::new();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let guess = deducer.next_guess(&mut rng).unwrap();
/// let feedback = Feedback::score(&secret, &guess);
/// deducer.observe(guess, feedback).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Deducer {
    beliefs: Beliefs,
    rounds: Vec<Round>,
}

impl Deducer {
    /// A fresh engine with vacuous beliefs and no history
    #[must_use]
    pub fn new() -> Self {
        Self {
            beliefs: Beliefs::new(),
            rounds: Vec::new(),
        }
    }

    /// Fold one completed round into the beliefs
    ///
    /// # Errors
    /// Returns `SolverError::BoundContradiction` when the feedback cannot be
    /// reconciled with earlier rounds. The engine cannot recover from this:
    /// either the feedback source lied or a derivation is broken.
    pub fn observe(&mut self, guess: Code, feedback: Feedback) -> Result<(), SolverError> {
        let round = Round::new(guess, feedback);
        propagate::observe_round(&mut self.beliefs, &round, self.rounds.len())?;
        self.rounds.push(round);
        Ok(())
    }

    /// Produce the next guess
    ///
    /// Always a fully assigned code. Guesses from the constructive-search
    /// phase are guaranteed consistent with every observed round.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidatePool` if the search draws from an
    /// empty pool, which indicates a belief configuration that propagation
    /// should have rejected.
    pub fn next_guess<R: Rng>(&self, rng: &mut R) -> Result<Code, SolverError> {
        synthesize::next_guess(&self.beliefs, &self.rounds, rng)
    }

    /// The rounds observed so far, in order
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Read access to the current belief state
    #[inline]
    #[must_use]
    pub const fn beliefs(&self) -> &Beliefs {
        &self.beliefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CODE_LENGTH, Color};
    use crate::solver::Pair;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    /// Drive a full game against a known secret; returns rounds used
    fn play_out(secret: &Code, rng: &mut StdRng, max_rounds: usize) -> Option<usize> {
        let mut deducer = Deducer::new();
        for round in 1..=max_rounds {
            let guess = deducer.next_guess(rng).unwrap();
            let feedback = Feedback::score(secret, &guess);
            if feedback.is_win() {
                return Some(round);
            }
            deducer.observe(guess, feedback).unwrap();
        }
        None
    }

    #[test]
    fn first_opening_feedback_confirms_pair_presence() {
        // mmmyy scoring (2, 1) means two pegs come from
        // the maroon/yellow pair.
        let mut deducer = Deducer::new();
        deducer
            .observe(code("mmmyy"), Feedback::new(2, 1))
            .unwrap();

        assert_eq!(deducer.beliefs().pair(Pair::of(Color::Maroon)).min(), 2);
    }

    #[test]
    fn double_color_scoring_four_confirms_presence() {
        // A guess holding maroon twice that scores four correct colors
        // leaves at most three pegs for the rest, so one maroon is present.
        let secret = code("mgbcr");
        let mut deducer = Deducer::new();

        for guess in [code("mmmyy"), code("bgbgb"), code("ppccc"), code("mmgbc")] {
            let feedback = Feedback::score(&secret, &guess);
            deducer.observe(guess, feedback).unwrap();
        }

        // The last guess holds two maroons and scores 4 correct colors
        let last = deducer.rounds().last().unwrap();
        assert_eq!(last.count_of(Color::Maroon), 2);
        assert_eq!(last.feedback().colors(), 4);
        assert!(deducer.beliefs().color(Color::Maroon).min() >= 1);
    }

    #[test]
    fn fully_known_colors_prune_every_position() {
        // Once the color minimums account for all five
        // pegs, every position set shrinks to the known colors.
        let secret = code("mmygg");
        let mut deducer = Deducer::new();

        for guess in [
            code("mmmyy"),
            code("bgbgb"),
            code("mmmmm"),
            code("yyyyy"),
            code("ggggg"),
        ] {
            let feedback = Feedback::score(&secret, &guess);
            deducer.observe(guess, feedback).unwrap();
        }

        assert_eq!(deducer.beliefs().known_color_total(), CODE_LENGTH as u8);
        for position in 0..CODE_LENGTH {
            let set = deducer.beliefs().position(position);
            assert!(set.len() <= 3);
            for color in set.iter() {
                assert!(matches!(
                    color,
                    Color::Maroon | Color::Yellow | Color::Green
                ));
            }
        }
    }

    #[test]
    fn beliefs_stay_ordered_and_tighten_monotonically() {
        let secret = code("rsgmc");
        let mut deducer = Deducer::new();
        let mut rng = StdRng::seed_from_u64(11);

        let mut previous: Vec<(u8, u8)> = Color::ALL
            .iter()
            .map(|&c| {
                let b = deducer.beliefs().color(c);
                (b.min(), b.max())
            })
            .collect();
        let mut previous_set_sizes: Vec<usize> = (0..CODE_LENGTH)
            .map(|p| deducer.beliefs().position(p).len())
            .collect();

        for _ in 0..12 {
            let guess = deducer.next_guess(&mut rng).unwrap();
            let feedback = Feedback::score(&secret, &guess);
            if feedback.is_win() {
                break;
            }
            deducer.observe(guess, feedback).unwrap();

            for (i, &color) in Color::ALL.iter().enumerate() {
                let bound = deducer.beliefs().color(color);
                assert!(bound.min() <= bound.max());
                assert!(bound.max() <= CODE_LENGTH as u8);
                let (old_min, old_max) = previous[i];
                assert!(bound.min() >= old_min, "min must never decrease");
                assert!(bound.max() <= old_max, "max must never increase");
                previous[i] = (bound.min(), bound.max());
            }
            for (position, old_size) in previous_set_sizes.iter_mut().enumerate() {
                let size = deducer.beliefs().position(position).len();
                assert!(size <= *old_size, "possibility sets only shrink");
                *old_size = size;
            }
        }
    }

    #[test]
    fn zero_position_feedback_clears_guessed_slots() {
        let mut deducer = Deducer::new();
        // Secret ppccc against the first opening: no color and no position
        deducer
            .observe(code("mmmyy"), Feedback::new(0, 0))
            .unwrap();

        let guess = code("mmmyy");
        for (position, &color) in guess.colors().iter().enumerate() {
            assert!(!deducer.beliefs().position(position).contains(color));
        }
    }

    #[test]
    fn search_guesses_are_consistent_with_history() {
        let secret = code("sgmrc");
        let mut deducer = Deducer::new();
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..12 {
            let guess = deducer.next_guess(&mut rng).unwrap();
            // Past the opening phase, every guess must reproduce history
            if deducer.rounds().len() >= 3 && !guess.is_monochrome() {
                for round in deducer.rounds() {
                    assert_eq!(
                        Feedback::score(&guess, round.guess()),
                        round.feedback()
                    );
                }
            }
            let feedback = Feedback::score(&secret, &guess);
            if feedback.is_win() {
                return;
            }
            deducer.observe(guess, feedback).unwrap();
        }
        panic!("secret not found within 12 rounds");
    }

    #[test]
    fn solves_handpicked_secrets_within_twelve_rounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for secret in ["mmmmm", "rrrrr", "mygbp", "rsrsr", "cgcgc", "ybrsp"] {
            let used = play_out(&code(secret), &mut rng, 12);
            assert!(used.is_some(), "failed to solve {secret} in 12 rounds");
        }
    }

    #[test]
    fn solves_random_secrets_within_twelve_rounds() {
        let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
        for _ in 0..120 {
            let secret = Code::random(&mut rng);
            let used = play_out(&secret, &mut rng, 12);
            assert!(used.is_some(), "failed to solve {secret} in 12 rounds");
        }
    }

    #[test]
    fn contradictory_feedback_is_rejected() {
        let mut deducer = Deducer::new();
        deducer
            .observe(code("mmmmm"), Feedback::new(5, 5))
            .unwrap();
        let err = deducer.observe(code("mmmmm"), Feedback::new(0, 0));
        assert!(matches!(err, Err(SolverError::BoundContradiction { .. })));
    }
}
