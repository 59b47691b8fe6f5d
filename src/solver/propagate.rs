//! Constraint propagation over the belief state
//!
//! `observe_round` folds one round of feedback into the beliefs. Every
//! derivation is expressed through the two monotone `Bound` mutators, so
//! re-applying a rule is always safe and the cross-check pass can simply be
//! repeated. A contradiction anywhere means the feedback source lied or the
//! engine is broken; it aborts the observe.

use super::synthesize::OPENINGS;
use super::{Beliefs, Pair, Round, SolverError};
use crate::core::{CODE_LENGTH, Code, Color};

/// Cross-check repetitions per observe
///
/// Two passes let second-order consequences (a tightened pair bound feeding
/// back into a member color) propagate. Not a true fixpoint; two passes are
/// enough for the derivations in play here.
const CROSS_CHECK_PASSES: usize = 2;

/// Fold one round of feedback into the beliefs
///
/// `prior_rounds` is how many rounds were observed before this one; the
/// pair bootstrap derivation is only sound while the canned openings are
/// still being played.
///
/// # Errors
/// Returns `SolverError::BoundContradiction` if the feedback is inconsistent
/// with what has already been derived.
pub(crate) fn observe_round(
    beliefs: &mut Beliefs,
    round: &Round,
    prior_rounds: usize,
) -> Result<(), SolverError> {
    if prior_rounds < OPENINGS.len() && !beliefs.has_enough_pair_info() {
        bootstrap_pair_bounds(beliefs, round)?;
    }

    update_color_bounds(beliefs, round)?;

    if round.feedback().positions() == 0 {
        eliminate_guessed_positions(beliefs, round.guess());
    }

    remove_ruled_out_colors(beliefs);

    for _ in 0..CROSS_CHECK_PASSES {
        cross_check(beliefs)?;
    }

    Ok(())
}

/// Attribute the whole color count to each pair present in the guess
///
/// Sound only for the opening probes, where every guess draws its pegs from
/// a single pair: the color count then *is* that pair's confirmed presence.
fn bootstrap_pair_bounds(beliefs: &mut Beliefs, round: &Round) -> Result<(), SolverError> {
    let colors = round.feedback().colors();
    for pair in Pair::ALL {
        if !round.contains_pair(pair) {
            continue;
        }
        beliefs.pair_mut(pair).raise_min_to(colors)?;
        if colors < 2 {
            beliefs.pair_mut(pair).lower_max_to(colors)?;
        }
    }
    Ok(())
}

/// Decompose the color count onto each color present in the guess
///
/// A color occupying `k` of the 5 pegs leaves at most `5 - k` pegs for the
/// other colors to claim, so at least `colors - (5 - k)` of the count must
/// come from this color. And if the count fell short of `k`, the secret
/// cannot hold more than `colors` of it. Valid for every round regardless
/// of ordering.
fn update_color_bounds(beliefs: &mut Beliefs, round: &Round) -> Result<(), SolverError> {
    let colors = round.feedback().colors();
    for color in Color::ALL {
        let count = round.count_of(color);
        if count == 0 {
            continue;
        }
        let bound = beliefs.color_mut(color);
        bound.raise_min_to(colors.saturating_sub(CODE_LENGTH as u8 - count))?;
        if colors < count {
            bound.lower_max_to(colors)?;
        }
    }
    Ok(())
}

/// A round with zero exact positions rules every guessed peg out of its slot
fn eliminate_guessed_positions(beliefs: &mut Beliefs, guess: &Code) {
    for (position, &color) in guess.colors().iter().enumerate() {
        beliefs.remove_from_position(position, color);
    }
}

/// Colors whose max hit zero can appear at no position at all
fn remove_ruled_out_colors(beliefs: &mut Beliefs) {
    let ruled_out: Vec<Color> = beliefs.ruled_out_colors().collect();
    for color in ruled_out {
        beliefs.remove_from_all_positions(color);
    }
}

/// One pass of cross-constraint tightening between positions, colors, pairs
fn cross_check(beliefs: &mut Beliefs) -> Result<(), SolverError> {
    confirm_singleton_positions(beliefs)?;
    prune_when_all_colors_known(beliefs);
    reconcile_pair_bounds(beliefs)?;
    cap_pair_totals(beliefs)?;
    cap_color_totals(beliefs)?;
    Ok(())
}

/// A position with one remaining color confirms that color's presence
fn confirm_singleton_positions(beliefs: &mut Beliefs) -> Result<(), SolverError> {
    for position in 0..CODE_LENGTH {
        if let Some(color) = beliefs.position(position).sole() {
            beliefs.color_mut(color).raise_min_to(1)?;
        }
    }
    Ok(())
}

/// Once the color minimums account for all 5 pegs, nothing else fits anywhere
fn prune_when_all_colors_known(beliefs: &mut Beliefs) {
    if beliefs.known_color_total() != CODE_LENGTH as u8 {
        return;
    }
    for color in Color::ALL {
        if beliefs.color(color).min() == 0 {
            beliefs.remove_from_all_positions(color);
        }
    }
}

/// A pair's count is exactly the sum of its two members' counts
fn reconcile_pair_bounds(beliefs: &mut Beliefs) -> Result<(), SolverError> {
    for pair in Pair::ALL {
        let [a, b] = pair.members();
        let pair_bound = beliefs.pair(pair);
        let (a_bound, b_bound) = (beliefs.color(a), beliefs.color(b));

        beliefs
            .color_mut(a)
            .raise_min_to(pair_bound.min().saturating_sub(b_bound.max()))?;
        beliefs
            .color_mut(b)
            .raise_min_to(pair_bound.min().saturating_sub(a_bound.max()))?;
        beliefs
            .color_mut(a)
            .lower_max_to(pair_bound.max().saturating_sub(b_bound.min()))?;
        beliefs
            .color_mut(b)
            .lower_max_to(pair_bound.max().saturating_sub(a_bound.min()))?;

        beliefs
            .pair_mut(pair)
            .raise_min_to(a_bound.min() + b_bound.min())?;
        beliefs
            .pair_mut(pair)
            .lower_max_to(a_bound.max() + b_bound.max())?;
    }
    Ok(())
}

/// Pair counts must sum to exactly 5 across the partition
fn cap_pair_totals(beliefs: &mut Beliefs) -> Result<(), SolverError> {
    for pair in Pair::ALL {
        let other_mins = beliefs.pair_min_total() - beliefs.pair(pair).min();
        beliefs
            .pair_mut(pair)
            .lower_max_to((CODE_LENGTH as u8).saturating_sub(other_mins))?;

        let other_maxes = beliefs.pair_max_total() - beliefs.pair(pair).max();
        beliefs
            .pair_mut(pair)
            .raise_min_to((CODE_LENGTH as u8).saturating_sub(other_maxes))?;
    }
    Ok(())
}

/// A color can claim at most the pegs the other confirmed colors leave over
fn cap_color_totals(beliefs: &mut Beliefs) -> Result<(), SolverError> {
    for color in Color::ALL {
        let other_known = beliefs.known_color_total() - beliefs.color(color).min();
        beliefs
            .color_mut(color)
            .lower_max_to((CODE_LENGTH as u8).saturating_sub(other_known))?;
    }
    Ok(())
}
