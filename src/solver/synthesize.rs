//! Guess synthesis
//!
//! Three-phase decision procedure: canned opening probes while pair-level
//! information is still insufficient, a monochrome decisive probe when it
//! would pin a color's count exactly, and otherwise a randomized
//! generate-and-test search that builds candidates from the belief state and
//! accepts the first one that reproduces every recorded round's feedback.

use super::{Beliefs, Pair, Round, SolverError};
use crate::core::{CODE_LENGTH, Code, Color, Feedback};
use rand::Rng;

/// Outcome of one fill pass over a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillOutcome {
    /// Every placement landed on a position that still allows its color
    Complete,
    /// Some placement hit an excluded position; rebuild from the base draft
    NeedsRetry,
}

/// The canned opening probes
///
/// Each probe draws its pegs from a single pair of the partition, which is
/// what makes the propagation engine's pair bootstrap sound: the probe's
/// whole color count belongs to that pair.
pub(crate) const OPENINGS: [Code; 3] = [
    Code::new([
        Color::Maroon,
        Color::Maroon,
        Color::Maroon,
        Color::Yellow,
        Color::Yellow,
    ]),
    Code::new([
        Color::Blue,
        Color::Green,
        Color::Blue,
        Color::Green,
        Color::Blue,
    ]),
    Code::new([
        Color::Purple,
        Color::Purple,
        Color::Cyan,
        Color::Cyan,
        Color::Cyan,
    ]),
];

/// Retries granted to each fill pass before the whole candidate is rebuilt
const PASS_RETRY_BUDGET: usize = 64;

/// Produce the next guess from the current beliefs and history
///
/// # Errors
/// Returns `SolverError::EmptyCandidatePool` if the constructive search has
/// to draw from an empty pool, which means the belief state reached a
/// configuration propagation should have rejected earlier.
pub(crate) fn next_guess<R: Rng>(
    beliefs: &Beliefs,
    rounds: &[Round],
    rng: &mut R,
) -> Result<Code, SolverError> {
    if rounds.len() < OPENINGS.len() && !beliefs.has_enough_pair_info() {
        return Ok(OPENINGS[rounds.len()]);
    }

    if let Some(probe) = monochrome_probe(beliefs, rounds) {
        return Ok(probe);
    }

    constructive_search(beliefs, rounds, rng)
}

/// A single-color probe that pins one color's occurrence count exactly
///
/// Worth a round only while little is confirmed: some earlier guess used the
/// color twice, scored more than two correct colors, and the color could
/// still occur more than twice. At most one such probe is ever played.
fn monochrome_probe(beliefs: &Beliefs, rounds: &[Round]) -> Option<Code> {
    if rounds.iter().any(|r| r.guess().is_monochrome()) {
        return None;
    }
    if beliefs.known_color_total() > 3 {
        return None;
    }

    for color in Color::ALL {
        for round in rounds {
            if round.count_of(color) == 2
                && round.feedback().colors() > 2
                && beliefs.color(color).max() > 2
            {
                return Some(Code::repeated(color));
            }
        }
    }
    None
}

/// Generate-and-test search over belief-consistent candidates
///
/// Unbounded by design: every rebuilt candidate starts from scratch, and the
/// secret itself always survives propagation, so a consistent candidate is
/// always reachable.
fn constructive_search<R: Rng>(
    beliefs: &Beliefs,
    rounds: &[Round],
    rng: &mut R,
) -> Result<Code, SolverError> {
    loop {
        let Some(candidate) = build_candidate(beliefs, rng)? else {
            continue;
        };
        if reproduces_history(&candidate, rounds) {
            return Ok(candidate);
        }
    }
}

/// Build one full candidate, or `None` when a fill pass ran out of retries
fn build_candidate<R: Rng>(
    beliefs: &Beliefs,
    rng: &mut R,
) -> Result<Option<Code>, SolverError> {
    let seeded = Draft::seeded(beliefs);

    let Some(with_known) = run_fill_pass(&seeded, |draft| {
        place_known_colors(draft, beliefs, rng)
    })?
    else {
        return Ok(None);
    };

    let Some(filled) = run_fill_pass(&with_known, |draft| {
        fill_from_pairs(draft, beliefs, rng)
    })?
    else {
        return Ok(None);
    };

    Ok(filled.finish())
}

/// Re-run a fill pass on a fresh copy of the base draft until it completes
fn run_fill_pass<F>(base: &Draft, mut fill: F) -> Result<Option<Draft>, SolverError>
where
    F: FnMut(&mut Draft) -> Result<FillOutcome, SolverError>,
{
    for _ in 0..PASS_RETRY_BUDGET {
        let mut draft = base.clone();
        match fill(&mut draft)? {
            FillOutcome::Complete => return Ok(Some(draft)),
            FillOutcome::NeedsRetry => {}
        }
    }
    Ok(None)
}

/// Place every confirmed color occurrence into a random open position
///
/// Occurrences already present in the draft (from singleton-position
/// seeding) count toward the quota. A placement that lands on a position
/// whose possibility set excludes the color abandons the pass.
fn place_known_colors<R: Rng>(
    draft: &mut Draft,
    beliefs: &Beliefs,
    rng: &mut R,
) -> Result<FillOutcome, SolverError> {
    for color in Color::ALL {
        let needed = beliefs
            .color(color)
            .min()
            .saturating_sub(draft.count_of(color));
        for _ in 0..needed {
            let open = draft.open_positions();
            if open.is_empty() {
                return Err(SolverError::EmptyCandidatePool {
                    context: "confirmed colors outnumber open positions",
                });
            }
            let position = open[rng.random_range(0..open.len())];
            if !beliefs.position(position).contains(color) {
                return Ok(FillOutcome::NeedsRetry);
            }
            draft.place(position, color);
        }
    }
    Ok(FillOutcome::Complete)
}

/// Fill the remaining open positions from pair-level knowledge
///
/// The pool holds each confirmed pair with multiplicity, minus what the
/// draft already covers, topped up with random pairs that could still
/// occur. Each pool entry contributes one member color, falling back to the
/// partner when the picked member is ruled out.
fn fill_from_pairs<R: Rng>(
    draft: &mut Draft,
    beliefs: &Beliefs,
    rng: &mut R,
) -> Result<FillOutcome, SolverError> {
    let pool = build_pair_pool(draft, beliefs, rng)?;

    let mut outcome = FillOutcome::Complete;
    for pair in pool {
        let color = usable_member(pair, beliefs, rng);
        let open = draft.open_positions();
        if open.is_empty() {
            break;
        }
        let position = open[rng.random_range(0..open.len())];
        if beliefs.position(position).contains(color) {
            draft.place(position, color);
        } else {
            outcome = FillOutcome::NeedsRetry;
        }
    }
    Ok(outcome)
}

fn build_pair_pool<R: Rng>(
    draft: &Draft,
    beliefs: &Beliefs,
    rng: &mut R,
) -> Result<Vec<Pair>, SolverError> {
    let mut pool: Vec<Pair> = Vec::with_capacity(CODE_LENGTH);
    for pair in Pair::ALL {
        for _ in 0..beliefs.pair(pair).min() {
            pool.push(pair);
        }
    }

    // Pegs already in the draft consume their pair's pool entries
    for pair in Pair::ALL {
        for _ in 0..draft.pair_count(pair) {
            if let Some(index) = pool.iter().position(|&p| p == pair) {
                pool.remove(index);
            }
        }
    }

    let open_count = draft.open_count();
    pool.truncate(open_count);
    while pool.len() < open_count {
        pool.push(random_positive_pair(beliefs, rng)?);
    }
    Ok(pool)
}

fn random_positive_pair<R: Rng>(beliefs: &Beliefs, rng: &mut R) -> Result<Pair, SolverError> {
    let available: Vec<Pair> = Pair::ALL
        .into_iter()
        .filter(|&pair| beliefs.pair(pair).max() > 0)
        .collect();
    if available.is_empty() {
        return Err(SolverError::EmptyCandidatePool {
            context: "no pair has a positive max",
        });
    }
    Ok(available[rng.random_range(0..available.len())])
}

fn usable_member<R: Rng>(pair: Pair, beliefs: &Beliefs, rng: &mut R) -> Color {
    let [a, b] = pair.members();
    let picked = if rng.random_bool(0.5) { a } else { b };
    if beliefs.color(picked).max() == 0 {
        picked.partner()
    } else {
        picked
    }
}

/// Accept a candidate only if it reproduces every recorded feedback
fn reproduces_history(candidate: &Code, rounds: &[Round]) -> bool {
    rounds
        .iter()
        .all(|round| Feedback::score(candidate, round.guess()) == round.feedback())
}

/// A partially built guess; open positions are `None`
///
/// Never escapes the synthesizer: a draft only becomes a `Code` once every
/// position is assigned.
#[derive(Debug, Clone)]
struct Draft([Option<Color>; CODE_LENGTH]);

impl Draft {
    /// Start from every position whose possibility set has one color left
    fn seeded(beliefs: &Beliefs) -> Self {
        let mut slots = [None; CODE_LENGTH];
        for (position, slot) in slots.iter_mut().enumerate() {
            *slot = beliefs.position(position).sole();
        }
        Self(slots)
    }

    fn place(&mut self, position: usize, color: Color) {
        self.0[position] = Some(color);
    }

    fn count_of(&self, color: Color) -> u8 {
        self.0.iter().flatten().filter(|&&c| c == color).count() as u8
    }

    fn pair_count(&self, pair: Pair) -> u8 {
        let [a, b] = pair.members();
        self.count_of(a) + self.count_of(b)
    }

    fn open_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(position, _)| position)
            .collect()
    }

    fn open_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    fn finish(&self) -> Option<Code> {
        let mut colors = [Color::Maroon; CODE_LENGTH];
        for (slot, filled) in colors.iter_mut().zip(&self.0) {
            *slot = (*filled)?;
        }
        Some(Code::new(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::propagate::observe_round;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn openings_each_use_a_single_pair() {
        for (opening, pair) in OPENINGS.iter().zip([
            Pair::of(Color::Maroon),
            Pair::of(Color::Green),
            Pair::of(Color::Purple),
        ]) {
            let [a, b] = pair.members();
            assert_eq!(
                opening.count_of(a) + opening.count_of(b),
                CODE_LENGTH as u8
            );
        }
    }

    #[test]
    fn openings_are_played_in_order() {
        let beliefs = Beliefs::new();
        let mut rounds = Vec::new();
        let mut rng = rng();

        for opening in OPENINGS {
            let guess = next_guess(&beliefs, &rounds, &mut rng).unwrap();
            assert_eq!(guess, opening);
            rounds.push(Round::new(guess, Feedback::new(0, 0)));
        }
    }

    #[test]
    fn openings_are_skipped_once_pair_info_suffices() {
        let mut beliefs = Beliefs::new();
        beliefs
            .pair_mut(Pair::of(Color::Maroon))
            .raise_min_to(3)
            .unwrap();
        beliefs
            .pair_mut(Pair::of(Color::Green))
            .raise_min_to(2)
            .unwrap();

        let guess = next_guess(&beliefs, &[], &mut rng()).unwrap();
        assert_ne!(guess, OPENINGS[0]);
    }

    #[test]
    fn monochrome_probe_fires_on_a_promising_double() {
        let mut beliefs = Beliefs::new();
        beliefs
            .pair_mut(Pair::of(Color::Maroon))
            .raise_min_to(3)
            .unwrap();
        beliefs
            .pair_mut(Pair::of(Color::Green))
            .raise_min_to(2)
            .unwrap();

        let rounds = vec![Round::new(
            Code::parse("mmgbc").unwrap(),
            Feedback::new(3, 1),
        )];

        let guess = next_guess(&beliefs, &rounds, &mut rng()).unwrap();
        assert_eq!(guess, Code::repeated(Color::Maroon));
    }

    #[test]
    fn monochrome_probe_is_played_at_most_once() {
        let mut beliefs = Beliefs::new();
        beliefs
            .pair_mut(Pair::of(Color::Maroon))
            .raise_min_to(5)
            .unwrap();

        let monochrome = Code::repeated(Color::Maroon);
        let rounds = vec![Round::new(monochrome, Feedback::new(5, 5))];

        assert_eq!(monochrome_probe(&beliefs, &rounds), None);
    }

    #[test]
    fn seeded_positions_survive_into_the_candidate() {
        let mut beliefs = Beliefs::new();
        for color in Color::ALL {
            if color != Color::Blue {
                beliefs.remove_from_position(0, color);
            }
        }
        beliefs.color_mut(Color::Blue).raise_min_to(1).unwrap();

        let candidate = constructive_search(&beliefs, &[], &mut rng()).unwrap();
        assert_eq!(candidate.color_at(0), Color::Blue);
    }

    #[test]
    fn search_candidates_reproduce_the_full_history() {
        // Play the openings against a real secret, then ask the search for
        // a candidate: it must agree with every recorded feedback.
        let secret = Code::parse("mgbcr").unwrap();
        let mut beliefs = Beliefs::new();
        let mut rounds = Vec::new();

        for opening in OPENINGS {
            let feedback = Feedback::score(&secret, &opening);
            let round = Round::new(opening, feedback);
            observe_round(&mut beliefs, &round, rounds.len()).unwrap();
            rounds.push(round);
        }

        let mut rng = rng();
        for _ in 0..10 {
            let candidate = next_guess(&beliefs, &rounds, &mut rng).unwrap();
            assert!(reproduces_history(&candidate, &rounds));
        }
    }

    #[test]
    fn empty_pair_pool_is_reported() {
        let mut beliefs = Beliefs::new();
        for pair in Pair::ALL {
            beliefs.pair_mut(pair).lower_max_to(0).unwrap();
        }

        let err = random_positive_pair(&beliefs, &mut rng());
        assert!(matches!(
            err,
            Err(SolverError::EmptyCandidatePool { .. })
        ));
    }

    #[test]
    fn draft_tracks_open_positions() {
        let mut draft = Draft::seeded(&Beliefs::new());
        assert_eq!(draft.open_count(), CODE_LENGTH);
        assert!(draft.finish().is_none());

        for position in 0..CODE_LENGTH {
            draft.place(position, Color::Cyan);
        }
        assert_eq!(draft.open_count(), 0);
        assert_eq!(draft.finish(), Some(Code::repeated(Color::Cyan)));
    }
}
