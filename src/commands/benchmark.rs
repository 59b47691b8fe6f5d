//! Benchmark command
//!
//! Tests engine performance across a batch of random secrets.

use super::MAX_ROUNDS;
use crate::core::{Code, Feedback};
use crate::solver::Deducer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub failed: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one full game; returns the rounds used, or `None` past the limit
///
/// The engine observes truthful feedback scored against the secret, so a
/// contradiction is impossible here and treated as a bug.
///
/// # Panics
///
/// Panics if the engine reports a contradiction or an empty candidate pool,
/// both of which indicate a derivation bug when the feedback is truthful.
#[must_use]
pub fn rounds_to_solve(secret: &Code, rng: &mut StdRng, limit: usize) -> Option<usize> {
    let mut deducer = Deducer::new();
    for round in 1..=limit {
        let guess = deducer
            .next_guess(rng)
            .expect("truthful feedback cannot exhaust the candidate pool");
        let feedback = Feedback::score(secret, &guess);
        if feedback.is_win() {
            return Some(round);
        }
        deducer
            .observe(guess, feedback)
            .expect("truthful feedback cannot contradict the beliefs");
    }
    None
}

/// Run the engine against `count` random secrets
#[must_use]
pub fn run_benchmark(count: usize, seed: u64) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut failed = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let mut secret_rng = StdRng::seed_from_u64(seed);
    for game in 0..count {
        let secret = Code::random(&mut secret_rng);
        let mut game_rng = StdRng::seed_from_u64(seed.wrapping_add(game as u64));

        match rounds_to_solve(&secret, &mut game_rng, MAX_ROUNDS) {
            Some(rounds) => {
                total_rounds += rounds;
                min_rounds = min_rounds.min(rounds);
                max_rounds = max_rounds.max(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            None => failed += 1,
        }
    }

    let duration = start.elapsed();
    let solved = count - failed;

    BenchmarkResult {
        total_games: count,
        total_rounds,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        failed,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64(),
    }
}
