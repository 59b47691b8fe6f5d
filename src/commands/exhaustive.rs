//! Exhaustive evaluation over the full code space
//!
//! Runs the engine against every possible secret (all 32,768 codes, or a
//! limited prefix) in parallel and aggregates statistics against the
//! 12-round bound.

use super::MAX_ROUNDS;
use super::benchmark::rounds_to_solve;
use crate::core::{CODE_SPACE, Code};
use crate::output::formatters::distribution_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from an exhaustive run
#[derive(Debug)]
pub struct ExhaustiveStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub distribution: HashMap<usize, usize>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub worst_codes: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Run the engine on every code in the space (or a limited prefix)
///
/// Each game gets its own RNG derived from `seed` and the code's index, so
/// runs are reproducible and independent across rayon workers.
///
/// # Panics
///
/// Panics if the progress bar template is malformed, which is a programming
/// error.
#[must_use]
pub fn run_exhaustive(limit: Option<usize>, seed: u64) -> ExhaustiveStatistics {
    let total = limit.unwrap_or(CODE_SPACE).min(CODE_SPACE);
    println!("Testing {total} secret codes...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(usize, Option<usize>)> = (0..total)
        .into_par_iter()
        .map(|index| {
            let secret = Code::from_space_index(index);
            let mut rng = StdRng::seed_from_u64(seed ^ index as u64);
            let rounds = rounds_to_solve(&secret, &mut rng, MAX_ROUNDS);
            pb.inc(1);
            (index, rounds)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_codes: Vec<(String, usize)> = Vec::new();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;

    for (index, outcome) in &outcomes {
        match outcome {
            Some(rounds) => {
                solved += 1;
                total_rounds += rounds;
                min_rounds = min_rounds.min(*rounds);
                max_rounds = max_rounds.max(*rounds);
                *distribution.entry(*rounds).or_insert(0) += 1;
                if *rounds >= MAX_ROUNDS - 2 {
                    worst_codes.push((Code::from_space_index(*index).to_string(), *rounds));
                }
            }
            None => {
                worst_codes.push((Code::from_space_index(*index).to_string(), MAX_ROUNDS + 1));
            }
        }
    }

    worst_codes.sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    worst_codes.truncate(10);

    ExhaustiveStatistics {
        total_codes: total,
        solved,
        failed: total - solved,
        distribution,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        worst_codes,
        total_time,
    }
}

/// Print exhaustive-run statistics
pub fn print_exhaustive_statistics(stats: &ExhaustiveStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Results ");
    println!("{}", "═".repeat(70));

    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Codes tested:      {}", stats.total_codes);
    println!(
        "  Solved:            {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed (> {} rounds): {}",
            MAX_ROUNDS,
            stats.failed.to_string().red()
        );
    }
    println!(
        "  Average rounds:    {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Best / worst:      {} / {}",
        stats.min_rounds.to_string().green(),
        stats.max_rounds.to_string().yellow()
    );
    println!(
        "  Total time:        {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Round Distribution".bright_cyan().bold());
    let max_count = *stats.distribution.values().max().unwrap_or(&1);
    for rounds in 1..=MAX_ROUNDS {
        let count = *stats.distribution.get(&rounds).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("  {rounds:2} rounds: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_codes.is_empty() {
        println!("\n{}", "Hardest Codes".yellow().bold());
        for (code, rounds) in stats.worst_codes.iter().take(5) {
            if *rounds > MAX_ROUNDS {
                println!("  {code} ({})", "unsolved".red());
            } else {
                println!("  {code} ({rounds} rounds)");
            }
        }
    }
}
