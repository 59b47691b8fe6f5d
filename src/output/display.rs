//! Display functions for command results

use super::formatters::{distribution_bar, paint_code};
use crate::commands::{BenchmarkResult, MAX_ROUNDS, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", paint_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let round = i + 1;
        println!("\nRound {}: {}", round, paint_code(&step.guess));
        if verbose {
            println!("  Feedback: {}", step.feedback);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    if result.failed > 0 {
        println!(
            "   Unsolved:         {}",
            result.failed.to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = *result.distribution.values().max().unwrap_or(&1);
    for round_count in 1..=MAX_ROUNDS {
        if let Some(&count) = result.distribution.get(&round_count) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("   {round_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
