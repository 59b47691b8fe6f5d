//! Mastermind Solver - CLI
//!
//! Plays Mastermind from either side of the board: an interactive game, a
//! one-shot solve of a given code, and batch evaluation over random or
//! exhaustive secrets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, print_exhaustive_statistics, run_benchmark, run_exhaustive, run_play,
        solve_code,
    },
    output::{print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind deduction engine using interval constraint propagation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (omit for OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default - play either role)
    Play,

    /// Solve a specific secret code
    Solve {
        /// The secret code to solve, e.g. 'mgbcr'
        code: String,

        /// Show feedback for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark engine performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the engine on every possible secret
    Exhaustive {
        /// Limit the number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(cli.seed).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { code, verbose } => run_solve_command(&code, verbose, cli.seed),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, cli.seed);
            Ok(())
        }
        Commands::Exhaustive { limit } => {
            run_exhaustive_command(limit, cli.seed);
            Ok(())
        }
    }
}

fn run_solve_command(code: &str, verbose: bool, seed: Option<u64>) -> Result<()> {
    let mut config = SolveConfig::new(code.to_string());
    config.seed = seed;

    let result = solve_code(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>) {
    println!("Running benchmark on {count} random secrets...");
    let result = run_benchmark(count, seed.unwrap_or(0));
    print_benchmark_result(&result);
}

fn run_exhaustive_command(limit: Option<usize>, seed: Option<u64>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Engine Test ");
    println!("{}", "═".repeat(70));
    println!();

    let stats = run_exhaustive(limit, seed.unwrap_or(0));
    print_exhaustive_statistics(&stats);
}
