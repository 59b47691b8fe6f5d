//! Command implementations for the CLI

pub mod benchmark;
pub mod exhaustive;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use exhaustive::{ExhaustiveStatistics, print_exhaustive_statistics, run_exhaustive};
pub use play::run_play;
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_code};

/// Rounds the guesser gets before the game is lost
pub const MAX_ROUNDS: usize = 12;
