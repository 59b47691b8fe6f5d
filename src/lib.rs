//! Mastermind Solver
//!
//! A Mastermind deduction engine built on interval constraint propagation.
//! Beliefs about the secret only tighten as feedback arrives, and a
//! randomized constructive search turns them into guesses consistent with
//! every round seen so far.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::Deducer;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let secret = Code::parse("mgbcr").unwrap();
//! let mut deducer = Deducer::new();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! loop {
//!     let guess = deducer.next_guess(&mut rng).unwrap();
//!     let feedback = Feedback::score(&secret, &guess);
//!     if feedback.is_win() {
//!         break;
//!     }
//!     deducer.observe(guess, feedback).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// The deduction engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
