//! The Mastermind deduction engine
//!
//! A small constraint solver over integer interval beliefs and per-position
//! possibility sets, plus the randomized search that turns those beliefs
//! into guesses. [`Deducer`] is the facade the turn loop drives.

mod bound;
mod engine;
mod error;
mod propagate;
mod round;
mod state;
mod synthesize;

pub use bound::Bound;
pub use engine::Deducer;
pub use error::SolverError;
pub use round::Round;
pub use state::{Beliefs, ColorSet, PAIR_COUNT, Pair};
