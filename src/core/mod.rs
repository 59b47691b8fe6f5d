//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond randomness. All types here are pure, testable, and
//! have clear mathematical properties.

mod code;
mod color;
mod feedback;

pub use code::{CODE_LENGTH, CODE_SPACE, Code, CodeError};
pub use color::{COLOR_COUNT, Color};
pub use feedback::Feedback;
