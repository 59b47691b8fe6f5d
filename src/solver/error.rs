//! Solver error taxonomy

use std::fmt;

/// Fatal conditions inside the deduction engine
///
/// Both variants mean the belief state can no longer be trusted: either the
/// feedback source contradicted itself, or a derivation bug let an
/// impossible configuration through. An inconsistent candidate during guess
/// construction is *not* an error; the search simply retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A belief update would force its minimum above its maximum
    BoundContradiction { min: u8, max: u8 },
    /// The constructive search had to draw from an empty pool
    EmptyCandidatePool { context: &'static str },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundContradiction { min, max } => write!(
                f,
                "belief contradiction: min {min} exceeds max {max}; \
                 feedback is inconsistent with earlier rounds"
            ),
            Self::EmptyCandidatePool { context } => {
                write!(f, "guess construction drew from an empty pool: {context}")
            }
        }
    }
}

impl std::error::Error for SolverError {}
