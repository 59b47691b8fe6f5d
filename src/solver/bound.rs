//! Interval belief over an occurrence count
//!
//! A `Bound` tracks what is known about how many times a color (or a color
//! pair) occurs in the secret: a `[min, max]` range inside `[0, 5]`. The
//! range only ever tightens, which is what makes repeated re-application of
//! every derivation rule safe: past the fixpoint each rule is a no-op.

use super::SolverError;
use crate::core::CODE_LENGTH;

/// A tightening `[min, max]` occurrence range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    min: u8,
    max: u8,
}

impl Default for Bound {
    fn default() -> Self {
        Self::new()
    }
}

impl Bound {
    /// The vacuous bound `[0, 5]`
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: 0,
            max: CODE_LENGTH as u8,
        }
    }

    /// Current lower bound
    #[inline]
    #[must_use]
    pub const fn min(self) -> u8 {
        self.min
    }

    /// Current upper bound
    #[inline]
    #[must_use]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// Whether the count is pinned exactly
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        self.min == self.max
    }

    /// Raise the lower bound to at least `value`
    ///
    /// Values at or below the current minimum are no-ops, so callers can
    /// re-apply derivations freely.
    ///
    /// # Errors
    /// Returns `SolverError::BoundContradiction` if the raise would push
    /// `min` above `max`.
    pub fn raise_min_to(&mut self, value: u8) -> Result<(), SolverError> {
        self.min = self.min.max(value);
        if self.min > self.max {
            return Err(SolverError::BoundContradiction {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Lower the upper bound to at most `value`
    ///
    /// # Errors
    /// Returns `SolverError::BoundContradiction` if the lowering would push
    /// `max` below `min`.
    pub fn lower_max_to(&mut self, value: u8) -> Result<(), SolverError> {
        self.max = self.max.min(value);
        if self.max < self.min {
            return Err(SolverError::BoundContradiction {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_vacuous() {
        let bound = Bound::new();
        assert_eq!(bound.min(), 0);
        assert_eq!(bound.max(), 5);
        assert!(!bound.is_exact());
    }

    #[test]
    fn raise_min_keeps_the_larger_value() {
        let mut bound = Bound::new();
        bound.raise_min_to(3).unwrap();
        assert_eq!(bound.min(), 3);

        // A weaker derivation does not widen the range
        bound.raise_min_to(1).unwrap();
        assert_eq!(bound.min(), 3);
    }

    #[test]
    fn lower_max_keeps_the_smaller_value() {
        let mut bound = Bound::new();
        bound.lower_max_to(2).unwrap();
        assert_eq!(bound.max(), 2);

        bound.lower_max_to(4).unwrap();
        assert_eq!(bound.max(), 2);
    }

    #[test]
    fn updates_are_idempotent() {
        let mut bound = Bound::new();
        bound.raise_min_to(2).unwrap();
        bound.lower_max_to(3).unwrap();
        let snapshot = bound;

        bound.raise_min_to(2).unwrap();
        bound.lower_max_to(3).unwrap();
        assert_eq!(bound, snapshot);
    }

    #[test]
    fn crossing_bounds_is_a_contradiction() {
        let mut bound = Bound::new();
        bound.lower_max_to(2).unwrap();
        assert_eq!(
            bound.raise_min_to(3),
            Err(SolverError::BoundContradiction { min: 3, max: 2 })
        );

        let mut bound = Bound::new();
        bound.raise_min_to(4).unwrap();
        assert_eq!(
            bound.lower_max_to(1),
            Err(SolverError::BoundContradiction { min: 4, max: 1 })
        );
    }

    #[test]
    fn exact_once_pinned() {
        let mut bound = Bound::new();
        bound.raise_min_to(2).unwrap();
        bound.lower_max_to(2).unwrap();
        assert!(bound.is_exact());
    }
}
