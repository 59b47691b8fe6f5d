//! The belief state: everything the engine knows about the secret
//!
//! `Beliefs` owns one interval bound per color, one per color pair, and one
//! possibility set per position, all stored in fixed arrays indexed by the
//! color/pair id. It is the only mutable state in the engine; propagation
//! tightens it and synthesis reads it.

use super::Bound;
use crate::core::{CODE_LENGTH, COLOR_COUNT, Color};
use std::fmt;

/// Number of disjoint color pairs
pub const PAIR_COUNT: usize = COLOR_COUNT / 2;

/// One of the four fixed color pairs
///
/// The partition is established once: colors at indices `2k` and `2k + 1`
/// form pair `k`. Pair-level bounds add a third class of constraint on top
/// of per-color and per-position knowledge; with only two feedback integers
/// per round, per-color decomposition alone is under-determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair(u8);

impl Pair {
    /// All pairs, in index order
    pub const ALL: [Self; PAIR_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// The pair a color belongs to
    #[inline]
    #[must_use]
    pub const fn of(color: Color) -> Self {
        Self((color.index() / 2) as u8)
    }

    /// The two member colors of this pair
    #[inline]
    #[must_use]
    pub const fn members(self) -> [Color; 2] {
        let first = Color::from_index(self.0 as usize * 2);
        [first, first.partner()]
    }

    /// The array index of this pair (0-3)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.members();
        write!(f, "{}{}", a.letter(), b.letter())
    }
}

/// A set of colors still considered possible, as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet(u8);

impl ColorSet {
    /// The set containing every color
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self(((1u16 << COLOR_COUNT) - 1) as u8)
    }

    /// Whether a color is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    /// Remove a color; removing an absent color is a no-op
    #[inline]
    pub const fn remove(&mut self, color: Color) {
        self.0 &= !(1 << color.index());
    }

    /// Number of colors in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single remaining color, if the set has shrunk to one
    #[must_use]
    pub fn sole(self) -> Option<Color> {
        if self.len() == 1 {
            Some(Color::from_index(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    /// Iterate over the colors in the set
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

/// The aggregate belief state
#[derive(Debug, Clone)]
pub struct Beliefs {
    colors: [Bound; COLOR_COUNT],
    pairs: [Bound; PAIR_COUNT],
    positions: [ColorSet; CODE_LENGTH],
}

impl Default for Beliefs {
    fn default() -> Self {
        Self::new()
    }
}

impl Beliefs {
    /// A fresh belief state: every bound `[0, 5]`, every position open
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: [Bound::new(); COLOR_COUNT],
            pairs: [Bound::new(); PAIR_COUNT],
            positions: [ColorSet::full(); CODE_LENGTH],
        }
    }

    /// The occurrence bound for a color
    #[inline]
    #[must_use]
    pub const fn color(&self, color: Color) -> Bound {
        self.colors[color.index()]
    }

    #[inline]
    pub(crate) const fn color_mut(&mut self, color: Color) -> &mut Bound {
        &mut self.colors[color.index()]
    }

    /// The combined occurrence bound for a pair
    #[inline]
    #[must_use]
    pub const fn pair(&self, pair: Pair) -> Bound {
        self.pairs[pair.index()]
    }

    #[inline]
    pub(crate) const fn pair_mut(&mut self, pair: Pair) -> &mut Bound {
        &mut self.pairs[pair.index()]
    }

    /// The possibility set for a position (0-4)
    #[inline]
    #[must_use]
    pub const fn position(&self, position: usize) -> ColorSet {
        self.positions[position]
    }

    /// Rule a color out of one position
    #[inline]
    pub(crate) const fn remove_from_position(&mut self, position: usize, color: Color) {
        self.positions[position].remove(color);
    }

    /// Rule a color out of every position
    pub(crate) fn remove_from_all_positions(&mut self, color: Color) {
        for set in &mut self.positions {
            set.remove(color);
        }
    }

    /// Sum of all pair minimums
    #[must_use]
    pub fn pair_min_total(&self) -> u8 {
        self.pairs.iter().map(|b| b.min()).sum()
    }

    /// Sum of all pair maximums
    #[must_use]
    pub fn pair_max_total(&self) -> u8 {
        self.pairs.iter().map(|b| b.max()).sum()
    }

    /// Sum of all color minimums: how many pegs are accounted for
    #[must_use]
    pub fn known_color_total(&self) -> u8 {
        self.colors.iter().map(|b| b.min()).sum()
    }

    /// Whether pair-level knowledge already accounts for every peg
    ///
    /// Once the pair minimums sum to the code length, the canned opening
    /// probes carry no further value and the engine moves to search-driven
    /// guessing.
    #[inline]
    #[must_use]
    pub fn has_enough_pair_info(&self) -> bool {
        self.pair_min_total() == CODE_LENGTH as u8
    }

    /// The confirmed colors of the secret, with multiplicity
    ///
    /// Each color appears `min` times; at most 5 entries total.
    #[must_use]
    pub fn known_colors(&self) -> Vec<Color> {
        let mut known = Vec::with_capacity(CODE_LENGTH);
        for color in Color::ALL {
            for _ in 0..self.color(color).min() {
                known.push(color);
            }
        }
        known
    }

    /// Colors that can no longer occur anywhere
    pub fn ruled_out_colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL
            .into_iter()
            .filter(|&c| self.color(c).max() == 0)
    }
}
