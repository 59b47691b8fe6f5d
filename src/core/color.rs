//! The fixed 8-color Mastermind alphabet

use std::fmt;

/// Number of distinct colors in the alphabet
pub const COLOR_COUNT: usize = 8;

/// One of the 8 peg colors
///
/// Each color has a single-letter code used for text input and a display
/// name used for rendering. The discriminant doubles as the index into the
/// fixed belief arrays, so `Color::ALL` order is load-bearing: colors at
/// indices `2k` and `2k + 1` form pair `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Maroon,
    Yellow,
    Green,
    Blue,
    Purple,
    Cyan,
    Silver,
    Red,
}

impl Color {
    /// All colors, in index order
    pub const ALL: [Self; COLOR_COUNT] = [
        Self::Maroon,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Cyan,
        Self::Silver,
        Self::Red,
    ];

    /// Look up a color by its single-letter code
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_letter('m'), Some(Color::Maroon));
    /// assert_eq!(Color::from_letter('x'), None);
    /// ```
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'm' => Some(Self::Maroon),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            'b' => Some(Self::Blue),
            'p' => Some(Self::Purple),
            'c' => Some(Self::Cyan),
            's' => Some(Self::Silver),
            'r' => Some(Self::Red),
            _ => None,
        }
    }

    /// The single-letter code for this color
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Maroon => 'm',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Purple => 'p',
            Self::Cyan => 'c',
            Self::Silver => 's',
            Self::Red => 'r',
        }
    }

    /// Human-readable name for display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maroon => "maroon",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Silver => "silver",
            Self::Red => "red",
        }
    }

    /// The array index of this color (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by its array index
    ///
    /// # Panics
    /// Panics if `index >= 8`.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// The other member of this color's pair
    ///
    /// The alphabet is partitioned into four fixed pairs: (maroon, yellow),
    /// (green, blue), (purple, cyan), (silver, red).
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::Maroon.partner(), Color::Yellow);
    /// assert_eq!(Color::Red.partner(), Color::Silver);
    /// ```
    #[inline]
    #[must_use]
    pub const fn partner(self) -> Self {
        Self::ALL[self.index() ^ 1]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
