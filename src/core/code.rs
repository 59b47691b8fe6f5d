//! Mastermind code representation
//!
//! A `Code` is an ordered sequence of exactly 5 colors. It is the only
//! sequence representation in the crate: text input is converted through a
//! validated parse, and every position is always assigned.

use super::Color;
use rand::Rng;
use std::fmt;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 5;

/// Number of possible codes (8^5)
pub const CODE_SPACE: usize = 32_768;

/// A full 5-peg color code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; CODE_LENGTH]);

/// Error type for invalid code text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnknownColor(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} letters, got {len}")
            }
            Self::UnknownColor(letter) => {
                write!(f, "Unknown color letter '{letter}' (use m y g b p c s r)")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from an explicit color array
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Create a code of one color repeated in every position
    #[inline]
    #[must_use]
    pub const fn repeated(color: Color) -> Self {
        Self([color; CODE_LENGTH])
    }

    /// Parse a code from letter-code text like `"rrybb"`
    ///
    /// # Errors
    /// Returns `CodeError` if the text is not exactly 5 recognized color
    /// letters.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Color};
    ///
    /// let code = Code::parse("mmgbc").unwrap();
    /// assert_eq!(code.color_at(0), Color::Maroon);
    /// assert!(Code::parse("mmgb").is_err());
    /// assert!(Code::parse("mmgbx").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let letters: Vec<char> = text.trim().chars().collect();
        if letters.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(letters.len()));
        }

        let mut colors = [Color::Maroon; CODE_LENGTH];
        for (slot, &letter) in colors.iter_mut().zip(&letters) {
            *slot = Color::from_letter(letter).ok_or(CodeError::UnknownColor(letter))?;
        }
        Ok(Self(colors))
    }

    /// Draw a uniformly random code
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut colors = [Color::Maroon; CODE_LENGTH];
        for slot in &mut colors {
            *slot = Color::from_index(rng.random_range(0..Color::ALL.len()));
        }
        Self(colors)
    }

    /// The code at a given index of the full 8^5 code space
    ///
    /// Indexes are base-8 encodings of the color sequence; used to enumerate
    /// every possible code.
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 32768`.
    #[must_use]
    pub fn from_space_index(index: usize) -> Self {
        debug_assert!(index < CODE_SPACE, "code index out of range");
        let mut colors = [Color::Maroon; CODE_LENGTH];
        let mut rest = index;
        for slot in &mut colors {
            *slot = Color::from_index(rest % Color::ALL.len());
            rest /= Color::ALL.len();
        }
        Self(colors)
    }

    /// The colors of this code, in order
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// The color at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// How many pegs of this code are the given color
    #[must_use]
    pub fn count_of(&self, color: Color) -> u8 {
        self.0.iter().filter(|&&c| c == color).count() as u8
    }

    /// Whether any peg is the given color
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// Whether every peg is the same color
    #[must_use]
    pub fn is_monochrome(&self) -> bool {
        self.0.iter().all(|&c| c == self.0[0])
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
