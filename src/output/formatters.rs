//! Formatting utilities for terminal output

use crate::core::{Code, Color};
use colored::Colorize;

/// Render one peg as a colored swatch
#[must_use]
pub fn paint_peg(color: Color) -> String {
    let letter = color.letter().to_string();
    let swatch = match color {
        Color::Maroon => letter.white().on_red(),
        Color::Yellow => letter.black().on_yellow(),
        Color::Green => letter.black().on_green(),
        Color::Blue => letter.white().on_blue(),
        Color::Purple => letter.white().on_magenta(),
        Color::Cyan => letter.black().on_cyan(),
        Color::Silver => letter.black().on_white(),
        Color::Red => letter.white().on_bright_red(),
    };
    swatch.to_string()
}

/// Render a whole code as colored swatches
#[must_use]
pub fn paint_code(code: &Code) -> String {
    code.colors().iter().map(|&c| paint_peg(c)).collect()
}

/// One-line legend mapping letters to color names
#[must_use]
pub fn color_key() -> String {
    Color::ALL
        .iter()
        .map(|&c| format!("{}={}", paint_peg(c), c.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Two-tone bar for one bucket of a distribution
///
/// Filled relative to the largest bucket; a non-empty bucket always shows at
/// least one filled cell.
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count > 0 {
        (count * width / max_count).max(usize::from(count > 0))
    } else {
        0
    };
    let filled = filled.min(width);

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}
