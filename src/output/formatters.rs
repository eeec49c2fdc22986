//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback, Palette, Settings};
use colored::{ColoredString, Colorize};

const EXACT_PEG: char = '●';
const COLOR_ONLY_PEG: char = '○';
const EMPTY_PEG: char = '·';

/// Render feedback as one symbol per peg: exact first, then color-only, then misses
#[must_use]
pub fn feedback_pegs(feedback: Feedback, pegs: usize) -> String {
    let misses = pegs.saturating_sub(feedback.exact() + feedback.color_only());

    let mut result = String::with_capacity(pegs * 3);
    result.extend(std::iter::repeat_n(EXACT_PEG, feedback.exact()));
    result.extend(std::iter::repeat_n(COLOR_ONLY_PEG, feedback.color_only()));
    result.extend(std::iter::repeat_n(EMPTY_PEG, misses));
    result
}

/// A color name painted in its own color
#[must_use]
pub fn colorize(color: Color) -> ColoredString {
    let name = color.name();
    match color {
        Color::Pink => name.truecolor(255, 105, 180),
        Color::Orange => name.truecolor(255, 165, 0),
        Color::Yellow => name.bright_yellow(),
        Color::Green => name.green(),
        Color::Blue => name.blue(),
        Color::Purple => name.purple(),
        Color::White => name.bright_white(),
        // Plain black disappears on dark terminals
        Color::Black => name.bright_black(),
    }
}

/// Every color of a code, painted and space separated
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|&c| colorize(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// List of the colors in play with their abbreviations, e.g. `pink (pi), orange (or)`
#[must_use]
pub fn active_colors(palette: &Palette, settings: &Settings) -> String {
    let size = settings.palette_size().min(palette.len());
    palette.colors()[..size]
        .iter()
        .map(|c| format!("{} ({})", c.name(), c.abbreviation()))
        .collect::<Vec<_>>()
        .join(", ")
}
