//! Color sequences
//!
//! `Code` is used both for the hidden secret and for player guesses; the two
//! are structurally identical.

use super::{Color, GameError, Palette, Settings};
use std::fmt;

/// An ordered sequence of peg colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    colors: Vec<Color>,
}

/// A player's guess has the same shape as the secret code
pub type Guess = Code;

impl Code {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a player's guess such as `"pink gr ye bla"`
    ///
    /// Tokens are separated by whitespace or commas and may be full color
    /// names or abbreviations.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the number of tokens differs from
    /// the peg count, or `GameError::InvalidSymbol` for a token outside the
    /// active palette.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color, Difficulty, Palette, Settings};
    ///
    /// let settings = Settings::new(Difficulty::Easy, false);
    /// let guess = Code::parse("pi, or ye gr", &Palette::standard(), &settings).unwrap();
    /// assert_eq!(guess.colors(), &[Color::Pink, Color::Orange, Color::Yellow, Color::Green]);
    ///
    /// assert!(Code::parse("pink orange", &Palette::standard(), &settings).is_err());
    /// ```
    pub fn parse(input: &str, palette: &Palette, settings: &Settings) -> Result<Self, GameError> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != settings.peg_count() {
            return Err(GameError::LengthMismatch {
                expected: settings.peg_count(),
                actual: tokens.len(),
            });
        }

        let colors = tokens
            .into_iter()
            .map(|token| palette.decode(token, settings.palette_size()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { colors })
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// True if any color appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.colors
            .iter()
            .enumerate()
            .any(|(i, color)| self.colors[..i].contains(color))
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Black, Blue, Green, Orange, Pink, Purple, Yellow};
    use crate::core::Difficulty;

    fn easy() -> Settings {
        Settings::new(Difficulty::Easy, false)
    }

    #[test]
    fn parse_full_names() {
        let code = Code::parse("blue green pink orange", &Palette::standard(), &easy()).unwrap();
        assert_eq!(code.colors(), &[Blue, Green, Pink, Orange]);
    }

    #[test]
    fn parse_mixed_abbreviations_and_commas() {
        let code = Code::parse("BL,gr  pink,or", &Palette::standard(), &easy()).unwrap();
        assert_eq!(code.colors(), &[Blue, Green, Pink, Orange]);
    }

    #[test]
    fn parse_wrong_length() {
        let result = Code::parse("blue green pink", &Palette::standard(), &easy());
        assert_eq!(
            result,
            Err(GameError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn parse_color_outside_active_palette() {
        // Black is the eighth color; easy only uses six
        let result = Code::parse("blue green pink black", &Palette::standard(), &easy());
        assert!(matches!(result, Err(GameError::InvalidSymbol { token }) if token == "black"));

        let expert = Settings::new(Difficulty::Expert, true);
        let code = Code::parse("bla bla pu pu ye ye", &Palette::standard(), &expert).unwrap();
        assert_eq!(code.colors(), &[Black, Black, Purple, Purple, Yellow, Yellow]);
    }

    #[test]
    fn parse_unknown_word() {
        let result = Code::parse("blue green pink teal", &Palette::standard(), &easy());
        assert!(matches!(result, Err(GameError::InvalidSymbol { .. })));
    }

    #[test]
    fn guesses_may_repeat_colors_without_duplicates_mode() {
        let code = Code::parse("gr gr gr pu", &Palette::standard(), &easy()).unwrap();
        assert!(code.has_duplicates());
    }

    #[test]
    fn has_duplicates() {
        assert!(!Code::new(vec![Blue, Green, Pink, Orange]).has_duplicates());
        assert!(Code::new(vec![Blue, Blue, Pink, Orange]).has_duplicates());
    }

    #[test]
    fn display_joins_names() {
        let code: Code = [Pink, Black].into_iter().collect();
        assert_eq!(code.to_string(), "pink black");
    }
}
