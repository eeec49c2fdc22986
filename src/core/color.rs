//! Peg colors
//!
//! The eight colors a code can be built from, in palette order. Each color
//! has a full name and a short abbreviation accepted as player input.

use super::GameError;
use std::fmt;
use std::str::FromStr;

/// A single peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Pink,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
    Black,
}

impl Color {
    /// Every color in palette order
    pub const ALL: [Self; 8] = [
        Self::Pink,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Full lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Shorthand accepted in guesses
    ///
    /// Black needs three letters because "bl" is taken by blue.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Pink => "pi",
            Self::Orange => "or",
            Self::Yellow => "ye",
            Self::Green => "gr",
            Self::Blue => "bl",
            Self::Purple => "pu",
            Self::White => "wh",
            Self::Black => "bla",
        }
    }

    /// Look up a color by full name or abbreviation
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_token("Pink"), Some(Color::Pink));
    /// assert_eq!(Color::from_token("bla"), Some(Color::Black));
    /// assert_eq!(Color::from_token("teal"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == token || c.abbreviation() == token)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| GameError::InvalidSymbol {
            token: s.trim().to_string(),
        })
    }
}
