//! Game settings
//!
//! Difficulty maps to a fixed (palette size, peg count) pair:
//!
//! | difficulty | colors | pegs |
//! |------------|--------|------|
//! | easy       | 6      | 4    |
//! | medium     | 8      | 4    |
//! | hard       | 8      | 5    |
//! | expert     | 8      | 6    |

use super::GameError;
use std::fmt;
use std::str::FromStr;

/// Difficulty level chosen at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Number of colors in play
    #[must_use]
    pub const fn palette_size(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium | Self::Hard | Self::Expert => 8,
        }
    }

    /// Number of pegs in the code
    #[must_use]
    pub const fn peg_count(self) -> usize {
        match self {
            Self::Easy | Self::Medium => 4,
            Self::Hard => 5,
            Self::Expert => 6,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == value)
            .ok_or(GameError::InvalidSetting { value })
    }
}

/// Parse a yes/no answer
///
/// # Errors
/// Returns `GameError::InvalidSetting` for anything other than yes/y/no/n.
pub fn parse_yes_no(input: &str) -> Result<bool, GameError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(GameError::InvalidSetting {
            value: other.to_string(),
        }),
    }
}

/// Per-game configuration, fixed once the game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    difficulty: Difficulty,
    duplicates_allowed: bool,
    palette_size: usize,
    peg_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Difficulty::default(), false)
    }
}

impl Settings {
    /// # Examples
    /// ```
    /// use mastermind::core::{Difficulty, Settings};
    ///
    /// let settings = Settings::new(Difficulty::Hard, true);
    /// assert_eq!(settings.palette_size(), 8);
    /// assert_eq!(settings.peg_count(), 5);
    /// ```
    #[must_use]
    pub const fn new(difficulty: Difficulty, duplicates_allowed: bool) -> Self {
        Self {
            difficulty,
            duplicates_allowed,
            palette_size: difficulty.palette_size(),
            peg_count: difficulty.peg_count(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn duplicates_allowed(&self) -> bool {
        self.duplicates_allowed
    }

    #[inline]
    #[must_use]
    pub const fn palette_size(&self) -> usize {
        self.palette_size
    }

    #[inline]
    #[must_use]
    pub const fn peg_count(&self) -> usize {
        self.peg_count
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} colors, {} pegs, duplicates {})",
            self.difficulty,
            self.palette_size,
            self.peg_count,
            if self.duplicates_allowed { "on" } else { "off" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Difficulty::Easy, 6, 4)]
    #[case(Difficulty::Medium, 8, 4)]
    #[case(Difficulty::Hard, 8, 5)]
    #[case(Difficulty::Expert, 8, 6)]
    fn difficulty_table(#[case] difficulty: Difficulty, #[case] colors: usize, #[case] pegs: usize) {
        let settings = Settings::new(difficulty, false);
        assert_eq!(settings.palette_size(), colors);
        assert_eq!(settings.peg_count(), pegs);
        assert_eq!(settings.difficulty(), difficulty);
    }

    #[test]
    fn every_difficulty_fits_without_duplicates() {
        for difficulty in Difficulty::ALL {
            assert!(difficulty.palette_size() >= difficulty.peg_count());
        }
    }

    #[test]
    fn parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Expert ".parse::<Difficulty>(), Ok(Difficulty::Expert));
        assert!(matches!(
            "impossible".parse::<Difficulty>(),
            Err(GameError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn parse_yes_no_answers() {
        assert_eq!(parse_yes_no("yes"), Ok(true));
        assert_eq!(parse_yes_no("N"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }

    #[test]
    fn default_settings_are_easy_without_duplicates() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty(), Difficulty::Easy);
        assert!(!settings.duplicates_allowed());
    }

    #[test]
    fn display_summary() {
        let settings = Settings::new(Difficulty::Medium, true);
        assert_eq!(
            settings.to_string(),
            "medium (8 colors, 4 pegs, duplicates on)"
        );
    }
}
