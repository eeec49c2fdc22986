//! Ordered color palette
//!
//! A palette is immutable configuration handed to the generator and the
//! input decoder. Difficulty only changes how long a prefix of it is active.

use super::{Color, GameError};

/// Ordered list of distinct colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// The eight colors in their canonical order
    #[must_use]
    pub fn standard() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
        }
    }

    /// Build a custom palette
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if `colors` is empty or repeats a color.
    pub fn new(colors: Vec<Color>) -> Result<Self, GameError> {
        if colors.is_empty() {
            return Err(GameError::Configuration("palette is empty".to_string()));
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(GameError::Configuration(format!(
                    "palette lists {color} more than once"
                )));
            }
        }

        Ok(Self { colors })
    }

    /// Total number of colors
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

    /// All colors in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The first `size` colors, the ones in play for a game
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if `size` is zero or larger than the palette.
    pub fn active(&self, size: usize) -> Result<&[Color], GameError> {
        if size == 0 || size > self.colors.len() {
            return Err(GameError::Configuration(format!(
                "active palette size must be between 1 and {}, got {size}",
                self.colors.len()
            )));
        }
        Ok(&self.colors[..size])
    }

    /// Resolve a player token to a color within the active prefix
    ///
    /// # Errors
    /// Returns `GameError::InvalidSymbol` when the token names no color or a
    /// color outside the first `size` entries.
    pub fn decode(&self, token: &str, size: usize) -> Result<Color, GameError> {
        let active = self.active(size)?;
        Color::from_token(token)
            .filter(|color| active.contains(color))
            .ok_or_else(|| GameError::InvalidSymbol {
                token: token.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_has_eight_colors() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.colors()[0], Color::Pink);
        assert_eq!(palette.colors()[7], Color::Black);
    }

    #[test]
    fn active_prefix() {
        let palette = Palette::standard();
        let active = palette.active(6).unwrap();
        assert_eq!(active.len(), 6);
        assert!(!active.contains(&Color::White));
        assert!(!active.contains(&Color::Black));
    }

    #[test]
    fn active_rejects_bad_sizes() {
        let palette = Palette::standard();
        assert!(palette.active(0).is_err());
        assert!(palette.active(9).is_err());
    }

    #[test]
    fn custom_palette_rejects_repeats() {
        assert!(Palette::new(vec![Color::Blue, Color::Pink, Color::Blue]).is_err());
        assert!(Palette::new(Vec::new()).is_err());
        assert!(Palette::new(vec![Color::Blue, Color::Pink]).is_ok());
    }

    #[test]
    fn decode_respects_active_range() {
        let palette = Palette::standard();
        assert_eq!(palette.decode("pu", 6), Ok(Color::Purple));
        assert_eq!(palette.decode("black", 8), Ok(Color::Black));
        assert!(matches!(
            palette.decode("black", 6),
            Err(GameError::InvalidSymbol { .. })
        ));
    }
}
