//! Error type shared by the game core and the input layer

use thiserror::Error;

/// Everything that can go wrong while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Settings that cannot produce a valid code
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Guess and code differ in length
    #[error("guess must contain {expected} colors, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A token that is not one of the active colors
    #[error("'{token}' is not an available color")]
    InvalidSymbol { token: String },

    /// Unknown difficulty or yes/no answer
    #[error("unrecognized setting '{value}'")]
    InvalidSetting { value: String },

    /// The session already ended in a win or a quit
    #[error("the game is already over")]
    GameOver,
}

impl GameError {
    /// Build the error for a palette too small to fill a duplicate-free code
    #[must_use]
    pub fn not_enough_colors(palette_size: usize, peg_count: usize) -> Self {
        Self::Configuration(format!(
            "{palette_size} colors cannot fill {peg_count} pegs without duplicates"
        ))
    }
}
