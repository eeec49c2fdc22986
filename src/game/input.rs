//! Player input decoding
//!
//! A line typed by the player is either a command or a guess. Guesses are
//! decoded and validated here so the evaluator only ever sees codes made of
//! active colors.

use crate::core::{Code, GameError, Guess, Palette, Settings};
use log::debug;

/// A decoded line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Guess(Guess),
    History,
    Help,
    Quit,
}

impl PlayerInput {
    /// Decode one line of input
    ///
    /// # Errors
    /// Returns the guess parsing error when the line is not a command and not
    /// a valid guess.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Palette, Settings};
    /// use mastermind::game::PlayerInput;
    ///
    /// let settings = Settings::default();
    /// let palette = Palette::standard();
    ///
    /// assert_eq!(PlayerInput::parse("QUIT", &palette, &settings), Ok(PlayerInput::Quit));
    /// assert!(matches!(
    ///     PlayerInput::parse("pi or ye gr", &palette, &settings),
    ///     Ok(PlayerInput::Guess(_))
    /// ));
    /// ```
    pub fn parse(input: &str, palette: &Palette, settings: &Settings) -> Result<Self, GameError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "history" | "h" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            _ => Code::parse(input, palette, settings)
                .map(Self::Guess)
                .inspect_err(|e| debug!("Rejected guess '{}': {e}", input.trim())),
        }
    }
}
