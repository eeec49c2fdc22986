//! A single game of Mastermind
//!
//! The session owns its settings, the secret code and the guess history.
//! Nothing is shared between sessions.

use super::CodeGenerator;
use crate::core::{Code, Feedback, GameError, Guess, Settings};
use log::info;
use rand::Rng;

/// One evaluated, non-winning guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Quit,
}

/// What happened on a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    pub won: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    settings: Settings,
    code: Code,
    history: Vec<HistoryEntry>,
    status: Status,
    attempts: usize,
}

impl GameSession {
    /// Start a game with an already generated code
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the code does not have the peg
    /// count the settings ask for.
    pub fn new(settings: Settings, code: Code) -> Result<Self, GameError> {
        if code.len() != settings.peg_count() {
            return Err(GameError::LengthMismatch {
                expected: settings.peg_count(),
                actual: code.len(),
            });
        }

        info!("New game: {settings}");

        Ok(Self {
            settings,
            code,
            history: Vec::new(),
            status: Status::InProgress,
            attempts: 0,
        })
    }

    /// Start a game with a freshly generated code
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the settings do not fit the
    /// generator's palette.
    pub fn start<R: Rng>(
        settings: Settings,
        generator: &mut CodeGenerator<R>,
    ) -> Result<Self, GameError> {
        let code = generator.generate_code(&settings)?;
        Self::new(settings, code)
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The secret code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Guesses evaluated so far, including a winning one
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Non-winning guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn is_win(&self, guess: &Guess) -> bool {
        *guess == self.code
    }

    /// Append a scored guess to the history
    pub fn record_guess(&mut self, guess: Guess, feedback: Feedback) {
        self.history.push(HistoryEntry { guess, feedback });
    }

    /// Score a guess and advance the game
    ///
    /// A winning guess ends the session and is not added to the history.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the session has ended and
    /// `GameError::LengthMismatch` for a guess of the wrong length.
    pub fn submit(&mut self, guess: Guess) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = Feedback::calculate(&self.code, &guess)?;
        self.attempts += 1;

        let won = self.is_win(&guess);
        if won {
            self.status = Status::Won;
            info!("Code broken in {} attempts", self.attempts);
        } else {
            self.record_guess(guess, feedback);
        }

        Ok(Turn { feedback, won })
    }

    /// Give up and reveal the code
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the session already ended.
    pub fn quit(&mut self) -> Result<&Code, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.status = Status::Quit;
        info!("Player quit after {} attempts", self.attempts);
        Ok(&self.code)
    }
}
