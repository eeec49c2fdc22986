//! Core domain types for Mastermind
//!
//! Colors, palettes, codes, settings and guess evaluation. Everything here is
//! pure data and pure functions; randomness and I/O live elsewhere.

mod code;
mod color;
mod error;
mod feedback;
mod palette;
mod settings;

pub use code::{Code, Guess};
pub use color::Color;
pub use error::GameError;
pub use feedback::{Feedback, evaluate_guess};
pub use palette::Palette;
pub use settings::{Difficulty, Settings, parse_yes_no};
