//! Command implementations

pub mod duplicates;
pub mod score;
pub mod simple;

pub use duplicates::{DuplicateSurvey, run_duplicate_survey};
pub use score::{ScoreResult, generate_one, score_guess};
pub use simple::{GameRecord, SimpleConfig, run_simple, run_simple_with};
