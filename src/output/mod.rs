//! Terminal output formatting
//!
//! Display utilities for the console game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_generated, print_history, print_quit, print_score_result,
    print_survey_result, print_win,
};
