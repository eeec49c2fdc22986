//! Display functions for game and command results

use super::formatters::{feedback_pegs, format_code};
use crate::commands::{DuplicateSurvey, ScoreResult};
use crate::core::{Code, Settings};
use crate::game::HistoryEntry;
use colored::Colorize;

/// Print the feedback for one guess
pub fn print_feedback(entry: &HistoryEntry, pegs: usize) {
    println!(
        "  {}  {}",
        feedback_pegs(entry.feedback, pegs).bright_white().bold(),
        entry.feedback.to_string().bright_black()
    );
}

/// Print all previous guesses
pub fn print_history(history: &[HistoryEntry], pegs: usize) {
    if history.is_empty() {
        println!("No guesses yet.");
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    for (i, entry) in history.iter().enumerate() {
        println!(
            "{:>3}. {}  {}  {}",
            (i + 1).to_string().bright_black(),
            format_code(&entry.guess),
            feedback_pegs(entry.feedback, pegs),
            entry.feedback
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the win banner
pub fn print_win(code: &Code, attempts: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "   C O D E   B R O K E N !   ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n  The code was: {}", format_code(code));
    println!(
        "  Solved in {} {}\n",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" }
    );
}

/// Print the code after the player gives up
pub fn print_quit(code: &Code) {
    println!("\nThe code was: {}\n", format_code(code));
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Code:   {}", format_code(&result.code));
    println!("Guess:  {}", format_code(&result.guess));
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n  {}  {}",
        feedback_pegs(result.feedback, result.code.len())
            .bright_white()
            .bold(),
        result.feedback
    );
    if result.feedback.is_perfect(result.code.len()) {
        println!("  {}", "Exact match!".green().bold());
    }
}

/// Print a generated code
pub fn print_generated(code: &Code, settings: &Settings) {
    println!("Settings: {settings}");
    println!("Code:     {}", format_code(code));
}

/// Print the result of the duplicate survey
pub fn print_survey_result(survey: &DuplicateSurvey) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DUPLICATE COLOR SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Settings:          {}", survey.settings);
    println!("   Games generated:   {}", survey.games);
    println!("   With duplicates:   {}", survey.with_duplicates);
    println!(
        "   Share:             {}",
        format!("{:.1}%", survey.percentage()).bright_yellow().bold()
    );
    println!("   Time taken:        {:.2}s", survey.duration.as_secs_f64());
}
