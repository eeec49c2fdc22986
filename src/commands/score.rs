//! Score and generate commands
//!
//! One-shot commands that evaluate a given guess or print a generated code.

use crate::core::{Code, Feedback, GameError, Palette, Settings};
use crate::game::CodeGenerator;

/// Result of scoring a guess
pub struct ScoreResult {
    pub code: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse a code and a guess and evaluate one against the other
///
/// Both sequences go through the same validation as an in-game guess.
///
/// # Errors
///
/// Returns an error if either sequence has the wrong number of colors or uses
/// a color outside the active palette.
pub fn score_guess(
    code: &str,
    guess: &str,
    palette: &Palette,
    settings: &Settings,
) -> Result<ScoreResult, GameError> {
    let code = Code::parse(code, palette, settings)?;
    let guess = Code::parse(guess, palette, settings)?;
    let feedback = Feedback::calculate(&code, &guess)?;

    Ok(ScoreResult {
        code,
        guess,
        feedback,
    })
}

/// Generate a single code
///
/// # Errors
///
/// Returns an error if the settings do not fit the palette.
pub fn generate_one(
    palette: &Palette,
    settings: &Settings,
    seed: Option<u64>,
) -> Result<Code, GameError> {
    CodeGenerator::new(palette.clone(), seed).generate_code(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn score_known_fixture() {
        let settings = Settings::new(Difficulty::Easy, true);
        let result = score_guess(
            "purple yellow pink purple",
            "ye gr pi pu",
            &Palette::standard(),
            &settings,
        )
        .unwrap();

        assert_eq!(result.feedback.as_pair(), (2, 1));
        assert_eq!(result.guess.len(), 4);
    }

    #[test]
    fn score_rejects_bad_guess() {
        let settings = Settings::new(Difficulty::Easy, true);
        let result = score_guess("bl bl bl bl", "bl bl bl", &Palette::standard(), &settings);
        assert!(matches!(result, Err(GameError::LengthMismatch { .. })));
    }

    #[test]
    fn score_rejects_inactive_color() {
        let settings = Settings::new(Difficulty::Easy, true);
        let result = score_guess("bl bl bl wh", "bl bl bl bl", &Palette::standard(), &settings);
        assert!(matches!(result, Err(GameError::InvalidSymbol { .. })));
    }

    #[test]
    fn generate_one_is_reproducible() {
        let settings = Settings::new(Difficulty::Hard, false);
        let palette = Palette::standard();

        let first = generate_one(&palette, &settings, Some(77)).unwrap();
        let second = generate_one(&palette, &settings, Some(77)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
