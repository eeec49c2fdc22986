//! Duplicate color survey
//!
//! Generates many codes and reports how often a color repeats. Useful for
//! checking that the duplicates setting behaves as expected.

use crate::core::{GameError, Palette, Settings};
use crate::game::generate;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Outcome of a survey run
#[derive(Debug, Clone)]
pub struct DuplicateSurvey {
    pub settings: Settings,
    pub games: usize,
    pub with_duplicates: usize,
    pub duration: Duration,
}

impl DuplicateSurvey {
    /// Share of codes containing a repeated color, in percent
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.with_duplicates as f64 / self.games as f64 * 100.0
        }
    }
}

/// Generate `games` codes in parallel and count the ones with repeats
///
/// With a seed, game `i` uses `seed + i` so the survey is reproducible
/// regardless of thread scheduling.
///
/// # Errors
///
/// Returns an error if the settings cannot produce a code.
pub fn run_duplicate_survey(
    palette: &Palette,
    settings: &Settings,
    games: usize,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<DuplicateSurvey, GameError> {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let flags: Result<Vec<bool>, GameError> = (0..games)
        .into_par_iter()
        .map(|i| -> Result<bool, GameError> {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_os_rng(),
            };
            let code = generate(
                palette,
                settings.palette_size(),
                settings.peg_count(),
                settings.duplicates_allowed(),
                &mut rng,
            )?;
            pb.inc(1);
            Ok(code.has_duplicates())
        })
        .collect();

    pb.finish_and_clear();

    let with_duplicates = flags?.into_iter().filter(|&repeated| repeated).count();
    debug!("Survey: {with_duplicates}/{games} codes repeated a color");

    Ok(DuplicateSurvey {
        settings: *settings,
        games,
        with_duplicates,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn no_duplicates_when_disallowed() {
        let settings = Settings::new(Difficulty::Expert, false);
        let survey =
            run_duplicate_survey(&Palette::standard(), &settings, 500, Some(1), false).unwrap();

        assert_eq!(survey.games, 500);
        assert_eq!(survey.with_duplicates, 0);
        assert!(survey.percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn duplicates_common_when_allowed() {
        // P(no repeat) for 4 pegs from 6 colors is 360/1296, about 28%
        let settings = Settings::new(Difficulty::Easy, true);
        let survey =
            run_duplicate_survey(&Palette::standard(), &settings, 1000, Some(5), false).unwrap();

        assert!(survey.percentage() > 50.0);
        assert!(survey.percentage() < 90.0);
    }

    #[test]
    fn seeded_survey_is_reproducible() {
        let settings = Settings::new(Difficulty::Medium, true);
        let palette = Palette::standard();

        let first = run_duplicate_survey(&palette, &settings, 200, Some(9), false).unwrap();
        let second = run_duplicate_survey(&palette, &settings, 200, Some(9), false).unwrap();
        assert_eq!(first.with_duplicates, second.with_duplicates);
    }

    #[test]
    fn empty_survey() {
        let survey =
            run_duplicate_survey(&Palette::standard(), &Settings::default(), 0, None, false)
                .unwrap();
        assert_eq!(survey.games, 0);
        assert!(survey.percentage().abs() < f64::EPSILON);
    }
}
