//! Guess evaluation
//!
//! Feedback is a pair of counts:
//! - exact: right color in the right position (red peg)
//! - color only: right color in the wrong position (white peg)
//!
//! Positions are never revealed, only the two totals.

use super::{Code, GameError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Result of scoring one guess against the code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Score `guess` against `code`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every other position puts its code
    ///    color into a remainder pool and its guess color into a remainder list
    /// 2. Second pass: each remaining guess color takes one instance from the
    ///    pool if any is left, scoring a color-only match
    ///
    /// Taking from the pool is what stops a single code peg from being credited
    /// to two guess pegs.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color::*, Feedback};
    ///
    /// let code = Code::new(vec![Blue, Green, Pink, Orange]);
    /// let guess = Code::new(vec![Pink, Green, Orange, Purple]);
    ///
    /// let feedback = Feedback::calculate(&code, &guess).unwrap();
    /// assert_eq!(feedback.as_pair(), (1, 2));
    /// ```
    pub fn calculate(code: &Code, guess: &Code) -> Result<Self, GameError> {
        if code.len() != guess.len() {
            return Err(GameError::LengthMismatch {
                expected: code.len(),
                actual: guess.len(),
            });
        }

        let mut exact = 0;
        let mut code_remaining = FxHashMap::default();
        let mut guess_remaining = Vec::with_capacity(guess.len());

        // First pass: exact matches stay out of both pools
        for (&c, &g) in code.colors().iter().zip(guess.colors()) {
            if c == g {
                exact += 1;
            } else {
                *code_remaining.entry(c).or_insert(0usize) += 1;
                guess_remaining.push(g);
            }
        }

        // Second pass: consume one code instance per color-only match
        let mut color_only = 0;
        for g in guess_remaining {
            if let Some(count) = code_remaining.get_mut(&g)
                && *count > 0
            {
                *count -= 1;
                color_only += 1;
            }
        }

        Ok(Self { exact, color_only })
    }

    /// Pegs with the right color in the right place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs with the right color in the wrong place
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// `(exact, color_only)`
    #[inline]
    #[must_use]
    pub const fn as_pair(self) -> (usize, usize) {
        (self.exact, self.color_only)
    }

    /// True when every one of `pegs` positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, pegs: usize) -> bool {
        self.exact == pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Red: {} White: {}", self.exact, self.color_only)
    }
}

/// Score a guess against the secret code
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the sequences differ in length.
pub fn evaluate_guess(code: &Code, guess: &Code) -> Result<Feedback, GameError> {
    Feedback::calculate(code, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{self, Black, Blue, Green, Orange, Pink, Purple, White, Yellow};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn code(colors: &[Color]) -> Code {
        Code::new(colors.to_vec())
    }

    #[rstest]
    #[case(&[Blue, Green, Pink, Orange], &[Pink, Green, Orange, Purple], (1, 2))]
    #[case(&[Blue, Green, Pink, Orange], &[Green, Green, Green, Purple], (1, 0))]
    #[case(&[Blue, Blue, Pink, Orange], &[Yellow, Pink, Green, Purple], (0, 1))]
    #[case(&[Purple, Yellow, Pink, Purple], &[Yellow, Green, Pink, Purple], (2, 1))]
    #[case(&[Blue, Blue, Green, Green], &[Green, Green, Blue, Blue], (0, 4))]
    #[case(&[Blue, Blue, Blue, Pink], &[Pink, Blue, Pink, Pink], (2, 0))]
    #[case(&[Pink, Orange, Yellow, Green, Blue, Purple], &[Purple, Pink, Orange, Yellow, Green, Blue], (0, 6))]
    fn known_fixtures(
        #[case] secret: &[Color],
        #[case] guess: &[Color],
        #[case] expected: (usize, usize),
    ) {
        let feedback = Feedback::calculate(&code(secret), &code(guess)).unwrap();
        assert_eq!(feedback.as_pair(), expected);
    }

    #[test]
    fn identical_guess_is_perfect() {
        let secret = code(&[Purple, Yellow, Pink, Purple, White]);
        let feedback = Feedback::calculate(&secret, &secret).unwrap();

        assert_eq!(feedback.as_pair(), (5, 0));
        assert!(feedback.is_perfect(5));
    }

    #[test]
    fn disjoint_colors_score_nothing() {
        let secret = code(&[Pink, Pink, Orange, Yellow]);
        let guess = code(&[Black, White, Blue, Blue]);
        assert_eq!(Feedback::calculate(&secret, &guess).unwrap(), Feedback::default());
    }

    #[test]
    fn repeated_guess_color_limited_by_code_instances() {
        // Only one pink in the code, so only one of three pink guesses scores
        let secret = code(&[Pink, Blue, Green, Orange]);
        let guess = code(&[Orange, Pink, Pink, Pink]);
        assert_eq!(Feedback::calculate(&secret, &guess).unwrap().as_pair(), (0, 2));
    }

    #[test]
    fn exact_match_not_reused_as_color_only() {
        // The green in position 1 is exact; the other greens have nothing left to match
        let secret = code(&[Blue, Green, Pink, Orange]);
        let guess = code(&[Green, Green, Green, Green]);
        assert_eq!(Feedback::calculate(&secret, &guess).unwrap().as_pair(), (1, 0));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let secret = code(&[Blue, Green, Pink, Orange]);
        let guess = code(&[Blue, Green, Pink]);

        assert_eq!(
            Feedback::calculate(&secret, &guess),
            Err(GameError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn evaluate_guess_matches_calculate() {
        let secret = code(&[Purple, Yellow, Pink, Purple]);
        let guess = code(&[Yellow, Green, Pink, Purple]);
        assert_eq!(
            evaluate_guess(&secret, &guess),
            Feedback::calculate(&secret, &guess)
        );
    }

    #[test]
    fn counts_never_exceed_peg_count() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let pegs = rng.random_range(1..=6);
            let secret: Code = (0..pegs)
                .map(|_| Color::ALL[rng.random_range(0..Color::ALL.len())])
                .collect();
            let guess: Code = (0..pegs)
                .map(|_| Color::ALL[rng.random_range(0..Color::ALL.len())])
                .collect();

            let feedback = Feedback::calculate(&secret, &guess).unwrap();
            assert!(feedback.exact() + feedback.color_only() <= pegs);
            assert_eq!(feedback.is_perfect(pegs), secret == guess);
        }
    }

    #[test]
    fn display_names_pegs() {
        assert_eq!(Feedback::new(2, 1).to_string(), "Red: 2 White: 1");
    }
}
