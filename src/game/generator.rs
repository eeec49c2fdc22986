//! Secret code generation
//!
//! Codes are drawn from the active prefix of a palette, either with
//! replacement (duplicates allowed) or as a uniformly random ordered sample
//! without replacement. The random source is injected so games can be
//! replayed from a seed.

use crate::core::{Code, GameError, Palette, Settings};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Draw a code of `peg_count` colors from the first `palette_size` palette entries
///
/// All arguments are validated before any randomness is consumed.
///
/// # Errors
/// Returns `GameError::Configuration` if `peg_count` is zero, if `palette_size`
/// is zero or larger than the palette, or if duplicates are disallowed and
/// `palette_size < peg_count`.
///
/// # Examples
/// ```
/// use mastermind::core::Palette;
/// use mastermind::game::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let code = generate(&Palette::standard(), 6, 4, false, &mut rng).unwrap();
/// assert_eq!(code.len(), 4);
/// assert!(!code.has_duplicates());
/// ```
pub fn generate<R: Rng + ?Sized>(
    palette: &Palette,
    palette_size: usize,
    peg_count: usize,
    duplicates_allowed: bool,
    rng: &mut R,
) -> Result<Code, GameError> {
    if peg_count == 0 {
        return Err(GameError::Configuration(
            "a code needs at least one peg".to_string(),
        ));
    }

    let active = palette.active(palette_size)?;

    if !duplicates_allowed && active.len() < peg_count {
        return Err(GameError::not_enough_colors(active.len(), peg_count));
    }

    debug!(
        "Generating code: {peg_count} pegs from {} colors, duplicates {}",
        active.len(),
        if duplicates_allowed { "allowed" } else { "disallowed" }
    );

    let code = if duplicates_allowed {
        (0..peg_count)
            .map(|_| active[rng.random_range(0..active.len())])
            .collect()
    } else {
        // sample() returns the indices in random order
        index::sample(rng, active.len(), peg_count)
            .into_iter()
            .map(|i| active[i])
            .collect()
    };

    Ok(code)
}

/// A palette bundled with its random source
///
/// Each session can own its own generator, so concurrent games never share
/// state.
pub struct CodeGenerator<R = StdRng> {
    palette: Palette,
    rng: R,
}

impl CodeGenerator<StdRng> {
    /// Generator whose output is fully determined by `seed`
    #[must_use]
    pub fn seeded(palette: Palette, seed: u64) -> Self {
        Self::with_rng(palette, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_os_rng(palette: Palette) -> Self {
        Self::with_rng(palette, StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, otherwise from the operating system
    #[must_use]
    pub fn new(palette: Palette, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(palette, seed),
            None => Self::from_os_rng(palette),
        }
    }
}

impl<R: Rng> CodeGenerator<R> {
    #[must_use]
    pub const fn with_rng(palette: Palette, rng: R) -> Self {
        Self { palette, rng }
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw a code with explicit parameters
    ///
    /// # Errors
    /// See [`generate`].
    pub fn generate(
        &mut self,
        palette_size: usize,
        peg_count: usize,
        duplicates_allowed: bool,
    ) -> Result<Code, GameError> {
        generate(
            &self.palette,
            palette_size,
            peg_count,
            duplicates_allowed,
            &mut self.rng,
        )
    }

    /// Draw a code for a game with the given settings
    ///
    /// # Errors
    /// See [`generate`].
    pub fn generate_code(&mut self, settings: &Settings) -> Result<Code, GameError> {
        self.generate(
            settings.palette_size(),
            settings.peg_count(),
            settings.duplicates_allowed(),
        )
    }
}
