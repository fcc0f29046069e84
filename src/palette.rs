//! Procedural palettes, built by walking around the hue circle at a fixed
//! saturation and value.

use std::iter::FusedIterator;

use rand::Rng;

use crate::{convert::hsv_to_rgb, math::wrap, pack::pack_rgb, Component, Error, Result};

/// The fractional part of the golden ratio. Advancing the hue by this much of
/// a turn (about 222.49 degrees) each step never lands on a previous hue and
/// keeps consecutive hues far apart.
#[allow(clippy::excessive_precision)]
pub const GOLDEN_RATIO_CONJUGATE: Component = 0.618_033_988_749_894_8;

/// The fixed saturation and value a palette is generated at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvPalette {
    /// Saturation in percent.
    pub saturation: Component,
    /// Value in percent.
    pub value: Component,
}

impl HsvPalette {
    /// Used by [`generate_even_hue_palette`].
    pub const EVEN_HUE: Self = Self::new(80.0, 60.0);

    /// Used by [`generate_golden_ratio_palette`].
    pub const GOLDEN_RATIO: Self = Self::new(70.0, 65.0);

    /// Generate palettes at the given saturation and value.
    pub const fn new(saturation: Component, value: Component) -> Self {
        Self { saturation, value }
    }

    /// The packed RGB color at `hue` degrees.
    pub fn color(&self, hue: Component) -> u32 {
        let [r, g, b] = hsv_to_rgb([hue, self.saturation, self.value]);
        pack_rgb(r, g, b)
    }

    /// `count` colors with hues spaced evenly around the circle, starting at
    /// 0 degrees.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] when `count` is 0.
    pub fn even_hue(&self, count: usize) -> Result<Vec<u32>> {
        if count == 0 {
            return Err(Error::EmptyPalette);
        }

        let step = 360.0 / count as Component;
        log::trace!("even hue palette of {count} colors, {step} degrees apart");

        Ok((0..count)
            .map(|i| self.color(i as Component * step))
            .collect())
    }

    /// `count` colors whose hues follow [`GoldenRatioHues`] from a random
    /// starting hue drawn from `rng`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] when `count` is 0.
    pub fn golden_ratio<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<u32>> {
        if count == 0 {
            return Err(Error::EmptyPalette);
        }

        let hues = GoldenRatioHues::random(rng);
        log::trace!(
            "golden ratio palette of {count} colors starting at {} degrees",
            hues.hue()
        );

        Ok(hues.take(count).map(|hue| self.color(hue)).collect())
    }
}

/// `count` packed RGB colors with evenly spaced hues at 80% saturation and
/// 60% value.
///
/// ```rust
/// let palette = colorpack::generate_even_hue_palette(3).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert!(colorpack::generate_even_hue_palette(0).is_err());
/// ```
///
/// # Errors
///
/// [`Error::EmptyPalette`] when `count` is 0.
pub fn generate_even_hue_palette(count: usize) -> Result<Vec<u32>> {
    HsvPalette::EVEN_HUE.even_hue(count)
}

/// `count` packed RGB colors with golden ratio spaced hues at 70% saturation
/// and 65% value. Every call starts from a fresh random hue, drawn from the
/// thread-local generator.
///
/// # Errors
///
/// [`Error::EmptyPalette`] when `count` is 0.
pub fn generate_golden_ratio_palette(count: usize) -> Result<Vec<u32>> {
    HsvPalette::GOLDEN_RATIO.golden_ratio(&mut rand::rng(), count)
}

/// An endless sequence of hues in degrees, each one
/// [`GOLDEN_RATIO_CONJUGATE`] of a turn past the previous.
///
/// ```rust
/// use colorpack::GoldenRatioHues;
///
/// let hues: Vec<_> = GoldenRatioHues::new(0.0).take(3).collect();
/// assert_eq!(hues[0], 0.0);
/// assert!((hues[1] - 222.49).abs() < 0.01);
/// ```
#[derive(Clone, Debug)]
pub struct GoldenRatioHues {
    /// The next hue, as a fraction of a turn in `[0, 1)`.
    turn: Component,
}

impl GoldenRatioHues {
    /// Start at `hue` degrees.
    pub fn new(hue: Component) -> Self {
        Self {
            turn: wrap(hue, 360.0) / 360.0,
        }
    }

    /// Start at a hue drawn uniformly from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            turn: rng.random::<Component>(),
        }
    }

    /// The hue the next call to `next` returns, in degrees.
    pub fn hue(&self) -> Component {
        self.turn * 360.0
    }
}

impl Iterator for GoldenRatioHues {
    type Item = Component;

    fn next(&mut self) -> Option<Component> {
        let hue = self.hue();
        self.turn = wrap(self.turn + GOLDEN_RATIO_CONJUGATE, 1.0);
        Some(hue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for GoldenRatioHues {}
