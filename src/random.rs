//! Random color generation.
//!
//! The numeric generators draw from any [`Rng`] passed in. [`ColorRng`] owns
//! a source and adds the channel and hex string variants on top. Its default
//! source is the thread-local generator, so every thread gets its own state
//! and nothing needs locking.

use std::ops::RangeInclusive;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::hex::{number_to_hex6, number_to_hex8};
use crate::pack::{pack_rgb, pack_rgba, unpack_rgb, unpack_rgba, RGB_MAX};
use crate::{Rgb, Rgba};

/// Range every channel of a bright color is drawn from.
pub const BRIGHT: RangeInclusive<u8> = 128..=255;

/// Range every channel of a pastel color is drawn from.
pub const PASTEL: RangeInclusive<u8> = 180..=230;

/// Draw a uniform integer from `min..=max`, computed as
/// `floor(uniform01 * (max - min + 1) + min)`. The bounds may be given in
/// either order.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let span = f64::from(max - min) + 1.0;
    (rng.random::<f64>() * span + f64::from(min)).floor() as u32
}

fn random_channel<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<u8>) -> u8 {
    random_in_range(rng, u32::from(*range.start()), u32::from(*range.end())) as u8
}

/// A packed RGB number, uniform over the whole 24-bit space.
pub fn random_rgb_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_in_range(rng, 0, RGB_MAX)
}

/// A packed RGBA number, uniform over the whole 32-bit space.
pub fn random_rgba_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_in_range(rng, 0, u32::MAX)
}

/// A packed RGB number with every channel drawn from [`BRIGHT`].
pub fn random_bright_rgb_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_rgb_in(rng, &BRIGHT)
}

/// A packed RGBA number with every channel, alpha included, drawn from
/// [`BRIGHT`].
pub fn random_bright_rgba_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_rgba_in(rng, &BRIGHT)
}

/// A packed RGB number with every channel drawn from [`PASTEL`].
pub fn random_pastel_rgb_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_rgb_in(rng, &PASTEL)
}

/// A packed RGBA number with every channel, alpha included, drawn from
/// [`PASTEL`].
pub fn random_pastel_rgba_number<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    random_rgba_in(rng, &PASTEL)
}

fn random_rgb_in<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<u8>) -> u32 {
    let r = random_channel(rng, range);
    let g = random_channel(rng, range);
    let b = random_channel(rng, range);
    pack_rgb(r, g, b)
}

fn random_rgba_in<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<u8>) -> u32 {
    let r = random_channel(rng, range);
    let g = random_channel(rng, range);
    let b = random_channel(rng, range);
    let a = random_channel(rng, range);
    pack_rgba(r, g, b, a)
}

/// A random source bundled with every color generator.
///
/// ```rust
/// use colorpack::{is_hex, ColorRng};
///
/// let mut colors = ColorRng::new();
/// assert!(is_hex(colors.random_pastel_rgb_hex()));
///
/// let mut a = ColorRng::seeded(7);
/// let mut b = ColorRng::seeded(7);
/// assert_eq!(a.random_rgba(), b.random_rgba());
/// ```
#[derive(Clone, Debug)]
pub struct ColorRng<R = ThreadRng> {
    rng: R,
}

impl ColorRng<ThreadRng> {
    /// Generate colors from the thread-local random source.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for ColorRng<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorRng<StdRng> {
    /// A reproducible source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        log::debug!("seeding color generator with {seed}");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

macro_rules! derived {
    ($($number:ident => $object:ident: $type:ty = $unpack:ident, $hex:ident = $encode:ident;)*) => {
        $(
            #[doc = concat!("Like [`ColorRng::", stringify!($number), "`], split into channels.")]
            pub fn $object(&mut self) -> $type {
                $unpack(self.$number())
            }

            #[doc = concat!("Like [`ColorRng::", stringify!($number), "`], encoded as a hex string.")]
            pub fn $hex(&mut self) -> String {
                $encode(self.$number())
            }
        )*
    };
}

impl<R: Rng> ColorRng<R> {
    /// Generate colors from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Give back the underlying random source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// See [`random_in_range`].
    pub fn random_in_range(&mut self, min: u32, max: u32) -> u32 {
        random_in_range(&mut self.rng, min, max)
    }

    /// See [`random_rgb_number`].
    pub fn random_rgb_number(&mut self) -> u32 {
        random_rgb_number(&mut self.rng)
    }

    /// See [`random_rgba_number`].
    pub fn random_rgba_number(&mut self) -> u32 {
        random_rgba_number(&mut self.rng)
    }

    /// See [`random_bright_rgb_number`].
    pub fn random_bright_rgb_number(&mut self) -> u32 {
        random_bright_rgb_number(&mut self.rng)
    }

    /// See [`random_bright_rgba_number`].
    pub fn random_bright_rgba_number(&mut self) -> u32 {
        random_bright_rgba_number(&mut self.rng)
    }

    /// See [`random_pastel_rgb_number`].
    pub fn random_pastel_rgb_number(&mut self) -> u32 {
        random_pastel_rgb_number(&mut self.rng)
    }

    /// See [`random_pastel_rgba_number`].
    pub fn random_pastel_rgba_number(&mut self) -> u32 {
        random_pastel_rgba_number(&mut self.rng)
    }

    derived! {
        random_rgb_number => random_rgb: Rgb = unpack_rgb, random_rgb_hex = number_to_hex6;
        random_rgba_number => random_rgba: Rgba = unpack_rgba, random_rgba_hex = number_to_hex8;
        random_bright_rgb_number => random_bright_rgb: Rgb = unpack_rgb, random_bright_rgb_hex = number_to_hex6;
        random_bright_rgba_number => random_bright_rgba: Rgba = unpack_rgba, random_bright_rgba_hex = number_to_hex8;
        random_pastel_rgb_number => random_pastel_rgb: Rgb = unpack_rgb, random_pastel_rgb_hex = number_to_hex6;
        random_pastel_rgba_number => random_pastel_rgba: Rgba = unpack_rgba, random_pastel_rgba_hex = number_to_hex8;
    }
}
