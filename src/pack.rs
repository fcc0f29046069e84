//! Packing 8-bit channels into a single integer and back.
//!
//! The most significant byte always holds red, followed by green, blue and,
//! for 32-bit values, alpha. Channels are taken as `u8`, so a value outside
//! `0..=255` can not reach the packing functions. Callers holding wider
//! integers pick a policy with [`try_channel`] (reject) or [`wrap_channel`]
//! (keep the low 8 bits).

use crate::{Error, Result, Rgb, Rgba};

/// The largest packed RGB value.
pub const RGB_MAX: u32 = 0x00FF_FFFF;

/// Pack three channels into a 24-bit number, `r * 65536 + g * 256 + b`.
///
/// ```rust
/// assert_eq!(colorpack::pack_rgb(200, 100, 56), 0xC86438);
/// ```
#[must_use]
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack four channels into a 32-bit number,
/// `r * 16777216 + g * 65536 + b * 256 + a`.
///
/// The result is unsigned, a red channel of `128` or more never turns the
/// value negative.
#[must_use]
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Split a 24-bit number into its channels. Bits above the lowest 24 are
/// ignored.
#[must_use]
#[inline]
pub const fn unpack_rgb(num: u32) -> Rgb {
    Rgb::new(
        ((num >> 16) & 0xFF) as u8,
        ((num >> 8) & 0xFF) as u8,
        (num & 0xFF) as u8,
    )
}

/// Split a 32-bit number into its channels.
#[must_use]
#[inline]
pub const fn unpack_rgba(num: u32) -> Rgba {
    Rgba::new(
        ((num & 0xFF00_0000) >> 24) as u8,
        ((num & 0x00FF_0000) >> 16) as u8,
        ((num & 0x0000_FF00) >> 8) as u8,
        (num & 0x0000_00FF) as u8,
    )
}

/// Convert an integer to a channel, rejecting anything outside `0..=255`.
pub fn try_channel(value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange(value))
}

/// Convert an integer to a channel by keeping its lowest 8 bits, so `256`
/// becomes `0` and `-1` becomes `255`.
#[must_use]
#[inline]
pub const fn wrap_channel(value: i64) -> u8 {
    (value & 0xFF) as u8
}

impl Rgb {
    /// Pack this color into a 24-bit number.
    #[must_use]
    pub const fn to_number(self) -> u32 {
        pack_rgb(self.r, self.g, self.b)
    }

    /// Unpack a 24-bit number. Bits above the lowest 24 are ignored.
    #[must_use]
    pub const fn from_number(num: u32) -> Self {
        unpack_rgb(num)
    }
}

impl Rgba {
    /// Pack this color into a 32-bit number.
    #[must_use]
    pub const fn to_number(self) -> u32 {
        pack_rgba(self.r, self.g, self.b, self.a)
    }

    /// Unpack a 32-bit number.
    #[must_use]
    pub const fn from_number(num: u32) -> Self {
        unpack_rgba(num)
    }
}
