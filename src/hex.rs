//! Hex string encoding and decoding.
//!
//! Digits are folded into a number one at a time. [`hex_to_number`]
//! multiplies into a `u64` and accepts up to [`SAFE_HEX_DIGITS`] digits.
//! [`hex_to_number_fast`] shifts into a `u32` and accepts up to
//! [`FAST_HEX_DIGITS`] digits. RGB decoding goes through the fast fold since
//! six digits fit; RGBA decoding needs eight and goes through the safe one.
//!
//! Every decoder accepts an optional leading `#` and fails with an [`Error`]
//! on malformed input. [`is_hex`] is the strict check: it requires the `#`.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use bitflags::bitflags;

use crate::pack::{pack_rgb, pack_rgba, unpack_rgb, unpack_rgba};
use crate::{Error, Result, Rgb, Rgba};

/// Most digits [`hex_to_number`] accepts: 16 digits fill a `u64`.
pub const SAFE_HEX_DIGITS: usize = 16;

/// Most digits [`hex_to_number_fast`] accepts. Seven digits are 28 bits,
/// which leaves the top nibble of the `u32` accumulator clear so the next
/// shift can not drop bits.
pub const FAST_HEX_DIGITS: usize = 7;

const NIBBLES: &[u8; 16] = b"0123456789abcdef";

/// Digit value of every byte. Bytes outside `0-9a-fA-F` (including every
/// byte of a multi-byte character) map above 15.
const DIGIT_VALUES: [u8; 256] = {
    let mut table = [0xFF; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

#[inline]
const fn digit_value(byte: u8) -> u8 {
    DIGIT_VALUES[byte as usize]
}

bitflags! {
    /// The layout of a hex color string.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HexShape : u8 {
        /// The string carries an alpha channel (`#rgba` or `#rrggbbaa`).
        const ALPHA = 1 << 0;
        /// One digit per channel (`#rgb` or `#rgba`).
        const SHORT = 1 << 1;
    }
}

impl HexShape {
    /// The layout for a number of digits (not counting `#`), if it is one of
    /// 3, 4, 6 or 8.
    #[must_use]
    pub const fn from_digits(digits: usize) -> Option<Self> {
        match digits {
            3 => Some(Self::SHORT),
            4 => Some(Self::SHORT.union(Self::ALPHA)),
            6 => Some(Self::empty()),
            8 => Some(Self::ALPHA),
            _ => None,
        }
    }

    /// Number of digits (not counting `#`) this layout has.
    #[must_use]
    pub const fn digits(self) -> usize {
        let per_channel = if self.contains(Self::SHORT) { 1 } else { 2 };
        let channels = if self.contains(Self::ALPHA) { 4 } else { 3 };
        per_channel * channels
    }
}

/// Strip an optional `#` and check that what is left is a run of at most
/// `limit` hex digits.
fn hex_digits(hex: &str, limit: usize) -> Result<&[u8]> {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    if body.is_empty() {
        return Err(Error::Empty);
    }

    if let Some(index) = body.bytes().position(|b| digit_value(b) > 15) {
        // Every byte before `index` is ASCII, so `index` is a char boundary.
        let found = body[index..].chars().next().unwrap_or_default();
        return Err(Error::InvalidDigit { index, found });
    }

    if body.len() > limit {
        return Err(Error::TooManyDigits {
            digits: body.len(),
            limit,
        });
    }

    Ok(body.as_bytes())
}

/// The error for input whose digits are fine but whose length is not one the
/// caller accepts. Bad digits take precedence over a bad length.
fn length_error(hex: &str, expected: &'static str) -> Error {
    match hex_digits(hex, usize::MAX) {
        Ok(body) => Error::InvalidLength {
            expected,
            found: body.len(),
        },
        Err(err) => err,
    }
}

fn digit_count(hex: &str) -> usize {
    hex.strip_prefix('#').unwrap_or(hex).len()
}

/// Decode hex digits into a number with `acc * 16 + digit`.
///
/// Takes up to [`SAFE_HEX_DIGITS`] digits after an optional `#`.
///
/// # Errors
///
/// - [`Error::Empty`] when there are no digits.
/// - [`Error::InvalidDigit`] for any character outside `0-9a-fA-F`.
/// - [`Error::TooManyDigits`] for more than [`SAFE_HEX_DIGITS`] digits.
///
/// ```rust
/// assert_eq!(colorpack::hex_to_number("#C86438B4"), Ok(0xC864_38B4));
/// ```
pub fn hex_to_number(hex: &str) -> Result<u64> {
    let digits = hex_digits(hex, SAFE_HEX_DIGITS)?;
    Ok(digits
        .iter()
        .fold(0, |acc, &b| acc * 16 + u64::from(digit_value(b))))
}

/// Decode hex digits into a number with `(acc << 4) | digit`.
///
/// Takes up to [`FAST_HEX_DIGITS`] digits after an optional `#`, enough for
/// an RGB color but not for RGBA. Use [`hex_to_number`] for longer input.
///
/// # Errors
///
/// - [`Error::Empty`] when there are no digits.
/// - [`Error::InvalidDigit`] for any character outside `0-9a-fA-F`.
/// - [`Error::TooManyDigits`] for more than [`FAST_HEX_DIGITS`] digits.
pub fn hex_to_number_fast(hex: &str) -> Result<u32> {
    let digits = hex_digits(hex, FAST_HEX_DIGITS)?;
    Ok(digits
        .iter()
        .fold(0, |acc, &b| (acc << 4) | u32::from(digit_value(b))))
}

/// Widen every nibble of a shorthand value into a full byte, so `0xabc`
/// becomes `0xaabbcc`.
const fn expand_shorthand(num: u32, digits: u32) -> u32 {
    let mut out = 0;
    let mut i = digits;
    while i > 0 {
        i -= 1;
        let nibble = (num >> (i * 4)) & 0xF;
        out = (out << 8) | nibble * 0x11;
    }
    out
}

/// Decode `#rgb` or `#rrggbb` (the `#` is optional) into channels.
///
/// # Errors
///
/// [`Error::Empty`] or [`Error::InvalidDigit`] for malformed digits, and
/// [`Error::InvalidLength`] for anything but 3 or 6 digits.
///
/// ```rust
/// use colorpack::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#c86438"), Ok(Rgb::new(200, 100, 56)));
/// assert_eq!(hex_to_rgb("#fa0"), Ok(Rgb::new(255, 170, 0)));
/// assert!(hex_to_rgb("#c8643").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let num = match digit_count(hex) {
        6 => hex_to_number_fast(hex)?,
        3 => expand_shorthand(hex_to_number_fast(hex)?, 3),
        _ => return Err(length_error(hex, "3 or 6")),
    };
    Ok(unpack_rgb(num))
}

/// Decode `#rgba` or `#rrggbbaa` (the `#` is optional) into channels.
///
/// # Errors
///
/// [`Error::Empty`] or [`Error::InvalidDigit`] for malformed digits, and
/// [`Error::InvalidLength`] for anything but 4 or 8 digits.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba> {
    // At most eight digits get here, which always fit in a u32.
    let num = match digit_count(hex) {
        8 => hex_to_number(hex)? as u32,
        4 => expand_shorthand(hex_to_number(hex)? as u32, 4),
        _ => return Err(length_error(hex, "4 or 8")),
    };
    Ok(unpack_rgba(num))
}

/// The `#` followed by two lowercase digits per byte.
fn hex_chars<const N: usize>(bytes: [u8; N]) -> impl Iterator<Item = char> {
    std::iter::once('#').chain(bytes.into_iter().flat_map(|byte| {
        [
            NIBBLES[usize::from(byte >> 4)] as char,
            NIBBLES[usize::from(byte & 0x0F)] as char,
        ]
    }))
}

fn encode<const N: usize>(bytes: [u8; N]) -> String {
    let mut out = String::with_capacity(1 + 2 * N);
    out.extend(hex_chars(bytes));
    out
}

/// Encode the lowest 24 bits of `num` as `#rrggbb`.
///
/// ```rust
/// assert_eq!(colorpack::number_to_hex6(0xC86438), "#c86438");
/// assert_eq!(colorpack::number_to_hex6(0xFF), "#0000ff");
/// ```
#[must_use]
pub fn number_to_hex6(num: u32) -> String {
    let [_, r, g, b] = num.to_be_bytes();
    encode([r, g, b])
}

/// Encode `num` as `#rrggbbaa`.
#[must_use]
pub fn number_to_hex8(num: u32) -> String {
    encode(num.to_be_bytes())
}

/// Encode three channels as `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    number_to_hex6(pack_rgb(r, g, b))
}

/// Encode four channels as `#rrggbbaa`.
#[must_use]
pub fn rgba_to_hex(r: u8, g: u8, b: u8, a: u8) -> String {
    number_to_hex8(pack_rgba(r, g, b, a))
}

/// Classify a strict hex color string: a `#` followed by 3, 4, 6 or 8 hex
/// digits. Returns [`None`] for anything else.
#[must_use]
pub fn hex_shape(value: &str) -> Option<HexShape> {
    let body = value.strip_prefix('#')?;
    let shape = HexShape::from_digits(body.len())?;
    body.bytes()
        .all(|b| digit_value(b) <= 15)
        .then_some(shape)
}

/// Check whether `value` is a `#` followed by 3, 4, 6 or 8 hex digits.
///
/// ```rust
/// use colorpack::is_hex;
///
/// assert!(is_hex("#a1b2c3"));
/// assert!(!is_hex("a1b2c3"));
/// assert!(!is_hex("#xyz123"));
/// ```
#[must_use]
pub fn is_hex(value: impl AsRef<str>) -> bool {
    hex_shape(value.as_ref()).is_some()
}

impl Rgb {
    /// Encode as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        encode(self.to_array())
    }
}

impl Rgba {
    /// Encode as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        encode(self.to_array())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex_chars(self.to_array()).try_for_each(|c| f.write_char(c))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex_chars(self.to_array()).try_for_each(|c| f.write_char(c))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgba(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_table() {
        for (i, c) in "0123456789abcdef".bytes().enumerate() {
            assert_eq!(usize::from(digit_value(c)), i);
        }
        for (i, c) in "ABCDEF".bytes().enumerate() {
            assert_eq!(usize::from(digit_value(c)), i + 10);
        }
        for c in [b'g', b'G', b'#', b' ', b'-', b'/', b':', b'@', b'`', 0x80, 0xFF] {
            assert!(digit_value(c) > 15, "{c:#x} should not be a digit");
        }
    }

    #[test]
    fn safe_fold() {
        assert_eq!(hex_to_number("#c86438"), Ok(0xC86438));
        assert_eq!(hex_to_number("C86438"), Ok(0xC86438));
        assert_eq!(hex_to_number("#c86438b4"), Ok(0xC864_38B4));
        assert_eq!(hex_to_number("f"), Ok(15));
        assert_eq!(
            hex_to_number("#1234567890abcdef"),
            Ok(0x1234_5678_90AB_CDEF)
        );
        assert_eq!(hex_to_number("ffffffffffffffff"), Ok(u64::MAX));
        assert_eq!(
            hex_to_number("#1234567890abcdef0"),
            Err(Error::TooManyDigits {
                digits: 17,
                limit: SAFE_HEX_DIGITS
            })
        );
    }

    #[test]
    fn fast_fold() {
        assert_eq!(hex_to_number_fast("#c86438"), Ok(0xC86438));
        assert_eq!(hex_to_number_fast("#fffffff"), Ok(0x0FFF_FFFF));
        assert_eq!(
            hex_to_number_fast("#c86438b4"),
            Err(Error::TooManyDigits {
                digits: 8,
                limit: FAST_HEX_DIGITS
            })
        );
    }

    #[test]
    fn folds_agree_within_the_fast_limit() {
        for hex in ["0", "a", "7f", "abc", "c0ffee", "1234567", "FfFfFfF"] {
            assert_eq!(
                hex_to_number(hex).map(|n| n as u32),
                hex_to_number_fast(hex)
            );
        }
    }

    #[test]
    fn malformed_digits_are_rejected() {
        assert_eq!(hex_to_number(""), Err(Error::Empty));
        assert_eq!(hex_to_number("#"), Err(Error::Empty));
        assert_eq!(
            hex_to_number("#xyz123"),
            Err(Error::InvalidDigit {
                index: 0,
                found: 'x'
            })
        );
        assert_eq!(
            hex_to_number_fast("12 34"),
            Err(Error::InvalidDigit {
                index: 2,
                found: ' '
            })
        );
        assert_eq!(
            hex_to_number("##abc"),
            Err(Error::InvalidDigit {
                index: 0,
                found: '#'
            })
        );
        assert_eq!(
            hex_to_number("ab€"),
            Err(Error::InvalidDigit {
                index: 2,
                found: '€'
            })
        );
    }

    #[test]
    fn rgb_decoding() {
        assert_eq!(hex_to_rgb("#c86438"), Ok(Rgb::new(200, 100, 56)));
        assert_eq!(hex_to_rgb("C86438"), Ok(Rgb::new(200, 100, 56)));
        assert_eq!(hex_to_rgb("#abc"), Ok(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(hex_to_rgb("#000"), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("#FFFFFF"), Ok(Rgb::new(255, 255, 255)));

        assert_eq!(
            hex_to_rgb("#c86438b4"),
            Err(Error::InvalidLength {
                expected: "3 or 6",
                found: 8
            })
        );
        assert_eq!(
            hex_to_rgb("#abcd"),
            Err(Error::InvalidLength {
                expected: "3 or 6",
                found: 4
            })
        );
        assert_eq!(
            hex_to_rgb("#xyz1234"),
            Err(Error::InvalidDigit {
                index: 0,
                found: 'x'
            })
        );
        assert_eq!(
            hex_to_rgb("#c8643g"),
            Err(Error::InvalidDigit {
                index: 5,
                found: 'g'
            })
        );
        assert_eq!(hex_to_rgb(""), Err(Error::Empty));
        assert!(hex_to_rgb("#€").is_err());
    }

    #[test]
    fn rgba_decoding() {
        assert_eq!(hex_to_rgba("#c86438b4"), Ok(Rgba::new(200, 100, 56, 180)));
        assert_eq!(hex_to_rgba("#FFFFFFFF"), Ok(Rgba::new(255, 255, 255, 255)));
        assert_eq!(hex_to_rgba("#abcd"), Ok(Rgba::new(0xAA, 0xBB, 0xCC, 0xDD)));
        assert_eq!(hex_to_rgba("f008"), Ok(Rgba::new(0xFF, 0, 0, 0x88)));
        assert_eq!(
            hex_to_rgba("#c86438"),
            Err(Error::InvalidLength {
                expected: "4 or 8",
                found: 6
            })
        );
    }

    #[test]
    fn encoding() {
        assert_eq!(number_to_hex6(0xC86438), "#c86438");
        assert_eq!(number_to_hex6(0), "#000000");
        assert_eq!(number_to_hex6(0xAB_C864_38), "#c86438");
        assert_eq!(number_to_hex8(0xC864_38B4), "#c86438b4");
        assert_eq!(number_to_hex8(0xFF), "#000000ff");
        assert_eq!(rgb_to_hex(200, 100, 56), "#c86438");
        assert_eq!(rgba_to_hex(200, 100, 56, 180), "#c86438b4");
    }

    #[test]
    fn six_digit_strings_normalize() {
        for hex in ["#c86438", "#C86438", "#000000", "#FfFfFf", "#0a0B0c", "#123456"] {
            let num = hex_to_number(hex).unwrap() as u32;
            assert_eq!(number_to_hex6(num), hex.to_lowercase());
        }
    }

    #[test]
    fn rgb_hex_round_trip() {
        for num in (0..=crate::RGB_MAX).step_by(997) {
            let hex = number_to_hex6(num);
            assert!(is_hex(&hex));
            assert_eq!(hex_to_rgb(&hex), Ok(unpack_rgb(num)));
        }
    }

    #[test]
    fn validation() {
        assert!(is_hex("#abc"));
        assert!(is_hex("#abcd"));
        assert!(is_hex("#a1b2c3"));
        assert!(is_hex("#a1b2c3d4"));
        assert!(is_hex("#A1B2C3"));
        assert!(is_hex(String::from("#a1b2c3")));

        assert!(!is_hex("#xyz123"));
        assert!(!is_hex("abc123"));
        assert!(!is_hex(123.to_string()));
        assert!(!is_hex(""));
        assert!(!is_hex("#"));
        assert!(!is_hex("#ab"));
        assert!(!is_hex("#abcde"));
        assert!(!is_hex("#abcdef0"));
        assert!(!is_hex("#abcdef012"));
        assert!(!is_hex("#ab-"));
        assert!(!is_hex("#ab€"));
        assert!(!is_hex("#€€"));
        assert!(!is_hex(" #abc"));
    }

    #[test]
    fn shapes() {
        assert_eq!(hex_shape("#abc"), Some(HexShape::SHORT));
        assert_eq!(hex_shape("#abcd"), Some(HexShape::SHORT | HexShape::ALPHA));
        assert_eq!(hex_shape("#aabbcc"), Some(HexShape::empty()));
        assert_eq!(hex_shape("#aabbccdd"), Some(HexShape::ALPHA));
        assert_eq!(hex_shape("aabbcc"), None);

        for digits in [3, 4, 6, 8] {
            assert_eq!(HexShape::from_digits(digits).map(HexShape::digits), Some(digits));
        }
        assert_eq!(HexShape::from_digits(5), None);
    }

    #[test]
    fn display_and_parse() {
        let rgb = Rgb::new(200, 100, 56);
        assert_eq!(rgb.to_string(), "#c86438");
        assert_eq!(rgb.to_hex(), "#c86438");
        assert_eq!("#c86438".parse::<Rgb>(), Ok(rgb));

        let rgba = Rgba::new(200, 100, 56, 180);
        assert_eq!(format!("{rgba}"), "#c86438b4");
        assert_eq!(rgba.to_hex(), "#c86438b4");
        assert_eq!("#C86438B4".parse::<Rgba>(), Ok(rgba));
        assert!("#c86438".parse::<Rgba>().is_err());
    }
}
