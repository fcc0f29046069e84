//! Conversions between 8-bit RGB channels and the HSV model.
//!
//! Hue is in degrees, saturation and value are percentages. [`rgb_to_hsv`]
//! rounds every component to an integer, so a round trip through it can move
//! each channel by up to 3. [`rgb_to_hsv_exact`] keeps the fractions and
//! round trips losslessly.

use crate::{
    color::{Component, Hsv, Rgb},
    math::{clamp, to_channel, wrap},
};

/// Convert an HSV triple `[hue, saturation, value]` to RGB channels.
///
/// The hue wraps into `[0, 360)` (negative hues wrap forward), saturation and
/// value are clamped into `[0, 100]`. NaN components count as zero.
///
/// ```rust
/// assert_eq!(colorpack::hsv_to_rgb([120.0, 100.0, 100.0]), [0, 255, 0]);
/// ```
#[must_use]
pub fn hsv_to_rgb(hsv: [Component; 3]) -> [u8; 3] {
    let [hue, saturation, value] = hsv;
    let hue = wrap(hue, 360.0);
    let saturation = clamp(saturation, 0.0, 100.0) / 100.0;
    let value = clamp(value, 0.0, 100.0) / 100.0;

    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (red, green, blue) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    [to_channel(red + m), to_channel(green + m), to_channel(blue + m)]
}

/// Convert RGB channels to an HSV triple `[hue, saturation, value]` with
/// every component rounded to the nearest integer. A hue that rounds up to
/// 360 is reported as 0.
///
/// ```rust
/// assert_eq!(colorpack::rgb_to_hsv([255, 0, 0]), [0.0, 100.0, 100.0]);
/// ```
#[must_use]
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [Component; 3] {
    let [hue, saturation, value] = rgb_to_hsv_exact(rgb);

    let hue = hue.round();
    let hue = if hue >= 360.0 { 0.0 } else { hue };

    [hue, saturation.round(), value.round()]
}

/// Convert RGB channels to an HSV triple `[hue, saturation, value]` without
/// rounding. The hue is 0 for grays, where it is undefined.
#[must_use]
pub fn rgb_to_hsv_exact(rgb: [u8; 3]) -> [Component; 3] {
    let [red, green, blue] = rgb.map(|c| Component::from(c) / 255.0);
    let (hue, min, max) = hue_with_min_max(red, green, blue);

    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

    [hue * 360.0, saturation * 100.0, max * 100.0]
}

/// Calculate the hue as a fraction of a turn along with the min and max
/// channel values.
fn hue_with_min_max(
    red: Component,
    green: Component,
    blue: Component,
) -> (Component, Component, Component) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else {
        let sixths = if max == red {
            (green - blue) / delta
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        wrap(sixths / 6.0, 1.0)
    };

    (hue, min, max)
}

impl Hsv {
    /// Convert this color to RGB channels.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.to_array()).into()
    }
}

impl Rgb {
    /// Convert this color to HSV with every component rounded to an integer.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.to_array()).into()
    }

    /// Convert this color to HSV without rounding.
    #[must_use]
    pub fn to_hsv_exact(self) -> Hsv {
        rgb_to_hsv_exact(self.to_array()).into()
    }
}
