//! The value types a color is held in once it has been decoded: [`Rgb`] and
//! [`Rgba`] with 8-bit channels, and [`Hsv`] with floating point components.
//!
//! All of them are plain `Copy` values. Every conversion returns a fresh
//! value, nothing is shared between calls.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that HSV components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that HSV components are stored as.
pub type Component = f64;

colorpack_macros::gen_channels! {
    /// A color made of red, green and blue 8-bit channels.
    #[derive(Eq, Hash)]
    pub struct Rgb {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
    }
}

colorpack_macros::gen_channels! {
    /// A color made of red, green, blue and alpha 8-bit channels. An alpha of
    /// `0` is fully transparent, `255` fully opaque.
    #[derive(Eq, Hash)]
    pub struct Rgba {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
        /// The alpha channel.
        a: u8,
    }
}

colorpack_macros::gen_channels! {
    /// A color in the HSV model. The hue is in degrees, saturation and value
    /// are percentages.
    pub struct Hsv {
        /// The hue in degrees, `[0, 360)` once normalized.
        hue: Component,
        /// The saturation in percent, `[0, 100]`.
        saturation: Component,
        /// The value (brightness) in percent, `[0, 100]`.
        value: Component,
    }
}

impl Rgb {
    /// Attach an alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl Rgba {
    /// Drop the alpha channel.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgba> for Rgb {
    fn from(value: Rgba) -> Self {
        value.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_in_declaration_order() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.to_array(), [1, 2, 3]);
        assert_eq!(Rgb::from([1, 2, 3]), rgb);
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);

        let rgba = Rgba::new(1, 2, 3, 4);
        assert_eq!(rgba.to_array(), [1, 2, 3, 4]);
        assert_eq!(Rgba::from([1, 2, 3, 4]), rgba);

        let hsv = Hsv::new(120.0, 50.0, 25.0);
        assert_eq!(hsv.hue, 120.0);
        assert_eq!(hsv.saturation, 50.0);
        assert_eq!(hsv.value, 25.0);
        assert_eq!(Hsv::from(hsv.to_array()), hsv);
    }

    #[test]
    fn alpha_is_attached_and_dropped() {
        let rgba = Rgb::new(10, 20, 30).with_alpha(40);
        assert_eq!(rgba, Rgba::new(10, 20, 30, 40));
        assert_eq!(rgba.to_rgb(), Rgb::new(10, 20, 30));
        assert_eq!(Rgb::from(rgba), Rgb::new(10, 20, 30));
    }

    #[test]
    fn defaults_are_zeroed() {
        assert_eq!(Rgb::default(), Rgb::new(0, 0, 0));
        assert_eq!(Rgba::default(), Rgba::new(0, 0, 0, 0));
        assert_eq!(Hsv::default(), Hsv::new(0.0, 0.0, 0.0));
    }
}
