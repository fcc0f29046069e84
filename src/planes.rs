//! Bulk storage for many colors as three parallel channel planes.
//!
//! Converting a large batch is just the single color conversion applied in
//! order; [`RgbPlanes`] only changes the memory layout so that each channel
//! can be walked on its own.

use crate::{hex::hex_to_rgb, pack::unpack_rgb, Result, Rgb};

/// Colors stored as separate red, green and blue planes of equal length.
/// Index `i` of every plane belongs to the same color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RgbPlanes {
    red: Vec<u8>,
    green: Vec<u8>,
    blue: Vec<u8>,
}

impl RgbPlanes {
    /// Create empty planes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty planes with room for `capacity` colors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            red: Vec::with_capacity(capacity),
            green: Vec::with_capacity(capacity),
            blue: Vec::with_capacity(capacity),
        }
    }

    /// Unpack packed RGB numbers, keeping their order.
    pub fn from_numbers(numbers: &[u32]) -> Self {
        let mut planes = Self::with_capacity(numbers.len());
        planes.extend(numbers.iter().map(|&n| unpack_rgb(n)));
        planes
    }

    /// Decode hex strings (see [`hex_to_rgb`]), keeping their order.
    ///
    /// # Errors
    ///
    /// The first decoding error, if any string is malformed.
    pub fn from_hex<'a, I>(hexes: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        hexes.into_iter().map(hex_to_rgb).collect()
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.red.len()
    }

    /// Whether there are no colors.
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// Append a color.
    pub fn push(&mut self, rgb: Rgb) {
        self.red.push(rgb.r);
        self.green.push(rgb.g);
        self.blue.push(rgb.b);
    }

    /// The color at `index`.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        Some(Rgb::new(
            *self.red.get(index)?,
            *self.green.get(index)?,
            *self.blue.get(index)?,
        ))
    }

    /// The red plane.
    pub fn red(&self) -> &[u8] {
        &self.red
    }

    /// The green plane.
    pub fn green(&self) -> &[u8] {
        &self.green
    }

    /// The blue plane.
    pub fn blue(&self) -> &[u8] {
        &self.blue
    }

    /// Iterate over the colors in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Rgb> + '_ {
        self.red
            .iter()
            .zip(&self.green)
            .zip(&self.blue)
            .map(|((&r, &g), &b)| Rgb::new(r, g, b))
    }

    /// Pack every color into a 24-bit number.
    pub fn to_numbers(&self) -> Vec<u32> {
        self.iter().map(Rgb::to_number).collect()
    }

    /// Encode every color as `#rrggbb`.
    pub fn to_hex(&self) -> Vec<String> {
        self.iter().map(Rgb::to_hex).collect()
    }
}

impl Extend<Rgb> for RgbPlanes {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        for rgb in iter {
            self.push(rgb);
        }
    }
}

impl FromIterator<Rgb> for RgbPlanes {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut planes = Self::new();
        planes.extend(iter);
        planes
    }
}
