//! colorpack converts between the common in-memory representations of a
//! color: hex strings, packed integers and per-channel values, plus the HSV
//! model and a couple of procedural palette generators.
//!
//! ```rust
//! use colorpack::{hex_to_rgb, pack_rgb, rgb_to_hex, Rgb};
//!
//! let rgb = hex_to_rgb("#c86438").unwrap();
//! assert_eq!(rgb, Rgb::new(200, 100, 56));
//! assert_eq!(pack_rgb(rgb.r, rgb.g, rgb.b), 0xC86438);
//! assert_eq!(rgb_to_hex(200, 100, 56), "#c86438");
//! ```

#![deny(missing_docs)]


mod color;
mod convert;
mod error;
mod hex;
mod math;
mod pack;
mod palette;
mod planes;
mod random;

pub use color::{Component, Hsv, Rgb, Rgba};
pub use convert::{hsv_to_rgb, rgb_to_hsv, rgb_to_hsv_exact};
pub use error::{Error, Result};
pub use hex::{
    hex_shape, hex_to_number, hex_to_number_fast, hex_to_rgb, hex_to_rgba, is_hex,
    number_to_hex6, number_to_hex8, rgb_to_hex, rgba_to_hex, HexShape, FAST_HEX_DIGITS,
    SAFE_HEX_DIGITS,
};
pub use pack::{
    pack_rgb, pack_rgba, try_channel, unpack_rgb, unpack_rgba, wrap_channel, RGB_MAX,
};
pub use palette::{
    generate_even_hue_palette, generate_golden_ratio_palette, GoldenRatioHues, HsvPalette,
    GOLDEN_RATIO_CONJUGATE,
};
pub use planes::RgbPlanes;
pub use random::{
    random_bright_rgb_number, random_bright_rgba_number, random_in_range,
    random_pastel_rgb_number, random_pastel_rgba_number, random_rgb_number,
    random_rgba_number, ColorRng, BRIGHT, PASTEL,
};
