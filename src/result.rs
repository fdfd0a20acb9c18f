//! The public shape of a solved color.

use std::{fmt, str::FromStr};

use crate::{
    color::Component,
    hex::{parse_hex, HexError},
    rgb::Srgb,
    solve::Solution,
};

/// A color in three equivalent forms, all derived from the same sRGB triple.
///
/// `rgb255` is `srgb` rounded to bytes and `hex` is `rgb255` as `#rrggbb`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorResult {
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// Red, green and blue as bytes.
    pub rgb255: [u8; 3],
    /// Red, green and blue gamma encoded in `[0, 1]`.
    pub srgb: [Component; 3],
}

impl ColorResult {
    /// Create a result from a `#rrggbb` or `#rgb` string.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        Ok(Srgb::from_rgb8(parse_hex(hex)?).into())
    }
}

impl From<Srgb> for ColorResult {
    fn from(value: Srgb) -> Self {
        Self {
            hex: value.to_hex(),
            rgb255: value.to_rgb8(),
            srgb: value.into(),
        }
    }
}

impl From<&Solution> for ColorResult {
    fn from(value: &Solution) -> Self {
        value.srgb.into()
    }
}

impl FromStr for ColorResult {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ColorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
