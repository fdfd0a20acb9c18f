//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    hex,
    luminance,
};

hsrl_macros::gen_model! {
    /// A color specified in the sRGB color space with gamma encoding.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

hsrl_macros::gen_model! {
    /// A color specified in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

/// Components at or below this value sit on the linear segment of the sRGB
/// transfer function.
const LINEAR_SEGMENT_LIMIT: Component = 0.04045;

/// Convert a single gamma encoded sRGB value to linear light.
///
/// Values are not clamped, negative values stay on the linear segment.
pub fn to_linear_light(value: Component) -> Component {
    if value <= LINEAR_SEGMENT_LIMIT {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Scale a unit value to a byte, rounding half up. Values outside of `[0, 1]`
/// saturate.
fn to_byte(value: Component) -> u8 {
    (value * 255.0).round() as u8
}

impl Srgb {
    /// Create a color from 8-bit channels.
    pub fn from_rgb8([red, green, blue]: [u8; 3]) -> Self {
        Self::new(
            Component::from(red) / 255.0,
            Component::from(green) / 255.0,
            Component::from(blue) / 255.0,
        )
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components().map(to_linear_light).into()
    }

    /// The WCAG relative luminance of this color.
    pub fn relative_luminance(&self) -> Component {
        self.to_linear_light().luminance()
    }

    /// Each channel rounded to the nearest byte.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let Components(red, green, blue) = self.to_components();
        [to_byte(red), to_byte(green), to_byte(blue)]
    }

    /// Format the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_rgb8())
    }
}

impl SrgbLinear {
    /// Weighted sum of the linear light components.
    pub fn luminance(&self) -> Component {
        luminance::weighted(self.to_components())
    }
}
