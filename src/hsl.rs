//! Model a color with the HSL notation in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{clamp_unit, normalize_hue},
    rgb::Srgb,
};

hsrl_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color in `[0, 1]`.
        saturation: Component,
        /// The lightness of the color in `[0, 1]`.
        lightness: Component,
    }
}

impl Hsl {
    /// Return a copy with the hue wrapped into `[0, 360)` and saturation and
    /// lightness clamped into `[0, 1]`.
    pub fn normalized(&self) -> Self {
        Self::new(
            normalize_hue(self.hue),
            clamp_unit(self.saturation),
            clamp_unit(self.lightness),
        )
    }

    /// Convert this color from the HSL notation to the sRGB color space.
    ///
    /// The components are normalized first, so any input yields a color. The
    /// result is not clamped and can stray from `[0, 1]` by rounding error.
    pub fn to_srgb(&self) -> Srgb {
        hsl_to_rgb(&self.normalized().to_components()).into()
    }
}

/// Convert HSL components to gamma encoded sRGB components. Expects the
/// components to be normalized already.
fn hsl_to_rgb(from: &Components) -> Components {
    let Components(hue, saturation, lightness) = *from;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let offset = lightness - chroma / 2.0;

    // Each sextant is [k * 60, (k + 1) * 60). A hue that rounded up to 360
    // while wrapping still lands in the last one.
    let sextant = if hue >= 300.0 {
        Components(chroma, 0.0, secondary)
    } else if hue >= 240.0 {
        Components(secondary, 0.0, chroma)
    } else if hue >= 180.0 {
        Components(0.0, secondary, chroma)
    } else if hue >= 120.0 {
        Components(0.0, chroma, secondary)
    } else if hue >= 60.0 {
        Components(secondary, chroma, 0.0)
    } else {
        Components(chroma, secondary, 0.0)
    };

    sextant.map(|v| v + offset)
}

/// Convert a hue, saturation and lightness to an sRGB triple.
///
/// The hue is wrapped into `[0, 360)`, saturation and lightness are clamped
/// into `[0, 1]`.
pub fn hsl_to_srgb(
    hue: Component,
    saturation: Component,
    lightness: Component,
) -> [Component; 3] {
    Hsl::new(hue, saturation, lightness).to_srgb().into()
}
