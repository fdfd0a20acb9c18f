//! WCAG 2.x relative luminance and contrast ratio.
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use crate::{
    color::{Component, Components},
    math::dot,
    rgb::Srgb,
};

/// Weights of the red, green and blue linear light components.
pub const WEIGHTS: [Component; 3] = [0.2126, 0.7152, 0.0722];

/// Weighted sum of linear light components.
pub(crate) fn weighted(linear: Components) -> Component {
    dot(linear, WEIGHTS.into())
}

/// Calculate the relative luminance of a gamma encoded sRGB triple.
///
/// Components are expected in `[0, 1]` but are NOT clamped; values outside of
/// that range go through the same formula.
pub fn relative_luminance(srgb: [Component; 3]) -> Component {
    Srgb::from(srgb).relative_luminance()
}

/// Contrast ratio between two gamma encoded sRGB triples, in `[1, 21]` for
/// in-gamut colors. The order of the arguments does not matter.
pub fn contrast_ratio(a: [Component; 3], b: [Component; 3]) -> Component {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
