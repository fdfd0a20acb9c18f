//! hsrl finds an sRGB color from a hue, a saturation and a target WCAG
//! relative luminance.
//!
//! There is no closed form inverse of relative luminance, so the lightness of
//! an HSL color is found with a bisection search.
//!
//! ```rust
//! use hsrl::{relative_luminance, solve_luminance};
//!
//! let red = solve_luminance(0.0, 1.0, 0.7);
//! assert_eq!(red.hex.len(), 7);
//! assert!((relative_luminance(red.srgb) - 0.7).abs() < 0.005);
//! ```

#![deny(missing_docs)]

mod color;
mod hex;
mod hsl;
mod luminance;
mod math;
mod result;
mod rgb;
mod solve;

pub use color::{Component, Components};
pub use hex::{parse_hex, HexError};
pub use hsl::{hsl_to_srgb, Hsl};
pub use luminance::{contrast_ratio, relative_luminance, WEIGHTS as LUMINANCE_WEIGHTS};
pub use result::ColorResult;
pub use rgb::{Srgb, SrgbLinear};
pub use solve::{solve_luminance, Flags, Solution, Solver, DEFAULT_TOLERANCE, MIN_TOLERANCE};
