//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::color::{Component, Components};

type Vector = Vector3D<Component>;

/// Degrees in a full turn of the hue wheel.
pub const FULL_TURN: Component = 360.0;

/// Wrap a hue in degrees into `[0, 360)`.
///
/// The remainder keeps the sign of the dividend, so negative hues are shifted
/// up by a full turn afterwards.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue % FULL_TURN;
    if hue < 0.0 {
        hue + FULL_TURN
    } else {
        hue
    }
}

/// Clamp a value into `[0, 1]`. NaN is passed through.
pub fn clamp_unit<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}

/// The point halfway between `low` and `high`.
pub fn midpoint<T: Float>(low: T, high: T) -> T {
    (low + high) / (T::one() + T::one())
}

/// Dot product of two component triples, summed left to right.
pub fn dot(a: Components, b: Components) -> Component {
    Vector::new(a.0, a.1, a.2).dot(Vector::new(b.0, b.1, b.2))
}
