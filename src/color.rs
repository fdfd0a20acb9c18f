//! Scalar and triple types shared by all color models.

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

impl From<Components> for [Component; 3] {
    fn from(value: Components) -> Self {
        [value.0, value.1, value.2]
    }
}
