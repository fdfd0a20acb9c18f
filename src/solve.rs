//! Find a color with a given hue, saturation and relative luminance.
//!
//! Relative luminance has no closed form inverse, but for a fixed hue and
//! saturation it never decreases as lightness increases. A binary search over
//! lightness therefore narrows in on the target.

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::{
    color::Component,
    hsl::Hsl,
    math::{clamp_unit, midpoint, normalize_hue, FULL_TURN},
    result::ColorResult,
    rgb::Srgb,
};

/// Width of the lightness interval at which the search stops.
pub const DEFAULT_TOLERANCE: Component = 0.0005;

/// Smallest tolerance a [`Solver`] accepts. Anything narrower might never be
/// reached by halving.
pub const MIN_TOLERANCE: Component = Component::EPSILON;

bitflags! {
    /// Flags describing how a [`Solution`] was reached.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the hue was outside of `[0, 360)` and had to be wrapped.
        const HUE_WRAPPED = 1 << 0;
        /// Set when the saturation was outside of `[0, 1]`.
        const SATURATION_CLAMPED = 1 << 1;
        /// Set when the target luminance was outside of `[0, 1]`.
        const TARGET_CLAMPED = 1 << 2;
        /// Set when a candidate hit the target luminance exactly and the
        /// search stopped early.
        const EXACT_MATCH = 1 << 3;
    }
}

/// Bisection search over HSL lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver {
    tolerance: Component,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Solver {
    /// Create a solver with the [`DEFAULT_TOLERANCE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop searching once the lightness interval is no wider than
    /// `tolerance`. Values below [`MIN_TOLERANCE`] (and NaN) are raised to it.
    pub fn with_tolerance(self, tolerance: Component) -> Self {
        Self {
            tolerance: tolerance.max(MIN_TOLERANCE),
        }
    }

    /// The interval width at which the search stops.
    pub fn tolerance(&self) -> Component {
        self.tolerance
    }

    /// Search for the color with the given `hue` and `saturation` whose
    /// relative luminance is closest to `target`.
    ///
    /// The hue is wrapped into `[0, 360)`, saturation and target are clamped
    /// into `[0, 1]`. The search always ends after a fixed number of steps
    /// determined by the tolerance.
    pub fn solve(&self, hue: Component, saturation: Component, target: Component) -> Solution {
        let mut flags = Flags::empty();
        if !(0.0..FULL_TURN).contains(&hue) {
            flags |= Flags::HUE_WRAPPED;
        }
        if !(0.0..=1.0).contains(&saturation) {
            flags |= Flags::SATURATION_CLAMPED;
        }
        if !(0.0..=1.0).contains(&target) {
            flags |= Flags::TARGET_CLAMPED;
        }

        let hue = normalize_hue(hue);
        let saturation = clamp_unit(saturation);
        let target = clamp_unit(target);

        let mut low: Component = 0.0;
        let mut high: Component = 1.0;

        // Start from black, with a distance no real candidate can lose to.
        let mut best_lightness = 0.0;
        let mut best_srgb = Srgb::new(0.0, 0.0, 0.0);
        let mut best_luminance = 0.0;
        let mut best_distance = 1.0;

        let mut iterations = 0;

        while high - low > self.tolerance {
            iterations += 1;

            let lightness = midpoint(low, high);
            let srgb = Hsl::new(hue, saturation, lightness).to_srgb();
            let luminance = srgb.relative_luminance();
            let distance = (luminance - target).abs();

            trace!(iterations, lightness, luminance, distance, "bisection step");

            // Ties keep the earlier candidate.
            if distance < best_distance {
                best_lightness = lightness;
                best_srgb = srgb;
                best_luminance = luminance;
                best_distance = distance;
            }

            if luminance == target {
                flags |= Flags::EXACT_MATCH;
                break;
            }

            if luminance > target {
                high = lightness;
            } else {
                low = lightness;
            }
        }

        debug!(
            hue,
            saturation,
            target,
            lightness = best_lightness,
            distance = best_distance,
            iterations,
            "luminance search finished"
        );

        Solution {
            hsl: Hsl::new(hue, saturation, best_lightness),
            target,
            srgb: best_srgb,
            luminance: best_luminance,
            distance: best_distance,
            iterations,
            flags,
        }
    }
}

/// The outcome of a [`Solver::solve`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// The normalized hue and saturation with the lightness of the best
    /// candidate.
    pub hsl: Hsl,
    /// The normalized target luminance.
    pub target: Component,
    /// The best candidate found.
    pub srgb: Srgb,
    /// The relative luminance of [`Solution::srgb`].
    pub luminance: Component,
    /// Absolute difference between [`Solution::luminance`] and the target.
    pub distance: Component,
    /// Number of candidates evaluated.
    pub iterations: u32,
    /// See [`Flags`].
    pub flags: Flags,
}

impl Solution {
    /// Returns true if the search stopped on an exact luminance match.
    pub fn is_exact(&self) -> bool {
        self.flags.contains(Flags::EXACT_MATCH)
    }
}

/// Find the sRGB color with the given hue and saturation whose relative
/// luminance is closest to `target`, using the [`DEFAULT_TOLERANCE`].
pub fn solve_luminance(hue: Component, saturation: Component, target: Component) -> ColorResult {
    ColorResult::from(&Solver::default().solve(hue, saturation, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hex::parse_hex, hsl::hsl_to_srgb, luminance::relative_luminance};
    use approx::assert_abs_diff_eq;

    /// Tolerance of the reference scenarios, two decimal digits.
    const CLOSE: Component = 0.005;

    fn assert_consistent(result: &ColorResult) {
        for (value, byte) in result.srgb.iter().zip(result.rgb255) {
            assert_eq!((value * 255.0).round() as u8, byte);
        }
        assert_eq!(parse_hex(&result.hex), Ok(result.rgb255));
    }

    fn assert_reaches(hue: Component, saturation: Component, target: Component) -> ColorResult {
        let result = solve_luminance(hue, saturation, target);
        assert_abs_diff_eq!(relative_luminance(result.srgb), target, epsilon = CLOSE);
        assert_consistent(&result);
        result
    }

    #[test]
    fn grey_to_half() {
        let result = assert_reaches(0.0, 0.0, 0.5);
        let [r, g, b] = result.srgb;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn blue_to_white() {
        assert_reaches(240.0, 1.0, 1.0);
    }

    #[test]
    fn pure_red_to_point_seven() {
        assert_reaches(0.0, 1.0, 0.7);
    }

    #[test]
    fn somewhat_cyan_to_point_two() {
        // Saturation 80 is clamped to 1.
        assert_reaches(100.0, 80.0, 0.2);
    }

    #[test]
    fn desaturated_red_to_point_six() {
        assert_reaches(0.0, 0.6, 0.6);
    }

    #[test]
    fn converges_across_the_wheel() {
        for hue in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            for saturation in [0.0, 0.3, 0.65, 1.0] {
                for target in [0.0, 0.05, 0.18, 0.5, 0.75, 0.95, 1.0] {
                    let solution = Solver::new().solve(hue, saturation, target);
                    assert!(
                        solution.distance < CLOSE,
                        "hue {hue} saturation {saturation} target {target}: {solution:?}"
                    );
                    assert_consistent(&ColorResult::from(&solution));
                }
            }
        }
    }

    #[test]
    fn luminance_grows_with_lightness() {
        for hue in [0.0, 60.0, 120.0, 200.0, 242.0, 330.0] {
            for saturation in [0.0, 0.33, 1.0] {
                let mut previous = relative_luminance(hsl_to_srgb(hue, saturation, 0.0));
                for step in 1..=100 {
                    let lightness = step as Component / 100.0;
                    let current = relative_luminance(hsl_to_srgb(hue, saturation, lightness));
                    assert!(
                        current >= previous - 1.0e-6,
                        "hue {hue} saturation {saturation} lightness {lightness}"
                    );
                    previous = current;
                }
            }
        }
    }

    #[test]
    fn default_search_is_bounded() {
        let solution = Solver::new().solve(17.0, 0.4, 0.3);
        assert_eq!(solution.iterations, 11);
        assert!(!solution.is_exact());
    }

    #[test]
    fn stops_on_exact_match() {
        // The first candidate sits at lightness 0.5.
        let target = relative_luminance(hsl_to_srgb(200.0, 0.5, 0.5));
        let solution = Solver::new().solve(200.0, 0.5, target);
        assert!(solution.is_exact());
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.hsl.lightness, 0.5);
        assert_eq!(solution.distance, 0.0);
    }

    #[test]
    fn wider_tolerance_takes_fewer_steps() {
        let solution = Solver::new().with_tolerance(0.01).solve(17.0, 0.4, 0.3);
        assert_eq!(solution.iterations, 7);
    }

    #[test]
    fn tolerance_has_a_floor() {
        assert_eq!(Solver::new().with_tolerance(0.0).tolerance(), MIN_TOLERANCE);
        assert_eq!(Solver::new().with_tolerance(-1.0).tolerance(), MIN_TOLERANCE);
        assert_eq!(
            Solver::new().with_tolerance(Component::NAN).tolerance(),
            MIN_TOLERANCE
        );

        let solution = Solver::new().with_tolerance(0.0).solve(90.0, 1.0, 0.4);
        assert!(solution.distance < 1.0e-6);
    }

    #[test]
    fn inputs_are_normalized() {
        let solution = Solver::new().solve(-120.0, 2.0, 1.5);
        assert_eq!(solution.hsl.hue, 240.0);
        assert_eq!(solution.hsl.saturation, 1.0);
        assert_eq!(solution.target, 1.0);
        assert!(solution
            .flags
            .contains(Flags::HUE_WRAPPED | Flags::SATURATION_CLAMPED | Flags::TARGET_CLAMPED));

        assert_eq!(
            solve_luminance(-120.0, 2.0, 1.5),
            solve_luminance(240.0, 1.0, 1.0)
        );
    }

    #[test]
    fn in_range_inputs_set_no_flags() {
        let solution = Solver::new().solve(359.9, 1.0, 0.0);
        assert_eq!(solution.flags, Flags::empty());
    }

    #[test]
    fn nan_target_falls_back_to_black() {
        let solution = Solver::new().solve(10.0, 0.5, Component::NAN);
        assert_eq!(solution.srgb, Srgb::new(0.0, 0.0, 0.0));
        assert_eq!(solution.iterations, 11);

        let result = ColorResult::from(&solution);
        assert_eq!(result.hex, "#000000");
    }
}
