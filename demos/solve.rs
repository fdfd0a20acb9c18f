//! Print colors of a few hues at the same relative luminance.
//!
//! Run with `RUST_LOG=hsrl=trace` to see each bisection step.

use hsrl::{contrast_ratio, Solver};
use tracing_subscriber::EnvFilter;

const TARGET: hsrl::Component = 0.18;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let solver = Solver::new();

    for hue in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0] {
        let solution = solver.solve(hue, 0.8, TARGET);
        let result = hsrl::ColorResult::from(&solution);
        println!(
            "hue {hue:>5}: {result} lightness {:.4} luminance {:.4} contrast on white {:.2}",
            solution.hsl.lightness,
            solution.luminance,
            contrast_ratio(result.srgb, [1.0, 1.0, 1.0]),
        );
    }
}
