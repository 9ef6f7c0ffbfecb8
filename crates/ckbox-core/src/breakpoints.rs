//! Responsive image breakpoints.
//!
//! The step between breakpoints is 10% of the image width, but never less
//! than 80px. The largest breakpoint is the image width capped at 4000px;
//! smaller ones are derived by subtracting the step for as long as the
//! result stays at or above the step.

use serde::{Deserialize, Serialize};

/// Largest breakpoint ever generated.
pub const IMAGE_BREAKPOINT_MAX_WIDTH: u32 = 4000;
/// Lower bound of the breakpoint step in pixels.
pub const IMAGE_BREAKPOINT_PIXELS_THRESHOLD: u32 = 80;
/// Breakpoint step as a percentage of the image width.
pub const IMAGE_BREAKPOINT_PERCENTAGE_THRESHOLD: u32 = 10;

/// Breakpoint parameters (optional `[breakpoints]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointPolicy {
    /// Cap for the first (largest) breakpoint.
    pub max_width: u32,
    /// Minimum step between two breakpoints, in pixels. Must be non-zero.
    pub pixels_threshold: u32,
    /// Step between two breakpoints as a percentage of the image width.
    pub percentage_threshold: u32,
}

impl Default for BreakpointPolicy {
    fn default() -> Self {
        Self {
            max_width: IMAGE_BREAKPOINT_MAX_WIDTH,
            pixels_threshold: IMAGE_BREAKPOINT_PIXELS_THRESHOLD,
            percentage_threshold: IMAGE_BREAKPOINT_PERCENTAGE_THRESHOLD,
        }
    }
}

impl BreakpointPolicy {
    /// Step between two consecutive breakpoints for an image of `width` pixels.
    pub fn threshold(&self, width: u32) -> u32 {
        let percentage = u64::from(width) * u64::from(self.percentage_threshold) / 100;
        let percentage = u32::try_from(percentage).unwrap_or(u32::MAX);
        percentage.max(self.pixels_threshold)
    }

    /// Breakpoints for an image of `width` pixels, ascending.
    ///
    /// Always returns at least one element. A zero `pixels_threshold` is
    /// treated as 1 so the sequence stays finite.
    pub fn breakpoints(&self, width: u32) -> Vec<u32> {
        let threshold = self.threshold(width).max(1);
        let mut breakpoints = vec![width.min(self.max_width)];
        let mut last = breakpoints[0];

        // `last - threshold >= threshold`, without underflow.
        while u64::from(last) >= 2 * u64::from(threshold) {
            last -= threshold;
            breakpoints.push(last);
        }

        breakpoints.reverse();
        breakpoints
    }
}

/// Breakpoints for an image of `width` pixels using the default policy.
pub fn compute_breakpoints(width: u32) -> Vec<u32> {
    BreakpointPolicy::default().breakpoints(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_width_yields_single_breakpoint() {
        for width in [1, 40, 79, 80, 120, 159] {
            assert_eq!(compute_breakpoints(width), vec![width], "width={width}");
        }
    }

    #[test]
    fn boundary_at_twice_the_pixel_threshold() {
        assert_eq!(compute_breakpoints(160), vec![80, 160]);
    }

    #[test]
    fn width_200() {
        assert_eq!(compute_breakpoints(200), vec![120, 200]);
    }

    #[test]
    fn width_4000_steps_by_ten_percent() {
        let bps = compute_breakpoints(4000);
        let expected: Vec<u32> = (1..=10).map(|i| i * 400).collect();
        assert_eq!(bps, expected);
    }

    #[test]
    fn wide_image_is_capped_but_keeps_its_own_step() {
        // threshold = 600 (10% of 6000), seed = 4000.
        assert_eq!(
            compute_breakpoints(6000),
            vec![1000, 1600, 2200, 2800, 3400, 4000]
        );
    }

    #[test]
    fn threshold_is_floored() {
        // 10% of 1234 = 123.4 -> 123
        assert_eq!(BreakpointPolicy::default().threshold(1234), 123);
        let bps = compute_breakpoints(1234);
        assert_eq!(bps.last(), Some(&1234));
        assert_eq!(bps.first(), Some(&(1234 - 9 * 123)));
        assert!(bps.windows(2).all(|w| w[1] - w[0] == 123));
    }

    #[test]
    fn zero_width_is_single_zero() {
        assert_eq!(compute_breakpoints(0), vec![0]);
    }

    #[test]
    fn custom_policy() {
        let policy = BreakpointPolicy {
            max_width: 1000,
            pixels_threshold: 250,
            percentage_threshold: 10,
        };
        assert_eq!(policy.breakpoints(3000), vec![400, 700, 1000]);
    }
}
