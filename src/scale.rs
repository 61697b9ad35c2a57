//! Breakpoint-driven size multiplier.

use crate::constants::*;

/// Size multiplier applied to body dimensions and to the burst count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(pub f32);

impl ScaleFactor {
    /// Map a viewport width (logical pixels) to its band.
    ///
    /// | width          | factor |
    /// |----------------|--------|
    /// | ≤ 480          | 0.35   |
    /// | ≤ 1024         | 0.40   |
    /// | ≤ 1440         | 0.50   |
    /// | otherwise      | 0.65   |
    ///
    /// NaN lands in the smallest band.
    pub fn for_viewport(width: f32) -> Self {
        if width.is_nan() || width <= BREAKPOINT_MOBILE {
            Self(SCALE_MOBILE)
        } else if width <= BREAKPOINT_TABLET {
            Self(SCALE_TABLET)
        } else if width <= BREAKPOINT_LAPTOP {
            Self(SCALE_LAPTOP)
        } else {
            Self(SCALE_DESKTOP)
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        assert_eq!(ScaleFactor::for_viewport(0.0).get(), 0.35);
        assert_eq!(ScaleFactor::for_viewport(480.0).get(), 0.35);
        assert_eq!(ScaleFactor::for_viewport(481.0).get(), 0.40);
        assert_eq!(ScaleFactor::for_viewport(1024.0).get(), 0.40);
        assert_eq!(ScaleFactor::for_viewport(1025.0).get(), 0.50);
        assert_eq!(ScaleFactor::for_viewport(1440.0).get(), 0.50);
        assert_eq!(ScaleFactor::for_viewport(1441.0).get(), 0.65);
        assert_eq!(ScaleFactor::for_viewport(7680.0).get(), 0.65);
    }

    #[test]
    fn factor_never_decreases_with_width() {
        let allowed = [0.35, 0.40, 0.50, 0.65];
        let mut previous = 0.0;
        for w in (0..4000).step_by(7) {
            let f = ScaleFactor::for_viewport(w as f32).get();
            assert!(allowed.contains(&f), "unexpected factor {f} at width {w}");
            assert!(f >= previous, "factor dropped at width {w}");
            previous = f;
        }
    }

    #[test]
    fn nan_and_negative_widths_use_smallest_band() {
        assert_eq!(ScaleFactor::for_viewport(f32::NAN).get(), 0.35);
        assert_eq!(ScaleFactor::for_viewport(-10.0).get(), 0.35);
    }
}
