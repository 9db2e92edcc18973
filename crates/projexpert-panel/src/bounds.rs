//! Clamping ranges for panel width and top offset.

use serde::{Deserialize, Serialize};

/// Resize and reposition limits of a docked panel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelBounds {
    pub min_width: f64,
    pub max_width: f64,
    pub min_top: f64,
    /// Space kept free between the lowest top offset and the viewport bottom.
    pub reserved_bottom: f64,
}

impl PanelBounds {
    pub const MIN_WIDTH: f64 = 260.0;
    pub const MAX_WIDTH: f64 = 880.0;
    pub const MIN_TOP: f64 = 36.0;
    pub const RESERVED_BOTTOM: f64 = 160.0;

    /// Clamp a width into `[min_width, max_width]`.
    ///
    /// `max_width` wins if the bounds cross.
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.max(self.min_width).min(self.max_width)
    }

    /// Highest allowed top offset for a viewport of the given height.
    pub fn max_top(&self, viewport_height: f64) -> f64 {
        viewport_height - self.reserved_bottom
    }

    /// Clamp a top offset into `[min_top, viewport_height - reserved_bottom]`.
    ///
    /// `min_top` wins on viewports too short to hold the range.
    pub fn clamp_top(&self, top: f64, viewport_height: f64) -> f64 {
        top.min(self.max_top(viewport_height)).max(self.min_top)
    }
}

impl Default for PanelBounds {
    fn default() -> Self {
        Self {
            min_width: Self::MIN_WIDTH,
            max_width: Self::MAX_WIDTH,
            min_top: Self::MIN_TOP,
            reserved_bottom: Self::RESERVED_BOTTOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let b = PanelBounds::default();
        assert_eq!(
            (b.min_width, b.max_width, b.min_top, b.reserved_bottom),
            (260.0, 880.0, 36.0, 160.0)
        );
    }

    #[test]
    fn clamp_width_inside_range_is_identity() {
        assert_eq!(PanelBounds::default().clamp_width(420.0), 420.0);
    }

    #[test]
    fn clamp_width_limits() {
        let b = PanelBounds::default();
        assert_eq!(b.clamp_width(100.0), 260.0);
        assert_eq!(b.clamp_width(-50.0), 260.0);
        assert_eq!(b.clamp_width(2000.0), 880.0);
    }

    #[test]
    fn clamp_width_crossed_bounds_takes_max() {
        let b = PanelBounds {
            min_width: 500.0,
            max_width: 300.0,
            ..PanelBounds::default()
        };
        assert_eq!(b.clamp_width(400.0), 300.0);
    }

    #[test]
    fn clamp_top_limits() {
        let b = PanelBounds::default();
        assert_eq!(b.clamp_top(0.0, 900.0), 36.0);
        assert_eq!(b.clamp_top(300.0, 900.0), 300.0);
        assert_eq!(b.clamp_top(800.0, 900.0), 740.0);
    }

    #[test]
    fn clamp_top_short_viewport_pins_to_min_top() {
        let b = PanelBounds::default();
        // max_top = 150 - 160 = -10, below min_top
        assert_eq!(b.max_top(150.0), -10.0);
        assert_eq!(b.clamp_top(100.0, 150.0), 36.0);
        assert_eq!(b.clamp_top(-100.0, 150.0), 36.0);
    }

    #[test]
    fn clamp_does_not_panic_on_nan_bounds() {
        let b = PanelBounds {
            max_width: f64::NAN,
            ..PanelBounds::default()
        };
        // f64::max/min ignore NaN operands.
        assert_eq!(b.clamp_width(100.0), 260.0);
    }
}
