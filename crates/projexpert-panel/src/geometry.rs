//! Panel geometry as read by the rendering layer.

use projexpert_common::{Rect, Viewport};
use serde::{Deserialize, Serialize};

/// Width and vertical offset of a panel docked to the right viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub width: f64,
    pub top_offset: f64,
}

impl PanelGeometry {
    pub const INITIAL_WIDTH: f64 = 420.0;
    pub const INITIAL_TOP: f64 = 60.0;

    pub fn new(width: f64, top_offset: f64) -> Self {
        Self { width, top_offset }
    }

    /// Screen rect of the panel frame: right-docked, running from
    /// `top_offset` to the bottom of the viewport.
    pub fn frame_rect(&self, viewport: Viewport) -> Rect {
        Rect {
            x: viewport.width - self.width,
            y: self.top_offset,
            width: self.width,
            height: (viewport.height - self.top_offset).max(0.0),
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::new(Self::INITIAL_WIDTH, Self::INITIAL_TOP)
    }
}
