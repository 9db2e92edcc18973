//! Copilot side panel configuration.

use serde::{Deserialize, Serialize};

/// Bounds and initial geometry of the dockable Copilot panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Narrowest the panel can be resized to, in pixels (valid range: 1-4000).
    pub min_width: f64,
    /// Widest the panel can be resized to, in pixels (must be >= min_width).
    pub max_width: f64,
    /// Topmost offset of the panel frame, in pixels (valid range: 0-1000).
    pub min_top: f64,
    /// Space kept free below the lowest panel offset, in pixels (valid range: 0-2000).
    pub reserved_bottom: f64,
    /// Width on first open (must lie within [min_width, max_width]).
    pub initial_width: f64,
    /// Top offset on first open.
    pub initial_top: f64,
    /// Whether the panel starts open.
    pub open_on_launch: bool,
    /// Height of the draggable header bar, in pixels (valid range: 8-200).
    pub header_height: f64,
    /// Half-width of the resize edge hit zone, in pixels (valid range: 1-32).
    pub resize_hit_width: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_width: 260.0,
            max_width: 880.0,
            min_top: 36.0,
            reserved_bottom: 160.0,
            initial_width: 420.0,
            initial_top: 60.0,
            open_on_launch: false,
            header_height: 40.0,
            resize_hit_width: 6.0,
        }
    }
}
