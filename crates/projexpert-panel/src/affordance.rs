//! Drag affordance hit testing on the panel frame.
//!
//! The resize edge is a thin vertical strip centred on the panel's left
//! border; the header bar is the top strip of the frame. The resize edge
//! takes precedence where the two overlap.

use projexpert_common::Rect;
use serde::Serialize;

use crate::session::DragKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    ResizeEdge,
    Header,
}

impl Affordance {
    /// The kind of drag a pointer-down on this affordance starts.
    pub fn drag_kind(self) -> DragKind {
        match self {
            Affordance::ResizeEdge => DragKind::Resize,
            Affordance::Header => DragKind::Reposition,
        }
    }
}

/// Sizes of the drag affordances, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordanceLayout {
    pub header_height: f64,
    /// Half-width of the resize hit zone on each side of the left edge.
    pub resize_hit_width: f64,
}

impl AffordanceLayout {
    /// Find which affordance of a panel frame (if any) the point is on.
    pub fn hit_test(&self, frame: Rect, x: f64, y: f64) -> Option<Affordance> {
        let within_height = y >= frame.y && y <= frame.bottom();
        if within_height && (x - frame.x).abs() <= self.resize_hit_width {
            return Some(Affordance::ResizeEdge);
        }
        let header = Rect {
            height: self.header_height.min(frame.height),
            ..frame
        };
        if header.contains(x, y) {
            return Some(Affordance::Header);
        }
        None
    }
}

impl Default for AffordanceLayout {
    fn default() -> Self {
        Self {
            header_height: 40.0,
            resize_hit_width: 6.0,
        }
    }
}
