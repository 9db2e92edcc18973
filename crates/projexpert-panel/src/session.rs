//! Transient record of an in-progress resize or reposition drag.

use projexpert_common::new_correlation_id;
use serde::Serialize;

/// Which geometry value a drag adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// Horizontal drag on the resize edge; adjusts width.
    Resize,
    /// Vertical drag on the header bar; adjusts top offset.
    Reposition,
}

/// Anchors captured when a drag starts.
///
/// For `Resize` the pointer anchor is an x coordinate and the geometry
/// anchor is the width; for `Reposition` they are a y coordinate and the
/// top offset.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    pub anchor_pointer: f64,
    pub anchor_value: f64,
    /// Correlates the begin/end log lines of one drag.
    pub id: String,
}

impl DragSession {
    pub fn resize(pointer_x: f64, width: f64) -> Self {
        Self::new(DragKind::Resize, pointer_x, width)
    }

    pub fn reposition(pointer_y: f64, top: f64) -> Self {
        Self::new(DragKind::Reposition, pointer_y, top)
    }

    fn new(kind: DragKind, anchor_pointer: f64, anchor_value: f64) -> Self {
        Self {
            kind,
            anchor_pointer,
            anchor_value,
            id: new_correlation_id(),
        }
    }

    /// Unclamped geometry value for the pointer at (x, y).
    ///
    /// The panel is docked to the right edge, so a resize grows as the
    /// pointer moves left.
    pub fn target_value(&self, pointer_x: f64, pointer_y: f64) -> f64 {
        match self.kind {
            DragKind::Resize => self.anchor_value + (self.anchor_pointer - pointer_x),
            DragKind::Reposition => self.anchor_value + (pointer_y - self.anchor_pointer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_grows_when_pointer_moves_left() {
        let s = DragSession::resize(500.0, 420.0);
        assert_eq!(s.target_value(440.0, 0.0), 480.0);
        assert_eq!(s.target_value(560.0, 0.0), 360.0);
    }

    #[test]
    fn resize_ignores_vertical_movement() {
        let s = DragSession::resize(500.0, 420.0);
        assert_eq!(s.target_value(500.0, 9999.0), 420.0);
    }

    #[test]
    fn reposition_follows_pointer_down() {
        let s = DragSession::reposition(100.0, 60.0);
        assert_eq!(s.target_value(0.0, 150.0), 110.0);
        assert_eq!(s.target_value(0.0, 40.0), 0.0);
    }

    #[test]
    fn reposition_ignores_horizontal_movement() {
        let s = DragSession::reposition(100.0, 60.0);
        assert_eq!(s.target_value(-300.0, 100.0), 60.0);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = DragSession::resize(0.0, 0.0);
        let b = DragSession::resize(0.0, 0.0);
        assert_eq!(a.id.len(), 8);
        assert_ne!(a.id, b.id);
    }
}
