use serde::Serialize;

use crate::session::DragKind;

/// Interaction state of a panel controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    Idle,
    Resizing,
    Repositioning,
}

impl From<Option<DragKind>> for ControllerState {
    fn from(kind: Option<DragKind>) -> Self {
        match kind {
            None => ControllerState::Idle,
            Some(DragKind::Resize) => ControllerState::Resizing,
            Some(DragKind::Reposition) => ControllerState::Repositioning,
        }
    }
}

/// Result of asking the controller to start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    Started,
    /// A drag is already in progress on this panel; it was left untouched.
    AlreadyActive,
    /// Another panel holds the viewport pointer capture.
    CaptureBusy,
}

/// Geometry value changed by a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryUpdate {
    Width(f64),
    Top(f64),
}
