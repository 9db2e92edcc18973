//! Pointer routing.
//!
//! Pointer-down is hit tested against the Copilot panel's drag
//! affordances. Moves and releases are viewport-wide: they reach the
//! panel only while it holds the pointer capture, wherever the pointer is.

use projexpert_common::Event;
use projexpert_panel::{Affordance, BeginOutcome, GeometryUpdate};

use super::core::IdeShell;

impl IdeShell {
    /// Handle a pointer press at (x, y).
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let geometry = self.copilot.geometry();
        let outcome = match self.copilot.hit_test(x, y) {
            Some(Affordance::ResizeEdge) => self.copilot.begin_resize(x, geometry.width),
            Some(Affordance::Header) => self.copilot.begin_reposition(y, geometry.top_offset),
            None => return,
        };
        if outcome != BeginOutcome::Started {
            tracing::debug!(?outcome, x, y, "pointer down did not start a drag");
        }
    }

    /// Handle a pointer move anywhere in the viewport.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.copilot_has_capture() {
            return;
        }
        let panel = self.copilot.id();
        match self.copilot.on_pointer_move(x, y) {
            Some(GeometryUpdate::Width(width)) => {
                self.events.publish(Event::PanelResized { panel, width });
            }
            Some(GeometryUpdate::Top(top)) => {
                self.events.publish(Event::PanelMoved { panel, top });
            }
            None => {}
        }
    }

    /// Handle a pointer release anywhere in the viewport.
    pub fn pointer_up(&mut self) {
        if self.copilot_has_capture() {
            self.copilot.end_session();
        }
    }

    fn copilot_has_capture(&self) -> bool {
        self.capture.holder() == Some(self.copilot.id())
    }
}
