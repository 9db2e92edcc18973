//! Interactive panel controller.
//!
//! Turns pointer movement into clamped width and top offset for a panel
//! docked to the right edge of the viewport. At most one drag is active
//! at a time; it holds the viewport pointer capture for its whole life.

mod types;


pub use types::*;

use projexpert_common::{PanelId, Rect, Viewport};
use tracing::debug;

use crate::affordance::{Affordance, AffordanceLayout};
use crate::bounds::PanelBounds;
use crate::capture::{PointerCapture, PointerCaptureSlot};
use crate::geometry::PanelGeometry;
use crate::session::{DragKind, DragSession};
use crate::visibility::PanelVisibility;

/// A drag in progress together with the capture it holds.
#[derive(Debug)]
struct ActiveDrag {
    session: DragSession,
    _capture: PointerCapture,
}

#[derive(Debug)]
pub struct PanelController {
    id: PanelId,
    bounds: PanelBounds,
    affordances: AffordanceLayout,
    geometry: PanelGeometry,
    visibility: PanelVisibility,
    viewport: Viewport,
    capture_slot: PointerCaptureSlot,
    active: Option<ActiveDrag>,
}

impl PanelController {
    /// The starting geometry is clamped against `bounds` for `viewport`.
    pub fn new(
        id: PanelId,
        bounds: PanelBounds,
        geometry: PanelGeometry,
        viewport: Viewport,
        capture_slot: PointerCaptureSlot,
    ) -> Self {
        let geometry = PanelGeometry::new(
            bounds.clamp_width(geometry.width),
            bounds.clamp_top(geometry.top_offset, viewport.height),
        );
        Self {
            id,
            bounds,
            affordances: AffordanceLayout::default(),
            geometry,
            visibility: PanelVisibility::Closed,
            viewport,
            capture_slot,
            active: None,
        }
    }

    pub fn with_affordances(mut self, affordances: AffordanceLayout) -> Self {
        self.affordances = affordances;
        self
    }

    pub fn with_visibility(mut self, visibility: PanelVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn bounds(&self) -> PanelBounds {
        self.bounds
    }

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> ControllerState {
        self.active.as_ref().map(|a| a.session.kind).into()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Screen rect of the panel frame for the current viewport.
    pub fn frame_rect(&self) -> Rect {
        self.geometry.frame_rect(self.viewport)
    }

    /// Which drag affordance, if any, is under the point. Closed panels
    /// have none.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Affordance> {
        if !self.visibility.is_open() {
            return None;
        }
        self.affordances.hit_test(self.frame_rect(), x, y)
    }

    // =========================================================================
    // DRAG SESSIONS
    // =========================================================================

    /// Start a width drag anchored at `pointer_x` and `current_width`.
    pub fn begin_resize(&mut self, pointer_x: f64, current_width: f64) -> BeginOutcome {
        self.begin(DragSession::resize(pointer_x, current_width))
    }

    /// Start a vertical drag anchored at `pointer_y` and `current_top`.
    pub fn begin_reposition(&mut self, pointer_y: f64, current_top: f64) -> BeginOutcome {
        self.begin(DragSession::reposition(pointer_y, current_top))
    }

    fn begin(&mut self, session: DragSession) -> BeginOutcome {
        if let Some(active) = &self.active {
            debug!(
                panel = %self.id,
                active = %active.session.id,
                requested = ?session.kind,
                "drag already active, ignoring begin"
            );
            return BeginOutcome::AlreadyActive;
        }
        let Some(capture) = self.capture_slot.acquire(self.id) else {
            debug!(panel = %self.id, holder = ?self.capture_slot.holder(), "pointer capture busy");
            return BeginOutcome::CaptureBusy;
        };
        debug!(
            panel = %self.id,
            session = %session.id,
            kind = ?session.kind,
            anchor_pointer = session.anchor_pointer,
            anchor_value = session.anchor_value,
            "drag started"
        );
        self.active = Some(ActiveDrag {
            session,
            _capture: capture,
        });
        BeginOutcome::Started
    }

    /// Apply a pointer position to the active drag.
    ///
    /// The new value is computed from the session anchors, not from the
    /// previous move, and clamped on every call. Returns `None` when idle.
    pub fn on_pointer_move(&mut self, pointer_x: f64, pointer_y: f64) -> Option<GeometryUpdate> {
        let session = &self.active.as_ref()?.session;
        let target = session.target_value(pointer_x, pointer_y);
        let update = match session.kind {
            DragKind::Resize => {
                let width = self.bounds.clamp_width(target);
                self.geometry.width = width;
                GeometryUpdate::Width(width)
            }
            DragKind::Reposition => {
                let top = self.bounds.clamp_top(target, self.viewport.height);
                self.geometry.top_offset = top;
                GeometryUpdate::Top(top)
            }
        };
        Some(update)
    }

    /// End the active drag, if any, and release the pointer capture.
    ///
    /// Safe to call when idle. Returns the session that ended.
    pub fn end_session(&mut self) -> Option<DragSession> {
        let active = self.active.take()?;
        debug!(
            panel = %self.id,
            session = %active.session.id,
            width = self.geometry.width,
            top = self.geometry.top_offset,
            "drag ended"
        );
        Some(active.session)
    }

    // =========================================================================
    // VIEWPORT & VISIBILITY
    // =========================================================================

    /// Record a new viewport size.
    ///
    /// Anchors of an active drag are kept as captured; the next move
    /// clamps against the new height. Geometry is not re-clamped here.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Flip open/closed. Geometry is kept for the next open.
    pub fn toggle_visibility(&mut self) -> PanelVisibility {
        let next = self.visibility.toggled();
        self.set_visibility(next);
        next
    }

    pub fn open(&mut self) {
        self.set_visibility(PanelVisibility::Open);
    }

    pub fn close(&mut self) {
        self.set_visibility(PanelVisibility::Closed);
    }

    /// Closing a panel ends its drag, since the affordance is gone.
    fn set_visibility(&mut self, visibility: PanelVisibility) {
        if visibility == PanelVisibility::Closed {
            self.end_session();
        }
        self.visibility = visibility;
    }
}
