//! Viewport-level pointer capture.
//!
//! While a drag is active, pointer moves and releases anywhere in the
//! viewport belong to the dragging panel. The viewport owns one
//! `PointerCaptureSlot`; a panel holds it through a `PointerCapture`
//! guard, and dropping the guard frees the slot. The guard lives inside
//! the active drag, so ending the drag or dropping the panel both release
//! the capture.

use std::cell::Cell;
use std::rc::Rc;

use projexpert_common::PanelId;

/// The viewport's single capture slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct PointerCaptureSlot {
    holder: Rc<Cell<Option<PanelId>>>,
}

impl PointerCaptureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel currently receiving viewport pointer events, if any.
    pub fn holder(&self) -> Option<PanelId> {
        self.holder.get()
    }

    pub fn is_captured(&self) -> bool {
        self.holder.get().is_some()
    }

    /// Claim the slot for `panel`. Returns `None` if it is already held.
    pub fn acquire(&self, panel: PanelId) -> Option<PointerCapture> {
        if self.holder.get().is_some() {
            return None;
        }
        self.holder.set(Some(panel));
        Some(PointerCapture {
            slot: Rc::clone(&self.holder),
            panel,
        })
    }
}

/// Proof that a panel holds the viewport capture. Releases it on drop.
#[derive(Debug)]
pub struct PointerCapture {
    slot: Rc<Cell<Option<PanelId>>>,
    panel: PanelId,
}

impl PointerCapture {
    pub fn panel(&self) -> PanelId {
        self.panel
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if self.slot.get() == Some(self.panel) {
            self.slot.set(None);
        }
    }
}
