//! Internal types and constants for the app state module.

use projexpert_common::PanelId;

/// Messages sent back to the shell from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellMessage {
    /// The sync timer elapsed.
    SyncFinished,
}

/// Id of the Copilot side panel.
pub(super) const COPILOT_PANEL: PanelId = PanelId(1);

/// Capacity of the shell's event bus.
pub(super) const EVENT_BUS_CAPACITY: usize = 64;
