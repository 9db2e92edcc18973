use serde::{Deserialize, Serialize};

use crate::types::ActivityItem;

/// Every user-triggerable action in the IDE shell.
///
/// Toolbar buttons, status bar buttons and scripts all resolve to an
/// `Action`. The shell dispatcher matches on this enum to route to
/// subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // -- Copilot panel --
    OpenCopilot,
    CloseCopilot,
    ToggleCopilot,

    // -- Activity bar --
    SelectActivity(ActivityItem),

    // -- Status bar --
    ToggleConnection,
    ToggleAiMode,
    StartSync,
    ToggleNotifications,

    // -- Footer --
    SendFeedback,
    OpenSettings,

    // -- App --
    Quit,

    // -- Noop --
    None,
}
