//! Status bar toggle defaults.

use serde::{Deserialize, Serialize};

/// Initial state of the editor status bar buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    pub connected: bool,
    pub ai_mode: bool,
    pub notifications: bool,
    /// How long a sync takes before it reports completion, in milliseconds
    /// (valid range: 1-60000).
    pub sync_duration_ms: u32,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            connected: true,
            ai_mode: false,
            notifications: true,
            sync_duration_ms: 1200,
        }
    }
}
