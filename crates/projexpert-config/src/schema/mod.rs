//! Configuration schema types for the Projexpert shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the IDE mock.

mod panel;
mod status_bar;
mod system;
mod viewport;

pub use panel::*;
pub use status_bar::*;
pub use system::*;
pub use viewport::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ProjexpertConfig {
    pub panel: PanelConfig,
    pub viewport: ViewportConfig,
    pub status_bar: StatusBarConfig,
    pub toasts: ToastConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
