use serde::{Deserialize, Serialize};

/// Whether a panel is shown. Independent of its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelVisibility {
    Open,
    #[default]
    Closed,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Open => PanelVisibility::Closed,
            PanelVisibility::Closed => PanelVisibility::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelVisibility::Open
    }

    /// Status bar label for the Copilot indicator.
    pub fn status_label(self) -> &'static str {
        match self {
            PanelVisibility::Open => "Active",
            PanelVisibility::Closed => "Closed",
        }
    }
}
