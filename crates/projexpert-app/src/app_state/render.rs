//! Frame snapshots for the rendering layer.

use projexpert_common::{ActivityItem, Rect, Viewport};
use projexpert_panel::{ControllerState, PanelGeometry, PanelVisibility};
use serde::Serialize;

use super::core::IdeShell;
use super::status_bar::AiMode;

/// Everything needed to draw one frame of the shell.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub viewport: Viewport,
    pub activity: ActivityItem,
    pub copilot: CopilotFrame,
    pub status_bar: StatusBarFrame,
    pub toasts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopilotFrame {
    pub visibility: PanelVisibility,
    /// "Active" or "Closed", as shown in the global status bar.
    pub status: &'static str,
    pub state: ControllerState,
    pub geometry: PanelGeometry,
    pub frame: Rect,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarFrame {
    pub connection: &'static str,
    pub ai_mode: bool,
    pub sync: &'static str,
    pub notifications: &'static str,
}

impl IdeShell {
    /// Snapshot current state. Expired toasts are dropped.
    pub fn render_frame(&mut self) -> Frame {
        let toasts = self
            .toasts
            .visible()
            .iter()
            .map(|n| n.text.clone())
            .collect();
        let visibility = self.copilot.visibility();

        Frame {
            viewport: self.copilot.viewport(),
            activity: self.activity,
            copilot: CopilotFrame {
                visibility,
                status: visibility.status_label(),
                state: self.copilot.state(),
                geometry: self.copilot.geometry(),
                frame: self.copilot.frame_rect(),
            },
            status_bar: StatusBarFrame {
                connection: self.status.connection_label(),
                ai_mode: self.status.ai_mode == AiMode::On,
                sync: self.status.sync_label(),
                notifications: self.status.notifications_label(),
            },
            toasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::IdeShell;
    use projexpert_common::{Action, ActivityItem, Viewport};
    use projexpert_config::ProjexpertConfig;

    #[test]
    fn initial_frame() {
        let mut shell = IdeShell::new(&ProjexpertConfig::default(), Viewport::new(1440.0, 900.0));
        let frame = shell.render_frame();
        assert_eq!(frame.activity, ActivityItem::Explorer);
        assert_eq!(frame.copilot.status, "Closed");
        assert_eq!(frame.copilot.geometry.width, 420.0);
        assert_eq!(frame.copilot.frame.x, 1020.0);
        assert_eq!(frame.status_bar.connection, "Connected");
        assert!(!frame.status_bar.ai_mode);
        assert_eq!(frame.status_bar.sync, "Sync");
        assert_eq!(frame.status_bar.notifications, "Notifications");
        assert!(frame.toasts.is_empty());
    }

    #[test]
    fn first_frame_is_in_bounds() {
        let mut config = ProjexpertConfig::default();
        config.panel.initial_top = 5.0;
        assert!(projexpert_config::validation::validate(&config).is_ok());
        let frame = IdeShell::new(&config, Viewport::new(1440.0, 900.0)).render_frame();
        assert_eq!(frame.copilot.geometry.top_offset, 36.0);

        let mut shell = IdeShell::new(&ProjexpertConfig::default(), Viewport::new(1440.0, 180.0));
        let frame = shell.render_frame();
        assert_eq!(frame.copilot.geometry.top_offset, 36.0);
        assert_eq!(frame.copilot.frame.y, 36.0);
    }

    #[test]
    fn frame_reflects_actions() {
        let mut shell = IdeShell::new(&ProjexpertConfig::default(), Viewport::new(1440.0, 900.0));
        shell.dispatch(Action::OpenCopilot);
        shell.dispatch(Action::ToggleAiMode);
        shell.dispatch(Action::SelectActivity(ActivityItem::Terminal));
        let frame = shell.render_frame();
        assert_eq!(frame.copilot.status, "Active");
        assert!(frame.status_bar.ai_mode);
        assert_eq!(frame.activity, ActivityItem::Terminal);
        assert_eq!(frame.toasts, ["AI Mode On"]);
    }

    #[test]
    fn frame_serializes_as_json() {
        let mut shell = IdeShell::new(&ProjexpertConfig::default(), Viewport::new(1440.0, 900.0));
        shell.dispatch(Action::OpenCopilot);
        shell.pointer_down(1200.0, 80.0);
        let json = serde_json::to_value(shell.render_frame()).unwrap();
        assert_eq!(json["copilot"]["visibility"], "open");
        assert_eq!(json["copilot"]["state"], "repositioning");
        assert_eq!(json["copilot"]["geometry"]["top_offset"], 60.0);
        assert_eq!(json["activity"], "explorer");
        assert_eq!(json["viewport"]["width"], 1440.0);
    }
}
