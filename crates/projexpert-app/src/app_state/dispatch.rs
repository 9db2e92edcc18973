//! Action dispatch: routes an `Action` to the subsystem it affects.

use projexpert_common::{Action, Event};
use projexpert_panel::PanelVisibility;

use super::core::IdeShell;

impl IdeShell {
    /// Dispatch a single action.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch: {}", action.label());

        match action {
            Action::OpenCopilot => {
                self.copilot.open();
                self.publish_visibility();
            }
            Action::CloseCopilot => {
                self.copilot.close();
                self.publish_visibility();
            }
            Action::ToggleCopilot => {
                self.copilot.toggle_visibility();
                self.publish_visibility();
            }
            Action::SelectActivity(item) => {
                if self.activity != item {
                    self.activity = item;
                    self.events.publish(Event::ActivityChanged(item));
                }
            }
            Action::ToggleConnection => {
                let text = self.status.toggle_connection();
                self.toast(text);
            }
            Action::ToggleAiMode => {
                let text = self.status.toggle_ai_mode();
                self.toast(text);
            }
            Action::StartSync => {
                if let Some(text) = self.status.begin_sync() {
                    self.toast(text);
                    self.spawn_sync_timer();
                } else {
                    tracing::debug!("sync already running");
                }
            }
            Action::ToggleNotifications => {
                let text = self.status.toggle_notifications();
                self.toast(text);
            }
            Action::SendFeedback => self.toast("Feedback sent"),
            Action::OpenSettings => self.toast("Settings opened"),
            Action::Quit => {
                self.quit_requested = true;
                self.events.publish(Event::Shutdown);
            }
            Action::None => {}
        }
    }

    fn publish_visibility(&self) {
        let panel = self.copilot.id();
        let event = match self.copilot.visibility() {
            PanelVisibility::Open => Event::PanelOpened(panel),
            PanelVisibility::Closed => Event::PanelClosed(panel),
        };
        self.events.publish(event);
    }
}
