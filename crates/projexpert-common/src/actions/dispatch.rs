use super::Action;
use crate::types::ActivityItem;

impl Action {
    /// Human-readable label, used for button tooltips and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenCopilot => "Open Copilot",
            Action::CloseCopilot => "Close",
            Action::ToggleCopilot => "Toggle Copilot",
            Action::SelectActivity(ActivityItem::Explorer) => "Explorer",
            Action::SelectActivity(ActivityItem::Search) => "Search",
            Action::SelectActivity(ActivityItem::Source) => "Source",
            Action::SelectActivity(ActivityItem::Ai) => "AI",
            Action::SelectActivity(ActivityItem::Terminal) => "Terminal",
            Action::SelectActivity(ActivityItem::Settings) => "Settings",
            Action::ToggleConnection => "Toggle Connection",
            Action::ToggleAiMode => "AI Mode",
            Action::StartSync => "Sync",
            Action::ToggleNotifications => "Toggle Notifications",
            Action::SendFeedback => "Feedback",
            Action::OpenSettings => "Settings",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }
}
