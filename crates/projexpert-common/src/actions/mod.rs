mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityItem;

    #[test]
    fn status_bar_actions_have_labels() {
        for action in [
            Action::ToggleConnection,
            Action::ToggleAiMode,
            Action::StartSync,
            Action::ToggleNotifications,
        ] {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn select_activity_labels_follow_item() {
        for item in ActivityItem::ALL {
            assert_eq!(Action::SelectActivity(item).label(), item.label());
        }
    }

    #[test]
    fn unit_actions_deserialize_from_strings() {
        let action: Action = serde_json::from_str("\"toggle_copilot\"").unwrap();
        assert_eq!(action, Action::ToggleCopilot);
        let action: Action = serde_json::from_str("\"start_sync\"").unwrap();
        assert_eq!(action, Action::StartSync);
    }

    #[test]
    fn select_activity_deserializes_from_object() {
        let action: Action = serde_json::from_str(r#"{"select_activity":"search"}"#).unwrap();
        assert_eq!(action, Action::SelectActivity(ActivityItem::Search));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(serde_json::from_str::<Action>("\"launch_rocket\"").is_err());
    }
}
