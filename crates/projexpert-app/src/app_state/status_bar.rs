//! Editor status bar toggles.
//!
//! Each button is an explicit two-state enum. Transitions return the
//! toast text to show, if any.

use projexpert_config::schema::StatusBarConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Connected,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiMode {
    Off,
    On,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    Idle,
    Syncing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationMode {
    On,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    pub connection: ConnectionState,
    pub ai_mode: AiMode,
    pub sync: SyncState,
    pub notifications: NotificationMode,
}

impl StatusBar {
    pub fn from_config(config: &StatusBarConfig) -> Self {
        Self {
            connection: if config.connected {
                ConnectionState::Connected
            } else {
                ConnectionState::Offline
            },
            ai_mode: if config.ai_mode { AiMode::On } else { AiMode::Off },
            sync: SyncState::Idle,
            notifications: if config.notifications {
                NotificationMode::On
            } else {
                NotificationMode::Muted
            },
        }
    }

    pub fn toggle_connection(&mut self) -> &'static str {
        match self.connection {
            ConnectionState::Connected => {
                self.connection = ConnectionState::Offline;
                "Disconnected"
            }
            ConnectionState::Offline => {
                self.connection = ConnectionState::Connected;
                "Connected"
            }
        }
    }

    pub fn toggle_ai_mode(&mut self) -> &'static str {
        match self.ai_mode {
            AiMode::Off => {
                self.ai_mode = AiMode::On;
                "AI Mode On"
            }
            AiMode::On => {
                self.ai_mode = AiMode::Off;
                "AI Mode Off"
            }
        }
    }

    /// Idle -> Syncing. Ignored while a sync is already running.
    pub fn begin_sync(&mut self) -> Option<&'static str> {
        match self.sync {
            SyncState::Idle => {
                self.sync = SyncState::Syncing;
                Some("Syncing...")
            }
            SyncState::Syncing => None,
        }
    }

    /// Syncing -> Idle.
    pub fn finish_sync(&mut self) -> Option<&'static str> {
        match self.sync {
            SyncState::Syncing => {
                self.sync = SyncState::Idle;
                Some("Sync Complete")
            }
            SyncState::Idle => None,
        }
    }

    pub fn toggle_notifications(&mut self) -> &'static str {
        match self.notifications {
            NotificationMode::On => {
                self.notifications = NotificationMode::Muted;
                "Notifications Off"
            }
            NotificationMode::Muted => {
                self.notifications = NotificationMode::On;
                "Notifications On"
            }
        }
    }

    // -- Button labels --

    pub fn connection_label(&self) -> &'static str {
        match self.connection {
            ConnectionState::Connected => "Connected",
            ConnectionState::Offline => "Offline",
        }
    }

    pub fn sync_label(&self) -> &'static str {
        match self.sync {
            SyncState::Idle => "Sync",
            SyncState::Syncing => "Syncing...",
        }
    }

    pub fn notifications_label(&self) -> &'static str {
        match self.notifications {
            NotificationMode::On => "Notifications",
            NotificationMode::Muted => "Muted",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::from_config(&StatusBarConfig::default())
    }
}
