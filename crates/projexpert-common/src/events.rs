use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{ActivityItem, PanelId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PanelOpened(PanelId),
    PanelClosed(PanelId),
    PanelResized { panel: PanelId, width: f64 },
    PanelMoved { panel: PanelId, top: f64 },
    ActivityChanged(ActivityItem),
    SyncCompleted,
    Toast(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
