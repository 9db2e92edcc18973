//! Core `IdeShell` struct definition and constructor.

use std::time::Duration;

use projexpert_common::{
    ActivityItem, Event, EventBus, Notification, NotificationQueue, Viewport,
};
use projexpert_config::ProjexpertConfig;
use projexpert_panel::{
    AffordanceLayout, PanelBounds, PanelController, PanelGeometry, PanelVisibility,
    PointerCaptureSlot,
};
use tokio::sync::{broadcast, mpsc};

use super::status_bar::StatusBar;
use super::types::{ShellMessage, COPILOT_PANEL, EVENT_BUS_CAPACITY};

pub struct IdeShell {
    pub(super) activity: ActivityItem,
    pub(super) copilot: PanelController,
    /// Viewport-level pointer capture shared with the panel controller.
    pub(super) capture: PointerCaptureSlot,
    pub(super) status: StatusBar,
    pub(super) toasts: NotificationQueue,
    pub(super) toast_ttl: Duration,
    pub(super) sync_duration: Duration,
    pub(super) events: EventBus,
    pub(super) messages_tx: mpsc::UnboundedSender<ShellMessage>,
    pub(super) messages_rx: mpsc::UnboundedReceiver<ShellMessage>,
    pub(super) quit_requested: bool,
}

impl IdeShell {
    pub fn new(config: &ProjexpertConfig, viewport: Viewport) -> Self {
        let panel = &config.panel;
        let bounds = PanelBounds {
            min_width: panel.min_width,
            max_width: panel.max_width,
            min_top: panel.min_top,
            reserved_bottom: panel.reserved_bottom,
        };
        let visibility = if panel.open_on_launch {
            PanelVisibility::Open
        } else {
            PanelVisibility::Closed
        };
        let capture = PointerCaptureSlot::new();
        let copilot = PanelController::new(
            COPILOT_PANEL,
            bounds,
            PanelGeometry::new(panel.initial_width, panel.initial_top),
            viewport,
            capture.clone(),
        )
        .with_affordances(AffordanceLayout {
            header_height: panel.header_height,
            resize_hit_width: panel.resize_hit_width,
        })
        .with_visibility(visibility);

        let (messages_tx, messages_rx) = mpsc::unbounded_channel();

        Self {
            activity: ActivityItem::default(),
            copilot,
            capture,
            status: StatusBar::from_config(&config.status_bar),
            toasts: NotificationQueue::new(config.toasts.capacity as usize),
            toast_ttl: Duration::from_millis(u64::from(config.toasts.ttl_ms)),
            sync_duration: Duration::from_millis(u64::from(config.status_bar.sync_duration_ms)),
            events: EventBus::new(EVENT_BUS_CAPACITY),
            messages_tx,
            messages_rx,
            quit_requested: false,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub fn copilot(&self) -> &PanelController {
        &self.copilot
    }

    pub fn activity(&self) -> ActivityItem {
        self.activity
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.copilot.set_viewport(viewport);
    }

    pub(super) fn toast(&mut self, text: &str) {
        tracing::info!("toast: {text}");
        self.toasts.push(Notification::toast(text, self.toast_ttl));
        self.events.publish(Event::Toast(text.to_string()));
    }
}
