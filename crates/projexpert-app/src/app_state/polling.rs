//! Background timers and the message drain that applies their results.

use projexpert_common::Event;
use tokio::sync::mpsc::error::TryRecvError;

use super::core::IdeShell;
use super::types::ShellMessage;

impl IdeShell {
    /// Start the timer that completes the running sync.
    ///
    /// Must be called from within a tokio runtime.
    pub(super) fn spawn_sync_timer(&self) {
        let tx = self.messages_tx.clone();
        let duration = self.sync_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // The shell may be gone by now.
            let _ = tx.send(ShellMessage::SyncFinished);
        });
    }

    /// Apply every message that background tasks have sent so far.
    /// Returns how many were applied.
    pub fn poll_messages(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.messages_rx.try_recv() {
                Ok(message) => {
                    self.apply_message(message);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    fn apply_message(&mut self, message: ShellMessage) {
        match message {
            ShellMessage::SyncFinished => {
                if let Some(text) = self.status.finish_sync() {
                    self.toast(text);
                    self.events.publish(Event::SyncCompleted);
                }
            }
        }
    }
}
