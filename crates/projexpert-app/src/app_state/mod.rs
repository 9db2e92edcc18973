//! IDE shell state.
//!
//! Owns the activity bar, status bar, toasts and the Copilot panel
//! controller, and routes pointer input and actions to them. All
//! mutation happens on the task that drives the shell.

mod core;
mod dispatch;
mod input;
mod polling;
mod render;
mod status_bar;
mod types;

pub use self::core::IdeShell;
