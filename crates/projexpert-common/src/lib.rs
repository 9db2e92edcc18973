pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, ProjexpertError, ScriptError};
pub use events::{Event, EventBus};
pub use id::new_correlation_id;
pub use notifications::{Notification, NotificationQueue};
pub use types::{ActivityItem, PanelId, Rect, Viewport};

pub type Result<T> = std::result::Result<T, ProjexpertError>;
