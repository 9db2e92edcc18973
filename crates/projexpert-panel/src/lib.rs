pub mod affordance;
pub mod bounds;
pub mod capture;
pub mod controller;
pub mod geometry;
pub mod session;
pub mod visibility;

pub use affordance::{Affordance, AffordanceLayout};
pub use bounds::PanelBounds;
pub use capture::{PointerCapture, PointerCaptureSlot};
pub use controller::{BeginOutcome, ControllerState, GeometryUpdate, PanelController};
pub use geometry::PanelGeometry;
pub use session::{DragKind, DragSession};
pub use visibility::PanelVisibility;
