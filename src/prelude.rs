//! Convenient re-exports for common types and traits

pub use crate::ViewportSnapPlugin;
pub use crate::animation::SnapEasing;
pub use crate::behaviors::InertialBehavior;
pub use crate::behaviors::PausableBehavior;
pub use crate::components::Decelerate;
pub use crate::components::DragPan;
pub use crate::components::PinchZoom;
pub use crate::components::Viewport;
pub use crate::components::ViewportContainer;
pub use crate::components::WheelZoom;
pub use crate::config::SnapConfig;
pub use crate::events::CancelSnap;
pub use crate::events::DragReleased;
pub use crate::events::DragStarted;
pub use crate::events::SnapBegin;
pub use crate::events::SnapEnd;
pub use crate::events::SnapTo;
pub use crate::events::ViewportResized;
pub use crate::snap::Snap;
pub use crate::snap::SnapOptions;
