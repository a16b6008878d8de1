// bevy_viewport_snap
// Snap-to-point camera behavior for a 2D pannable, zoomable viewport:
// - Eased interpolation of the viewport container toward a point
// - Pause and resume coordination with drag, wheel, pinch and deceleration behaviors
// - Interrupts from resize, drag start and drag release

use bevy::prelude::*;

mod animation;
mod behaviors;
mod components;
mod config;
mod events;
mod observers;
pub mod prelude;
mod snap;

// Public API - Events
pub use events::CancelSnap;
pub use events::DragReleased;
pub use events::DragStarted;
pub use events::SnapBegin;
pub use events::SnapEnd;
pub use events::SnapTo;
pub use events::ViewportResized;

// Public API - Behavior
pub use snap::Snap;
pub use snap::SnapOptions;
pub use snap::SnapOutcome;
pub use snap::centered_destination;

// Public API - Animation types
pub use animation::EasingParseError;
pub use animation::PositionTween;
pub use animation::SnapEasing;

// Public API - Sibling coordination
pub use behaviors::InertialBehavior;
pub use behaviors::PausableBehavior;
pub use behaviors::SiblingComponents;
pub use behaviors::SiblingItems;
pub use behaviors::SnapSiblings;

// Public API - Components
pub use components::Decelerate;
pub use components::DragPan;
pub use components::PinchZoom;
pub use components::Viewport;
pub use components::ViewportContainer;
pub use components::WheelZoom;

// Public API - Configuration resources
pub use config::SnapConfig;

// Internal - used by plugin, not for external use
use observers::on_cancel_snap;
use observers::on_drag_released;
use observers::on_drag_started;
use observers::on_snap_to;
use observers::on_viewport_resized;
use observers::restore_siblings_on_snap_removed;
use snap::process_snaps;

/// Plugin that adds snap-to-point behavior to `Viewport` entities
pub struct ViewportSnapPlugin;

impl Plugin for ViewportSnapPlugin {
    fn build(&self, app: &mut App) {
        app
            // Register observers for component lifecycle events
            .add_observer(restore_siblings_on_snap_removed)
            // Register observers for custom events
            .add_observer(on_snap_to)
            .add_observer(on_cancel_snap)
            .add_observer(on_viewport_resized)
            .add_observer(on_drag_started)
            .add_observer(on_drag_released)
            // Add systems
            .add_systems(Update, process_snaps)
            // Initialize resources
            .init_resource::<SnapConfig>();
    }
}
