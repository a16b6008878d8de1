//! Events a host sends to a viewport's snap, and lifecycle events a snap fires.

use bevy::prelude::*;

use crate::snap::SnapOptions;

// ============================================================================
// Requests
// ============================================================================

/// Moves the viewport container to `point`, replacing any snap already on the viewport.
/// Without options, `SnapConfig::default_options` applies.
#[derive(EntityEvent, Clone, Debug)]
pub struct SnapTo {
    #[event_target]
    pub viewport: Entity,
    pub point:    Vec2,
    pub options:  Option<SnapOptions>,
}

impl SnapTo {
    pub const fn new(viewport: Entity, point: Vec2) -> Self {
        Self {
            viewport,
            point,
            options: None,
        }
    }

    pub const fn with_options(mut self, options: SnapOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Removes the viewport's snap, restoring the siblings it paused.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct CancelSnap {
    #[event_target]
    pub viewport: Entity,
}

// ============================================================================
// Host input
// ============================================================================

/// The viewport's screen size changed.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct ViewportResized {
    #[event_target]
    pub viewport: Entity,
}

/// A pointer drag began on the viewport.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct DragStarted {
    #[event_target]
    pub viewport: Entity,
}

/// The pointer driving a drag was released.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct DragReleased {
    #[event_target]
    pub viewport: Entity,
}

// ============================================================================
// Snap lifecycle
// ============================================================================

/// Fired when a snap starts moving the container.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SnapBegin {
    #[event_target]
    pub viewport:    Entity,
    pub destination: Vec2,
}

/// Fired when a moving snap stops, either at its destination or because it was reset early.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct SnapEnd {
    #[event_target]
    pub viewport:    Entity,
    pub destination: Vec2,
    pub interrupted: bool,
}
