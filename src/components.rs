//! Components describing the host viewport and the sibling behaviors a snap coordinates with.

use bevy::prelude::*;

use crate::behaviors::InertialBehavior;
use crate::behaviors::PausableBehavior;

/// Pannable, zoomable 2D viewport. Screen size is in pixels.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
#[require(ViewportContainer)]
pub struct Viewport {
    pub screen_width:  f32,
    pub screen_height: f32,
}

impl Viewport {
    pub const fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// World units visible on screen, per axis, at the container's current scale.
    pub fn world_screen_size(&self, container: &ViewportContainer) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height) / container.scale
    }
}

/// Transform of the world content inside a viewport.
///
/// While a `Snap` is moving it is the only writer of `position`. Drag, wheel and pinch systems
/// are expected to check their `is_paused()` flag before writing.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ViewportContainer {
    pub position: Vec2,
    pub scale:    Vec2,
}

impl Default for ViewportContainer {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale:    Vec2::ONE,
        }
    }
}

/// Drag-to-pan behavior state.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
pub struct DragPan {
    pub paused: bool,
}

/// Mouse wheel zoom behavior state.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
pub struct WheelZoom {
    pub paused: bool,
}

/// Two-finger pinch zoom behavior state.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component, Default)]
pub struct PinchZoom {
    pub paused: bool,
}

macro_rules! impl_pausable {
    ($($behavior:ty),*) => {
        $(
            impl PausableBehavior for $behavior {
                fn pause(&mut self) { self.paused = true; }

                fn resume(&mut self) { self.paused = false; }

                fn is_paused(&self) -> bool { self.paused }
            }
        )*
    };
}

impl_pausable!(DragPan, WheelZoom, PinchZoom);

/// Inertial deceleration state: residual velocity left by a drag release and the fraction of it
/// kept each frame.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Decelerate {
    pub velocity:       Vec2,
    pub percent_change: Vec2,
}

impl Default for Decelerate {
    fn default() -> Self {
        Self {
            velocity:       Vec2::ZERO,
            percent_change: Vec2::splat(Self::DEFAULT_FRICTION),
        }
    }
}

impl Decelerate {
    pub const DEFAULT_FRICTION: f32 = 0.95;
}

impl InertialBehavior for Decelerate {
    fn reset(&mut self) { self.velocity = Vec2::ZERO; }

    fn residual_velocity(&self) -> Vec2 { self.velocity }

    fn set_decay(&mut self, decay: Vec2) { self.percent_change = decay; }
}
