//! The snap behavior: moves a viewport's container to a point over time.
//!
//! A `Snap` takes exclusive control of the container position while it runs. On construction it
//! cancels deceleration momentum and pauses drag and zoom siblings (unless they are allowed to
//! interrupt it). When it settles, or when the owner removes it, `on_remove` resumes what it
//! paused. Deceleration is never resumed here; `on_release` hands residual velocity back to it.

use bevy::prelude::*;

use crate::animation::PositionTween;
use crate::animation::SnapEasing;
use crate::behaviors::PausableBehavior;
use crate::behaviors::SiblingComponents;
use crate::behaviors::SnapSiblings;
use crate::components::Viewport;
use crate::components::ViewportContainer;
use crate::events::SnapEnd;

/// Configuration for a snap, fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct SnapOptions {
    /// Per-frame decay handed to deceleration on release, if it still has velocity.
    /// Zero means unset and falls back to `0.8`.
    pub friction:           f32,
    /// Zero means unset and falls back to `1000.0`.
    pub duration_ms:        f32,
    pub easing:             SnapEasing,
    /// Treat the point as the new viewport center instead of the new container origin
    pub center:             bool,
    pub stop_on_resize:     bool,
    /// Dragging cancels the snap instead of being paused by it
    pub drag_interrupt:     bool,
    /// Wheel and pinch zoom stay active instead of being paused
    pub zoom_interrupt:     bool,
    pub remove_on_complete: bool,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            friction:           0.8,
            duration_ms:        1000.0,
            easing:             SnapEasing::default(),
            center:             false,
            stop_on_resize:     false,
            drag_interrupt:     false,
            zoom_interrupt:     false,
            remove_on_complete: false,
        }
    }
}

impl SnapOptions {
    pub const fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub const fn with_duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: impl Into<SnapEasing>) -> Self {
        self.easing = easing.into();
        self
    }

    pub const fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    pub const fn stop_on_resize(mut self) -> Self {
        self.stop_on_resize = true;
        self
    }

    pub const fn drag_interrupt(mut self) -> Self {
        self.drag_interrupt = true;
        self
    }

    pub const fn zoom_interrupt(mut self) -> Self {
        self.zoom_interrupt = true;
        self
    }

    pub const fn remove_on_complete(mut self) -> Self {
        self.remove_on_complete = true;
        self
    }

    /// Treats a zero or NaN friction or duration as unset and substitutes the default.
    pub fn resolved(mut self) -> Self {
        let defaults = Self::default();
        if self.friction == 0.0 || self.friction.is_nan() {
            self.friction = defaults.friction;
        }
        if self.duration_ms == 0.0 || self.duration_ms.is_nan() {
            self.duration_ms = defaults.duration_ms;
        }
        self
    }
}

/// What the owner of a `Snap` must do after a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapOutcome {
    Unchanged,
    /// Reset ran; siblings were restored and the snap stays installed, inert
    Settled,
    /// Reset ran; the owner must remove the snap, which runs `on_remove`
    RemoveRequested,
}

/// Snap-to-point behavior attached to a viewport entity.
#[derive(Component, Debug)]
pub struct Snap {
    options:     SnapOptions,
    destination: Vec2,
    moving:      Option<PositionTween>,
    paused:      bool,
    restored:    bool,
}

impl Snap {
    /// Takes control of the container and begins moving it toward `point`.
    pub fn start(
        point: Vec2,
        options: SnapOptions,
        viewport: &Viewport,
        container: &ViewportContainer,
        siblings: &mut SnapSiblings,
    ) -> Self {
        let options = options.resolved();

        if let Some(decelerate) = siblings.decelerate.as_deref_mut() {
            decelerate.reset();
        }
        if !options.drag_interrupt {
            siblings.pause_drag();
        }
        if !options.zoom_interrupt {
            siblings.pause_zoom();
        }

        let destination = if options.center {
            centered_destination(point, viewport, container)
        } else {
            point
        };

        Self {
            options,
            destination,
            moving: Some(PositionTween::new(
                container.position,
                destination,
                options.duration_ms,
                options.easing,
            )),
            paused: false,
            restored: false,
        }
    }

    pub const fn options(&self) -> &SnapOptions { &self.options }

    /// Container position the snap moves to.
    pub const fn destination(&self) -> Vec2 { self.destination }

    /// True while the interpolation is in flight.
    pub const fn is_active(&self) -> bool { self.moving.is_some() }

    /// True once reset ran and the snap no longer moves the container.
    pub const fn is_settled(&self) -> bool { self.moving.is_none() }

    pub fn progress(&self) -> f32 { self.moving.as_ref().map_or(1.0, PositionTween::progress) }

    pub fn remaining_ms(&self) -> f32 {
        self.moving
            .as_ref()
            .map_or(0.0, PositionTween::remaining_ms)
    }

    pub fn on_resize(&mut self, siblings: &mut SnapSiblings) -> SnapOutcome {
        if self.options.stop_on_resize {
            return self.reset(siblings);
        }
        SnapOutcome::Unchanged
    }

    pub fn on_drag_start(&mut self, siblings: &mut SnapSiblings) -> SnapOutcome {
        if self.options.drag_interrupt {
            return self.reset(siblings);
        }
        SnapOutcome::Unchanged
    }

    /// Hands residual drag velocity to deceleration with this snap's friction.
    ///
    /// The snap keeps running: a release during a snap that drag cannot interrupt still changes
    /// the decay factors.
    pub fn on_release(&self, siblings: &mut SnapSiblings) {
        let Some(decelerate) = siblings.decelerate.as_deref_mut() else {
            return;
        };
        if decelerate.residual_velocity() != Vec2::ZERO {
            debug!(
                "Snap: release hands off velocity {:?} with friction {}",
                decelerate.residual_velocity(),
                self.options.friction
            );
            decelerate.set_decay(Vec2::splat(self.options.friction));
        }
    }

    /// Advances the interpolation by `elapsed_ms`, writing the container position.
    pub fn update(
        &mut self,
        elapsed_ms: f32,
        container: &mut ViewportContainer,
        siblings: &mut SnapSiblings,
    ) -> SnapOutcome {
        if self.paused {
            return SnapOutcome::Unchanged;
        }

        let Some(moving) = self.moving.as_mut() else {
            return SnapOutcome::Unchanged;
        };

        if moving.advance(elapsed_ms, &mut container.position) {
            return self.reset(siblings);
        }
        SnapOutcome::Unchanged
    }

    /// Stops the interpolation where it is.
    pub fn reset(&mut self, siblings: &mut SnapSiblings) -> SnapOutcome {
        self.moving = None;
        if self.options.remove_on_complete {
            SnapOutcome::RemoveRequested
        } else {
            self.on_remove(siblings);
            SnapOutcome::Settled
        }
    }

    /// Resumes the siblings paused at construction. Runs at most once.
    pub fn on_remove(&mut self, siblings: &mut SnapSiblings) {
        if self.restored {
            return;
        }
        self.restored = true;

        if !self.options.drag_interrupt {
            siblings.resume_drag();
        }
        if !self.options.zoom_interrupt {
            siblings.resume_zoom();
        }
    }
}

impl PausableBehavior for Snap {
    fn pause(&mut self) { self.paused = true; }

    fn resume(&mut self) { self.paused = false; }

    fn is_paused(&self) -> bool { self.paused }
}

/// Container position that puts `point` at the center of the viewport.
pub fn centered_destination(
    point: Vec2,
    viewport: &Viewport,
    container: &ViewportContainer,
) -> Vec2 {
    (viewport.world_screen_size(container) / 2.0 - point) * container.scale
}

/// System that advances every moving snap by the frame's delta time.
pub fn process_snaps(
    mut commands: Commands,
    time: Res<Time>,
    mut viewports: Query<(Entity, &mut Snap, &mut ViewportContainer, SiblingComponents)>,
) {
    let elapsed_ms = time.delta_secs() * 1000.0;

    for (entity, mut snap, mut container, mut sibling_items) in &mut viewports {
        // Skip without touching `container` so settled snaps don't mark it changed
        if !snap.is_active() || snap.is_paused() {
            continue;
        }

        let mut siblings = SnapSiblings::from_items(&mut sibling_items);
        let outcome = snap.update(elapsed_ms, &mut container, &mut siblings);
        conclude(&mut commands, entity, &snap, true, outcome, false);
    }
}

/// Applies a `SnapOutcome` for a snap on `viewport`: removes it when asked and fires `SnapEnd`
/// if it was moving before the call.
pub(crate) fn conclude(
    commands: &mut Commands,
    viewport: Entity,
    snap: &Snap,
    was_active: bool,
    outcome: SnapOutcome,
    interrupted: bool,
) {
    if outcome == SnapOutcome::Unchanged {
        return;
    }

    // Remove before triggering: a `SnapEnd` observer may start a new snap on this viewport
    if outcome == SnapOutcome::RemoveRequested {
        commands.entity(viewport).remove::<Snap>();
    }

    if was_active {
        debug!(
            "Snap: viewport {viewport:?} ended at {:?} (interrupted: {interrupted})",
            snap.destination()
        );
        commands.trigger(SnapEnd {
            viewport,
            destination: snap.destination(),
            interrupted,
        });
    }
}
