//! Observers that wire host events to the viewport's snap.

use bevy::prelude::*;

use crate::behaviors::SiblingComponents;
use crate::behaviors::SnapSiblings;
use crate::components::Viewport;
use crate::components::ViewportContainer;
use crate::config::SnapConfig;
use crate::events::CancelSnap;
use crate::events::DragReleased;
use crate::events::DragStarted;
use crate::events::SnapBegin;
use crate::events::SnapEnd;
use crate::events::SnapTo;
use crate::events::ViewportResized;
use crate::snap::Snap;
use crate::snap::conclude;

/// Observer for `SnapTo` - installs a new `Snap` on the viewport.
/// A snap already on the viewport is cleaned up first, so its siblings are resumed before the
/// new snap pauses them again.
pub fn on_snap_to(
    snap_to: On<SnapTo>,
    mut commands: Commands,
    config: Res<SnapConfig>,
    mut viewports: Query<(
        &Viewport,
        &ViewportContainer,
        Option<&mut Snap>,
        SiblingComponents,
    )>,
) {
    let viewport_entity = snap_to.viewport;
    let point = snap_to.point;
    let options = snap_to.options.unwrap_or(config.default_options);

    let Ok((viewport, container, previous, mut sibling_items)) =
        viewports.get_mut(viewport_entity)
    else {
        warn!("SnapTo: entity {viewport_entity:?} has no Viewport");
        return;
    };

    let mut siblings = SnapSiblings::from_items(&mut sibling_items);

    if let Some(mut previous) = previous {
        if previous.is_active() {
            commands.trigger(SnapEnd {
                viewport:    viewport_entity,
                destination: previous.destination(),
                interrupted: true,
            });
        }
        previous.on_remove(&mut siblings);
    }

    let snap = Snap::start(point, options, viewport, container, &mut siblings);
    let destination = snap.destination();

    info!(
        "SnapTo: viewport {viewport_entity:?} from {:?} to {destination:?} over {:.0}ms",
        container.position,
        snap.options().duration_ms
    );

    // Insert before triggering: a `SnapBegin` observer may cancel or replace this snap
    commands.entity(viewport_entity).insert(snap);
    commands.trigger(SnapBegin {
        viewport: viewport_entity,
        destination,
    });
}

/// Observer for `ViewportResized` - stops the snap if it was configured to.
pub fn on_viewport_resized(
    resized: On<ViewportResized>,
    mut commands: Commands,
    mut viewports: Query<(&mut Snap, SiblingComponents)>,
) {
    let viewport_entity = resized.viewport;
    let Ok((mut snap, mut sibling_items)) = viewports.get_mut(viewport_entity) else {
        return;
    };

    let was_active = snap.is_active();
    let outcome = snap.on_resize(&mut SnapSiblings::from_items(&mut sibling_items));
    conclude(&mut commands, viewport_entity, &snap, was_active, outcome, true);
}

/// Observer for `DragStarted` - stops the snap if dragging may interrupt it.
pub fn on_drag_started(
    drag: On<DragStarted>,
    mut commands: Commands,
    mut viewports: Query<(&mut Snap, SiblingComponents)>,
) {
    let viewport_entity = drag.viewport;
    let Ok((mut snap, mut sibling_items)) = viewports.get_mut(viewport_entity) else {
        return;
    };

    let was_active = snap.is_active();
    let outcome = snap.on_drag_start(&mut SnapSiblings::from_items(&mut sibling_items));
    conclude(&mut commands, viewport_entity, &snap, was_active, outcome, true);
}

/// Observer for `DragReleased` - hands residual drag velocity to deceleration.
pub fn on_drag_released(
    release: On<DragReleased>,
    mut viewports: Query<(&Snap, SiblingComponents)>,
) {
    let Ok((snap, mut sibling_items)) = viewports.get_mut(release.viewport) else {
        return;
    };

    snap.on_release(&mut SnapSiblings::from_items(&mut sibling_items));
}

/// Observer for `CancelSnap` - removes the snap; cleanup runs in the removal observer.
pub fn on_cancel_snap(
    cancel: On<CancelSnap>,
    mut commands: Commands,
    snaps: Query<(), With<Snap>>,
) {
    if snaps.contains(cancel.viewport) {
        commands.entity(cancel.viewport).remove::<Snap>();
    }
}

/// Observer that restores siblings when a `Snap` is removed, whether it removed itself on
/// completion or the host removed it.
pub fn restore_siblings_on_snap_removed(
    remove: On<Remove, Snap>,
    mut commands: Commands,
    mut viewports: Query<(&mut Snap, SiblingComponents)>,
) {
    let entity = remove.entity;

    let Ok((mut snap, mut sibling_items)) = viewports.get_mut(entity) else {
        return;
    };

    if snap.is_active() {
        commands.trigger(SnapEnd {
            viewport:    entity,
            destination: snap.destination(),
            interrupted: true,
        });
    }

    debug!("Snap: removed from viewport {entity:?}, restoring siblings");
    snap.on_remove(&mut SnapSiblings::from_items(&mut sibling_items));
}
