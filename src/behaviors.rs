//! Capability traits for the sibling behaviors a snap pauses, resumes and resets.

use bevy::prelude::*;

use crate::components::Decelerate;
use crate::components::DragPan;
use crate::components::PinchZoom;
use crate::components::WheelZoom;

/// A behavior that can be frozen and thawed without losing its state.
pub trait PausableBehavior {
    fn pause(&mut self);

    fn resume(&mut self);

    fn is_paused(&self) -> bool;
}

/// A behavior that keeps moving the camera after input is released.
pub trait InertialBehavior {
    /// Cancels residual momentum.
    fn reset(&mut self);

    fn residual_velocity(&self) -> Vec2;

    /// Sets the per-frame decay factor for both axes.
    fn set_decay(&mut self, decay: Vec2);
}

/// Query data for the sibling components of a viewport entity.
pub type SiblingComponents = (
    Option<&'static mut DragPan>,
    Option<&'static mut WheelZoom>,
    Option<&'static mut PinchZoom>,
    Option<&'static mut Decelerate>,
);

/// Query item produced by `SiblingComponents`.
pub type SiblingItems<'w> = (
    Option<Mut<'w, DragPan>>,
    Option<Mut<'w, WheelZoom>>,
    Option<Mut<'w, PinchZoom>>,
    Option<Mut<'w, Decelerate>>,
);

/// Sibling behaviors installed on the same viewport. `None` means not installed.
#[derive(Default)]
pub struct SnapSiblings<'a> {
    pub drag:       Option<&'a mut dyn PausableBehavior>,
    pub wheel:      Option<&'a mut dyn PausableBehavior>,
    pub pinch:      Option<&'a mut dyn PausableBehavior>,
    pub decelerate: Option<&'a mut dyn InertialBehavior>,
}

impl<'a> SnapSiblings<'a> {
    /// Builds the sibling set from the optional components of a viewport entity.
    pub fn from_components(
        drag: Option<&'a mut DragPan>,
        wheel: Option<&'a mut WheelZoom>,
        pinch: Option<&'a mut PinchZoom>,
        decelerate: Option<&'a mut Decelerate>,
    ) -> Self {
        Self {
            drag:       drag.map(|d| d as &mut dyn PausableBehavior),
            wheel:      wheel.map(|w| w as &mut dyn PausableBehavior),
            pinch:      pinch.map(|p| p as &mut dyn PausableBehavior),
            decelerate: decelerate.map(|d| d as &mut dyn InertialBehavior),
        }
    }

    pub fn from_items(items: &'a mut SiblingItems<'_>) -> Self {
        let (drag, wheel, pinch, decelerate) = items;
        Self::from_components(
            drag.as_deref_mut(),
            wheel.as_deref_mut(),
            pinch.as_deref_mut(),
            decelerate.as_deref_mut(),
        )
    }

    pub(crate) fn pause_drag(&mut self) {
        if let Some(drag) = self.drag.as_deref_mut() {
            drag.pause();
        }
    }

    pub(crate) fn resume_drag(&mut self) {
        if let Some(drag) = self.drag.as_deref_mut() {
            drag.resume();
        }
    }

    pub(crate) fn pause_zoom(&mut self) {
        for zoom in [self.wheel.as_deref_mut(), self.pinch.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            zoom.pause();
        }
    }

    pub(crate) fn resume_zoom(&mut self) {
        for zoom in [self.wheel.as_deref_mut(), self.pinch.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            zoom.resume();
        }
    }
}
