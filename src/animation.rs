//! Easing curves and the single position tween driven by a snap.

use std::str::FromStr;

use bevy::math::curve::Curve;
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

/// Returned when an easing name is not one of the easings.net names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EasingParseError {
    #[error("unknown easing name `{0}`")]
    UnknownName(String),
}

/// Easing curve for a snap: one of bevy's `EaseFunction`s or a custom function.
///
/// Custom functions receive normalized progress in `[0, 1]` and should return `0.0` at `0.0`
/// and `1.0` at `1.0`.
#[derive(Clone, Copy, Debug)]
pub enum SnapEasing {
    Function(EaseFunction),
    Custom(fn(f32) -> f32),
}

impl Default for SnapEasing {
    fn default() -> Self { Self::Function(EaseFunction::SineInOut) }
}

impl From<EaseFunction> for SnapEasing {
    fn from(function: EaseFunction) -> Self { Self::Function(function) }
}

impl SnapEasing {
    /// Maps normalized progress to eased progress. `t` is clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Function(function) => function.sample_clamped(t),
            Self::Custom(function) => function(t),
        }
    }
}

impl FromStr for SnapEasing {
    type Err = EasingParseError;

    /// Parses the easings.net names, e.g. `easeInOutSine` or `linear`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let function = match name {
            "linear" => EaseFunction::Linear,
            "easeInQuad" => EaseFunction::QuadraticIn,
            "easeOutQuad" => EaseFunction::QuadraticOut,
            "easeInOutQuad" => EaseFunction::QuadraticInOut,
            "easeInCubic" => EaseFunction::CubicIn,
            "easeOutCubic" => EaseFunction::CubicOut,
            "easeInOutCubic" => EaseFunction::CubicInOut,
            "easeInQuart" => EaseFunction::QuarticIn,
            "easeOutQuart" => EaseFunction::QuarticOut,
            "easeInOutQuart" => EaseFunction::QuarticInOut,
            "easeInQuint" => EaseFunction::QuinticIn,
            "easeOutQuint" => EaseFunction::QuinticOut,
            "easeInOutQuint" => EaseFunction::QuinticInOut,
            "easeInSine" => EaseFunction::SineIn,
            "easeOutSine" => EaseFunction::SineOut,
            "easeInOutSine" => EaseFunction::SineInOut,
            "easeInExpo" => EaseFunction::ExponentialIn,
            "easeOutExpo" => EaseFunction::ExponentialOut,
            "easeInOutExpo" => EaseFunction::ExponentialInOut,
            "easeInCirc" => EaseFunction::CircularIn,
            "easeOutCirc" => EaseFunction::CircularOut,
            "easeInOutCirc" => EaseFunction::CircularInOut,
            "easeInBack" => EaseFunction::BackIn,
            "easeOutBack" => EaseFunction::BackOut,
            "easeInOutBack" => EaseFunction::BackInOut,
            "easeInElastic" => EaseFunction::ElasticIn,
            "easeOutElastic" => EaseFunction::ElasticOut,
            "easeInOutElastic" => EaseFunction::ElasticInOut,
            "easeInBounce" => EaseFunction::BounceIn,
            "easeOutBounce" => EaseFunction::BounceOut,
            "easeInOutBounce" => EaseFunction::BounceInOut,
            _ => return Err(EasingParseError::UnknownName(name.to_string())),
        };
        Ok(Self::Function(function))
    }
}

/// Time-driven interpolation of a 2D position from `start` to `end`.
#[derive(Clone, Debug)]
pub struct PositionTween {
    pub start:       Vec2,
    pub end:         Vec2,
    pub duration_ms: f32,
    pub easing:      SnapEasing,
    elapsed_ms:      f32,
}

impl PositionTween {
    pub const fn new(start: Vec2, end: Vec2, duration_ms: f32, easing: SnapEasing) -> Self {
        Self {
            start,
            end,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    pub const fn elapsed_ms(&self) -> f32 { self.elapsed_ms }

    /// Linear progress in `[0, 1]`. A non-positive duration counts as complete.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    pub fn remaining_ms(&self) -> f32 { (self.duration_ms - self.elapsed_ms).max(0.0) }

    /// Advances by `elapsed_ms`, writes the eased position and returns `true` once the end is
    /// reached. The completing step writes `end` exactly.
    pub fn advance(&mut self, elapsed_ms: f32, position: &mut Vec2) -> bool {
        self.elapsed_ms += elapsed_ms;

        let t = self.progress();
        if t >= 1.0 {
            *position = self.end;
            return true;
        }

        *position = self.start.lerp(self.end, self.easing.sample(t));
        false
    }
}
