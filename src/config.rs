use bevy::prelude::*;

use crate::snap::SnapOptions;

/// Defaults for `SnapTo` requests that carry no options.
///
/// Insert before adding `ViewportSnapPlugin` to override; the plugin keeps an existing value.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SnapConfig {
    pub default_options: SnapOptions,
}
