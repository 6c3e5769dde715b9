//! # Bevy Slingshot
//!
//! Drag-and-release slingshot mechanic for Bevy 0.18.
//!
//! ## Features
//! - Press to spawn a projectile on the anchor, drag to pull it back, release to fire
//! - Pull distance clamped to a fixed offset, only the direction is player controlled
//! - Three-point rubber band guide drawn with gizmos
//! - Launch handled by avian physics, 2D and 3D via feature flags
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_slingshot::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(SlingshotPluginGroup)
//!         .run();
//! }
//! ```

pub mod components;
pub mod events;
pub mod physics;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod slingshot_tests;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::SlingshotPluginGroup;
    pub use crate::SlingshotSystems;
    pub use crate::{SlingshotCorePlugin, SlingshotInputPlugin, SlingshotRenderPlugin};
}

use bevy::prelude::*;

/// Main plugin group that includes all slingshot subsystems.
///
/// This plugin group bundles together:
/// - The drag/release controller
/// - Mouse and camera sampling
/// - Rubber band rendering
///
/// Physics is not included; add avian's `PhysicsPlugins` alongside.
#[derive(Default)]
pub struct SlingshotPluginGroup;

impl PluginGroup for SlingshotPluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(SlingshotCorePlugin)
            .add(SlingshotInputPlugin)
            .add(SlingshotRenderPlugin)
    }
}

/// System set containing the slingshot controller, run once per frame in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlingshotSystems;

/// Slingshot controller plugin.
///
/// Reads [`resources::SlingshotInput`] and steps every slingshot through
/// press, hold, release and band refresh, in that order.
///
/// # Systems
/// - `begin_drag` - Spawns a kinematic projectile on press
/// - `update_drag` - Moves the held projectile while the button is down
/// - `release_drag` - Launches the projectile on release
/// - `refresh_rubber_band` - Keeps the band endpoints on the anchors
pub struct SlingshotCorePlugin;

impl Plugin for SlingshotCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<components::Slingshot>()
            .register_type::<components::SlingshotState>()
            .register_type::<components::RubberBand>()
            .register_type::<components::SlingshotProjectile>()
            .register_type::<components::SlingshotCamera>()
            .register_type::<resources::SlingshotConfig>()
            .init_resource::<resources::SlingshotConfig>()
            .init_resource::<resources::SlingshotInput>()
            .add_message::<events::SlingshotDragStarted>()
            .add_message::<events::SlingshotLaunched>()
            .add_systems(
                Update,
                (
                    systems::drag::begin_drag,
                    systems::drag::update_drag,
                    systems::launch::release_drag,
                    systems::band::refresh_rubber_band,
                )
                    .chain()
                    .in_set(SlingshotSystems),
            );
    }
}

/// Mouse input plugin.
///
/// Samples the configured mouse button and the cursor ray into
/// [`resources::SlingshotInput`] before the controller runs. Skipped when
/// there is no mouse input resource, so headless apps can drive the
/// controller directly.
pub struct SlingshotInputPlugin;

impl Plugin for SlingshotInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::input::sample_mouse_input
                .before(SlingshotSystems)
                .run_if(resource_exists::<ButtonInput<MouseButton>>),
        );
    }
}

/// Rubber band rendering plugin.
///
/// Draws visible bands with gizmos, plus anchor markers and launch
/// direction when `SlingshotConfig::debug_draw` is set.
pub struct SlingshotRenderPlugin;

impl Plugin for SlingshotRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::band::draw_rubber_band,
                systems::band::draw_slingshot_debug,
            )
                .after(SlingshotSystems),
        );
    }
}
