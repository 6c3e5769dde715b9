//! Rubber band systems - keeping the guide in sync and drawing it.

use bevy::prelude::*;

use super::{anchor_position, AnchorQuery};
use crate::components::{RubberBand, Slingshot, SlingshotProjectile, SlingshotState};
use crate::resources::SlingshotConfig;
use crate::systems::launch::launch_direction;

/// Refresh the band endpoints every frame.
///
/// Point 0 tracks the anchor and point 2 the band end regardless of state.
/// Point 1 follows the held projectile and is left untouched while idle.
pub fn refresh_rubber_band(
    mut slingshots: Query<(&Slingshot, &SlingshotState, &mut RubberBand)>,
    anchors: AnchorQuery,
    projectiles: Query<&Transform, With<SlingshotProjectile>>,
) {
    for (slingshot, state, mut band) in slingshots.iter_mut() {
        let Some(anchor) = anchor_position(&anchors, slingshot.anchor) else {
            continue;
        };
        let Some(band_end) = anchor_position(&anchors, slingshot.band_end) else {
            continue;
        };

        band.set_point(0, anchor);
        band.set_point(2, band_end);

        if let Some(transform) = state.projectile().and_then(|p| projectiles.get(p).ok()) {
            band.set_point(1, transform.translation);
        }
    }
}

/// Draw visible rubber bands as a line strip through their three points.
pub fn draw_rubber_band(
    mut gizmos: Gizmos,
    config: Res<SlingshotConfig>,
    bands: Query<&RubberBand>,
) {
    for band in bands.iter().filter(|band| band.visible) {
        gizmos.linestrip(band.points, config.band_color);
    }
}

/// Draw debug gizmos for slingshots.
///
/// Marks both anchors and, while a projectile is held, the direction it
/// would be launched in.
pub fn draw_slingshot_debug(
    mut gizmos: Gizmos,
    config: Res<SlingshotConfig>,
    slingshots: Query<(&Slingshot, &RubberBand, &SlingshotState)>,
) {
    if !config.debug_draw {
        return;
    }

    for (slingshot, band, state) in slingshots.iter() {
        let [anchor, held, band_end] = band.points;

        gizmos.sphere(anchor, 0.08, Color::srgb(0.0, 1.0, 0.0));
        gizmos.sphere(band_end, 0.08, Color::srgb(0.0, 0.6, 1.0));

        if state.is_dragging() {
            let direction = launch_direction(anchor, held, slingshot.launch_roll_degrees);
            gizmos.arrow(held, held + direction * 2.0, Color::srgb(1.0, 0.0, 0.0));
        }
    }
}
