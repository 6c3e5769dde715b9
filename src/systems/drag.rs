//! Drag systems - grabbing a projectile and pulling it back.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::{anchor_position, AnchorQuery};
use crate::components::{RubberBand, Slingshot, SlingshotProjectile, SlingshotState};
use crate::events::SlingshotDragStarted;
use crate::physics::{ball_collider, LinearVelocity, Mass, RigidBody};
use crate::resources::SlingshotInput;

/// Spawn a projectile on every idle slingshot when the button goes down.
///
/// The projectile appears at the anchor, kinematic so gravity does not pull
/// it out of the band, and the rubber band becomes visible. Slingshots
/// without a template ignore the press.
pub fn begin_drag(
    mut commands: Commands,
    input: Res<SlingshotInput>,
    mut slingshots: Query<(Entity, &Slingshot, &mut SlingshotState, &mut RubberBand)>,
    anchors: AnchorQuery,
    mut drag_started: MessageWriter<SlingshotDragStarted>,
) {
    if !input.just_pressed {
        return;
    }

    for (entity, slingshot, mut state, mut band) in slingshots.iter_mut() {
        // One projectile per slingshot
        if state.is_dragging() {
            continue;
        }
        let Some(template) = slingshot.template else {
            continue;
        };
        let Some(origin) = anchor_position(&anchors, slingshot.anchor) else {
            continue;
        };

        let projectile = commands
            .spawn((
                Name::new("Slingshot Projectile"),
                Transform::from_translation(origin),
                SlingshotProjectile {
                    slingshot: entity,
                    mass: template.mass,
                },
                RigidBody::Kinematic,
                ball_collider(template.radius),
                Mass(template.mass),
                LinearVelocity::ZERO,
            ))
            .id();

        *state = SlingshotState::Dragging(projectile);
        band.visible = true;

        debug!("slingshot {entity} grabbed projectile {projectile} at {origin}");
        drag_started.write(SlingshotDragStarted {
            slingshot: entity,
            projectile,
            origin,
        });
    }
}

/// Keep a held projectile on the pull circle while the button is down.
///
/// The pointer is unprojected at the projectile's depth and only its
/// direction from the anchor is used: the projectile always sits exactly
/// `drag_back_offset` away from the anchor.
pub fn update_drag(
    input: Res<SlingshotInput>,
    mut slingshots: Query<(&Slingshot, &mut SlingshotState, &mut RubberBand)>,
    anchors: AnchorQuery,
    mut projectiles: Query<&mut Transform, With<SlingshotProjectile>>,
) {
    if !input.pressed {
        return;
    }

    for (slingshot, mut state, mut band) in slingshots.iter_mut() {
        let Some(projectile) = state.projectile() else {
            continue;
        };
        let Ok(mut transform) = projectiles.get_mut(projectile) else {
            // Despawned by someone else mid-drag
            *state = SlingshotState::Idle;
            band.visible = false;
            continue;
        };
        let Some(pointer) = input.pointer else {
            continue;
        };
        let Some(anchor) = anchor_position(&anchors, slingshot.anchor) else {
            continue;
        };
        let Some(pointer_world) = pointer.point_at_depth_of(transform.translation) else {
            continue;
        };

        transform.translation = drag_position(anchor, pointer_world, slingshot.drag_back_offset);
        band.set_point(1, transform.translation);
    }
}

/// Position of a pulled projectile.
///
/// Points from `anchor` toward `pointer_world` at a fixed `offset`. A
/// pointer right on the anchor leaves the projectile on the anchor.
pub fn drag_position(anchor: Vec3, pointer_world: Vec3, offset: f32) -> Vec3 {
    let direction = (pointer_world - anchor).normalize_or_zero();
    anchor + direction * offset
}
