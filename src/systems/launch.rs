//! Launch system - releasing the band and firing the projectile.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::{anchor_position, AnchorQuery};
use crate::components::{RubberBand, Slingshot, SlingshotProjectile, SlingshotState};
use crate::events::SlingshotLaunched;
use crate::physics::{apply_impulse, set_kinematic, LinearVelocity, RigidBody};
use crate::resources::SlingshotInput;

/// Fire held projectiles when the button goes up.
///
/// The projectile is handed back to the physics world (dynamic body), pushed
/// by a fixed-magnitude impulse along the rolled anchor direction and
/// forgotten by the slingshot. Release only counts while the button is not
/// held. If the anchor has gone missing the projectile is still released,
/// without an impulse.
pub fn release_drag(
    input: Res<SlingshotInput>,
    mut slingshots: Query<(Entity, &Slingshot, &mut SlingshotState, &mut RubberBand)>,
    anchors: AnchorQuery,
    mut projectiles: Query<(&Transform, &SlingshotProjectile, &mut RigidBody, &mut LinearVelocity)>,
    mut launched: MessageWriter<SlingshotLaunched>,
) {
    if input.pressed || !input.just_released {
        return;
    }

    for (entity, slingshot, mut state, mut band) in slingshots.iter_mut() {
        let Some(projectile) = state.projectile() else {
            continue;
        };

        *state = SlingshotState::Idle;
        band.visible = false;

        let Ok((transform, marker, mut body, mut velocity)) = projectiles.get_mut(projectile)
        else {
            continue;
        };

        set_kinematic(&mut body, false);

        // Without an anchor there is no launch direction; just let it drop
        let Some(anchor) = anchor_position(&anchors, slingshot.anchor) else {
            continue;
        };

        let position = transform.translation;
        let impulse = launch_impulse(
            anchor,
            position,
            slingshot.launch_roll_degrees,
            slingshot.launch_impulse,
        );
        apply_impulse(&mut velocity, impulse, marker.mass);

        debug!("slingshot {entity} launched projectile {projectile} with impulse {impulse}");
        launched.write(SlingshotLaunched {
            slingshot: entity,
            projectile,
            position,
            impulse,
        });
    }
}

/// Unit launch direction.
///
/// The direction from the projectile back to the anchor, rolled about the Z
/// axis by `roll_degrees`. Zero when the projectile sits on the anchor.
pub fn launch_direction(anchor: Vec3, projectile: Vec3, roll_degrees: f32) -> Vec3 {
    let pull = (anchor - projectile).normalize_or_zero();
    Quat::from_rotation_z(roll_degrees.to_radians()) * pull
}

/// Launch impulse of fixed `magnitude` along [`launch_direction`].
pub fn launch_impulse(anchor: Vec3, projectile: Vec3, roll_degrees: f32, magnitude: f32) -> Vec3 {
    launch_direction(anchor, projectile, roll_degrees) * magnitude
}
