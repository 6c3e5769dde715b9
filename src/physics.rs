//! Bridge to the active avian backend (`dim3` or `dim2`).
//!
//! Slingshot math is done in `Vec3`; this module converts it into the
//! backend's vector type and owns the kinematic/dynamic switch.

use bevy::prelude::*;

#[cfg(feature = "dim3")]
pub use avian3d::prelude::{Collider, LinearVelocity, Mass, RigidBody};

#[cfg(all(feature = "dim2", not(feature = "dim3")))]
pub use avian2d::prelude::{Collider, LinearVelocity, Mass, RigidBody};

#[cfg(not(any(feature = "dim2", feature = "dim3")))]
compile_error!("bevy_slingshot needs either the `dim3` or the `dim2` feature");

/// Ball collider for a projectile template.
#[cfg(feature = "dim3")]
pub fn ball_collider(radius: f32) -> Collider {
    Collider::sphere(radius)
}

/// Ball collider for a projectile template.
#[cfg(all(feature = "dim2", not(feature = "dim3")))]
pub fn ball_collider(radius: f32) -> Collider {
    Collider::circle(radius)
}

/// Velocity change produced by `impulse` on a body of `mass`.
///
/// Non-positive masses are treated as unit mass.
pub fn velocity_change(impulse: Vec3, mass: f32) -> Vec3 {
    let inverse_mass = if mass > 0.0 { 1.0 / mass } else { 1.0 };
    impulse * inverse_mass
}

/// Adds the velocity change of `impulse` to a body.
#[cfg(feature = "dim3")]
pub fn apply_impulse(velocity: &mut LinearVelocity, impulse: Vec3, mass: f32) {
    velocity.0 += velocity_change(impulse, mass);
}

/// Adds the velocity change of `impulse` to a body. Z is dropped.
#[cfg(all(feature = "dim2", not(feature = "dim3")))]
pub fn apply_impulse(velocity: &mut LinearVelocity, impulse: Vec3, mass: f32) {
    velocity.0 += velocity_change(impulse, mass).truncate();
}

/// Kinematic bodies ignore forces and gravity and are moved by the slingshot.
pub fn set_kinematic(body: &mut RigidBody, kinematic: bool) {
    *body = if kinematic {
        RigidBody::Kinematic
    } else {
        RigidBody::Dynamic
    };
}
