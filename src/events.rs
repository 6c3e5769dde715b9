//! Events for the slingshot system.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Sent when a slingshot spawns a projectile and starts dragging it.
///
/// # Fields
/// * `slingshot` - Slingshot entity that was grabbed
/// * `projectile` - Newly spawned projectile
/// * `origin` - Anchor position the projectile spawned at
#[derive(Message, Clone, Copy, Debug)]
pub struct SlingshotDragStarted {
    pub slingshot: Entity,
    pub projectile: Entity,
    pub origin: Vec3,
}

/// Sent when a slingshot releases its projectile.
///
/// The projectile is no longer tracked by the slingshot after this; its
/// flight belongs to the physics world.
///
/// # Fields
/// * `slingshot` - Slingshot entity that fired
/// * `projectile` - Released projectile
/// * `position` - Projectile position at release
/// * `impulse` - Impulse applied to the projectile (N·s)
#[derive(Message, Clone, Copy, Debug)]
pub struct SlingshotLaunched {
    pub slingshot: Entity,
    pub projectile: Entity,
    pub position: Vec3,
    pub impulse: Vec3,
}
