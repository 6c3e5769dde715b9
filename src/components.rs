//! Core components for the slingshot system.

use bevy::prelude::*;

/// Distance the projectile sits behind the anchor while being pulled (world units).
pub const DEFAULT_DRAG_BACK_OFFSET: f32 = 1.0;
/// Magnitude of the launch impulse (N·s).
pub const DEFAULT_LAUNCH_IMPULSE: f32 = 1000.0;
/// Roll applied to the launch direction about the Z axis (degrees).
pub const DEFAULT_LAUNCH_ROLL_DEGREES: f32 = 340.0;
/// Control points in a rubber band: anchor, projectile, band end.
pub const RUBBER_BAND_POINTS: usize = 3;

/// Slingshot controller configuration.
///
/// A slingshot references two anchor entities: `anchor` is where the
/// projectile spawns and the point it is pulled away from, `band_end` is the
/// far end of the rubber band. Both are resolved to world space through
/// their parent chain, so they can be children of a slingshot rig.
///
/// Adding this component also inserts [`SlingshotState`] and [`RubberBand`].
///
/// # Fields
/// * `anchor` - Pull origin and launch reference
/// * `band_end` - Second endpoint of the rubber band
/// * `template` - Projectile to spawn on press; `None` disables the slingshot
/// * `drag_back_offset` - Fixed distance between anchor and pulled projectile
/// * `launch_impulse` - Impulse magnitude applied on release
/// * `launch_roll_degrees` - Rotation applied to the launch direction about Z
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_slingshot::components::{ProjectileTemplate, Slingshot};
///
/// let slingshot = Slingshot::new(Entity::PLACEHOLDER, Entity::PLACEHOLDER)
///     .with_template(ProjectileTemplate::default())
///     .with_drag_back_offset(1.5);
/// assert_eq!(slingshot.drag_back_offset, 1.5);
/// ```
#[derive(Component, Reflect, Clone, Debug)]
#[reflect(Component)]
#[require(SlingshotState, RubberBand)]
pub struct Slingshot {
    /// Pull origin (handle of the slingshot)
    pub anchor: Entity,
    /// Far end of the rubber band
    pub band_end: Entity,
    /// Projectile spawned on press
    pub template: Option<ProjectileTemplate>,
    /// Fixed pull distance (world units)
    pub drag_back_offset: f32,
    /// Launch impulse magnitude (N·s)
    pub launch_impulse: f32,
    /// Launch direction roll about Z (degrees)
    pub launch_roll_degrees: f32,
}

impl Slingshot {
    /// Creates a slingshot between two anchors with no projectile template.
    ///
    /// A press does nothing until a template is set with [`Slingshot::with_template`].
    pub fn new(anchor: Entity, band_end: Entity) -> Self {
        Self {
            anchor,
            band_end,
            template: None,
            drag_back_offset: DEFAULT_DRAG_BACK_OFFSET,
            launch_impulse: DEFAULT_LAUNCH_IMPULSE,
            launch_roll_degrees: DEFAULT_LAUNCH_ROLL_DEGREES,
        }
    }

    /// Builder pattern: set the projectile template
    pub fn with_template(mut self, template: ProjectileTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Builder pattern: set the pull distance
    pub fn with_drag_back_offset(mut self, offset: f32) -> Self {
        self.drag_back_offset = offset;
        self
    }

    /// Builder pattern: set the launch impulse magnitude
    pub fn with_launch_impulse(mut self, impulse: f32) -> Self {
        self.launch_impulse = impulse;
        self
    }

    /// Builder pattern: set the launch roll in degrees
    pub fn with_launch_roll_degrees(mut self, degrees: f32) -> Self {
        self.launch_roll_degrees = degrees;
        self
    }
}

/// Physical description of the projectile a slingshot spawns.
///
/// Only the physics side is described here. Visuals are left to the
/// application, which can attach a mesh when a [`SlingshotProjectile`] is added.
#[derive(Reflect, Clone, Copy, Debug, PartialEq)]
pub struct ProjectileTemplate {
    /// Collider radius (world units)
    pub radius: f32,
    /// Mass (kg)
    pub mass: f32,
}

impl Default for ProjectileTemplate {
    /// A 0.25 unit ball weighing 1 kg.
    fn default() -> Self {
        Self {
            radius: 0.25,
            mass: 1.0,
        }
    }
}

/// Drag state of a slingshot.
///
/// `Dragging` carries the projectile currently held in the band. Once the
/// projectile is released the slingshot returns to `Idle` and no longer
/// tracks it.
#[derive(Component, Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[reflect(Component)]
pub enum SlingshotState {
    /// Nothing in the band
    #[default]
    Idle,
    /// Projectile held in the band
    Dragging(Entity),
}

impl SlingshotState {
    /// Returns the held projectile, if any.
    pub fn projectile(&self) -> Option<Entity> {
        match self {
            Self::Idle => None,
            Self::Dragging(entity) => Some(*entity),
        }
    }

    /// Whether a projectile is held in the band.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Three-point rubber band guide.
///
/// Point 0 is the anchor, point 2 the band end and point 1 follows the held
/// projectile. The band is only drawn while `visible` is set.
#[derive(Component, Reflect, Clone, Debug, Default, PartialEq)]
#[reflect(Component)]
pub struct RubberBand {
    /// Ordered control points
    pub points: [Vec3; RUBBER_BAND_POINTS],
    /// Whether the band is drawn
    pub visible: bool,
}

impl RubberBand {
    /// Sets one control point. Indices past the last point are ignored.
    pub fn set_point(&mut self, index: usize, position: Vec3) {
        if let Some(point) = self.points.get_mut(index) {
            *point = position;
        }
    }
}

/// Marker for a projectile spawned by a slingshot.
///
/// Stays on the entity after launch so applications can find their
/// projectiles, but the slingshot stops tracking it on release.
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct SlingshotProjectile {
    /// Slingshot that spawned the projectile
    pub slingshot: Entity,
    /// Mass used to turn the launch impulse into a velocity change (kg)
    pub mass: f32,
}

/// Marker for the camera used to project the pointer into the world.
///
/// When no camera carries it, the first active camera is used.
#[derive(Component, Reflect, Clone, Copy, Debug, Default)]
#[reflect(Component)]
pub struct SlingshotCamera;
