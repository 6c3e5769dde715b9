//! Systems module - all ECS systems for the slingshot.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::SlingshotProjectile;

pub mod band;
pub mod drag;
pub mod input;
pub mod launch;

/// Read access to anchor transforms and their parent chain.
///
/// Resolves world positions from local transforms the same way
/// `TransformHelper` does, so the result is exact within the frame instead of
/// lagging behind `GlobalTransform` propagation. Projectiles are excluded so
/// drag systems can move them mutably alongside.
#[derive(SystemParam)]
pub struct AnchorQuery<'w, 's> {
    transforms: Query<'w, 's, &'static Transform, Without<SlingshotProjectile>>,
    parents: Query<'w, 's, &'static ChildOf>,
}

impl AnchorQuery<'_, '_> {
    /// World transform of `entity`, composed up through its ancestors.
    ///
    /// `None` if the entity or any ancestor has no `Transform`.
    pub fn global_transform(&self, entity: Entity) -> Option<GlobalTransform> {
        let mut global = GlobalTransform::from(*self.transforms.get(entity).ok()?);
        let mut current = entity;

        while let Ok(child_of) = self.parents.get(current) {
            current = child_of.parent();
            let parent = self.transforms.get(current).ok()?;
            global = GlobalTransform::from(*parent) * global;
        }

        Some(global)
    }
}

/// World position of an anchor entity.
///
/// A missing anchor is a configuration error; it is reported once and the
/// caller skips the slingshot.
pub(crate) fn anchor_position(anchors: &AnchorQuery, anchor: Entity) -> Option<Vec3> {
    match anchors.global_transform(anchor) {
        Some(global) => Some(global.translation()),
        None => {
            warn_once!("slingshot anchor {anchor} has no Transform; slingshot skipped");
            None
        }
    }
}
