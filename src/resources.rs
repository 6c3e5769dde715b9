//! Global resources for the slingshot system.

use bevy::prelude::*;

/// Global configuration for the slingshot system.
///
/// # Fields
/// * `mouse_button` - Button that grabs and releases the projectile
/// * `band_color` - Color of the rubber band line
/// * `debug_draw` - Whether to draw anchors and the pending launch direction
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_slingshot::resources::SlingshotConfig;
///
/// let config = SlingshotConfig {
///     mouse_button: MouseButton::Right,
///     debug_draw: true,
///     ..Default::default()
/// };
/// ```
#[derive(Resource, Reflect, Clone)]
#[reflect(Resource)]
pub struct SlingshotConfig {
    /// Grab/release button
    pub mouse_button: MouseButton,
    /// Rubber band color
    pub band_color: Color,
    /// Debug visualization
    pub debug_draw: bool,
}

impl Default for SlingshotConfig {
    /// Left mouse button, brown band, debug drawing disabled.
    fn default() -> Self {
        Self {
            mouse_button: MouseButton::Left,
            band_color: Color::srgb(0.45, 0.25, 0.1),
            debug_draw: false,
        }
    }
}

/// World-space ray under the pointer, with the viewing direction of the
/// camera that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRay {
    /// Ray from the camera through the cursor
    pub ray: Ray3d,
    /// Camera forward direction
    pub view_forward: Dir3,
}

impl PointerRay {
    /// Pairs a cursor ray with the forward direction of its camera.
    pub fn new(ray: Ray3d, view_forward: Dir3) -> Self {
        Self { ray, view_forward }
    }

    /// Unprojects the pointer at the view depth of `reference`.
    ///
    /// The result lies on the plane through `reference` that faces the
    /// camera, so it shares the reference point's screen depth. Returns `None`
    /// when the plane is behind the camera or parallel to the ray.
    pub fn point_at_depth_of(&self, reference: Vec3) -> Option<Vec3> {
        let plane = InfinitePlane3d {
            normal: self.view_forward,
        };
        self.ray
            .intersect_plane(reference, plane)
            .map(|distance| self.ray.get_point(distance))
    }
}

/// Pointer state sampled once per frame.
///
/// Filled from the mouse by the input plugin. Headless apps and tests can
/// insert it directly to script a drag.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct SlingshotInput {
    /// Button went down this frame
    pub just_pressed: bool,
    /// Button is down
    pub pressed: bool,
    /// Button went up this frame
    pub just_released: bool,
    /// Pointer ray, if the cursor is over a camera viewport
    pub pointer: Option<PointerRay>,
}

impl SlingshotInput {
    /// Frame on which the button goes down.
    pub fn press() -> Self {
        Self {
            just_pressed: true,
            pressed: true,
            ..Default::default()
        }
    }

    /// Frame with the button held.
    pub fn held() -> Self {
        Self {
            pressed: true,
            ..Default::default()
        }
    }

    /// Frame on which the button goes up.
    pub fn release() -> Self {
        Self {
            just_released: true,
            ..Default::default()
        }
    }

    /// Builder pattern: set the pointer ray
    pub fn with_pointer(mut self, pointer: PointerRay) -> Self {
        self.pointer = Some(pointer);
        self
    }
}
