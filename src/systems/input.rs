//! Input system - samples the mouse into [`SlingshotInput`].

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::SlingshotCamera;
use crate::resources::{PointerRay, SlingshotConfig, SlingshotInput};

/// Sample the configured mouse button and the cursor ray once per frame.
///
/// The ray comes from the camera marked [`SlingshotCamera`], falling back to
/// the first active camera. It is `None` while the cursor is outside the
/// primary window.
pub fn sample_mouse_input(
    config: Res<SlingshotConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform, Has<SlingshotCamera>)>,
    mut input: ResMut<SlingshotInput>,
) {
    let pointer = windows
        .single()
        .ok()
        .and_then(Window::cursor_position)
        .and_then(|cursor| {
            let (camera, camera_transform) = pick_camera(&cameras)?;
            let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
            Some(PointerRay::new(ray, camera_transform.forward()))
        });

    *input = SlingshotInput {
        just_pressed: buttons.just_pressed(config.mouse_button),
        pressed: buttons.pressed(config.mouse_button),
        just_released: buttons.just_released(config.mouse_button),
        pointer,
    };
}

/// Marked camera first, then any active one.
fn pick_camera<'a>(
    cameras: &'a Query<(&Camera, &GlobalTransform, Has<SlingshotCamera>)>,
) -> Option<(&'a Camera, &'a GlobalTransform)> {
    let mut fallback = None;
    for (camera, transform, marked) in cameras.iter() {
        if !camera.is_active {
            continue;
        }
        if marked {
            return Some((camera, transform));
        }
        fallback.get_or_insert((camera, transform));
    }
    fallback
}
