//! Camera controller system.
//!
//! Feeds the frame delta from [`WorldTime`] and the commands held in
//! [`ActiveCommands`] into the [`CameraController`] resource.
use bevy_ecs::prelude::*;

use crate::resources::camera2d::CameraController;
use crate::resources::input::ActiveCommands;
use crate::resources::worldtime::WorldTime;

/// Advance the camera one frame.
///
/// # Ordering
///
/// Run after the input collaborator has written [`ActiveCommands`] and before
/// anything reads the camera back for rendering.
pub fn camera_controller_system(
    time: Res<WorldTime>,
    commands: Res<ActiveCommands>,
    mut camera: ResMut<CameraController>,
) {
    camera.advance(time.delta, &commands);
}
