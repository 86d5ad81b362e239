//! Viewport resize event and observer.
//!
//! The render collaborator triggers a [`ViewportResizedEvent`] whenever its
//! surface changes size (and once at startup). The observer forwards it to
//! [`CameraController::on_resize`], which recenters the camera.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::camera2d::CameraController;

/// Event carrying the new viewport size in device units.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportResizedEvent {
    pub width: f32,
    pub height: f32,
}

/// Observer that recenters the camera on resize.
pub fn viewport_resized_observer(
    trigger: On<ViewportResizedEvent>,
    mut camera: ResMut<CameraController>,
) {
    let event = trigger.event();
    camera.on_resize(event.width, event.height);
}
