//! Headless camera application.
//!
//! Builds the ECS world the camera lives in (resources, observer, schedule)
//! and steps it frame by frame. A windowed front-end would do the same, with
//! [`ActiveCommands`] filled from polled keys and the camera read back for
//! its view transform after each [`CameraApp::step`].

use bevy_ecs::prelude::*;
use log::info;

use crate::events::resize::{ViewportResizedEvent, viewport_resized_observer};
use crate::resources::camera2d::{CameraController, CameraSnapshot};
use crate::resources::cameraconfig::CameraConfig;
use crate::resources::input::{ActiveCommands, CameraCommand};
use crate::resources::shakerandom::ShakeRandom;
use crate::resources::worldtime::WorldTime;
use crate::script::ScriptStep;
use crate::systems::camera::camera_controller_system;
use crate::systems::time::update_world_time;

/// ECS world plus the per-frame schedule driving the camera.
pub struct CameraApp {
    world: World,
    update: Schedule,
}

impl CameraApp {
    /// Build the world. Call [`resize`](Self::resize) before the first step.
    pub fn new(config: CameraConfig, rng: impl ShakeRandom + 'static) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(ActiveCommands::default());
        world.insert_resource(CameraController::with_random(config, rng));
        world.add_observer(viewport_resized_observer);
        // Ensure the observer is registered before anything triggers a resize.
        world.flush();

        let mut update = Schedule::default();
        update.add_systems(camera_controller_system);

        Self { world, update }
    }

    /// Notify the camera that the viewport changed size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.trigger(ViewportResizedEvent { width, height });
    }

    /// Run one frame with `commands` held for `dt` seconds.
    pub fn step(
        &mut self,
        dt: f32,
        commands: impl IntoIterator<Item = CameraCommand>,
    ) -> CameraSnapshot {
        update_world_time(&mut self.world, dt);
        self.world.resource_mut::<ActiveCommands>().set(commands);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
        self.camera().snapshot()
    }

    /// Play a parsed frame script with a fixed `dt`.
    ///
    /// `on_frame` is called after every frame with the frame number and the camera.
    pub fn run_script(
        &mut self,
        steps: &[ScriptStep],
        dt: f32,
        mut on_frame: impl FnMut(u64, &CameraController),
    ) {
        for step in steps {
            match step {
                ScriptStep::Resize { width, height } => self.resize(*width, *height),
                ScriptStep::Hold { frames, commands } => {
                    for _ in 0..*frames {
                        self.step(dt, commands.iter().copied());
                        on_frame(self.frame_count(), self.camera());
                    }
                }
            }
        }
        info!(
            "Script finished after {} frames ({:.3}s)",
            self.frame_count(),
            self.world.resource::<WorldTime>().elapsed
        );
    }

    pub fn camera(&self) -> &CameraController {
        self.world.resource::<CameraController>()
    }

    pub fn camera_mut(&mut self) -> Mut<'_, CameraController> {
        self.world.resource_mut::<CameraController>()
    }

    pub fn frame_count(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
