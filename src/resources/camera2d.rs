//! Shared 2D camera controller resource.
//!
//! [`CameraController`] owns the camera state (position, zoom, rotation) and
//! the shake state machine. It is advanced once per frame with the elapsed
//! time and the [`ActiveCommands`] held that frame, and read back by whatever
//! renders the view.
//!
//! # Zoom
//!
//! Zoom is driven by a progress value in `[0, zoom_seconds]` rather than by
//! the zoom factor itself, so zooming in and out take the same time whatever
//! the current level and saturate at the ends of the range.
//!
//! # Shake
//!
//! Triggering a shake snapshots position and rotation. While the countdown
//! runs, normal commands are ignored and the camera is jittered around the
//! snapshot. When it expires the snapshot is restored exactly.
//!
//! # Coordinate System
//!
//! - World is centered on the origin, `world_width` x `world_height`
//! - Positive rotation is counter-clockwise, in degrees
//! - Zoom above 1.0 shows more of the world, below 1.0 magnifies

use bevy_ecs::prelude::Resource;
use glam::{Vec2, Vec3};
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;

use crate::resources::cameraconfig::CameraConfig;
use crate::resources::input::{
    ActiveCommands, CameraCommand, HORIZONTAL_PAN_AXIS, ROTATE_AXIS, VERTICAL_PAN_AXIS, ZOOM_AXIS,
};
use crate::resources::shakerandom::{FastShakeRandom, ShakeRandom};

/// Key legend shown by the demo front-end next to the status text.
pub const CONTROLS_HELP: &str =
    "Arrows = Move; W/S = Zoom In/Out; A/D = Rotate; R = Reset; SPACE = Shake it!";

/// Mutable camera values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World position of the viewport center. `z` is carried but never clamped.
    pub position: Vec3,
    /// Current zoom factor, always within the configured range.
    pub zoom: f32,
    /// Accumulated rotation in degrees. Not normalized.
    pub rotation_degrees: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Zoom progress in `[0, zoom_seconds]`.
    pub elapsed_zoom_seconds: f32,
}

/// Shake countdown and the snapshot it restores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShakeState {
    /// Seconds left; `0.0` means idle.
    pub remaining_seconds: f32,
    pub saved_position: Vec3,
    pub saved_rotation: f32,
}

impl ShakeState {
    pub fn is_active(&self) -> bool {
        self.remaining_seconds > 0.0
    }
}

/// Serializable read-back of the camera for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub position: Vec3,
    pub zoom: f32,
    pub rotation_degrees: f32,
    pub shaking: bool,
}

/// ECS resource that owns the camera and drives it from frame commands.
///
/// [`on_resize`](Self::on_resize) must be called at least once before the
/// first [`advance`](Self::advance).
#[derive(Resource)]
pub struct CameraController {
    config: CameraConfig,
    state: CameraState,
    shake: ShakeState,
    rng: Box<dyn ShakeRandom>,
}

impl fmt::Debug for CameraController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("shake", &self.shake)
            .finish_non_exhaustive()
    }
}

/// Non-finite or negative deltas have no effect.
fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    // Exact at both ends.
    a * (1.0 - t) + b * t
}

impl CameraController {
    /// Controller with an entropy-seeded shake generator.
    pub fn new(config: CameraConfig) -> Self {
        Self::with_random(config, FastShakeRandom::new())
    }

    /// Controller drawing shake offsets from `rng`.
    ///
    /// A config that fails [`CameraConfig::validate`] is replaced by the defaults.
    pub fn with_random(config: CameraConfig, rng: impl ShakeRandom + 'static) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid camera config ({}), using defaults", e);
                CameraConfig::new()
            }
        };
        let mut controller = Self {
            state: CameraState {
                position: Vec3::ZERO,
                zoom: config.mid_zoom(),
                rotation_degrees: 0.0,
                viewport_width: 0.0,
                viewport_height: 0.0,
                elapsed_zoom_seconds: 0.0,
            },
            shake: ShakeState::default(),
            rng: Box::new(rng),
            config,
        };
        controller.set_zoom_progress(controller.config.zoom_seconds * 0.5);
        controller
    }

    /// Swap the shake generator, e.g. to reseed between runs.
    pub fn set_random(&mut self, rng: impl ShakeRandom + 'static) {
        self.rng = Box::new(rng);
    }

    // ==================== Read-back ====================

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.state.rotation_degrees
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.state.viewport_width, self.state.viewport_height)
    }

    pub fn zoom_progress(&self) -> f32 {
        self.state.elapsed_zoom_seconds
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn shake_state(&self) -> &ShakeState {
        &self.shake
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            position: self.state.position,
            zoom: self.state.zoom,
            rotation_degrees: self.state.rotation_degrees,
            shaking: self.shake.is_active(),
        }
    }

    /// Multi-line status for on-screen diagnostics.
    pub fn status_text(&self) -> String {
        format!(
            "Pos: {},{}\nZoom: {}\nRotation (degrees): {}",
            self.state.position.x, self.state.position.y, self.state.zoom, self.state.rotation_degrees
        )
    }

    /// Map a world point to viewport coordinates (origin at the viewport center).
    pub fn world_to_view(&self, world: Vec2) -> Vec2 {
        let relative = (world - self.state.position.truncate()) / self.state.zoom;
        Vec2::from_angle((-self.state.rotation_degrees).to_radians()).rotate(relative)
    }

    /// Inverse of [`world_to_view`](Self::world_to_view).
    pub fn view_to_world(&self, view: Vec2) -> Vec2 {
        let rotated = Vec2::from_angle(self.state.rotation_degrees.to_radians()).rotate(view);
        self.state.position.truncate() + rotated * self.state.zoom
    }

    // ==================== Frame entry points ====================

    /// Recenter the camera for a new viewport size.
    ///
    /// Position goes to the origin, rotation to zero and zoom to the middle of
    /// its range. A running shake is left alone.
    pub fn on_resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if !(viewport_width.is_finite() && viewport_height.is_finite()) {
            warn!(
                "Ignoring resize to non-finite viewport {}x{}",
                viewport_width, viewport_height
            );
            return;
        }
        info!("Viewport resized to {}x{}", viewport_width, viewport_height);
        self.state.viewport_width = viewport_width;
        self.state.viewport_height = viewport_height;
        self.state.position = Vec3::ZERO;
        self.state.rotation_degrees = 0.0;
        self.set_zoom_progress(self.config.zoom_seconds * 0.5);
    }

    /// Advance one frame.
    ///
    /// 1. `ShakeTrigger` starts a shake if none is running.
    /// 2. While shaking, every other command is ignored.
    /// 3. Otherwise one command per axis is applied (zoom, rotate, horizontal
    ///    pan, vertical pan) in priority order, then `Reset`.
    /// 4. The shake countdown advances by `delta`.
    ///
    /// Negative or non-finite deltas leave the camera untouched.
    pub fn advance(&mut self, delta: f32, commands: &ActiveCommands) {
        if !(delta.is_finite() && delta >= 0.0) {
            warn!("Ignoring frame with invalid delta {}", delta);
            return;
        }

        if commands.contains(CameraCommand::ShakeTrigger) {
            self.start_shake();
        }

        if !self.shake.is_active() {
            self.apply_commands(delta, commands);
        }

        self.update_shake(delta);
    }

    fn apply_commands(&mut self, delta: f32, commands: &ActiveCommands) {
        match commands.first_of(&ZOOM_AXIS) {
            Some(CameraCommand::ZoomOut) => self.zoom_out(delta),
            Some(CameraCommand::ZoomIn) => self.zoom_in(delta),
            _ => {}
        }

        match commands.first_of(&ROTATE_AXIS) {
            Some(CameraCommand::RotateLeft) => self.rotate_left(delta),
            Some(CameraCommand::RotateRight) => self.rotate_right(delta),
            _ => {}
        }

        match commands.first_of(&HORIZONTAL_PAN_AXIS) {
            Some(CameraCommand::PanLeft) => self.pan_left(delta),
            Some(CameraCommand::PanRight) => self.pan_right(delta),
            _ => {}
        }

        match commands.first_of(&VERTICAL_PAN_AXIS) {
            Some(CameraCommand::PanUp) => self.pan_up(delta),
            Some(CameraCommand::PanDown) => self.pan_down(delta),
            _ => {}
        }

        if commands.contains(CameraCommand::Reset) {
            self.reset();
        }
    }

    // ==================== Zoom ====================

    pub fn zoom_out(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        self.set_zoom_progress(self.state.elapsed_zoom_seconds + delta);
    }

    pub fn zoom_in(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        self.set_zoom_progress(self.state.elapsed_zoom_seconds - delta);
    }

    fn set_zoom_progress(&mut self, elapsed: f32) {
        let duration = self.config.zoom_seconds;
        self.state.elapsed_zoom_seconds = elapsed.clamp(0.0, duration);
        let t = self.state.elapsed_zoom_seconds / duration;
        self.state.zoom = lerp(self.config.min_zoom, self.config.max_zoom, t)
            .clamp(self.config.min_zoom, self.config.max_zoom);
    }

    // ==================== Rotation ====================

    /// Rotate by a signed number of degrees.
    pub fn rotate(&mut self, degrees: f32) {
        self.state.rotation_degrees += degrees;
    }

    pub fn rotate_left(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        self.rotate(360.0 * delta / self.config.rotate_seconds);
    }

    pub fn rotate_right(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        self.rotate(-360.0 * delta / self.config.rotate_seconds);
    }

    pub fn reset_rotation(&mut self) {
        self.rotate(-self.state.rotation_degrees);
    }

    // ==================== Pan ====================

    /// Panning is only allowed while the zoomed viewport fits inside the world
    /// horizontally.
    pub fn can_pan(&self) -> bool {
        self.state.zoom <= self.config.world_width / self.state.viewport_width
    }

    /// Largest allowed `|x|` and `|y|` for the viewport center at the current zoom.
    ///
    /// An axis whose zoomed viewport is wider than the world collapses to `0.0`.
    pub fn pan_limits(&self) -> Vec2 {
        let scaled_width = self.state.viewport_width * self.state.zoom;
        let scaled_height = self.state.viewport_height * self.state.zoom;
        Vec2::new(
            (self.config.world_width / 2.0 - scaled_width / 2.0).max(0.0),
            (self.config.world_height / 2.0 - scaled_height / 2.0).max(0.0),
        )
    }

    pub fn pan_left(&mut self, delta: f32) {
        self.pan(Vec2::new(-self.config.pan_speed * sanitize_delta(delta), 0.0));
    }

    pub fn pan_right(&mut self, delta: f32) {
        self.pan(Vec2::new(self.config.pan_speed * sanitize_delta(delta), 0.0));
    }

    pub fn pan_up(&mut self, delta: f32) {
        self.pan(Vec2::new(0.0, self.config.pan_speed * sanitize_delta(delta)));
    }

    pub fn pan_down(&mut self, delta: f32) {
        self.pan(Vec2::new(0.0, -self.config.pan_speed * sanitize_delta(delta)));
    }

    /// Translate and clamp only the axes that moved.
    ///
    /// An axis with no room to move (limit `0.0`, e.g. exactly at the
    /// [`can_pan`](Self::can_pan) boundary) keeps its position.
    fn pan(&mut self, amount: Vec2) {
        if !self.can_pan() {
            return;
        }
        let limits = self.pan_limits();
        if amount.x != 0.0 && limits.x > 0.0 {
            self.state.position.x = (self.state.position.x + amount.x).clamp(-limits.x, limits.x);
        }
        if amount.y != 0.0 && limits.y > 0.0 {
            self.state.position.y = (self.state.position.y + amount.y).clamp(-limits.y, limits.y);
        }
    }

    // ==================== Reset ====================

    /// Unrotate, restore the mid zoom and recenter. Shake state is untouched.
    pub fn reset(&mut self) {
        debug!("Camera reset");
        self.reset_rotation();
        self.set_zoom_progress(self.config.zoom_seconds * 0.5);
        self.state.position.x = 0.0;
        self.state.position.y = 0.0;
    }

    // ==================== Shake ====================

    /// Start shaking. No-op while a shake is already running.
    pub fn start_shake(&mut self) {
        if self.shake.is_active() {
            return;
        }
        self.shake = ShakeState {
            remaining_seconds: self.config.shake_seconds,
            saved_position: self.state.position,
            saved_rotation: self.state.rotation_degrees,
        };
        debug!(
            "Shake started for {}s at {:?}, {} degrees",
            self.shake.remaining_seconds, self.shake.saved_position, self.shake.saved_rotation
        );
    }

    fn update_shake(&mut self, delta: f32) {
        if !self.shake.is_active() {
            return;
        }

        self.shake.remaining_seconds -= delta;

        if self.shake.remaining_seconds <= 0.0 {
            self.shake.remaining_seconds = 0.0;
            self.state.position = self.shake.saved_position;
            self.rotate(self.shake.saved_rotation - self.state.rotation_degrees);
            // Cancellation above can be off by an ulp.
            self.state.rotation_degrees = self.shake.saved_rotation;
            debug!("Shake finished");
            return;
        }

        let position_sign = self.rng.next_sign();
        let rotation_sign = self.rng.next_sign();

        let offset_x = self.rng.next_in(self.config.shake_max_x) * position_sign;
        let offset_y = self.rng.next_in(self.config.shake_max_y) * position_sign;
        let offset_rotation = self.rng.next_in(self.config.shake_max_rotation) * rotation_sign;

        self.state.position = self.shake.saved_position + Vec3::new(offset_x, offset_y, 0.0);

        // NOTE: position jitters around the snapshot but rotation jitters from
        // the live value, so rotation drifts across ticks until the shake ends
        // and cancels it. Kept as-is; it is unclear whether the drift is wanted.
        self.rotate(offset_rotation);
    }
}
