//! Camera configuration.
//!
//! Holds the fixed constants that shape the camera controller: world extent,
//! zoom range, rotation and pan speeds, and shake limits. Provides defaults
//! for safe startup and methods to load/save the values from an INI file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 1024
//! height = 768
//!
//! [zoom]
//! min = 0.05
//! max = 4
//! duration = 0.75
//!
//! [rotate]
//! duration = 1.5
//!
//! [pan]
//! speed = 800
//!
//! [shake]
//! max_x = 10
//! max_y = 10
//! max_rotation = 4
//! duration = 0.5
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: f32 = 1024.0;
const DEFAULT_WORLD_HEIGHT: f32 = 768.0;
const DEFAULT_MIN_ZOOM: f32 = 0.05;
const DEFAULT_MAX_ZOOM: f32 = 4.0;
const DEFAULT_ZOOM_SECONDS: f32 = 0.75;
const DEFAULT_ROTATE_SECONDS: f32 = 1.5;
const DEFAULT_PAN_SPEED: f32 = 800.0;
const DEFAULT_SHAKE_X: f32 = 10.0;
const DEFAULT_SHAKE_Y: f32 = 10.0;
const DEFAULT_SHAKE_ROTATION: f32 = 4.0;
const DEFAULT_SHAKE_SECONDS: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

/// Camera configuration.
///
/// The controller keeps its own copy, so every value is fixed once a
/// [`CameraController`] has been built from it.
///
/// [`CameraController`]: crate::resources::camera2d::CameraController
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Width of the pannable world, centered on the origin.
    pub world_width: f32,
    /// Height of the pannable world, centered on the origin.
    pub world_height: f32,
    /// Smallest zoom factor (maximum magnification).
    pub min_zoom: f32,
    /// Largest zoom factor (maximum zoom-out).
    pub max_zoom: f32,
    /// Seconds needed to traverse the whole zoom range.
    pub zoom_seconds: f32,
    /// Seconds needed for a full 360 degree revolution.
    pub rotate_seconds: f32,
    /// Pan speed in world units per second.
    pub pan_speed: f32,
    /// Maximum horizontal shake offset in world units.
    pub shake_max_x: f32,
    /// Maximum vertical shake offset in world units.
    pub shake_max_y: f32,
    /// Maximum per-tick shake rotation in degrees.
    pub shake_max_rotation: f32,
    /// Length of a shake in seconds.
    pub shake_seconds: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_seconds: DEFAULT_ZOOM_SECONDS,
            rotate_seconds: DEFAULT_ROTATE_SECONDS,
            pan_speed: DEFAULT_PAN_SPEED,
            shake_max_x: DEFAULT_SHAKE_X,
            shake_max_y: DEFAULT_SHAKE_Y,
            shake_max_rotation: DEFAULT_SHAKE_ROTATION,
            shake_seconds: DEFAULT_SHAKE_SECONDS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Zoom factor halfway through the zoom range.
    pub fn mid_zoom(&self) -> f32 {
        (self.min_zoom + self.max_zoom) * 0.5
    }

    /// Check that the values describe a usable camera.
    ///
    /// Durations and world extents must be positive, the zoom range must be
    /// ordered, and shake limits must not be negative.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("world.width", self.world_width),
            ("world.height", self.world_height),
            ("zoom.min", self.min_zoom),
            ("zoom.duration", self.zoom_seconds),
            ("rotate.duration", self.rotate_seconds),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        let non_negative = [
            ("pan.speed", self.pan_speed),
            ("shake.max_x", self.shake_max_x),
            ("shake.max_y", self.shake_max_y),
            ("shake.max_rotation", self.shake_max_rotation),
            ("shake.duration", self.shake_seconds),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{} must not be negative, got {}", name, value));
            }
        }

        if !(self.max_zoom.is_finite() && self.max_zoom > self.min_zoom) {
            return Err(format!(
                "zoom.max ({}) must be greater than zoom.min ({})",
                self.max_zoom, self.min_zoom
            ));
        }

        Ok(())
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed, or if the resulting values fail
    /// [`validate`](Self::validate); on error `self` is left untouched.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let mut loaded = self.clone();
        {
            let read = |section: &str, key: &str, target: &mut f32| -> Result<(), String> {
                let value = config
                    .getfloat(section, key)
                    .map_err(|e| format!("Invalid value for {}.{}: {}", section, key, e))?;
                if let Some(value) = value {
                    *target = value as f32;
                }
                Ok(())
            };

            // [world] section
            read("world", "width", &mut loaded.world_width)?;
            read("world", "height", &mut loaded.world_height)?;

            // [zoom] section
            read("zoom", "min", &mut loaded.min_zoom)?;
            read("zoom", "max", &mut loaded.max_zoom)?;
            read("zoom", "duration", &mut loaded.zoom_seconds)?;

            // [rotate] section
            read("rotate", "duration", &mut loaded.rotate_seconds)?;

            // [pan] section
            read("pan", "speed", &mut loaded.pan_speed)?;

            // [shake] section
            read("shake", "max_x", &mut loaded.shake_max_x)?;
            read("shake", "max_y", &mut loaded.shake_max_y)?;
            read("shake", "max_rotation", &mut loaded.shake_max_rotation)?;
            read("shake", "duration", &mut loaded.shake_seconds)?;
        }

        loaded
            .validate()
            .map_err(|e| format!("Invalid config file {:?}: {}", self.config_path, e))?;
        *self = loaded;

        info!(
            "Loaded config: world {}x{}, zoom {}..{} over {}s, rotate {}s, pan {}/s, shake ({}, {}, {}deg) for {}s",
            self.world_width,
            self.world_height,
            self.min_zoom,
            self.max_zoom,
            self.zoom_seconds,
            self.rotate_seconds,
            self.pan_speed,
            self.shake_max_x,
            self.shake_max_y,
            self.shake_max_rotation,
            self.shake_seconds
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [world] section
        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));

        // [zoom] section
        config.set("zoom", "min", Some(self.min_zoom.to_string()));
        config.set("zoom", "max", Some(self.max_zoom.to_string()));
        config.set("zoom", "duration", Some(self.zoom_seconds.to_string()));

        // [rotate] section
        config.set("rotate", "duration", Some(self.rotate_seconds.to_string()));

        // [pan] section
        config.set("pan", "speed", Some(self.pan_speed.to_string()));

        // [shake] section
        config.set("shake", "max_x", Some(self.shake_max_x.to_string()));
        config.set("shake", "max_y", Some(self.shake_max_y.to_string()));
        config.set(
            "shake",
            "max_rotation",
            Some(self.shake_max_rotation.to_string()),
        );
        config.set("shake", "duration", Some(self.shake_seconds.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
