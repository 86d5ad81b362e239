//! Camera systems.
//!
//! Submodules overview
//! - [`camera`] – advance the [`crate::resources::camera2d::CameraController`] from time and commands
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod time;
