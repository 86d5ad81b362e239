//! ECS resources made available to systems.
//!
//! Overview
//! - `camera2d` – the camera controller: state, shake, and read-back
//! - `cameraconfig` – fixed camera constants, loaded from an INI file
//! - `input` – camera commands held during the current frame
//! - `shakerandom` – injectable random source for camera shake
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod cameraconfig;
pub mod input;
pub mod shakerandom;
pub mod worldtime;
