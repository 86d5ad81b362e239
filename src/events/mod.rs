//! Event types and observers.
//!
//! Submodules:
//! - [`resize`] – viewport size changes that recenter the camera
pub mod resize;
