//! Aberred Camera library.
//!
//! A 2D viewport controller: zoom, rotation, world-clamped panning and a
//! self-restoring camera shake, advanced frame by frame from elapsed time and
//! the commands held that frame. Exposed as ECS resources, systems and events
//! for use by front-ends and integration tests.

pub mod app;
pub mod events;
pub mod resources;
pub mod script;
pub mod systems;
