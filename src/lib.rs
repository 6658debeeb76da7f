//! Oceanwave library - Gerstner wave field with surface queries

pub mod camera;
pub mod cli;
pub mod error;
pub mod floating;
pub mod gpu;
pub mod ocean;
pub mod params;
