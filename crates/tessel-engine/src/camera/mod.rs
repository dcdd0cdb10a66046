//! First-person camera.
//!
//! Pure CPU state: no GPU resources. Mutators take the frame delta in milliseconds
//! and refresh the cached view matrix before returning.

mod config;
mod first_person;

pub use config::CameraConfig;
pub use first_person::{Camera, CameraMove};
