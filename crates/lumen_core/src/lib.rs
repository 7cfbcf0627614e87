//! Lumen Core - colour model and scene description.
//!
//! This crate provides:
//!
//! - **Colour model**: `Colour` (clamped working-space colour) and `Rgb`
//!   (output-scaled integer colour)
//! - **Scene types**: `Scene`, `Sphere`, `Light`
//! - **Scene loading**: JSON scene files
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod colour;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use colour::{Colour, ColourError, Rgb, CHANNEL_MAX};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{Light, Scene, SceneError, Sphere};

/// Re-export the math types scenes are built from
pub use lumen_math::{Point, Vector};
