//! Lumen Renderer - CPU ray-sphere tracing with local shading.
//!
//! Casts one ray per pixel per sphere, shades hits with ambient, Lambert
//! and Phong terms, and writes the result as a plain-text P3 image.
//! Spheres are composited by scene order, not by depth.

mod bucket;
mod error;
mod hit;
mod image;
mod renderer;
mod shading;
mod viewport;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use hit::{hit_sphere, select_root, HitRecord};
pub use image::{ImageBuffer, OutputConfig, OUTPUT_MAXVAL};
pub use renderer::{render, RenderConfig, Renderer};
pub use shading::{lambert, phong, shade, SurfacePoint};
pub use viewport::Viewport;

/// Re-export scene and math types from the lower crates
pub use lumen_core::{Colour, Light, Rgb, Scene, Sphere};
pub use lumen_math::{Point, Ray, Vector};
