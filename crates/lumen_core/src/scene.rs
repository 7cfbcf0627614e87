//! Scene description types.
//!
//! A [`Scene`] is a plain configuration value: canvas size, camera position,
//! spheres and point lights. It owns all of its collections, so two scenes
//! never share object or light lists.

use lumen_math::Point;
use thiserror::Error;

use crate::colour::{Colour, ColourError};

/// Errors raised when a scene fails validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid canvas size {width}x{height}: both dimensions must be at least 2")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("sphere {index} has invalid radius {radius}: must be finite and positive")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("{what} has a non-finite position {position:?}")]
    NonFinitePosition { what: String, position: Point },

    #[error("invalid colour: {0}")]
    Colour(#[from] ColourError),
}

/// A sphere with a base colour and Phong material coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
    pub colour: Colour,

    /// Ambient coefficient, replicated into all channels
    pub ambient: f64,

    /// Lambert coefficient
    pub diffuse: f64,

    /// Phong coefficient
    pub specular: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            radius: 0.5,
            colour: Colour::WHITE,
            ambient: 0.05,
            diffuse: 1.0,
            specular: 1.0,
        }
    }
}

impl Sphere {
    /// Create a new sphere with default material coefficients.
    pub fn new(center: Point, radius: f64, colour: Colour) -> Self {
        Self {
            center,
            radius,
            colour,
            ..Default::default()
        }
    }

    /// Set the ambient, diffuse and specular coefficients.
    pub fn with_material(mut self, ambient: f64, diffuse: f64, specular: f64) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    fn has_valid_radius(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0
    }
}

/// A point light. Intensity is carried by the colour's magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point,
    pub colour: Colour,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            colour: Colour::WHITE,
        }
    }
}

impl Light {
    pub fn new(position: Point, colour: Colour) -> Self {
        Self { position, colour }
    }
}

/// Everything needed for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Camera (ray origin) position
    pub camera: Point,

    /// Spheres, rendered in this order
    pub spheres: Vec<Sphere>,

    /// Lights, accumulated in this order
    pub lights: Vec<Light>,
}

fn check_finite(what: &str, position: Point) -> Result<(), SceneError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinitePosition {
            what: what.to_string(),
            position,
        })
    }
}

fn default_camera() -> Point {
    Point::new(0.0, 0.0, -1.0)
}

fn default_lights() -> Vec<Light> {
    vec![Light::new(Point::new(1.0, 1.0, -1.0), Colour::WHITE)]
}

impl Scene {
    /// Create an empty scene with the default camera and a single white light.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            camera: default_camera(),
            spheres: Vec::new(),
            lights: default_lights(),
        }
    }

    /// Set the camera position.
    pub fn with_camera(mut self, camera: Point) -> Self {
        self.camera = camera;
        self
    }

    /// Append a sphere.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    /// Replace the light list.
    pub fn with_lights(mut self, lights: Vec<Light>) -> Self {
        self.lights = lights;
        self
    }

    /// Check canvas dimensions, positions and sphere radii.
    ///
    /// Every position must be finite, so no NaN reaches the renderer.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width < 2 || self.height < 2 {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        check_finite("camera", self.camera)?;

        for (index, sphere) in self.spheres.iter().enumerate() {
            check_finite(&format!("sphere {index}"), sphere.center)?;
            if !sphere.has_valid_radius() {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            check_finite(&format!("light {index}"), light.position)?;
        }

        Ok(())
    }

    /// Aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The built-in 200x200 scene: three overlapping spheres lit by a white
    /// key light and a distant green light.
    pub fn demo() -> Self {
        let sphere = |center: Point, colour: Colour, ambient: f64, diffuse: f64| {
            Sphere::new(center, 0.3, colour).with_material(ambient, diffuse, 0.9)
        };

        Self::new(200, 200)
            .with_lights(vec![
                Light::new(Point::new(1.0, 1.5, -1.0), Colour::WHITE),
                Light::new(Point::new(0.0, 33.0, 33.0), Colour::GREEN),
            ])
            .with_sphere(sphere(Point::ORIGIN, Colour::GREEN, 0.07, 0.6))
            .with_sphere(sphere(
                Point::new(-0.4, -0.2, 0.0),
                Colour::new(1.0, 0.0, 1.0),
                0.07,
                0.6,
            ))
            .with_sphere(sphere(
                Point::new(0.4, -0.2, 0.0),
                Colour::grey(16.0 / 255.0),
                0.2,
                0.4,
            ))
    }
}
