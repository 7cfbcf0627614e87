//! Scene file loading.
//!
//! Scenes are stored as JSON documents mirroring [`Scene`]:
//!
//! ```json
//! {
//!   "width": 200,
//!   "height": 200,
//!   "camera": [0.0, 0.0, -1.0],
//!   "spheres": [
//!     { "center": [0.0, 0.0, 0.0], "radius": 0.3, "colour": "#00ff00",
//!       "ambient": 0.07, "diffuse": 0.6, "specular": 0.9 }
//!   ],
//!   "lights": [ { "position": [1.0, 1.5, -1.0], "colour": "#ffffff" } ]
//! }
//! ```
//!
//! `camera` and `lights` fall back to the defaults of [`Scene::new`], and
//! omitted sphere fields fall back to [`Sphere::default`]. Colours may also be
//! written as `{ "r": .., "g": .., "b": .. }`.

use std::path::Path;

use lumen_math::Point;
use serde::Deserialize;
use thiserror::Error;

use crate::colour::{Colour, ColourError, ColourRepr};
use crate::scene::{Light, Scene, SceneError, Sphere};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Top-level layout of a scene file.
#[derive(Deserialize)]
struct SceneFile {
    width: u32,
    height: u32,
    #[serde(default)]
    camera: Option<Point>,
    #[serde(default)]
    spheres: Vec<SphereEntry>,
    #[serde(default)]
    lights: Option<Vec<LightEntry>>,
}

#[derive(Deserialize)]
#[serde(default)]
struct SphereEntry {
    center: Point,
    radius: f64,
    colour: ColourRepr,
    ambient: f64,
    diffuse: f64,
    specular: f64,
}

impl Default for SphereEntry {
    fn default() -> Self {
        let sphere = Sphere::default();
        Self {
            center: sphere.center,
            radius: sphere.radius,
            colour: sphere.colour.into(),
            ambient: sphere.ambient,
            diffuse: sphere.diffuse,
            specular: sphere.specular,
        }
    }
}

impl SphereEntry {
    fn into_sphere(self) -> Result<Sphere, ColourError> {
        let colour = Colour::try_from(self.colour)?;
        Ok(Sphere::new(self.center, self.radius, colour).with_material(
            self.ambient,
            self.diffuse,
            self.specular,
        ))
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct LightEntry {
    position: Point,
    colour: ColourRepr,
}

impl Default for LightEntry {
    fn default() -> Self {
        let light = Light::default();
        Self {
            position: light.position,
            colour: light.colour.into(),
        }
    }
}

impl LightEntry {
    fn into_light(self) -> Result<Light, ColourError> {
        Ok(Light::new(self.position, Colour::try_from(self.colour)?))
    }
}

impl SceneFile {
    /// Build the scene, decoding every colour.
    fn into_scene(self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.width, self.height);

        if let Some(camera) = self.camera {
            scene = scene.with_camera(camera);
        }

        if let Some(lights) = self.lights {
            let lights = lights
                .into_iter()
                .map(LightEntry::into_light)
                .collect::<Result<Vec<_>, _>>()?;
            scene = scene.with_lights(lights);
        }

        for entry in self.spheres {
            scene = scene.with_sphere(entry.into_sphere()?);
        }

        Ok(scene)
    }
}

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(json)?;
    let scene = file.into_scene()?;
    scene.validate()?;

    log::debug!(
        "Parsed {}x{} scene with {} spheres, {} lights",
        scene.width,
        scene.height,
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}
