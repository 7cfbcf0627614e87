//! Core ray-sphere renderer.
//!
//! Every sphere gets its own full pass over the image. A pixel hit by more
//! than one sphere ends up with the colour of the last sphere in scene
//! order; there is no depth test between spheres.

use std::time::Instant;

use lumen_core::{Light, Rgb, Scene, Sphere};
use lumen_math::{Point, Ray, Vector};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, DEFAULT_BUCKET_SIZE};
use crate::error::RenderResult;
use crate::hit::hit_sphere;
use crate::image::ImageBuffer;
use crate::shading::{shade, SurfacePoint};
use crate::viewport::Viewport;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Phong exponent (shininess sharpness)
    pub specular_exponent: f64,
    /// Render buckets in parallel instead of the sequential per-sphere loop
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            specular_exponent: 50.0,
            parallel: true,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Camera, viewport and scene contents for one render.
#[derive(Debug, Clone)]
pub struct Renderer {
    viewport: Viewport,
    camera: Point,
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    config: RenderConfig,
}

impl Renderer {
    /// Build a renderer from a scene, validating it first.
    pub fn new(scene: Scene, config: RenderConfig) -> RenderResult<Self> {
        scene.validate()?;
        let viewport = Viewport::for_scene(&scene)?;

        log::debug!(
            "Viewport {}x{}: aspect {:.4}, x from {} step {:.6}, y from {:.6} step {:.6}",
            viewport.width,
            viewport.height,
            viewport.aspect_ratio,
            viewport.x_min,
            viewport.dx,
            viewport.y_min,
            viewport.dy
        );

        Ok(Self {
            viewport,
            camera: scene.camera,
            spheres: scene.spheres,
            lights: scene.lights,
            config,
        })
    }

    /// Ray from the camera through pixel (x, y) towards `sphere`.
    ///
    /// The direction's z component is the sphere's depth relative to the
    /// camera, not a fixed image-plane distance.
    pub fn primary_ray(&self, sphere: &Sphere, x: u32, y: u32) -> RenderResult<Ray> {
        let (x0, y0) = self.viewport.pixel_to_world(x, y);
        let direction = Vector::new(
            x0 - self.camera.x(),
            y0 - self.camera.y(),
            sphere.center.z() - self.camera.z(),
        );
        Ok(Ray::new(self.camera, direction)?)
    }

    /// Shaded, output-scaled colour of `sphere` at pixel (x, y), or `None` on a miss.
    pub fn trace_sphere(&self, sphere: &Sphere, x: u32, y: u32) -> RenderResult<Option<Rgb>> {
        let ray = self.primary_ray(sphere, x, y)?;
        let to_center = sphere.center - self.camera;

        let Some(hit) = hit_sphere(&ray, sphere, to_center) else {
            return Ok(None);
        };

        let surface = SurfacePoint::new(hit.p, sphere, self.camera)?;
        let colour = shade(sphere, &surface, &self.lights, self.config.specular_exponent)?;
        Ok(Some(colour.to_output().abs()))
    }

    /// Final colour of pixel (x, y): the last sphere in scene order that hits it.
    pub fn trace_pixel(&self, x: u32, y: u32) -> RenderResult<Option<Rgb>> {
        self.spheres.iter().try_fold(None, |last, sphere| {
            Ok(self.trace_sphere(sphere, x, y)?.or(last))
        })
    }

    /// Render with the strategy chosen in the config.
    pub fn render(&self) -> RenderResult<ImageBuffer> {
        log::info!(
            "Rendering {}x{} with {} spheres, {} lights ({})",
            self.viewport.width,
            self.viewport.height,
            self.spheres.len(),
            self.lights.len(),
            if self.config.parallel { "parallel" } else { "sequential" }
        );

        let start = Instant::now();
        let image = if self.config.parallel {
            self.render_parallel()?
        } else {
            self.render_sequential()?
        };

        log::info!("Rendered in {:?}", start.elapsed());
        Ok(image)
    }

    /// Sequential reference loop: spheres, then rows, then columns.
    pub fn render_sequential(&self) -> RenderResult<ImageBuffer> {
        let mut image = ImageBuffer::new(self.viewport.width, self.viewport.height);

        for (index, sphere) in self.spheres.iter().enumerate() {
            log::debug!(
                "Pass {} of {}: sphere at {:?}",
                index + 1,
                self.spheres.len(),
                sphere.center
            );

            for y in 0..self.viewport.height {
                for x in 0..self.viewport.width {
                    if let Some(colour) = self.trace_sphere(sphere, x, y)? {
                        image.set_pixel(x, y, colour)?;
                    }
                }
            }
        }

        Ok(image)
    }

    /// Bucketed parallel render. Output is identical to [`Renderer::render_sequential`].
    pub fn render_parallel(&self) -> RenderResult<ImageBuffer> {
        let buckets = generate_buckets(
            self.viewport.width,
            self.viewport.height,
            self.config.bucket_size,
        );
        log::debug!("Rendering {} buckets", buckets.len());

        let results = buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, self))
            .collect::<RenderResult<Vec<_>>>()?;

        let mut image = ImageBuffer::new(self.viewport.width, self.viewport.height);
        for result in results {
            let bucket = result.bucket;
            for (i, pixel) in result.pixels.into_iter().enumerate() {
                if let Some(colour) = pixel {
                    let x = bucket.x + i as u32 % bucket.width;
                    let y = bucket.y + i as u32 / bucket.width;
                    image.set_pixel(x, y, colour)?;
                }
            }
        }

        Ok(image)
    }
}

/// Render a scene with the given configuration.
pub fn render(scene: Scene, config: RenderConfig) -> RenderResult<ImageBuffer> {
    Renderer::new(scene, config)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;
    use lumen_core::{Colour, SceneError};

    fn ambient_scene() -> Scene {
        Scene::new(10, 10)
            .with_lights(Vec::new())
            .with_sphere(
                Sphere::new(Point::ORIGIN, 0.3, Colour::GREEN).with_material(0.07, 0.6, 0.9),
            )
    }

    #[test]
    fn test_primary_ray_uses_sphere_depth() {
        let renderer = Renderer::new(ambient_scene(), RenderConfig::default()).unwrap();
        let far = Sphere::new(Point::new(0.0, 0.0, 9.0), 0.3, Colour::RED);

        let near_ray = renderer.primary_ray(&renderer.spheres[0], 0, 0).unwrap();
        let far_ray = renderer.primary_ray(&far, 0, 0).unwrap();

        let expected = Vector::new(-1.0, -1.0, 1.0).normalise().unwrap();
        assert_eq!(near_ray.direction(), expected);
        assert!(far_ray.direction().z() > near_ray.direction().z());
    }

    #[test]
    fn test_trace_center_and_corner() {
        let renderer = Renderer::new(ambient_scene(), RenderConfig::default()).unwrap();
        let sphere = &renderer.spheres[0];

        assert_eq!(renderer.trace_sphere(sphere, 4, 4).unwrap(), Some(Rgb::new(17, 17, 17)));
        assert_eq!(renderer.trace_sphere(sphere, 0, 0).unwrap(), None);
    }

    #[test]
    fn test_last_sphere_wins() {
        let near = Sphere::new(Point::ORIGIN, 0.3, Colour::WHITE).with_material(0.2, 0.0, 0.0);
        // Further back, but later in order
        let far = Sphere::new(Point::new(0.0, 0.0, 1.0), 0.3, Colour::WHITE)
            .with_material(0.4, 0.0, 0.0);
        let scene = Scene::new(10, 10)
            .with_lights(Vec::new())
            .with_sphere(near)
            .with_sphere(far);
        let renderer = Renderer::new(scene, RenderConfig::default()).unwrap();

        assert_eq!(renderer.trace_pixel(4, 4).unwrap(), Some(Rgb::new(102, 102, 102)));
        assert_eq!(renderer.trace_pixel(0, 0).unwrap(), None);
    }

    #[test]
    fn test_invalid_scene() {
        let result = Renderer::new(Scene::new(1, 10), RenderConfig::default());
        assert!(matches!(
            result,
            Err(RenderError::InvalidScene(SceneError::InvalidDimensions { width: 1, height: 10 }))
        ));

        let scene = Scene::new(10, 10).with_sphere(Sphere::new(Point::ORIGIN, -0.3, Colour::RED));
        assert!(matches!(
            Renderer::new(scene, RenderConfig::default()),
            Err(RenderError::InvalidScene(SceneError::InvalidRadius { .. }))
        ));
    }

    #[test]
    fn test_non_finite_camera_rejected() {
        let scene = ambient_scene().with_camera(Point::new(f64::NAN, 0.0, -1.0));
        assert!(matches!(
            Renderer::new(scene, RenderConfig::default()),
            Err(RenderError::InvalidScene(SceneError::NonFinitePosition { .. }))
        ));
    }

    #[test]
    fn test_degenerate_ray_is_an_error() {
        // Camera level with the sphere at the viewport's (x, y) of pixel (0, 0)
        let scene = Scene::new(10, 10)
            .with_camera(Point::new(-1.0, -1.0, 0.0))
            .with_sphere(Sphere::new(Point::ORIGIN, 0.3, Colour::RED));

        for parallel in [false, true] {
            let config = RenderConfig { parallel, ..Default::default() };
            let result = Renderer::new(scene.clone(), config).unwrap().render();
            assert!(matches!(result, Err(RenderError::DegenerateVector(_))));
        }
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.specular_exponent, 50.0);
        assert!(config.parallel);
        assert_eq!(config.bucket_size, DEFAULT_BUCKET_SIZE);
    }
}
