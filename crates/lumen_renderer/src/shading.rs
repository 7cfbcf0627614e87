//! Local shading: ambient + Lambert diffuse + Phong specular.

use lumen_core::{Colour, Light, Sphere};
use lumen_math::{DegenerateVectorError, Point, Vector};

/// Lambert (diffuse) factor for a surface normal and a surface-to-light vector.
///
/// `max(-n̂ · l̂ * coefficient, 0)`
pub fn lambert(
    light: Vector,
    normal: Vector,
    coefficient: f64,
) -> Result<f64, DegenerateVectorError> {
    Ok((-normal.normalise()?.dot(light.normalise()?) * coefficient).max(0.0))
}

/// Phong (specular) factor using the half-vector between viewer and light.
///
/// `max(-ĥ · n̂, 0) ^ exponent * coefficient`
pub fn phong(
    viewer: Vector,
    light: Vector,
    normal: Vector,
    coefficient: f64,
    exponent: f64,
) -> Result<f64, DegenerateVectorError> {
    let half = (viewer + light).normalise()?;
    Ok((-half.dot(normal.normalise()?)).max(0.0).powf(exponent) * coefficient)
}

/// Geometry of a shaded surface point.
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    pub p: Point,
    /// Unit outward normal
    pub normal: Vector,
    /// Surface-to-camera vector
    pub viewer: Vector,
}

impl SurfacePoint {
    pub fn new(p: Point, sphere: &Sphere, camera: Point) -> Result<Self, DegenerateVectorError> {
        Ok(Self {
            p,
            normal: (p - sphere.center).normalise()?,
            viewer: camera - p,
        })
    }
}

/// Colour observed at `surface` on `sphere`, lit by `lights` in order.
///
/// Starts from the ambient term. For each light the diffuse and specular
/// terms are added to the running colour, and that sum is added to the
/// running colour once more. Every addition clamps at 1, so the result
/// depends on light order.
pub fn shade(
    sphere: &Sphere,
    surface: &SurfacePoint,
    lights: &[Light],
    specular_exponent: f64,
) -> Result<Colour, DegenerateVectorError> {
    let mut observed = Colour::grey(sphere.ambient);

    for light in lights {
        let to_light = light.position - surface.p;

        let diffuse = lambert(to_light, surface.normal, sphere.diffuse)?;
        let specular = phong(
            surface.viewer,
            to_light,
            surface.normal,
            sphere.specular,
            specular_exponent,
        )?;

        let lit = observed + sphere.colour * diffuse + light.colour * specular;
        observed = observed + lit;
    }

    Ok(observed)
}
