//! Ray-sphere intersection.

use lumen_core::Sphere;
use lumen_math::{Point, Ray, Vector};

/// Record of a ray-sphere intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the accepted root
    pub t: f64,
    /// Point of intersection
    pub p: Point,
}

/// Solve `a*t^2 + b*t + c = 0` and return the selected root.
///
/// The root is `-(-b - sqrt(discriminant)) / 2a`. It is accepted when the
/// discriminant is non-negative and the root itself is non-negative. The
/// choice of sign assumes the camera sits on the negative-z side of the
/// geometry.
#[inline]
pub fn select_root(a: f64, b: f64, c: f64) -> Option<f64> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = -(-b - discriminant.sqrt()) / (2.0 * a);
    (t >= 0.0).then_some(t)
}

/// Intersect `ray` with `sphere`.
///
/// `to_center` is `sphere.center - ray.origin()`; callers that cast many rays
/// from the same origin compute it once per sphere.
pub fn hit_sphere(ray: &Ray, sphere: &Sphere, to_center: Vector) -> Option<HitRecord> {
    let a = 1.0;
    let b = 2.0 * ray.direction().dot(to_center);
    let c = to_center.dot(to_center) - sphere.radius * sphere.radius;

    select_root(a, b, c).map(|t| HitRecord { t, p: ray.at(t) })
}
