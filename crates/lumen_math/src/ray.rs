use crate::{DegenerateVectorError, Point, Vector};

/// A ray in 3D space with an origin and a unit-length direction.
///
/// Rays are cast from the camera position through each pixel of the
/// viewport. The direction is normalised on construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// Create a new ray, normalising `direction`.
    ///
    /// Fails if `direction` has zero length.
    pub fn new(origin: Point, direction: Vector) -> Result<Self, DegenerateVectorError> {
        Ok(Self {
            origin,
            direction: direction.normalise()?,
        })
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vector::new(0.0, 4.0, 0.0)).unwrap();

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), Vector::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::ORIGIN, Vector::new(1.0, 0.0, 0.0)).unwrap();

        assert_eq!(ray.at(0.0), Point::ORIGIN);
        assert_eq!(ray.at(1.0), Point::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Point::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_zero_direction() {
        assert_eq!(
            Ray::new(Point::ORIGIN, Vector::ZERO),
            Err(DegenerateVectorError)
        );
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Point::ORIGIN, Vector::new(0.0, 1.0, 0.0)).unwrap();
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin(), ray2.origin());
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
