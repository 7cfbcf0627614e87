// Re-export glam for convenience
pub use glam::DVec3;

// Lumen math types
mod point;
mod ray;
mod vector;

pub use point::Point;
pub use ray::Ray;
pub use vector::{DegenerateVectorError, Vector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn test_point_vector_interop() {
        let camera = Point::new(0.0, 0.0, -1.0);
        let center = Point::ORIGIN;
        let to_center = center - camera;
        assert_eq!(to_center, Vector::new(0.0, 0.0, 1.0));
        assert_eq!(camera + to_center, center);
    }
}
