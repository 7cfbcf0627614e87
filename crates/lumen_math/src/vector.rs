//! Free direction/displacement vector.

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec3;
use thiserror::Error;

/// Returned when normalising a vector whose magnitude is zero.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot normalise a zero-length vector")]
pub struct DegenerateVectorError;

/// A 3D direction or displacement with 64-bit components.
///
/// All operations are pure and return new values. Positions live in
/// [`Point`](crate::Point); subtracting two points yields a `Vector`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(DVec3);

impl Vector {
    pub const ZERO: Vector = Vector(DVec3::ZERO);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Multiply every component by `k`.
    #[inline]
    pub fn scale(self, k: f64) -> Vector {
        Vector(self.0 * k)
    }

    /// Euclidean inner product.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit-length vector pointing the same way.
    ///
    /// Each component is divided by the magnitude rather than multiplied by
    /// its reciprocal, so results match a plain `x / m` evaluation bit for bit.
    pub fn normalise(self) -> Result<Vector, DegenerateVectorError> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(DegenerateVectorError);
        }
        Ok(self / m)
    }

    /// The underlying glam vector.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector(self.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_operations() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_operands_untouched() {
        let a = Vector::new(1.0, 1.0, 1.0);
        let _ = a.scale(10.0);
        assert_eq!(a, Vector::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_dot_and_magnitude() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_normalise_unit_length() {
        let samples = [
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(3.0, 4.0, 0.0),
            Vector::new(-0.2, 0.7, 11.0),
            Vector::new(1e-6, -3e-7, 2e-6),
            Vector::new(1e6, 2e6, -3e6),
        ];

        for v in samples {
            let n = v.normalise().unwrap();
            assert!((n.magnitude() - 1.0).abs() < 1e-12, "{:?} -> {:?}", v, n);
        }
    }

    #[test]
    fn test_normalise_divides_components() {
        let v = Vector::new(0.3, -0.1, 1.0);
        let m = (0.3f64 * 0.3 + 0.1 * 0.1 + 1.0).sqrt();
        let n = v.normalise().unwrap();
        assert_eq!(n.x(), 0.3 / m);
        assert_eq!(n.y(), -0.1 / m);
        assert_eq!(n.z(), 1.0 / m);
    }

    #[test]
    fn test_normalise_zero_fails() {
        assert_eq!(Vector::ZERO.normalise(), Err(DegenerateVectorError));
        assert_eq!(Vector::new(0.0, -0.0, 0.0).normalise(), Err(DegenerateVectorError));
    }
}
