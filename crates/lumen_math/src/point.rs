//! Position in space.

use std::ops::{Add, Sub};

use glam::DVec3;
use serde::Deserialize;

use crate::Vector;

/// An immutable position in 3D space.
///
/// Shares the component layout of [`Vector`] but is a distinct type:
/// `Point - Point` is a displacement `Vector`, `Point + Vector` is a `Point`.
///
/// Scene files write points as `[x, y, z]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Point(DVec3);

impl Point {
    pub const ORIGIN: Point = Point(DVec3::ZERO);

    /// Create a new point.
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

    /// Displacement from `origin` to this point.
    #[inline]
    pub fn displacement_from(self, origin: Point) -> Vector {
        Vector::from(self.0 - origin.0)
    }

    /// True if no coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// This point moved by `offset`.
    #[inline]
    pub fn translate(self, offset: Vector) -> Point {
        Point(self.0 + offset.as_dvec3())
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        self.displacement_from(rhs)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translate(rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point(self.0 - rhs.as_dvec3())
    }
}
