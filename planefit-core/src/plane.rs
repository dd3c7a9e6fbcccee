//! Plane representation

use crate::point::{Point3d, Vector3d};
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};

/// A 3D plane defined by the equation ax + by + cz + d = 0
///
/// Planes built with [`Plane3d::from_points`] have the whole 4-vector
/// `(a, b, c, d)` scaled to unit length, not just the normal. Distances are
/// still measured against the normal's own length, so the scaling does not
/// affect [`Plane3d::distance_to_point`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane3d {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane3d {
    /// Create a plane from raw coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a plane passing through three points
    ///
    /// The points are expected to be distinct and not collinear. Collinear
    /// input is not rejected: the normal collapses to zero and the resulting
    /// coefficients are NaN, which no point will ever count as an inlier of.
    pub fn from_points(p1: &Point3d, p2: &Point3d, p3: &Point3d) -> Self {
        let v1 = p2 - p1;
        let v2 = p3 - p1;
        let normal = v1.cross(&v2);
        let d = -normal.dot(&p1.coords);

        let coefficients = Vector4::new(normal.x, normal.y, normal.z, d);
        let coefficients = coefficients / coefficients.norm();

        Self::from_coefficients(&coefficients)
    }

    /// Create a plane from an `[a, b, c, d]` vector
    pub fn from_coefficients(coefficients: &Vector4<f64>) -> Self {
        Self::new(coefficients.x, coefficients.y, coefficients.z, coefficients.w)
    }

    /// Plane coefficients as `[a, b, c, d]`
    pub fn coefficients(&self) -> Vector4<f64> {
        Vector4::new(self.a, self.b, self.c, self.d)
    }

    /// Get the (unnormalized) normal vector of the plane
    pub fn normal(&self) -> Vector3d {
        Vector3d::new(self.a, self.b, self.c)
    }

    /// Evaluate `a*x + b*y + c*z + d` at a point
    pub fn signed_value(&self, point: &Point3d) -> f64 {
        self.normal().dot(&point.coords) + self.d
    }

    /// Perpendicular distance from a point to the plane
    ///
    /// Only meaningful while the normal is non-zero; a degenerate plane
    /// yields NaN or infinity.
    pub fn distance_to_point(&self, point: &Point3d) -> f64 {
        self.signed_value(point).abs() / self.normal().norm()
    }

    /// Whether all four coefficients are finite numbers
    pub fn is_finite(&self) -> bool {
        self.coefficients().iter().all(|c| c.is_finite())
    }
}
