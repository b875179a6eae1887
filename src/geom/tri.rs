//!
//! Contains functionality for triangles.
//!

use cgmath::Vector3;
use cgmath::prelude::*;

use rand::Rng;

use super::xform::Transform;

/// Triangles with a smaller area than this are considered degenerate.
pub const AREA_EPSILON: f32 = 0.00001;

/// An infinite plane given by its unit normal and the distance
/// from the origin along that normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub d: f32
}

impl Plane {
    /// Signed distance of the point to the plane, positive on the side
    /// the normal points to.
    pub fn distance_to(&self, point: Vector3<f32>) -> f32 {
        self.normal.dot(point) - self.d
    }
}

/// The `Triangle` type encapsulates three vertex positions.
///
/// Front faces wind counter-clockwise, so the normal is
/// `(v1 - v0) x (v2 - v0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector3<f32>; 3]
}

impl Triangle {
    pub fn new(vertex0: Vector3<f32>, vertex1: Vector3<f32>, vertex2: Vector3<f32>) -> Triangle {
        Triangle {
            vertices: [vertex0, vertex1, vertex2]
        }
    }

    /// Calculates the area of the triangle as half the magnitude
    /// of the cross product of two edges.
    pub fn area(&self) -> f32 {
        let [p0, p1, p2] = self.vertices;
        (p0 - p1).cross(p0 - p2).magnitude() * 0.5
    }

    /// True if the triangle is too small to be sampled, or if its area is NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.area() >= AREA_EPSILON)
    }

    pub fn plane(&self) -> Plane {
        let [p0, p1, p2] = self.vertices;
        let normal = (p1 - p0).cross(p2 - p0).normalize();

        Plane { normal, d: normal.dot(p0) }
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.plane().normal
    }

    pub fn center(&self) -> Vector3<f32> {
        let one_over_three = 1.0 / 3.0;
        self.vertices.iter()
            .map(|v| *v * one_over_three)
            .sum()
    }

    /// Picks a uniformly distributed point inside the triangle.
    ///
    /// Two uniform numbers are sorted so that `a <= b` and the point
    /// is blended with the weights `[a, b - a, 1 - b]`.
    pub fn random_point_inside<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f32> {
        let mut a = rng.gen::<f32>();
        let mut b = rng.gen::<f32>();
        if a > b {
            ::std::mem::swap(&mut a, &mut b);
        }

        self.vertices[0] * a + self.vertices[1] * (b - a) + self.vertices[2] * (1.0 - b)
    }

    /// Compute barycentric coordinates [u, v, w] for
    /// the closest point to p on the triangle.
    pub fn barycentric_at(&self, p: Vector3<f32>) -> [f32; 3] {
        let v0 = self.vertices[1] - self.vertices[0];
        let v1 = self.vertices[2] - self.vertices[0];
        let v2 = p - self.vertices[0];

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        [u, v, w]
    }

    /// Moves all three vertices through the given transform.
    pub fn transformed(&self, xform: &Transform) -> Triangle {
        Triangle {
            vertices: [
                xform.transform_point(self.vertices[0]),
                xform.transform_point(self.vertices[1]),
                xform.transform_point(self.vertices[2])
            ]
        }
    }
}
