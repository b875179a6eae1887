//! Affine transforms made of a 3x3 basis and a translation.

use cgmath::{Matrix3, Matrix4, Rad, Vector3};
use cgmath::prelude::*;

use std::ops::Mul;

/// Basis plus origin. The columns of `basis` are the transformed
/// local x, y and z axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub basis: Matrix3<f32>,
    pub origin: Vector3<f32>
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::identity()
    }
}

impl Transform {
    pub fn new(basis: Matrix3<f32>, origin: Vector3<f32>) -> Transform {
        Transform { basis, origin }
    }

    pub fn identity() -> Transform {
        Transform {
            basis: Matrix3::identity(),
            origin: Vector3::zero()
        }
    }

    pub fn from_translation(origin: Vector3<f32>) -> Transform {
        Transform { origin, ..Transform::identity() }
    }

    /// A pure rotation around the given axis, which needs to be normalized.
    pub fn from_axis_angle(axis: Vector3<f32>, angle: f32) -> Transform {
        Transform {
            basis: Matrix3::from_axis_angle(axis, Rad(angle)),
            origin: Vector3::zero()
        }
    }

    /// Places a transform at `eye` so that its negative z axis points
    /// towards `target` and its y axis is as close to `up` as possible.
    ///
    /// If `target - eye` is perpendicular to `up`, the resulting y axis
    /// is exactly `up.normalize()`.
    pub fn looking_at(eye: Vector3<f32>, target: Vector3<f32>, up: Vector3<f32>) -> Transform {
        let v_z = -(target - eye).normalize();
        let v_x = up.cross(v_z).normalize();
        let v_y = v_z.cross(v_x);

        Transform {
            basis: Matrix3::from_cols(v_x, v_y, v_z),
            origin: eye
        }
    }

    /// Rotates around an axis given in the parent space. The rotation is
    /// applied after the existing transform, so it also moves the origin.
    pub fn rotated(&self, axis: Vector3<f32>, angle: f32) -> Transform {
        Transform::from_axis_angle(axis, angle) * *self
    }

    /// Uniformly scales the basis, leaving the origin in place.
    pub fn scaled_basis(&self, scale: f32) -> Transform {
        Transform {
            basis: self.basis * scale,
            origin: self.origin
        }
    }

    /// Inverse for any invertible basis, including non-uniform scale and shear.
    /// Returns `None` if the basis is singular.
    pub fn affine_inverse(&self) -> Option<Transform> {
        self.basis.invert().map(|inv_basis| {
            Transform {
                basis: inv_basis,
                origin: inv_basis * -self.origin
            }
        })
    }

    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        self.basis * point + self.origin
    }

    pub fn transform_vector(&self, vector: Vector3<f32>) -> Vector3<f32> {
        self.basis * vector
    }

    /// Column-major 4x4 equivalent, e.g. for GPU instance buffers.
    pub fn to_matrix4(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.origin) * Matrix4::from(self.basis)
    }

    /// The twelve floats of the transform: basis columns x, y, z, then origin.
    pub fn to_cols_array(&self) -> [f32; 12] {
        let b = &self.basis;
        let o = self.origin;
        [
            b.x.x, b.x.y, b.x.z,
            b.y.x, b.y.y, b.y.z,
            b.z.x, b.z.y, b.z.z,
            o.x, o.y, o.z
        ]
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Composes two transforms, `rhs` is applied first.
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            basis: self.basis * rhs.basis,
            origin: self.transform_point(rhs.origin)
        }
    }
}
