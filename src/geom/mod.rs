//! Contains geometric primitives the sampler relies on:
//! triangles, transforms, bounding boxes and indexed meshes.

pub mod aabb;
pub mod mesh;
pub mod tri;
pub mod xform;

pub use self::aabb::Aabb;
pub use self::mesh::Mesh;
pub use self::tri::{Plane, Triangle, AREA_EPSILON};
pub use self::xform::Transform;
