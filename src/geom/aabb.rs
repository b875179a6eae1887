use std::f32::{INFINITY, NEG_INFINITY};
use cgmath::Vector3;

use super::xform::Transform;

/// An axis-aligned bounding box in 3D
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>
}

impl Aabb {
    fn inverted() -> Aabb {
        Aabb {
            min: Vector3::new(INFINITY, INFINITY, INFINITY),
            max: Vector3::new(NEG_INFINITY, NEG_INFINITY, NEG_INFINITY)
        }
    }

    /// Creates the smallest aabb that encloses all of the points returned
    /// by the given iterator.
    /// Returns an aabb with max at negative infinity and min at positive infinity if
    /// the given iterator was empty.
    pub fn from_points<P>(points: P) -> Aabb
        where P: IntoIterator<Item = Vector3<f32>>
    {
        points.into_iter()
            .fold(
                Aabb::inverted(),
                |Aabb { min, max }, p| {
                    Aabb {
                        min: Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                        max: Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z))
                    }
                }
            )
    }

    /// Returns the smallest aabb that encloses all of the aabb in the given iterator.
    /// Returns an aabb with max at negative infinity and min at positive infinity if
    /// the given iterator was empty.
    pub fn union<A>(aabbs: A) -> Aabb
        where A: IntoIterator<Item = Aabb>
    {
        Aabb::from_points(
            aabbs.into_iter()
                .filter(|a| !a.is_empty())
                .flat_map(|a| vec![a.min, a.max])
        )
    }

    /// True for the result of folding over nothing.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn corners(&self) -> [Vector3<f32>; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, max.y, max.z)
        ]
    }

    /// Bounds of this box after moving it through the given transform.
    pub fn transformed(&self, xform: &Transform) -> Aabb {
        if self.is_empty() {
            return *self;
        }

        Aabb::from_points(
            self.corners()
                .iter()
                .map(|c| xform.transform_point(*c))
        )
    }

    pub fn is_point_inside(&self, point: Vector3<f32>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
            point.y >= self.min.y && point.y <= self.max.y &&
            point.z >= self.min.z && point.z <= self.max.z
    }

    pub fn is_aabb_inside(&self, other: &Aabb) -> bool {
        self.is_point_inside(other.min) && self.is_point_inside(other.max)
    }

    pub fn volume(&self) -> f32 {
        let dims = self.max - self.min;
        dims.x * dims.y * dims.z
    }
}
