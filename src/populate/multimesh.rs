use std::sync::Arc;

use crate::geom::{Aabb, Mesh, Transform};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransformFormat {
    Transform2D,
    Transform3D
}

/// One mesh drawn many times, once per instance transform.
#[derive(Debug, Clone)]
pub struct MultiMesh {
    mesh: Option<Arc<Mesh>>,
    transform_format: TransformFormat,
    use_colors: bool,
    transforms: Vec<Transform>,
    /// Draw only the first n instances, all of them if `None`
    visible_instance_count: Option<usize>
}

impl Default for MultiMesh {
    fn default() -> MultiMesh {
        MultiMesh::new()
    }
}

impl MultiMesh {
    pub fn new() -> MultiMesh {
        MultiMesh {
            mesh: None,
            transform_format: TransformFormat::Transform2D,
            use_colors: false,
            transforms: Vec::new(),
            visible_instance_count: None
        }
    }

    pub fn mesh(&self) -> Option<&Arc<Mesh>> {
        self.mesh.as_ref()
    }

    pub fn set_mesh(&mut self, mesh: Option<Arc<Mesh>>) {
        self.mesh = mesh;
    }

    pub fn transform_format(&self) -> TransformFormat {
        self.transform_format
    }

    pub fn set_transform_format(&mut self, transform_format: TransformFormat) {
        self.transform_format = transform_format;
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    pub fn set_use_colors(&mut self, use_colors: bool) {
        self.use_colors = use_colors;
    }

    pub fn instance_count(&self) -> usize {
        self.transforms.len()
    }

    /// Resizes the instance buffer, new instances get the identity transform.
    pub fn set_instance_count(&mut self, instance_count: usize) {
        self.transforms.resize(instance_count, Transform::identity());
    }

    pub fn visible_instance_count(&self) -> usize {
        self.visible_instance_count
            .map(|count| count.min(self.instance_count()))
            .unwrap_or_else(|| self.instance_count())
    }

    pub fn set_visible_instance_count(&mut self, visible_instance_count: Option<usize>) {
        self.visible_instance_count = visible_instance_count;
    }

    pub fn instance_transform(&self, instance_idx: usize) -> Option<&Transform> {
        self.transforms.get(instance_idx)
    }

    /// Panics if `instance_idx` is out of bounds.
    pub fn set_instance_transform(&mut self, instance_idx: usize, transform: Transform) {
        assert!(
            instance_idx < self.transforms.len(),
            "Instance index {} out of bounds for {} instances", instance_idx, self.transforms.len()
        );
        self.transforms[instance_idx] = transform;
    }

    /// Transforms of the visible instances.
    pub fn visible_transforms(&self) -> &[Transform] {
        &self.transforms[..self.visible_instance_count()]
    }

    /// Bounds of all visible instances of the mesh, `None` without a mesh.
    pub fn aabb(&self) -> Option<Aabb> {
        let mesh_aabb = self.mesh.as_ref()?.aabb();

        Some(Aabb::union(
            self.visible_transforms()
                .iter()
                .map(|xform| mesh_aabb.transformed(xform))
        ))
    }
}
