use std::sync::Arc;
use std::time::Instant;

use rand::Rng;

use crate::error::{Error, Result};
use crate::geom::{Aabb, Mesh, Transform};
use crate::sampling::{instances, AreaIndex, ScatterConfig};

use super::multimesh::{MultiMesh, TransformFormat};

/// A mesh placed somewhere in the world, used as the surface to scatter on.
#[derive(Debug, Clone, Default)]
pub struct MeshInstance {
    pub mesh: Option<Arc<Mesh>>,
    pub global_transform: Transform
}

impl MeshInstance {
    pub fn new(mesh: Arc<Mesh>, global_transform: Transform) -> MeshInstance {
        MeshInstance {
            mesh: Some(mesh),
            global_transform
        }
    }
}

/// Owns a multimesh and places its instances relative to its own global transform.
#[derive(Debug, Clone, Default)]
pub struct MultiMeshInstance {
    pub global_transform: Transform,
    multimesh: Option<MultiMesh>
}

impl MultiMeshInstance {
    pub fn new(global_transform: Transform) -> MultiMeshInstance {
        MultiMeshInstance {
            global_transform,
            multimesh: None
        }
    }

    pub fn multimesh(&self) -> Option<&MultiMesh> {
        self.multimesh.as_ref()
    }

    pub fn set_multimesh(&mut self, multimesh: Option<MultiMesh>) {
        self.multimesh = multimesh;
    }

    /// Scatters `config.amount` instances of a mesh over the target surface and
    /// replaces the multimesh of this node with them.
    ///
    /// The mesh is `source_mesh` or, if `None`, the mesh of the current multimesh.
    /// Instance transforms are relative to this node, so the target surface is
    /// moved into the local space of this node first.
    ///
    /// Nothing is changed if any step fails.
    pub fn populate_surface<R: Rng>(
        &mut self,
        target_surface: Option<&MeshInstance>,
        source_mesh: Option<Arc<Mesh>>,
        config: &ScatterConfig,
        rng: R
    ) -> Result<()> {
        config.validate()?;

        let source_mesh = match source_mesh {
            Some(mesh) => mesh,
            None => self.multimesh.as_ref()
                .and_then(|m| m.mesh())
                .cloned()
                .ok_or(Error::NoMeshSource)?
        };

        let (target_mesh, target_transform) = match target_surface {
            Some(MeshInstance { mesh: Some(mesh), global_transform }) => (mesh, global_transform),
            _ => return Err(Error::InvalidSurfaceSource)
        };

        if !target_mesh.has_valid_indices() {
            warn!("Surface {} refers to vertices it does not have", target_mesh.name);
            return Err(Error::InvalidSurfaceSource);
        }

        if target_mesh.face_count() == 0 {
            return Err(Error::NoFaces);
        }

        let geom_xform = self.global_transform
            .affine_inverse()
            .ok_or(Error::SingularTransform)?
            * *target_transform;

        let faces: Vec<_> = target_mesh.triangles()
            .map(|t| t.transformed(&geom_xform))
            .collect();

        info!(
            "Populating {} with {} instances of {} ({} faces)...",
            target_mesh.name, config.amount, source_mesh.name, faces.len()
        );
        let start_time = Instant::now();

        let index = AreaIndex::build(&faces)?;

        let mut multimesh = MultiMesh::new();
        multimesh.set_mesh(Some(source_mesh));
        multimesh.set_transform_format(TransformFormat::Transform3D);
        multimesh.set_use_colors(false);
        multimesh.set_instance_count(config.amount);

        for (i, xform) in instances(&index, &faces, config, rng).enumerate() {
            multimesh.set_instance_transform(i, xform?);
        }

        info!("Ok, took {}ms", start_time.elapsed().as_millis());

        self.multimesh = Some(multimesh);
        Ok(())
    }

    /// Pairs of instance transform and mesh for every visible instance.
    ///
    /// Empty if there is nothing to draw in 3D.
    pub fn meshes(&self) -> Vec<(Transform, Arc<Mesh>)> {
        let multimesh = match self.multimesh {
            Some(ref multimesh) if multimesh.transform_format() == TransformFormat::Transform3D => multimesh,
            _ => return Vec::new()
        };

        match multimesh.mesh() {
            Some(mesh) => multimesh.visible_transforms()
                .iter()
                .map(|xform| (*xform, Arc::clone(mesh)))
                .collect(),
            None => Vec::new()
        }
    }

    /// Bounds of the visible instances in the local space of this node.
    pub fn aabb(&self) -> Option<Aabb> {
        self.multimesh.as_ref().and_then(|m| m.aabb())
    }

    /// World space transforms of the visible instances.
    pub fn global_instance_transforms(&self) -> Vec<Transform> {
        self.meshes()
            .into_iter()
            .map(|(xform, _)| self.global_transform * xform)
            .collect()
    }
}
