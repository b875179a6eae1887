use std::io::BufRead;
use std::path::Path;

use cgmath::Vector3;

use crate::error::Result;
use super::aabb::Aabb;
use super::tri::Triangle;

/// Indexed triangle mesh with flat position storage, three floats per vertex
/// and three indices per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub indices: Vec<u32>,
    pub positions: Vec<f32>
}

impl Mesh {
    pub fn new(name: &str, positions: Vec<f32>, indices: Vec<u32>) -> Mesh {
        assert_eq!(positions.len() % 3, 0, "Expected three floats per position");
        assert_eq!(indices.len() % 3, 0, "Expected three indices per triangle");

        Mesh { name: String::from(name), indices, positions }
    }

    /// Builds an indexed mesh from a triangle soup, without sharing vertices.
    pub fn from_triangles<I>(name: &str, triangles: I) -> Mesh
        where I: IntoIterator<Item = Triangle>
    {
        let mut positions = Vec::new();
        for tri in triangles {
            for v in tri.vertices.iter() {
                positions.extend_from_slice(&[v.x, v.y, v.z]);
            }
        }
        let indices = (0..(positions.len() / 3) as u32).collect();

        Mesh::new(name, positions, indices)
    }

    /// Loads the obj file at the given file system path into a new mesh.
    /// All contained models will be merged into a single mesh, materials are ignored.
    pub fn load_from_file<P: AsRef<Path>>(obj_file_path: P) -> Result<Mesh> {
        let obj_file_path = obj_file_path.as_ref();
        let (models, _materials) = tobj::load_obj(obj_file_path, &load_options())?;

        let name = obj_file_path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("mesh");

        Ok(merge_models(name, models))
    }

    /// Parses OBJ source from a reader, e.g. an in-memory string.
    /// `mtllib` statements are not followed.
    pub fn load_from_reader<B: BufRead>(name: &str, reader: &mut B) -> Result<Mesh> {
        let (models, _materials) = tobj::load_obj_buf(
            reader,
            &load_options(),
            |_| Err(tobj::LoadError::OpenFileFailed)
        )?;

        Ok(merge_models(name, models))
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, vertex_idx: usize) -> Vector3<f32> {
        let p = &self.positions[(3 * vertex_idx)..(3 * vertex_idx + 3)];
        Vector3::new(p[0], p[1], p[2])
    }

    /// True if positions and indices come in triples and every index
    /// refers to an existing vertex.
    pub fn has_valid_indices(&self) -> bool {
        let vertex_count = self.vertex_count();

        self.positions.len() % 3 == 0 &&
            self.indices.len() % 3 == 0 &&
            self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }

    /// Returns an iterator over the triangles of the mesh
    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = Triangle> + 'a {
        self.indices.chunks(3)
            .map(move |i| Triangle::new(
                self.position(i[0] as usize),
                self.position(i[1] as usize),
                self.position(i[2] as usize)
            ))
    }

    /// Expands the indexed mesh into a triangle soup.
    pub fn faces(&self) -> Vec<Triangle> {
        self.triangles().collect()
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_points((0..self.vertex_count()).map(|i| self.position(i)))
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

fn merge_models(name: &str, models: Vec<tobj::Model>) -> Mesh {
    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in models {
        let index_base = (positions.len() / 3) as u32;
        trace!("Merging OBJ model {} with {} triangles", model.name, model.mesh.indices.len() / 3);

        indices.extend(model.mesh.indices.iter().map(|i| index_base + i));
        positions.extend(model.mesh.positions);
    }

    Mesh::new(name, positions, indices)
}
