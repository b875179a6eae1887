use super::InstanceSink;

use crate::error::Result;
use crate::populate::MultiMeshInstance;

use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Bakes every visible instance into world space geometry, one OBJ object per instance.
pub struct ObjSink {
    obj_path: PathBuf
}

impl ObjSink {
    pub fn new<P: Into<PathBuf>>(obj_path: P) -> ObjSink {
        let obj_path = obj_path.into();

        assert!(obj_path.extension().is_some(), "Expected an obj path that ends with the extension .obj, got {:?}", obj_path);
        assert_eq!(obj_path.extension().unwrap(), "obj", "Expected an obj path that ends with the extension .obj, got {:?}", obj_path);

        ObjSink { obj_path }
    }

    pub fn write_to<W: Write>(&self, node: &MultiMeshInstance, obj: &mut W) -> Result<()> {
        writeln!(obj, "# scattered instances")?;
        writeln!(obj)?;

        let mut position_idx_base = 1_usize;

        for (instance_idx, (xform, mesh)) in node.meshes().into_iter().enumerate() {
            let xform = node.global_transform * xform;

            writeln!(obj, "o instance_{}", instance_idx)?;

            for vertex_idx in 0..mesh.vertex_count() {
                let p = xform.transform_point(mesh.position(vertex_idx));
                writeln!(obj, "v {} {} {}", p.x, p.y, p.z)?;
            }

            for tri_indices in mesh.indices.chunks(3) {
                writeln!(
                    obj,
                    "f {} {} {}",
                    position_idx_base + (tri_indices[0] as usize),
                    position_idx_base + (tri_indices[1] as usize),
                    position_idx_base + (tri_indices[2] as usize)
                )?;
            }

            writeln!(obj)?;

            position_idx_base += mesh.vertex_count();
        }

        Ok(())
    }
}

impl InstanceSink for ObjSink {
    fn serialize(&self, node: &MultiMeshInstance, output_prefix: &Path) -> Result<()> {
        let mut output_path = PathBuf::from(output_prefix);
        output_path.push(&self.obj_path);

        info!("Writing OBJ output file {:?}...", output_path);

        let mut obj = BufWriter::new(File::create(&output_path)?);
        self.write_to(node, &mut obj)?;
        obj.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::{Mesh, Transform, Triangle};
    use crate::populate::MultiMesh;
    use cgmath::Vector3;
    use std::sync::Arc;

    fn node_with_two_instances() -> MultiMeshInstance {
        let mesh = Mesh::from_triangles("tri", vec![
            Triangle::new(
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0)
            )
        ]);

        let mut multimesh = MultiMesh::new();
        multimesh.set_mesh(Some(Arc::new(mesh)));
        multimesh.set_transform_format(crate::populate::TransformFormat::Transform3D);
        multimesh.set_instance_count(2);
        multimesh.set_instance_transform(1, Transform::from_translation(Vector3::new(0.0, 0.0, 2.0)));

        let mut node = MultiMeshInstance::new(Transform::from_translation(Vector3::new(10.0, 0.0, 0.0)));
        node.set_multimesh(Some(multimesh));
        node
    }

    #[test]
    fn writes_one_object_per_instance() {
        let mut out = Vec::new();
        ObjSink::new("out.obj").write_to(&node_with_two_instances(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.matches("\no instance_").count(), 2);
        assert_eq!(out.lines().filter(|l| l.starts_with("v ")).count(), 6);
        assert!(out.contains("v 11 0 2\n"));
        // second instance refers to its own vertices
        assert!(out.contains("f 4 5 6\n"));
    }

    #[test]
    fn written_obj_loads_back() {
        let mut out = Vec::new();
        ObjSink::new("out.obj").write_to(&node_with_two_instances(), &mut out).unwrap();

        let mesh = Mesh::load_from_reader("baked", &mut out.as_slice()).unwrap();
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.aabb().max, Vector3::new(11.0, 1.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn rejects_other_extensions() {
        ObjSink::new("out.mtl");
    }
}
