//! Host side of scattering: resolves the mesh to instance and the surface to
//! scatter on, then stores the generated transforms in a multimesh.

mod multimesh;
mod node;

pub use self::multimesh::{MultiMesh, TransformFormat};
pub use self::node::{MeshInstance, MultiMeshInstance};
