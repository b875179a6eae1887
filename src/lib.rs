//! Scatters instances of a mesh over a triangle surface, with a density
//! proportional to surface area and randomized rotation, tilt and scale.
//!
//! ```
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use scatter::{Mesh, MeshInstance, MultiMeshInstance, ScatterConfig, Transform};
//!
//! let floor = Arc::new(Mesh::new(
//!     "floor",
//!     vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0],
//!     vec![0, 1, 2, 0, 2, 3]
//! ));
//! let target = MeshInstance::new(floor.clone(), Transform::identity());
//!
//! let mut node = MultiMeshInstance::default();
//! node.populate_surface(
//!     Some(&target),
//!     Some(floor),
//!     &ScatterConfig::new().amount(100).random_rotation(1.0),
//!     StdRng::seed_from_u64(1)
//! ).unwrap();
//!
//! assert_eq!(node.meshes().len(), 100);
//! ```

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod error;
pub mod geom;
pub mod populate;
pub mod sampling;
pub mod sink;

pub use error::{Error, Result};
pub use geom::{Aabb, Mesh, Transform, Triangle};
pub use populate::{MeshInstance, MultiMesh, MultiMeshInstance, TransformFormat};
pub use sampling::{AreaIndex, ScatterConfig, UpAxis};
