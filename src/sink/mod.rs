//! Writers for populated multimeshes.

use std::path::Path;

use crate::error::Result;
use crate::populate::MultiMeshInstance;

pub mod obj;
pub mod xforms;

pub use self::obj::ObjSink;
pub use self::xforms::TransformSink;

pub trait InstanceSink {
    /// Writes the visible instances of the node to a file below `output_prefix`.
    fn serialize(&self, node: &MultiMeshInstance, output_prefix: &Path) -> Result<()>;
}
