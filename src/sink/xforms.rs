use super::InstanceSink;

use crate::error::Result;
use crate::populate::MultiMeshInstance;

use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes the world space transform of every visible instance as one line of
/// twelve numbers: the x, y and z basis columns followed by the origin.
pub struct TransformSink {
    path: PathBuf
}

impl TransformSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> TransformSink {
        TransformSink { path: path.into() }
    }

    pub fn write_to<W: Write>(&self, node: &MultiMeshInstance, out: &mut W) -> Result<()> {
        for xform in node.global_instance_transforms() {
            let line: Vec<String> = xform.to_cols_array()
                .iter()
                .map(|f| f.to_string())
                .collect();

            writeln!(out, "{}", line.join(" "))?;
        }

        Ok(())
    }
}

impl InstanceSink for TransformSink {
    fn serialize(&self, node: &MultiMeshInstance, output_prefix: &Path) -> Result<()> {
        let mut output_path = PathBuf::from(output_prefix);
        output_path.push(&self.path);

        info!("Writing instance transforms to {:?}...", output_path);

        let mut out = BufWriter::new(File::create(&output_path)?);
        self.write_to(node, &mut out)?;
        out.flush()?;

        Ok(())
    }
}
