use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no mesh source specified (and the node holds no multimesh with a mesh)")]
    NoMeshSource,
    #[error("target surface is invalid (no geometry)")]
    InvalidSurfaceSource,
    #[error("surface source is invalid (no faces)")]
    NoFaces,
    #[error("couldn't map area, every face is degenerate")]
    DegenerateSurface,
    #[error("sampled triangle index {index} outside of [0, {face_count})")]
    IndexOutOfRange { index: usize, face_count: usize },
    #[error("parameter {name} out of range: {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("global transform of the populated node is not invertible")]
    SingularTransform,
    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
