//! Face templates and the per-chunk geometry payload.
//!
//! # Architecture
//! - [`Face`]: one visible quad of a voxel in chunk-local space
//! - [`ChunkGeometry`]: flat position/normal/uv/index buffers for a whole chunk
//!
//! Meshing is naive face culling: every solid voxel contributes one quad per
//! side whose neighbor is empty. Coplanar faces are never merged.

mod face;
mod mesh;

pub use face::{corners, Face, FaceCorner};
pub use mesh::*;
