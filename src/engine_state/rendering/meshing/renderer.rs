//! Renderer boundary for chunk geometry.
//!
//! The engine never talks to a graphics API directly. Every rebuilt chunk is handed
//! to a [`ChunkRenderer`], which owns whatever GPU objects it needs. The contract is
//! one renderable per chunk id: created on the first upload for that id and updated
//! in place on every later upload.

use std::collections::HashMap;

use cgmath::Point3;
use log::debug;

use super::ChunkGeometry;
use crate::engine_state::voxels::chunk::ChunkCoord;

/// Receives rebuilt chunk geometry.
pub trait ChunkRenderer {
    /// Uploads the geometry for `chunk`.
    ///
    /// `placement` is the world-space position of the chunk's minimum corner; the
    /// geometry's positions are relative to it. It is widened to `i64` because the
    /// outermost chunks can start outside the `i32` range.
    fn upload_chunk_geometry(
        &mut self,
        chunk: ChunkCoord,
        placement: Point3<i64>,
        geometry: ChunkGeometry,
    );
}

/// The renderable kept for a single chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRenderable {
    /// World-space position of the chunk's minimum corner
    pub placement: Point3<i64>,
    /// The most recently uploaded geometry
    pub geometry: ChunkGeometry,
    /// Number of uploads since creation, starting at 0 for the creating upload
    pub revision: u32,
}

/// Headless renderer that keeps the latest geometry for each chunk.
///
/// Used by the demo binary and tests, and as a reference for how a GPU renderer
/// should treat repeated uploads for the same chunk id.
#[derive(Debug, Default)]
pub struct RenderableRegistry {
    renderables: HashMap<ChunkCoord, ChunkRenderable>,
}

impl RenderableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The renderable for `chunk`, if geometry has been uploaded for it.
    pub fn get(&self, chunk: ChunkCoord) -> Option<&ChunkRenderable> {
        self.renderables.get(&chunk)
    }

    /// Number of renderables created so far (one per distinct chunk id).
    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    /// Returns `true` if nothing has been uploaded yet.
    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// Total number of faces across all renderables.
    pub fn total_face_count(&self) -> usize {
        self.renderables
            .values()
            .map(|r| r.geometry.face_count())
            .sum()
    }
}

impl ChunkRenderer for RenderableRegistry {
    fn upload_chunk_geometry(
        &mut self,
        chunk: ChunkCoord,
        placement: Point3<i64>,
        geometry: ChunkGeometry,
    ) {
        match self.renderables.get_mut(&chunk) {
            Some(renderable) => {
                renderable.geometry = geometry;
                renderable.revision += 1;
            }
            None => {
                debug!("Creating renderable for chunk {:?} at {:?}", chunk, placement);
                self.renderables.insert(
                    chunk,
                    ChunkRenderable {
                        placement,
                        geometry,
                        revision: 0,
                    },
                );
            }
        }
    }
}
