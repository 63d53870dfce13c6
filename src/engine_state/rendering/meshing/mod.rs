//! Mesh generation for voxel chunks.
//!
//! This module turns the voxels of one chunk into a [`ChunkGeometry`] payload and
//! hands it to a [`ChunkRenderer`].
//!
//! # Architecture
//! - `MeshBuilder`: walks a chunk and emits one quad per exposed face
//! - `mesh/`: face templates and the geometry payload
//! - `renderer`: the renderer boundary and a headless registry implementation
//!
//! # Chunk Boundaries
//! Neighbor lookups go through the [`World`], not the chunk, so a voxel on the
//! edge of a chunk is culled against whatever the adjacent chunk currently holds.
//! Editing a boundary voxel therefore requires rebuilding the neighbor chunk too.
//!
//! # Performance Considerations
//! - Every build is a full rebuild: O(chunk volume × 6) neighbor reads
//! - No incremental diffing against the previous payload

use cgmath::Point3;
use log::trace;

mod mesh;
mod renderer;

pub use mesh::*;
pub use renderer::*;

use crate::{
    config::AtlasLayout,
    engine_state::voxels::{block::block_side::BlockSide, chunk::ChunkCoord, world::World},
};

/// Builds chunk geometry with naive per-face culling.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    atlas: AtlasLayout,
}

impl MeshBuilder {
    /// Creates a mesh builder that maps UVs into the given atlas layout.
    pub fn new(atlas: AtlasLayout) -> Self {
        MeshBuilder { atlas }
    }

    /// The atlas layout UVs are mapped into.
    pub fn atlas(&self) -> &AtlasLayout {
        &self.atlas
    }

    /// Generates the geometry for one chunk.
    ///
    /// Chunks that were never materialized produce an empty payload. Positions are
    /// chunk-local; the renderer places the result at the chunk's world origin.
    pub fn build_chunk_geometry(&self, world: &World, chunk: ChunkCoord) -> ChunkGeometry {
        let mut geometry = ChunkGeometry::new();
        if world.get_chunk(chunk).is_none() {
            return geometry;
        }

        let dimension = world.chunk_dimension();
        let origin = world.chunk_origin(chunk);

        // World positions are widened: edge chunks and their neighbors can lie
        // outside the i32 range, where everything reads as EMPTY.
        for y in 0..dimension {
            let voxel_y = origin.y + i64::from(y);
            for z in 0..dimension {
                let voxel_z = origin.z + i64::from(z);
                for x in 0..dimension {
                    let voxel_x = origin.x + i64::from(x);
                    let voxel = world.get_voxel_at(Point3::new(voxel_x, voxel_y, voxel_z));
                    if voxel.is_empty() {
                        continue;
                    }

                    for side in BlockSide::all() {
                        let offset = side.offset();
                        let neighbor = world.get_voxel_at(Point3::new(
                            voxel_x + i64::from(offset.x),
                            voxel_y + i64::from(offset.y),
                            voxel_z + i64::from(offset.z),
                        ));
                        if neighbor.is_empty() {
                            geometry.push_face(&Face::new(x, y, z, voxel, side), &self.atlas);
                        }
                    }
                }
            }
        }

        geometry
    }

    /// Rebuilds a chunk's geometry and uploads it together with its world placement.
    pub fn rebuild_chunk<R: ChunkRenderer + ?Sized>(
        &self,
        world: &World,
        chunk: ChunkCoord,
        renderer: &mut R,
    ) {
        let geometry = self.build_chunk_geometry(world, chunk);
        trace!(
            "Rebuilt chunk {:?}: {} faces",
            chunk,
            geometry.face_count()
        );
        let placement: Point3<i64> = world.chunk_origin(chunk);
        renderer.upload_chunk_geometry(chunk, placement, geometry);
    }
}
