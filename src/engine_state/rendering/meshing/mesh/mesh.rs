//! Geometry payload produced for one chunk.
//!
//! The payload is four flat, parallel buffers ready to be handed to a graphics API:
//! positions and normals (3 floats per vertex), UVs (2 floats per vertex) and
//! triangle indices (6 per face, two triangles over a shared 4-vertex quad).

use crate::config::AtlasLayout;

use super::face::Face;

/// Number of vertices emitted per face.
pub const VERTICES_PER_FACE: usize = 4;
/// Number of indices emitted per face.
pub const INDICES_PER_FACE: usize = 6;

/// Renderable geometry for a single chunk, in chunk-local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkGeometry {
    /// Vertex positions, three floats per vertex
    pub positions: Vec<f32>,
    /// Vertex normals, three floats per vertex
    pub normals: Vec<f32>,
    /// Atlas texture coordinates, two floats per vertex
    pub uvs: Vec<f32>,
    /// Triangle list, six indices per face
    pub indices: Vec<u32>,
}

impl ChunkGeometry {
    /// Creates a new, empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the payload.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of quads in the payload.
    pub fn face_count(&self) -> usize {
        self.indices.len() / INDICES_PER_FACE
    }

    /// Returns `true` if the chunk has no visible faces.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a face's four vertices and its six indices.
    ///
    /// UVs are mapped from tile space into the atlas: the voxel type selects the
    /// tile column and the face side selects the tile row.
    /// Faces of EMPTY voxels have no tile and are skipped.
    pub fn push_face(&mut self, face: &Face, atlas: &AtlasLayout) {
        let Some(column) = face.voxel_type.tile_column() else {
            return;
        };
        let column = column as f32;
        let row = face.block_side.tile_row() as f32;
        let tile = atlas.tile_size as f32;
        let normal = face.block_side.normal();

        let first_index = self.vertex_count() as u32;

        for (position, uv) in face.positions.iter().zip(face.tile_uvs.iter()) {
            self.positions
                .extend_from_slice(&[position.x, position.y, position.z]);
            self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            self.uvs.extend_from_slice(&[
                (column + uv.x) * tile / atlas.width as f32,
                1.0 - (row + 1.0 - uv.y) * tile / atlas.height as f32,
            ]);
        }

        self.indices
            .extend_from_slice(&Self::generate_face_indices(first_index));
    }

    /// Indices for the two triangles of a quad whose first vertex is `first_index`.
    pub fn generate_face_indices(first_index: u32) -> [u32; INDICES_PER_FACE] {
        [
            first_index,
            first_index + 1,
            first_index + 2,
            first_index + 2,
            first_index + 1,
            first_index + 3,
        ]
    }

    /// Raw bytes of the position buffer, for upload to a vertex buffer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the normal buffer.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Raw bytes of the UV buffer.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Raw bytes of the index buffer, for upload to an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::VoxelType};

    fn reference_atlas() -> AtlasLayout {
        AtlasLayout {
            tile_size: 64,
            width: 256,
            height: 192,
        }
    }

    #[test]
    fn push_face_emits_quad_with_shared_vertices() {
        let mut geometry = ChunkGeometry::new();
        geometry.push_face(
            &Face::new(0, 0, 0, VoxelType::GRASS, BlockSide::TOP),
            &reference_atlas(),
        );
        geometry.push_face(
            &Face::new(0, 0, 0, VoxelType::GRASS, BlockSide::FRONT),
            &reference_atlas(),
        );

        assert_eq!(geometry.vertex_count(), 8);
        assert_eq!(geometry.face_count(), 2);
        assert_eq!(geometry.uvs.len(), 16);
        assert_eq!(geometry.normals.len(), 24);
        assert_eq!(&geometry.indices[6..], &[4, 5, 6, 6, 5, 7]);
    }

    #[test]
    fn uvs_land_in_the_right_atlas_tile() {
        let mut geometry = ChunkGeometry::new();
        // ROCK is column 3; bottom faces use row 2.
        geometry.push_face(
            &Face::new(0, 0, 0, VoxelType::ROCK, BlockSide::BOTTOM),
            &reference_atlas(),
        );
        // First bottom corner has tile uv (1, 0).
        assert_eq!(geometry.uvs[0], (3.0 + 1.0) * 64.0 / 256.0);
        assert_eq!(geometry.uvs[1], 1.0 - (2.0 + 1.0 - 0.0) * 64.0 / 192.0);
        for pair in geometry.uvs.chunks(2) {
            assert!((0.75..=1.0).contains(&pair[0]));
            assert!((-1e-6..=1.0 / 3.0 + 1e-6).contains(&pair[1]));
        }
    }

    #[test]
    fn byte_views_cover_whole_buffers() {
        let mut geometry = ChunkGeometry::new();
        geometry.push_face(
            &Face::new(1, 1, 1, VoxelType::DIRT, BlockSide::LEFT),
            &reference_atlas(),
        );
        assert_eq!(geometry.position_bytes().len(), 12 * 4);
        assert_eq!(geometry.normal_bytes().len(), 12 * 4);
        assert_eq!(geometry.uv_bytes().len(), 8 * 4);
        assert_eq!(geometry.index_bytes().len(), 6 * 4);
    }
}
