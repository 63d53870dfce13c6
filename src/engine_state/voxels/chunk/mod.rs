//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense, fixed-size cube of voxel slots.
//!
//! ## Storage
//!
//! Each chunk keeps two views of its contents that are always updated together:
//! - `voxels`: one `VoxelType` per slot, `dimension³` entries
//! - `solid_array`: a bit vector (1 bit per slot) marking non-empty slots
//!
//! The bit vector gives O(1) solidity checks and lets the chunk report how many
//! solid voxels it holds without scanning the slot array.
//!
//! ## Slot Layout
//!
//! Slots are addressed by a local linear index:
//!
//! ```text
//! index = local_x + local_y * dimension² + local_z * dimension
//! ```
//!
//! Y uses the plane stride and Z the row stride. Generation, storage and meshing
//! all go through [`local_index`], so the layout only has to be consistent with itself.

use bitvec::prelude::BitVec;
use cgmath::Point3;

use super::block::block_type::VoxelType;

/// The reference dimension (width, height, depth) of a chunk in voxels.
pub const CHUNK_DIMENSION: i32 = 32;

/// Largest supported chunk dimension.
///
/// A chunk of this size still has every vertex of its worst-case mesh (six faces
/// of four vertices per slot) addressable by a `u32` index.
pub const MAX_CHUNK_DIMENSION: i32 = 512;

/// Identifies a chunk by the floor-division of world coordinates by the chunk dimension.
pub type ChunkCoord = Point3<i32>;

/// Computes the local linear index of a world coordinate inside its chunk.
///
/// Each axis is reduced with a Euclidean modulo first, so negative world
/// coordinates land in `[0, dimension)` like positive ones.
pub fn local_index(dimension: i32, x: i32, y: i32, z: i32) -> usize {
    let local_x = x.rem_euclid(dimension) as usize;
    let local_y = y.rem_euclid(dimension) as usize;
    let local_z = z.rem_euclid(dimension) as usize;
    let dimension = dimension as usize;
    local_x + local_y * dimension * dimension + local_z * dimension
}

/// A cube of `dimension³` voxel slots.
///
/// Chunks are owned by the [`World`](super::world::World) and created lazily on the
/// first write that falls inside their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not voxel coordinates).
    pub position: ChunkCoord,

    /// One slot per voxel, in local index order.
    voxels: Vec<VoxelType>,

    /// One bit per slot, set when the slot holds a non-empty voxel.
    solid_array: BitVec,
}

impl Chunk {
    /// Creates a new chunk with every slot set to `VoxelType::EMPTY`.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `volume` - Number of slots, i.e. the chunk dimension cubed
    pub fn empty(position: ChunkCoord, volume: usize) -> Self {
        Chunk {
            position,
            voxels: vec![VoxelType::EMPTY; volume],
            solid_array: BitVec::repeat(false, volume),
        }
    }

    /// Number of slots in this chunk.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns `true` if no slot holds a solid voxel.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }

    /// Gets the voxel stored at a local index.
    ///
    /// # Panics
    /// Panics if `index` is outside the chunk.
    pub fn get(&self, index: usize) -> VoxelType {
        self.voxels[index]
    }

    /// Overwrites the voxel at a local index and returns what was there before.
    ///
    /// # Panics
    /// Panics if `index` is outside the chunk.
    pub fn set(&mut self, index: usize, voxel: VoxelType) -> VoxelType {
        let previous = std::mem::replace(&mut self.voxels[index], voxel);
        self.solid_array.set(index, voxel.is_solid());
        previous
    }

    /// Checks whether the slot at a local index holds a solid voxel.
    pub fn is_block_solid(&self, index: usize) -> bool {
        self.solid_array[index]
    }

    /// Number of solid voxels in this chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }
}
