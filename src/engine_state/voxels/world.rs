//! # World Module
//!
//! This module provides the `World` struct: the chunk store for the voxel world.
//! All world-to-chunk coordinate math lives here.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been
//! written to are kept in memory. Reading from a chunk that was never written
//! returns `VoxelType::EMPTY` without allocating anything.
//!
//! Chunks are never removed once created.
//!
//! ## Coordinate Range
//!
//! Every `i32` triple is a valid voxel position. When the chunk dimension does
//! not divide 2³², the outermost chunks on each axis reach past the `i32` range.
//! Their origins and neighbor lookups are therefore computed in `i64`, and
//! positions outside `i32` read as `VoxelType::EMPTY`.

use cgmath::Point3;
use log::debug;
use std::collections::HashMap;

use super::block::block_type::VoxelType;
use super::chunk::{local_index, Chunk, ChunkCoord, MAX_CHUNK_DIMENSION};

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use voxel_world::World;
/// use voxel_world::VoxelType;
///
/// let mut world = World::new(4);
/// world.set_voxel(-1, 0, 0, VoxelType::ROCK);
///
/// assert_eq!(world.get_voxel(-1, 0, 0), VoxelType::ROCK);
/// assert_eq!(world.chunk_id(-1, 0, 0), cgmath::Point3::new(-1, 0, 0));
/// assert_eq!(world.get_voxel(3, 0, 0), VoxelType::EMPTY);
/// ```
#[derive(Debug, Clone)]
pub struct World {
    /// Edge length of every chunk, in voxels.
    chunk_dimension: i32,
    /// Slots per chunk (`chunk_dimension³`).
    chunk_volume: usize,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl World {
    /// Creates a new, empty world whose chunks are `chunk_dimension` voxels on a side.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_dimension` is not in `1..=MAX_CHUNK_DIMENSION`. Both
    /// bounds are configuration mistakes, not runtime conditions.
    pub fn new(chunk_dimension: i32) -> Self {
        assert!(
            (1..=MAX_CHUNK_DIMENSION).contains(&chunk_dimension),
            "chunk dimension must be positive and at most {MAX_CHUNK_DIMENSION}, got {chunk_dimension}"
        );
        let chunk_volume = (chunk_dimension as usize).pow(3);

        World {
            chunk_dimension,
            chunk_volume,
            chunks: HashMap::new(),
        }
    }

    /// Edge length of every chunk, in voxels.
    pub fn chunk_dimension(&self) -> i32 {
        self.chunk_dimension
    }

    /// Number of slots in every chunk.
    pub fn chunk_volume(&self) -> usize {
        self.chunk_volume
    }

    /// Number of chunks that have been materialized so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Computes the coordinates of the chunk owning a world position.
    pub fn chunk_id(&self, x: i32, y: i32, z: i32) -> ChunkCoord {
        Point3::new(
            x.div_euclid(self.chunk_dimension),
            y.div_euclid(self.chunk_dimension),
            z.div_euclid(self.chunk_dimension),
        )
    }

    /// World coordinates of a chunk's minimum corner.
    ///
    /// Widened to `i64`: the chunk holding `i32::MIN` can start below it.
    pub fn chunk_origin(&self, chunk: ChunkCoord) -> Point3<i64> {
        let dimension = i64::from(self.chunk_dimension);
        Point3::new(
            i64::from(chunk.x) * dimension,
            i64::from(chunk.y) * dimension,
            i64::from(chunk.z) * dimension,
        )
    }

    /// Narrows a widened position to a voxel position, or `None` if any axis is
    /// outside the `i32` range.
    pub fn voxel_coord(position: Point3<i64>) -> Option<Point3<i32>> {
        Some(Point3::new(
            i32::try_from(position.x).ok()?,
            i32::try_from(position.y).ok()?,
            i32::try_from(position.z).ok()?,
        ))
    }

    /// Floors a point in world space to the integer cell that contains it.
    pub fn voxel_position(point: Point3<f32>) -> Point3<i32> {
        Point3::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }

    /// Retrieves a chunk by its coordinates, if it has been materialized.
    pub fn get_chunk(&self, chunk: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&chunk)
    }

    /// Reads the voxel at a world position.
    ///
    /// Positions inside chunks that were never written read as `VoxelType::EMPTY`.
    pub fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelType {
        match self.chunks.get(&self.chunk_id(x, y, z)) {
            Some(chunk) => chunk.get(local_index(self.chunk_dimension, x, y, z)),
            None => VoxelType::EMPTY,
        }
    }

    /// Reads the voxel at a widened position. Positions outside the `i32` range
    /// hold nothing and read as `VoxelType::EMPTY`.
    pub fn get_voxel_at(&self, position: Point3<i64>) -> VoxelType {
        match Self::voxel_coord(position) {
            Some(p) => self.get_voxel(p.x, p.y, p.z),
            None => VoxelType::EMPTY,
        }
    }

    /// Writes a voxel at a world position, allocating its chunk on first use.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: VoxelType) {
        let chunk_id = self.chunk_id(x, y, z);
        let chunk_volume = self.chunk_volume;
        let chunk = self.chunks.entry(chunk_id).or_insert_with(|| {
            debug!("Allocating chunk {:?}", chunk_id);
            Chunk::empty(chunk_id, chunk_volume)
        });
        chunk.set(local_index(self.chunk_dimension, x, y, z), voxel);
    }

    /// Total number of solid voxels across all materialized chunks.
    pub fn solid_voxel_count(&self) -> usize {
        self.chunks.values().map(Chunk::solid_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips_including_negative_coordinates() {
        let mut world = World::new(4);
        let coords = [
            (0, 0, 0),
            (3, 3, 3),
            (4, 0, 0),
            (-1, -1, -1),
            (-4, 5, -9),
            (-17, 100, 33),
        ];
        for (i, &(x, y, z)) in coords.iter().enumerate() {
            let voxel = VoxelType::SOLID[i % VoxelType::SOLID.len()];
            world.set_voxel(x, y, z, voxel);
            assert_eq!(world.get_voxel(x, y, z), voxel);
        }
        world.set_voxel(-1, -1, -1, VoxelType::EMPTY);
        assert_eq!(world.get_voxel(-1, -1, -1), VoxelType::EMPTY);
    }

    #[test]
    fn chunk_ids_shift_by_k_when_coordinates_shift_by_k_chunks() {
        let world = World::new(4);
        for x in -9..9 {
            for k in -3..3 {
                let base = world.chunk_id(x, x * 2, -x);
                assert_eq!(world.chunk_id(x + 4 * k, x * 2, -x).x, base.x + k);
                assert_eq!(world.chunk_id(x, x * 2 + 4 * k, -x).y, base.y + k);
                assert_eq!(world.chunk_id(x, x * 2, -x + 4 * k).z, base.z + k);
            }
        }
    }

    #[test]
    fn reads_do_not_allocate_chunks() {
        let world = World::new(32);
        for x in -40..40 {
            assert_eq!(world.get_voxel(x, -x, x * 3), VoxelType::EMPTY);
        }
        assert_eq!(world.chunk_count(), 0);
    }

    #[test]
    fn negative_coordinates_wrap_into_the_previous_chunk() {
        let mut world = World::new(4);
        world.set_voxel(-1, 0, 0, VoxelType::ROCK);

        assert_eq!(world.chunk_id(-1, 0, 0), Point3::new(-1, 0, 0));
        assert!(world.get_chunk(Point3::new(-1, 0, 0)).is_some());
        assert_eq!(world.get_voxel(-1, 0, 0), VoxelType::ROCK);
        assert_eq!(world.get_voxel(3, 0, 0), VoxelType::EMPTY);
        assert_eq!(world.chunk_count(), 1);
    }

    #[test]
    fn removing_from_a_missing_chunk_is_harmless() {
        let mut world = World::new(4);
        world.set_voxel(10, 10, 10, VoxelType::EMPTY);
        assert_eq!(world.get_voxel(10, 10, 10), VoxelType::EMPTY);
        assert_eq!(world.solid_voxel_count(), 0);
    }

    #[test]
    fn every_chunk_has_full_volume() {
        let mut world = World::new(3);
        world.set_voxel(0, 0, 0, VoxelType::DIRT);
        world.set_voxel(-7, 2, 8, VoxelType::SAND);
        for chunk in [world.chunk_id(0, 0, 0), world.chunk_id(-7, 2, 8)] {
            assert_eq!(world.get_chunk(chunk).map(Chunk::len), Some(27));
        }
    }

    #[test]
    fn voxel_position_floors_toward_negative_infinity() {
        assert_eq!(
            World::voxel_position(Point3::new(-0.5, 0.5, 1.0)),
            Point3::new(-1, 0, 1)
        );
    }

    #[test]
    fn edge_chunks_extend_past_the_i32_range() {
        let world = World::new(3);
        let low = world.chunk_id(i32::MIN, 0, 0);
        assert_eq!(world.chunk_origin(low).x, i64::from(i32::MIN) - 1);
        let high = world.chunk_id(i32::MAX, 0, 0);
        assert_eq!(world.chunk_origin(high).x, i64::from(i32::MAX) - 1);

        let outside = Point3::new(i64::from(i32::MAX) + 1, 0, 0);
        assert_eq!(World::voxel_coord(outside), None);
        assert_eq!(world.get_voxel_at(outside), VoxelType::EMPTY);
        assert_eq!(
            World::voxel_coord(Point3::new(-5, 6, i64::from(i32::MIN))),
            Some(Point3::new(-5, 6, i32::MIN))
        );
    }

    #[test]
    #[should_panic(expected = "chunk dimension must be positive")]
    fn zero_dimension_is_rejected() {
        let _ = World::new(0);
    }

    #[test]
    #[should_panic(expected = "at most")]
    fn oversized_dimension_is_rejected() {
        let _ = World::new(MAX_CHUNK_DIMENSION + 1);
    }
}
