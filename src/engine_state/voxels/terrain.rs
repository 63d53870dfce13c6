//! # Terrain Module
//!
//! Fills a chunk from a smooth height function. The terrain shape is fully
//! determined by the chunk dimension; only the material of each solid voxel is
//! random.

use std::f64::consts::PI;

use cgmath::Point3;
use log::info;

use super::block::block_type::VoxelType;
use super::chunk::ChunkCoord;
use super::world::World;

/// Generates rolling sin-wave terrain one chunk at a time.
pub struct TerrainGenerator {
    rng: fastrand::Rng,
}

impl TerrainGenerator {
    /// Creates a generator backed by a randomly seeded source.
    pub fn new() -> Self {
        TerrainGenerator {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a generator whose material choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        TerrainGenerator {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Height of the terrain surface for a column at local `(x, z)`.
    ///
    /// Voxels with local `y` strictly below this value are solid.
    pub fn column_height(chunk_dimension: i32, x: i32, z: i32) -> f64 {
        let dimension = chunk_dimension as f64;
        ((x as f64 / dimension * PI * 2.0).sin() + (z as f64 / dimension * PI * 3.0).sin())
            * (dimension / 6.0)
            + dimension / 2.0
    }

    /// Fills `chunk` with terrain and returns the number of solid voxels placed.
    ///
    /// The height function is evaluated on local coordinates, so every generated
    /// chunk has the same shape; its voxels are written at the chunk's world offset.
    pub fn generate_chunk(&mut self, world: &mut World, chunk: ChunkCoord) -> usize {
        let dimension = world.chunk_dimension();
        let origin = world.chunk_origin(chunk);
        let mut solid_voxels = 0;

        for y in 0..dimension {
            for z in 0..dimension {
                for x in 0..dimension {
                    let height = Self::column_height(dimension, x, z);
                    if (y as f64) >= height {
                        continue;
                    }
                    let voxel = self.pick_material(y, height);
                    // Slots of an edge chunk that fall outside the i32 range are skipped.
                    let Some(position) = World::voxel_coord(Point3::new(
                        origin.x + i64::from(x),
                        origin.y + i64::from(y),
                        origin.z + i64::from(z),
                    )) else {
                        continue;
                    };
                    world.set_voxel(position.x, position.y, position.z, voxel);
                    solid_voxels += 1;
                }
            }
        }

        info!(
            "Generated chunk {:?} with {} solid voxels",
            chunk, solid_voxels
        );
        solid_voxels
    }

    /// Picks the material for a solid voxel at local height `y`.
    ///
    /// A roll of 1 only stays GRASS on the surface layer (`y == floor(height)`);
    /// below it the roll is turned into DIRT.
    fn pick_material(&mut self, y: i32, height: f64) -> VoxelType {
        let roll: u8 = self.rng.u8(1..=4);
        let index = if roll == 1 && y != height.floor() as i32 {
            2
        } else {
            roll
        };
        VoxelType::from_index(index).unwrap_or(VoxelType::DIRT)
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_height_matches_reference_values() {
        // sin(0) + sin(0) = 0, so the surface sits at half the chunk.
        assert_eq!(TerrainGenerator::column_height(32, 0, 0), 16.0);
        // x = 8 is a quarter turn: sin(pi/2) = 1.
        let h = TerrainGenerator::column_height(32, 8, 0);
        assert!((h - (32.0 / 6.0 + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn solid_voxels_stay_below_the_surface_and_count_matches() {
        let mut world = World::new(16);
        let mut terrain = TerrainGenerator::with_seed(42);
        let placed = terrain.generate_chunk(&mut world, Point3::new(0, 0, 0));

        let mut counted = 0;
        for y in 0..16 {
            for z in 0..16 {
                for x in 0..16 {
                    let height = TerrainGenerator::column_height(16, x, z);
                    let voxel = world.get_voxel(x, y, z);
                    assert_eq!(voxel.is_solid(), (y as f64) < height, "({x},{y},{z})");
                    if voxel == VoxelType::GRASS {
                        assert_eq!(y, height.floor() as i32);
                    }
                    if voxel.is_solid() {
                        counted += 1;
                    }
                }
            }
        }
        assert_eq!(placed, counted);
        assert_eq!(world.solid_voxel_count(), placed);
        assert_eq!(world.chunk_count(), 1);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = World::new(8);
        let mut b = World::new(8);
        TerrainGenerator::with_seed(9).generate_chunk(&mut a, Point3::new(0, 0, 0));
        TerrainGenerator::with_seed(9).generate_chunk(&mut b, Point3::new(0, 0, 0));
        assert_eq!(
            a.get_chunk(Point3::new(0, 0, 0)),
            b.get_chunk(Point3::new(0, 0, 0))
        );
    }

    #[test]
    fn non_origin_chunks_are_written_at_their_offset() {
        let mut world = World::new(8);
        let chunk = Point3::new(-1, 2, 0);
        let placed = TerrainGenerator::with_seed(1).generate_chunk(&mut world, chunk);
        assert!(placed > 0);
        assert_eq!(world.chunk_count(), 1);
        assert_eq!(world.get_chunk(chunk).map(|c| c.solid_count()), Some(placed));
        // Local (0,0,0) is below the surface, so world (-8,16,0) must be solid.
        assert!(world.get_voxel(-8, 16, 0).is_solid());
    }

    #[test]
    fn edge_chunk_only_fills_representable_slots() {
        let mut world = World::new(3);
        // Origin x is i32::MIN - 1, so local x = 0 lies outside the range.
        let chunk = world.chunk_id(i32::MIN, 0, 0);
        let placed = TerrainGenerator::with_seed(4).generate_chunk(&mut world, chunk);

        assert!(placed > 0);
        assert_eq!(world.solid_voxel_count(), placed);
        // Local (1, 0, 0) is world (i32::MIN, 0, 0) and sits below the surface.
        assert!(world.get_voxel(i32::MIN, 0, 0).is_solid());
    }
}
